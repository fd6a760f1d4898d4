//---------------------------------------------------------------------------------------------------- Use
use crate::{
	actor::fetch::FetchRequest,
	config::Callback,
	error::SourceError,
	item::ValidItem,
	list::{range,SparseList},
	macros::{trace2,try_send},
};
use std::ops::Range;

//---------------------------------------------------------------------------------------------------- Ticket
/// Identifies one [`SparseList::load_range`] request.
///
/// Unique per list for its lifetime; echoed back
/// in the matching [`LoadComplete`].
#[derive(Copy,Clone,Debug,PartialEq,Eq,PartialOrd,Ord,Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticket(pub(crate) u64);

impl std::fmt::Display for Ticket {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

//---------------------------------------------------------------------------------------------------- LoadComplete
/// The completion message for one [`SparseList::load_range`] request.
#[derive(Debug)]
pub struct LoadComplete {
	/// The ticket [`SparseList::load_range`] returned.
	pub ticket: Ticket,
	/// On success, the batch-expanded range whose slots were
	/// (over)written. On failure, the data source's error —
	/// no slot was touched.
	pub result: Result<Range<usize>, SourceError>,
}

//---------------------------------------------------------------------------------------------------- Load
impl<Item> SparseList<Item>
where
	Item: ValidItem,
{
	/// Request that `range` be loaded from the data source.
	///
	/// The range is expanded outward to the nearest
	/// [`batch_size`](SparseList::batch_size) multiples (clamped to
	/// `[0, count())`) and fetched in one request, so small/frequent
	/// loads coalesce. On success every slot in the expanded range is
	/// overwritten with the returned item, replacing previously loaded
	/// items at those indices even if unchanged.
	///
	/// This only sends the request; nothing is visible (and `callback`
	/// does not fire) until a later [`poll`](SparseList::poll) applies
	/// the response. Overlapping in-flight loads are allowed — the
	/// last response applied to an index wins.
	///
	/// # Panics
	/// Panics if `range.start > range.end` or
	/// `range.end > count()` — a contract violation,
	/// never silently clamped.
	pub fn load_range(&mut self, range: Range<usize>, callback: Callback<LoadComplete>) -> Ticket {
		assert!(
			range.start <= range.end,
			"invalid range: start ({}) > end ({})",
			range.start, range.end,
		);
		assert!(
			range.end <= self.total,
			"invalid range: end ({}) > count ({})",
			range.end, self.total,
		);

		let expanded = range::expand(range, self.batch_size, self.total);
		let ticket   = self.take_ticket();

		trace2!("SparseList - ticket {ticket}: loading [{}..{})", expanded.start, expanded.end);

		self.callbacks.insert(ticket, callback);
		self.in_flight += 1;
		try_send!(self.to_fetch, FetchRequest { ticket, range: expanded });

		ticket
	}
}

//---------------------------------------------------------------------------------------------------- Unload
impl<Item> SparseList<Item>
where
	Item: ValidItem,
{
	/// Evict the resident items at `range`.
	///
	/// Indices in `range` that aren't loaded are unaffected, as is
	/// everything else — the total count does not change and no
	/// fetch is triggered. Synchronous, O(`range` length).
	pub fn unload_range(&mut self, range: Range<usize>) {
		for index in range {
			self.slots.remove(&index);
		}
	}

	/// Evict the resident items at `indexes`.
	///
	/// Same semantics as [`unload_range`](SparseList::unload_range).
	pub fn unload_indexes(&mut self, indexes: &[usize]) {
		for index in indexes {
			self.slots.remove(index);
		}
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::TIMEOUT;
	use pretty_assertions::assert_eq;

	#[test]
	// `batch_size` 10, `count()` 25: loading [3..5) expands
	// to [0..10) and populates exactly those 10 slots.
	fn load_expands_to_batch() {
		let (mut list, _source) = crate::tests::init(25, 10);

		let (send, recv) = crossbeam::channel::unbounded();
		let ticket = list.load_range(3..5, Callback::Channel(send));
		assert_eq!(list.in_flight(), 1);

		assert_eq!(list.poll_timeout(TIMEOUT), 1);
		assert_eq!(list.in_flight(), 0);

		// The completion landed on our context, after the slots.
		let complete = recv.try_recv().unwrap();
		assert_eq!(complete.ticket, ticket);
		assert_eq!(complete.result.unwrap(), 0..10);

		// Every slot in the expanded range equals the
		// item the data source returned for it.
		for index in 0..10 {
			assert_eq!(list.get(index), Some(&index));
		}
		assert_eq!(list.get(12), None);
		assert_eq!(list.loaded_indexes(), (0..10).collect());
	}

	#[test]
	fn unload_partitions_residents() {
		let (mut list, _source) = crate::tests::init(25, 10);

		list.load_range(3..5, Callback::Pointer(|_| {}));
		list.poll_timeout(TIMEOUT);

		// [0..5) evicted, [5..10) untouched.
		list.unload_range(0..5);
		for index in 0..5 {
			assert_eq!(list.get(index), None);
		}
		for index in 5..10 {
			assert_eq!(list.get(index), Some(&index));
		}
		assert_eq!(list.count(), 25); // eviction never changes the total

		// Evicting already-unloaded indices is a no-op.
		list.unload_indexes(&[0, 1, 7]);
		assert_eq!(list.loaded_indexes(), [5, 6, 8, 9].into_iter().collect());
	}

	#[test]
	// Loading the same range twice against a stable data
	// source yields identical resident contents.
	fn reload_is_idempotent() {
		let (mut list, _source) = crate::tests::init(25, 10);

		list.load_range(0..10, Callback::Pointer(|_| {}));
		list.poll_timeout(TIMEOUT);
		let first = list.loaded_objects();

		list.load_range(0..10, Callback::Pointer(|_| {}));
		list.poll_timeout(TIMEOUT);

		assert_eq!(list.loaded_objects(), first);
		assert_eq!(list.loaded_indexes(), (0..10).collect());
	}

	#[test]
	// A successful load replaces already-loaded items, so a
	// changed backing store is re-read, not merged.
	fn reload_replaces_loaded_items() {
		let (mut list, source) = crate::tests::init(5, 5);

		list.load_range(0..5, Callback::Pointer(|_| {}));
		list.poll_timeout(TIMEOUT);
		assert_eq!(list.loaded_objects(), [0, 1, 2, 3, 4]);

		source.replace(vec![10, 11, 12, 13, 14]);
		list.load_range(0..5, Callback::Pointer(|_| {}));
		list.poll_timeout(TIMEOUT);
		assert_eq!(list.loaded_objects(), [10, 11, 12, 13, 14]);
	}

	#[test]
	// A failed fetch leaves every slot untouched but still
	// completes, carrying the data source's error.
	fn failed_load_reports_and_leaves_slots() {
		let mut list = SparseList::<usize>::init(
			crate::tests::FailSource { count: 25 },
			crate::tests::config(10),
		).unwrap();

		let (send, recv) = crossbeam::channel::unbounded();
		list.load_range(3..5, Callback::Channel(send));
		assert_eq!(list.poll_timeout(TIMEOUT), 1);

		let complete = recv.try_recv().unwrap();
		assert!(matches!(complete.result, Err(SourceError::Failed(_))));
		assert!(list.loaded_indexes().is_empty());

		// Retry is just re-issuing the load.
		list.load_range(3..5, Callback::Pointer(|_| {}));
		assert_eq!(list.poll_timeout(TIMEOUT), 1);
		assert!(list.loaded_indexes().is_empty());
	}

	#[test]
	fn overlapping_loads_last_wins() {
		let (mut list, _source) = crate::tests::init(25, 10);

		// Two in-flight loads over the same indices; the actor
		// serves them in order and both get applied cleanly.
		list.load_range(0..10, Callback::Pointer(|_| {}));
		list.load_range(5..15, Callback::Pointer(|_| {}));
		assert_eq!(list.in_flight(), 2);
		assert_eq!(list.poll_timeout(TIMEOUT), 2);

		assert_eq!(list.loaded_indexes(), (0..20).collect());
		for index in 0..20 {
			assert_eq!(list.get(index), Some(&index));
		}
	}

	#[test]
	#[should_panic(expected = "invalid range")]
	fn load_past_count_panics() {
		let (mut list, _source) = crate::tests::init(25, 10);
		list.load_range(20..30, Callback::Pointer(|_| {}));
	}

	#[test]
	#[should_panic(expected = "invalid range")]
	fn load_backwards_range_panics() {
		let (mut list, _source) = crate::tests::init(25, 10);
		#[allow(clippy::reversed_empty_ranges)]
		list.load_range(5..3, Callback::Pointer(|_| {}));
	}
}
