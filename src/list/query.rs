//---------------------------------------------------------------------------------------------------- Use
use crate::{
	item::ValidItem,
	list::SparseList,
};
use std::{
	collections::BTreeSet,
	ops::Range,
};

//---------------------------------------------------------------------------------------------------- Access
impl<Item> SparseList<Item>
where
	Item: ValidItem,
{
	#[must_use]
	/// The item at `index`, or `None` if it isn't loaded yet.
	///
	/// An in-range but unfetched index is not an error.
	///
	/// # Panics
	/// Panics if `index >= count()` — a contract
	/// violation, never silently clamped.
	pub fn get(&self, index: usize) -> Option<&Item> {
		assert!(
			index < self.total,
			"index out of bounds: the count is {} but the index is {index}",
			self.total,
		);
		self.slots.get(&index)
	}

	#[must_use]
	/// The items at `indexes`, positionally.
	///
	/// Each entry is independently `None` if not loaded.
	///
	/// # Panics
	/// Panics if any index is `>= count()`.
	pub fn get_indexes(&self, indexes: &[usize]) -> Vec<Option<Item>> {
		indexes.iter().map(|&index| self.get(index).cloned()).collect()
	}

	#[must_use]
	/// The item at `count() - 1`.
	///
	/// `None` if the list is empty or the last item isn't loaded.
	pub fn last(&self) -> Option<&Item> {
		match self.total {
			0 => None,
			t => self.slots.get(&(t - 1)),
		}
	}

	#[must_use]
	/// Does any loaded item equal `item`?
	///
	/// O(resident count); unloaded slots never match.
	pub fn contains(&self, item: &Item) -> bool {
		self.slots.values().any(|resident| resident == item)
	}

	#[must_use]
	/// The lowest loaded index whose item equals `item`,
	/// or `None` if no loaded item matches.
	pub fn index_of(&self, item: &Item) -> Option<usize> {
		self.slots
			.iter()
			.filter(|(_, resident)| *resident == item)
			.map(|(&index, _)| index)
			.min()
	}
}

//---------------------------------------------------------------------------------------------------- Loaded
impl<Item> SparseList<Item>
where
	Item: ValidItem,
{
	#[must_use]
	/// Exactly the set of indices currently loaded.
	pub fn loaded_indexes(&self) -> BTreeSet<usize> {
		self.slots.keys().copied().collect()
	}

	#[must_use]
	/// Every loaded item, in ascending index order.
	pub fn loaded_objects(&self) -> Vec<Item> {
		self.loaded_indexes()
			.into_iter()
			.filter_map(|index| self.slots.get(&index).cloned())
			.collect()
	}

	#[must_use]
	/// The loaded items within `range`, in ascending index order.
	///
	/// No fetch is triggered; unloaded indices are skipped.
	///
	/// # Panics
	/// Panics if `range.start > range.end` or `range.end > count()`.
	pub fn loaded_objects_in_range(&self, range: Range<usize>) -> Vec<Item> {
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

		range.filter_map(|index| self.slots.get(&index).cloned()).collect()
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use crate::config::Callback;
	use crate::tests::TIMEOUT;
	use pretty_assertions::assert_eq;

	#[test]
	fn get_distinguishes_unloaded_from_loaded() {
		let (mut list, _source) = crate::tests::init(25, 10);

		list.load_range(3..5, Callback::Pointer(|_| {}));
		list.poll_timeout(TIMEOUT);

		assert_eq!(list.get(9), Some(&9)); // loaded
		assert_eq!(list.get(12), None);    // in range, unfetched: not an error
	}

	#[test]
	#[should_panic(expected = "index out of bounds")]
	fn get_past_count_panics() {
		let (list, _source) = crate::tests::init(25, 10);
		let _ = list.get(30);
	}

	#[test]
	fn get_indexes_is_positional() {
		let (mut list, _source) = crate::tests::init(25, 10);

		list.load_range(0..5, Callback::Pointer(|_| {}));
		list.poll_timeout(TIMEOUT);

		assert_eq!(
			list.get_indexes(&[0, 12, 3, 24]),
			[Some(0), None, Some(3), None],
		);
	}

	#[test]
	fn last_is_count_minus_one() {
		let (mut list, _source) = crate::tests::init(25, 10);
		assert_eq!(list.last(), None); // unpopulated

		list.load_range(24..25, Callback::Pointer(|_| {}));
		list.poll_timeout(TIMEOUT);
		assert_eq!(list.last(), Some(&24));

		let (empty, _source) = crate::tests::init(0, 10);
		assert_eq!(empty.last(), None); // count() == 0
	}

	#[test]
	fn equality_scans_cover_residents_only() {
		let (mut list, _source) = crate::tests::init(25, 10);

		list.load_range(0..10, Callback::Pointer(|_| {}));
		list.poll_timeout(TIMEOUT);

		assert!(list.contains(&3));
		assert_eq!(list.index_of(&7), Some(7));

		// 20 exists in the data source but isn't resident.
		assert!(!list.contains(&20));
		assert_eq!(list.index_of(&20), None);
	}

	#[test]
	fn index_of_returns_lowest_match() {
		let source = crate::source::VecSource::new(vec![1_usize, 1, 2]);
		let mut list = crate::list::SparseList::init(source, crate::tests::config(3)).unwrap();

		list.load_range(0..3, Callback::Pointer(|_| {}));
		list.poll_timeout(TIMEOUT);

		assert_eq!(list.index_of(&1), Some(0));
		assert_eq!(list.index_of(&2), Some(2));
	}

	#[test]
	fn loaded_queries_track_slots_exactly() {
		let (mut list, _source) = crate::tests::init(25, 10);

		list.load_range(10..20, Callback::Pointer(|_| {}));
		list.poll_timeout(TIMEOUT);
		list.unload_range(12..14);

		let expected: Vec<usize> = (10..12).chain(14..20).collect();
		assert_eq!(list.loaded_indexes(), expected.iter().copied().collect());
		assert_eq!(list.loaded_objects(), expected);

		// Range query skips unloaded indices, no fetch triggered.
		assert_eq!(list.loaded_objects_in_range(0..15), [10, 11, 14]);
		assert_eq!(list.in_flight(), 0);
	}

	#[test]
	#[should_panic(expected = "invalid range")]
	fn loaded_objects_in_range_checks_bounds() {
		let (list, _source) = crate::tests::init(25, 10);
		let _ = list.loaded_objects_in_range(0..26);
	}
}
