//---------------------------------------------------------------------------------------------------- Use
use crate::{
	actor::fetch::{Fetch,FetchRequest,FetchResponse},
	config::{Callback,Config,LoadPolicy},
	error::SourceError,
	item::ValidItem,
	list::{LoadComplete,Ticket},
	macros::{debug2,info2,try_send},
	source::DataSource,
};
use crossbeam::channel::{bounded,unbounded};
use std::{
	collections::HashMap,
	num::NonZeroUsize,
	time::Duration,
};

// Prevent collision with generics.
use crossbeam::channel::Sender as S;
use crossbeam::channel::Receiver as R;

//---------------------------------------------------------------------------------------------------- SparseList
/// An index-addressable, partially-populated ordered list backed
/// by an external paged [`DataSource`].
///
/// The data source is moved onto a dedicated fetch thread at
/// construction. [`load_range`](SparseList::load_range) sends it a
/// batch-expanded request and returns immediately; the results (and
/// the completion [`Callback`]) are only applied/fired when the owner
/// calls [`poll`](SparseList::poll) or
/// [`poll_timeout`](SparseList::poll_timeout) from its own context.
///
/// All methods assume single-writer semantics: reads and writes
/// are expected to happen from one logical thread, and serializing
/// access is the caller's responsibility — the list holds no locks.
pub struct SparseList<Item>
where
	Item: ValidItem,
{
	/// Resident items; absent key == not loaded.
	pub(super) slots: HashMap<usize, Item>,
	/// Data-source-reported logical length.
	pub(super) total: usize,
	/// Minimum fetch granularity.
	pub(super) batch_size: NonZeroUsize,

	/// Ticket counter for [load_range].
	pub(super) next_ticket: u64,
	/// Requests sent but not yet applied by [poll].
	pub(super) in_flight: usize,
	/// Completion callbacks keyed by ticket.
	pub(super) callbacks: HashMap<Ticket, Callback<LoadComplete>>,
	/// Fired when a fetch response changes [total].
	pub(super) total_changed: Option<Callback<usize>>,

	/// Requests out to the [Fetch] actor.
	pub(super) to_fetch: S<FetchRequest>,
	/// Responses back from the [Fetch] actor.
	pub(super) from_fetch: R<FetchResponse<Item>>,
	/// Tells the [Fetch] actor to exit.
	pub(super) shutdown: S<()>,
}

//---------------------------------------------------------------------------------------------------- Init
impl<Item> SparseList<Item>
where
	Item: ValidItem,
{
	#[cold]
	#[inline(never)]
	/// Create a [`SparseList`] over `source`.
	///
	/// Immediately queries [`DataSource::item_count`] to seed the
	/// total, then spawns the fetch thread and hands `source` to it.
	/// With [`LoadPolicy::Immediate`], the first batch is requested
	/// right away (with no completion callback).
	///
	/// # Errors
	/// Fails only if the data source itself fails the initial
	/// count, or if the fetch thread cannot be spawned.
	pub fn init<Src>(mut source: Src, config: Config) -> Result<Self, SourceError>
	where
		Src: DataSource<Item> + 'static,
	{
		info2!("SparseList - initializing...");
		debug2!("SparseList - config: {config:?}");

		let total = source.item_count()?;

		let (to_fetch,  from_list)  = unbounded::<FetchRequest>();
		let (to_list,   from_fetch) = unbounded::<FetchResponse<Item>>();
		let (shutdown,  shutdown_recv) = bounded::<()>(1);

		Fetch {
			source,
			shutdown: shutdown_recv,
			from_list,
			to_list,
		}.init()?;

		let mut this = Self {
			slots: HashMap::new(),
			total,
			batch_size: config.batch_size,
			next_ticket: 0,
			in_flight: 0,
			callbacks: HashMap::new(),
			total_changed: config.total_changed,
			to_fetch,
			from_fetch,
			shutdown,
		};

		// Prime the first batch if asked to.
		if config.load_policy == LoadPolicy::Immediate && this.total > 0 {
			let range  = 0..this.total.min(this.batch_size.get());
			let ticket = this.take_ticket();
			this.in_flight += 1;
			debug2!("SparseList - priming ticket {ticket}: [{}..{})", range.start, range.end);
			try_send!(this.to_fetch, FetchRequest { ticket, range });
		}

		Ok(this)
	}
}

//---------------------------------------------------------------------------------------------------- Count
impl<Item> SparseList<Item>
where
	Item: ValidItem,
{
	#[must_use]
	/// The total number of logical items, loaded and unloaded.
	///
	/// Refreshed by every applied fetch response — the data
	/// source may shrink or grow between accesses. O(1).
	pub const fn count(&self) -> usize {
		self.total
	}

	#[must_use]
	/// `count() == 0`.
	pub const fn is_empty(&self) -> bool {
		self.total == 0
	}

	#[must_use]
	/// The fetch granularity fixed at construction.
	pub const fn batch_size(&self) -> NonZeroUsize {
		self.batch_size
	}
}

//---------------------------------------------------------------------------------------------------- Poll
impl<Item> SparseList<Item>
where
	Item: ValidItem,
{
	/// Apply every fetch response that has already arrived.
	///
	/// Slots are overwritten with the fetched items (in request
	/// order), the total is refreshed, then each response's
	/// completion [`Callback`] fires — on this thread, which is
	/// how completions get delivered back onto the owner's
	/// designated context.
	///
	/// Returns how many responses were applied. Never blocks.
	pub fn poll(&mut self) -> usize {
		let mut applied = 0;

		while let Ok(response) = self.from_fetch.try_recv() {
			self.apply(response);
			applied += 1;
		}

		applied
	}

	/// Like [`poll`](SparseList::poll), but waits up to `timeout`
	/// for outstanding requests to answer.
	///
	/// Returns as soon as nothing is in flight (or the fetch
	/// thread is gone). Returns how many responses were applied.
	pub fn poll_timeout(&mut self, timeout: Duration) -> usize {
		let deadline = std::time::Instant::now() + timeout;
		let mut applied = self.poll();

		while self.in_flight > 0 {
			match self.from_fetch.recv_deadline(deadline) {
				Ok(response) => {
					self.apply(response);
					applied += 1;
				},
				// Timeout or disconnect.
				Err(_) => break,
			}
		}

		applied
	}

	/// How many requests have been sent but not yet applied.
	pub const fn in_flight(&self) -> usize {
		self.in_flight
	}

	//---------------------------------------------------------------------------------------------------- Apply
	// Apply one fetch response to the slots and fire its callback.
	//
	// INVARIANT:
	// The last response applied for a given index wins; overlapping
	// in-flight fetches are allowed and must not corrupt state.
	fn apply(&mut self, response: FetchResponse<Item>) {
		let FetchResponse { ticket, range, result, total } = response;

		self.in_flight = self.in_flight.saturating_sub(1);

		// The total is refreshed on every response,
		// before items are attributed to indices.
		if let Some(total) = total {
			self.set_total(total);
		}

		let result = match result {
			Ok(items) => {
				// Items map onto the requested range in request
				// order; anything past the (possibly shrunken)
				// total or past the requested range is dropped.
				let mut index = range.start;
				for item in items {
					if index >= self.total || index >= range.end {
						break;
					}
					self.slots.insert(index, item);
					index += 1;
				}
				Ok(range.start..index)
			},
			// Failed loads leave the slots untouched.
			Err(error) => Err(error),
		};

		if let Some(mut callback) = self.callbacks.remove(&ticket) {
			callback.call(LoadComplete { ticket, result });
		}
	}

	// Refresh the total, clamping away residents
	// that are no longer addressable.
	fn set_total(&mut self, total: usize) {
		if total == self.total {
			return;
		}

		debug2!("SparseList - total changed: {} -> {total}", self.total);

		if total < self.total {
			self.slots.retain(|&index, _| index < total);
		}
		self.total = total;

		if let Some(callback) = &mut self.total_changed {
			callback.call(total);
		}
	}

	//---------------------------------------------------------------------------------------------------- Ticket
	pub(super) fn take_ticket(&mut self) -> Ticket {
		let ticket = Ticket(self.next_ticket);
		self.next_ticket += 1;
		ticket
	}
}

//---------------------------------------------------------------------------------------------------- Drop
impl<Item> Drop for SparseList<Item>
where
	Item: ValidItem,
{
	#[cold]
	#[inline(never)]
	fn drop(&mut self) {
		// Tell [Fetch] to shutdown, without waiting for it.
		// An in-flight fetch completing after this point sends
		// into a dropped channel, which it ignores.
		let _ = self.shutdown.try_send(());
		info2!("SparseList - async shutdown ... OK");
	}
}

//---------------------------------------------------------------------------------------------------- Trait Impl
impl<Item> std::fmt::Debug for SparseList<Item>
where
	Item: ValidItem,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SparseList")
			.field("total",      &self.total)
			.field("batch_size", &self.batch_size)
			.field("resident",   &self.slots.len())
			.field("in_flight",  &self.in_flight)
			.finish_non_exhaustive()
	}
}
