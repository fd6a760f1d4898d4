//---------------------------------------------------------------------------------------------------- Use
use crate::{
	error::SourceError,
	item::ValidItem,
	list::Ticket,
	macros::{debug2,warn2,trace2,unreachable2},
	source::DataSource,
};
use crossbeam::channel::{Receiver,Sender,Select,TryRecvError};
use std::{
	ops::Range,
	thread::JoinHandle,
};

//---------------------------------------------------------------------------------------------------- Msg
// A batch-expanded, clamped range the list wants loaded.
pub(crate) struct FetchRequest {
	pub(crate) ticket: Ticket,
	pub(crate) range:  Range<usize>,
}

// The answer to one [FetchRequest].
//
// [total] is the data source's item count as of just after the
// fetch, [None] if re-counting itself failed (the list then keeps
// the total it already has).
pub(crate) struct FetchResponse<Item: ValidItem> {
	pub(crate) ticket: Ticket,
	pub(crate) range:  Range<usize>,
	pub(crate) result: Result<Vec<Item>, SourceError>,
	pub(crate) total:  Option<usize>,
}

//---------------------------------------------------------------------------------------------------- Fetch
// The actor owning the [DataSource].
//
// All data source calls happen on this thread; the owning list
// only ever talks to it through the channels below.
pub(crate) struct Fetch<Item, Src>
where
	Item: ValidItem,
	Src:  DataSource<Item>,
{
	pub(crate) source:    Src,
	pub(crate) shutdown:  Receiver<()>,
	pub(crate) from_list: Receiver<FetchRequest>,
	pub(crate) to_list:   Sender<FetchResponse<Item>>,
}

//---------------------------------------------------------------------------------------------------- Fetch Impl
impl<Item, Src> Fetch<Item, Src>
where
	Item: ValidItem,
	Src:  DataSource<Item> + 'static,
{
	//---------------------------------------------------------------------------------------------------- Init
	#[cold]
	#[inline(never)]
	pub(crate) fn init(self) -> Result<JoinHandle<()>, std::io::Error> {
		std::thread::Builder::new()
			.name("Fetch".into())
			.spawn(move || Fetch::main(self))
	}

	//---------------------------------------------------------------------------------------------------- Main Loop
	#[cold]
	#[inline(never)]
	fn main(mut self) {
		let mut select = Select::new();

		let from_list = self.from_list.clone();
		let shutdown  = self.shutdown.clone();
		assert_eq!(0, select.recv(&from_list));
		assert_eq!(1, select.recv(&shutdown));

		// Loop, serving fetch requests until told
		// to stop (or until the list is simply gone).
		//
		// `ready()` can wake spuriously, so every arm
		// re-checks its channel with a `try_recv`.
		loop {
			match select.ready() {
				0 => match self.from_list.try_recv() {
					Ok(request) => self.serve(request),
					Err(TryRecvError::Empty) => {},
					// The list was dropped without a shutdown
					// message reaching us first.
					Err(TryRecvError::Disconnected) => {
						debug2!("Fetch - list disconnected, shutting down");
						return;
					},
				},

				1 => match self.shutdown.try_recv() {
					Err(TryRecvError::Empty) => {},
					// Exit loop (thus, the thread).
					// Pending requests are dropped alongside us.
					Ok(()) | Err(TryRecvError::Disconnected) => {
						debug2!("Fetch - shutting down");
						return;
					},
				},

				_ => unreachable2!(),
			}
		}
	}

	//---------------------------------------------------------------------------------------------------- Serve
	fn serve(&mut self, request: FetchRequest) {
		let FetchRequest { ticket, range } = request;

		trace2!("Fetch - ticket {ticket}: fetching [{}..{})", range.start, range.end);

		let result = self.source.fetch(range.clone());

		#[allow(unused_variables)]
		if let Err(error) = &result {
			warn2!("Fetch - ticket {ticket}: data source error: {error}");
		}

		// Refresh the total on every response, even failed ones.
		let total = self.source.item_count().ok();

		// The list may already be gone by the time we
		// answer; the completion is then a no-op.
		let _ = self.to_list.send(FetchResponse {
			ticket,
			range,
			result,
			total,
		});
	}
}
