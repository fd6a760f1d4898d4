//---------------------------------------------------------------------------------------------------- Use
use crossbeam::channel::Sender;

//---------------------------------------------------------------------------------------------------- Callback
/// A completion notification.
///
/// The list never invents a delivery context: callbacks run
/// on whatever thread called [`SparseList::poll`], right after
/// the associated fetch response has been applied.
///
/// [`SparseList::poll`]: crate::SparseList::poll
pub enum Callback<Msg>
where
	Msg: Send + 'static,
{
	/// Dynamically dispatched function
	Dynamic(Box<dyn FnMut(&Msg) + Send + 'static>),
	/// Channel message
	Channel(Sender<Msg>),
	/// Function pointer
	Pointer(fn(&Msg)),
}

//---------------------------------------------------------------------------------------------------- Callback Impl
impl<Msg> Callback<Msg>
where
	Msg: Send + 'static,
{
	#[inline]
	/// "Call" a [`Callback`].
	///
	/// If [`Self`] is [`Callback::Dynamic`] or [`Callback::Pointer`],
	/// it will execute that function with `msg`.
	///
	/// If [`Self`] is [`Callback::Channel`], it will send `msg`
	/// down the channel; send errors are ignored.
	pub(crate) fn call(&mut self, msg: Msg) {
		match self {
			Self::Dynamic(x) => { x(&msg); },
			Self::Channel(x) => { let _ = x.try_send(msg); },
			Self::Pointer(x) => { x(&msg); },
		}
	}
}

//---------------------------------------------------------------------------------------------------- Callback Trait Impl
impl<Msg> std::fmt::Debug for Callback<Msg>
where
	Msg: Send + 'static,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Dynamic(_) => write!(f, "Callback::Dynamic"),
			Self::Channel(_) => write!(f, "Callback::Channel"),
			Self::Pointer(_) => write!(f, "Callback::Pointer"),
		}
	}
}
