//---------------------------------------------------------------------------------------------------- Use
use crate::{
	error::SourceError,
	item::ValidItem,
};
use std::ops::Range;

#[allow(unused_imports)] // docs
use crate::list::SparseList;

//---------------------------------------------------------------------------------------------------- DataSource
/// External provider of a total count and ranged item fetches.
///
/// A [`SparseList`] owns exactly one of these and moves it onto a
/// dedicated fetch thread at construction; both methods are only
/// ever called from that thread, never from the list owner's context.
///
/// Implementations must tolerate repeated and overlapping `fetch`
/// calls for the same indices.
pub trait DataSource<Item: ValidItem>: Send {
	/// The number of items currently provided.
	///
	/// This should be cheap (or cached) — it is re-queried after
	/// every fetch to refresh the list's total count, and the total
	/// is allowed to change between calls (e.g. a live playlist).
	fn item_count(&mut self) -> Result<usize, SourceError>;

	/// Fetch the items at `range`, in range order.
	///
	/// `range` is already batch-expanded and clamped by the list;
	/// if the source has shrunk since, it should return the items
	/// that still exist rather than erroring.
	fn fetch(&mut self, range: Range<usize>) -> Result<Vec<Item>, SourceError>;
}
