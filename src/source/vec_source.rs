//---------------------------------------------------------------------------------------------------- Use
use crate::{
	error::SourceError,
	item::ValidItem,
	source::DataSource,
};
use std::{
	ops::Range,
	sync::{Arc,Mutex},
};

//---------------------------------------------------------------------------------------------------- VecSource
/// An in-memory [`DataSource`] backed by a shared `Vec`.
///
/// Cloning is cheap and every clone observes the same backing
/// store, so one handle can be moved into a list while another
/// mutates the data from outside — the next fetch will see the
/// new contents and report the new total.
#[derive(Clone)]
pub struct VecSource<Item: ValidItem>(Arc<Mutex<Vec<Item>>>);

//---------------------------------------------------------------------------------------------------- VecSource Impl
impl<Item: ValidItem> VecSource<Item> {
	#[must_use]
	/// Create a source over `items`.
	pub fn new(items: Vec<Item>) -> Self {
		Self(Arc::new(Mutex::new(items)))
	}

	/// Replace the backing store entirely.
	pub fn replace(&self, items: Vec<Item>) {
		if let Ok(mut vec) = self.0.lock() {
			*vec = items;
		}
	}

	/// Append one item to the backing store.
	pub fn push(&self, item: Item) {
		if let Ok(mut vec) = self.0.lock() {
			vec.push(item);
		}
	}

	/// Shorten the backing store to `len` items.
	pub fn truncate(&self, len: usize) {
		if let Ok(mut vec) = self.0.lock() {
			vec.truncate(len);
		}
	}
}

//---------------------------------------------------------------------------------------------------- DataSource Impl
impl<Item: ValidItem> DataSource<Item> for VecSource<Item> {
	fn item_count(&mut self) -> Result<usize, SourceError> {
		match self.0.lock() {
			Ok(vec) => Ok(vec.len()),
			Err(_)  => Err(SourceError::Failed("backing store lock poisoned".into())),
		}
	}

	fn fetch(&mut self, range: Range<usize>) -> Result<Vec<Item>, SourceError> {
		let Ok(vec) = self.0.lock() else {
			return Err(SourceError::Failed("backing store lock poisoned".into()));
		};

		// The store may have shrunk since the list
		// computed `range` — serve what still exists.
		let start = range.start.min(vec.len());
		let end   = range.end.min(vec.len());

		Ok(vec[start..end].to_vec())
	}
}

//---------------------------------------------------------------------------------------------------- Trait Impl
impl<Item: ValidItem> std::fmt::Debug for VecSource<Item> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let len = self.0.lock().map(|v| v.len());
		f.debug_struct("VecSource")
			.field("len", &len)
			.finish()
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn fetch_clamps_to_backing_len() {
		let mut source = VecSource::new((0..10_usize).collect());
		assert_eq!(source.item_count().unwrap(), 10);

		// In-bounds.
		assert_eq!(source.fetch(2..5).unwrap(), [2, 3, 4]);

		// Straddling the end.
		assert_eq!(source.fetch(8..15).unwrap(), [8, 9]);

		// Entirely past the end.
		assert!(source.fetch(20..25).unwrap().is_empty());
	}

	#[test]
	fn clones_share_the_store() {
		let source = VecSource::new(vec![1_usize, 2, 3]);
		let mut clone = source.clone();

		source.push(4);
		assert_eq!(clone.item_count().unwrap(), 4);

		source.truncate(1);
		assert_eq!(clone.fetch(0..4).unwrap(), [1]);

		source.replace(vec![7, 8]);
		assert_eq!(clone.fetch(0..2).unwrap(), [7, 8]);
	}
}
