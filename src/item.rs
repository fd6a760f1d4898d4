//! The trait bound for items stored in a [`SparseList`].

//---------------------------------------------------------------------------------------------------- Use
#[allow(unused_imports)] // docs
use crate::list::SparseList;

//---------------------------------------------------------------------------------------------------- ValidItem
cfg_if::cfg_if! {
	if #[cfg(any(test, feature = "log"))] {
		use std::fmt::Debug;
		/// Items that can be stored in a [`SparseList`].
		///
		/// This is automatically implemented for any type meeting the bounds.
		///
		/// - [`Clone`]: resident items are handed out by value from bulk queries
		/// - [`PartialEq`]: `contains()`/`index_of()` scan by equality
		/// - [`Send`] + `'static`: items cross from the fetch thread to the owner
		///
		/// It is recommended to use a type that is cheaply [`Clone`]-able,
		/// e.g. small primitives or [`Arc<T>`](std::sync::Arc).
		pub trait ValidItem: Clone + PartialEq + Debug + Send + Sync + 'static {}
		impl<T> ValidItem for T
		where
			T: Clone + PartialEq + Debug + Send + Sync + 'static
		{}
	} else {
		/// Items that can be stored in a [`SparseList`].
		///
		/// This is automatically implemented for any type meeting the bounds.
		///
		/// - [`Clone`]: resident items are handed out by value from bulk queries
		/// - [`PartialEq`]: `contains()`/`index_of()` scan by equality
		/// - [`Send`] + `'static`: items cross from the fetch thread to the owner
		///
		/// It is recommended to use a type that is cheaply [`Clone`]-able,
		/// e.g. small primitives or [`Arc<T>`](std::sync::Arc).
		pub trait ValidItem: Clone + PartialEq + Send + Sync + 'static {}
		impl<T> ValidItem for T
		where
			T: Clone + PartialEq + Send + Sync + 'static
		{}
	}
}

