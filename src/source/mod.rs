//! The data source capability a [`SparseList`](crate::SparseList) pages over.

mod source;
pub use source::DataSource;

mod vec_source;
pub use vec_source::VecSource;
