// The sparse paged list itself.

mod list;
pub use list::SparseList;

mod load;
pub use load::{Ticket,LoadComplete};

mod query;
mod range;
