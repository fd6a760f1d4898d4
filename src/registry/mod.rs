//! Interned-object registry for handle-backed items.

mod registry;
pub use registry::{Handle,Registry};
