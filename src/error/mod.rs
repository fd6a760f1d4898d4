//! General errors that can occur.

mod source;
pub use source::SourceError;
