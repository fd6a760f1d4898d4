//---------------------------------------------------------------------------------------------------- Source Errors
#[allow(unused_imports)] // docs
use crate::source::DataSource;

#[derive(thiserror::Error, Debug)]
/// Errors reported by a [`DataSource`].
///
/// This `enum` represents all the potential errors a data
/// source can surface while counting or fetching items.
///
/// This includes things like:
/// - File IO errors (non-existent PATH, lacking-permissions, etc)
/// - Backend-specific failures (network, database, etc)
/// - The backing store having gone away entirely
pub enum SourceError {
	#[error("data source IO error: {0}")]
	/// Error occurred while reading from the backing store
	Io(#[from] std::io::Error),

	#[error("data source failed: {0}")]
	/// Backend-specific failure, described by the data source
	Failed(String),

	#[error("data source disconnected")]
	/// The backing store is gone and will not answer again
	Disconnected,
}
