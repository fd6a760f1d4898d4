//! List configuration and completion callbacks.

mod config;
pub use config::{Config,LoadPolicy,DEFAULT_BATCH_SIZE};

mod callback;
pub use callback::Callback;
