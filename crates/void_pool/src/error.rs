//! Error types for resource pools

use thiserror::Error;
use void_shuffle::ShuffleError;

/// Result type for pool operations
pub type Result<T> = std::result::Result<T, PoolError>;

/// Errors surfaced by pool construction and addressing
///
/// Running out of free objects is not an error: `acquire` returns `None`.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Active index does not exist
    #[error("Active index {index} out of range (active count {len})")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },

    /// Factory selection error
    #[error("Factory selection failed: {0}")]
    Shuffle(#[from] ShuffleError),

    /// Invalid configuration
    #[error("Invalid pool config: {0}")]
    Config(String),

    /// Failed to read a config file
    #[error("Failed to read pool config: {0}")]
    Io(#[from] std::io::Error),
}
