//! Error types for shuffle bags

use thiserror::Error;

/// Result type for shuffle bag operations
pub type Result<T> = std::result::Result<T, ShuffleError>;

/// Misuse of a shuffle bag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// A label was added with weight zero
    #[error("Label weight must be at least 1")]
    ZeroWeight,

    /// A draw was requested before any label was added
    #[error("Shuffle bag is empty")]
    Empty,
}
