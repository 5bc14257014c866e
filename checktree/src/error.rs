//! Error types for selection engine calls.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = SelectionError> = std::result::Result<T, E>;

/// Errors reported synchronously by [`CheckTree`](crate::CheckTree) operations.
///
/// Keys are rendered with their `Debug` representation so the error type
/// stays independent of the key type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Two records in the same tree produced the same key.
    #[error("Duplicate record key {key}")]
    DuplicateKey {
        /// The offending key.
        key: String,
    },

    /// A toggle referenced a key that is not part of the indexed tree.
    #[error("Unknown record key {key}")]
    UnknownNode {
        /// The key that was not found.
        key: String,
    },

    /// The tree passed to a call does not have the shape the caches were built for.
    #[error("Tree shape mismatch at position {position}: {reason}")]
    ShapeMismatch {
        /// Pre-order position where the mismatch was detected.
        position: usize,
        /// What differed.
        reason: String,
    },
}

impl SelectionError {
    pub(crate) fn not_indexed() -> Self {
        Self::ShapeMismatch {
            position: 0,
            reason: "no tree has been indexed, call derive_state first".to_string(),
        }
    }
}
