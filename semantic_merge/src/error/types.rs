//! Primary error enum for merge operations.

use thiserror::Error;

/// Errors that can occur while merging.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MergeError {
    /// A value offered as a source is neither a mapping nor a sequence.
    #[error("object or array source is required for merging, {found} given")]
    InvalidSourceType {
        /// Runtime type name of the rejected value.
        found: &'static str,
    },

    /// The value passed as the merge target is neither a mapping nor a
    /// sequence.
    #[error("object or array target is required for merging, {found} given")]
    InvalidTargetType {
        /// Runtime type name of the rejected value.
        found: &'static str,
    },

    /// A recursive merge descended past the configured maximum depth.
    #[error("recursive merge exceeded the maximum depth of {limit}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}
