//! Error types produced by the merge engine and the builder.

mod constructors;
mod types;

pub use types::MergeError;

/// Result alias used throughout the crate.
pub type MergeResult<T> = Result<T, MergeError>;

#[cfg(test)]
mod tests;
