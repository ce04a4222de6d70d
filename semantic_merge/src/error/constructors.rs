//! Constructors for `MergeError`.

use crate::Value;

use super::MergeError;

impl MergeError {
    /// Reject `value` as a merge source.
    ///
    /// # Examples
    ///
    /// ```
    /// use semantic_merge::{MergeError, Value};
    ///
    /// let err = MergeError::invalid_source(&Value::from("text"));
    /// assert_eq!(err, MergeError::InvalidSourceType { found: "string" });
    /// ```
    #[must_use]
    pub const fn invalid_source(value: &Value) -> Self {
        Self::InvalidSourceType {
            found: value.type_name(),
        }
    }

    /// Reject `value` as a merge target.
    ///
    /// # Examples
    ///
    /// ```
    /// use semantic_merge::{MergeError, Value};
    ///
    /// let err = MergeError::invalid_target(&Value::Null);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "object or array target is required for merging, null given"
    /// );
    /// ```
    #[must_use]
    pub const fn invalid_target(value: &Value) -> Self {
        Self::InvalidTargetType {
            found: value.type_name(),
        }
    }

    /// Returns `true` for the two type-guard failures.
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSourceType { .. } | Self::InvalidTargetType { .. }
        )
    }
}
