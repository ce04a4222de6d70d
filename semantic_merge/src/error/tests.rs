//! Unit tests for merge error construction and rendering.

use rstest::rstest;

use super::MergeError;
use crate::{Callable, Value};

#[rstest]
#[case::string(Value::from("a string"), "string")]
#[case::number(Value::from(5), "number")]
#[case::boolean(Value::from(false), "boolean")]
#[case::null(Value::Null, "null")]
#[case::callable(Value::from(Callable::new(|_| Value::Null)), "function")]
fn invalid_source_names_runtime_type(#[case] value: Value, #[case] found: &str) {
    let err = MergeError::invalid_source(&value);
    assert!(err.is_type_error());
    assert_eq!(
        err.to_string(),
        format!("object or array source is required for merging, {found} given")
    );
}

#[test]
fn depth_limit_is_not_a_type_error() {
    let err = MergeError::DepthLimitExceeded { limit: 4 };
    assert!(!err.is_type_error());
    assert_eq!(
        err.to_string(),
        "recursive merge exceeded the maximum depth of 4"
    );
}
