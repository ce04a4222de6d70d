//! Structural merging of nested mappings and sequences.
//!
//! One or more source values are merged into a target value, which is
//! mutated in place and handed back. Mapping targets take each source key by
//! assignment, or, when merging [recursively](Merger::recursively), by
//! merging nested containers into the containers already present. Sequence
//! targets always take the union of the source's values: new values are
//! appended, present ones skipped.
//!
//! ```
//! use semantic_merge::{merge, Value};
//! use serde_json::json;
//!
//! let defaults = Value::from(json!({"server": {"port": 80, "hosts": ["a"]}}));
//! let overrides = Value::from(json!({"server": {"port": 8080, "hosts": ["b"]}}));
//!
//! let config = merge(&overrides)?
//!     .and(&defaults)?
//!     .recursively()
//!     .into(&Value::mapping())?;
//!
//! assert_eq!(
//!     serde_json::to_value(&config)?,
//!     json!({"server": {"port": 8080, "hosts": ["a", "b"]}})
//! );
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Values are single-threaded shared trees (see [`Value`]); merging into a
//! value that another merge is mutating, or merging a cyclic source without
//! [`MergeOptions::max_depth`], is the caller's responsibility to avoid.

mod engine;
mod error;
mod merger;
mod options;
pub mod value;

pub use engine::merge_into;
pub use error::{MergeError, MergeResult};
pub use merger::{Merger, merge};
pub use options::MergeOptions;
pub use value::{Callable, IntoKeys, Key, Kind, MappingRef, SequenceRef, Value};
