//! The merge engine.
//!
//! [`merge_into`] classifies the target and dispatches on its shape alone:
//! sequence targets take the union of the source's values (see [`array`]),
//! mapping targets take the source's entries key by key (see [`object`]).
//! Only the mapping strategy consults [`MergeOptions::recurse`].
//!
//! Recursion is structural, so its depth equals the nesting depth of the
//! source. Cyclic sources recurse without end unless
//! [`MergeOptions::max_depth`] is set.

mod array;
mod object;

use tracing::{trace, warn};

use crate::{Key, MappingRef, MergeError, MergeOptions, MergeResult, SequenceRef, Value};

/// A value already known to be mergeable.
#[derive(Clone, Debug)]
pub(crate) enum Container {
    Mapping(MappingRef),
    Sequence(SequenceRef),
}

impl Container {
    fn classify(value: &Value) -> Option<Self> {
        match value {
            Value::Mapping(mapping) => Some(Self::Mapping(mapping.clone())),
            Value::Sequence(sequence) => Some(Self::Sequence(sequence.clone())),
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Callable(_) => None,
        }
    }

    /// Accept `value` as a merge source.
    pub(crate) fn source(value: &Value) -> MergeResult<Self> {
        Self::classify(value).ok_or_else(|| MergeError::invalid_source(value))
    }

    /// Accept `value` as a merge target.
    pub(crate) fn target(value: &Value) -> MergeResult<Self> {
        Self::classify(value).ok_or_else(|| MergeError::invalid_target(value))
    }

    /// A new, empty container of the same kind.
    fn empty_sibling(&self) -> Self {
        match self {
            Self::Mapping(_) => Self::Mapping(MappingRef::new()),
            Self::Sequence(_) => Self::Sequence(SequenceRef::new()),
        }
    }

    const fn same_kind(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Mapping(_), Self::Mapping(_)) | (Self::Sequence(_), Self::Sequence(_))
        )
    }

    /// Own enumerable entries; sequences are keyed by index.
    fn entries(&self) -> Vec<(Key, Value)> {
        match self {
            Self::Mapping(mapping) => mapping.entries(),
            Self::Sequence(sequence) => sequence
                .elements()
                .into_iter()
                .enumerate()
                .map(|(index, element)| (Key::from(index), element))
                .collect(),
        }
    }

    /// Own enumerable values in enumeration order.
    fn values(&self) -> Vec<Value> {
        match self {
            Self::Mapping(mapping) => mapping
                .entries()
                .into_iter()
                .map(|(_, value)| value)
                .collect(),
            Self::Sequence(sequence) => sequence.elements(),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Self::Mapping(mapping) => Value::Mapping(mapping),
            Self::Sequence(sequence) => Value::Sequence(sequence),
        }
    }
}

/// Merge `source` into `target` and return `target`.
///
/// `target` is mutated in place; the returned value is another handle to it.
/// `source` is only read.
///
/// # Examples
///
/// ```
/// use semantic_merge::{merge_into, MergeOptions, Value};
/// use serde_json::json;
///
/// let target = Value::from(json!(["a", "c"]));
/// let source = Value::from(json!(["a", "b", 1]));
/// merge_into(&source, &target, &MergeOptions::default())?;
/// assert_eq!(serde_json::to_value(&target)?, json!(["a", "c", "b", 1]));
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`MergeError::InvalidSourceType`] or
/// [`MergeError::InvalidTargetType`] before touching `target` when either
/// value is not a mapping or sequence, and
/// [`MergeError::DepthLimitExceeded`] when a recursive merge descends past
/// [`MergeOptions::max_depth`]. A depth failure leaves the entries merged
/// before it in place.
pub fn merge_into(source: &Value, target: &Value, options: &MergeOptions) -> MergeResult<Value> {
    let incoming = Container::source(source)?;
    let receiver = Container::target(target)?;
    dispatch(&incoming, &receiver, options, 0)?;
    Ok(target.clone())
}

pub(crate) fn dispatch(
    source: &Container,
    target: &Container,
    options: &MergeOptions,
    depth: usize,
) -> MergeResult<()> {
    match target {
        Container::Sequence(sequence) => {
            trace!(depth, strategy = "array", "merging into sequence");
            array::merge(source, sequence);
            Ok(())
        }
        Container::Mapping(mapping) => {
            trace!(depth, strategy = "object", "merging into mapping");
            object::merge(source, mapping, options, depth)
        }
    }
}

fn descend(
    source: &Container,
    target: &Container,
    options: &MergeOptions,
    depth: usize,
) -> MergeResult<()> {
    let next = depth.saturating_add(1);
    if let Some(limit) = options.max_depth.filter(|limit| next > *limit) {
        warn!(limit, "recursive merge rejected by depth limit");
        return Err(MergeError::DepthLimitExceeded { limit });
    }
    dispatch(source, target, options, next)
}
