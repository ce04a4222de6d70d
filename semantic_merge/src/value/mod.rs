//! The value model merged by the engine, and its classifier.
//!
//! A [`Value`] is a tagged union over scalars, opaque callables and the two
//! container kinds. Containers are shared handles: cloning a [`Value`] that
//! holds a [`MappingRef`] or [`SequenceRef`] yields another handle to the same
//! container, which is how merges reuse nested targets in place and how
//! shallow merges copy nested sources by reference.

mod callable;
mod interop;
mod key;
mod mapping;
mod sequence;

pub use callable::Callable;
pub use key::{IntoKeys, Key};
pub use mapping::MappingRef;
pub use sequence::SequenceRef;

use serde_json::Number;

/// Shape category of a [`Value`].
///
/// The four kinds are mutually exclusive and cover every value. `null` is a
/// [`Kind::Scalar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Keyed container.
    Mapping,
    /// Ordered container.
    Sequence,
    /// Opaque function.
    Callable,
    /// `null`, booleans, numbers and strings.
    Scalar,
}

/// A node in a mergeable value tree.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(Number),
    /// A string.
    String(String),
    /// An opaque function.
    Callable(Callable),
    /// A keyed container.
    Mapping(MappingRef),
    /// An ordered container.
    Sequence(SequenceRef),
}

impl Value {
    /// A fresh, empty mapping.
    #[must_use]
    pub fn mapping() -> Self {
        Self::Mapping(MappingRef::new())
    }

    /// A fresh, empty sequence.
    #[must_use]
    pub fn sequence() -> Self {
        Self::Sequence(SequenceRef::new())
    }

    /// Classify the value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Mapping(_) => Kind::Mapping,
            Self::Sequence(_) => Kind::Sequence,
            Self::Callable(_) => Kind::Callable,
            Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_) => Kind::Scalar,
        }
    }

    /// Returns `true` for mappings.
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self.kind(), Kind::Mapping)
    }

    /// Returns `true` for sequences.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self.kind(), Kind::Sequence)
    }

    /// Returns `true` for callables.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self.kind(), Kind::Callable)
    }

    /// Returns `true` for `null`, booleans, numbers and strings.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self.kind(), Kind::Scalar)
    }

    /// Returns `true` for mappings and sequences, the only values that can be
    /// merged from or into.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self.kind(), Kind::Mapping | Kind::Sequence)
    }

    /// Returns `true` for `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Runtime type name used in diagnostics.
    ///
    /// ```
    /// use semantic_merge::Value;
    ///
    /// assert_eq!(Value::Null.type_name(), "null");
    /// assert_eq!(Value::sequence().type_name(), "array");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Callable(_) => "function",
            Self::Mapping(_) => "object",
            Self::Sequence(_) => "array",
        }
    }

    /// Array-membership equality.
    ///
    /// Scalars compare by value, with numbers compared numerically so `1`
    /// and `1.0` are the same. Containers and callables compare by identity.
    ///
    /// ```
    /// use semantic_merge::Value;
    ///
    /// assert!(Value::from("a").is_same(&Value::from("a")));
    /// assert!(!Value::mapping().is_same(&Value::mapping()));
    /// ```
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => numbers_equal(left, right),
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Callable(left), Self::Callable(right)) => left.ptr_eq(right),
            (Self::Mapping(left), Self::Mapping(right)) => left.ptr_eq(right),
            (Self::Sequence(left), Self::Sequence(right)) => left.ptr_eq(right),
            _ => false,
        }
    }

    /// Borrow the mapping handle, if this is a mapping.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&MappingRef> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Borrow the sequence handle, if this is a sequence.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&SequenceRef> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Borrow the callable, if this is a callable.
    #[must_use]
    pub const fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Callable(callable) => Some(callable),
            _ => None,
        }
    }

    /// Borrow the string, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// The boolean, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Borrow the number, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(number) => Some(number),
            _ => None,
        }
    }
}

#[expect(
    clippy::float_cmp,
    reason = "membership follows strict numeric equality, not an epsilon"
)]
fn numbers_equal(left: &Number, right: &Number) -> bool {
    if let (Some(l), Some(r)) = (left.as_i64(), right.as_i64()) {
        return l == r;
    }
    if let (Some(l), Some(r)) = (left.as_u64(), right.as_u64()) {
        return l == r;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}
