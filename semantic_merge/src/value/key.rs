//! Mapping keys and the conversions accepted wherever keys are named.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of a mapping entry.
///
/// Keys are strings. Integer-like keys, including sequence indices, are stored
/// using their decimal rendering, so `Key::from(3_usize)` and `Key::from("3")`
/// name the same entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Create a key from any string-like name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric index named by this key, if it is integer-like.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        if self.0.len() > 1 && self.0.starts_with('0') {
            return None;
        }
        self.0.parse().ok()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Self(name.clone())
    }
}

impl From<&Key> for Key {
    fn from(key: &Self) -> Self {
        key.clone()
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self(index.to_string())
    }
}

/// Conversion accepted by [`crate::Merger::excluding`] and
/// [`crate::MergeOptions::exclude`].
///
/// Implemented for single keys (`&str`, `String`, [`Key`], `usize`) and for
/// ordered collections of anything convertible into a [`Key`].
///
/// # Examples
///
/// ```
/// use semantic_merge::{IntoKeys, Key};
///
/// assert_eq!("secret".into_keys(), vec![Key::from("secret")]);
/// assert_eq!(["a", "b"].into_keys(), vec![Key::from("a"), Key::from("b")]);
/// ```
pub trait IntoKeys {
    /// Convert into the ordered list of keys it names.
    fn into_keys(self) -> Vec<Key>;
}

impl IntoKeys for &str {
    fn into_keys(self) -> Vec<Key> {
        vec![Key::from(self)]
    }
}

impl IntoKeys for String {
    fn into_keys(self) -> Vec<Key> {
        vec![Key::from(self)]
    }
}

impl IntoKeys for Key {
    fn into_keys(self) -> Vec<Key> {
        vec![self]
    }
}

impl IntoKeys for usize {
    fn into_keys(self) -> Vec<Key> {
        vec![Key::from(self)]
    }
}

impl<T: Into<Key>> IntoKeys for Vec<T> {
    fn into_keys(self) -> Vec<Key> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Key>, const N: usize> IntoKeys for [T; N] {
    fn into_keys(self) -> Vec<Key> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Clone + Into<Key>> IntoKeys for &[T] {
    fn into_keys(self) -> Vec<Key> {
        self.iter().cloned().map(Into::into).collect()
    }
}
