//! Configuration shared by every level of one merge.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{IntoKeys, Key};

/// Options threaded unchanged through every recursive call of a merge.
///
/// Options deserialise from any serde format, with missing fields taking
/// their defaults:
///
/// ```
/// use semantic_merge::{Key, MergeOptions};
///
/// let options: MergeOptions =
///     serde_json::from_str(r#"{"recurse": true, "exclusions": ["secret"]}"#)?;
/// assert!(options.recurse);
/// assert!(options.is_excluded(&Key::from("secret")));
/// assert_eq!(options.max_depth, None);
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Merge nested containers structurally instead of copying them by
    /// reference.
    pub recurse: bool,
    /// Keys skipped at every nesting depth.
    pub exclusions: BTreeSet<Key>,
    /// Deepest nesting a recursive merge may descend to. The top-level
    /// containers are depth 0; `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl MergeOptions {
    /// Shallow merge, nothing excluded, unbounded depth.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recurse: false,
            exclusions: BTreeSet::new(),
            max_depth: None,
        }
    }

    /// Enable recursive merging.
    #[must_use]
    pub fn recursive(self) -> Self {
        Self {
            recurse: true,
            ..self
        }
    }

    /// Add one or more keys to the exclusion set.
    #[must_use]
    pub fn exclude(mut self, keys: impl IntoKeys) -> Self {
        self.exclusions.extend(keys.into_keys());
        self
    }

    /// Bound the nesting depth of recursive merges.
    #[must_use]
    pub fn with_max_depth(self, depth: usize) -> Self {
        Self {
            max_depth: Some(depth),
            ..self
        }
    }

    /// Fold `other` into these options.
    ///
    /// Recursion stays enabled if either side enables it, exclusions are
    /// unioned, and `other`'s depth limit takes precedence when set.
    #[must_use]
    pub fn combine(mut self, other: Self) -> Self {
        self.recurse |= other.recurse;
        self.exclusions.extend(other.exclusions);
        self.max_depth = other.max_depth.or(self.max_depth);
        self
    }

    /// Returns `true` when `key` must be skipped.
    #[must_use]
    pub fn is_excluded(&self, key: &Key) -> bool {
        self.exclusions.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::MergeOptions;
    use crate::Key;

    #[test]
    fn defaults_are_shallow_and_unbounded() {
        let options = MergeOptions::default();
        assert_eq!(options, MergeOptions::new());
        assert!(!options.recurse);
        assert!(options.exclusions.is_empty());
        assert_eq!(options.max_depth, None);
    }

    #[test]
    fn exclusions_accumulate_idempotently() {
        let options = MergeOptions::new()
            .exclude("a")
            .exclude(["a", "b"])
            .exclude(vec![String::from("b")]);
        assert_eq!(options.exclusions.len(), 2);
        assert!(options.is_excluded(&Key::from("a")));
        assert!(options.is_excluded(&Key::from("b")));
    }

    #[rstest]
    #[case::keeps_recursion(MergeOptions::new().recursive(), MergeOptions::new(), true, None)]
    #[case::adopts_recursion(MergeOptions::new(), MergeOptions::new().recursive(), true, None)]
    #[case::keeps_depth(MergeOptions::new().with_max_depth(3), MergeOptions::new(), false, Some(3))]
    #[case::overrides_depth(
        MergeOptions::new().with_max_depth(3),
        MergeOptions::new().with_max_depth(1),
        false,
        Some(1)
    )]
    fn combine_never_weakens_recursion(
        #[case] base: MergeOptions,
        #[case] other: MergeOptions,
        #[case] recurse: bool,
        #[case] max_depth: Option<usize>,
    ) {
        let combined = base.combine(other);
        assert_eq!(combined.recurse, recurse);
        assert_eq!(combined.max_depth, max_depth);
    }

    #[test]
    fn loads_from_toml() {
        let options: MergeOptions = toml::from_str(
            "recurse = true\nexclusions = [\"password\", \"token\"]\nmax_depth = 8\n",
        )
        .unwrap_or_else(|err| panic!("options should parse: {err}"));
        assert!(options.recurse);
        assert_eq!(options.max_depth, Some(8));
        assert!(options.is_excluded(&Key::from("token")));
    }
}
