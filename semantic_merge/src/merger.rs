//! Builder that accumulates sources and options before merging.

use tracing::debug;

use crate::engine::{self, Container};
use crate::{IntoKeys, MergeOptions, MergeResult, Value};

/// Accumulates sources, exclusions and flags, then merges them into a target.
///
/// Sources are merged last-added-first, so the source passed to
/// [`Merger::new`] is applied last and wins every key collision in a mapping
/// target.
///
/// # Examples
///
/// ```
/// use semantic_merge::{Merger, Value};
/// use serde_json::json;
///
/// let target = Value::mapping();
/// Merger::new(&Value::from(json!({"k": "base", "nested": {"secret": 1, "keep": 2}})))?
///     .and(&Value::from(json!({"k": "override", "extra": true})))?
///     .excluding("secret")
///     .recursively()
///     .into(&target)?;
///
/// assert_eq!(
///     serde_json::to_value(&target)?,
///     json!({"k": "base", "extra": true, "nested": {"keep": 2}})
/// );
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Merger {
    sources: Vec<Container>,
    options: MergeOptions,
}

impl Merger {
    /// Start a merge from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeError::InvalidSourceType`] when `source` is not a
    /// mapping or sequence.
    pub fn new(source: &Value) -> MergeResult<Self> {
        Ok(Self {
            sources: vec![Container::source(source)?],
            options: MergeOptions::new(),
        })
    }

    /// Add another, lower-priority source.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeError::InvalidSourceType`] when `source` is not a
    /// mapping or sequence.
    pub fn and(mut self, source: &Value) -> MergeResult<Self> {
        self.sources.push(Container::source(source)?);
        Ok(self)
    }

    /// Skip one or more keys at every nesting depth.
    #[must_use]
    pub fn excluding(self, keys: impl IntoKeys) -> Self {
        Self {
            options: self.options.exclude(keys),
            ..self
        }
    }

    /// Alias of [`Merger::excluding`].
    #[must_use]
    pub fn except(self, keys: impl IntoKeys) -> Self {
        self.excluding(keys)
    }

    /// Merge nested containers structurally instead of by reference.
    ///
    /// Applies to every source, whenever it was added.
    #[must_use]
    pub fn recursively(self) -> Self {
        Self {
            options: self.options.recursive(),
            ..self
        }
    }

    /// Fail recursive merges that nest deeper than `depth`.
    #[must_use]
    pub fn with_max_depth(self, depth: usize) -> Self {
        Self {
            options: self.options.with_max_depth(depth),
            ..self
        }
    }

    /// Fold externally loaded options into this merge.
    ///
    /// See [`MergeOptions::combine`]; recursion, once enabled, stays enabled.
    #[must_use]
    pub fn with_options(self, options: MergeOptions) -> Self {
        Self {
            options: self.options.combine(options),
            ..self
        }
    }

    /// Options the merge will run with.
    #[must_use]
    pub const fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Number of accumulated sources.
    #[must_use]
    pub const fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Merge every source into `target` and return `target`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeError::InvalidTargetType`] before any source is
    /// merged when `target` is not a mapping or sequence, and
    /// [`crate::MergeError::DepthLimitExceeded`] when a depth limit is hit.
    /// Sources merged before a depth failure are not rolled back.
    pub fn into(self, target: &Value) -> MergeResult<Value> {
        let receiver = Container::target(target)?;
        debug!(
            sources = self.sources.len(),
            recurse = self.options.recurse,
            exclusions = self.options.exclusions.len(),
            "merging sources into target"
        );
        for source in self.sources.iter().rev() {
            engine::dispatch(source, &receiver, &self.options, 0)?;
        }
        Ok(target.clone())
    }
}

/// Start a merge from `source`; shorthand for [`Merger::new`].
///
/// # Errors
///
/// Returns [`crate::MergeError::InvalidSourceType`] when `source` is not a
/// mapping or sequence.
pub fn merge(source: &Value) -> MergeResult<Merger> {
    Merger::new(source)
}
