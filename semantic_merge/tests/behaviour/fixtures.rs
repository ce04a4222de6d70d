//! Shared fixtures for the behavioural suite.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use semantic_merge::{MergeError, MergeResult, Merger, Value};

/// Scenario state carried between merge steps.
#[derive(Debug, Default, ScenarioState)]
pub struct MergeContext {
    /// Builder assembled by the `Given` steps.
    pub merger: Slot<Merger>,
    /// Error raised while constructing the builder.
    pub construction_error: Slot<MergeError>,
    /// Outcome of running the merge.
    pub outcome: Slot<MergeResult<Value>>,
}

/// Creates a clean merge context per scenario.
#[fixture]
pub fn merge_context() -> MergeContext {
    MergeContext::default()
}
