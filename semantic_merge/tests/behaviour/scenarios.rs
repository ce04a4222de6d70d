//! Binds the merge feature files to the step registry.

use crate::fixtures::{MergeContext, merge_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/merging.feature",
    fixtures = [merge_context: MergeContext]
);
scenarios!(
    "tests/features/type_guards.feature",
    fixtures = [merge_context: MergeContext]
);
