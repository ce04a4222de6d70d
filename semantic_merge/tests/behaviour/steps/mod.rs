//! Step definitions for the merge scenarios.

mod builder_steps;
mod outcome_steps;
