//! Behavioural test harness for `semantic_merge` using `rstest-bdd`.
//!
//! Step implementations live under [`steps`], while [`scenarios`] binds the
//! `.feature` files in `tests/features` to the shared fixtures, so the suite
//! runs under the stock `cargo test` harness.

mod fixtures;
mod scenarios;
mod steps;
