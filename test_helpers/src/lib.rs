//! Test helpers shared across crates.
//!
//! This crate provides the sample values used by the integration and
//! behavioural suites, plus JSON and step-text helpers.

pub mod fixtures;
pub mod json;
pub mod text;
