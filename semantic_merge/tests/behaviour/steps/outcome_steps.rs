//! Steps that inspect the merge outcome.

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::then;
use semantic_merge::MergeError;
use test_helpers::{json, text};

use crate::fixtures::MergeContext;

#[then("the merged target is {expected}")]
fn merged_target_is(merge_context: &MergeContext, expected: String) -> Result<()> {
    let outcome = merge_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("the merger has not run"))?;
    let target = outcome?;
    let wanted = json::render(&json::parse(text::unfence(&expected))?)?;
    let actual = json::render(&target)?;
    ensure!(actual == wanted, "merged {actual}, expected {wanted}");
    Ok(())
}

#[then("creating the merger fails naming {found}")]
fn construction_fails(merge_context: &MergeContext, found: String) -> Result<()> {
    let err = merge_context
        .construction_error
        .take()
        .ok_or_else(|| anyhow!("the merger was created without error"))?;
    ensure!(
        matches!(&err, MergeError::InvalidSourceType { found: name } if *name == text::unquote(&found)),
        "unexpected error {err}"
    );
    Ok(())
}

#[then("the merge fails naming the target type {found}")]
fn merge_fails(merge_context: &MergeContext, found: String) -> Result<()> {
    let outcome = merge_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("the merger has not run"))?;
    let err = outcome
        .err()
        .ok_or_else(|| anyhow!("the merge succeeded"))?;
    ensure!(
        matches!(&err, MergeError::InvalidTargetType { found: name } if *name == text::unquote(&found)),
        "unexpected error {err}"
    );
    Ok(())
}
