//! Steps that assemble a merger and run it.

use anyhow::{Result, anyhow};
use rstest_bdd_macros::{given, when};
use semantic_merge::{Merger, merge};
use test_helpers::{json::parse, text};

use crate::fixtures::MergeContext;

fn take_merger(merge_context: &MergeContext) -> Result<Merger> {
    merge_context
        .merger
        .take()
        .ok_or_else(|| anyhow!("no merger has been created"))
}

#[given("a merger over {source}")]
fn merger_over(merge_context: &MergeContext, source: String) -> Result<()> {
    let value = parse(text::unfence(&source))?;
    match merge(&value) {
        Ok(merger) => {
            merge_context.merger.set(merger);
        }
        Err(err) => {
            merge_context.construction_error.set(err);
        }
    }
    Ok(())
}

#[given("another source {source}")]
fn another_source(merge_context: &MergeContext, source: String) -> Result<()> {
    let value = parse(text::unfence(&source))?;
    let merger = take_merger(merge_context)?.and(&value)?;
    merge_context.merger.set(merger);
    Ok(())
}

#[given("the key {key} is excluded")]
fn key_excluded(merge_context: &MergeContext, key: String) -> Result<()> {
    let merger = take_merger(merge_context)?.excluding(text::unquote(&key));
    merge_context.merger.set(merger);
    Ok(())
}

#[given("recursion is enabled")]
fn recursion_enabled(merge_context: &MergeContext) -> Result<()> {
    let merger = take_merger(merge_context)?.recursively();
    merge_context.merger.set(merger);
    Ok(())
}

#[when("the merger runs into {target}")]
fn run_merger(merge_context: &MergeContext, target: String) -> Result<()> {
    let value = parse(text::unfence(&target))?;
    let outcome = take_merger(merge_context)?.into(&value);
    merge_context.outcome.set(outcome);
    Ok(())
}
