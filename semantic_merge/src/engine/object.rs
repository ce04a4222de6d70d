//! Mapping targets: key-by-key assignment.
//!
//! Excluded keys are skipped. With recursion enabled, container values are
//! merged into the container already at that key when it has the same kind,
//! or into a fresh empty one otherwise. Every other value, callables
//! included, overwrites the key.

use crate::{MappingRef, MergeOptions, MergeResult, Value};

use super::{Container, descend};

pub(super) fn merge(
    source: &Container,
    target: &MappingRef,
    options: &MergeOptions,
    depth: usize,
) -> MergeResult<()> {
    for (key, value) in source.entries() {
        if options.is_excluded(&key) {
            continue;
        }
        let nested = if options.recurse {
            Container::classify(&value)
        } else {
            None
        };
        let Some(incoming) = nested else {
            target.insert(key, value);
            continue;
        };
        let current = target.get(&key);
        let receiver = receiver_for(&incoming, current.as_ref());
        descend(&incoming, &receiver, options, depth)?;
        target.insert(key, receiver.into_value());
    }
    Ok(())
}

/// Reuse `existing` when it is a container of the incoming kind.
fn receiver_for(incoming: &Container, existing: Option<&Value>) -> Container {
    existing
        .and_then(Container::classify)
        .filter(|current| current.same_kind(incoming))
        .unwrap_or_else(|| incoming.empty_sibling())
}
