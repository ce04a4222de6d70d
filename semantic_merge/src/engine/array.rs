//! Sequence targets: union by value.
//!
//! Each source value not already present in the target is appended, in
//! source order. Nothing is overwritten and nothing is merged structurally,
//! whatever the options say.

use crate::SequenceRef;

use super::Container;

pub(super) fn merge(source: &Container, target: &SequenceRef) {
    // Snapshot first: the source may be the target itself.
    for value in source.values() {
        if !target.contains(&value) {
            target.push(value);
        }
    }
}
