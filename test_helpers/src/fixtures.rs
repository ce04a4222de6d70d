//! Sample values mirroring the shapes merges have to cope with.

use semantic_merge::{MappingRef, SequenceRef, Value};

/// Text stored under the nested mapping's only key.
pub const NESTED_TEXT: &str = "I am in a nested object";

/// A source mapping and the base it inherits from.
#[derive(Clone, Debug)]
pub struct SampleSource {
    /// Base mapping; its entries are inherited, never own.
    pub parent: MappingRef,
    /// The mapping used as a merge source.
    pub source: MappingRef,
}

impl SampleSource {
    /// The source as a [`Value`].
    #[must_use]
    pub fn value(&self) -> Value {
        Value::from(self.source.clone())
    }

    /// The nested mapping stored under `nested`.
    #[must_use]
    pub fn nested(&self) -> Option<Value> {
        self.source.get("nested")
    }
}

/// Build the sample source.
///
/// Own enumerable entries: `a` (string), `b` (number), `3` (numeric key),
/// `c` (`null`), `nested` (mapping) and `arr` (`["a", "b", "c"]`). It also
/// carries a hidden `hiddenProp` and inherits `parentProp` and `test-prop`
/// from its parent.
#[must_use]
pub fn sample_source() -> SampleSource {
    let parent: MappingRef = [("parentProp", "I am in parent"), ("test-prop", "test")]
        .into_iter()
        .collect();
    let source = MappingRef::with_base(&parent);
    source.insert("a", "string");
    source.insert("b", 5);
    source.insert(3_usize, "numeric key");
    source.insert("c", Value::Null);
    source.insert(
        "nested",
        [("nestedProp", NESTED_TEXT)]
            .into_iter()
            .collect::<MappingRef>(),
    );
    source.insert("arr", ["a", "b", "c"].into_iter().collect::<SequenceRef>());
    source.insert_hidden("hiddenProp", "I shall be ignored");
    SampleSource { parent, source }
}
