//! Conversions between [`Value`] and native Rust and JSON values.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};

use super::{Callable, Key, MappingRef, SequenceRef, Value};

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

macro_rules! from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(number: $ty) -> Self {
                    Self::Number(Number::from(number))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Non-finite floats become [`Value::Null`], as they do in `serde_json`.
impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Number::from_f64(number).map_or(Self::Null, Self::Number)
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Self::Callable(callable)
    }
}

impl From<MappingRef> for Value {
    fn from(mapping: MappingRef) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<SequenceRef> for Value {
    fn from(sequence: SequenceRef) -> Self {
        Self::Sequence(sequence)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Deep conversion: every JSON container becomes a freshly allocated handle.
impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(flag) => Self::Bool(flag),
            JsonValue::Number(number) => Self::Number(number),
            JsonValue::String(text) => Self::String(text),
            JsonValue::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(entries) => Self::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (Key::from(key), Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Serialises like `JSON.stringify`: only own enumerable entries are written,
/// callables are dropped from mappings and written as `null` elsewhere.
///
/// Serialising a cyclic value does not terminate.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null | Self::Callable(_) => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => number.serialize(serializer),
            Self::String(text) => serializer.serialize_str(text),
            Self::Mapping(mapping) => mapping.serialize(serializer),
            Self::Sequence(sequence) => sequence.serialize(serializer),
        }
    }
}

impl Serialize for MappingRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries: Vec<(Key, Value)> = self
            .entries()
            .into_iter()
            .filter(|(_, value)| !value.is_callable())
            .collect();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

impl Serialize for SequenceRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let elements = self.elements();
        let mut seq = serializer.serialize_seq(Some(elements.len()))?;
        for element in &elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Self::from)
    }
}
