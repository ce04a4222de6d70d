//! Shared, insertion-ordered mappings.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::{Key, Value};

struct Property {
    key: Key,
    value: Value,
    enumerable: bool,
}

#[derive(Default)]
struct Mapping {
    properties: Vec<Property>,
    positions: BTreeMap<Key, usize>,
    base: Option<MappingRef>,
}

impl Mapping {
    fn own(&self, key: &Key) -> Option<&Property> {
        self.positions
            .get(key)
            .and_then(|&index| self.properties.get(index))
    }

    fn define(&mut self, key: Key, value: Value, enumerable: Option<bool>) -> Option<Value> {
        let existing = self
            .positions
            .get(&key)
            .and_then(|&index| self.properties.get_mut(index));
        if let Some(property) = existing {
            if let Some(flag) = enumerable {
                property.enumerable = flag;
            }
            return Some(std::mem::replace(&mut property.value, value));
        }
        self.positions.insert(key.clone(), self.properties.len());
        self.properties.push(Property {
            key,
            value,
            enumerable: enumerable.unwrap_or(true),
        });
        None
    }
}

/// Handle to a keyed container.
///
/// Cloning the handle shares the underlying mapping; use [`MappingRef::ptr_eq`]
/// to test whether two handles name the same mapping.
///
/// Own properties keep their insertion order. Each property is either
/// enumerable (the default) or hidden; hidden properties and properties
/// inherited from a [base](MappingRef::with_base) can be read with
/// [`MappingRef::get`] but are never listed by [`MappingRef::entries`], and so
/// never take part in a merge.
#[derive(Clone, Default)]
pub struct MappingRef(Rc<RefCell<Mapping>>);

impl MappingRef {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping that inherits the properties of `base`.
    ///
    /// ```
    /// use semantic_merge::MappingRef;
    ///
    /// let parent: MappingRef = [("inherited", "yes")].into_iter().collect();
    /// let child = MappingRef::with_base(&parent);
    /// assert!(child.get("inherited").is_some());
    /// assert!(child.is_empty());
    /// ```
    #[must_use]
    pub fn with_base(base: &Self) -> Self {
        Self(Rc::new(RefCell::new(Mapping {
            base: Some(base.clone()),
            ..Mapping::default()
        })))
    }

    /// Returns the mapping this one inherits from, if any.
    #[must_use]
    pub fn base(&self) -> Option<Self> {
        self.0.borrow().base.clone()
    }

    /// Set `key` to `value` as an own property, returning the previous own
    /// value.
    ///
    /// New keys are appended and enumerable. Overwriting an existing own key
    /// keeps its position and visibility.
    pub fn insert(&self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().define(key.into(), value.into(), None)
    }

    /// Set `key` to `value` as a hidden own property.
    ///
    /// Hidden properties are readable but never enumerated.
    pub fn insert_hidden(&self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().define(key.into(), value.into(), Some(false))
    }

    /// Look `key` up among own properties, then along the base chain.
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<Value> {
        let wanted: Key = key.into();
        self.lookup(&wanted)
    }

    fn lookup(&self, key: &Key) -> Option<Value> {
        let inner = self.0.borrow();
        inner.own(key).map_or_else(
            || inner.base.as_ref().and_then(|base| base.lookup(key)),
            |property| Some(property.value.clone()),
        )
    }

    /// Look `key` up among own properties only, hidden ones included.
    #[must_use]
    pub fn get_own(&self, key: impl Into<Key>) -> Option<Value> {
        let wanted: Key = key.into();
        self.0
            .borrow()
            .own(&wanted)
            .map(|property| property.value.clone())
    }

    /// Returns `true` when `key` resolves to a property, own or inherited.
    #[must_use]
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` when `key` is an own property, hidden ones included.
    #[must_use]
    pub fn has_own(&self, key: impl Into<Key>) -> bool {
        let wanted: Key = key.into();
        self.0.borrow().own(&wanted).is_some()
    }

    /// Snapshot of the own enumerable entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Key, Value)> {
        self.0
            .borrow()
            .properties
            .iter()
            .filter(|property| property.enumerable)
            .map(|property| (property.key.clone(), property.value.clone()))
            .collect()
    }

    /// Own enumerable keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.0
            .borrow()
            .properties
            .iter()
            .filter(|property| property.enumerable)
            .map(|property| property.key.clone())
            .collect()
    }

    /// Number of own enumerable entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0
            .borrow()
            .properties
            .iter()
            .filter(|property| property.enumerable)
            .count()
    }

    /// Returns `true` when the mapping has no own enumerable entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when both handles point at the same mapping.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<K, V> FromIterator<(K, V)> for MappingRef
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl fmt::Debug for MappingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(inner) = self.0.try_borrow() else {
            return f.write_str("MappingRef(<borrowed>)");
        };
        let keys: Vec<&str> = inner
            .properties
            .iter()
            .filter(|property| property.enumerable)
            .map(|property| property.key.as_str())
            .collect();
        f.debug_struct("MappingRef")
            .field("keys", &keys)
            .field("has_base", &inner.base.is_some())
            .finish_non_exhaustive()
    }
}
