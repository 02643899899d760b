//! Record, mapping and sequence containers.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::Value;

// ============================================================================
// Record
// ============================================================================

/// A container with a fixed set of named fields.
///
/// Fields are declared up front and keep their declaration order. The
/// resolver never adds or removes fields, it only reads and overwrites them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Create a record with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field with its initial value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Mutable field lookup.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    /// Iterate fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn zeroed(&self) -> Record {
        Record {
            fields: self
                .fields
                .iter()
                .map(|(k, v)| (k.clone(), v.zeroed()))
                .collect(),
        }
    }
}

// ============================================================================
// Mapping
// ============================================================================

/// A string-keyed container whose entries may be created on write.
///
/// A mapping may declare an element prototype; entries created while a path
/// is resolved for writing start as the zeroed prototype. Without one they
/// start as an empty mapping, so nested keys can be created on the fly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: BTreeMap<String, Value>,
    prototype: Option<Box<Value>>,
}

impl Mapping {
    /// Create an untyped, empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping whose new entries start from `prototype`.
    pub fn of(prototype: impl Into<Value>) -> Self {
        Self {
            entries: BTreeMap::new(),
            prototype: Some(Box::new(prototype.into())),
        }
    }

    /// Builder-style insert.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Look up an entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Mutable entry lookup.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns the entry for `key`, creating it from the prototype if absent.
    pub fn entry(&mut self, key: &str) -> &mut Value {
        let fresh = self.new_entry();
        self.entries.entry(key.to_string()).or_insert(fresh)
    }

    /// Insert or replace an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove an entry, returning it if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The declared element prototype, if any.
    pub fn prototype(&self) -> Option<&Value> {
        self.prototype.as_deref()
    }

    fn new_entry(&self) -> Value {
        match &self.prototype {
            Some(prototype) => prototype.zeroed(),
            None => Value::Mapping(Mapping::new()),
        }
    }

    pub(crate) fn zeroed(&self) -> Mapping {
        Mapping {
            entries: BTreeMap::new(),
            prototype: self.prototype.clone(),
        }
    }
}

// ============================================================================
// Sequence
// ============================================================================

/// An index-keyed container that is always contiguous from index 0.
///
/// Growth happens one element at a time, by appending the zeroed element
/// prototype. Removal shifts later elements down, so no gaps ever appear.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    items: Vec<Value>,
    prototype: Box<Value>,
}

impl Sequence {
    /// Create an empty sequence whose elements are shaped like `prototype`.
    pub fn of(prototype: impl Into<Value>) -> Self {
        Self {
            items: Vec::new(),
            prototype: Box::new(prototype.into()),
        }
    }

    /// Create a sequence from existing items.
    pub fn from_items(prototype: impl Into<Value>, items: impl IntoIterator<Item = Value>) -> Self {
        Self {
            items: items.into_iter().collect(),
            prototype: Box::new(prototype.into()),
        }
    }

    /// Builder-style append.
    pub fn with_item(mut self, item: impl Into<Value>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Mutable element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Append one zeroed element and return it.
    pub fn grow(&mut self) -> &mut Value {
        let index = self.items.len();
        self.items.push(self.prototype.zeroed());
        &mut self.items[index]
    }

    /// Append an element.
    pub fn push(&mut self, item: impl Into<Value>) {
        self.items.push(item.into());
    }

    /// Remove the element at `index`, shifting later elements down.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Drop every element at `len` and beyond.
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element prototype.
    pub fn prototype(&self) -> &Value {
        &self.prototype
    }

    pub(crate) fn zeroed(&self) -> Sequence {
        Sequence {
            items: Vec::new(),
            prototype: self.prototype.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
