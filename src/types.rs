//! Core types for spark-vdom.
//!
//! Attribute values and bags, mount targets, and the flag sets shared by the
//! engine and the node factory.

use std::collections::BTreeMap;
use std::fmt;

use crate::primitives::{ScopedSlots, VNodeHooks};

/// Attribute name reserved for reconciliation identity.
pub const KEY_ATTR: &str = "key";

// =============================================================================
// Attribute Values
// =============================================================================

/// A single attribute or prop value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttrValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<AttrValue>),
}

impl AttrValue {
    /// String payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value as i64)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(values: Vec<T>) -> Self {
        AttrValue::List(values.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Attribute Bag
// =============================================================================

/// Attribute/prop mapping carried by element and component vnodes.
///
/// Besides plain entries it has two reserved slots: `scoped_slots`, filled by
/// the factory when children start with a slot producer, and `hook`, which only
/// the component bridge installs.
#[derive(Clone, Default)]
pub struct Attrs {
    entries: BTreeMap<String, AttrValue>,
    /// Scoped slot producers handed to a child component.
    pub scoped_slots: Option<ScopedSlots>,
    pub(crate) hook: Option<VNodeHooks>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The reserved `key` entry.
    pub fn key(&self) -> Option<&AttrValue> {
        self.entries.get(KEY_ATTR)
    }

    /// Lifecycle hooks, present only on component placeholders.
    pub fn hook(&self) -> Option<&VNodeHooks> {
        self.hook.as_ref()
    }

    /// Number of plain entries (reserved slots are not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl fmt::Debug for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attrs")
            .field("entries", &self.entries)
            .field("scoped_slots", &self.scoped_slots.is_some())
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

// =============================================================================
// Mount Target
// =============================================================================

/// Opaque reference to a host element a component can be mounted into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef(String);

impl ElementRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Flags
// =============================================================================

bitflags::bitflags! {
    /// Classification of a tag name by the host platform.
    ///
    /// Empty flags mean the tag is not a host tag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TagFlags: u8 {
        const NONE = 0;
        const HTML = 1 << 0;
        const SVG = 1 << 1;
        /// Element that never has children (`br`, `img`, ...).
        const VOID = 1 << 2;
    }
}

bitflags::bitflags! {
    /// Lifecycle state of a component instance.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InstanceFlags: u8 {
        const NONE = 0;
        /// Created from a placeholder vnode rather than as an app root.
        const IS_COMPONENT = 1 << 0;
        const MOUNTED = 1 << 1;
        const INSERTED = 1 << 2;
        const DESTROYED = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_key() {
        let attrs = Attrs::new().with("class", "a").with("key", 7);
        assert_eq!(attrs.key(), Some(&AttrValue::Int(7)));
        assert_eq!(attrs.get("class").and_then(AttrValue::as_str), Some("a"));
        assert_eq!(attrs.len(), 2);
        assert!(attrs.hook().is_none());
    }

    #[test]
    fn test_attrs_from_iter() {
        let attrs: Attrs = [("id", "main"), ("role", "list")].into_iter().collect();
        assert!(attrs.contains("id"));
        assert!(attrs.key().is_none());
        let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["id", "role"]);
    }

    #[test]
    fn test_tag_flags() {
        let flags = TagFlags::HTML | TagFlags::VOID;
        assert!(flags.contains(TagFlags::HTML));
        assert!(!flags.contains(TagFlags::SVG));
        assert!(TagFlags::default().is_empty());
    }
}
