//! The flat prop bag handed to the composers.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::value::PropValue;

/// An insertion-ordered bag of props.
///
/// Setting a name that already exists replaces its value in place. Props the
/// composers don't recognize come back in the same order, so they can be
/// forwarded to the host element as attributes.
///
/// # Example
///
/// ```rust
/// use boxstyle::Props;
///
/// let props = Props::new()
///     .set("m", 2)
///     .set("width", 0.5)
///     .set("id", "sidebar");
///
/// assert_eq!(props.len(), 3);
/// assert_eq!(props.get("id").and_then(|v| v.as_str()), Some("sidebar"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: Vec<(String, PropValue)>,
}

impl Props {
    /// Creates an empty prop bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop, returning the updated bag for chaining.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a prop in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Looks up a prop by name.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Returns `true` if the prop is set, whatever its value.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes a prop, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        let pos = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates props in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a copy keeping only the props whose names fail `consumed`.
    pub(crate) fn without(&self, consumed: impl Fn(&str) -> bool) -> Props {
        Props {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| !consumed(k.as_str()))
                .cloned()
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

impl Serialize for Props {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct PropsVisitor;

impl<'de> Visitor<'de> for PropsVisitor {
    type Value = Props;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of prop names to numbers, strings, or booleans")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Props, A::Error> {
        let mut props = Props::new();
        while let Some((name, value)) = access.next_entry::<String, Option<PropValue>>()? {
            // null behaves like an unset prop
            if let Some(value) = value {
                props.insert(name, value);
            }
        }
        Ok(props)
    }
}

impl<'de> Deserialize<'de> for Props {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PropsVisitor)
    }
}
