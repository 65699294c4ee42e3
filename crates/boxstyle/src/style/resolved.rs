//! The resolved style object handed to a rule renderer.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// CSS properties mapped to final value strings, in insertion order.
///
/// Property names are camelCase (`marginTop`), the form CSS-in-JS engines
/// accept. Setting an existing property replaces its value without moving
/// it, so merging follows object-spread semantics: the last write wins.
///
/// # Example
///
/// ```rust
/// use boxstyle::ResolvedStyle;
///
/// let mut style = ResolvedStyle::new();
/// style.set("marginTop", "8px");
/// style.set("display", "flex");
///
/// assert_eq!(style.get("marginTop"), Some("8px"));
/// assert_eq!(style.to_css(), "margin-top:8px;display:flex");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    entries: Vec<(String, String)>,
}

impl ResolvedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any previous value in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlays `other` onto this style. Properties in `other` win.
    pub fn merge(&mut self, other: &ResolvedStyle) {
        for (k, v) in &other.entries {
            self.set(k.clone(), v.clone());
        }
    }

    /// Renders a CSS declaration block with kebab-case property names.
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}:{}", kebab_case(k), v))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResolvedStyle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = ResolvedStyle::new();
        for (k, v) in iter {
            style.set(k, v);
        }
        style
    }
}

impl Serialize for ResolvedStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// `borderTopLeftRadius` -> `border-top-left-radius`.
fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_position() {
        let mut style = ResolvedStyle::new();
        style.set("a", "1");
        style.set("b", "2");
        style.set("a", "3");
        let pairs: Vec<_> = style.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_merge_last_write_wins() {
        let mut base = ResolvedStyle::new().with("color", "black").with("display", "block");
        let over = ResolvedStyle::new().with("color", "red").with("opacity", "0.5");
        base.merge(&over);
        assert_eq!(base.get("color"), Some("red"));
        assert_eq!(base.get("display"), Some("block"));
        assert_eq!(base.get("opacity"), Some("0.5"));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(kebab_case("zIndex"), "z-index");
        assert_eq!(kebab_case("color"), "color");
    }

    #[test]
    fn test_to_css_empty() {
        assert_eq!(ResolvedStyle::new().to_css(), "");
    }

    #[test]
    fn test_serialize_as_map() {
        let style = ResolvedStyle::new().with("position", "relative").with("zIndex", "2");
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"position":"relative","zIndex":"2"}"#);
    }
}
