//! Shorthand alias chains.
//!
//! A chain is an ordered table of `(name, fallback)` pairs. Walking it once
//! gives every name its value: the prop itself when set, otherwise whatever
//! its fallback resolved to. Fallbacks always point at an earlier entry, so
//! a single forward pass is enough.

use crate::style::{PropValue, Props};

pub(crate) type Chain = &'static [(&'static str, Option<&'static str>)];

pub(crate) const MARGIN: Chain = &[
    ("m", None),
    ("margin", Some("m")),
    ("mv", Some("margin")),
    ("marginVertical", Some("mv")),
    ("mh", Some("margin")),
    ("marginHorizontal", Some("mh")),
    ("mt", Some("marginVertical")),
    ("marginTop", Some("mt")),
    ("mb", Some("marginVertical")),
    ("marginBottom", Some("mb")),
    ("ml", Some("marginHorizontal")),
    ("marginLeft", Some("ml")),
    ("mr", Some("marginHorizontal")),
    ("marginRight", Some("mr")),
];

pub(crate) const PADDING: Chain = &[
    ("p", None),
    ("padding", Some("p")),
    ("pv", Some("padding")),
    ("paddingVertical", Some("pv")),
    ("ph", Some("padding")),
    ("paddingHorizontal", Some("ph")),
    ("pt", Some("paddingVertical")),
    ("paddingTop", Some("pt")),
    ("pb", Some("paddingVertical")),
    ("paddingBottom", Some("pb")),
    ("pl", Some("paddingHorizontal")),
    ("paddingLeft", Some("pl")),
    ("pr", Some("paddingHorizontal")),
    ("paddingRight", Some("pr")),
];

pub(crate) const BORDER_RADIUS: Chain = &[
    ("borderRadius", None),
    ("borderBottomLeftRadius", Some("borderRadius")),
    ("borderBottomRightRadius", Some("borderRadius")),
    ("borderTopLeftRadius", Some("borderRadius")),
    ("borderTopRightRadius", Some("borderRadius")),
];

pub(crate) const BORDER_WIDTH: Chain = &[
    ("borderWidth", None),
    ("borderBottomWidth", Some("borderWidth")),
    ("borderLeftWidth", Some("borderWidth")),
    ("borderRightWidth", Some("borderWidth")),
    ("borderTopWidth", Some("borderWidth")),
];

pub(crate) const BACKGROUND: Chain = &[("background", None), ("backgroundColor", Some("background"))];

pub(crate) const TEXT: Chain = &[
    ("size", None),
    ("fontSize", Some("size")),
    ("align", None),
    ("textAlign", Some("align")),
    ("decoration", None),
    ("textDecoration", Some("decoration")),
    ("transform", None),
    ("textTransform", Some("transform")),
];

/// The outcome of walking one or more chains over a prop bag.
#[derive(Debug, Default)]
pub(crate) struct Resolved<'p> {
    values: Vec<(&'static str, &'p PropValue)>,
}

impl<'p> Resolved<'p> {
    /// Walks `chain` over `props`, adding to what was resolved so far.
    pub(crate) fn walk(mut self, chain: Chain, props: &'p Props) -> Self {
        for &(name, fallback) in chain {
            let value = props
                .get(name)
                .or_else(|| fallback.and_then(|f| self.get(f)));
            if let Some(value) = value {
                self.values.push((name, value));
            }
        }
        self
    }

    /// The value `name` resolved to, set or inherited.
    pub(crate) fn get(&self, name: &str) -> Option<&'p PropValue> {
        self.values
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    }
}

/// Returns `true` if `name` appears anywhere in `chain`.
pub(crate) fn names(chain: Chain, name: &str) -> bool {
    chain.iter().any(|(k, _)| *k == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadest_alias_fills_every_side() {
        let props = Props::new().set("m", 3);
        let resolved = Resolved::default().walk(MARGIN, &props);
        for side in ["marginTop", "marginBottom", "marginLeft", "marginRight"] {
            assert_eq!(resolved.get(side), Some(&PropValue::Number(3.0)));
        }
    }

    #[test]
    fn test_axis_overrides_shorthand() {
        let props = Props::new().set("margin", 1).set("mv", 2);
        let resolved = Resolved::default().walk(MARGIN, &props);
        assert_eq!(resolved.get("marginTop"), Some(&PropValue::Number(2.0)));
        assert_eq!(resolved.get("marginBottom"), Some(&PropValue::Number(2.0)));
        assert_eq!(resolved.get("marginLeft"), Some(&PropValue::Number(1.0)));
    }

    #[test]
    fn test_long_form_beats_short_form() {
        let props = Props::new().set("pt", 1).set("paddingTop", 4);
        let resolved = Resolved::default().walk(PADDING, &props);
        assert_eq!(resolved.get("paddingTop"), Some(&PropValue::Number(4.0)));
        assert_eq!(resolved.get("paddingLeft"), None);
    }

    #[test]
    fn test_set_but_empty_value_still_blocks_fallback() {
        let props = Props::new().set("m", 2).set("marginTop", "");
        let resolved = Resolved::default().walk(MARGIN, &props);
        assert_eq!(resolved.get("marginTop"), Some(&PropValue::from("")));
    }

    #[test]
    fn test_fallbacks_point_backwards() {
        for chain in [MARGIN, PADDING, BORDER_RADIUS, BORDER_WIDTH, BACKGROUND, TEXT] {
            for (i, (_, fallback)) in chain.iter().enumerate() {
                if let Some(f) = fallback {
                    assert!(chain[..i].iter().any(|(k, _)| k == f), "{} must precede use", f);
                }
            }
        }
    }

    #[test]
    fn test_names() {
        assert!(names(MARGIN, "mh"));
        assert!(!names(MARGIN, "ph"));
    }
}
