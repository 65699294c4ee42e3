//! Box composer: layout, spacing, sizing, borders, and flex props.

use crate::resolve::{dimension, pixel_or_literal, resolve_color, resolve_radius, resolve_spacing};
use crate::style::{PropValue, Props, ResolvedStyle};
use crate::theme::Theme;

use super::chain::{self, Resolved};
use super::Composition;

/// Sides resolved through the spacing scale, in declaration order.
const SPACING_SIDES: &[&str] = &[
    "marginBottom",
    "marginLeft",
    "marginRight",
    "marginTop",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
];

/// Offsets and border widths: numbers become pixels.
const PIXEL_PROPS: &[&str] = &[
    "bottom",
    "left",
    "right",
    "top",
    "borderBottomWidth",
    "borderLeftWidth",
    "borderRightWidth",
    "borderTopWidth",
];

const RADIUS_CORNERS: &[&str] = &[
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
];

/// Sizing props: fractions become percentages.
const DIMENSION_PROPS: &[&str] = &["height", "maxHeight", "maxWidth", "minHeight", "minWidth", "width"];

/// Props copied through without interpretation.
const PASSTHROUGH_PROPS: &[&str] = &[
    "flex",
    "border",
    "borderColor",
    "borderBottomColor",
    "borderLeftColor",
    "borderRightColor",
    "borderTopColor",
    "alignItems",
    "alignSelf",
    "display",
    "borderStyle",
    "flexBasis",
    "flexDirection",
    "flexGrow",
    "flexShrink",
    "flexWrap",
    "justifyContent",
    "opacity",
    "overflow",
    "position",
    "verticalAlign",
    "zIndex",
    "boxSizing",
];

/// Returns `true` for every prop name the Box composer consumes.
pub fn is_box_prop(name: &str) -> bool {
    [
        chain::MARGIN,
        chain::PADDING,
        chain::BORDER_RADIUS,
        chain::BORDER_WIDTH,
        chain::BACKGROUND,
    ]
    .iter()
    .any(|c| chain::names(*c, name))
        || PIXEL_PROPS.contains(&name)
        || DIMENSION_PROPS.contains(&name)
        || PASSTHROUGH_PROPS.contains(&name)
}

/// An aliased value when the name belongs to a chain, the prop otherwise.
fn lookup<'p>(aliases: &Resolved<'p>, props: &'p Props, name: &str) -> Option<&'p PropValue> {
    aliases.get(name).or_else(|| props.get(name))
}

/// Computes the Box style for a prop bag.
///
/// The style starts from the theme's layout defaults, then adds each group
/// of recognized props. Spacing, offsets, border widths, radii, sizes and
/// the background skip zero; pass-through props keep it. Every recognized
/// prop is consumed, even when its value produces nothing; the rest come
/// back untouched in [`Composition::rest`].
///
/// # Example
///
/// ```rust
/// use boxstyle::{compose_box, Props, Theme};
///
/// let theme = Theme::default();
/// let out = compose_box(&Props::new().set("m", 3).set("marginTop", 5).set("id", "nav"), &theme);
///
/// assert_eq!(out.style.get("marginTop"), Some("24px"));
/// assert_eq!(out.style.get("marginLeft"), Some("8px"));
/// assert_eq!(out.rest, Props::new().set("id", "nav"));
/// ```
pub fn compose_box(props: &Props, theme: &Theme) -> Composition {
    let layout = &theme.layout;
    let mut style = ResolvedStyle::new()
        .with("position", layout.position.as_str())
        .with("flexDirection", layout.flex_direction.as_str())
        .with("display", layout.display.as_str())
        .with("boxSizing", layout.box_sizing.as_str());

    let aliases = Resolved::default()
        .walk(chain::MARGIN, props)
        .walk(chain::PADDING, props)
        .walk(chain::BORDER_WIDTH, props)
        .walk(chain::BORDER_RADIUS, props)
        .walk(chain::BACKGROUND, props);
    let value = |name: &'static str| lookup(&aliases, props, name);

    for &side in SPACING_SIDES {
        if let Some(raw) = value(side).and_then(PropValue::truthy) {
            style.set(side, resolve_spacing(raw, theme));
        }
    }

    for &prop in PIXEL_PROPS {
        if let Some(raw) = value(prop).and_then(PropValue::truthy) {
            style.set(prop, pixel_or_literal(raw));
        }
    }

    for &corner in RADIUS_CORNERS {
        if let Some(raw) = value(corner).and_then(PropValue::truthy) {
            style.set(corner, resolve_radius(raw, theme));
        }
    }

    for &prop in DIMENSION_PROPS {
        if let Some(raw) = value(prop).and_then(PropValue::truthy) {
            style.set(prop, dimension(raw));
        }
    }

    if let Some(raw) = value("backgroundColor").and_then(PropValue::truthy) {
        style.set("backgroundColor", resolve_color(raw, theme));
    }

    for &prop in PASSTHROUGH_PROPS {
        if let Some(raw) = props.get(prop).and_then(PropValue::raw) {
            style.set(prop, raw.to_string());
        }
    }

    Composition {
        style,
        rest: props.without(is_box_prop),
    }
}

/// Box style with an explicit override merged on top.
///
/// Properties in `overrides` win over computed ones.
pub fn box_style(props: &Props, overrides: Option<&ResolvedStyle>, theme: &Theme) -> Composition {
    let mut out = compose_box(props, theme);
    if let Some(overrides) = overrides {
        out.style.merge(overrides);
    }
    out
}
