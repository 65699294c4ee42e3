//! Text composer: typography props layered on top of Box.

use crate::resolve::{
    pixel_or_literal, resolve_color, resolve_font_family, resolve_font_weight,
    resolve_line_height, resolve_text_size,
};
use crate::style::{PropValue, Props, RawValue, ResolvedStyle};
use crate::theme::Theme;

use super::box_style::compose_box;
use super::chain::{self, Resolved};
use super::Composition;

/// Props consumed by the Text composer outside the alias chain.
const TEXT_PROPS: &[&str] = &["fontFamily", "fontWeight", "color", "italic", "bold", "lineHeight"];

/// Returns `true` for every prop name the Text composer consumes.
pub fn is_text_prop(name: &str) -> bool {
    chain::names(chain::TEXT, name) || TEXT_PROPS.contains(&name)
}

fn present<'p>(props: &'p Props, name: &str) -> Option<RawValue<'p>> {
    props.get(name).and_then(PropValue::raw)
}

/// Computes the Text-level style for a prop bag.
///
/// Font family, weight, color, and size fall back to `theme.text` when
/// unset. A color or weight that is set but empty (or zero) shadows the
/// default and emits nothing. A size, zero included, sets both `fontSize`
/// and the paired `lineHeight`; a truthy `lineHeight` prop wins over the
/// pair. `italic` and `bold` fire on any truthy value. The returned
/// [`Composition::rest`] is meant for [`compose_box`].
///
/// # Example
///
/// ```rust
/// use boxstyle::{compose_text, Props, Theme};
///
/// let theme = Theme::default();
/// let out = compose_text(&Props::new().set("size", 4).set("color", "gray"), &theme);
///
/// assert_eq!(out.style.get("fontFamily"), Some("Roboto"));
/// assert_eq!(out.style.get("fontSize"), Some("20px"));
/// assert_eq!(out.style.get("lineHeight"), Some("26px"));
/// assert_eq!(out.style.get("color"), Some("#e6e6e6"));
/// ```
pub fn compose_text(props: &Props, theme: &Theme) -> Composition {
    let defaults = &theme.text;
    let aliases = Resolved::default().walk(chain::TEXT, props);
    let mut style = ResolvedStyle::new();

    let family = present(props, "fontFamily").unwrap_or(RawValue::Str(&defaults.font_family));
    style.set("fontFamily", resolve_font_family(family, theme));

    let color = match props.get("color") {
        Some(value) => value.truthy(),
        None => non_empty(&defaults.color),
    };
    if let Some(color) = color {
        style.set("color", resolve_color(color, theme));
    }

    let weight = match props.get("fontWeight") {
        Some(value) => value.truthy(),
        None => defaults.font_weight.truthy(),
    };
    if let Some(weight) = weight {
        style.set("fontWeight", resolve_font_weight(weight, theme));
    }

    let size = aliases.get("fontSize").unwrap_or(&defaults.size);
    if let Some(size) = size.raw() {
        style.set("fontSize", resolve_text_size(size, theme));
        style.set("lineHeight", resolve_line_height(size, theme));
    }

    if let Some(line_height) = props.get("lineHeight").and_then(PropValue::truthy) {
        style.set("lineHeight", pixel_or_literal(line_height));
    }

    for name in ["textAlign", "textDecoration", "textTransform"] {
        if let Some(value) = aliases.get(name).and_then(PropValue::truthy) {
            style.set(name, value.to_string());
        }
    }

    if props.get("italic").is_some_and(PropValue::is_truthy) {
        style.set("fontStyle", "italic");
    }

    if props.get("bold").is_some_and(PropValue::is_truthy) {
        style.set("fontWeight", "bold");
    }

    Composition {
        style,
        rest: props.without(is_text_prop),
    }
}

/// Full Text style: Box style from the leftover props, then the Text style,
/// then `overrides`, with later layers winning.
///
/// The returned `rest` holds the props neither composer recognized.
///
/// # Example
///
/// ```rust
/// use boxstyle::{text_style, Props, ResolvedStyle, Theme};
///
/// let theme = Theme::default();
/// let props = Props::new().set("margin", 25).set("color", "red").set("title", "hi");
/// let overrides = ResolvedStyle::new().with("color", "blue");
/// let out = text_style(&props, Some(&overrides), &theme);
///
/// assert_eq!(out.style.get("marginTop"), Some("25px"));
/// assert_eq!(out.style.get("color"), Some("blue"));
/// assert_eq!(out.rest, Props::new().set("title", "hi"));
/// ```
pub fn text_style(props: &Props, overrides: Option<&ResolvedStyle>, theme: &Theme) -> Composition {
    let text = compose_text(props, theme);
    let Composition { mut style, rest } = compose_box(&text.rest, theme);
    style.merge(&text.style);
    if let Some(overrides) = overrides {
        style.merge(overrides);
    }
    Composition { style, rest }
}

fn non_empty(s: &str) -> Option<RawValue<'_>> {
    (!s.is_empty()).then_some(RawValue::Str(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(props: Props) -> Composition {
        compose_text(&props, &Theme::default())
    }

    #[test]
    fn test_defaults_from_theme() {
        let out = compose(Props::new());
        assert_eq!(
            out.style.to_css(),
            "font-family:Roboto;color:#121212;font-weight:400;font-size:14px;line-height:20px"
        );
    }

    #[test]
    fn test_literal_family_and_large_size() {
        let out = compose(Props::new().set("fontFamily", "Arial").set("size", 30));
        assert_eq!(out.style.get("fontFamily"), Some("Arial"));
        assert_eq!(out.style.get("fontSize"), Some("30px"));
        assert_eq!(out.style.get("lineHeight"), Some("30px"));
    }

    #[test]
    fn test_size_pairs_line_height() {
        let out = compose(Props::new().set("size", 2));
        assert_eq!(out.style.get("fontSize"), Some("14px"));
        assert_eq!(out.style.get("lineHeight"), Some("20px"));
    }

    #[test]
    fn test_size_zero_counts() {
        let out = compose(Props::new().set("fontSize", 0));
        assert_eq!(out.style.get("fontSize"), Some("10.5px"));
        assert_eq!(out.style.get("lineHeight"), Some("16px"));
    }

    #[test]
    fn test_font_size_beats_size() {
        let out = compose(Props::new().set("size", 1).set("fontSize", 3));
        assert_eq!(out.style.get("fontSize"), Some("16px"));
    }

    #[test]
    fn test_string_size_passes_through() {
        let out = compose(Props::new().set("size", "1.5rem"));
        assert_eq!(out.style.get("fontSize"), Some("1.5rem"));
        assert_eq!(out.style.get("lineHeight"), Some("1.5rem"));
    }

    #[test]
    fn test_explicit_line_height() {
        let out = compose(Props::new().set("size", 2).set("lineHeight", 22));
        assert_eq!(out.style.get("lineHeight"), Some("22px"));

        let out = compose(Props::new().set("lineHeight", "1.4em"));
        assert_eq!(out.style.get("lineHeight"), Some("1.4em"));
    }

    #[test]
    fn test_weight_keywords_and_bold() {
        let out = compose(Props::new().set("fontWeight", "light"));
        assert_eq!(out.style.get("fontWeight"), Some("300"));

        let out = compose(Props::new().set("fontWeight", "light").set("bold", true));
        assert_eq!(out.style.get("fontWeight"), Some("bold"));

        let out = compose(Props::new().set("bold", false));
        assert_eq!(out.style.get("fontWeight"), Some("400"));
    }

    #[test]
    fn test_aliases() {
        let out = compose(
            Props::new()
                .set("align", "center")
                .set("decoration", "underline")
                .set("transform", "uppercase")
                .set("textTransform", "lowercase"),
        );
        assert_eq!(out.style.get("textAlign"), Some("center"));
        assert_eq!(out.style.get("textDecoration"), Some("underline"));
        assert_eq!(out.style.get("textTransform"), Some("lowercase"));
    }

    #[test]
    fn test_italic() {
        assert_eq!(
            compose(Props::new().set("italic", true)).style.get("fontStyle"),
            Some("italic")
        );
        assert_eq!(compose(Props::new().set("italic", false)).style.get("fontStyle"), None);
    }

    #[test]
    fn test_truthy_flags() {
        let out = compose(Props::new().set("italic", 1).set("bold", "true"));
        assert_eq!(out.style.get("fontStyle"), Some("italic"));
        assert_eq!(out.style.get("fontWeight"), Some("bold"));

        let out = compose(Props::new().set("italic", 0).set("bold", ""));
        assert_eq!(out.style.get("fontStyle"), None);
        assert_eq!(out.style.get("fontWeight"), Some("400"));
    }

    #[test]
    fn test_empty_color_shadows_default() {
        let out = compose(Props::new().set("color", ""));
        assert_eq!(out.style.get("color"), None);
        assert!(out.rest.is_empty());
    }

    #[test]
    fn test_zero_weight_shadows_default() {
        let out = compose(Props::new().set("fontWeight", 0));
        assert_eq!(out.style.get("fontWeight"), None);
    }

    #[test]
    fn test_zero_line_height_keeps_pair() {
        let out = compose(Props::new().set("lineHeight", 0));
        assert_eq!(out.style.get("lineHeight"), Some("20px"));
    }

    #[test]
    fn test_empty_align_is_skipped() {
        let out = compose(Props::new().set("align", "").set("decoration", 0));
        assert_eq!(out.style.get("textAlign"), None);
        assert_eq!(out.style.get("textDecoration"), None);
    }

    #[test]
    fn test_theme_without_default_color() {
        let mut theme = Theme::default();
        theme.text.color = String::new();
        let out = compose_text(&Props::new(), &theme);
        assert_eq!(out.style.get("color"), None);
    }

    #[test]
    fn test_rest_excludes_text_props() {
        let out = compose(
            Props::new()
                .set("color", "red")
                .set("align", "left")
                .set("italic", true)
                .set("m", 2)
                .set("id", "x"),
        );
        assert_eq!(out.rest, Props::new().set("m", 2).set("id", "x"));
    }

    #[test]
    fn test_text_style_layers() {
        let theme = Theme::default();
        let props = Props::new()
            .set("margin", 25)
            .set("padding", 25)
            .set("color", "red")
            .set("display", "inline");
        let out = text_style(&props, None, &theme);
        assert_eq!(out.style.get("marginLeft"), Some("25px"));
        assert_eq!(out.style.get("paddingTop"), Some("25px"));
        assert_eq!(out.style.get("color"), Some("red"));
        assert_eq!(out.style.get("display"), Some("inline"));
        assert!(out.rest.is_empty());
        // box declarations come first
        assert_eq!(out.style.iter().next(), Some(("position", "relative")));
    }

    #[test]
    fn test_text_style_overrides_win() {
        let mut theme = Theme::default();
        theme.layout.display = "flex".to_string();
        let overrides = ResolvedStyle::new().with("display", "inline-block");
        let out = text_style(&Props::new(), Some(&overrides), &theme);
        assert_eq!(out.style.get("display"), Some("inline-block"));
    }
}
