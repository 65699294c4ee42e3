//! Host element descriptions built from a composition.
//!
//! The composers stop at a [`ResolvedStyle`]. Turning that into a stylesheet
//! rule is the job of an external CSS-in-JS style engine, reached through the
//! [`RuleRenderer`] trait. This module wires the two together the way a Box
//! or Text component would: pick the tag, compose the style, register the
//! rule, and forward leftover props as attributes.

use crate::compose::{box_style, text_style, Composition};
use crate::style::{PropValue, Props, ResolvedStyle};
use crate::theme::Theme;

/// Tag used when no `as` prop is given.
pub const DEFAULT_TAG: &str = "div";

/// Registers a style as a rule and returns the class name to apply.
///
/// Implementations decide how rules are stored and named; the same style
/// should map to the same class name.
pub trait RuleRenderer {
    fn render_rule(&mut self, style: &ResolvedStyle) -> String;
}

impl<F> RuleRenderer for F
where
    F: FnMut(&ResolvedStyle) -> String,
{
    fn render_rule(&mut self, style: &ResolvedStyle) -> String {
        self(style)
    }
}

/// A host element ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element tag, from the `as` prop or [`DEFAULT_TAG`].
    pub tag: String,
    /// Class name returned by the rule renderer.
    pub class_name: String,
    /// Props neither composer recognized.
    pub attributes: Props,
}

/// Removes the `as` prop, returning the tag to render.
fn take_tag(props: &Props) -> (String, Props) {
    let mut props = props.clone();
    let tag = match props.remove("as") {
        Some(PropValue::Str(tag)) if !tag.is_empty() => tag,
        _ => DEFAULT_TAG.to_string(),
    };
    (tag, props)
}

fn build(tag: String, composition: Composition, renderer: &mut impl RuleRenderer) -> Element {
    let class_name = renderer.render_rule(&composition.style);
    Element {
        tag,
        class_name,
        attributes: composition.rest,
    }
}

/// Renders a Box: layout props become a rule, everything else an attribute.
///
/// # Example
///
/// ```rust
/// use boxstyle::{render_box, Props, ResolvedStyle, Theme};
///
/// let theme = Theme::default();
/// let mut rules = Vec::new();
/// let mut renderer = |style: &ResolvedStyle| {
///     rules.push(style.to_css());
///     format!("r{}", rules.len())
/// };
///
/// let el = render_box(&Props::new().set("as", "section").set("m", 2), None, &theme, &mut renderer);
/// assert_eq!(el.tag, "section");
/// assert_eq!(el.class_name, "r1");
/// assert!(rules[0].contains("margin-top:4px"));
/// ```
pub fn render_box(
    props: &Props,
    overrides: Option<&ResolvedStyle>,
    theme: &Theme,
    renderer: &mut impl RuleRenderer,
) -> Element {
    let (tag, props) = take_tag(props);
    build(tag, box_style(&props, overrides, theme), renderer)
}

/// Renders Text: typography and layout props become one rule.
pub fn render_text(
    props: &Props,
    overrides: Option<&ResolvedStyle>,
    theme: &Theme,
    renderer: &mut impl RuleRenderer,
) -> Element {
    let (tag, props) = take_tag(props);
    build(tag, text_style(&props, overrides, theme), renderer)
}
