//! Value resolvers: a raw prop value plus a theme in, a CSS value out.
//!
//! The scale resolvers classify their input once into a [`Token`]; the
//! name resolvers are plain table lookups with pass-through:
//!
//! | Resolver | Number | Theme keyword | Other string |
//! |----------|--------|---------------|--------------|
//! | [`resolve_spacing`] | `scale[n]`, else `{n}px` | `scalePreset` | as is |
//! | [`resolve_radius`] | `{n}px` | `borderRadius` | as is |
//! | [`resolve_text_size`] | `textScale[n]`, else `{n}px` | n/a | as is |
//! | [`resolve_line_height`] | `textLineHeight[n]`, else `{n}px` | n/a | as is |
//! | [`resolve_color`] | as is | `colors` | as is |
//! | [`resolve_font_family`] | as is | `fontFamily` | as is |
//! | [`resolve_font_weight`] | as is | `fontWeight` | as is |
//!
//! Numeric strings (`"3"`, `"-1.5"`) count as numbers. A number indexes a
//! scale only when it is a non-negative integer inside the scale; anything
//! else degrades to a pixel value. None of these functions can fail.
//!
//! ```rust
//! use boxstyle::{resolve_spacing, Theme};
//!
//! let theme = Theme::default();
//! assert_eq!(resolve_spacing(3, &theme), "8px");
//! assert_eq!(resolve_spacing("3", &theme), "8px");
//! assert_eq!(resolve_spacing(20, &theme), "20px");
//! assert_eq!(resolve_spacing("large", &theme), "24px");
//! assert_eq!(resolve_spacing("auto", &theme), "auto");
//! ```

use std::collections::HashMap;

use crate::style::{format_number, RawValue, Token};
use crate::theme::Theme;

/// `{n}px`.
pub fn pixels(n: f64) -> String {
    format!("{}px", format_number(n))
}

fn scale_step(n: f64, scale: &[String], name: &str) -> String {
    if n >= 0.0 && n.fract() == 0.0 {
        if let Some(step) = scale.get(n as usize) {
            return step.clone();
        }
    }
    log::trace!("{} level {} outside scale of {}, using pixels", name, n, scale.len());
    pixels(n)
}

/// Plain key lookup with pass-through; these tables have no numeric levels.
fn keyed<V: ToString>(raw: RawValue<'_>, table: &HashMap<String, V>) -> String {
    let key = raw.to_string();
    match table.get(&key) {
        Some(value) => value.to_string(),
        None => key,
    }
}

/// Maps a color name through `theme.colors`; raw CSS colors pass through.
pub fn resolve_color<'a>(value: impl Into<RawValue<'a>>, theme: &Theme) -> String {
    keyed(value.into(), &theme.colors)
}

/// Maps a font family keyword through `theme.fontFamily`.
pub fn resolve_font_family<'a>(value: impl Into<RawValue<'a>>, theme: &Theme) -> String {
    keyed(value.into(), &theme.font_family)
}

/// Maps a weight keyword (`bold`) to its number; numbers pass through.
pub fn resolve_font_weight<'a>(value: impl Into<RawValue<'a>>, theme: &Theme) -> String {
    keyed(value.into(), &theme.font_weight)
}

/// Resolves a margin or padding value.
pub fn resolve_spacing<'a>(value: impl Into<RawValue<'a>>, theme: &Theme) -> String {
    match value.into().tokenize(&theme.scale_preset) {
        Token::Index(n) => scale_step(n, &theme.scale, "spacing"),
        Token::Keyword(k) => theme.scale_preset[k].clone(),
        Token::Literal(s) => s.to_string(),
    }
}

/// Resolves a corner radius. Numbers are always pixels, never scale levels.
pub fn resolve_radius<'a>(value: impl Into<RawValue<'a>>, theme: &Theme) -> String {
    match value.into().tokenize(&theme.border_radius) {
        Token::Index(n) => pixels(n),
        Token::Keyword(k) => theme.border_radius[k].clone(),
        Token::Literal(s) => s.to_string(),
    }
}

/// Resolves a font size from a text level.
pub fn resolve_text_size<'a>(value: impl Into<RawValue<'a>>, theme: &Theme) -> String {
    let raw = value.into();
    match raw.as_number() {
        Some(n) => scale_step(n, &theme.text_scale, "text size"),
        None => raw.to_string(),
    }
}

/// Resolves the line height paired with a text level.
pub fn resolve_line_height<'a>(value: impl Into<RawValue<'a>>, theme: &Theme) -> String {
    let raw = value.into();
    match raw.as_number() {
        Some(n) => scale_step(n, &theme.text_line_height, "line height"),
        None => raw.to_string(),
    }
}

/// Numbers and numeric strings become pixels; other strings pass through.
///
/// Used for position offsets, border widths, and explicit line heights.
pub fn pixel_or_literal<'a>(value: impl Into<RawValue<'a>>) -> String {
    let raw = value.into();
    match raw.as_number() {
        Some(n) => pixels(n),
        None => raw.to_string(),
    }
}

/// Sizing rule: numbers in `(0, 1]` are fractions of the parent, other
/// numbers are pixels, strings pass through.
///
/// ```rust
/// use boxstyle::dimension;
///
/// assert_eq!(dimension(0.5), "50%");
/// assert_eq!(dimension(1), "100%");
/// assert_eq!(dimension(2), "2px");
/// assert_eq!(dimension("10em"), "10em");
/// ```
pub fn dimension<'a>(value: impl Into<RawValue<'a>>) -> String {
    let raw = value.into();
    match raw.as_number() {
        Some(n) if n > 0.0 && n <= 1.0 => format!("{}%", format_number(n * 100.0)),
        Some(n) => pixels(n),
        None => raw.to_string(),
    }
}
