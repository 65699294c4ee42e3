//! Themes: the scales and named values style props resolve against.
//!
//! Every resolver and composer takes the theme as an explicit argument.
//! Callers that don't carry their own theme use [`default_theme`], a
//! process-wide instance built once on first use.
//!
//! ## Theme Files
//!
//! Themes load from YAML or JSON with the same camelCase shape:
//!
//! ```yaml
//! scale: ["0px", "2px", "4px", "8px", "16px", "24px", "32px"]
//! scalePreset: { small: 8px, medium: 16px, large: 24px }
//! borderRadius: { small: 4px, medium: 8px, circle: 10000px }
//! fontFamily: { roboto: Roboto }
//! fontWeight: { light: 300, regular: 400, bold: 700 }
//! textScale: ["10.5px", "12px", "14px", "16px", "20px", "28px"]
//! textLineHeight: ["16px", "18px", "20px", "24px", "26px", "36px"]
//! text: { fontFamily: roboto, fontWeight: regular, color: black, size: 2 }
//! colors: { black: "#121212", white: white }
//! layout: { display: flex }   # optional
//! ```
//!
//! Loading validates the shape once, so resolution never has to.

#[allow(clippy::module_inception)]
mod theme;

use once_cell::sync::Lazy;

pub use theme::{LayoutDefaults, TextDefaults, Theme, THEME_EXTENSIONS};

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(Theme::default);

/// Returns the shared default theme.
pub fn default_theme() -> &'static Theme {
    &DEFAULT_THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_shared() {
        assert!(std::ptr::eq(default_theme(), default_theme()));
        assert_eq!(default_theme(), &Theme::default());
    }
}
