//! # boxstyle - Shorthand Style Props for Box and Text
//!
//! `boxstyle` turns a flat bag of shorthand style props (`m`, `ph`, `width`,
//! `borderRadius`, `size`, `color`, ...) into a resolved style object, using
//! a [`Theme`] for scale lookups and named values.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: spacing and text scales, named presets, fonts, and colors
//! - [`Props`]: the flat prop bag, holding [`PropValue`]s
//! - Resolvers ([`resolve_spacing`], [`resolve_color`], ...): one value in, one CSS value out
//! - [`compose_box`] / [`compose_text`]: a prop bag in, a [`Composition`] out
//! - [`ResolvedStyle`]: camelCase CSS properties, ready for a style engine
//! - [`RuleRenderer`]: the seam to that engine, used by [`render_box`] and [`render_text`]
//!
//! ## Quick Start
//!
//! ```rust
//! use boxstyle::{compose_box, Props, Theme};
//!
//! let theme = Theme::default();
//! let props = Props::new()
//!     .set("margin", 20)
//!     .set("ph", "small")
//!     .set("width", 0.5)
//!     .set("background", "gray")
//!     .set("id", "sidebar");
//!
//! let out = compose_box(&props, &theme);
//!
//! assert_eq!(out.style.get("marginTop"), Some("20px"));
//! assert_eq!(out.style.get("paddingLeft"), Some("8px"));
//! assert_eq!(out.style.get("width"), Some("50%"));
//! assert_eq!(out.style.get("backgroundColor"), Some("#e6e6e6"));
//! assert_eq!(out.rest, Props::new().set("id", "sidebar"));
//! ```
//!
//! ## Numbers, Keywords, and Literals
//!
//! Every resolver reads its input the same way: numbers and numeric strings
//! (`3`, `"3"`, `"-1.5"`) are scale levels, strings named in the theme are
//! keywords, and anything else is a CSS literal passed through untouched.
//! A level outside the scale degrades to pixels instead of failing.
//!
//! ```rust
//! use boxstyle::{resolve_spacing, Theme};
//!
//! let theme = Theme::default();
//! assert_eq!(resolve_spacing("3", &theme), "8px");
//! assert_eq!(resolve_spacing(40, &theme), "40px");
//! assert_eq!(resolve_spacing("medium", &theme), "16px");
//! assert_eq!(resolve_spacing("1rem", &theme), "1rem");
//! ```
//!
//! ## Text
//!
//! ```rust
//! use boxstyle::{text_style, Props, Theme};
//!
//! let theme = Theme::default();
//! let out = text_style(&Props::new().set("size", 5).set("bold", true).set("m", 2), None, &theme);
//!
//! assert_eq!(out.style.get("fontSize"), Some("28px"));
//! assert_eq!(out.style.get("lineHeight"), Some("36px"));
//! assert_eq!(out.style.get("fontWeight"), Some("bold"));
//! assert_eq!(out.style.get("marginTop"), Some("4px"));
//! ```
//!
//! ## Theme Files
//!
//! ```rust
//! use boxstyle::Theme;
//!
//! let compact = Theme::from_yaml(r##"
//! scale: ["0px", "1px", "2px", "4px"]
//! scalePreset: { small: "2px" }
//! borderRadius: {}
//! fontFamily: {}
//! fontWeight: { regular: 400 }
//! textScale: ["11px", "12px"]
//! textLineHeight: ["14px", "16px"]
//! text: { fontFamily: sans-serif, fontWeight: regular, color: "#333", size: 1 }
//! colors: {}
//! layout: { display: flex }
//! "##).unwrap();
//!
//! let theme = Theme::default().merge(compact);
//! assert_eq!(theme.layout.display, "flex");
//! assert_eq!(theme.colors["black"], "#121212");
//! ```

pub mod compose;
pub mod element;
mod error;
pub mod resolve;
pub mod style;
pub mod theme;

// Error type
pub use error::{Result, ThemeError};

// Style primitives
pub use style::{PropValue, Props, RawValue, ResolvedStyle, Token};

// Theme exports
pub use theme::{default_theme, LayoutDefaults, TextDefaults, Theme, THEME_EXTENSIONS};

// Resolvers
pub use resolve::{
    dimension, pixel_or_literal, pixels, resolve_color, resolve_font_family, resolve_font_weight,
    resolve_line_height, resolve_radius, resolve_spacing, resolve_text_size,
};

// Composers
pub use compose::{
    box_style, compose_box, compose_text, is_box_prop, is_text_prop, text_style, Composition,
};

// Elements
pub use element::{render_box, render_text, Element, RuleRenderer, DEFAULT_TAG};
