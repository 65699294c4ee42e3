//! Style composers: prop bag in, resolved style plus leftover props out.
//!
//! [`compose_box`] handles layout props and [`compose_text`] handles
//! typography. Both are pure: the same props and theme always give the same
//! [`Composition`], and nothing outside the call is touched.
//!
//! ## Alias Precedence
//!
//! Spacing props cascade from broad to specific. For `marginTop`:
//!
//! ```text
//! marginTop <- mt <- marginVertical <- mv <- margin <- m
//! ```
//!
//! Each level is used only when everything to its left is unset, so the
//! most specific prop given wins. Padding, border widths, and border radii
//! follow the same pattern.
//!
//! ## Layering
//!
//! [`text_style`] merges three layers, later ones winning:
//!
//! 1. Box style computed from the props Text didn't consume
//! 2. Text style
//! 3. Caller overrides

mod box_style;
mod chain;
mod text_style;

use crate::style::{Props, ResolvedStyle};

pub use box_style::{box_style, compose_box, is_box_prop};
pub use text_style::{compose_text, is_text_prop, text_style};

/// The result of a composer call.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Declarations produced from recognized props.
    pub style: ResolvedStyle,
    /// Props the composer did not recognize, in their original order.
    pub rest: Props,
}
