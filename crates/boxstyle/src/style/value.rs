//! Raw prop values and the tagged token they are parsed into.
//!
//! Props arrive as numbers, numeric strings, keywords, or CSS literals. The
//! resolvers never test string patterns inline; they parse the input once
//! into a [`Token`] and dispatch on it.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Integer or decimal, optional leading minus. `"2."` counts, `".5"` does not.
static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+\.?\d*$").unwrap());

/// A single prop value as supplied by the caller.
///
/// # Example
///
/// ```rust
/// use boxstyle::PropValue;
///
/// let n: PropValue = 4.into();
/// let s: PropValue = "small".into();
/// let b: PropValue = true.into();
/// assert_eq!(n, PropValue::Number(4.0));
/// assert_eq!(s, PropValue::Str("small".into()));
/// assert_eq!(b, PropValue::Bool(true));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Boolean flag (`italic`, `bold`, or a host attribute).
    Bool(bool),
    /// Plain number.
    Number(f64),
    /// Numeric string, theme keyword, or CSS literal.
    Str(String),
}

impl PropValue {
    /// Returns `true` when the value should produce a style declaration.
    ///
    /// Numbers always count, zero included. Strings count when non-empty.
    /// Booleans never map to a box or text declaration on their own.
    pub fn is_present(&self) -> bool {
        match self {
            PropValue::Number(_) => true,
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Bool(_) => false,
        }
    }

    /// Returns `true` for `true`, non-zero numbers, and non-empty strings.
    ///
    /// Flags like `bold` and most layout groups only fire on a truthy value,
    /// so `margin: 0` or `bold: ""` emit nothing.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Str(s) => !s.is_empty(),
        }
    }

    /// Extracts the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrows the value as a resolver input, if it is present.
    pub fn raw(&self) -> Option<RawValue<'_>> {
        if !self.is_present() {
            return None;
        }
        match self {
            PropValue::Number(n) => Some(RawValue::Number(*n)),
            PropValue::Str(s) => Some(RawValue::Str(s)),
            PropValue::Bool(_) => None,
        }
    }

    /// Like [`raw`](Self::raw), but zero counts as unset.
    pub fn truthy(&self) -> Option<RawValue<'_>> {
        self.raw().filter(|_| self.is_truthy())
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(n as f64)
    }
}

impl From<u32> for PropValue {
    fn from(n: u32) -> Self {
        PropValue::Number(n as f64)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

/// Borrowed resolver input: a number or a string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Number(f64),
    Str(&'a str),
}

impl<'a> RawValue<'a> {
    /// Returns the numeric value when the input is a number or a numeric string.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            RawValue::Number(n) => Some(n),
            RawValue::Str(s) if NUMERIC.is_match(s) => s.parse().ok(),
            RawValue::Str(_) => None,
        }
    }

    /// Parses the input against a keyword table.
    ///
    /// Numeric input becomes [`Token::Index`]. A string found in `keywords`
    /// becomes [`Token::Keyword`]; any other string is a [`Token::Literal`].
    pub fn tokenize<V>(self, keywords: &HashMap<String, V>) -> Token<'a> {
        if let Some(n) = self.as_number() {
            return Token::Index(n);
        }
        match self {
            RawValue::Str(s) if keywords.contains_key(s) => Token::Keyword(s),
            RawValue::Str(s) => Token::Literal(s),
            RawValue::Number(n) => Token::Index(n),
        }
    }
}

impl fmt::Display for RawValue<'_> {
    /// The value as CSS text: numbers without a trailing `.0`, strings as is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<f64> for RawValue<'_> {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i32> for RawValue<'_> {
    fn from(n: i32) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<u32> for RawValue<'_> {
    fn from(n: u32) -> Self {
        RawValue::Number(n as f64)
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(s: &'a str) -> Self {
        RawValue::Str(s)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(s: &'a String) -> Self {
        RawValue::Str(s)
    }
}

/// A resolver input after its one-time classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// A number, either given as such or as a numeric string.
    Index(f64),
    /// A string naming an entry in the relevant theme table.
    Keyword(&'a str),
    /// Any other string, used verbatim as a CSS value.
    Literal(&'a str),
}

/// Formats a number the way CSS values expect: no trailing `.0`.
pub(crate) fn format_number(n: f64) -> String {
    format!("{}", n)
}
