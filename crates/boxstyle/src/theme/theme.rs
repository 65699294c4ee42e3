//! Theme struct holding scales, presets, and named values.
//!
//! A theme is plain data: nothing in it changes after construction, and
//! every resolver reads it through a shared reference.
//!
//! # Construction Methods
//!
//! ## Default
//!
//! ```rust
//! use boxstyle::Theme;
//!
//! let theme = Theme::default();
//! assert_eq!(theme.scale[3], "8px");
//! ```
//!
//! ## From YAML
//!
//! ```rust
//! use boxstyle::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! scale: ["0px", "4px", "8px"]
//! scalePreset: { small: "4px" }
//! borderRadius: { small: "2px" }
//! fontFamily: { mono: "Fira Code" }
//! fontWeight: { regular: 400 }
//! textScale: ["12px", "14px"]
//! textLineHeight: ["16px", "20px"]
//! text: { fontFamily: mono, fontWeight: regular, color: ink, size: 1 }
//! colors: { ink: "#222" }
//! "##).unwrap();
//!
//! assert_eq!(theme.scale.len(), 3);
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::style::PropValue;

/// File extensions recognized by [`Theme::from_file`].
pub const THEME_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Default typography applied by the Text composer when a prop is unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDefaults {
    /// Font family keyword or literal.
    pub font_family: String,
    /// Font weight keyword or number.
    pub font_weight: PropValue,
    /// Color name or literal.
    pub color: String,
    /// Text scale level or literal size.
    pub size: PropValue,
}

/// Base declarations every Box style starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutDefaults {
    pub position: String,
    pub flex_direction: String,
    pub display: String,
    pub box_sizing: String,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            position: "relative".to_string(),
            flex_direction: "row".to_string(),
            display: "block".to_string(),
            box_sizing: "border-box".to_string(),
        }
    }
}

/// Scales, presets, and named values the resolvers look values up in.
///
/// Field names in theme files are camelCase (`scalePreset`,
/// `textLineHeight`). The `layout` section is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Spacing values indexed by level.
    pub scale: Vec<String>,
    /// Named spacing presets (`small`, `medium`, `large`).
    pub scale_preset: HashMap<String, String>,
    /// Named corner radii.
    pub border_radius: HashMap<String, String>,
    /// Font family keywords mapped to CSS family names.
    pub font_family: HashMap<String, String>,
    /// Font weight keywords mapped to numeric weights.
    pub font_weight: HashMap<String, u16>,
    /// Font sizes indexed by text level.
    pub text_scale: Vec<String>,
    /// Line heights paired with `text_scale`.
    pub text_line_height: Vec<String>,
    /// Text composer defaults.
    pub text: TextDefaults,
    /// Color names mapped to CSS colors.
    pub colors: HashMap<String, String>,
    /// Box composer base style.
    #[serde(default)]
    pub layout: LayoutDefaults,
}

impl Theme {
    /// Parses and validates a theme from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] on malformed YAML or a missing field, and
    /// [`ThemeError::Invalid`] when [`validate`](Self::validate) fails.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let theme: Theme = serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        theme.validate()?;
        Ok(theme)
    }

    /// Parses and validates a theme from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let theme: Theme = serde_json::from_str(json).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        theme.validate()?;
        Ok(theme)
    }

    /// Loads a theme file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Load`] if the file can't be read or has an
    /// unrecognized extension, and parse or validation errors otherwise.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let theme = boxstyle::Theme::from_file("./themes/compact.yaml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
            .unwrap_or_default();
        if !THEME_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ThemeError::Load {
                message: format!(
                    "unsupported theme file {} (expected one of {})",
                    path.display(),
                    THEME_EXTENSIONS.join(", ")
                ),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let parsed = if ext == ".json" {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };
        let theme = parsed.map_err(|err| match err {
            ThemeError::Parse { message, .. } => ThemeError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })?;

        log::debug!("loaded theme from {}", path.display());
        Ok(theme)
    }

    /// Checks the shape the resolvers rely on.
    ///
    /// Scales must be non-empty with no blank entries, and every text level
    /// needs a matching line height.
    pub fn validate(&self) -> Result<()> {
        check_scale("scale", &self.scale)?;
        check_scale("textScale", &self.text_scale)?;
        check_scale("textLineHeight", &self.text_line_height)?;
        if self.text_scale.len() != self.text_line_height.len() {
            return Err(ThemeError::Invalid {
                field: "textLineHeight",
                message: format!(
                    "has {} entries but textScale has {}",
                    self.text_line_height.len(),
                    self.text_scale.len()
                ),
            });
        }
        if self.text.font_family.is_empty() {
            return Err(ThemeError::Invalid {
                field: "text.fontFamily",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Layers another theme over this one.
    ///
    /// Named tables are extended, with entries from `other` winning. Scales
    /// from `other` replace these when non-empty; text and layout defaults
    /// are taken from `other`.
    pub fn merge(mut self, other: Theme) -> Self {
        if !other.scale.is_empty() {
            self.scale = other.scale;
        }
        if !other.text_scale.is_empty() {
            self.text_scale = other.text_scale;
        }
        if !other.text_line_height.is_empty() {
            self.text_line_height = other.text_line_height;
        }
        self.scale_preset.extend(other.scale_preset);
        self.border_radius.extend(other.border_radius);
        self.font_family.extend(other.font_family);
        self.font_weight.extend(other.font_weight);
        self.colors.extend(other.colors);
        self.text = other.text;
        self.layout = other.layout;
        log::debug!("merged theme overrides");
        self
    }

    /// Replaces the color table entry for `name`, returning the theme for chaining.
    pub fn with_color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(name.into(), value.into());
        self
    }

    /// Replaces the spacing scale.
    pub fn with_scale<I, S>(mut self, scale: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scale = scale.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the Box base style.
    pub fn with_layout(mut self, layout: LayoutDefaults) -> Self {
        self.layout = layout;
        self
    }
}

fn check_scale(field: &'static str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(ThemeError::Invalid {
            field,
            message: "must not be empty".to_string(),
        });
    }
    if let Some(pos) = values.iter().position(|v| v.trim().is_empty()) {
        return Err(ThemeError::Invalid {
            field,
            message: format!("entry {} is blank", pos),
        });
    }
    Ok(())
}

fn table<const N: usize>(entries: [(&str, &str); N]) -> HashMap<String, String> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn list(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            scale: list(&["0px", "2px", "4px", "8px", "16px", "24px", "32px"]),
            scale_preset: table([("small", "8px"), ("medium", "16px"), ("large", "24px")]),
            border_radius: table([("small", "4px"), ("medium", "8px"), ("circle", "10000px")]),
            font_family: table([("roboto", "Roboto"), ("roboto-condensed", "Roboto Condensed")]),
            font_weight: [("light", 300), ("regular", 400), ("bold", 700)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            text_scale: list(&["10.5px", "12px", "14px", "16px", "20px", "28px"]),
            text_line_height: list(&["16px", "18px", "20px", "24px", "26px", "36px"]),
            text: TextDefaults {
                font_family: "roboto".to_string(),
                font_weight: PropValue::from("regular"),
                color: "black".to_string(),
                size: PropValue::from(2),
            },
            colors: table([
                ("black", "#121212"),
                ("brandColor", "#121212"),
                ("gray", "#e6e6e6"),
                ("white", "white"),
            ]),
            layout: LayoutDefaults::default(),
        }
    }
}
