//! Error types for theme loading and validation.
//!
//! Style resolution itself never fails: unknown or malformed values pass
//! through. The only errors come from building a [`Theme`](crate::Theme)
//! whose shape the resolvers cannot work with.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating a theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The theme document could not be parsed.
    #[error("failed to parse theme{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML or JSON parser.
        message: String,
    },

    /// The theme file could not be read.
    #[error("failed to load theme: {message}")]
    Load {
        /// Description of the I/O failure.
        message: String,
    },

    /// The theme parsed but has a shape the resolvers cannot use.
    #[error("invalid theme field '{field}': {message}")]
    Invalid {
        /// Name of the offending field, as written in theme files.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_with_path() {
        let err = ThemeError::Parse {
            path: Some(PathBuf::from("themes/dark.yaml")),
            message: "unexpected end of stream".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("themes/dark.yaml"));
        assert!(msg.contains("unexpected end of stream"));
    }

    #[test]
    fn test_parse_error_display_without_path() {
        let err = ThemeError::Parse {
            path: None,
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse theme: bad");
    }

    #[test]
    fn test_invalid_error_display() {
        let err = ThemeError::Invalid {
            field: "scale",
            message: "must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid theme field 'scale': must not be empty"
        );
    }
}
