//! Loading themes from disk.

use std::fs;

use boxstyle::{compose_box, Props, Theme, ThemeError};
use tempfile::TempDir;

const COMPACT_YAML: &str = r##"
scale: ["0px", "1px", "2px", "4px", "8px"]
scalePreset:
  small: 2px
  medium: 4px
  large: 8px
borderRadius:
  small: 2px
fontFamily:
  mono: "JetBrains Mono"
fontWeight:
  regular: 400
  bold: 600
textScale: ["11px", "12px", "13px"]
textLineHeight: ["14px", "16px", "18px"]
text:
  fontFamily: mono
  fontWeight: regular
  color: fg
  size: 1
colors:
  fg: "#d0d0d0"
  bg: "#101010"
layout:
  display: flex
  flexDirection: column
"##;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "compact.yaml", COMPACT_YAML);

    let theme = Theme::from_file(&path).unwrap();
    assert_eq!(theme.scale.len(), 5);
    assert_eq!(theme.font_weight["bold"], 600);
    assert_eq!(theme.layout.flex_direction, "column");
    assert_eq!(theme.layout.box_sizing, "border-box");

    let out = compose_box(&Props::new().set("m", 4).set("background", "bg"), &theme);
    assert_eq!(out.style.get("marginTop"), Some("8px"));
    assert_eq!(out.style.get("backgroundColor"), Some("#101010"));
    assert_eq!(out.style.get("display"), Some("flex"));
}

#[test]
fn test_yaml_and_json_agree() {
    let dir = TempDir::new().unwrap();
    let yaml_theme = Theme::from_yaml(COMPACT_YAML).unwrap();
    let json = serde_json::to_string_pretty(&yaml_theme).unwrap();
    let path = write(&dir, "compact.json", &json);

    assert_eq!(Theme::from_file(&path).unwrap(), yaml_theme);
}

#[test]
fn test_parse_error_carries_path() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.yml", "scale: [unclosed\n");

    match Theme::from_file(&path) {
        Err(ThemeError::Parse { path: Some(p), .. }) => assert_eq!(p, path),
        other => panic!("expected parse error with path, got {:?}", other),
    }
}

#[test]
fn test_invalid_theme_file() {
    let dir = TempDir::new().unwrap();
    let content = COMPACT_YAML.replace(r#"textLineHeight: ["14px", "16px", "18px"]"#, "textLineHeight: [\"14px\"]");
    let path = write(&dir, "short.yaml", &content);

    let err = Theme::from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        ThemeError::Invalid {
            field: "textLineHeight",
            ..
        }
    ));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Theme::from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ThemeError::Load { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "theme.toml", "scale = []");
    let err = Theme::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("unsupported theme file"));
}
