//! Style definitions read from YAML.
//!
//! Each entry maps a style name to either a shorthand string or a mapping:
//!
//! ```yaml
//! warning: "yellow bold"
//! header:
//!   fg: cyan
//!   bold: true
//! ```

mod attributes;
mod color;
mod error;

use std::collections::HashMap;

use console::Style;

pub use attributes::{parse_shorthand, StyleAttributes};
pub use color::{rgb_to_ansi256, ColorDef};
pub use error::StylesheetError;

/// Parses one style definition.
pub fn parse_style(value: &serde_yaml::Value, style_name: &str) -> Result<Style, StylesheetError> {
    let attrs = match value {
        serde_yaml::Value::String(s) => parse_shorthand(s, style_name)?,
        serde_yaml::Value::Mapping(map) => StyleAttributes::parse_mapping(map, style_name)?,
        _ => {
            return Err(StylesheetError::InvalidDefinition {
                style: style_name.to_string(),
                message: format!("Expected string or mapping, got {:?}", value),
            })
        }
    };
    Ok(attrs.to_style())
}

/// Parses a whole stylesheet document into named styles.
///
/// An empty document yields no styles.
pub fn parse_stylesheet(yaml: &str) -> Result<HashMap<String, Style>, StylesheetError> {
    let root: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
            path: None,
            message: e.to_string(),
        })?;

    let map = match root {
        serde_yaml::Value::Null => return Ok(HashMap::new()),
        serde_yaml::Value::Mapping(map) => map,
        other => {
            return Err(StylesheetError::Parse {
                path: None,
                message: format!("Expected a mapping of style names, got {:?}", other),
            })
        }
    };

    let mut styles = HashMap::with_capacity(map.len());
    for (key, value) in &map {
        let name = key.as_str().ok_or_else(|| StylesheetError::Parse {
            path: None,
            message: format!("Style names must be strings, got {:?}", key),
        })?;
        styles.insert(name.to_string(), parse_style(value, name)?);
    }
    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_forms() {
        let styles = parse_stylesheet(
            r#"
warning: "yellow bold"
header:
  fg: cyan
  bold: true
"#,
        )
        .unwrap();
        assert_eq!(styles.len(), 2);
        assert!(styles.contains_key("warning"));
        assert!(styles.contains_key("header"));
    }

    #[test]
    fn empty_document_is_empty() {
        assert!(parse_stylesheet("").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_mapping_root() {
        let err = parse_stylesheet("- a\n- b").unwrap_err();
        assert!(matches!(err, StylesheetError::Parse { .. }));
    }

    #[test]
    fn rejects_invalid_yaml() {
        assert!(parse_stylesheet("key: [unclosed").is_err());
    }

    #[test]
    fn rejects_numeric_definition() {
        let err = parse_stylesheet("key: 42").unwrap_err();
        assert!(matches!(err, StylesheetError::InvalidDefinition { .. }));
    }
}
