use std::fmt;
use std::path::PathBuf;

/// A theme file that could not be turned into styles.
///
/// Every variant except `Parse` names the offending style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetError {
    /// Unreadable file or malformed YAML.
    Parse {
        path: Option<PathBuf>,
        message: String,
    },
    InvalidColor { style: String, value: String },
    UnknownAttribute { style: String, attribute: String },
    InvalidShorthand { style: String, value: String },
    /// Neither a shorthand string nor a mapping.
    InvalidDefinition { style: String, message: String },
}

impl StylesheetError {
    /// Records the file a `Parse` error came from.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            StylesheetError::Parse { message, .. } => StylesheetError::Parse {
                path: Some(path.into()),
                message,
            },
            other => other,
        }
    }
}

impl fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StylesheetError::Parse {
                path: Some(path),
                message,
            } => write!(f, "cannot read theme {}: {message}", path.display()),
            StylesheetError::Parse {
                path: None,
                message,
            } => write!(f, "cannot read theme: {message}"),
            StylesheetError::InvalidColor { style, value } => {
                write!(f, "style '{style}': invalid color '{value}'")
            }
            StylesheetError::UnknownAttribute { style, attribute } => {
                write!(f, "style '{style}': unknown attribute '{attribute}'")
            }
            StylesheetError::InvalidShorthand { style, value } => {
                write!(f, "style '{style}': cannot parse '{value}'")
            }
            StylesheetError::InvalidDefinition { style, message } => {
                write!(f, "style '{style}': {message}")
            }
        }
    }
}

impl std::error::Error for StylesheetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_attached_to_parse_errors_only() {
        let err = StylesheetError::Parse {
            path: None,
            message: "bad indent".into(),
        }
        .with_path("theme.yml");
        assert_eq!(err.to_string(), "cannot read theme theme.yml: bad indent");

        let color = StylesheetError::InvalidColor {
            style: "key".into(),
            value: "purple".into(),
        };
        assert_eq!(color.clone().with_path("theme.yml"), color);
        assert_eq!(color.to_string(), "style 'key': invalid color 'purple'");
    }
}
