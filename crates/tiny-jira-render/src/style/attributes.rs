//! Style attributes as read from YAML, before conversion to `console::Style`.

use console::Style;

use super::color::ColorDef;
use super::error::StylesheetError;

/// Parsed style properties. `None` means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleAttributes {
    pub fg: Option<ColorDef>,
    pub bg: Option<ColorDef>,
    pub bold: Option<bool>,
    pub dim: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub reverse: Option<bool>,
}

impl StyleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the mapping form:
    ///
    /// ```yaml
    /// header:
    ///   fg: cyan
    ///   bold: true
    /// ```
    pub fn parse_mapping(
        map: &serde_yaml::Mapping,
        style_name: &str,
    ) -> Result<Self, StylesheetError> {
        let mut attrs = StyleAttributes::new();

        for (key, value) in map {
            let key_str = key
                .as_str()
                .ok_or_else(|| StylesheetError::InvalidDefinition {
                    style: style_name.to_string(),
                    message: format!("Non-string key in style definition: {:?}", key),
                })?;
            attrs.set_attribute(key_str, value, style_name)?;
        }

        Ok(attrs)
    }

    fn set_attribute(
        &mut self,
        name: &str,
        value: &serde_yaml::Value,
        style_name: &str,
    ) -> Result<(), StylesheetError> {
        let color = |value: &serde_yaml::Value| {
            ColorDef::parse_value(value).map_err(|e| StylesheetError::InvalidColor {
                style: style_name.to_string(),
                value: e,
            })
        };
        match name {
            "fg" => self.fg = Some(color(value)?),
            "bg" => self.bg = Some(color(value)?),
            "bold" => self.bold = Some(parse_bool(value, name, style_name)?),
            "dim" => self.dim = Some(parse_bool(value, name, style_name)?),
            "italic" => self.italic = Some(parse_bool(value, name, style_name)?),
            "underline" => self.underline = Some(parse_bool(value, name, style_name)?),
            "reverse" => self.reverse = Some(parse_bool(value, name, style_name)?),
            _ => {
                return Err(StylesheetError::UnknownAttribute {
                    style: style_name.to_string(),
                    attribute: name.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Converts to a `console::Style`.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();

        if let Some(ref fg) = self.fg {
            style = style.fg(fg.to_console_color());
        }
        if let Some(ref bg) = self.bg {
            style = style.bg(bg.to_console_color());
        }
        if self.bold == Some(true) {
            style = style.bold();
        }
        if self.dim == Some(true) {
            style = style.dim();
        }
        if self.italic == Some(true) {
            style = style.italic();
        }
        if self.underline == Some(true) {
            style = style.underlined();
        }
        if self.reverse == Some(true) {
            style = style.reverse();
        }

        style
    }
}

fn parse_bool(
    value: &serde_yaml::Value,
    attr: &str,
    style_name: &str,
) -> Result<bool, StylesheetError> {
    value
        .as_bool()
        .ok_or_else(|| StylesheetError::InvalidDefinition {
            style: style_name.to_string(),
            message: format!("'{}' must be a boolean, got {:?}", attr, value),
        })
}

/// Parses the shorthand form: `"yellow bold"`.
///
/// At most one word may be a color; it becomes the foreground.
pub fn parse_shorthand(s: &str, style_name: &str) -> Result<StyleAttributes, StylesheetError> {
    let mut attrs = StyleAttributes::new();

    for part in s.split_whitespace() {
        match part.to_lowercase().as_str() {
            "bold" => attrs.bold = Some(true),
            "dim" => attrs.dim = Some(true),
            "italic" => attrs.italic = Some(true),
            "underline" => attrs.underline = Some(true),
            "reverse" => attrs.reverse = Some(true),
            _ => {
                if attrs.fg.is_some() {
                    return Err(StylesheetError::InvalidShorthand {
                        style: style_name.to_string(),
                        value: s.to_string(),
                    });
                }
                let color = ColorDef::parse_string(part).map_err(|_| {
                    StylesheetError::InvalidShorthand {
                        style: style_name.to_string(),
                        value: s.to_string(),
                    }
                })?;
                attrs.fg = Some(color);
            }
        }
    }

    if attrs == StyleAttributes::default() {
        return Err(StylesheetError::InvalidDefinition {
            style: style_name.to_string(),
            message: "Empty style definition".to_string(),
        });
    }

    Ok(attrs)
}
