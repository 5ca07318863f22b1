//! Named style collections and the painter that applies them.
//!
//! ```rust
//! use tiny_jira_render::{Painter, Theme};
//! use console::Style;
//!
//! let theme = Theme::base().add("key", Style::new().magenta());
//! let painter = Painter::new(&theme, false);
//! assert_eq!(painter.paint("key", "PROJ-1"), "PROJ-1");
//! ```

use std::collections::HashMap;
use std::path::Path;

use console::Style;

use crate::style::{parse_stylesheet, StylesheetError};

/// A set of named styles.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in styles for issue tables and panels.
    pub fn base() -> Self {
        Theme::new()
            .add("header", Style::new().bold())
            .add("title", Style::new().cyan().bold())
            .add("muted", Style::new().dim())
            .add("warning", Style::new().yellow())
            .add("border", Style::new().dim())
            .add("key", Style::new().cyan())
            .add("summary", Style::new())
            .add("status", Style::new().yellow())
            .add("labels", Style::new().magenta())
            .add("assignee", Style::new().green())
            .add("date", Style::new().dim())
    }

    /// Parses a theme from YAML. See [`crate::style`] for the format.
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        Ok(Theme {
            styles: parse_stylesheet(yaml)?,
        })
    }

    /// Reads a theme file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StylesheetError::Parse {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })?;
        Theme::from_yaml(&content).map_err(|e| e.with_path(path))
    }

    /// Adds or replaces a style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Looks up a style by name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Overlays `other` onto this theme; styles in `other` win.
    pub fn merge(mut self, other: Theme) -> Self {
        self.styles.extend(other.styles);
        self
    }
}

/// Applies theme styles to text, or passes it through untouched.
///
/// Styling is forced on or off per painter, independent of console's
/// global color detection.
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    theme: &'a Theme,
    enabled: bool,
}

impl<'a> Painter<'a> {
    pub fn new(theme: &'a Theme, enabled: bool) -> Self {
        Painter { theme, enabled }
    }

    /// Returns whether escape codes are emitted.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Styles `text` with the named style. Unknown names leave text plain.
    pub fn paint(&self, style: &str, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match self.theme.get(style) {
            Some(s) => s.clone().force_styling(true).apply_to(text).to_string(),
            None => text.to_string(),
        }
    }

    /// Like [`paint`](Self::paint) with an optional style name.
    pub fn paint_opt(&self, style: Option<&str>, text: &str) -> String {
        match style {
            Some(name) => self.paint(name, text),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::display_width;

    #[test]
    fn base_theme_has_column_styles() {
        let theme = Theme::base();
        for name in ["key", "summary", "status", "labels", "assignee", "date"] {
            assert!(theme.get(name).is_some(), "missing style {name}");
        }
    }

    #[test]
    fn disabled_painter_is_plain() {
        let theme = Theme::base();
        let painter = Painter::new(&theme, false);
        assert_eq!(painter.paint("key", "PROJ-1"), "PROJ-1");
    }

    #[test]
    fn enabled_painter_emits_escapes_but_keeps_width() {
        let theme = Theme::base();
        let painter = Painter::new(&theme, true);
        let out = painter.paint("key", "PROJ-1");
        assert!(out.contains('\x1b'));
        assert_eq!(display_width(&out), 6);
    }

    #[test]
    fn unknown_style_is_plain() {
        let theme = Theme::new();
        let painter = Painter::new(&theme, true);
        assert_eq!(painter.paint("nope", "x"), "x");
        assert_eq!(painter.paint_opt(None, "x"), "x");
    }

    #[test]
    fn merge_overrides() {
        let user = Theme::from_yaml("key: red\nextra: bold").unwrap();
        let merged = Theme::base().merge(user);
        assert!(merged.get("extra").is_some());
        assert_eq!(merged.len(), Theme::base().len() + 1);
    }

    #[test]
    fn from_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.yml");
        std::fs::write(&path, "key: [unclosed").unwrap();
        let err = Theme::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("theme.yml"));
    }
}
