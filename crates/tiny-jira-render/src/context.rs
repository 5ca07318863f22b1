//! Output mode and the per-render context.
//!
//! Nothing here reads global state after construction: a [`RenderContext`]
//! carries the width, the color decision and the border style, and every
//! renderer takes it explicitly.

use console::Term;
use serde::{Deserialize, Serialize};

use crate::tabular::BorderStyle;

/// Width used when the terminal size cannot be determined.
pub const DEFAULT_TERMINAL_WIDTH: usize = 100;

/// How output should be produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Styled if stdout supports colors, plain otherwise.
    #[default]
    Auto,
    /// Always use ANSI escape codes.
    Term,
    /// Never use ANSI escape codes.
    Text,
    /// Serialize data as JSON instead of drawing it.
    Json,
}

impl OutputMode {
    /// Resolves the mode to a concrete decision about whether to use color.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
            OutputMode::Json => false,
        }
    }

    /// Returns true for modes that bypass drawing.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

/// Returns the current terminal width, or [`DEFAULT_TERMINAL_WIDTH`].
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Everything a renderer needs to know about the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Total available width in display columns.
    pub width: usize,
    /// Whether ANSI styling is emitted.
    pub color_enabled: bool,
    /// Border drawn around tables and panels.
    pub border: BorderStyle,
}

impl RenderContext {
    /// Builds a context, resolving `width` from the terminal when `None`.
    pub fn new(mode: OutputMode, width: Option<usize>) -> Self {
        RenderContext {
            width: width.unwrap_or_else(terminal_width),
            color_enabled: mode.should_use_color(),
            border: BorderStyle::default(),
        }
    }

    /// A plain context of a fixed width; handy for tests and piping.
    pub fn plain(width: usize) -> Self {
        RenderContext {
            width,
            color_enabled: false,
            border: BorderStyle::default(),
        }
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_color() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::Json.should_use_color());
    }

    #[test]
    fn only_json_is_structured() {
        assert!(OutputMode::Json.is_structured());
        assert!(!OutputMode::Auto.is_structured());
        assert!(!OutputMode::Text.is_structured());
    }

    #[test]
    fn explicit_width_wins() {
        let ctx = RenderContext::new(OutputMode::Text, Some(73));
        assert_eq!(ctx.width, 73);
        assert!(!ctx.color_enabled);
    }

    #[test]
    fn terminal_width_is_positive() {
        assert!(terminal_width() > 0);
    }

    #[test]
    fn plain_context_uses_default_border() {
        let ctx = RenderContext::plain(80).with_border(BorderStyle::Ascii);
        assert_eq!(ctx.border, BorderStyle::Ascii);
        assert_eq!(RenderContext::plain(80).border, BorderStyle::Light);
    }
}
