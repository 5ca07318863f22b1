//! Titled blocks of wrapped text, optionally boxed.
//!
//! ```rust
//! use tiny_jira_render::{Panel, Painter, RenderContext, Theme};
//!
//! let panel = Panel::new("PROJ-1  [Bug]")
//!     .field("Summary", "Login fails")
//!     .rule()
//!     .paragraph("Steps to reproduce follow.");
//! let theme = Theme::new();
//! let out = panel.render(&RenderContext::plain(40), &Painter::new(&theme, false));
//! assert!(out.contains("│ Summary: Login fails"));
//! ```

use crate::context::RenderContext;
use crate::tabular::{display_width, wrap_indent, BorderStyle};
use crate::theme::Painter;

const MIN_INNER_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Field { label: String, value: String },
    Paragraph { text: String, style: Option<String> },
    Rule,
}

/// A title followed by labelled fields, rules and paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    title: String,
    blocks: Vec<Block>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Panel {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Adds a `Label: value` line. Long values wrap under the value column.
    pub fn field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.blocks.push(Block::Field {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a horizontal rule.
    pub fn rule(mut self) -> Self {
        self.blocks.push(Block::Rule);
        self
    }

    /// Adds word-wrapped text.
    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Paragraph {
            text: text.into(),
            style: None,
        });
        self
    }

    /// Adds word-wrapped text drawn with a theme style.
    pub fn styled_paragraph(mut self, text: impl Into<String>, style: impl Into<String>) -> Self {
        self.blocks.push(Block::Paragraph {
            text: text.into(),
            style: Some(style.into()),
        });
        self
    }

    /// Draws the panel to fit `ctx.width`.
    pub fn render(&self, ctx: &RenderContext, painter: &Painter<'_>) -> String {
        let boxed = ctx.border != BorderStyle::None;
        let inner = if boxed {
            ctx.width.saturating_sub(4)
        } else {
            ctx.width
        }
        .max(MIN_INNER_WIDTH);

        let mut body: Vec<Line> = Vec::new();
        for line in wrap_verbatim(&self.title, inner, 2) {
            body.push(Line::Text(painter.paint("title", &line)));
        }
        body.push(Line::Rule);

        for block in &self.blocks {
            match block {
                Block::Field { label, value } => {
                    let prefix = format!("{label}:");
                    let text = format!("{prefix} {value}");
                    let indent = display_width(&prefix) + 1;
                    for (i, line) in wrap_verbatim(&text, inner, indent).into_iter().enumerate() {
                        let painted = match line.strip_prefix(prefix.as_str()) {
                            Some(rest) if i == 0 => {
                                format!("{}{}", painter.paint("muted", &prefix), rest)
                            }
                            _ => line,
                        };
                        body.push(Line::Text(painted));
                    }
                }
                Block::Paragraph { text, style } => {
                    for line in text.lines() {
                        let wrapped = wrap_verbatim(line, inner, 0);
                        if wrapped.is_empty() {
                            body.push(Line::Text(String::new()));
                        }
                        for w in wrapped {
                            body.push(Line::Text(painter.paint_opt(style.as_deref(), &w)));
                        }
                    }
                }
                Block::Rule => body.push(Line::Rule),
            }
        }

        if boxed {
            draw_boxed(&body, inner, ctx.border, painter)
        } else {
            let rule = painter.paint("border", &"─".repeat(inner));
            body.into_iter()
                .map(|line| match line {
                    Line::Text(t) => t,
                    Line::Rule => rule.clone(),
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Keeps lines that already fit exactly as written (spacing included) and
/// word-wraps the rest.
fn wrap_verbatim(text: &str, width: usize, indent: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    if display_width(text) <= width {
        return vec![text.trim_end().to_string()];
    }
    wrap_indent(text, width, indent)
}

enum Line {
    Text(String),
    Rule,
}

fn draw_boxed(body: &[Line], inner: usize, border: BorderStyle, painter: &Painter<'_>) -> String {
    let (h, v, tl, tr, bl, br, lt, rt) = match border {
        BorderStyle::Ascii => ('-', '|', '+', '+', '+', '+', '+', '+'),
        BorderStyle::Rounded => ('─', '│', '╭', '╮', '╰', '╯', '├', '┤'),
        _ => ('─', '│', '┌', '┐', '└', '┘', '├', '┤'),
    };
    let bar = h.to_string().repeat(inner + 2);
    let edge = |l: char, r: char| painter.paint("border", &format!("{l}{bar}{r}"));
    let side = painter.paint("border", &v.to_string());

    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(edge(tl, tr));
    for line in body {
        match line {
            Line::Rule => out.push(edge(lt, rt)),
            Line::Text(text) => {
                let pad = " ".repeat(inner.saturating_sub(display_width(text)));
                out.push(format!("{side} {text}{pad} {side}"));
            }
        }
    }
    out.push(edge(bl, br));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn plain(width: usize) -> RenderContext {
        RenderContext::plain(width)
    }

    #[test]
    fn boxed_lines_share_width() {
        let theme = Theme::base();
        let painter = Painter::new(&theme, true);
        let out = Panel::new("PROJ-1  [Bug]  (Status: Done)")
            .field("Summary", "A summary long enough to need wrapping at this width")
            .rule()
            .paragraph("Body text\n\nSecond paragraph")
            .render(&plain(30), &painter);
        for line in out.lines() {
            assert_eq!(display_width(line), 30, "{line:?}");
        }
    }

    #[test]
    fn field_continuation_is_indented() {
        let theme = Theme::new();
        let painter = Painter::new(&theme, false);
        let out = Panel::new("T")
            .field("Summary", "one two three four five six")
            .render(&plain(24).with_border(BorderStyle::None), &painter);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "Summary: one two three");
        assert_eq!(lines[3], "         four five six");
    }

    #[test]
    fn blank_paragraph_lines_survive() {
        let theme = Theme::new();
        let painter = Painter::new(&theme, false);
        let out = Panel::new("T")
            .paragraph("a\n\nb")
            .render(&plain(20).with_border(BorderStyle::None), &painter);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(&lines[2..], &["a", "", "b"]);
    }

    #[test]
    fn tiny_width_is_clamped() {
        let theme = Theme::new();
        let painter = Painter::new(&theme, false);
        let out = Panel::new("Title").render(&plain(3), &painter);
        assert!(out.lines().all(|l| display_width(l) == MIN_INNER_WIDTH + 4));
    }
}
