//! Bordered tables.
//!
//! A row is drawn as `│ c1 │ c2 │ … │`: one space of padding on each side of
//! every cell and a vertical line between cells, so a table of `n` columns
//! occupies `Σ width + 3n + 1` display columns.
//!
//! ```rust
//! use tiny_jira_render::tabular::{BorderStyle, Col, Table};
//! use tiny_jira_render::{Painter, Theme};
//!
//! let table = Table::new(vec![Col::new("Key", 6), Col::new("Status", 6)])
//!     .border(BorderStyle::Ascii);
//! let theme = Theme::new();
//! let out = table.render(&[vec!["A-1", "Done"]], &Painter::new(&theme, false));
//! assert_eq!(out.lines().nth(1), Some("| Key    | Status |"));
//! ```

use serde::{Deserialize, Serialize};

use super::types::{Align, Col};
use super::util::{display_width, truncate_end};
use crate::theme::Painter;

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No lines; cells are separated by spaces.
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    #[default]
    Light,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::None => BorderChars::empty(),
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        }
    }
}

impl std::str::FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(BorderStyle::None),
            "ascii" => Ok(BorderStyle::Ascii),
            "light" => Ok(BorderStyle::Light),
            "rounded" => Ok(BorderStyle::Rounded),
            other => Err(format!(
                "unknown border style '{}' (expected none, ascii, light or rounded)",
                other
            )),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

impl BorderChars {
    fn empty() -> Self {
        BorderChars {
            horizontal: ' ',
            vertical: ' ',
            top_left: ' ',
            top_right: ' ',
            bottom_left: ' ',
            bottom_right: ' ',
            left_t: ' ',
            cross: ' ',
            right_t: ' ',
            top_t: ' ',
            bottom_t: ' ',
        }
    }
}

#[derive(Clone, Copy)]
enum LineType {
    Top,
    Middle,
    Bottom,
}

/// A grid of columns with a header row and borders.
#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<Col>,
    border: BorderStyle,
    header_style: Option<String>,
}

impl Table {
    /// Creates a table over the given columns, with light borders.
    pub fn new(columns: Vec<Col>) -> Self {
        Table {
            columns,
            border: BorderStyle::default(),
            header_style: Some("header".to_string()),
        }
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set the header style name.
    pub fn header_style(mut self, style: impl Into<String>) -> Self {
        self.header_style = Some(style.into());
        self
    }

    pub fn columns(&self) -> &[Col] {
        &self.columns
    }

    /// Width of every drawn line, in display columns.
    pub fn total_width(&self) -> usize {
        let content: usize = self.columns.iter().map(|c| c.width).sum();
        content + 3 * self.columns.len() + 1
    }

    /// Format the header row.
    pub fn header_row(&self, painter: &Painter<'_>) -> String {
        let cells = self.columns.iter().map(|col| {
            fit_cell(&col.header, col.width, Align::Left, |s| {
                painter.paint_opt(self.header_style.as_deref(), s)
            })
        });
        self.join_cells(cells, painter)
    }

    /// Format a data row. Missing trailing values render as empty cells.
    pub fn row<S: AsRef<str>>(&self, values: &[S], painter: &Painter<'_>) -> String {
        let cells = self.columns.iter().enumerate().map(|(i, col)| {
            let raw = values.get(i).map(|v| v.as_ref()).unwrap_or("");
            fit_cell(raw, col.width, col.align, |s| {
                painter.paint_opt(col.style.as_deref(), s)
            })
        });
        self.join_cells(cells, painter)
    }

    /// The line between the header and the data rows.
    pub fn separator_row(&self, painter: &Painter<'_>) -> String {
        self.horizontal_line(LineType::Middle, painter)
    }

    pub fn top_border(&self, painter: &Painter<'_>) -> String {
        self.horizontal_line(LineType::Top, painter)
    }

    pub fn bottom_border(&self, painter: &Painter<'_>) -> String {
        self.horizontal_line(LineType::Bottom, painter)
    }

    /// Render the complete table: top border, header, separator, rows,
    /// bottom border. Lines are joined with `\n` and have no trailing newline.
    pub fn render<S: AsRef<str>>(&self, rows: &[Vec<S>], painter: &Painter<'_>) -> String {
        let mut output = Vec::with_capacity(rows.len() + 4);

        let top = self.top_border(painter);
        if !top.is_empty() {
            output.push(top);
        }
        output.push(self.header_row(painter));
        let sep = self.separator_row(painter);
        if !sep.is_empty() {
            output.push(sep);
        }
        for row in rows {
            output.push(self.row(row, painter));
        }
        let bottom = self.bottom_border(painter);
        if !bottom.is_empty() {
            output.push(bottom);
        }

        output.join("\n")
    }

    fn join_cells(&self, cells: impl Iterator<Item = String>, painter: &Painter<'_>) -> String {
        let chars = self.border.chars();
        let vertical = painter.paint("border", &chars.vertical.to_string());
        let inner = format!(" {} ", vertical);

        let mut line = String::new();
        line.push_str(&vertical);
        line.push(' ');
        line.push_str(&cells.collect::<Vec<_>>().join(&inner));
        line.push(' ');
        line.push_str(&vertical);

        if self.border == BorderStyle::None {
            line.trim_end().to_string()
        } else {
            line
        }
    }

    fn horizontal_line(&self, line_type: LineType, painter: &Painter<'_>) -> String {
        if self.border == BorderStyle::None {
            return String::new();
        }

        let chars = self.border.chars();
        let (left, joint, right) = match line_type {
            LineType::Top => (chars.top_left, chars.top_t, chars.top_right),
            LineType::Middle => (chars.left_t, chars.cross, chars.right_t),
            LineType::Bottom => (chars.bottom_left, chars.bottom_t, chars.bottom_right),
        };

        let mut line = String::new();
        line.push(left);
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                line.push(joint);
            }
            line.extend(std::iter::repeat_n(chars.horizontal, col.width + 2));
        }
        line.push(right);

        painter.paint("border", &line)
    }
}

/// Truncates, styles, then pads a cell so it is exactly `width` wide.
///
/// Styling happens before padding so the escapes wrap only the text.
fn fit_cell(raw: &str, width: usize, align: Align, style: impl Fn(&str) -> String) -> String {
    let flat: String = raw
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let text = truncate_end(&flat, width, "…");
    let pad = " ".repeat(width.saturating_sub(display_width(&text)));
    let styled = if text.is_empty() { text } else { style(&text) };
    match align {
        Align::Left => format!("{styled}{pad}"),
        Align::Right => format!("{pad}{styled}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn table() -> Table {
        Table::new(vec![
            Col::new("Key", 6).style("key"),
            Col::new("Summary", 10),
        ])
    }

    #[test]
    fn light_table_layout() {
        let theme = Theme::new();
        let painter = Painter::new(&theme, false);
        let out = table().render(&[vec!["A-1", "Fix it"]], &painter);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "┌────────┬────────────┐",
                "│ Key    │ Summary    │",
                "├────────┼────────────┤",
                "│ A-1    │ Fix it     │",
                "└────────┴────────────┘",
            ]
        );
    }

    #[test]
    fn every_line_has_total_width() {
        let theme = Theme::base();
        for colored in [false, true] {
            let painter = Painter::new(&theme, colored);
            let t = table();
            let out = t.render(&[vec!["PROJ-12345", "a very long summary indeed"]], &painter);
            for line in out.lines() {
                assert_eq!(display_width(line), t.total_width(), "{line:?}");
            }
        }
    }

    #[test]
    fn long_cells_truncate_with_ellipsis() {
        let theme = Theme::new();
        let painter = Painter::new(&theme, false);
        let row = table().row(&["PROJ-12345", "x"], &painter);
        assert!(row.contains("PROJ-…"));
    }

    #[test]
    fn missing_values_render_empty() {
        let theme = Theme::new();
        let painter = Painter::new(&theme, false);
        let row = table().row::<&str>(&[], &painter);
        assert_eq!(row, "│        │            │");
    }

    #[test]
    fn newlines_in_cells_are_flattened() {
        let theme = Theme::new();
        let painter = Painter::new(&theme, false);
        let row = table().row(&["A-1", "two\nlines"], &painter);
        assert_eq!(row.lines().count(), 1);
        assert!(row.contains("two lines"));
    }

    #[test]
    fn ascii_and_rounded_corners() {
        let theme = Theme::new();
        let painter = Painter::new(&theme, false);
        let ascii = table().border(BorderStyle::Ascii).top_border(&painter);
        assert_eq!(ascii, "+--------+------------+");
        let rounded = table().border(BorderStyle::Rounded).bottom_border(&painter);
        assert!(rounded.starts_with('╰') && rounded.ends_with('╯'));
    }

    #[test]
    fn borderless_has_no_rules() {
        let theme = Theme::new();
        let painter = Painter::new(&theme, false);
        let out = table()
            .border(BorderStyle::None)
            .render(&[vec!["A-1", "Fix"]], &painter);
        assert_eq!(out.lines().count(), 2);
        assert!(!out.contains('│'));
    }

    #[test]
    fn right_alignment_pads_left() {
        let theme = Theme::new();
        let painter = Painter::new(&theme, false);
        let t = Table::new(vec![Col::new("N", 4).right()]);
        assert_eq!(t.row(&["7"], &painter), "│    7 │");
    }

    #[test]
    fn border_style_from_str() {
        assert_eq!("ASCII".parse::<BorderStyle>(), Ok(BorderStyle::Ascii));
        assert!("double".parse::<BorderStyle>().is_err());
    }
}
