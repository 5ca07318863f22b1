//! ANSI-aware text measurement, truncation, padding, and wrapping.
//!
//! ANSI escape codes are preserved in output but never count toward width.

use console::{measure_text_width, pad_str, Alignment};
use unicode_width::UnicodeWidthChar;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// ```rust
/// use tiny_jira_render::tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Truncates a string from the end to fit within `max_width` columns.
///
/// If the string already fits, it is returned unchanged. Otherwise characters
/// are dropped from the end and `ellipsis` is appended.
///
/// ```rust
/// use tiny_jira_render::tabular::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "…"), "Hello W…");
/// assert_eq!(truncate_end("Short", 10, "…"), "Short");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = measure_text_width(ellipsis);
    if max_width <= ellipsis_width {
        return truncate_to_display_width(ellipsis, max_width);
    }

    let mut result = truncate_to_display_width(s, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use tiny_jira_render::tabular::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a string on the left (right-aligns) to reach the target width.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Truncates then pads, so the result is exactly `width` columns wide.
pub fn fit(s: &str, width: usize) -> String {
    pad_right(&truncate_end(s, width, "…"), width)
}

/// Word-wraps plain text to lines of at most `width` columns.
///
/// Runs of whitespace collapse to a single space. Words longer than the
/// width are split across lines. Empty input yields no lines.
///
/// ```rust
/// use tiny_jira_render::tabular::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    wrap_indent(text, width, 0)
}

/// Word-wraps like [`wrap`], indenting every line after the first by
/// `indent` spaces.
///
/// ```rust
/// use tiny_jira_render::tabular::wrap_indent;
///
/// assert_eq!(wrap_indent("aaa bbb ccc", 7, 2), vec!["aaa bbb", "  ccc"]);
/// ```
pub fn wrap_indent(text: &str, width: usize, indent: usize) -> Vec<String> {
    let width = width.max(1);
    let indent = indent.min(width - 1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        loop {
            let limit = if lines.is_empty() { width } else { width - indent };
            let word_width = display_width(&word);
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= limit {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(&word);
                current_width += word_width;
                break;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
                continue;
            }

            // A single word wider than the line: hard split.
            let mut head = truncate_to_display_width(&word, limit);
            if head.is_empty() {
                // Wider than the whole line (e.g. a CJK char in one column).
                head = word.chars().take(1).collect();
            }
            word = word[head.len()..].to_string();
            lines.push(head);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    let pad = " ".repeat(indent);
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| if i == 0 { line } else { format!("{pad}{line}") })
        .collect()
}

// --- Internal helpers ---

/// Keeps characters from the start until `max_width` is reached.
/// ANSI escape sequences are copied through without counting.
fn truncate_to_display_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            result.push(c);
            in_escape = true;
            continue;
        }
        if in_escape {
            result.push(c);
            // CSI sequences end with a letter or '~'
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
