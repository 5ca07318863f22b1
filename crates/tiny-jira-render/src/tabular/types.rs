//! Column descriptors for table output.

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
}

/// One rendered column: its header, its style name, and a resolved width.
///
/// The width is the content width in display columns, not counting the
/// padding and border the table draws around it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Col {
    /// Header title.
    pub header: String,
    /// Optional style name (resolved via theme).
    pub style: Option<String>,
    /// Content width in display columns.
    pub width: usize,
    /// Text alignment within the column.
    #[serde(default)]
    pub align: Align,
}

impl Col {
    /// Create a left-aligned, unstyled column.
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Col {
            header: header.into(),
            style: None,
            width,
            align: Align::Left,
        }
    }

    /// Set the style name.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set alignment to right.
    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}
