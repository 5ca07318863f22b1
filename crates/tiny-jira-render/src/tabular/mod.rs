//! Unicode-aware column formatting for terminal tables.
//!
//! CJK characters count as two columns and ANSI escape codes count as zero,
//! so styled text lines up with plain text.
//!
//! ```rust
//! use tiny_jira_render::tabular::{Col, Table};
//! use tiny_jira_render::{Painter, Theme};
//!
//! let table = Table::new(vec![Col::new("Key", 8).style("key"), Col::new("Summary", 20)]);
//! let theme = Theme::base();
//! let out = table.render(&[vec!["PROJ-1", "Fix login"]], &Painter::new(&theme, false));
//! assert_eq!(out.lines().count(), 5);
//! ```

mod decorator;
mod types;
mod util;

pub use decorator::{BorderStyle, Table};
pub use types::{Align, Col};
pub use util::{display_width, fit, pad_left, pad_right, truncate_end, wrap, wrap_indent};
