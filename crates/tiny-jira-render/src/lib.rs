//! Terminal rendering for issue tables and detail panels.
//!
//! The pieces:
//!
//! - [`RenderContext`] and [`OutputMode`]: target width, color decision, border
//! - [`Theme`] and [`Painter`]: named `console::Style`s, applied only when color is on
//! - [`tabular`]: width-aware text helpers and the bordered [`tabular::Table`]
//! - [`Panel`]: a titled block of fields and wrapped paragraphs
//! - [`style`]: YAML style definitions for user themes
//!
//! Width is always measured in display columns: CJK characters count as two
//! and ANSI escapes count as zero.

pub mod context;
mod panel;
pub mod style;
pub mod tabular;
mod theme;

pub use context::{terminal_width, OutputMode, RenderContext, DEFAULT_TERMINAL_WIDTH};
pub use panel::Panel;
pub use style::StylesheetError;
pub use theme::{Painter, Theme};
