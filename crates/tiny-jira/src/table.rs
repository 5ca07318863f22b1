//! Assembling issues, columns and widths into a renderable table.

use serde::Serialize;
use thiserror::Error;
use tiny_jira_render::tabular::{Col, Table};
use tiny_jira_render::{Painter, RenderContext, Theme};

use crate::columns::{ColumnDefinition, ColumnKind};
use crate::fields::extract;
use crate::issue::Issue;
use crate::layout::ColumnWidths;

/// Errors from table assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A selected column has no allocated width.
    #[error("no width allocated for column '{column}'")]
    MissingWidthEntry { column: ColumnKind },
}

/// One column of a [`RenderableTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableColumn {
    pub name: &'static str,
    pub header: &'static str,
    pub style: &'static str,
    pub width: usize,
}

/// Column descriptors plus one row of cells per issue.
///
/// Every row has exactly one cell per column, in column order. Cells hold the
/// full extracted text; truncation to the width happens when drawing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderableTable {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl RenderableTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Draws the table with `tiny-jira-render`.
    pub fn render(&self, ctx: &RenderContext, theme: &Theme) -> String {
        let cols = self
            .columns
            .iter()
            .map(|c| Col::new(c.header, c.width).style(c.style))
            .collect();
        let painter = Painter::new(theme, ctx.color_enabled);
        Table::new(cols).border(ctx.border).render(&self.rows, &painter)
    }
}

/// Builds the table: one row per issue, one cell per column.
///
/// Widths are matched to columns by position, so a column selected twice
/// keeps each of its allocated widths. Fails when the entry at a column's
/// position is missing or belongs to another column.
pub fn build<'a, I>(
    issues: I,
    columns: &[&ColumnDefinition],
    widths: &ColumnWidths,
) -> Result<RenderableTable, TableError>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let descriptors = columns
        .iter()
        .enumerate()
        .map(|(index, col)| {
            let width = match widths.at(index) {
                Some((kind, width)) if kind == col.kind => width,
                _ => return Err(TableError::MissingWidthEntry { column: col.kind }),
            };
            Ok(TableColumn {
                name: col.name,
                header: col.header,
                style: col.style,
                width,
            })
        })
        .collect::<Result<Vec<_>, TableError>>()?;

    let rows = issues
        .into_iter()
        .map(|issue| {
            columns
                .iter()
                .map(|col| extract(col.kind.field(), issue))
                .collect()
        })
        .collect();

    Ok(RenderableTable {
        columns: descriptors,
        rows,
    })
}
