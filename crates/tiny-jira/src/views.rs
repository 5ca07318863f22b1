//! Detail and comment views for a single issue.

use tiny_jira_render::{Painter, Panel, RenderContext, Theme};

use crate::fields::{extract, Field};
use crate::issue::Issue;

/// The first line of an issue's detail view: `KEY  [Type]  (Status: status)`.
pub fn issue_heading(issue: &Issue) -> String {
    format!(
        "{}  [{}]  (Status: {})",
        issue.key,
        extract(Field::IssueType, issue),
        extract(Field::Status, issue)
    )
}

/// Builds the detail panel for one issue.
pub fn issue_panel(issue: &Issue, show_description: bool) -> Panel {
    let panel = Panel::new(issue_heading(issue))
        .field("Summary", extract(Field::Summary, issue))
        .field("Reporter", extract(Field::Reporter, issue))
        .field("Assignee", extract(Field::Assignee, issue))
        .field("Labels", extract(Field::Labels, issue))
        .field("Created", extract(Field::Created, issue))
        .field("Updated", extract(Field::Updated, issue));

    if !show_description {
        return panel;
    }

    let panel = panel.rule();
    match issue.description.as_deref() {
        Some(text) => panel.paragraph(text),
        None => panel.styled_paragraph("(no description)", "muted"),
    }
}

/// Draws the detail view.
pub fn render_issue(
    issue: &Issue,
    show_description: bool,
    ctx: &RenderContext,
    theme: &Theme,
) -> String {
    let painter = Painter::new(theme, ctx.color_enabled);
    issue_panel(issue, show_description).render(ctx, &painter)
}

/// Draws every comment on an issue, or a one-line notice when there are none.
pub fn render_comments(issue: &Issue, ctx: &RenderContext, theme: &Theme) -> String {
    if issue.comments.is_empty() {
        return format!("No comments on {}.", issue.key);
    }

    let mut panel = Panel::new(format!("Comments for {}", issue.key));
    for (i, comment) in issue.comments.iter().enumerate() {
        if i > 0 {
            panel = panel.rule();
        }
        panel = panel.field("Author", comment.author.as_deref().unwrap_or("(unknown)"));
        if let Some(created) = comment.created.as_deref() {
            panel = panel.field("Date", created.get(..10).unwrap_or(created));
        }
        panel = if comment.body.trim().is_empty() {
            panel.styled_paragraph("(empty)", "muted")
        } else {
            panel.paragraph(comment.body.as_str())
        };
    }

    let painter = Painter::new(theme, ctx.color_enabled);
    panel.render(ctx, &painter)
}
