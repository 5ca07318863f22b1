//! Property-based tests for table and text layout.

use proptest::prelude::*;
use tiny_jira_render::tabular::{display_width, truncate_end, wrap_indent, BorderStyle, Col, Table};
use tiny_jira_render::{Painter, Theme};

fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ,.-]{0,40}",
        "[日本語テキスト]{0,10}",
        Just(String::new()),
    ]
}

fn border_strategy() -> impl Strategy<Value = BorderStyle> {
    prop::sample::select(vec![
        BorderStyle::Ascii,
        BorderStyle::Light,
        BorderStyle::Rounded,
    ])
}

proptest! {
    /// Every drawn line of a bordered table has the same display width.
    #[test]
    fn table_lines_have_uniform_width(
        widths in prop::collection::vec(1usize..20, 1..6),
        rows in prop::collection::vec(prop::collection::vec(cell_strategy(), 6), 0..5),
        border in border_strategy(),
        colored in any::<bool>(),
    ) {
        let columns: Vec<Col> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| Col::new(format!("Column {i}"), *w).style("key"))
            .collect();
        let table = Table::new(columns).border(border);
        let theme = Theme::base();
        let painter = Painter::new(&theme, colored);

        let out = table.render(&rows, &painter);
        for line in out.lines() {
            prop_assert_eq!(display_width(line), table.total_width());
        }
    }

    /// Truncation never exceeds the limit and leaves short text alone.
    #[test]
    fn truncate_respects_limit(s in cell_strategy(), max in 0usize..30) {
        let out = truncate_end(&s, max, "…");
        prop_assert!(display_width(&out) <= max);
        if display_width(&s) <= max {
            prop_assert_eq!(out, s);
        }
    }

    /// Wrapped lines never exceed the requested width.
    #[test]
    fn wrap_respects_width(s in "[a-z ]{0,120}", width in 2usize..40, indent in 0usize..4) {
        for line in wrap_indent(&s, width, indent) {
            prop_assert!(display_width(&line) <= width);
        }
    }
}
