//! Search overlay component renderer.
//!
//! Renders the bordered query box followed by the result rows, or the empty
//! state when nothing matched.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultRow, SearchOverlayInfo};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

use super::empty::render_empty_state;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Width of the title column in result rows.
const TITLE_COLUMN_WIDTH: usize = 24;

/// Width of the category column in result rows.
const CATEGORY_COLUMN_WIDTH: usize = 12;

/// Appends the whole overlay.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: query_  │ [margin]
/// [margin] └─────────────────┘ [margin]
/// title                    category   /path
/// ...
/// ```
///
/// A focused input shows a `_` caret after the query.
pub fn render_search_overlay(out: &mut String, search: &SearchOverlayInfo, theme: &Theme, cols: usize) {
    render_search_box(out, search, theme, cols);

    if let Some(empty) = &search.empty_state {
        render_empty_state(out, empty, theme, cols);
        return;
    }

    for row in &search.rows {
        render_result_row(out, row, theme, cols);
    }
}

fn render_search_box(out: &mut String, search: &SearchOverlayInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    let _ = writeln!(out, "{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let caret = if search.input_focused { "_" } else { "" };
    let search_text = format!(" Search: {}{caret}", search.query);
    let padding = inner_width.saturating_sub(search_text.width());
    let _ = writeln!(
        out,
        "{margin}{border}│{}{search_text}{}{border}│{}",
        Theme::fg(&theme.colors.text_normal),
        " ".repeat(padding),
        Theme::reset()
    );

    let _ = writeln!(out, "{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());
}

/// Appends one result row: title (with match highlights), category, path.
///
/// The selected row is drawn in selection colors across the full width.
fn render_result_row(out: &mut String, row: &ResultRow, theme: &Theme, cols: usize) {
    if row.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }

    out.push(' ');
    helpers::push_highlighted(out, &row.title, &row.highlight_ranges, theme, row.is_selected);
    if !row.is_selected {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }

    let title_len = row.title.width();
    let tail = format!(
        "{}{} {}",
        row.category,
        " ".repeat(CATEGORY_COLUMN_WIDTH.saturating_sub(row.category.width())),
        row.path
    );
    let _ = write!(out, "{}{tail}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len)));

    let line_len = 1 + title_len.max(TITLE_COLUMN_WIDTH) + tail.width();
    out.push_str(&" ".repeat(cols.saturating_sub(line_len)));
    out.push_str(Theme::reset());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_lines(s: &str) -> Vec<String> {
        let mut text = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, c) => text.push(c),
            }
        }
        text.lines().map(str::to_string).collect()
    }

    fn row(title: &str, category: &str, path: &str, is_selected: bool) -> ResultRow {
        ResultRow {
            title: title.to_string(),
            category: category.to_string(),
            path: path.to_string(),
            is_selected,
            highlight_ranges: vec![(0, 2)],
        }
    }

    #[test]
    fn wide_glyphs_keep_rows_at_full_width() {
        let search = SearchOverlayInfo {
            query: "배열".to_string(),
            rows: vec![
                row("배열 매핑", "배열", "/ko/array/map", true),
                row("Array map", "Array", "/array/map", false),
            ],
            input_focused: true,
            empty_state: None,
        };
        let mut out = String::new();
        render_search_overlay(&mut out, &search, &Theme::default(), 80);

        let lines = visible_lines(&out);
        assert_eq!(lines.len(), 5);
        for line in &lines[3..] {
            assert_eq!(line.width(), 80, "{line}");
        }
        assert_eq!(lines[1].width(), lines[0].width());
        assert_eq!(lines[3].find("/ko/array/map").map(|i| lines[3][..i].width()), Some(38));
        assert_eq!(lines[4].find("/array/map").map(|i| lines[4][..i].width()), Some(38));
    }
}
