//! Shared rendering utilities.
//!
//! Components append ANSI-styled text to a `String` frame buffer; nothing here
//! writes to stdout directly.

use crate::ui::theme::Theme;
use std::fmt::Write;
use unicode_width::UnicodeWidthChar;

/// Appends `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices with exclusive `end`, sorted and
/// non-overlapping. When `is_selected` is true the text is written plain so the
/// selection colors stay intact.
///
/// # Example
///
/// ```rust
/// use docshell::ui::helpers::push_highlighted;
/// use docshell::ui::Theme;
///
/// let mut out = String::new();
/// push_highlighted(&mut out, "flatMap", &[(4, 7)], &Theme::default(), false);
/// assert!(out.starts_with("flat"));
/// assert!(out.contains("Map"));
/// ```
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current || start >= end {
            continue;
        }
        out.extend(&chars[current..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        current = end;
    }

    out.extend(&chars[current..]);
}

/// Appends `text` centered in `cols` display columns, truncated if wider.
///
/// A wide glyph that would straddle the edge is dropped.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let mut visible = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > cols {
            break;
        }
        width += w;
        visible.push(c);
    }

    let padding = cols.saturating_sub(width) / 2;
    let _ = write!(
        out,
        "{}{visible}{}",
        " ".repeat(padding),
        " ".repeat(cols.saturating_sub(padding + width))
    );
}

/// Appends a full-width horizontal rule in `color`.
pub fn push_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
