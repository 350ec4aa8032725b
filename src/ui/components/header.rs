//! Header component renderer.
//!
//! Renders the site title bar: title on the left, current route in the middle,
//! and the language switch on the right.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Appends the header bar.
///
/// # Layout
///
/// ```text
/// [title]   [route] [padding] [EN|KO] [toggle label]
/// ```
///
/// The line is padded to `cols` display columns so the header background fills the row.
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let left = format!(" {}   {}", header.title, header.route);
    let right = format!(
        "[{}] {} ",
        header.language.code().to_uppercase(),
        header.language_toggle
    );
    let used = left.width() + right.width();

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    let _ = write!(out, "{left}{}{right}", " ".repeat(cols.saturating_sub(used)));
    out.push_str(Theme::reset());
    out.push('\n');
}
