//! Sidebar component renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SidebarInfo;
use std::fmt::Write;

/// Appends the sidebar: one bold line per category followed by its links.
///
/// The current page's link is marked with `>` and drawn in
/// `sidebar_active_fg`. Nothing is drawn while the sidebar is closed.
pub fn render_sidebar(out: &mut String, sidebar: &SidebarInfo, theme: &Theme) {
    if !sidebar.open {
        return;
    }

    for section in &sidebar.sections {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.header_fg));
        let _ = write!(out, " {}", section.category);
        out.push_str(Theme::reset());
        out.push('\n');

        for link in &section.links {
            if link.is_active {
                out.push_str(&Theme::fg(&theme.colors.sidebar_active_fg));
                let _ = write!(out, "  > {}", link.title);
            } else {
                out.push_str(&Theme::fg(&theme.colors.text_normal));
                let _ = write!(out, "    {}", link.title);
            }
            out.push_str(Theme::reset());
            out.push('\n');
        }
    }
}
