//! Top-level frame renderer.
//!
//! Turns a [`PageViewModel`] into one ANSI-styled text frame. The overlay, when
//! present, is drawn between the header and the page so that it reads as the
//! topmost layer in a line-oriented terminal.
//!
//! ```text
//! [Header]
//! [Border]
//! [Search overlay]   (open only)
//! [Border]           (open only)
//! [Sidebar]          (open only)
//! [Page content]
//! [Border]
//! [Footer]
//! ```

use crate::ui::components;
use crate::ui::helpers::push_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PageViewModel;
use std::fmt::Display;

/// Renders a page to a string, `cols` columns wide.
///
/// # Example
///
/// ```rust
/// use docshell::app::Shell;
/// use docshell::router::{RouteTable, ViewComponent};
/// use docshell::ui::{render_page, Theme};
///
/// let table = RouteTable::builder(ViewComponent::new("home", || "Welcome".to_string())).build();
/// let shell = Shell::with_defaults(table, vec![]);
/// let frame = shell.with_frame(|page| render_page(page, &Theme::default(), 80)).unwrap();
/// assert!(frame.contains("Welcome"));
/// ```
#[must_use]
pub fn render_page<R: Display>(page: &PageViewModel<R>, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();

    components::render_header(&mut out, &page.header, theme, cols);
    push_border(&mut out, &theme.colors.border, cols);

    if let Some(search) = &page.search {
        components::render_search_overlay(&mut out, search, theme, cols);
        push_border(&mut out, &theme.colors.border, cols);
    }

    components::render_sidebar(&mut out, &page.sidebar, theme);

    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&page.content.to_string());
    out.push_str(Theme::reset());
    out.push('\n');

    push_border(&mut out, &theme.colors.border, cols);
    components::render_footer(&mut out, &page.footer, theme, cols);
    out
}
