//! View model types representing one rendered page.
//!
//! View models are computed from the store, the resolved view, and the search
//! overlay by [`Shell`](crate::app::Shell) on every re-render. They hold
//! display-ready data only.

use crate::domain::Language;

/// Everything needed to draw one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel<R> {
    pub header: HeaderInfo,
    pub sidebar: SidebarInfo,
    /// Name of the view the current route resolved to.
    pub view_name: String,
    /// Output of that view.
    pub content: R,
    /// Present while the search overlay is open.
    pub search: Option<SearchOverlayInfo>,
    pub footer: FooterInfo,
}

/// Header bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub language: Language,
    /// Raw route as stored.
    pub route: String,
    /// Label of the language switch, naming the language it switches to.
    pub language_toggle: String,
}

/// Sidebar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarInfo {
    pub open: bool,
    /// Catalog grouped by category, in first-seen order. Empty when closed.
    pub sections: Vec<SidebarSection>,
}

/// One category of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSection {
    pub category: String,
    pub links: Vec<SidebarLink>,
}

/// One page link in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    pub title: String,
    pub path: String,
    /// Whether the link points at the current page.
    pub is_active: bool,
}

/// Search overlay contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOverlayInfo {
    pub query: String,
    pub rows: Vec<ResultRow>,
    pub input_focused: bool,
    /// Shown instead of rows when nothing matched.
    pub empty_state: Option<EmptyState>,
}

/// One result row of the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub title: String,
    pub category: String,
    pub path: String,
    pub is_selected: bool,

    /// Character ranges of the title to highlight, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}
