//! The shared application state record.

use crate::domain::Language;

/// Page-wide UI state shared by every consumer of the [`Store`](super::Store).
///
/// `route` is the raw path as requested; normalisation happens only when the
/// router resolves it, so prefix checks (such as `/ko`) see what was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub route: String,
    pub sidebar_open: bool,
    pub search_open: bool,
    pub language: Language,
}

impl AppState {
    /// State for a page that starts at `route`, with the language taken from
    /// its prefix.
    #[must_use]
    pub fn at_route(route: impl Into<String>) -> Self {
        let route = route.into();
        let language = Language::from_route(&route);
        Self {
            route,
            sidebar_open: false,
            search_open: false,
            language,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::at_route("/")
    }
}
