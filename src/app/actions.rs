//! Effects produced by the event handler.
//!
//! [`handle_event`](super::handle_event) never touches the store or router
//! itself. It returns a list of [`Action`]s and [`Shell::dispatch`] carries them
//! out in order, so one event can queue several effects (commit a search
//! result: navigate, then close the overlay).
//!
//! [`Shell::dispatch`]: super::Shell::dispatch

/// A side effect to execute against the store or router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigates through the router to this raw path.
    ///
    /// The language is re-derived from the path's prefix afterwards.
    Navigate(String),

    /// Writes `search_open`. Opening resets the overlay's session and schedules
    /// the deferred input focus.
    SetSearchOpen(bool),

    /// Flips `sidebar_open`.
    ToggleSidebar,

    /// The triggering key's native behavior should be suppressed.
    PreventDefault,
}
