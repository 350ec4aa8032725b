//! Event handling for the shell.
//!
//! [`handle_event`] is the single entry point for user intents. It reads a
//! snapshot of the store, drives the search overlay, and returns the effects to
//! apply.
//!
//! # Event Types
//!
//! - **Layout**: `OpenSearch`, `CloseSearch`, `ToggleSidebar`
//! - **Navigation**: `Navigate`, `ToggleLanguage`
//! - **Overlay**: `Search` wrapping a [`SearchEvent`]
//! - **Scheduler**: `Tick` runs one turn of the task queue
//!
//! # Example
//!
//! ```rust
//! use docshell::app::{handle_event, Action, Event};
//! use docshell::domain::sample_catalog;
//! use docshell::scheduler::TaskQueue;
//! use docshell::search::{SearchModal, MAX_RESULTS};
//! use docshell::store::AppState;
//!
//! let state = AppState::default();
//! let mut modal = SearchModal::new(sample_catalog().into(), MAX_RESULTS);
//! let (render, actions) = handle_event(&state, &mut modal, &TaskQueue::new(), &Event::OpenSearch)?;
//! assert!(!render);
//! assert_eq!(actions, vec![Action::SetSearchOpen(true)]);
//! # Ok::<(), docshell::DocsError>(())
//! ```

use super::Action;
use crate::domain::error::Result;
use crate::domain::toggle_language_route;
use crate::scheduler::TaskQueue;
use crate::search::{SearchAction, SearchEvent, SearchModal};
use crate::store::AppState;

/// User intents and scheduler turns delivered to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the search overlay (header search button, `/` shortcut).
    OpenSearch,
    /// Closes the search overlay from outside it.
    CloseSearch,
    /// Shows or hides the sidebar.
    ToggleSidebar,
    /// Follows a link to this raw path.
    Navigate(String),
    /// Switches between the English and Korean variant of the current page.
    ToggleLanguage,
    /// Input for the search overlay.
    Search(SearchEvent),
    /// Runs the tasks queued before this turn began.
    Tick,
}

/// Processes an event and returns whether to re-render plus the actions to run.
///
/// Store writes re-render through the store subscriber, so the returned flag
/// only covers changes the store does not see: overlay session edits and
/// focus changes made by a task turn.
///
/// # Parameters
///
/// * `state` - Snapshot of the store taken before the event
/// * `modal` - The search overlay, mutated in place for `Search` events
/// * `tasks` - Queue drained by one turn on `Tick`
/// * `event` - Event to process
///
/// # Errors
///
/// None of the current events fail; the `Result` keeps the signature uniform
/// with the fallible surfaces of the shell.
pub fn handle_event(
    state: &AppState,
    modal: &mut SearchModal,
    tasks: &TaskQueue,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::OpenSearch => {
            if state.search_open {
                tracing::debug!("search already open");
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::SetSearchOpen(true)]))
        }
        Event::CloseSearch => {
            if !state.search_open {
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::SetSearchOpen(false)]))
        }
        Event::ToggleSidebar => Ok((false, vec![Action::ToggleSidebar])),
        Event::Navigate(path) => Ok((false, vec![Action::Navigate(path.clone())])),
        Event::ToggleLanguage => {
            let target = toggle_language_route(&state.route);
            tracing::debug!(from = %state.route, to = %target, "toggling language");
            Ok((false, vec![Action::Navigate(target)]))
        }
        Event::Search(search_event) => {
            let outcome = modal.handle(search_event);

            let mut actions = Vec::with_capacity(outcome.actions.len() + 1);
            if outcome.prevent_default {
                actions.push(Action::PreventDefault);
            }
            actions.extend(outcome.actions.into_iter().map(|action| match action {
                SearchAction::Navigate(path) => Action::Navigate(path),
                SearchAction::Close => Action::SetSearchOpen(false),
            }));

            Ok((outcome.changed && modal.is_open(), actions))
        }
        Event::Tick => {
            let ran = tasks.run_pending();
            if ran > 0 {
                tracing::trace!(ran, "task turn finished");
            }
            Ok((ran > 0, vec![]))
        }
    }
}
