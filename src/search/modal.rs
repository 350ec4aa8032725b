//! The search overlay state machine.
//!
//! ```text
//!             open()
//!   Closed ───────────▶ Open(session)
//!     ▲                   │  Input / ArrowUp / ArrowDown / Hover
//!     │                   │  mutate the session in place
//!     └───────────────────┘
//!   Escape, Enter with a selection, BackdropClick, Close
//! ```
//!
//! The modal never talks to the store or router itself. Committing a result
//! yields [`SearchAction::Navigate`] followed by [`SearchAction::Close`], and the
//! host carries those out.

use super::session::SearchSession;
use crate::domain::SearchableItem;
use std::rc::Rc;

/// Keys the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    /// Any other key; left to the input's native handling.
    Other,
}

/// Input delivered to the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The input's full text after an edit.
    Input(String),
    Key(Key),
    /// The pointer entered the result row at this position.
    Hover(usize),
    /// A click on the dimmed area around the dialog.
    BackdropClick,
    /// A close request from outside the overlay.
    Close,
}

/// Effects requested by the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Navigate to this path through the router.
    Navigate(String),
    /// The overlay closed; the host should clear its open flag.
    Close,
}

/// What handling one event produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Whether the host should suppress the event's native behavior.
    pub prevent_default: bool,
    /// Whether session state changed and the overlay needs redrawing.
    pub changed: bool,
    pub actions: Vec<SearchAction>,
}

impl KeyOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn handled(prevent_default: bool, changed: bool) -> Self {
        Self {
            prevent_default,
            changed,
            actions: Vec::new(),
        }
    }
}

/// Open/closed state of the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open(SearchSession),
}

/// The search overlay over a fixed catalog.
#[derive(Debug, Clone)]
pub struct SearchModal {
    candidates: Rc<[SearchableItem]>,
    cap: usize,
    state: ModalState,
}

impl SearchModal {
    /// A closed overlay over `candidates`, showing at most `cap` results.
    #[must_use]
    pub fn new(candidates: Rc<[SearchableItem]>, cap: usize) -> Self {
        Self {
            candidates,
            cap,
            state: ModalState::Closed,
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[SearchableItem] {
        &self.candidates
    }

    #[must_use]
    pub const fn state(&self) -> &ModalState {
        &self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// The active session, if open.
    #[must_use]
    pub const fn session(&self) -> Option<&SearchSession> {
        match &self.state {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }

    /// Current result entries, empty when closed.
    #[must_use]
    pub fn results(&self) -> Vec<&SearchableItem> {
        self.session().map_or_else(Vec::new, |session| {
            session
                .results()
                .iter()
                .filter_map(|&index| self.candidates.get(index))
                .collect()
        })
    }

    /// The highlighted entry, if open and there is one.
    #[must_use]
    pub fn selected(&self) -> Option<&SearchableItem> {
        self.session()
            .and_then(|session| session.selected(&self.candidates))
    }

    /// Enters Open with a fresh session. Returns `false` if already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        tracing::debug!("search overlay opened");
        self.state = ModalState::Open(SearchSession::new(&self.candidates, self.cap));
        true
    }

    /// Enters Closed, discarding the session. Returns `false` if already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        tracing::debug!("search overlay closed");
        self.state = ModalState::Closed;
        true
    }

    /// Handles one event. Events are ignored while closed.
    pub fn handle(&mut self, event: &SearchEvent) -> KeyOutcome {
        let _span = tracing::debug_span!("search_event", event = ?event).entered();

        let ModalState::Open(session) = &mut self.state else {
            tracing::trace!("search overlay closed, event ignored");
            return KeyOutcome::ignored();
        };
        let candidates = &self.candidates[..];

        match event {
            SearchEvent::Input(text) => {
                session.set_query(candidates, text);
                tracing::trace!(query = %session.query(), results = session.results().len(), "query updated");
                KeyOutcome::handled(false, true)
            }
            SearchEvent::Key(Key::ArrowDown) => {
                session.select_next(candidates);
                KeyOutcome::handled(true, true)
            }
            SearchEvent::Key(Key::ArrowUp) => {
                session.select_previous(candidates);
                KeyOutcome::handled(true, true)
            }
            SearchEvent::Key(Key::Enter) => {
                let Some(item) = session.selected(candidates) else {
                    tracing::debug!(query = %session.query(), "enter with no results, ignored");
                    return KeyOutcome::handled(true, false);
                };
                let path = item.path.clone();
                tracing::debug!(path = %path, title = %item.title, "search result committed");
                self.state = ModalState::Closed;
                KeyOutcome {
                    prevent_default: true,
                    changed: true,
                    actions: vec![SearchAction::Navigate(path), SearchAction::Close],
                }
            }
            SearchEvent::Key(Key::Escape) => {
                self.state = ModalState::Closed;
                KeyOutcome {
                    prevent_default: true,
                    changed: true,
                    actions: vec![SearchAction::Close],
                }
            }
            SearchEvent::Key(Key::Other) => KeyOutcome::ignored(),
            SearchEvent::Hover(row) => {
                let changed = session.hover(*row);
                KeyOutcome::handled(false, changed)
            }
            SearchEvent::BackdropClick | SearchEvent::Close => {
                self.state = ModalState::Closed;
                KeyOutcome {
                    prevent_default: false,
                    changed: true,
                    actions: vec![SearchAction::Close],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_catalog;
    use crate::search::MAX_RESULTS;

    fn open_modal() -> SearchModal {
        let mut modal = SearchModal::new(sample_catalog().into(), MAX_RESULTS);
        assert!(modal.open());
        modal
    }

    fn key(modal: &mut SearchModal, key: Key) -> KeyOutcome {
        modal.handle(&SearchEvent::Key(key))
    }

    #[test]
    fn closed_modal_ignores_everything() {
        let mut modal = SearchModal::new(sample_catalog().into(), MAX_RESULTS);
        for event in [
            SearchEvent::Key(Key::Enter),
            SearchEvent::Key(Key::Escape),
            SearchEvent::Input("map".into()),
            SearchEvent::Hover(1),
        ] {
            assert_eq!(modal.handle(&event), KeyOutcome::default());
        }
        assert!(!modal.is_open());
    }

    #[test]
    fn opening_twice_keeps_the_session() {
        let mut modal = open_modal();
        modal.handle(&SearchEvent::Input("pi".into()));
        assert!(!modal.open());
        assert_eq!(modal.session().map(SearchSession::query), Some("pi"));
    }

    #[test]
    fn reopening_starts_fresh() {
        let mut modal = open_modal();
        modal.handle(&SearchEvent::Input("map".into()));
        key(&mut modal, Key::ArrowDown);
        modal.close();
        modal.open();
        let session = modal.session().unwrap();
        assert_eq!(session.query(), "");
        assert_eq!(session.selected_index(), 0);
    }

    #[test]
    fn type_move_and_commit() {
        let mut modal = open_modal();
        modal.handle(&SearchEvent::Input("map".into()));
        assert_eq!(
            modal.results().iter().map(|i| i.title.as_str()).collect::<Vec<_>>(),
            vec!["map", "flatMap", "mapValues"]
        );

        key(&mut modal, Key::ArrowDown);
        key(&mut modal, Key::ArrowDown);
        assert_eq!(modal.session().unwrap().selected_index(), 2);

        let outcome = key(&mut modal, Key::Enter);
        assert!(outcome.prevent_default);
        assert_eq!(
            outcome.actions,
            vec![
                SearchAction::Navigate("/object/map-values".into()),
                SearchAction::Close
            ]
        );
        assert!(!modal.is_open());
    }

    #[test]
    fn enter_without_results_is_a_no_op() {
        let mut modal = open_modal();
        modal.handle(&SearchEvent::Input("no such page".into()));
        let before = modal.state().clone();

        let outcome = key(&mut modal, Key::Enter);

        assert!(outcome.actions.is_empty());
        assert!(!outcome.changed);
        assert_eq!(modal.state(), &before);
    }

    #[test]
    fn escape_always_closes() {
        let mut modal = open_modal();
        modal.handle(&SearchEvent::Input("no such page".into()));
        let outcome = key(&mut modal, Key::Escape);
        assert!(outcome.prevent_default);
        assert_eq!(outcome.actions, vec![SearchAction::Close]);
        assert!(modal.session().is_none());
    }

    #[test]
    fn only_handled_keys_prevent_default() {
        let mut modal = open_modal();
        assert!(key(&mut modal, Key::ArrowDown).prevent_default);
        assert!(key(&mut modal, Key::ArrowUp).prevent_default);
        assert!(!key(&mut modal, Key::Other).prevent_default);
        assert!(!modal.handle(&SearchEvent::Input("x".into())).prevent_default);
    }

    #[test]
    fn hover_then_enter_commits_the_hovered_row() {
        let mut modal = open_modal();
        modal.handle(&SearchEvent::Hover(4));
        let outcome = key(&mut modal, Key::Enter);
        assert_eq!(outcome.actions[0], SearchAction::Navigate("/array/filter".into()));
    }

    #[test]
    fn backdrop_and_external_close() {
        let mut modal = open_modal();
        let outcome = modal.handle(&SearchEvent::BackdropClick);
        assert_eq!(outcome.actions, vec![SearchAction::Close]);
        assert!(!outcome.prevent_default);

        modal.open();
        modal.handle(&SearchEvent::Close);
        assert!(!modal.is_open());
    }
}
