//! Client-side path router built on the [`Store`].
//!
//! The router keeps two things apart: the raw route written to
//! [`AppState::route`](crate::store::AppState) on navigation, and the
//! normalised path used only when resolving a view. Consumers that inspect the
//! raw prefix (language detection) therefore see exactly what was requested.
//!
//! # Modules
//!
//! - [`normalize`]: trailing-slash normalisation
//! - [`table`]: [`RouteTable`] and [`ViewComponent`]
//! - [`history`]: [`History`] trait and [`MemoryHistory`]
//!
//! # Example
//!
//! ```rust
//! use docshell::router::{MemoryHistory, RouteTable, Router, ViewComponent};
//! use docshell::store::{AppState, Store};
//!
//! let table = RouteTable::builder(ViewComponent::new("home", || "home"))
//!     .route("/composition/pipe", ViewComponent::new("pipe", || "pipe"))
//!     .build();
//! let store = Store::new(AppState::default());
//! let mut router = Router::new(store.clone(), table, MemoryHistory::default());
//!
//! router.navigate_to("/composition/pipe/");
//! assert_eq!(store.route(), "/composition/pipe/");
//! assert_eq!(router.current_view().render(), "pipe");
//! ```

pub mod history;
pub mod normalize;
pub mod table;

pub use history::{History, MemoryHistory};
pub use normalize::normalize_route;
pub use table::{RouteTable, RouteTableBuilder, ViewComponent};

use crate::store::Store;
use std::fmt;
use std::rc::Rc;

/// Resolves paths to views and records navigations.
pub struct Router<R, H = MemoryHistory> {
    store: Store,
    table: Rc<RouteTable<R>>,
    history: H,
}

impl<R, H: History> Router<R, H> {
    #[must_use]
    pub fn new(store: Store, table: RouteTable<R>, history: H) -> Self {
        Self {
            store,
            table: Rc::new(table),
            history,
        }
    }

    /// Records `path` in history, then stores it as the raw route.
    ///
    /// Any string is accepted; the store write notifies subscribers before this
    /// returns.
    pub fn navigate_to(&mut self, path: &str) {
        tracing::debug!(path, normalized = normalize_route(path), "navigating");
        self.history.push(path);
        self.store.set_route(path);
    }

    /// Resolves `path` to a view, falling back to home for unknown paths.
    #[must_use]
    pub fn resolve_route(&self, path: &str) -> &ViewComponent<R> {
        self.table.lookup(path)
    }

    /// Resolves the store's current raw route.
    #[must_use]
    pub fn current_view(&self) -> &ViewComponent<R> {
        self.store.with_state(|s| self.table.lookup(&s.route))
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable<R> {
        &self.table
    }

    /// Shared handle to the table, for renderers that outlive a borrow of the
    /// router.
    #[must_use]
    pub fn shared_table(&self) -> Rc<RouteTable<R>> {
        Rc::clone(&self.table)
    }

    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }
}

impl<R, H: fmt::Debug> fmt::Debug for Router<R, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppState;

    fn router() -> (Store, Router<&'static str>) {
        let table = RouteTable::builder(ViewComponent::new("home", || "home"))
            .route("/composition/pipe", ViewComponent::new("pipe", || "pipe"))
            .route("/ko/composition/pipe", ViewComponent::new("pipe-ko", || "pipe-ko"))
            .build();
        let store = Store::new(AppState::default());
        let router = Router::new(store.clone(), table, MemoryHistory::starting_at("/"));
        (store, router)
    }

    #[test]
    fn trailing_slash_resolves_like_the_bare_path() {
        let (_, router) = router();
        let bare = router.resolve_route("/composition/pipe");
        let slashed = router.resolve_route("/composition/pipe/");
        assert!(bare.same_view(slashed));
        assert_eq!(slashed.name(), "pipe");
    }

    #[test]
    fn navigation_keeps_the_raw_route() {
        let (store, mut router) = router();
        router.navigate_to("/ko/composition/pipe///");

        assert_eq!(store.route(), "/ko/composition/pipe///");
        assert_eq!(router.history().current(), Some("/ko/composition/pipe///"));
        assert_eq!(router.current_view().name(), "pipe-ko");
    }

    #[test]
    fn any_string_navigates_and_falls_back() {
        let (store, mut router) = router();
        router.navigate_to("not a path at all");
        assert_eq!(store.route(), "not a path at all");
        assert!(router.current_view().same_view(router.resolve_route("/")));
        assert_eq!(router.history().entries().len(), 2);
    }

    #[test]
    fn subscribers_see_the_route_after_navigation() {
        let (store, mut router) = router();
        let seen = Rc::new(std::cell::RefCell::new(String::new()));
        let (reader, sink) = (store.clone(), Rc::clone(&seen));
        store.watch(move || *sink.borrow_mut() = reader.route());

        router.navigate_to("/composition/pipe");
        assert_eq!(*seen.borrow(), "/composition/pipe");
    }
}
