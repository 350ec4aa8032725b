//! Observable application state.
//!
//! A [`Store`] holds the single [`AppState`] of the running page and calls every
//! registered subscriber after each field write. Notification is synchronous,
//! runs in registration order, and happens once per write: setting two fields
//! in a row produces two notification rounds.
//!
//! # Example
//!
//! ```rust
//! use docshell::store::{AppState, Store};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let store = Store::new(AppState::default());
//! let renders = Rc::new(Cell::new(0));
//!
//! let counter = Rc::clone(&renders);
//! store.watch(move || counter.set(counter.get() + 1));
//!
//! store.set_sidebar_open(true);
//! store.set_route("/array/map");
//! assert_eq!(renders.get(), 2);
//! ```

mod state;

pub use state::AppState;

use crate::domain::Language;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A callback run after every state write.
pub type Subscriber = Rc<dyn Fn()>;

struct Inner {
    state: RefCell<AppState>,
    subscribers: RefCell<Vec<Subscriber>>,
}

/// Handle to the page's shared state.
///
/// Cloning the handle does not copy the state; every clone reads and writes the
/// same [`AppState`]. Construct one store at startup and pass clones to the
/// components that need it.
///
/// The store is single-threaded. Subscribers may read the store and may also
/// write to it, in which case the nested write runs its own notification round
/// before the outer round continues.
#[derive(Clone)]
pub struct Store {
    inner: Rc<Inner>,
}

impl Store {
    /// Creates the store with its initial state and no subscribers.
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(initial),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Registers `subscriber` to run after every subsequent write.
    ///
    /// There is no unregistration; the same callback may be registered more than
    /// once and then runs once per registration. A subscriber registered while a
    /// notification round is in progress first runs on the next round.
    pub fn watch<F>(&self, subscriber: F)
    where
        F: Fn() + 'static,
    {
        self.inner.subscribers.borrow_mut().push(Rc::new(subscriber));
        tracing::trace!(subscribers = self.subscriber_count(), "subscriber registered");
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    /// Reads the current state without cloning it.
    ///
    /// The closure must not write to the store.
    pub fn with_state<T>(&self, read: impl FnOnce(&AppState) -> T) -> T {
        read(&self.inner.state.borrow())
    }

    #[must_use]
    pub fn route(&self) -> String {
        self.with_state(|s| s.route.clone())
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.with_state(|s| s.sidebar_open)
    }

    #[must_use]
    pub fn search_open(&self) -> bool {
        self.with_state(|s| s.search_open)
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.with_state(|s| s.language)
    }

    pub fn set_route(&self, route: impl Into<String>) {
        let route = route.into();
        self.write("route", move |s| s.route = route);
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.write("sidebar_open", |s| s.sidebar_open = open);
    }

    pub fn set_search_open(&self, open: bool) {
        self.write("search_open", |s| s.search_open = open);
    }

    pub fn set_language(&self, language: Language) {
        self.write("language", |s| s.language = language);
    }

    /// Flips `sidebar_open` with a single write.
    pub fn toggle_sidebar(&self) {
        self.write("sidebar_open", |s| s.sidebar_open = !s.sidebar_open);
    }

    /// A handle that does not keep the state alive.
    ///
    /// Subscribers that need the store capture this instead of a [`Store`] so
    /// that the store does not own itself through its subscriber list.
    #[must_use]
    pub fn downgrade(&self) -> WeakStore {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether both handles refer to the same state.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Applies one field write and notifies.
    ///
    /// The state borrow is released before any subscriber runs.
    fn write(&self, field: &'static str, apply: impl FnOnce(&mut AppState)) {
        apply(&mut self.inner.state.borrow_mut());
        self.notify(field);
    }

    fn notify(&self, field: &'static str) {
        let subscribers: Vec<Subscriber> = self.inner.subscribers.borrow().clone();
        tracing::trace!(field, subscribers = subscribers.len(), "notifying subscribers");
        for subscriber in &subscribers {
            subscriber();
        }
    }
}

/// Non-owning handle created by [`Store::downgrade`].
#[derive(Clone)]
pub struct WeakStore {
    inner: Weak<Inner>,
}

impl WeakStore {
    /// The store, if it still exists.
    #[must_use]
    pub fn upgrade(&self) -> Option<Store> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl fmt::Debug for WeakStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakStore")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder(store: &Store, log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) {
        let log = Rc::clone(log);
        store.watch(move || log.borrow_mut().push(name));
    }

    #[test]
    fn notifies_in_registration_order() {
        let store = Store::new(AppState::default());
        let log = Rc::new(RefCell::new(Vec::new()));
        recorder(&store, &log, "first");
        recorder(&store, &log, "second");
        recorder(&store, &log, "third");

        store.set_search_open(true);

        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn every_write_is_its_own_round() {
        let store = Store::new(AppState::default());
        let rounds = Rc::new(Cell::new(0));
        let counter = Rc::clone(&rounds);
        store.watch(move || counter.set(counter.get() + 1));

        store.set_route("/array/map");
        store.set_language(Language::Ko);
        store.set_sidebar_open(false);

        assert_eq!(rounds.get(), 3, "unchanged values still notify");
    }

    #[test]
    fn writes_without_subscribers_are_fine() {
        let store = Store::new(AppState::default());
        store.set_route("/composition/pipe");
        assert_eq!(store.route(), "/composition/pipe");
    }

    #[test]
    fn duplicate_registration_runs_twice() {
        let store = Store::new(AppState::default());
        let rounds = Rc::new(Cell::new(0));
        let counter = Rc::clone(&rounds);
        let callback = move || counter.set(counter.get() + 1);
        store.watch(callback.clone());
        store.watch(callback);

        store.toggle_sidebar();

        assert_eq!(rounds.get(), 2);
        assert!(store.sidebar_open());
    }

    #[test]
    fn subscribers_observe_the_new_value() {
        let store = Store::new(AppState::default());
        let seen = Rc::new(RefCell::new(None));
        let (reader, sink) = (store.clone(), Rc::clone(&seen));
        store.watch(move || *sink.borrow_mut() = Some(reader.route()));

        store.set_route("/ko/array/map");

        assert_eq!(seen.borrow().as_deref(), Some("/ko/array/map"));
    }

    #[test]
    fn nested_writes_notify_before_the_outer_round_continues() {
        let store = Store::new(AppState::default());
        let log = Rc::new(RefCell::new(Vec::new()));

        let (writer, sink) = (store.clone(), Rc::clone(&log));
        store.watch(move || {
            let open = writer.search_open();
            sink.borrow_mut().push(format!("a:{open}"));
            if open {
                writer.set_search_open(false);
            }
        });
        let (reader, sink) = (store.clone(), Rc::clone(&log));
        store.watch(move || sink.borrow_mut().push(format!("b:{}", reader.search_open())));

        store.set_search_open(true);

        assert_eq!(*log.borrow(), vec!["a:true", "a:false", "b:false", "b:false"]);
    }

    #[test]
    fn subscriber_added_during_notification_waits_for_next_round() {
        let store = Store::new(AppState::default());
        let late_calls = Rc::new(Cell::new(0));

        let (registrar, calls) = (store.clone(), Rc::clone(&late_calls));
        let registered = Cell::new(false);
        store.watch(move || {
            if !registered.replace(true) {
                let calls = Rc::clone(&calls);
                registrar.watch(move || calls.set(calls.get() + 1));
            }
        });

        store.set_route("/a");
        assert_eq!(late_calls.get(), 0);
        store.set_route("/b");
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn clones_share_one_state() {
        let store = Store::new(AppState::default());
        let other = store.clone();
        other.set_language(Language::Ko);
        assert_eq!(store.language(), Language::Ko);
        assert!(store.ptr_eq(&other));
        assert!(!store.ptr_eq(&Store::new(AppState::default())));
    }

    #[test]
    fn weak_handle_does_not_keep_the_store_alive() {
        let store = Store::new(AppState::default());
        let weak = store.downgrade();
        assert!(weak.upgrade().is_some_and(|s| s.ptr_eq(&store)));
        drop(store);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn initial_language_follows_start_route() {
        assert_eq!(AppState::at_route("/ko/array/map").language, Language::Ko);
        assert_eq!(AppState::default().route, "/");
    }
}
