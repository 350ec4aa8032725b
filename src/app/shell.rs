//! The shell: header and layout consumers wired to the store.
//!
//! A [`Shell`] owns the single [`Store`], the [`Router`], the search overlay and
//! the deferred-focus machinery. At construction it registers one store
//! subscriber that
//!
//! 1. keeps the overlay in step with `search_open` (a false→true flip opens a
//!    fresh session and schedules the input focus for a later task turn, a
//!    true→false flip closes it), then
//! 2. recomposes the [`PageViewModel`] from the current state.
//!
//! The subscriber holds a [`WeakStore`](crate::store::WeakStore), so dropping
//! the shell frees the store even though the store owns the subscriber.

use super::{handle_event, Action, Event};
use crate::domain::error::Result;
use crate::domain::{toggle_language_route, Language, SearchableItem};
use crate::router::{normalize_route, History, MemoryHistory, RouteTable, Router};
use crate::scheduler::{FocusSlot, TaskQueue};
use crate::search::{match_ranges, SearchModal, MAX_RESULTS};
use crate::store::{AppState, Store, WeakStore};
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, PageViewModel, ResultRow, SearchOverlayInfo, SidebarInfo,
    SidebarLink, SidebarSection,
};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

/// Presentation settings for a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    /// Site title shown in the header.
    pub title: String,
    /// Cap on the number of search results.
    pub max_results: usize,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            title: "docshell".to_string(),
            max_results: MAX_RESULTS,
        }
    }
}

/// Everything the store subscriber needs to keep the page current.
struct PageRenderer<R> {
    store: WeakStore,
    table: Rc<RouteTable<R>>,
    candidates: Rc<[SearchableItem]>,
    modal: Rc<RefCell<SearchModal>>,
    tasks: TaskQueue,
    focus: FocusSlot,
    title: String,
    /// `search_open` as of the previous notification.
    search_was_open: Cell<bool>,
    frame: RefCell<Option<PageViewModel<R>>>,
    renders: Cell<usize>,
}

impl<R> PageRenderer<R> {
    fn on_store_change(&self) {
        let Some(store) = self.store.upgrade() else {
            return;
        };
        let state = store.snapshot();
        self.sync_modal(state.search_open);
        self.render(&state);
    }

    fn sync_modal(&self, search_open: bool) {
        if search_open == self.search_was_open.replace(search_open) {
            return;
        }
        let mut modal = self.modal.borrow_mut();
        if search_open {
            if modal.open() {
                self.focus.focus_later(&self.tasks);
            }
        } else {
            modal.close();
        }
    }

    fn render(&self, state: &AppState) {
        let page = self.compose(state);
        *self.frame.borrow_mut() = Some(page);
        self.renders.set(self.renders.get() + 1);
        tracing::trace!(renders = self.renders.get(), route = %state.route, "page rendered");
    }

    fn compose(&self, state: &AppState) -> PageViewModel<R> {
        let view = self.table.lookup(&state.route);
        let modal = self.modal.borrow();

        let search = if modal.is_open() {
            self.focus.mount();
            Some(self.compose_overlay(&modal))
        } else {
            self.focus.unmount();
            None
        };

        PageViewModel {
            header: HeaderInfo {
                title: self.title.clone(),
                language: state.language,
                route: state.route.clone(),
                language_toggle: language_toggle_label(state.language).to_string(),
            },
            sidebar: self.compose_sidebar(state),
            view_name: view.name().to_string(),
            content: view.render(),
            search,
            footer: FooterInfo {
                keybindings: footer_text(modal.is_open()).to_string(),
            },
        }
    }

    fn compose_overlay(&self, modal: &SearchModal) -> SearchOverlayInfo {
        let (query, selected_index) = modal
            .session()
            .map_or((String::new(), 0), |s| (s.query().to_string(), s.selected_index()));

        let rows: Vec<ResultRow> = modal
            .results()
            .into_iter()
            .enumerate()
            .map(|(row, item)| ResultRow {
                title: item.title.clone(),
                category: item.category.clone(),
                path: item.path.clone(),
                is_selected: row == selected_index,
                highlight_ranges: match_ranges(&item.title, &query),
            })
            .collect();

        let empty_state = rows.is_empty().then(|| EmptyState {
            message: "No results".to_string(),
            subtitle: format!("Nothing matches \"{query}\""),
        });

        SearchOverlayInfo {
            query,
            rows,
            input_focused: self.focus.is_focused(),
            empty_state,
        }
    }

    /// Groups the catalog by category in first-seen order.
    fn compose_sidebar(&self, state: &AppState) -> SidebarInfo {
        if !state.sidebar_open {
            return SidebarInfo {
                open: false,
                sections: Vec::new(),
            };
        }

        let current = page_path(&state.route);
        let mut sections: Vec<SidebarSection> = Vec::new();
        for item in self.candidates.iter() {
            let link = SidebarLink {
                title: item.title.clone(),
                path: item.path.clone(),
                is_active: normalize_route(&item.path) == normalize_route(&current),
            };
            match sections.iter_mut().find(|s| s.category == item.category) {
                Some(section) => section.links.push(link),
                None => sections.push(SidebarSection {
                    category: item.category.clone(),
                    links: vec![link],
                }),
            }
        }

        SidebarInfo {
            open: true,
            sections,
        }
    }
}

/// The English path of a raw route.
fn page_path(route: &str) -> String {
    match Language::from_route(route) {
        Language::Ko => toggle_language_route(route),
        Language::En => route.to_string(),
    }
}

const fn language_toggle_label(current: Language) -> &'static str {
    match current.toggled() {
        Language::Ko => "한국어",
        Language::En => "English",
    }
}

const fn footer_text(search_open: bool) -> &'static str {
    if search_open {
        "↑/↓ select • enter open • esc close"
    } else {
        "/ search • sidebar • lang • go <path> • quit"
    }
}

/// The page shell.
///
/// # Example
///
/// ```rust
/// use docshell::app::{Event, Shell};
/// use docshell::domain::sample_catalog;
/// use docshell::router::{RouteTable, ViewComponent};
/// use docshell::search::{Key, SearchEvent};
///
/// let table = RouteTable::builder(ViewComponent::new("home", || "home".to_string()))
///     .route("/composition/pipe", ViewComponent::new("pipe", || "pipe".to_string()))
///     .build();
/// let mut shell = Shell::with_defaults(table, sample_catalog());
///
/// shell.dispatch(&Event::OpenSearch)?;
/// shell.dispatch(&Event::Search(SearchEvent::Input("pipe".into())))?;
/// shell.dispatch(&Event::Search(SearchEvent::Key(Key::Enter)))?;
///
/// assert_eq!(shell.store().route(), "/composition/pipe");
/// assert!(!shell.store().search_open());
/// # Ok::<(), docshell::DocsError>(())
/// ```
pub struct Shell<R, H = MemoryHistory> {
    store: Store,
    router: Router<R, H>,
    renderer: Rc<PageRenderer<R>>,
}

impl<R: 'static> Shell<R> {
    /// A shell at `/` with in-memory history and default settings.
    #[must_use]
    pub fn with_defaults(table: RouteTable<R>, candidates: Vec<SearchableItem>) -> Self {
        Self::new(
            Store::new(AppState::default()),
            table,
            MemoryHistory::starting_at("/"),
            candidates,
            ShellSettings::default(),
        )
    }
}

impl<R: 'static, H: History> Shell<R, H> {
    /// Wires the shell to `store` and renders the first frame.
    ///
    /// # Parameters
    ///
    /// * `store` - The page's single store; its current state is the start state
    /// * `table` - Route table the router resolves against
    /// * `history` - Where navigations are recorded
    /// * `candidates` - Search catalog, also listed in the sidebar
    /// * `settings` - Title and result cap
    #[must_use]
    pub fn new(
        store: Store,
        table: RouteTable<R>,
        history: H,
        candidates: Vec<SearchableItem>,
        settings: ShellSettings,
    ) -> Self {
        let router = Router::new(store.clone(), table, history);
        let candidates: Rc<[SearchableItem]> = candidates.into();

        let renderer = Rc::new(PageRenderer {
            store: store.downgrade(),
            table: router.shared_table(),
            candidates: Rc::clone(&candidates),
            modal: Rc::new(RefCell::new(SearchModal::new(candidates, settings.max_results))),
            tasks: TaskQueue::new(),
            focus: FocusSlot::new(),
            title: settings.title,
            search_was_open: Cell::new(false),
            frame: RefCell::new(None),
            renders: Cell::new(0),
        });

        let subscriber = Rc::clone(&renderer);
        store.watch(move || subscriber.on_store_change());

        tracing::debug!(
            route = %store.route(),
            candidates = renderer.candidates.len(),
            routes = router.table().len(),
            "shell initialized"
        );
        renderer.on_store_change();

        Self {
            store,
            router,
            renderer,
        }
    }

    /// Handles `event` and executes the resulting actions in order.
    ///
    /// Returns whether the event's native behavior should be suppressed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (should_render, actions) = {
            let state = self.store.snapshot();
            let mut modal = self.renderer.modal.borrow_mut();
            handle_event(&state, &mut modal, &self.renderer.tasks, event)?
        };

        let mut prevent_default = false;
        for action in actions {
            tracing::debug!(action = ?action, "executing action");
            match action {
                Action::Navigate(path) => self.navigate(&path),
                Action::SetSearchOpen(open) => self.store.set_search_open(open),
                Action::ToggleSidebar => self.store.toggle_sidebar(),
                Action::PreventDefault => prevent_default = true,
            }
        }

        if should_render {
            self.refresh();
        }
        Ok(prevent_default)
    }

    fn navigate(&mut self, path: &str) {
        self.router.navigate_to(path);
        let language = Language::from_route(path);
        if language != self.store.language() {
            self.store.set_language(language);
        }
    }

    /// Recomposes the page without a store write.
    pub fn refresh(&self) {
        let state = self.store.snapshot();
        self.renderer.render(&state);
    }

    /// Reads the most recently rendered page.
    pub fn with_frame<T>(&self, read: impl FnOnce(&PageViewModel<R>) -> T) -> Option<T> {
        self.renderer.frame.borrow().as_ref().map(read)
    }

    /// Number of pages rendered so far, the initial one included.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renderer.renders.get()
    }

    /// The search overlay.
    #[must_use]
    pub fn modal(&self) -> Ref<'_, SearchModal> {
        self.renderer.modal.borrow()
    }

    /// The overlay's query, or `None` while it is closed.
    #[must_use]
    pub fn search_query(&self) -> Option<String> {
        self.modal().session().map(|s| s.query().to_string())
    }

    /// The overlay's selection, or `None` while it is closed.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.modal().session().map(|s| s.selected_index())
    }

    /// Paths of the current results, empty while closed.
    #[must_use]
    pub fn result_paths(&self) -> Vec<String> {
        self.modal().results().into_iter().map(|item| item.path.clone()).collect()
    }

    #[must_use]
    pub fn is_input_mounted(&self) -> bool {
        self.renderer.focus.is_mounted()
    }

    #[must_use]
    pub fn is_input_focused(&self) -> bool {
        self.renderer.focus.is_focused()
    }

    /// Tasks waiting for the next `Tick`.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.renderer.tasks.pending()
    }

    #[must_use]
    pub fn candidates(&self) -> &[SearchableItem] {
        &self.renderer.candidates
    }

    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub const fn router(&self) -> &Router<R, H> {
        &self.router
    }
}

impl<R, H> std::fmt::Debug for Shell<R, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("store", &self.store)
            .field("renders", &self.renderer.renders.get())
            .finish_non_exhaustive()
    }
}
