//! Static route table mapping normalised paths to views.

use super::normalize::normalize_route;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// An opaque, named producer of render output.
///
/// The router never looks inside a view; it only hands it to whoever renders
/// the page. The name identifies the view in logs and comparisons.
pub struct ViewComponent<R> {
    name: String,
    render: Rc<dyn Fn() -> R>,
}

impl<R> ViewComponent<R> {
    pub fn new<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn() -> R + 'static,
    {
        Self {
            name: name.into(),
            render: Rc::new(render),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produces the view's output.
    pub fn render(&self) -> R {
        (self.render)()
    }

    /// Whether both components share the same underlying render function.
    #[must_use]
    pub fn same_view(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.render, &other.render)
    }
}

impl<R> Clone for ViewComponent<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            render: Rc::clone(&self.render),
        }
    }
}

impl<R> fmt::Debug for ViewComponent<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewComponent")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Immutable lookup from normalised path to view, with the home view as the
/// fallback for every unregistered path.
///
/// Built once at startup with [`RouteTable::builder`].
pub struct RouteTable<R> {
    routes: HashMap<String, ViewComponent<R>>,
    home: ViewComponent<R>,
}

impl<R> RouteTable<R> {
    /// Starts a table whose `/` entry and fallback are both `home`.
    pub fn builder(home: ViewComponent<R>) -> RouteTableBuilder<R> {
        RouteTableBuilder {
            routes: HashMap::new(),
            home,
        }
    }

    /// Looks up a path after normalising it; unknown paths get the home view.
    #[must_use]
    pub fn lookup(&self, path: &str) -> &ViewComponent<R> {
        let key = normalize_route(path);
        if key == "/" {
            return &self.home;
        }
        self.routes.get(key).unwrap_or_else(|| {
            tracing::debug!(path, normalized = key, "unknown route, falling back to home");
            &self.home
        })
    }

    /// Whether `path` has its own entry (the home path always does).
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        let key = normalize_route(path);
        key == "/" || self.routes.contains_key(key)
    }

    /// The fallback view.
    #[must_use]
    pub const fn home(&self) -> &ViewComponent<R> {
        &self.home
    }

    /// Number of registered paths, counting `/`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len() + 1
    }

    /// Never true: the home entry always exists.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl<R> fmt::Debug for RouteTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<&String> = self.routes.keys().collect();
        paths.sort();
        f.debug_struct("RouteTable")
            .field("home", &self.home.name)
            .field("paths", &paths)
            .finish()
    }
}

/// Builder for [`RouteTable`].
pub struct RouteTableBuilder<R> {
    routes: HashMap<String, ViewComponent<R>>,
    home: ViewComponent<R>,
}

impl<R> RouteTableBuilder<R> {
    /// Registers `view` at the normalised form of `path`.
    ///
    /// A later registration of the same normalised path replaces the earlier
    /// one. Registering `/` replaces the home view, fallback included.
    #[must_use]
    pub fn route(mut self, path: &str, view: ViewComponent<R>) -> Self {
        let key = normalize_route(path);
        if key == "/" {
            self.home = view;
        } else if let Some(previous) = self.routes.insert(key.to_string(), view) {
            tracing::debug!(path = key, replaced = previous.name(), "route registered twice");
        }
        self
    }

    #[must_use]
    pub fn build(self) -> RouteTable<R> {
        tracing::debug!(routes = self.routes.len() + 1, "route table built");
        RouteTable {
            routes: self.routes,
            home: self.home,
        }
    }
}

impl<R> fmt::Debug for RouteTableBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTableBuilder")
            .field("home", &self.home.name)
            .field("routes", &self.routes.len())
            .finish()
    }
}
