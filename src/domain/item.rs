//! Searchable catalog entries.
//!
//! The catalog is the fixed list of documentation pages the search overlay
//! filters. It is supplied from outside the core (a JSON file or the built-in
//! sample) and is never mutated after loading.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::{DocsError, Result};

/// One entry of the search catalog.
///
/// `path` is the route the shell navigates to when the entry is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableItem {
    pub title: String,
    pub category: String,
    pub path: String,
}

impl SearchableItem {
    /// Creates a catalog entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use docshell::SearchableItem;
    ///
    /// let item = SearchableItem::new("pipe", "Composition", "/composition/pipe");
    /// assert_eq!(item.title, "pipe");
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, category: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            path: path.into(),
        }
    }
}

/// Loads a catalog from a JSON array of `{ "title", "category", "path" }` records.
///
/// # Errors
///
/// Returns [`DocsError::Io`] if the file cannot be read, [`DocsError::Json`] if
/// it is not a valid array of entries, and [`DocsError::Catalog`] if an entry has
/// an empty path.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<SearchableItem>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let items: Vec<SearchableItem> = serde_json::from_str(&contents)?;

    if let Some(bad) = items.iter().find(|item| item.path.trim().is_empty()) {
        return Err(DocsError::Catalog(format!(
            "{}: entry '{}' has an empty path",
            path.display(),
            bad.title
        )));
    }

    tracing::debug!(path = %path.display(), entries = items.len(), "catalog loaded");
    Ok(items)
}

/// Built-in catalog used when no catalog file is configured.
#[must_use]
pub fn sample_catalog() -> Vec<SearchableItem> {
    [
        ("pipe", "Composition", "/composition/pipe"),
        ("compose", "Composition", "/composition/compose"),
        ("curry", "Function", "/function/curry"),
        ("map", "Array", "/array/map"),
        ("filter", "Array", "/array/filter"),
        ("reduce", "Array", "/array/reduce"),
        ("flatMap", "Array", "/array/flat-map"),
        ("groupBy", "Array", "/array/group-by"),
        ("debounce", "Function", "/function/debounce"),
        ("throttle", "Function", "/function/throttle"),
        ("mapValues", "Object", "/object/map-values"),
        ("pick", "Object", "/object/pick"),
        ("omit", "Object", "/object/omit"),
        ("memoize", "Function", "/function/memoize"),
        ("zip", "Array", "/array/zip"),
    ]
    .into_iter()
    .map(|(title, category, path)| SearchableItem::new(title, category, path))
    .collect()
}
