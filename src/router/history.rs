//! Navigation history primitives.

/// Where the router records navigations.
///
/// A browser host would push onto the session history; the in-process
/// [`MemoryHistory`] keeps the entries in a vector.
pub trait History {
    /// Records a navigation to `path` (raw, as requested).
    fn push(&mut self, path: &str);

    /// The most recent entry, if any.
    fn current(&self) -> Option<&str>;
}

/// In-memory history stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
}

impl MemoryHistory {
    /// History whose first entry is `initial`.
    #[must_use]
    pub fn starting_at(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for MemoryHistory {
    fn push(&mut self, path: &str) {
        self.entries.push(path.to_string());
    }

    fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}
