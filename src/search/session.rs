//! Transient state of one open search overlay.

use super::filter::filter_results;
use crate::domain::SearchableItem;

/// Query, selection, and derived results while the overlay is open.
///
/// Created fresh on every open and dropped on close. `results` holds indices
/// into the catalog and is recomputed on every query change and every
/// selection move.
///
/// Whenever `results` is non-empty, `selected_index < results.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    query: String,
    selected_index: usize,
    results: Vec<usize>,
    cap: usize,
}

impl SearchSession {
    /// Starts a session with an empty query, showing the browse results.
    #[must_use]
    pub fn new(candidates: &[SearchableItem], cap: usize) -> Self {
        Self {
            query: String::new(),
            selected_index: 0,
            results: filter_results(candidates, "", cap),
            cap,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Catalog indices of the current results.
    #[must_use]
    pub fn results(&self) -> &[usize] {
        &self.results
    }

    /// Replaces the query, recomputes results, and selects the first row.
    pub fn set_query(&mut self, candidates: &[SearchableItem], query: &str) {
        query.clone_into(&mut self.query);
        self.refilter(candidates);
        self.selected_index = 0;
    }

    /// Moves the selection one row down, stopping at the last row.
    pub fn select_next(&mut self, candidates: &[SearchableItem]) {
        self.refilter(candidates);
        let last = self.results.len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(last);
    }

    /// Moves the selection one row up, stopping at the first row.
    pub fn select_previous(&mut self, candidates: &[SearchableItem]) {
        self.refilter(candidates);
        let last = self.results.len().saturating_sub(1);
        self.selected_index = self.selected_index.saturating_sub(1).min(last);
    }

    /// Selects a rendered row directly. Rows outside the results are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn hover(&mut self, row: usize) -> bool {
        if row >= self.results.len() {
            tracing::debug!(row, results = self.results.len(), "hover outside results ignored");
            return false;
        }
        let changed = self.selected_index != row;
        self.selected_index = row;
        changed
    }

    /// The highlighted catalog entry, or `None` when there are no results.
    #[must_use]
    pub fn selected<'a>(&self, candidates: &'a [SearchableItem]) -> Option<&'a SearchableItem> {
        self.results
            .get(self.selected_index)
            .and_then(|&index| candidates.get(index))
    }

    fn refilter(&mut self, candidates: &[SearchableItem]) {
        self.results = filter_results(candidates, &self.query, self.cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_catalog;
    use crate::search::MAX_RESULTS;

    #[test]
    fn starts_on_browse_results() {
        let items = sample_catalog();
        let session = SearchSession::new(&items, MAX_RESULTS);
        assert_eq!(session.query(), "");
        assert_eq!(session.selected_index(), 0);
        assert_eq!(session.results().len(), 10);
    }

    #[test]
    fn selection_saturates_at_both_ends() {
        let items = sample_catalog();
        let mut session = SearchSession::new(&items, MAX_RESULTS);
        session.set_query(&items, "map");

        for _ in 0..5 {
            session.select_next(&items);
        }
        assert_eq!(session.selected_index(), 2);

        for _ in 0..5 {
            session.select_previous(&items);
        }
        assert_eq!(session.selected_index(), 0);
    }

    #[test]
    fn typing_resets_selection() {
        let items = sample_catalog();
        let mut session = SearchSession::new(&items, MAX_RESULTS);
        session.select_next(&items);
        session.select_next(&items);
        session.set_query(&items, "f");
        assert_eq!(session.selected_index(), 0);
    }

    #[test]
    fn empty_results_keep_index_at_zero_and_select_nothing() {
        let items = sample_catalog();
        let mut session = SearchSession::new(&items, MAX_RESULTS);
        session.set_query(&items, "zzz");
        session.select_next(&items);
        session.select_previous(&items);
        assert_eq!(session.selected_index(), 0);
        assert!(session.selected(&items).is_none());
    }

    #[test]
    fn hover_selects_rendered_rows_only() {
        let items = sample_catalog();
        let mut session = SearchSession::new(&items, MAX_RESULTS);
        assert!(session.hover(7));
        assert_eq!(session.selected(&items).map(|i| i.title.as_str()), Some("groupBy"));
        assert!(!session.hover(10));
        assert_eq!(session.selected_index(), 7);
    }

    #[test]
    fn selection_stays_in_bounds_after_mixed_input() {
        let items = sample_catalog();
        let mut session = SearchSession::new(&items, MAX_RESULTS);
        let script: &[&str] = &["down", "down", "down", "q:p", "down", "down", "down", "up", "q:pi", "down", "q:", "up"];
        for step in script {
            match *step {
                "down" => session.select_next(&items),
                "up" => session.select_previous(&items),
                query => session.set_query(&items, query.trim_start_matches("q:")),
            }
            let bound = session.results().len().max(1);
            assert!(session.selected_index() < bound, "after {step}");
        }
    }
}
