//! Candidate filtering and match highlighting.

use crate::domain::SearchableItem;

/// Default cap on the number of results shown by the overlay.
pub const MAX_RESULTS: usize = 10;

/// Filters the catalog for `query` and returns indices into `candidates`.
///
/// - A query that is empty after trimming browses: the first `cap` entries, in
///   order.
/// - Otherwise an entry matches when its lower-cased title or category contains
///   the lower-cased query as a substring. Matches keep catalog order and stop
///   at `cap`.
///
/// Only the emptiness check trims; the substring test uses the query as typed.
///
/// # Examples
///
/// ```
/// use docshell::search::filter_results;
/// use docshell::SearchableItem;
///
/// let items = vec![
///     SearchableItem::new("map", "Array", "/array/map"),
///     SearchableItem::new("pick", "Object", "/object/pick"),
///     SearchableItem::new("mapValues", "Object", "/object/map-values"),
/// ];
/// assert_eq!(filter_results(&items, "MAP", 10), vec![0, 2]);
/// assert_eq!(filter_results(&items, "object", 10), vec![1, 2]);
/// assert_eq!(filter_results(&items, "  ", 2), vec![0, 1]);
/// ```
#[must_use]
pub fn filter_results(candidates: &[SearchableItem], query: &str, cap: usize) -> Vec<usize> {
    let _span = tracing::debug_span!(
        "filter_results",
        candidates = candidates.len(),
        query_len = query.len()
    )
    .entered();

    if query.trim().is_empty() {
        return (0..candidates.len().min(cap)).collect();
    }

    let needle = query.to_lowercase();
    let results: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            item.title.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .map(|(index, _)| index)
        .take(cap)
        .collect();

    tracing::trace!(matched = results.len(), "search filter applied");
    results
}

/// Character ranges of every non-overlapping, case-insensitive occurrence of
/// the trimmed `query` in `text`, as `(start, end)` with exclusive `end`.
///
/// Used for highlighting only. Case folding is per character, so a few
/// characters whose lower-case form is longer than one character may not be
/// highlighted even though they matched.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let haystack: Vec<char> = text.chars().map(fold_char).collect();
    let needle: Vec<char> = query.chars().map(fold_char).collect();
    if needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_catalog;

    fn titles(items: &[SearchableItem], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| items[i].title.clone()).collect()
    }

    #[test]
    fn empty_query_browses_first_ten() {
        let items = sample_catalog();
        assert_eq!(filter_results(&items, "", MAX_RESULTS), (0..10).collect::<Vec<_>>());
        assert_eq!(filter_results(&items, " \t", MAX_RESULTS).len(), 10);
    }

    #[test]
    fn matches_title_or_category_in_catalog_order() {
        let items = sample_catalog();
        assert_eq!(
            titles(&items, &filter_results(&items, "map", MAX_RESULTS)),
            vec!["map", "flatMap", "mapValues"]
        );
        assert_eq!(
            titles(&items, &filter_results(&items, "COMPOSITION", MAX_RESULTS)),
            vec!["pipe", "compose"]
        );
    }

    #[test]
    fn every_result_contains_the_query() {
        let items = sample_catalog();
        for query in ["a", "ar", "Func", "o", "zz", "e"] {
            let found = filter_results(&items, query, MAX_RESULTS);
            assert!(found.len() <= MAX_RESULTS);
            assert!(found.windows(2).all(|w| w[0] < w[1]), "order kept for {query}");
            let needle = query.to_lowercase();
            for &i in &found {
                let item = &items[i];
                assert!(
                    item.title.to_lowercase().contains(&needle)
                        || item.category.to_lowercase().contains(&needle),
                    "{} does not contain {query}",
                    item.title
                );
            }
        }
    }

    #[test]
    fn cap_applies_to_matches() {
        let items = sample_catalog();
        let arrays = filter_results(&items, "array", 3);
        assert_eq!(titles(&items, &arrays), vec!["map", "filter", "reduce"]);
    }

    #[test]
    fn no_fuzzy_matching() {
        let items = sample_catalog();
        assert!(filter_results(&items, "mpa", MAX_RESULTS).is_empty());
    }

    #[test]
    fn query_is_not_trimmed_for_matching() {
        let items = sample_catalog();
        assert!(filter_results(&items, "map ", MAX_RESULTS).is_empty());
    }

    #[test]
    fn highlight_ranges_cover_each_occurrence() {
        assert_eq!(match_ranges("flatMap", "map"), vec![(4, 7)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(match_ranges("map", ""), Vec::<(usize, usize)>::new());
        assert_eq!(match_ranges("flat map", " map "), vec![(5, 8)]);
        assert_eq!(match_ranges("ab", "abc"), Vec::<(usize, usize)>::new());
        assert_eq!(match_ranges("배열 map", "MAP"), vec![(3, 6)]);
    }
}
