//! Text pages for the catalog.
//!
//! Stands in for the site's content components: every catalog entry gets an
//! English page at its path and a Korean page under `/ko`, and both languages
//! get a home page.

use crate::domain::{Language, SearchableItem};
use crate::router::{RouteTable, ViewComponent};

/// Builds the route table for `catalog` with plain-text views.
///
/// # Example
///
/// ```rust
/// use docshell::app::build_route_table;
/// use docshell::domain::sample_catalog;
///
/// let table = build_route_table(&sample_catalog());
/// assert_eq!(table.lookup("/ko/array/map/").name(), "map (ko)");
/// assert_eq!(table.lookup("/no/such/page").name(), "home");
/// ```
#[must_use]
pub fn build_route_table(catalog: &[SearchableItem]) -> RouteTable<String> {
    let count = catalog.len();
    let mut builder = RouteTable::builder(ViewComponent::new("home", move || {
        home_text(Language::En, count)
    }))
    .route(
        "/ko",
        ViewComponent::new("home (ko)", move || home_text(Language::Ko, count)),
    );

    for item in catalog {
        let en = item.clone();
        builder = builder.route(
            &item.path,
            ViewComponent::new(item.title.clone(), move || page_text(&en, Language::En)),
        );

        let ko = item.clone();
        builder = builder.route(
            &format!("/ko{}", item.path),
            ViewComponent::new(format!("{} (ko)", item.title), move || {
                page_text(&ko, Language::Ko)
            }),
        );
    }

    builder.build()
}

fn home_text(language: Language, count: usize) -> String {
    match language {
        Language::En => format!("Welcome. {count} functions documented. Press / to search."),
        Language::Ko => format!("환영합니다. {count}개의 함수 문서가 있습니다. / 를 눌러 검색하세요."),
    }
}

fn page_text(item: &SearchableItem, language: Language) -> String {
    match language {
        Language::En => format!("{}\n  Category: {}\n  Path: {}", item.title, item.category, item.path),
        Language::Ko => format!("{}\n  분류: {}\n  경로: /ko{}", item.title, item.category, item.path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_catalog;

    #[test]
    fn every_entry_has_both_languages() {
        let catalog = sample_catalog();
        let table = build_route_table(&catalog);

        assert_eq!(table.len(), catalog.len() * 2 + 1);
        for item in &catalog {
            assert!(table.contains(&item.path));
            assert!(table.contains(&format!("/ko{}", item.path)));
        }
    }

    #[test]
    fn pages_render_their_entry() {
        let table = build_route_table(&sample_catalog());
        let text = table.lookup("/composition/pipe").render();
        assert!(text.starts_with("pipe"));
        assert!(text.contains("Composition"));
        assert!(table.lookup("/ko").render().contains("환영합니다"));
    }
}
