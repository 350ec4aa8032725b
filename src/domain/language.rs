//! Content language and its encoding in the route prefix.
//!
//! Korean pages live under `/ko`; everything else is English. The raw route is
//! inspected before normalisation because the prefix is what matters here.

use serde::{Deserialize, Serialize};
use std::fmt;

const KO_PREFIX: &str = "/ko";

/// Display language of the documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
}

impl Language {
    /// Short language code (`"en"` or `"ko"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
        }
    }

    /// Parses a language code, case-insensitively.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ko" => Some(Self::Ko),
            _ => None,
        }
    }

    /// Derives the language from a raw (non-normalised) route.
    ///
    /// # Examples
    ///
    /// ```
    /// use docshell::Language;
    ///
    /// assert_eq!(Language::from_route("/ko/array/map"), Language::Ko);
    /// assert_eq!(Language::from_route("/ko"), Language::Ko);
    /// assert_eq!(Language::from_route("/kotlin"), Language::En);
    /// ```
    #[must_use]
    pub fn from_route(route: &str) -> Self {
        if strip_ko_prefix(route).is_some() {
            Self::Ko
        } else {
            Self::En
        }
    }

    /// The other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ko,
            Self::Ko => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returns the remainder of `route` after a `/ko` segment, if it has one.
fn strip_ko_prefix(route: &str) -> Option<&str> {
    let rest = route.strip_prefix(KO_PREFIX)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

/// Maps a raw route to its counterpart in the other language.
///
/// `/ko/x` becomes `/x`, `/ko` becomes `/`, and any other route gains the
/// `/ko` prefix (`/` becomes `/ko`).
///
/// # Examples
///
/// ```
/// use docshell::domain::toggle_language_route;
///
/// assert_eq!(toggle_language_route("/array/map"), "/ko/array/map");
/// assert_eq!(toggle_language_route("/ko/array/map"), "/array/map");
/// assert_eq!(toggle_language_route("/"), "/ko");
/// assert_eq!(toggle_language_route("/ko"), "/");
/// ```
#[must_use]
pub fn toggle_language_route(route: &str) -> String {
    match strip_ko_prefix(route) {
        Some("") => "/".to_string(),
        Some(rest) => rest.to_string(),
        None if route.is_empty() || route == "/" => KO_PREFIX.to_string(),
        None if route.starts_with('/') => format!("{KO_PREFIX}{route}"),
        None => format!("{KO_PREFIX}/{route}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        assert_eq!(Language::from_code("KO"), Some(Language::Ko));
        assert_eq!(Language::from_code(Language::En.code()), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn ko_prefix_must_be_a_whole_segment() {
        assert_eq!(Language::from_route("/kotlin/intro"), Language::En);
        assert_eq!(Language::from_route("/ko/"), Language::Ko);
    }

    #[test]
    fn toggling_twice_restores_prefixed_routes() {
        for route in ["/array/map", "/ko/array/map", "/ko", "/"] {
            let twice = toggle_language_route(&toggle_language_route(route));
            assert_eq!(twice, route, "round trip of {route}");
        }
    }

    #[test]
    fn trailing_slash_after_ko_is_kept_raw() {
        assert_eq!(toggle_language_route("/ko/"), "/");
        assert_eq!(toggle_language_route("relative"), "/ko/relative");
    }
}
