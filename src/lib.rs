//! docshell: the interactive core of a static documentation site.
//!
//! The site itself is inert content. What this crate implements is the small
//! amount of state and control flow around it:
//! - An observable application-state store with subscriber-driven re-rendering
//! - A client-side path router with trailing-slash normalisation and a home
//!   fallback for unknown paths
//! - A command-palette search overlay with incremental substring filtering,
//!   keyboard/mouse selection and deferred input focus
//! - English/Korean page variants selected by a `/ko` route prefix
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Interactive driver (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Shell Layer (app/)                                 │  ← Intents
//! │  - Event handling                                   │
//! │  - Action execution                                 │
//! │  - Page composition on store writes                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Store         │   │ Router        │   │ Search        │
//! │ (store/)      │   │ (router/)     │   │ (search/)     │
//! │ - AppState    │   │ - Normalise   │   │ - Filtering   │
//! │ - Subscribers │   │ - Route table │   │ - Selection   │
//! │               │   │ - History     │   │ - Modal FSM   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Scheduler                                 │
//! │  - Error types, catalog entries, language (domain/) │
//! │  - Macrotask queue, focus slot (scheduler/)         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI (ui/) and Observability (observability/)        │
//! │  - View models, themes, ANSI text frames            │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Shell, events, actions
//! - [`domain`]: Core types (`SearchableItem`, `Language`, errors)
//! - [`store`]: Observable state
//! - [`router`]: Path resolution and navigation
//! - [`search`]: Search overlay state machine
//! - [`scheduler`]: Deferred tasks and focus
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! Either `key=value` pairs (see [`Config::from_map`]) or a TOML file:
//!
//! ```toml
//! language = "ko"
//! start_route = "/array/map"
//! catalog = "catalog.json"
//! theme = "catppuccin-latte"
//! trace_level = "debug"
//! log_file = "/tmp/docshell.log"
//! max_results = 10
//! title = "fx docs"
//! ```
//!
//! # Example
//!
//! ```rust
//! use docshell::{initialize, Config, Event};
//! use docshell::search::{Key, SearchEvent};
//!
//! let mut shell = initialize(&Config::default())?;
//!
//! shell.dispatch(&Event::OpenSearch)?;
//! shell.dispatch(&Event::Search(SearchEvent::Input("map".into())))?;
//! shell.dispatch(&Event::Search(SearchEvent::Key(Key::ArrowDown)))?;
//! shell.dispatch(&Event::Search(SearchEvent::Key(Key::Enter)))?;
//!
//! assert!(!shell.store().search_open());
//! # Ok::<(), docshell::DocsError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod observability;
pub mod router;
pub mod scheduler;
pub mod search;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, Event, Shell, ShellSettings};
pub use domain::{DocsError, Language, Result, SearchableItem};
pub use store::{AppState, Store};
pub use ui::Theme;

use domain::{load_catalog, sample_catalog, toggle_language_route};
use router::MemoryHistory;
use search::MAX_RESULTS;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// Built from `key=value` pairs with [`Config::from_map`] or from a TOML file
/// with [`Config::from_file`]. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language to start in. A `ko` setting moves `start_route` under `/ko`.
    /// Default: `en`
    pub language: Language,

    /// Route the page opens at. Default: `/`
    pub start_route: String,

    /// JSON search catalog. Default: the built-in sample catalog.
    pub catalog: Option<PathBuf>,

    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Log level: `trace`, `debug`, `info`, `warn`, `error` or an `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log to this file instead of stderr.
    pub log_file: Option<PathBuf>,

    /// Cap on search results. Default: 10
    pub max_results: usize,

    /// Site title shown in the header. Default: `docshell`
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::En,
            start_route: "/".to_string(),
            catalog: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            log_file: None,
            max_results: MAX_RESULTS,
            title: "docshell".to_string(),
        }
    }
}

impl Config {
    /// Keys accepted by [`Config::apply_map`].
    pub const KEYS: &'static [&'static str] = &[
        "language",
        "start_route",
        "catalog",
        "theme",
        "theme_file",
        "trace_level",
        "log_file",
        "max_results",
        "title",
    ];

    /// Parses configuration from string key/value pairs.
    ///
    /// # Parsing Rules
    ///
    /// - `language`: `en`/`ko`, case-insensitive
    /// - `max_results`: positive integer
    /// - `catalog`, `log_file`: paths
    /// - `start_route`, `theme`, `theme_file`, `trace_level`, `title`: strings
    ///
    /// Unknown keys and unparsable values are ignored and the default kept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use docshell::{Config, Language};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("language".to_string(), "ko".to_string());
    /// map.insert("max_results".to_string(), "five".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.language, Language::Ko);
    /// assert_eq!(config.max_results, 10);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().apply_map(map)
    }

    /// Overrides fields with the values present in `map`.
    #[must_use]
    pub fn apply_map(mut self, map: &BTreeMap<String, String>) -> Self {
        for (key, value) in map {
            let value = value.trim();
            match key.as_str() {
                "language" => match Language::from_code(value) {
                    Some(language) => self.language = language,
                    None => tracing::debug!(value, "unknown language, keeping default"),
                },
                "start_route" => self.start_route = value.to_string(),
                "catalog" => self.catalog = Some(PathBuf::from(value)),
                "theme" => self.theme_name = Some(value.to_string()),
                "theme_file" => self.theme_file = Some(value.to_string()),
                "trace_level" => self.trace_level = Some(value.to_string()),
                "log_file" => self.log_file = Some(PathBuf::from(value)),
                "max_results" => match value.parse::<usize>() {
                    Ok(n) if n > 0 => self.max_results = n,
                    _ => tracing::debug!(value, "invalid max_results, keeping default"),
                },
                "title" => self.title = value.to_string(),
                _ => tracing::debug!(key = %key, "unknown config key ignored"),
            }
        }
        self
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`DocsError::Io`] if the file cannot be read
    /// - [`DocsError::TomlParse`] on malformed TOML or unknown keys
    /// - [`DocsError::Config`] if `max_results` is zero
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        if config.max_results == 0 {
            return Err(DocsError::Config(format!(
                "{}: max_results must be at least 1",
                path.display()
            )));
        }
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// The route the page opens at, moved under `/ko` when `language` asks
    /// for Korean and the route is not already Korean.
    #[must_use]
    pub fn initial_route(&self) -> String {
        if self.language == Language::Ko && Language::from_route(&self.start_route) == Language::En {
            toggle_language_route(&self.start_route)
        } else {
            self.start_route.clone()
        }
    }
}

/// Builds a ready-to-use shell from `config`.
///
/// Loads the catalog (or the built-in sample), builds a text page for every
/// catalog entry in both languages, and opens the store at
/// [`Config::initial_route`]. Tracing is not initialised here; see
/// [`observability::init_tracing`].
///
/// # Errors
///
/// Returns catalog loading errors.
///
/// # Example
///
/// ```rust
/// use docshell::{initialize, Config, Language};
///
/// let config = Config {
///     language: Language::Ko,
///     start_route: "/array/map".to_string(),
///     ..Default::default()
/// };
///
/// let shell = initialize(&config)?;
/// assert_eq!(shell.store().route(), "/ko/array/map");
/// assert_eq!(shell.store().language(), Language::Ko);
/// # Ok::<(), docshell::DocsError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Shell<String>> {
    tracing::debug!("initializing docshell");

    let catalog = match &config.catalog {
        Some(path) => load_catalog(path)?,
        None => sample_catalog(),
    };
    let table = app::build_route_table(&catalog);
    let route = config.initial_route();

    Ok(Shell::new(
        Store::new(AppState::at_route(route.clone())),
        table,
        MemoryHistory::starting_at(route),
        catalog,
        ShellSettings {
            title: config.title.clone(),
            max_results: config.max_results,
        },
    ))
}

/// Resolves the configured theme, falling back to the default.
///
/// `theme_file` wins over `theme_name`. Load failures are logged, not
/// returned.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn map_overrides_defaults() {
        let config = Config::from_map(&map(&[
            ("start_route", "/array/map"),
            ("theme", "catppuccin-latte"),
            ("max_results", "3"),
            ("title", "fx"),
        ]));
        assert_eq!(config.start_route, "/array/map");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.max_results, 3);
        assert_eq!(config.title, "fx");
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = Config::from_map(&map(&[("language", "fr"), ("max_results", "0"), ("color", "x")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn korean_language_moves_the_start_route() {
        let mut config = Config::from_map(&map(&[("language", "ko")]));
        assert_eq!(config.initial_route(), "/ko");
        config.start_route = "/ko/object/pick".to_string();
        assert_eq!(config.initial_route(), "/ko/object/pick");
    }

    #[test]
    fn unknown_theme_falls_back() {
        let config = Config::from_map(&map(&[("theme", "solarized")]));
        assert_eq!(load_theme(&config).name, Theme::default().name);
    }
}
