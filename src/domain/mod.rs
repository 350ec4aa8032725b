//! Domain layer: error types, catalog entries, and languages.
//!
//! These types are independent of the store, router, and rendering layers.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Searchable catalog entries and catalog loading
//! - [`language`]: Content language and route prefix handling

pub mod error;
pub mod item;
pub mod language;

pub use error::{DocsError, Result};
pub use item::{load_catalog, sample_catalog, SearchableItem};
pub use language::{toggle_language_route, Language};
