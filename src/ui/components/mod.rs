//! Composable UI component renderers.
//!
//! Each component appends its part of the frame to a `String` buffer.
//!
//! # Components
//!
//! - `header`: title bar with route and language switch
//! - `sidebar`: catalog grouped by category
//! - `search`: search overlay (query box and result rows)
//! - `empty`: empty state message for a query with no results
//! - `footer`: keybinding hints

mod empty;
mod footer;
mod header;
mod search;
mod sidebar;

pub use empty::render_empty_state;
pub use footer::render_footer;
pub use header::render_header;
pub use search::render_search_overlay;
pub use sidebar::render_sidebar;
