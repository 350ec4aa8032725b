//! Text rendering of the shell.
//!
//! ```text
//! Store + Router + SearchModal → Shell::render → PageViewModel → render_page → ANSI text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing one rendered page
//! - [`renderer`]: top-level frame renderer
//! - [`components`]: header, sidebar, search overlay, empty state, footer
//! - [`helpers`]: shared rendering utilities (highlighting, centering)
//! - [`theme`]: color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render_page;
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, PageViewModel, ResultRow, SearchOverlayInfo, SidebarInfo,
    SidebarLink, SidebarSection,
};
