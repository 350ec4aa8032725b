//! Shell consumers: events in, store writes and navigations out.
//!
//! # Architecture
//!
//! ```text
//! User Input → Event → handle_event → Actions → Store / Router
//!                           ↑                        ↓
//!                      SearchModal          subscriber → PageViewModel
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Effects emitted by the event handler
//! - [`handler`]: Event processing
//! - [`shell`]: [`Shell`], which owns the store, router and overlay and renders
//!   on every store write
//! - [`pages`]: Plain-text route table built from the catalog

pub mod actions;
pub mod handler;
pub mod pages;
pub mod shell;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use pages::build_route_table;
pub use shell::{Shell, ShellSettings};
