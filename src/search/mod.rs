//! Command-palette style search over the page catalog.
//!
//! # Modules
//!
//! - [`filter`]: substring filtering capped at [`MAX_RESULTS`], plus highlight ranges
//! - [`session`]: query, selection, and results of one open overlay
//! - [`modal`]: the Closed/Open state machine and its events and actions
//!
//! # Example
//!
//! ```rust
//! use docshell::search::{Key, SearchAction, SearchEvent, SearchModal, MAX_RESULTS};
//! use docshell::domain::sample_catalog;
//!
//! let mut modal = SearchModal::new(sample_catalog().into(), MAX_RESULTS);
//! modal.open();
//! modal.handle(&SearchEvent::Input("pipe".into()));
//! let outcome = modal.handle(&SearchEvent::Key(Key::Enter));
//! assert_eq!(outcome.actions[0], SearchAction::Navigate("/composition/pipe".into()));
//! ```

pub mod filter;
pub mod modal;
pub mod session;

pub use filter::{filter_results, match_ranges, MAX_RESULTS};
pub use modal::{Key, KeyOutcome, ModalState, SearchAction, SearchEvent, SearchModal};
pub use session::SearchSession;
