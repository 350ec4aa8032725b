//! Deferred work on the UI thread.
//!
//! Everything in the shell runs synchronously inside one event handler except
//! focusing the search input, which has to wait until the overlay has been
//! rendered. [`TaskQueue`] models the event loop's task queue and [`FocusSlot`]
//! the input that the deferred focus looks for.

pub mod focus;
pub mod queue;

pub use focus::{FocusSlot, InputElement};
pub use queue::TaskQueue;
