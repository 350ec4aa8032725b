//! The search input as a focus target that may come and go.

use super::queue::TaskQueue;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// The mounted search input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputElement {
    focused: bool,
}

impl InputElement {
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }
}

/// Slot the overlay's input is mounted into while the overlay is rendered.
///
/// Cloning shares the slot.
#[derive(Debug, Clone, Default)]
pub struct FocusSlot {
    input: Rc<RefCell<Option<InputElement>>>,
}

impl FocusSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a fresh input unless one is already mounted.
    pub fn mount(&self) {
        let mut slot = self.input.borrow_mut();
        if slot.is_none() {
            *slot = Some(InputElement::default());
        }
    }

    pub fn unmount(&self) {
        self.input.borrow_mut().take();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.input.borrow().is_some()
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.input
            .borrow()
            .as_ref()
            .is_some_and(InputElement::is_focused)
    }

    /// Schedules focusing the input on a later turn of `queue`.
    ///
    /// The input usually does not exist yet when this is called; it is mounted
    /// by the render that follows. When the task runs it focuses whatever input
    /// is mounted then, and does nothing if the slot is empty or gone.
    pub fn focus_later(&self, queue: &TaskQueue) {
        let target: Weak<RefCell<Option<InputElement>>> = Rc::downgrade(&self.input);
        queue.schedule(move || {
            let Some(slot) = target.upgrade() else {
                tracing::debug!("focus target dropped before deferred focus ran");
                return;
            };
            let mut mounted = slot.borrow_mut();
            match mounted.as_mut() {
                Some(input) => {
                    input.focus();
                    tracing::trace!("search input focused");
                }
                None => tracing::debug!("search input unmounted before deferred focus ran"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_runs_on_a_later_turn() {
        let queue = TaskQueue::new();
        let slot = FocusSlot::new();

        slot.focus_later(&queue);
        slot.mount();
        assert!(!slot.is_focused());

        queue.run_pending();
        assert!(slot.is_focused());
    }

    #[test]
    fn stale_focus_is_tolerated() {
        let queue = TaskQueue::new();
        let slot = FocusSlot::new();
        slot.mount();
        slot.focus_later(&queue);
        slot.unmount();

        assert_eq!(queue.run_pending(), 1);
        assert!(!slot.is_mounted());
    }

    #[test]
    fn dropped_slot_is_tolerated() {
        let queue = TaskQueue::new();
        {
            let slot = FocusSlot::new();
            slot.focus_later(&queue);
        }
        assert_eq!(queue.run_pending(), 1);
    }

    #[test]
    fn remounting_keeps_focus_of_existing_input() {
        let slot = FocusSlot::new();
        slot.mount();
        let queue = TaskQueue::new();
        slot.focus_later(&queue);
        queue.run_pending();
        slot.mount();
        assert!(slot.is_focused());
    }
}
