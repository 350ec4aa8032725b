//! Single-threaded macrotask queue.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// FIFO queue of deferred callbacks, drained one turn at a time.
///
/// Cloning shares the queue. A turn ([`TaskQueue::run_pending`]) runs only the
/// tasks queued before it started; anything scheduled while the turn runs waits
/// for the next one.
#[derive(Clone, Default)]
pub struct TaskQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl TaskQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` for a later turn.
    pub fn schedule<F>(&self, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Runs one turn and returns how many tasks ran.
    pub fn run_pending(&self) -> usize {
        let turn = std::mem::take(&mut *self.tasks.borrow_mut());
        let ran = turn.len();
        for task in turn {
            task();
        }
        if ran > 0 {
            tracing::trace!(ran, queued = self.pending(), "task turn finished");
        }
        ran
    }
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn runs_in_fifo_order() {
        let queue = TaskQueue::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let log = Rc::clone(&log);
            queue.schedule(move || log.borrow_mut().push(n));
        }
        assert_eq!(queue.run_pending(), 3);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert_eq!(queue.run_pending(), 0);
    }

    #[test]
    fn tasks_scheduled_during_a_turn_wait_for_the_next() {
        let queue = TaskQueue::new();
        let inner_ran = Rc::new(Cell::new(false));

        let (handle, flag) = (queue.clone(), Rc::clone(&inner_ran));
        queue.schedule(move || {
            let flag = Rc::clone(&flag);
            handle.schedule(move || flag.set(true));
        });

        assert_eq!(queue.run_pending(), 1);
        assert!(!inner_ran.get());
        assert_eq!(queue.pending(), 1);
        queue.run_pending();
        assert!(inner_ran.get());
    }
}
