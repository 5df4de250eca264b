//! Deferred work that must wait for the next layout pass.
//!
//! Focusing a row depends on the viewport height, which is only known after
//! the host lays out its surfaces. Lists enqueue tasks here; the host loop
//! drains the queue once per tick between layout and draw.

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::model::error::ListError;

/// A task run against the host context `C` after layout.
pub type AfterLayoutTask<C> = Box<dyn FnOnce(&mut C) -> Result<(), ListError>>;

/// FIFO queue of after-layout tasks.
///
/// Tasks run exactly once. There is no cancellation.
pub struct AfterLayout<C> {
    tasks: VecDeque<AfterLayoutTask<C>>,
}

impl<C> Default for AfterLayout<C> {
    fn default() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }
}

impl<C> fmt::Debug for AfterLayout<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AfterLayout")
            .field("pending", &self.tasks.len())
            .finish()
    }
}

impl<C> AfterLayout<C> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` for the next drain.
    pub fn push<F>(&mut self, task: F)
    where
        F: FnOnce(&mut C) -> Result<(), ListError> + 'static,
    {
        self.tasks.push_back(Box::new(task));
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks are pending.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run pending tasks in FIFO order.
    ///
    /// The first error stops the drain and is returned; tasks after it stay
    /// queued for the next drain.
    pub fn run(&mut self, ctx: &mut C) -> Result<(), ListError> {
        let mut ran = 0usize;
        while let Some(task) = self.tasks.pop_front() {
            ran += 1;
            task(ctx)?;
        }
        if ran > 0 {
            debug!(ran, "Drained after-layout queue");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_run_in_fifo_order() {
        let mut queue: AfterLayout<Vec<u32>> = AfterLayout::new();
        queue.push(|log| {
            log.push(1);
            Ok(())
        });
        queue.push(|log| {
            log.push(2);
            Ok(())
        });

        let mut log = Vec::new();
        queue.run(&mut log).expect("drain should succeed");
        assert_eq!(log, vec![1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn tasks_run_once() {
        let mut queue: AfterLayout<u32> = AfterLayout::new();
        queue.push(|count| {
            *count += 1;
            Ok(())
        });

        let mut count = 0;
        queue.run(&mut count).expect("first drain");
        queue.run(&mut count).expect("second drain");
        assert_eq!(count, 1);
    }

    #[test]
    fn error_stops_drain_and_keeps_remaining_tasks() {
        let mut queue: AfterLayout<Vec<u32>> = AfterLayout::new();
        queue.push(|_| Err(ListError::IndexOutOfRange { index: 1, len: 0 }));
        queue.push(|log| {
            log.push(2);
            Ok(())
        });

        let mut log = Vec::new();
        let result = queue.run(&mut log);
        assert!(matches!(result, Err(ListError::IndexOutOfRange { .. })));
        assert!(log.is_empty());
        assert_eq!(queue.len(), 1);

        queue.run(&mut log).expect("remaining task runs next drain");
        assert_eq!(log, vec![2]);
    }

    #[test]
    fn empty_drain_is_ok() {
        let mut queue: AfterLayout<()> = AfterLayout::new();
        assert!(queue.run(&mut ()).is_ok());
    }
}
