//! The shared task container.
//!
//! A [`TaskQueue`] owns its work items. Items that read or mutate the queue
//! hold a [`QueueHandle`], a weak back reference that never keeps the queue
//! alive. The queue must outlive every item that references it; a handle
//! whose queue is gone reports [`TaskError::InvalidState`].

use crate::task::{Result, TaskError, WorkItem};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

type Items = RefCell<Vec<Box<dyn WorkItem>>>;

/// Ordered sequence of owned work items.
///
/// Items are popped from the back, so the most recently pushed item runs
/// first. An item must be popped before it is executed.
pub struct TaskQueue {
    items: Rc<Items>,
}

impl TaskQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Append an item to the back.
    pub fn push<T: WorkItem + 'static>(&self, item: T) {
        self.push_boxed(Box::new(item));
    }

    /// Append an already boxed item to the back.
    pub fn push_boxed(&self, item: Box<dyn WorkItem>) {
        self.items.borrow_mut().push(item);
    }

    /// Remove the most recently pushed item.
    pub fn pop(&self) -> Option<Box<dyn WorkItem>> {
        self.items.borrow_mut().pop()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Drop every queued item, returning how many were removed.
    pub fn clear(&self) -> usize {
        clear_items(&self.items)
    }

    /// Descriptions of the queued items, front to back.
    pub fn describe_all(&self) -> Vec<String> {
        self.items.borrow().iter().map(|item| item.describe()).collect()
    }

    /// Get a non-owning reference to this queue.
    pub fn handle(&self) -> QueueHandle {
        QueueHandle {
            items: Rc::downgrade(&self.items),
        }
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue").field("len", &self.len()).finish()
    }
}

/// Weak back reference from a work item to the queue it operates on.
#[derive(Clone)]
pub struct QueueHandle {
    items: Weak<Items>,
}

impl QueueHandle {
    fn upgrade(&self) -> Result<Rc<Items>> {
        self.items
            .upgrade()
            .ok_or_else(|| TaskError::InvalidState("task queue no longer exists".to_string()))
    }

    /// Number of items currently in the queue.
    pub fn len(&self) -> Result<usize> {
        Ok(self.upgrade()?.borrow().len())
    }

    /// Whether the queue is currently empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Count the queued items that produce a result.
    pub fn count_result_producing(&self) -> Result<usize> {
        let items = self.upgrade()?;
        let count = items
            .borrow()
            .iter()
            .filter(|item| item.is_result_producing())
            .count();
        Ok(count)
    }

    /// Append an item to the back of the queue.
    pub fn push(&self, item: Box<dyn WorkItem>) -> Result<()> {
        let items = self.upgrade()?;
        items.borrow_mut().push(item);
        debug!("Pushed task, queue length {}", items.borrow().len());
        Ok(())
    }

    /// Drop every queued item, returning how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let items = self.upgrade()?;
        Ok(clear_items(&items))
    }

    /// Fail with [`TaskError::InvalidState`] when the queue is gone.
    pub fn ensure_attached(&self) -> Result<()> {
        self.upgrade().map(|_| ())
    }
}

impl fmt::Debug for QueueHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueHandle")
            .field("attached", &(self.items.strong_count() > 0))
            .finish()
    }
}

// Items are dropped after the borrow is released.
fn clear_items(items: &Items) -> usize {
    let removed = std::mem::take(&mut *items.borrow_mut());
    let count = removed.len();
    drop(removed);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClearContainerTask, CountLiveObjectsTask};

    #[test]
    fn test_push_pop_is_lifo() {
        let queue = TaskQueue::new();
        queue.push(CountLiveObjectsTask::new());
        queue.push(ClearContainerTask::new(&queue));
        assert_eq!(queue.len(), 2);

        let last = queue.pop().unwrap();
        assert!(!last.is_result_producing());
        let first = queue.pop().unwrap();
        assert!(first.is_result_producing());
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_handle_sees_queue_mutations() {
        let queue = TaskQueue::new();
        let handle = queue.handle();
        assert_eq!(handle.len().unwrap(), 0);

        handle.push(Box::new(CountLiveObjectsTask::new())).unwrap();
        handle.push(Box::new(ClearContainerTask::new(&queue))).unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(handle.count_result_producing().unwrap(), 1);

        handle.ensure_attached().unwrap();
        assert_eq!(handle.clear().unwrap(), 2);
        assert!(queue.is_empty());
        assert!(handle.is_empty().unwrap());
    }

    #[test]
    fn test_handle_does_not_keep_queue_alive() {
        let queue = TaskQueue::new();
        let handle = queue.handle();
        drop(queue);

        assert!(matches!(handle.len(), Err(TaskError::InvalidState(_))));
        assert!(matches!(handle.clear(), Err(TaskError::InvalidState(_))));
        assert!(matches!(handle.ensure_attached(), Err(TaskError::InvalidState(_))));
        assert!(matches!(
            handle.push(Box::new(CountLiveObjectsTask::new())),
            Err(TaskError::InvalidState(_))
        ));
    }

    #[test]
    fn test_describe_all() {
        let queue = TaskQueue::new();
        queue.push(CountLiveObjectsTask::new());
        queue.push(ClearContainerTask::new(&queue));
        assert_eq!(
            queue.describe_all(),
            vec![
                "CountLiveObjectsTask wasn't running yet.".to_string(),
                "ClearContainerTask".to_string(),
            ]
        );
    }
}
