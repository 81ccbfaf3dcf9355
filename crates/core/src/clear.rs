//! Task that empties the queue.

use crate::describe::Describable;
use crate::lifetime::Tracked;
use crate::queue::{QueueHandle, TaskQueue};
use crate::task::{Result, WorkItem};
use tracing::warn;

/// Drops every item currently in the queue.
///
/// Items still waiting to run are dropped as well and never execute.
#[derive(Debug)]
pub struct ClearContainerTask {
    queue: QueueHandle,
    _tracked: Tracked,
}

impl ClearContainerTask {
    /// Create a new task.
    pub fn new(queue: &TaskQueue) -> Self {
        Self {
            queue: queue.handle(),
            _tracked: Tracked::new(),
        }
    }
}

impl WorkItem for ClearContainerTask {
    fn execute(&mut self) -> Result<()> {
        let removed = self.queue.clear()?;
        if removed > 0 {
            warn!("Cleared {} pending task(s) before they ran", removed);
        }
        Ok(())
    }

    fn is_result_producing(&self) -> bool {
        false
    }
}

impl Describable for ClearContainerTask {
    fn describe(&self) -> String {
        "ClearContainerTask".to_string()
    }
}
