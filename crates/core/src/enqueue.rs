//! Task that moves another task into the queue.

use crate::describe::Describable;
use crate::lifetime::Tracked;
use crate::queue::{QueueHandle, TaskQueue};
use crate::task::{Result, TaskError, WorkItem};
use tracing::debug;

/// Holds one task and transfers it to the back of the queue when executed.
///
/// Single use: the held task is gone after the first execution and a second
/// call fails with [`TaskError::InvalidState`].
#[derive(Debug)]
pub struct EnqueueTask {
    queue: QueueHandle,
    task: Option<Box<dyn WorkItem>>,
    task_info: String,
    _tracked: Tracked,
}

impl EnqueueTask {
    /// Create a new task holding `task`.
    ///
    /// The held task's description is captured now and never refreshed.
    pub fn new(queue: &TaskQueue, task: Option<Box<dyn WorkItem>>) -> Result<Self> {
        let task = task.ok_or_else(|| {
            TaskError::InvalidArgument("empty task given to EnqueueTask".to_string())
        })?;
        let task_info = task.describe();
        Ok(Self {
            queue: queue.handle(),
            task: Some(task),
            task_info,
            _tracked: Tracked::new(),
        })
    }

    /// Whether the held task has already been transferred.
    pub fn is_spent(&self) -> bool {
        self.task.is_none()
    }
}

impl WorkItem for EnqueueTask {
    fn execute(&mut self) -> Result<()> {
        if self.task.is_none() {
            return Err(TaskError::InvalidState("EnqueueTask already executed".to_string()));
        }
        // keep the held task if there is nowhere to put it
        self.queue.ensure_attached()?;

        debug!("Enqueueing task [{}]", self.task_info);
        match self.task.take() {
            Some(task) => self.queue.push(task),
            None => Ok(()),
        }
    }

    fn is_result_producing(&self) -> bool {
        false
    }
}

impl Describable for EnqueueTask {
    fn describe(&self) -> String {
        format!("EnqueueTask adds task [{}]", self.task_info)
    }
}
