//! Counting tasks.
//!
//! Each one captures a count when executed and may be executed again to
//! refresh it.

use crate::describe::Describable;
use crate::lifetime::{self, Tracked};
use crate::queue::{QueueHandle, TaskQueue};
use crate::task::{describe_count, Result, WorkItem};

/// Captures the number of items in the queue.
#[derive(Debug)]
pub struct CountContainerSizeTask {
    queue: QueueHandle,
    result: Option<usize>,
    _tracked: Tracked,
}

impl CountContainerSizeTask {
    /// Create a new task.
    pub fn new(queue: &TaskQueue) -> Self {
        Self {
            queue: queue.handle(),
            result: None,
            _tracked: Tracked::new(),
        }
    }

    /// Count captured by the last execution.
    pub fn result(&self) -> Option<usize> {
        self.result
    }
}

impl WorkItem for CountContainerSizeTask {
    fn execute(&mut self) -> Result<()> {
        self.result = Some(self.queue.len()?);
        Ok(())
    }

    fn is_result_producing(&self) -> bool {
        true
    }
}

impl Describable for CountContainerSizeTask {
    fn describe(&self) -> String {
        describe_count("CountContainerSizeTask", self.result)
    }
}

/// Captures how many queued items produce a result.
///
/// The scan covers whatever occupies the queue at execution time.
#[derive(Debug)]
pub struct CountResultProducingTask {
    queue: QueueHandle,
    result: Option<usize>,
    _tracked: Tracked,
}

impl CountResultProducingTask {
    /// Create a new task.
    pub fn new(queue: &TaskQueue) -> Self {
        Self {
            queue: queue.handle(),
            result: None,
            _tracked: Tracked::new(),
        }
    }

    /// Count captured by the last execution.
    pub fn result(&self) -> Option<usize> {
        self.result
    }
}

impl WorkItem for CountResultProducingTask {
    fn execute(&mut self) -> Result<()> {
        self.result = Some(self.queue.count_result_producing()?);
        Ok(())
    }

    fn is_result_producing(&self) -> bool {
        true
    }
}

impl Describable for CountResultProducingTask {
    fn describe(&self) -> String {
        describe_count("CountResultProducingTask", self.result)
    }
}

/// Captures the process-wide lifetime counter.
#[derive(Debug, Default)]
pub struct CountLiveObjectsTask {
    result: Option<usize>,
    _tracked: Tracked,
}

impl CountLiveObjectsTask {
    /// Create a new task.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count captured by the last execution.
    pub fn result(&self) -> Option<usize> {
        self.result
    }
}

impl WorkItem for CountLiveObjectsTask {
    fn execute(&mut self) -> Result<()> {
        self.result = Some(lifetime::count());
        Ok(())
    }

    fn is_result_producing(&self) -> bool {
        true
    }
}

impl Describable for CountLiveObjectsTask {
    fn describe(&self) -> String {
        describe_count("CountLiveObjectsTask", self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BinaryOperationTask, ClearContainerTask, Named};

    fn plus() -> BinaryOperationTask {
        BinaryOperationTask::new(Named::new("Plus"), |a, b| a + b, 3.0, 7.0)
    }

    #[test]
    fn test_count_size_tracks_mutations() {
        let queue = TaskQueue::new();
        let mut task = CountContainerSizeTask::new(&queue);
        assert_eq!(task.describe(), "CountContainerSizeTask wasn't running yet.");

        task.execute().unwrap();
        assert_eq!(task.result(), Some(0));
        assert_eq!(task.describe(), "CountContainerSizeTask result = 0");

        queue.push(plus());
        queue.push(plus());
        task.execute().unwrap();
        assert_eq!(task.describe(), "CountContainerSizeTask result = 2");
    }

    #[test]
    fn test_count_result_producing_mixed_queue() {
        let queue = TaskQueue::new();
        queue.push(plus());
        queue.push(ClearContainerTask::new(&queue));

        let mut task = CountResultProducingTask::new(&queue);
        assert!(task.is_result_producing());
        assert_eq!(task.describe(), "CountResultProducingTask wasn't running yet.");

        task.execute().unwrap();
        assert_eq!(task.result(), Some(1));
        assert_eq!(task.describe(), "CountResultProducingTask result = 1");
    }

    #[test]
    fn test_count_result_producing_rescans() {
        let queue = TaskQueue::new();
        let mut task = CountResultProducingTask::new(&queue);
        task.execute().unwrap();
        assert_eq!(task.result(), Some(0));

        queue.push(CountResultProducingTask::new(&queue));
        queue.push(CountLiveObjectsTask::new());
        task.execute().unwrap();
        assert_eq!(task.result(), Some(2));
    }

    #[test]
    fn test_count_live_objects_captures_counter() {
        let mut task = CountLiveObjectsTask::new();
        assert!(task.is_result_producing());
        assert_eq!(task.describe(), "CountLiveObjectsTask wasn't running yet.");

        task.execute().unwrap();
        // other tests run concurrently; this task is at least alive
        assert!(task.result().unwrap() >= 1);
        assert!(task.describe().starts_with("CountLiveObjectsTask result = "));
    }
}
