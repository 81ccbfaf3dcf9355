//! The drain loop - pops, executes and describes queued tasks.

use tracing::{debug, info, warn};
use workq_core::{lifetime, Result, TaskQueue};

/// Configuration for the queue runner.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Max tasks to execute before stopping (None = until empty)
    pub max_steps: Option<usize>,
}

/// Outcome of draining a queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Live-object counter before the first task ran
    pub live_before: usize,
    /// Post-execution description of each task, in execution order
    pub descriptions: Vec<String>,
    /// Tasks still queued when the run stopped, dropped without running
    pub leftover: usize,
    /// Live-object counter after the queue was cleared
    pub live_after: usize,
}

/// Drains a [`TaskQueue`] from the back.
///
/// ```text
/// Pop last → Execute → Describe → Drop
/// ```
#[derive(Debug, Default)]
pub struct QueueRunner {
    config: RunnerConfig,
    steps_run: usize,
}

impl QueueRunner {
    /// Create a new runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    /// Execute the most recently queued task.
    ///
    /// Returns its description, or `None` when the queue is empty. The task
    /// is dropped before this returns.
    pub fn step(&mut self, queue: &TaskQueue) -> Result<Option<String>> {
        let Some(mut task) = queue.pop() else {
            return Ok(None);
        };

        debug!("Executing task {}: {}", self.steps_run + 1, task.describe());
        task.execute()?;
        self.steps_run += 1;

        Ok(Some(task.describe()))
    }

    /// Drain the queue, then clear whatever is left.
    ///
    /// An execution error stops the run and is returned as is; the queue
    /// keeps its remaining tasks in that case.
    pub fn run(&mut self, queue: &TaskQueue) -> Result<RunReport> {
        let live_before = lifetime::count();
        info!("Running queue of {} task(s), {} live object(s)", queue.len(), live_before);

        let mut descriptions = Vec::new();
        loop {
            if let Some(max) = self.config.max_steps {
                if descriptions.len() >= max {
                    info!("Reached max steps ({})", max);
                    break;
                }
            }

            match self.step(queue)? {
                Some(description) => descriptions.push(description),
                None => break,
            }
        }

        let leftover = queue.clear();
        if leftover > 0 {
            warn!("Dropped {} task(s) that never ran", leftover);
        }

        let live_after = lifetime::count();
        info!("Executed {} task(s), {} live object(s) remain", descriptions.len(), live_after);

        Ok(RunReport {
            live_before,
            descriptions,
            leftover,
            live_after,
        })
    }

    /// Get tasks executed so far.
    pub fn steps(&self) -> usize {
        self.steps_run
    }
}
