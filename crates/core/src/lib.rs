//! workq core.
//!
//! A minimal in-process unit-of-work queue: work items sharing one contract,
//! a shared container some of them mutate, and process-wide lifetime
//! accounting for every tracked entity.

#![warn(missing_docs)]

// Lifetime accounting
pub mod lifetime;

// Contracts
mod describe;
mod task;

// Shared container
mod queue;

// Concrete work items
mod binary;
mod clear;
mod count;
mod enqueue;

// Re-exports
pub use describe::{Describable, Named};
pub use lifetime::Tracked;
pub use task::{Result, TaskError, WorkItem};

pub use queue::{QueueHandle, TaskQueue};

pub use binary::BinaryOperationTask;
pub use clear::ClearContainerTask;
pub use count::{CountContainerSizeTask, CountLiveObjectsTask, CountResultProducingTask};
pub use enqueue::EnqueueTask;
