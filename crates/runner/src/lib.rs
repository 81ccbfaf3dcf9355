//! Queue driver - task plans and the drain loop.

#![warn(missing_docs)]

pub mod plan;
pub mod runner;

pub use plan::{Operator, Plan, TaskSpec};
pub use runner::{QueueRunner, RunReport, RunnerConfig};
