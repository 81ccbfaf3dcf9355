//! The work item contract.

use crate::describe::Describable;
use thiserror::Error;

/// Errors raised by work items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// A constructor received an unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not allowed in the item's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type for work item operations.
pub type Result<T> = std::result::Result<T, TaskError>;

/// A unit of deferred, explicitly invoked work.
///
/// Items are described before and after execution; the description after a
/// successful [`execute`](WorkItem::execute) reflects the captured result.
/// Whether an item produces a result is a property of its concrete type and
/// never changes at runtime.
pub trait WorkItem: Describable {
    /// Perform the unit of work.
    fn execute(&mut self) -> Result<()>;

    /// Whether this kind of item yields an observable result.
    fn is_result_producing(&self) -> bool;
}

impl std::fmt::Debug for dyn WorkItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Describe pattern shared by the counting tasks.
pub(crate) fn describe_count(kind: &str, result: Option<usize>) -> String {
    match result {
        Some(n) => format!("{kind} result = {n}"),
        None => format!("{kind} wasn't running yet."),
    }
}
