//! Named binary arithmetic task.

use crate::describe::{Describable, Named};
use crate::lifetime::Tracked;
use crate::task::{Result, WorkItem};

/// Applies a binary numeric operation to two fixed operands.
///
/// The operation follows plain floating-point semantics: division by zero
/// yields an infinity or NaN rather than an error.
pub struct BinaryOperationTask {
    name: Named,
    operation: Box<dyn Fn(f64, f64) -> f64>,
    first: f64,
    second: f64,
    result: Option<f64>,
    _tracked: Tracked,
}

impl BinaryOperationTask {
    /// Create a new task.
    pub fn new(
        name: Named,
        operation: impl Fn(f64, f64) -> f64 + 'static,
        first: f64,
        second: f64,
    ) -> Self {
        Self {
            name,
            operation: Box::new(operation),
            first,
            second,
            result: None,
            _tracked: Tracked::new(),
        }
    }

    /// Get the task label.
    pub fn name(&self) -> &Named {
        &self.name
    }

    /// Get the operands.
    pub fn operands(&self) -> (f64, f64) {
        (self.first, self.second)
    }

    /// Result of the last execution, if any.
    pub fn result(&self) -> Option<f64> {
        self.result
    }
}

impl WorkItem for BinaryOperationTask {
    fn execute(&mut self) -> Result<()> {
        self.result = Some((self.operation)(self.first, self.second));
        Ok(())
    }

    fn is_result_producing(&self) -> bool {
        true
    }
}

impl Describable for BinaryOperationTask {
    fn describe(&self) -> String {
        let mut info = format!(
            "{}, binary operation with arguments = ({:.6}, {:.6})",
            self.name.describe(),
            self.first,
            self.second
        );
        if let Some(result) = self.result {
            info.push_str(&format!(" Result = {result:.6}"));
        }
        info
    }
}

impl std::fmt::Debug for BinaryOperationTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryOperationTask")
            .field("name", &self.name.label())
            .field("first", &self.first)
            .field("second", &self.second)
            .field("result", &self.result)
            .finish()
    }
}
