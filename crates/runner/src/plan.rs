//! Task plans - the ordered list of work items a run starts from.

use serde::{Deserialize, Serialize};
use workq_core::{
    BinaryOperationTask, ClearContainerTask, CountContainerSizeTask, CountLiveObjectsTask,
    CountResultProducingTask, EnqueueTask, Named, Result, TaskQueue, WorkItem,
};

/// Arithmetic operator for binary tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// a + b
    Plus,
    /// a - b
    Minus,
    /// a * b
    Multiplication,
    /// a / b
    Division,
}

impl Operator {
    /// Apply the operator.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Plus => a + b,
            Operator::Minus => a - b,
            Operator::Multiplication => a * b,
            Operator::Division => a / b,
        }
    }

    /// Default task label for this operator.
    pub fn label(self) -> &'static str {
        match self {
            Operator::Plus => "Plus",
            Operator::Minus => "Minus",
            Operator::Multiplication => "Multiplication",
            Operator::Division => "Division",
        }
    }
}

/// Specification of one work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskSpec {
    /// Named binary operation
    Binary {
        /// Operator
        op: Operator,
        /// First operand
        a: f64,
        /// Second operand
        b: f64,
        /// Label (defaults to the operator's label)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Push another task onto the queue
    Enqueue {
        /// Task to push
        #[serde(default, skip_serializing_if = "Option::is_none")]
        task: Option<Box<TaskSpec>>,
    },
    /// Count queued items
    CountSize,
    /// Count queued result-producing items
    CountResultProducing,
    /// Drop every queued item
    Clear,
    /// Capture the live-object counter
    CountLiveObjects,
}

impl TaskSpec {
    /// Binary task with the operator's default label.
    pub fn binary(op: Operator, a: f64, b: f64) -> Self {
        TaskSpec::Binary { op, a, b, name: None }
    }

    /// Enqueue task holding `task`.
    pub fn enqueue(task: TaskSpec) -> Self {
        TaskSpec::Enqueue {
            task: Some(Box::new(task)),
        }
    }

    /// Construct the work item. Items that reference the queue point at `queue`.
    pub fn build(&self, queue: &TaskQueue) -> Result<Box<dyn WorkItem>> {
        let item: Box<dyn WorkItem> = match self {
            TaskSpec::Binary { op, a, b, name } => {
                let op = *op;
                let label = name.clone().unwrap_or_else(|| op.label().to_string());
                Box::new(BinaryOperationTask::new(
                    Named::new(label),
                    move |a, b| op.apply(a, b),
                    *a,
                    *b,
                ))
            }
            TaskSpec::Enqueue { task } => {
                let held = task.as_ref().map(|t| t.build(queue)).transpose()?;
                Box::new(EnqueueTask::new(queue, held)?)
            }
            TaskSpec::CountSize => Box::new(CountContainerSizeTask::new(queue)),
            TaskSpec::CountResultProducing => Box::new(CountResultProducingTask::new(queue)),
            TaskSpec::Clear => Box::new(ClearContainerTask::new(queue)),
            TaskSpec::CountLiveObjects => Box::new(CountLiveObjectsTask::new()),
        };
        Ok(item)
    }
}

/// Ordered list of task specifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Tasks in push order
    pub tasks: Vec<TaskSpec>,
}

impl Plan {
    /// Create a plan from a list of specs.
    pub fn new(tasks: Vec<TaskSpec>) -> Self {
        Self { tasks }
    }

    /// The demonstration sequence.
    pub fn demo() -> Self {
        Self::new(vec![
            TaskSpec::binary(Operator::Plus, 3.0, 7.0),
            TaskSpec::Clear,
            TaskSpec::CountSize,
            TaskSpec::binary(Operator::Minus, 412.0, 42.0),
            TaskSpec::enqueue(TaskSpec::binary(Operator::Multiplication, 31.0, 72.0)),
            TaskSpec::CountResultProducing,
            TaskSpec::binary(Operator::Division, 34.0, 7.0),
            TaskSpec::CountLiveObjects,
        ])
    }

    /// Parse a plan from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Render the plan as pretty JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Build every task in order and push it onto `queue`.
    ///
    /// Stops at the first task that fails to build; tasks pushed before it
    /// stay in the queue.
    pub fn populate(&self, queue: &TaskQueue) -> Result<usize> {
        for spec in &self.tasks {
            queue.push_boxed(spec.build(queue)?);
        }
        Ok(self.tasks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workq_core::TaskError;

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Plus.apply(3.0, 7.0), 10.0);
        assert_eq!(Operator::Minus.apply(412.0, 42.0), 370.0);
        assert_eq!(Operator::Multiplication.apply(31.0, 72.0), 2232.0);
        assert!(Operator::Division.apply(1.0, 0.0).is_infinite());
    }

    #[test]
    fn test_parse_plan_json() {
        let json = r#"{
            "tasks": [
                {"kind": "binary", "op": "plus", "a": 3, "b": 7},
                {"kind": "clear"},
                {"kind": "count_size"},
                {"kind": "binary", "op": "minus", "a": 412, "b": 42},
                {
                    "kind": "enqueue",
                    "task": {"kind": "binary", "op": "multiplication", "a": 31, "b": 72}
                },
                {"kind": "count_result_producing"},
                {"kind": "binary", "op": "division", "a": 34, "b": 7},
                {"kind": "count_live_objects"}
            ]
        }"#;
        let plan = Plan::from_json(json).unwrap();
        assert_eq!(plan, Plan::demo());
    }

    #[test]
    fn test_plan_json_output_is_parseable() {
        let json = Plan::demo().to_json_pretty().unwrap();
        assert!(json.contains("\"kind\": \"count_live_objects\""));
        assert_eq!(Plan::from_json(&json).unwrap(), Plan::demo());
    }

    #[test]
    fn test_custom_label() {
        let queue = TaskQueue::new();
        let spec = TaskSpec::Binary {
            op: Operator::Plus,
            a: 1.0,
            b: 2.0,
            name: Some("Sum".to_string()),
        };
        let task = spec.build(&queue).unwrap();
        assert!(task.describe().starts_with("Object name Sum,"));
    }

    #[test]
    fn test_populate_pushes_in_order() {
        let queue = TaskQueue::new();
        assert_eq!(Plan::demo().populate(&queue).unwrap(), 8);
        assert_eq!(queue.len(), 8);

        let descriptions = queue.describe_all();
        assert!(descriptions[0].starts_with("Object name Plus"));
        assert_eq!(descriptions[1], "ClearContainerTask");
        assert_eq!(descriptions[7], "CountLiveObjectsTask wasn't running yet.");
    }

    #[test]
    fn test_enqueue_without_task_is_invalid() {
        let json = r#"{"tasks": [{"kind": "clear"}, {"kind": "enqueue"}]}"#;
        let plan = Plan::from_json(json).unwrap();
        let queue = TaskQueue::new();
        let err = plan.populate(&queue).unwrap_err();
        assert!(matches!(err, TaskError::InvalidArgument(_)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Plan::from_json(r#"{"tasks": [{"kind": "sleep"}]}"#).is_err());
    }
}
