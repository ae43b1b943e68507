//! Task - habits, dailies, todos, and rewards

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Task validation error
///
/// The damage arithmetic never fails for validated input, so all
/// checks happen at the boundary before a simulation touches its
/// accumulators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    #[error("task {id}: value is not a finite number")]
    NonFiniteValue { id: String },
    #[error("task {id}: priority is not a finite number")]
    NonFinitePriority { id: String },
    #[error("task {id}: priority {priority} is negative")]
    NegativePriority { id: String, priority: f64 },
}

/// The four task kinds; only dailies are damage-eligible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Habit,
    Daily,
    Todo,
    Reward,
}

/// One subtask inside a daily's checklist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(default)]
    pub text: String,
    pub completed: bool,
}

/// A single task as materialized by the upstream enrichment layer
///
/// `value`, `priority`, and `checklist` are required on the wire; a
/// record missing any of them is rejected at deserialization rather
/// than fed into the arithmetic. The due and completed flags default
/// to false when absent, matching the service's treatment of task
/// kinds that never carry them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    #[serde(rename = "isDue", default)]
    pub is_due: bool,
    #[serde(default)]
    pub completed: bool,
    /// Neglect/streak history; more negative means more neglected
    pub value: f64,
    /// Difficulty multiplier, conventionally 0.1 / 1 / 1.5 / 2
    pub priority: f64,
    pub checklist: Vec<ChecklistItem>,
    /// Due timestamp, only meaningful for todos
    #[serde(rename = "date", default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a task with neutral value and priority
    pub fn new(task_type: TaskType) -> Self {
        Task {
            id: String::new(),
            text: String::new(),
            task_type,
            is_due: false,
            completed: false,
            value: 0.0,
            priority: 1.0,
            checklist: Vec::new(),
            due_date: None,
        }
    }

    /// Set the task value
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Set the difficulty multiplier
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Mark the task as due
    pub fn with_due(mut self, is_due: bool) -> Self {
        self.is_due = is_due;
        self
    }

    /// Mark the task as completed
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Attach a checklist given each subtask's completion flag
    pub fn with_checklist(mut self, completed_flags: &[bool]) -> Self {
        self.checklist = completed_flags
            .iter()
            .map(|&completed| ChecklistItem {
                text: String::new(),
                completed,
            })
            .collect();
        self
    }

    /// Set the due timestamp
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Whether this task is in scope for damage simulation
    pub fn is_due_daily(&self) -> bool {
        self.task_type == TaskType::Daily && self.is_due && !self.completed
    }

    /// Number of completed checklist subtasks
    pub fn completed_subtasks(&self) -> usize {
        self.checklist.iter().filter(|item| item.completed).count()
    }

    /// Check the task's numeric fields against their expected domains
    pub fn validate(&self) -> Result<(), TaskError> {
        if !self.value.is_finite() {
            return Err(TaskError::NonFiniteValue {
                id: self.id.clone(),
            });
        }
        if !self.priority.is_finite() {
            return Err(TaskError::NonFinitePriority {
                id: self.id.clone(),
            });
        }
        if self.priority < 0.0 {
            return Err(TaskError::NegativePriority {
                id: self.id.clone(),
                priority: self.priority,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_daily_scope() {
        assert!(Task::new(TaskType::Daily).with_due(true).is_due_daily());
        assert!(!Task::new(TaskType::Daily).is_due_daily());
        assert!(!Task::new(TaskType::Daily)
            .with_due(true)
            .with_completed(true)
            .is_due_daily());
        assert!(!Task::new(TaskType::Todo).with_due(true).is_due_daily());
    }

    #[test]
    fn test_validate_rejects_nan_value() {
        let task = Task::new(TaskType::Daily).with_value(f64::NAN);
        assert!(matches!(
            task.validate(),
            Err(TaskError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_priority() {
        let task = Task::new(TaskType::Daily).with_priority(-1.0);
        assert!(matches!(
            task.validate(),
            Err(TaskError::NegativePriority { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_infinite_priority() {
        let task = Task::new(TaskType::Daily).with_priority(f64::INFINITY);
        assert!(matches!(
            task.validate(),
            Err(TaskError::NonFinitePriority { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_conventional_priorities() {
        for priority in [0.1, 1.0, 1.5, 2.0] {
            assert!(Task::new(TaskType::Daily)
                .with_priority(priority)
                .validate()
                .is_ok());
        }
    }

    #[test]
    fn test_deserialization_requires_value_priority_checklist() {
        // MissingField is surfaced at the boundary, not in arithmetic
        let missing_value = r#"{"type": "daily", "priority": 1, "checklist": []}"#;
        assert!(serde_json::from_str::<Task>(missing_value).is_err());

        let missing_checklist = r#"{"type": "daily", "value": 0, "priority": 1}"#;
        assert!(serde_json::from_str::<Task>(missing_checklist).is_err());
    }

    #[test]
    fn test_deserialization_defaults_flags() {
        let json = r#"{"type": "todo", "value": -3.5, "priority": 1.5, "checklist": []}"#;
        let task: Task = serde_json::from_str(json).expect("todo should deserialize");
        assert!(!task.is_due);
        assert!(!task.completed);
        assert_eq!(task.task_type, TaskType::Todo);
    }

    #[test]
    fn test_completed_subtasks_count() {
        let task = Task::new(TaskType::Daily).with_checklist(&[true, false, true]);
        assert_eq!(task.completed_subtasks(), 2);
    }
}
