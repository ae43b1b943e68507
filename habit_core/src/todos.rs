//! Todo filtering - due one-off tasks relative to a cutoff instant

use crate::task::{Task, TaskType};
use chrono::{DateTime, Utc};

/// Select the todos due strictly before a cutoff instant
///
/// Order-preserving. A todo with no due date never matches, and one
/// due exactly at the cutoff is excluded.
pub fn todos_due_before(tasks: &[Task], cutoff: DateTime<Utc>) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.task_type == TaskType::Todo)
        .filter(|task| task.due_date.is_some_and(|due| due < cutoff))
        .collect()
}

/// Select the todos due by the end of the day containing `now`
pub fn todos_due_today(tasks: &[Task], now: DateTime<Utc>) -> Vec<&Task> {
    todos_due_before(tasks, end_of_day(now))
}

/// Last representable millisecond of the day containing `instant`
fn end_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .map(|t| t.and_utc())
        .unwrap_or(instant)
}
