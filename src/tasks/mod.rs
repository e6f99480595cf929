//! Task suggestion generator.
//!
//! Scans transcript content against static trigger tables and emits
//! prioritized follow-up tasks. Pure and deterministic: task ids are
//! derived from the description, and due dates come from the clock the
//! caller injects.

pub mod triggers;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{TaskPriority, TaskType};

use triggers::{general_triggers, regional_triggers, TaskTrigger};

/// Namespace for deriving stable task ids from descriptions.
const TASK_NAMESPACE: Uuid = Uuid::from_u128(0x6f9c_1c3a_2d4e_4b8f_9a51_7e0d_3b2a_c815);

/// A suggested follow-up task. `is_completed` is mutated by the caller
/// only; the engine always emits it false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSuggestion {
    pub id: Uuid,
    pub task_type: TaskType,
    pub description: String,
    pub priority: TaskPriority,
    pub due_date: NaiveDateTime,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
    pub session_id: Option<Uuid>,
    pub session_title: Option<String>,
}

impl TaskSuggestion {
    /// Attach session provenance.
    pub fn with_session(mut self, session_id: Uuid, session_title: &str) -> Self {
        self.session_id = Some(session_id);
        self.session_title = Some(session_title.to_string());
        self
    }
}

/// Suggest tasks from the general trigger table.
pub fn analyze_transcription(content: &str, now: NaiveDateTime) -> Vec<TaskSuggestion> {
    suggest(content, now, general_triggers())
}

/// Suggest tasks from the regional primary-care programme table.
pub fn regional_suggestions(content: &str, now: NaiveDateTime) -> Vec<TaskSuggestion> {
    suggest(content, now, regional_triggers())
}

fn suggest(content: &str, now: NaiveDateTime, table: &[TaskTrigger]) -> Vec<TaskSuggestion> {
    if content.trim().is_empty() {
        return Vec::new();
    }
    let lower = content.to_lowercase();

    let suggestions: Vec<TaskSuggestion> = table
        .iter()
        .filter(|t| t.phrases.iter().any(|p| lower.contains(p)))
        .map(|t| build_task(t, now))
        .collect();

    tracing::debug!(
        triggers = table.len(),
        suggested = suggestions.len(),
        "task suggestion complete"
    );

    suggestions
}

fn build_task(trigger: &TaskTrigger, now: NaiveDateTime) -> TaskSuggestion {
    TaskSuggestion {
        id: Uuid::new_v5(&TASK_NAMESPACE, trigger.description.as_bytes()),
        task_type: trigger.task_type,
        description: trigger.description.to_string(),
        priority: trigger.priority,
        due_date: now + Duration::days(trigger.due_days),
        is_completed: false,
        created_at: now,
        session_id: None,
        session_title: None,
    }
}

/// Merge suggestion lists from several sources. Dedup key is the exact
/// description string; the first occurrence wins.
pub fn merge_suggestions(lists: Vec<Vec<TaskSuggestion>>) -> Vec<TaskSuggestion> {
    let mut merged: Vec<TaskSuggestion> = Vec::new();
    for task in lists.into_iter().flatten() {
        if !merged.iter().any(|t| t.description == task.description) {
            merged.push(task);
        }
    }
    merged
}
