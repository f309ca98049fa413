use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A supporting action attached to a task. Subtasks are created together
/// with their parent task and are never deleted individually; only their
/// `completed` flag changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Subtask {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: fresh_id(),
            text: text.into(),
            completed: false,
        }
    }
}

/// A single priority entry. Owned by exactly one category list; the id is
/// opaque and only used to match the task on deletion and in the UI cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        subtasks: Vec<Subtask>,
    ) -> Self {
        Self {
            id: fresh_id(),
            title: title.into(),
            description: description.into(),
            subtasks,
            completed: false,
        }
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Pray", "", vec![]);
        assert!(!task.completed);
        assert!(task.subtasks.is_empty());
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("a", "", vec![]);
        let b = Task::new("a", "", vec![]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_subtask_starts_incomplete() {
        let sub = Subtask::new("Morning");
        assert_eq!(sub.text, "Morning");
        assert!(!sub.completed);
    }

    #[test]
    fn test_deserialize_tolerates_missing_optional_fields() {
        let raw = r#"{"id":"t1","title":"Read"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.title, "Read");
        assert_eq!(task.description, "");
        assert!(task.subtasks.is_empty());
        assert!(!task.completed);
    }

    #[test]
    fn test_serialize_uses_wire_field_names() {
        let mut task = Task::new("Run", "5k", vec![Subtask::new("Stretch")]);
        task.completed = true;
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["title"], "Run");
        assert_eq!(json["description"], "5k");
        assert_eq!(json["completed"], true);
        assert_eq!(json["subtasks"][0]["text"], "Stretch");
        assert_eq!(json["subtasks"][0]["completed"], false);
    }
}
