use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

impl TaskRecord {
    pub fn new_pending(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            done: false,
        }
    }

    pub fn with_done(&self, done: bool) -> Self {
        Self {
            done,
            ..self.clone()
        }
    }

    pub fn with_title(&self, title: String) -> Self {
        Self {
            title,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{TaskId, TaskRecord};

    #[test]
    fn serializes_with_flat_field_names() {
        let task = TaskRecord::new_pending(TaskId(1_700_000_000_000), "Buy milk".to_string());
        let value = serde_json::to_value(&task).expect("serialize task");
        assert_eq!(
            value,
            json!({ "id": 1_700_000_000_000_i64, "title": "Buy milk", "done": false })
        );
    }

    #[test]
    fn with_helpers_keep_identity() {
        let task = TaskRecord::new_pending(TaskId(7), "a".to_string());
        let done = task.with_done(true);
        let renamed = done.with_title(String::new());

        assert_eq!(renamed.id, TaskId(7));
        assert!(renamed.done);
        assert!(renamed.title.is_empty());
        assert!(!task.done);
    }
}
