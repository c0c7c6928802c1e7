use crate::task::{TaskId, TaskRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHooks {
    pub row: String,
    pub toggle: String,
    pub marker: String,
    pub remove: String,
}

impl RowHooks {
    pub fn for_index(index: usize) -> Self {
        Self {
            row: format!("task-{index}"),
            toggle: format!("button-{index}"),
            marker: format!("marker-{index}"),
            remove: format!("trash-{index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow<'a> {
    pub index: usize,
    /// Reconciliation key; survives index shifts after a removal.
    pub key: TaskId,
    pub task: &'a TaskRecord,
    pub hooks: RowHooks,
}

pub fn rows(tasks: &[TaskRecord]) -> impl Iterator<Item = ListRow<'_>> {
    tasks.iter().enumerate().map(|(index, task)| ListRow {
        index,
        key: task.id,
        task,
        hooks: RowHooks::for_index(index),
    })
}

#[cfg(test)]
mod tests {
    use super::{RowHooks, rows};
    use crate::task::{TaskId, TaskRecord};

    #[test]
    fn rows_keep_order_and_key_by_id() {
        let tasks = vec![
            TaskRecord::new_pending(TaskId(30), "c".to_string()),
            TaskRecord::new_pending(TaskId(10), "a".to_string()),
        ];
        let rendered: Vec<_> = rows(&tasks).collect();

        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].key, TaskId(30));
        assert_eq!(rendered[0].task.title, "c");
        assert_eq!(rendered[1].index, 1);
        assert_eq!(rendered[1].hooks.toggle, "button-1");
    }

    #[test]
    fn hooks_follow_position_not_identity() {
        let mut tasks = vec![
            TaskRecord::new_pending(TaskId(1), "a".to_string()),
            TaskRecord::new_pending(TaskId(2), "b".to_string()),
        ];
        tasks.remove(0);
        let rendered: Vec<_> = rows(&tasks).collect();

        assert_eq!(rendered[0].key, TaskId(2));
        assert_eq!(
            rendered[0].hooks,
            RowHooks {
                row: "task-0".to_string(),
                toggle: "button-0".to_string(),
                marker: "marker-0".to_string(),
                remove: "trash-0".to_string(),
            }
        );
    }
}
