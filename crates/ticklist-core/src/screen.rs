use serde::{Deserialize, Serialize};

use crate::task::{TaskId, TaskRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenState {
    tasks: Vec<TaskRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    // id comes from the caller so apply stays pure
    Add { id: TaskId, title: String },
    ToggleDone(TaskId),
    Edit { id: TaskId, title: String },
    RequestRemove(TaskId),
    Remove(TaskId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    DuplicateTitle { title: String },
    ConfirmRemove { id: TaskId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub state: ScreenState,
    pub changed: bool,
    pub notice: Option<Notice>,
}

impl ScreenState {
    pub fn new(tasks: Vec<TaskRecord>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title == title)
    }

    fn replace_where(&self, id: TaskId, update: impl Fn(&TaskRecord) -> TaskRecord) -> Option<Self> {
        self.get(id)?;
        let tasks = self
            .tasks
            .iter()
            .map(|task| if task.id == id { update(task) } else { task.clone() })
            .collect();
        Some(Self { tasks })
    }

    fn without(&self, id: TaskId) -> Option<Self> {
        self.get(id)?;
        let tasks = self.tasks.iter().filter(|task| task.id != id).cloned().collect();
        Some(Self { tasks })
    }

    fn appended(&self, task: TaskRecord) -> Self {
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend(self.tasks.iter().cloned());
        tasks.push(task);
        Self { tasks }
    }
}

impl Applied {
    fn changed(state: ScreenState) -> Self {
        Self {
            state,
            changed: true,
            notice: None,
        }
    }

    fn unchanged(state: &ScreenState, notice: Option<Notice>) -> Self {
        Self {
            state: state.clone(),
            changed: false,
            notice,
        }
    }
}

pub fn apply(state: &ScreenState, event: ScreenEvent) -> Applied {
    match event {
        ScreenEvent::Add { id, title } => {
            if state.contains_title(&title) {
                return Applied::unchanged(state, Some(Notice::DuplicateTitle { title }));
            }
            Applied::changed(state.appended(TaskRecord::new_pending(id, title)))
        }
        ScreenEvent::ToggleDone(id) => {
            match state.replace_where(id, |task| task.with_done(!task.done)) {
                Some(next) => Applied::changed(next),
                None => Applied::unchanged(state, None),
            }
        }
        ScreenEvent::Edit { id, title } => {
            match state.replace_where(id, |task| task.with_title(title.clone())) {
                Some(next) => Applied::changed(next),
                None => Applied::unchanged(state, None),
            }
        }
        ScreenEvent::RequestRemove(id) => {
            Applied::unchanged(state, Some(Notice::ConfirmRemove { id }))
        }
        ScreenEvent::Remove(id) => match state.without(id) {
            Some(next) => Applied::changed(next),
            None => Applied::unchanged(state, None),
        },
    }
}
