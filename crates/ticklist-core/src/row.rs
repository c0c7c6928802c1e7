use tracing::trace;

use crate::task::{TaskId, TaskRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowInput {
    StartEditing,
    ChangeDraft(String),
    CancelEditing,
    SubmitEditing,
    PressToggle,
    PressRemove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIntent {
    Toggle(TaskId),
    Remove(TaskId),
    Edit { id: TaskId, title: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskRowState {
    mode: RowMode,
    draft: String,
}

impl TaskRowState {
    pub fn new(task: &TaskRecord) -> Self {
        Self {
            mode: RowMode::Viewing,
            draft: task.title.clone(),
        }
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn display_text<'a>(&'a self, task: &'a TaskRecord) -> &'a str {
        if self.is_editing() { &self.draft } else { &task.title }
    }

    pub fn wants_focus(&self) -> bool {
        self.is_editing()
    }

    pub fn text_editable(&self) -> bool {
        self.is_editing()
    }

    pub fn remove_enabled(&self) -> bool {
        !self.is_editing()
    }

    pub fn handle(&mut self, task: &TaskRecord, input: RowInput) -> Option<RowIntent> {
        trace!(id = %task.id, mode = ?self.mode, ?input, "row input");
        match (self.mode, input) {
            (_, RowInput::PressToggle) => Some(RowIntent::Toggle(task.id)),
            (RowMode::Viewing, RowInput::PressRemove) => Some(RowIntent::Remove(task.id)),
            (RowMode::Editing, RowInput::PressRemove) => None,
            (RowMode::Viewing, RowInput::StartEditing) => {
                self.draft = task.title.clone();
                self.mode = RowMode::Editing;
                None
            }
            (RowMode::Editing, RowInput::ChangeDraft(text)) => {
                self.draft = text;
                None
            }
            (RowMode::Editing, RowInput::CancelEditing) => {
                self.draft = task.title.clone();
                self.mode = RowMode::Viewing;
                None
            }
            (RowMode::Editing, RowInput::SubmitEditing) => {
                self.mode = RowMode::Viewing;
                Some(RowIntent::Edit {
                    id: task.id,
                    title: self.draft.clone(),
                })
            }
            (RowMode::Editing, RowInput::StartEditing)
            | (
                RowMode::Viewing,
                RowInput::ChangeDraft(_) | RowInput::CancelEditing | RowInput::SubmitEditing,
            ) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    Outlined,
    Filled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    Plain,
    Struck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAppearance {
    pub marker: MarkerStyle,
    pub show_check: bool,
    pub title: TitleStyle,
    pub remove_dimmed: bool,
}

impl RowAppearance {
    pub fn of(task: &TaskRecord, row: &TaskRowState) -> Self {
        let (marker, title) = if task.done {
            (MarkerStyle::Filled, TitleStyle::Struck)
        } else {
            (MarkerStyle::Outlined, TitleStyle::Plain)
        };
        Self {
            marker,
            show_check: task.done,
            title,
            remove_dimmed: !row.remove_enabled(),
        }
    }
}
