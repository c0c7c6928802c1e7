mod header;
mod prompt_dialog;
mod task_list;
mod task_row;
mod todo_input;

pub use header::Header;
pub use prompt_dialog::PromptDialog;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use todo_input::TodoInput;
