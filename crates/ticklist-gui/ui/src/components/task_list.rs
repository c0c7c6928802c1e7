use ticklist_core::list::rows;
use ticklist_core::{
  TaskId,
  TaskRecord
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<TaskRecord>,
  pub on_toggle: Callback<TaskId>,
  pub on_remove: Callback<TaskId>,
  pub on_edit:   Callback<(TaskId, String)>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div class="task-list">
          {
              for rows(&props.tasks).map(|row| html! {
                  <TaskRow
                      key={row.key.to_string()}
                      index={row.index}
                      task={row.task.clone()}
                      on_toggle={props.on_toggle.clone()}
                      on_remove={props.on_remove.clone()}
                      on_edit={props.on_edit.clone()}
                  />
              })
          }
      </div>
  }
}
