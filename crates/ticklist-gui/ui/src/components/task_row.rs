use ticklist_core::list::RowHooks;
use ticklist_core::row::{
  MarkerStyle,
  RowAppearance,
  RowInput,
  RowIntent,
  TaskRowState,
  TitleStyle
};
use ticklist_core::{
  TaskId,
  TaskRecord
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  KeyboardEvent,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub index:     usize,
  pub task:      TaskRecord,
  pub on_toggle: Callback<TaskId>,
  pub on_remove: Callback<TaskId>,
  pub on_edit:   Callback<(TaskId, String)>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let row = {
    let task = props.task.clone();
    use_state(move || {
      TaskRowState::new(&task)
    })
  };
  let input_ref = use_node_ref();

  {
    let input_ref = input_ref.clone();
    use_effect_with(
      row.wants_focus(),
      move |wants_focus| {
        if let Some(input) = input_ref
          .cast::<HtmlInputElement>()
        {
          let _ = if *wants_focus {
            input.focus()
          } else {
            input.blur()
          };
        }
        || ()
      }
    );
  }

  let send = {
    let row = row.clone();
    let task = props.task.clone();
    let on_toggle =
      props.on_toggle.clone();
    let on_remove =
      props.on_remove.clone();
    let on_edit = props.on_edit.clone();
    Callback::from(
      move |input: RowInput| {
        let mut next = (*row).clone();
        let intent =
          next.handle(&task, input);
        if next != *row {
          row.set(next);
        }
        match intent {
          | Some(RowIntent::Toggle(
            id
          )) => on_toggle.emit(id),
          | Some(RowIntent::Remove(
            id
          )) => on_remove.emit(id),
          | Some(RowIntent::Edit {
            id,
            title
          }) => on_edit.emit((id, title)),
          | None => {}
        }
      }
    )
  };

  let hooks =
    RowHooks::for_index(props.index);
  let look =
    RowAppearance::of(&props.task, &*row);
  let editing = row.is_editing();

  let on_toggle = {
    let send = send.clone();
    Callback::from(
      move |_: MouseEvent| {
        send.emit(RowInput::PressToggle)
      }
    )
  };
  let on_text_click =
    Callback::from(
      move |e: MouseEvent| {
        if editing {
          e.stop_propagation();
        }
      }
    );
  let on_input = {
    let send = send.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        send.emit(RowInput::ChangeDraft(
          input.value()
        ));
      }
    )
  };
  let on_keydown = {
    let send = send.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          e.prevent_default();
          send.emit(
            RowInput::SubmitEditing
          );
        }
      }
    )
  };
  let on_start_editing = {
    let send = send.clone();
    Callback::from(move |_| {
      send.emit(RowInput::StartEditing)
    })
  };
  let on_cancel_editing = {
    let send = send.clone();
    Callback::from(move |_| {
      send.emit(RowInput::CancelEditing)
    })
  };
  let on_remove = {
    let send = send.clone();
    Callback::from(move |_| {
      send.emit(RowInput::PressRemove)
    })
  };

  let marker_class =
    match look.marker {
      | MarkerStyle::Filled => {
        "marker done"
      }
      | MarkerStyle::Outlined => {
        "marker"
      }
    };
  let text_class = match look.title {
    | TitleStyle::Struck => {
      "task-text done"
    }
    | TitleStyle::Plain => "task-text"
  };
  let row_class = if props.index % 2 == 0
  {
    "task-row even"
  } else {
    "task-row"
  };

  html! {
      <div class={row_class} data-testid={hooks.row}>
          <div
              class="task-button"
              role="button"
              data-testid={hooks.toggle}
              onclick={on_toggle}
          >
              <div class={marker_class} data-testid={hooks.marker}>
                  { if look.show_check { "✓" } else { "" } }
              </div>
              <input
                  ref={input_ref}
                  class={text_class}
                  value={row.display_text(&props.task).to_string()}
                  readonly={!row.text_editable()}
                  onclick={on_text_click}
                  oninput={on_input}
                  onkeydown={on_keydown}
              />
          </div>
          <div class="task-actions">
              {
                  if editing {
                      html! {
                          <button type="button" title="Cancel" onclick={on_cancel_editing}>{ "✕" }</button>
                      }
                  } else {
                      html! {
                          <button type="button" title="Edit" onclick={on_start_editing}>{ "✎" }</button>
                      }
                  }
              }
              <div class="separator"></div>
              <button
                  type="button"
                  title="Remove"
                  data-testid={hooks.remove}
                  disabled={look.remove_dimmed}
                  onclick={on_remove}
              >
                  { "🗑" }
              </button>
          </div>
      </div>
  }
}
