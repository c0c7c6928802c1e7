use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  KeyboardEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TodoInputProps {
  pub placeholder: String,
  pub on_submit:   Callback<String>
}

#[function_component(TodoInput)]
pub fn todo_input(
  props: &TodoInputProps
) -> Html {
  let text = use_state(String::new);

  let submit = {
    let text = text.clone();
    let on_submit =
      props.on_submit.clone();
    Callback::from(move |_: ()| {
      let title = (*text).clone();
      if title.trim().is_empty() {
        tracing::debug!(
          "ignoring blank task title"
        );
        return;
      }
      on_submit.emit(title);
      text.set(String::new());
    })
  };

  let on_input = {
    let text = text.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        text.set(input.value());
      }
    )
  };

  let on_keydown = {
    let submit = submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          e.prevent_default();
          submit.emit(());
        }
      }
    )
  };

  let on_click = {
    let submit = submit.clone();
    Callback::from(move |_| {
      submit.emit(())
    })
  };

  html! {
      <div class="todo-input">
          <input
              data-testid="add-new-task-input"
              placeholder={props.placeholder.clone()}
              value={(*text).clone()}
              oninput={on_input}
              onkeydown={on_keydown}
          />
          <button
              type="button"
              data-testid="add-new-task-button"
              onclick={on_click}
          >
              { "›" }
          </button>
      </div>
  }
}
