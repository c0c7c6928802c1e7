use ticklist_core::Prompt;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PromptDialogProps {
  pub prompt:    Option<Prompt>,
  pub on_choose: Callback<usize>
}

/// Modal rendering of the controller's blocking prompt. The backdrop
/// swallows clicks so the screen underneath stays inert.
#[function_component(PromptDialog)]
pub fn prompt_dialog(
  props: &PromptDialogProps
) -> Html {
  let Some(prompt) = &props.prompt
  else {
    return html! {};
  };

  html! {
      <div class="modal-backdrop" data-testid="prompt">
          <div class="modal" role="alertdialog" onclick={Callback::from(|e: yew::MouseEvent| e.stop_propagation())}>
              <div class="header">{ &prompt.title }</div>
              <div class="content">{ &prompt.message }</div>
              <div class="footer">
                  {
                      for prompt.choices.iter().enumerate().map(|(index, choice)| {
                          let on_choose = props.on_choose.clone();
                          html! {
                              <button
                                  class="btn"
                                  type="button"
                                  data-testid={format!("prompt-choice-{index}")}
                                  onclick={move |_| on_choose.emit(index)}
                              >
                                  { &choice.label }
                              </button>
                          }
                      })
                  }
              </div>
          </div>
      </div>
  }
}
