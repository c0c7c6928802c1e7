use ticklist_core::config::HeaderConfig;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
  pub count:  usize,
  pub config: HeaderConfig
}

#[function_component(Header)]
pub fn header(
  props: &HeaderProps
) -> Html {
  let counter_label =
    props.config.format_count(props.count);

  html! {
      <header class="header">
          <span class="title">{ &props.config.title }</span>
          <span class="counter" data-testid="task-counter">{ counter_label }</span>
      </header>
  }
}
