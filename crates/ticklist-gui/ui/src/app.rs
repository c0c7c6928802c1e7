use gloo::console::log;
use ticklist_core::{
  Prompt,
  ScreenConfig,
  ScreenController,
  ScreenSnapshot,
  TaskId,
  TaskRecord
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use crate::clock::BrowserClock;
use crate::components::{
  Header,
  PromptDialog,
  TaskList,
  TodoInput
};

/// What the screen renders: a copy of the controller's latest snapshot.
#[derive(Clone, PartialEq, Default)]
struct ScreenView {
  tasks:  Vec<TaskRecord>,
  prompt: Option<Prompt>
}

impl From<ScreenSnapshot<'_>>
  for ScreenView
{
  fn from(
    snapshot: ScreenSnapshot<'_>
  ) -> Self {
    Self {
      tasks:  snapshot
        .state
        .tasks()
        .to_vec(),
      prompt: snapshot.prompt.cloned()
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let controller = use_mut_ref(|| {
    ScreenController::new(
      ScreenConfig::load(),
      BrowserClock
    )
  });
  let view = {
    let controller = controller.clone();
    use_state(move || {
      ScreenView::from(
        controller.borrow().snapshot()
      )
    })
  };

  {
    let controller = controller.clone();
    let view = view.clone();
    use_effect_with((), move |_| {
      let subscription = controller
        .borrow_mut()
        .subscribe(move |snapshot| {
          view.set(ScreenView::from(
            snapshot
          ));
        });
      ui_debug(
        "screen.mounted",
        "subscribed to screen \
         controller"
      );
      move || {
        controller
          .borrow_mut()
          .unsubscribe(subscription);
      }
    });
  }

  let on_add = {
    let controller = controller.clone();
    Callback::from(
      move |title: String| {
        ui_debug("task.add", &title);
        controller
          .borrow_mut()
          .add(title);
      }
    )
  };

  let on_toggle = {
    let controller = controller.clone();
    Callback::from(move |id: TaskId| {
      controller
        .borrow_mut()
        .toggle_done(id);
    })
  };

  let on_remove = {
    let controller = controller.clone();
    Callback::from(move |id: TaskId| {
      ui_debug(
        "task.remove.requested",
        &id.to_string()
      );
      controller
        .borrow_mut()
        .request_remove(id);
    })
  };

  let on_edit = {
    let controller = controller.clone();
    Callback::from(
      move |(id, title): (
        TaskId,
        String
      )| {
        controller
          .borrow_mut()
          .edit(id, title);
      }
    )
  };

  let on_choose = {
    let controller = controller.clone();
    Callback::from(
      move |index: usize| {
        controller
          .borrow_mut()
          .choose(index);
      }
    )
  };

  let config =
    controller.borrow().config().clone();
  // keeps Tab and Enter from reaching the screen behind an open prompt
  let inert = view
    .prompt
    .is_some()
    .then_some("");

  html! {
      <div class="screen">
          <div class="screen-body" inert={inert.is_some()}>
              <Header
                  count={view.tasks.len()}
                  config={config.header.clone()}
              />
              <TodoInput
                  placeholder={config.input.placeholder.clone()}
                  on_submit={on_add}
              />
              <TaskList
                  tasks={view.tasks.clone()}
                  on_toggle={on_toggle}
                  on_remove={on_remove}
                  on_edit={on_edit}
              />
          </div>
          <PromptDialog
              prompt={view.prompt.clone()}
              on_choose={on_choose}
          />
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
