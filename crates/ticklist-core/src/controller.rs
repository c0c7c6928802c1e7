use tracing::{debug, info, warn};

use crate::config::ScreenConfig;
use crate::ids::{Clock, IdMinter};
use crate::screen::{Notice, ScreenEvent, ScreenState, apply};
use crate::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    DuplicateTitle,
    ConfirmRemove(TaskId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptChoice {
    pub label: String,
    pub action: Option<ScreenEvent>,
}

/// A blocking dialog. Choices are listed in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub title: String,
    pub message: String,
    pub choices: Vec<PromptChoice>,
}

#[derive(Debug, Clone, Copy)]
pub struct ScreenSnapshot<'a> {
    pub state: &'a ScreenState,
    pub prompt: Option<&'a Prompt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(ScreenSnapshot<'_>)>;

pub struct ScreenController<C> {
    state: ScreenState,
    prompt: Option<Prompt>,
    config: ScreenConfig,
    ids: IdMinter<C>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<C: Clock> ScreenController<C> {
    pub fn new(config: ScreenConfig, clock: C) -> Self {
        let ids = IdMinter::new(clock, config.ids.strict_monotonic);
        Self {
            state: ScreenState::default(),
            prompt: None,
            config,
            ids,
            subscribers: vec![],
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn snapshot(&self) -> ScreenSnapshot<'_> {
        ScreenSnapshot {
            state: &self.state,
            prompt: self.prompt.as_ref(),
        }
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(ScreenSnapshot<'_>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        debug!(subscription = id.0, total = self.subscribers.len(), "added screen subscriber");
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        before != self.subscribers.len()
    }

    #[tracing::instrument(skip(self, title))]
    pub fn add(&mut self, title: impl Into<String>) {
        if self.blocked_by_prompt("add") {
            return;
        }
        let id = self.ids.next_id();
        self.dispatch(ScreenEvent::Add {
            id,
            title: title.into(),
        });
    }

    #[tracing::instrument(skip(self))]
    pub fn toggle_done(&mut self, id: TaskId) {
        self.dispatch(ScreenEvent::ToggleDone(id));
    }

    #[tracing::instrument(skip(self, title))]
    pub fn edit(&mut self, id: TaskId, title: impl Into<String>) {
        self.dispatch(ScreenEvent::Edit {
            id,
            title: title.into(),
        });
    }

    #[tracing::instrument(skip(self))]
    pub fn request_remove(&mut self, id: TaskId) {
        self.dispatch(ScreenEvent::RequestRemove(id));
    }

    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, id: TaskId) {
        self.dispatch(ScreenEvent::Remove(id));
    }

    /// Closes the active prompt and runs the picked choice's action.
    #[tracing::instrument(skip(self))]
    pub fn choose(&mut self, index: usize) {
        let Some(prompt) = self.prompt.take() else {
            debug!("choice made with no prompt open");
            return;
        };

        let action = match prompt.choices.into_iter().nth(index) {
            Some(choice) => {
                debug!(label = %choice.label, "prompt choice picked");
                choice.action
            }
            None => {
                warn!(index, "prompt choice out of range; closing prompt");
                None
            }
        };

        if let Some(event) = action {
            if let ScreenEvent::Remove(id) = &event {
                info!(%id, "removal confirmed");
            }
            self.apply_event(event);
        }
        self.notify();
    }

    pub fn dismiss(&mut self) {
        if self.prompt.take().is_some() {
            debug!("prompt dismissed");
            self.notify();
        }
    }

    fn dispatch(&mut self, event: ScreenEvent) {
        if self.blocked_by_prompt("dispatch") {
            return;
        }
        if self.apply_event(event) {
            self.notify();
        }
    }

    // an open prompt must be resolved through choose or dismiss first
    fn blocked_by_prompt(&self, operation: &str) -> bool {
        match &self.prompt {
            Some(prompt) => {
                debug!(operation, kind = ?prompt.kind, "prompt open; ignoring event");
                true
            }
            None => false,
        }
    }

    fn apply_event(&mut self, event: ScreenEvent) -> bool {
        let applied = apply(&self.state, event);
        let prompted = applied.notice.is_some();

        if let Some(notice) = applied.notice {
            self.prompt = Some(self.prompt_for(notice));
        }
        if applied.changed {
            self.state = applied.state;
            debug!(tasks = self.state.len(), "screen state changed");
        } else if !prompted {
            debug!("event did not match any task; ignoring");
        }

        applied.changed || prompted
    }

    fn prompt_for(&self, notice: Notice) -> Prompt {
        match notice {
            Notice::DuplicateTitle { title } => {
                warn!(%title, "rejected duplicate task title");
                let alert = &self.config.duplicate_alert;
                Prompt {
                    kind: PromptKind::DuplicateTitle,
                    title: alert.title.clone(),
                    message: alert.message.clone(),
                    choices: vec![PromptChoice {
                        label: alert.dismiss_label.clone(),
                        action: None,
                    }],
                }
            }
            Notice::ConfirmRemove { id } => {
                debug!(%id, "asking to confirm removal");
                let confirm = &self.config.remove_prompt;
                Prompt {
                    kind: PromptKind::ConfirmRemove(id),
                    title: confirm.title.clone(),
                    message: confirm.message.clone(),
                    choices: vec![
                        PromptChoice {
                            label: confirm.decline_label.clone(),
                            action: None,
                        },
                        PromptChoice {
                            label: confirm.confirm_label.clone(),
                            action: Some(ScreenEvent::Remove(id)),
                        },
                    ],
                }
            }
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for (_, subscriber) in &self.subscribers {
            subscriber(snapshot);
        }
    }
}
