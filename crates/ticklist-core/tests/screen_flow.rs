use std::cell::RefCell;
use std::rc::Rc;

use ticklist_core::list::rows;
use ticklist_core::row::{RowInput, RowIntent, TaskRowState};
use ticklist_core::{ManualClock, PromptKind, ScreenConfig, ScreenController, TaskRecord};

#[test]
fn add_duplicate_toggle_and_confirmed_remove() {
    let clock = Rc::new(ManualClock::new(1_700_000_000_000));
    let mut screen = ScreenController::new(ScreenConfig::default(), clock.clone());

    screen.add("Buy milk");
    let tasks = screen.state().tasks().to_vec();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Buy milk");
    assert!(!tasks[0].done);
    let id = tasks[0].id;

    clock.advance(250);
    screen.add("Buy milk");
    assert_eq!(screen.state().len(), 1);
    assert_eq!(
        screen.prompt().map(|p| p.kind.clone()),
        Some(PromptKind::DuplicateTitle)
    );
    screen.dismiss();

    screen.toggle_done(id);
    assert!(screen.state().get(id).expect("task survives toggle").done);

    screen.request_remove(id);
    let confirm = screen
        .prompt()
        .and_then(|p| p.choices.iter().position(|c| c.action.is_some()))
        .expect("confirm choice");
    screen.choose(confirm);
    assert!(screen.state().is_empty());
    assert!(screen.prompt().is_none());
}

#[test]
fn row_intents_drive_the_controller() {
    let mut screen = ScreenController::new(ScreenConfig::default(), ManualClock::new(1));
    screen.add("Write report");
    screen.add("Call Ana");

    let task: TaskRecord = screen.state().tasks()[1].clone();
    let mut row = TaskRowState::new(&task);

    row.handle(&task, RowInput::StartEditing);
    row.handle(&task, RowInput::ChangeDraft("Write report".to_string()));
    match row.handle(&task, RowInput::SubmitEditing) {
        Some(RowIntent::Edit { id, title }) => screen.edit(id, title),
        other => panic!("expected edit intent, got {other:?}"),
    }

    // edits skip the duplicate check
    let titles: Vec<_> = screen.state().tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Write report", "Write report"]);
    assert!(screen.prompt().is_none());
    assert_eq!(screen.state().tasks()[1].id, task.id);
}

#[test]
fn cancelled_edit_leaves_record_alone() {
    let mut screen = ScreenController::new(ScreenConfig::default(), ManualClock::new(1));
    screen.add("Walk dog");
    let before = screen.state().clone();
    let task = before.tasks()[0].clone();

    let mut row = TaskRowState::new(&task);
    row.handle(&task, RowInput::StartEditing);
    row.handle(&task, RowInput::ChangeDraft("Walk cat".to_string()));
    assert_eq!(row.handle(&task, RowInput::CancelEditing), None);

    assert_eq!(screen.state(), &before);
}

#[test]
fn list_hooks_track_positions_after_removal() {
    let mut screen = ScreenController::new(ScreenConfig::default(), ManualClock::new(1));
    for title in ["a", "b", "c"] {
        screen.add(title);
    }
    let first = screen.state().tasks()[0].id;
    screen.remove(first);

    let rendered: Vec<_> = rows(screen.state().tasks()).collect();
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].task.title, "b");
    assert_eq!(rendered[0].hooks.remove, "trash-0");
    assert_eq!(rendered[1].hooks.marker, "marker-1");
}

#[test]
fn subscriber_receives_prompt_for_duplicate() {
    let mut screen = ScreenController::new(ScreenConfig::default(), ManualClock::new(1));
    let prompts = Rc::new(RefCell::new(Vec::new()));
    let sink = prompts.clone();
    screen.subscribe(move |snapshot| {
        sink.borrow_mut()
            .push(snapshot.prompt.map(|p| p.message.clone()));
    });

    screen.add("x");
    screen.add("x");

    assert_eq!(
        *prompts.borrow(),
        vec![None, Some("You cannot add a task with the same name".to_string())]
    );
}
