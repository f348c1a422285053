//! App-level scenarios and properties over a real data directory
mod common;

use chrono::Duration;
use common::{date, open_app, reopen, today};
use std::collections::HashSet;
use todo_mcp::todo::{GroupLabel, InstanceKey, Occurrence, view};
use todo_mcp::{Category, TaskField, TaskRef, View};

fn texts(items: &[Occurrence]) -> Vec<String> {
    items.iter().map(|o| o.task.text.clone()).collect()
}

fn view_texts(app: &todo_mcp::App, v: &View) -> Vec<String> {
    app.filtered_grouped(v, today())
        .into_iter()
        .flat_map(|g| g.items)
        .map(|o| o.task.text)
        .collect()
}

#[test]
fn test_today_view_with_defaults() {
    let (app, _dir) = open_app();
    let groups = app.filtered_grouped(&View::Today, today());

    // Dated tasks come first, daily instances after them

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].label, GroupLabel::Today);
    assert_eq!(
        texts(&groups[0].items),
        vec![
            "Interview Mr. Li",
            "Prepare Work Report",
            "Evening Reading",
            "Morning Run"
        ]
    );
}

#[test]
fn test_add_in_work_view_appears_in_related_views() {
    let (mut app, _dir) = open_app();
    let task = app
        .add_task("Buy milk", &View::parse("work"), today())
        .unwrap()
        .unwrap();
    assert_eq!(task.category, Some(Category::Work));
    assert_eq!(task.date, today());

    for name in ["work", "today", "next7days"] {
        let texts = view_texts(&app, &View::parse(name));
        assert!(
            texts.iter().any(|t| t == "Buy milk"),
            "Buy milk missing from {}",
            name
        );
    }
}

#[test]
fn test_completing_instance_only_affects_its_date() {
    let (mut app, _dir) = open_app();
    let d = today();
    assert!(app.toggle_completion(TaskRef::instance(1, d), true).unwrap());

    let on_d = app.tasks_for_date(d);
    let run = on_d.iter().find(|o| o.task.text == "Morning Run").unwrap();
    assert!(run.is_completed());

    let next_day = app.tasks_for_date(d + Duration::days(1));
    let run = next_day.iter().find(|o| o.task.text == "Morning Run").unwrap();
    assert!(!run.is_completed());

    assert!(!app.task(1).unwrap().completed);
    assert!(!view_texts(&app, &View::Today).contains(&"Morning Run".to_string()));
}

#[test]
fn test_deleting_selected_task_resets_selection() {
    let (mut app, _dir) = open_app();
    assert_eq!(app.select(4).map(|t| t.text.clone()).as_deref(), Some("Evening Reading"));

    app.delete_task(4).unwrap();
    assert!(app.selected_task().is_none());
}

#[test]
fn test_deleting_daily_template_keeps_ledger() {
    let (mut app, dir) = open_app();
    app.toggle_completion(TaskRef::instance(1, today()), true)
        .unwrap();
    assert!(app.delete_task(1).unwrap().is_some());

    let tomorrow = app.tasks_for_date(today() + Duration::days(1));
    assert!(tomorrow.iter().all(|o| !o.is_instance()));

    let app = reopen(&dir);
    assert!(app.task(1).is_none());
    assert!(app.ledger().is_completed(&InstanceKey::new(1, today())));
    assert!(app.tasks_for_date(today()).iter().all(|o| !o.is_instance()));
}

#[test]
fn test_subtask_survives_reload() {
    let (mut app, dir) = open_app();
    let subtask = app.add_subtask(2, "Read CV").unwrap().unwrap();
    assert!(app.toggle_subtask(2, subtask.id, true).unwrap());
    drop(app);

    let app = reopen(&dir);
    let task = app.task(2).unwrap();
    assert_eq!(task.subtasks.len(), 1);
    assert_eq!(task.subtasks[0].text, "Read CV");
    assert!(task.subtasks[0].completed);
}

#[test]
fn test_instance_ids_are_unique() {
    let (mut app, _dir) = open_app();
    app.update_task_field(4, TaskField::Recurring(todo_mcp::todo::Recurrence::Daily))
        .unwrap();

    let mut seen = HashSet::new();
    for offset in 0..30 {
        for occurrence in app.tasks_for_date(today() + Duration::days(offset)) {
            assert!(
                seen.insert(occurrence.task_ref.to_string()),
                "duplicate id {}",
                occurrence.task_ref
            );
        }
    }
    // Plain ids stay reserved for templates
    for task in app.tasks().iter().filter(|t| !t.is_recurring()) {
        assert!(seen.contains(&task.id.to_string()));
    }
}

#[test]
fn test_template_and_instance_completion_are_independent() {
    let (mut app, _dir) = open_app();

    app.toggle_completion(TaskRef::Template(1), true).unwrap();
    assert!(app.tasks_for_date(today()).iter().all(|o| !o.is_completed()));

    app.toggle_completion(TaskRef::Template(1), false).unwrap();
    app.toggle_completion(TaskRef::instance(1, today()), true).unwrap();
    assert!(!app.task(1).unwrap().completed);
}

#[test]
fn test_next7_count_matches_view() {
    let (mut app, _dir) = open_app();
    app.add_task_for_date("Dentist", today() + Duration::days(7)).unwrap();
    app.add_task_for_date("Too far", today() + Duration::days(8)).unwrap();

    let selected = view::select(&View::Next7Days, app.tasks(), app.ledger(), today());
    let counts = app.counts(today());
    assert_eq!(counts.next7, selected.len());
    assert_eq!(counts.week, counts.next7);
    assert!(texts(&selected).contains(&"Dentist".to_string()));
    assert!(!texts(&selected).contains(&"Too far".to_string()));
}

#[test]
fn test_save_and_reload_roundtrip() {
    let (mut app, dir) = open_app();
    app.add_task("Sort mail", &View::Inbox, today()).unwrap();
    app.update_task_field(3, TaskField::Time(None)).unwrap();
    app.toggle_completion(TaskRef::Template(2), true).unwrap();
    app.toggle_completion(TaskRef::instance(1, date(2026, 10, 19)), true)
        .unwrap();

    let reloaded = reopen(&dir);
    assert_eq!(reloaded.tasks(), app.tasks());
    assert_eq!(reloaded.ledger(), app.ledger());
}

#[test]
fn test_toggle_is_idempotent() {
    let (mut app, dir) = open_app();
    let run = TaskRef::instance(1, today());

    app.toggle_completion(run, true).unwrap();
    let once = app.ledger().clone();
    app.toggle_completion(run, true).unwrap();
    assert_eq!(app.ledger(), &once);

    app.toggle_completion(TaskRef::Template(3), true).unwrap();
    app.toggle_completion(TaskRef::Template(3), true).unwrap();
    assert_eq!(reopen(&dir).counts(today()).completed, 1);
}

#[test]
fn test_completed_view_groups_by_date() {
    let (mut app, _dir) = open_app();
    app.toggle_completion(TaskRef::Template(2), true).unwrap();
    app.toggle_completion(TaskRef::Template(5), true).unwrap();
    app.add_task_for_date("Old errand", date(2026, 10, 1)).unwrap();
    let old = app.tasks().last().unwrap().id;
    app.toggle_completion(TaskRef::Template(old), true).unwrap();

    let groups = app.filtered_grouped(&View::Completed, today());
    let labels: Vec<_> = groups.iter().map(|g| g.label).collect();
    assert_eq!(
        labels,
        vec![
            GroupLabel::Today,
            GroupLabel::Tomorrow,
            GroupLabel::CompletedTasks
        ]
    );
}

#[test]
fn test_calendar_month_reflects_completion() {
    let (mut app, _dir) = open_app();
    app.toggle_completion(TaskRef::instance(1, date(2026, 10, 20)), true)
        .unwrap();

    let month = app.calendar_month(2026, 10).unwrap();
    assert_eq!(month.leading_days, 4);
    assert_eq!(month.days.len(), 31);

    let day = &month.days[19];
    assert_eq!(day.date, date(2026, 10, 20));
    assert_eq!(day.completed(), 1);
    assert_eq!(day.pending(), 0);
    assert!(app.calendar_month(2026, 13).is_none());
}
