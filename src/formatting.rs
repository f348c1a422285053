//! Formatting helper functions for the MCP server
//!
//! Tool results are plain text. These helpers render the data the core
//! returns; they never decide what is shown.

use crate::todo::{CalendarMonth, Counts, Occurrence, Task, TaskGroup, View, format_time};
use chrono::{Datelike, NaiveDate};

fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Format one task or instance as a single line
pub fn format_occurrence(occurrence: &Occurrence) -> String {
    let task = &occurrence.task;
    let mut line = format!(
        "- {} [{}] {}",
        checkbox(task.completed),
        occurrence.task_ref,
        task.text
    );
    if let Some(time) = task.time {
        line.push_str(&format!(" @ {}", format_time(time)));
    }
    line.push_str(&format!(
        " ({})",
        task.category.map(|c| c.as_str()).unwrap_or("inbox")
    ));
    if task.is_recurring() {
        line.push_str(" (repeats daily)");
    }
    if !task.subtasks.is_empty() {
        let done = task.subtasks.iter().filter(|s| s.completed).count();
        line.push_str(&format!(" {}/{} subtasks", done, task.subtasks.len()));
    }
    line
}

/// Format a grouped view under its title
pub fn format_groups(view: &View, groups: &[TaskGroup]) -> String {
    let mut result = format!("# {}\n", view.title());
    if groups.is_empty() {
        result.push_str("\nNo tasks found\n");
        return result;
    }
    for group in groups {
        result.push_str(&format!("\n## {} ({})\n", group.label, group.items.len()));
        for item in &group.items {
            result.push_str(&format_occurrence(item));
            result.push('\n');
        }
    }
    result
}

/// Format the task list of one date
pub fn format_day(date: NaiveDate, occurrences: &[Occurrence]) -> String {
    let mut result = format!("# {}\n", date.format("%A, %Y-%m-%d"));
    if occurrences.is_empty() {
        result.push_str("\nNo tasks found\n");
        return result;
    }
    result.push('\n');
    for occurrence in occurrences {
        result.push_str(&format_occurrence(occurrence));
        result.push('\n');
    }
    result
}

/// Format badge counts as `key: value` lines
pub fn format_counts(counts: &Counts) -> String {
    counts
        .entries()
        .iter()
        .map(|(key, value)| format!("{}: {}\n", key, value))
        .collect()
}

/// Format the full detail of a task, subtasks included
pub fn format_task_detail(task: &Task) -> String {
    let mut result = format!("# {}\n\n", task.text);
    result.push_str(&format!("ID: {}\n", task.id));
    result.push_str(&format!(
        "Status: {}\n",
        if task.completed { "completed" } else { "open" }
    ));
    result.push_str(&format!("Date: {}\n", task.date));
    result.push_str(&format!(
        "Time: {}\n",
        task.time.map(format_time).unwrap_or_else(|| "unscheduled".to_string())
    ));
    result.push_str(&format!(
        "Category: {}\n",
        task.category.map(|c| c.as_str()).unwrap_or("inbox")
    ));
    if task.is_recurring() {
        result.push_str("Recurring: daily\n");
    }

    result.push_str("\n## Subtasks\n");
    if task.subtasks.is_empty() {
        result.push_str("None\n");
    }
    for subtask in &task.subtasks {
        result.push_str(&format!(
            "- {} [{}] {}\n",
            checkbox(subtask.completed),
            subtask.id,
            subtask.text
        ));
    }
    result
}

/// Format a month as a Sunday-first grid of pending-task tallies
///
/// Each cell shows the day number, with `*N` when N tasks are still open.
pub fn format_calendar(month: &CalendarMonth) -> String {
    let mut result = format!("# {}-{:02}\n\n", month.year, month.month);
    result.push_str("Sun    Mon    Tue    Wed    Thu    Fri    Sat\n");

    let mut column = 0;
    for _ in 0..month.leading_days {
        result.push_str("       ");
        column += 1;
    }
    for day in &month.days {
        let pending = day.pending();
        let cell = if pending > 0 {
            format!("{:>2}*{:<3}", day.date.day(), pending)
        } else {
            format!("{:>2}    ", day.date.day())
        };
        result.push_str(&cell);
        column += 1;
        if column == 7 {
            result.truncate(result.trim_end_matches(' ').len());
            result.push('\n');
            column = 0;
        } else {
            result.push(' ');
        }
    }
    if column != 0 {
        result.truncate(result.trim_end_matches(' ').len());
        result.push('\n');
    }
    result
}
