//! View selection and grouping
//!
//! `select` decides which tasks a view shows; `group` splits the selection
//! into labelled groups. Both are pure: the caller passes the reference date.

use super::ledger::CompletionLedger;
use super::recurrence::{Occurrence, tasks_for_date};
use super::task::{Category, Task};
use chrono::{Days, NaiveDate};
use std::fmt;

/// Days after today covered by the "Next 7 Days" view.
///
/// The window is today..=today+7, eight dates in all. The label says seven;
/// the eight-day behaviour is kept as observed.
pub const NEXT_DAYS_SPAN: u64 = 7;

/// A named filter/grouping mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum View {
    Today,
    #[default]
    Next7Days,
    Completed,
    Unscheduled,
    /// One of work/study/travel/life; "daily" parses to [`View::Daily`]
    Category(Category),
    Daily,
    Inbox,
    ThisWeek,
    /// Any unrecognised view name
    Other(String),
}

impl View {
    /// Parse a view name, falling back to [`View::Other`]
    pub fn parse(name: &str) -> View {
        match name.trim() {
            "today" => View::Today,
            "next7days" => View::Next7Days,
            "completed" => View::Completed,
            "unscheduled" => View::Unscheduled,
            "daily" => View::Daily,
            "inbox" => View::Inbox,
            "thisweek" => View::ThisWeek,
            "work" => View::Category(Category::Work),
            "study" => View::Category(Category::Study),
            "travel" => View::Category(Category::Travel),
            "life" => View::Category(Category::Life),
            other => View::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            View::Today => "today",
            View::Next7Days => "next7days",
            View::Completed => "completed",
            View::Unscheduled => "unscheduled",
            View::Category(c) => c.as_str(),
            View::Daily => "daily",
            View::Inbox => "inbox",
            View::ThisWeek => "thisweek",
            View::Other(name) => name,
        }
    }

    /// Heading shown above the view
    pub fn title(&self) -> &str {
        match self {
            View::Today => "Today",
            View::Next7Days => "Next 7 Days",
            View::Completed => "Completed",
            View::Unscheduled => "Unscheduled",
            View::Category(Category::Work) => "Work Tasks",
            View::Category(Category::Study) => "Study Goals",
            View::Category(Category::Travel) => "Travel Plans",
            View::Category(Category::Life) => "Life Errands",
            View::Category(Category::Daily) | View::Daily => "Daily To-Dos",
            View::Inbox => "Inbox",
            View::ThisWeek => "This Week",
            View::Other(name) => name,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Heading of one group within a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupLabel {
    Today,
    Tomorrow,
    CompletedTasks,
    Next7Days,
    DailyRecurring,
}

impl GroupLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupLabel::Today => "Today",
            GroupLabel::Tomorrow => "Tomorrow",
            GroupLabel::CompletedTasks => "Completed Tasks",
            GroupLabel::Next7Days => "Next 7 Days",
            GroupLabel::DailyRecurring => "Daily Recurring Tasks",
        }
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    pub label: GroupLabel,
    pub items: Vec<Occurrence>,
}

/// The dates covered by the next-days window, ascending
///
/// The window is cut short at the last date the calendar can represent.
pub fn next_days(today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..=NEXT_DAYS_SPAN).map_while(move |offset| today.checked_add_days(Days::new(offset)))
}

/// Pick the tasks and instances a view shows, in display order
pub fn select(view: &View, tasks: &[Task], ledger: &CompletionLedger, today: NaiveDate) -> Vec<Occurrence> {
    match view {
        View::Today => open_on(tasks, ledger, today).collect(),
        View::Next7Days => next_days(today)
            .flat_map(|date| open_on(tasks, ledger, date))
            .collect(),
        View::Completed => templates(tasks, |t| !t.is_recurring() && t.completed),
        View::Unscheduled => templates(tasks, |t| {
            !t.is_recurring() && t.is_unscheduled() && !t.completed
        }),
        View::Category(category) => templates(tasks, |t| {
            !t.is_recurring() && t.category == Some(*category) && !t.completed
        }),
        View::Daily => templates(tasks, Task::is_recurring),
        View::Inbox | View::ThisWeek | View::Other(_) => templates(tasks, |t| !t.completed),
    }
}

/// Split a selection into labelled groups, ordered by first appearance
pub fn group(view: &View, items: Vec<Occurrence>, today: NaiveDate) -> Vec<TaskGroup> {
    if *view == View::Daily {
        if items.is_empty() {
            return Vec::new();
        }
        return vec![TaskGroup {
            label: GroupLabel::DailyRecurring,
            items,
        }];
    }

    let tomorrow = today.succ_opt();
    let mut groups: Vec<TaskGroup> = Vec::new();
    for item in items {
        let label = if item.date() == today {
            GroupLabel::Today
        } else if Some(item.date()) == tomorrow {
            GroupLabel::Tomorrow
        } else if *view == View::Completed {
            GroupLabel::CompletedTasks
        } else {
            GroupLabel::Next7Days
        };

        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.items.push(item),
            None => groups.push(TaskGroup {
                label,
                items: vec![item],
            }),
        }
    }
    groups
}

/// Select and group in one step
pub fn filter(view: &View, tasks: &[Task], ledger: &CompletionLedger, today: NaiveDate) -> Vec<TaskGroup> {
    group(view, select(view, tasks, ledger, today), today)
}

fn open_on<'a>(
    tasks: &'a [Task],
    ledger: &'a CompletionLedger,
    date: NaiveDate,
) -> impl Iterator<Item = Occurrence> + 'a {
    tasks_for_date(tasks, date, ledger)
        .into_iter()
        .filter(|o| !o.is_completed())
}

fn templates(tasks: &[Task], keep: impl Fn(&Task) -> bool) -> Vec<Occurrence> {
    tasks
        .iter()
        .filter(|&t| keep(t))
        .map(Occurrence::template)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::store::TaskStore;
    use chrono::Duration;
    use crate::todo::task_ref::{InstanceKey, TaskRef};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn texts(items: &[Occurrence]) -> Vec<&str> {
        items.iter().map(|o| o.task.text.as_str()).collect()
    }

    #[test]
    fn test_parse_view_names() {
        assert_eq!(View::parse("today"), View::Today);
        assert_eq!(View::parse("work"), View::Category(Category::Work));
        assert_eq!(View::parse("daily"), View::Daily);
        assert_eq!(View::parse("someday"), View::Other("someday".to_string()));
        assert_eq!(View::parse("study").title(), "Study Goals");
        assert_eq!(View::parse("someday").title(), "someday");
    }

    #[test]
    fn test_today_view_seed() {
        let store = TaskStore::seeded(today());
        let items = select(&View::Today, store.tasks(), &CompletionLedger::new(), today());
        assert_eq!(
            texts(&items),
            vec![
                "Interview Mr. Li",
                "Prepare Work Report",
                "Evening Reading",
                "Morning Run"
            ]
        );
    }

    #[test]
    fn test_next7days_spans_eight_days() {
        let store = TaskStore::seeded(today());
        let items = select(&View::Next7Days, store.tasks(), &CompletionLedger::new(), today());

        let runs = items.iter().filter(|o| o.is_instance()).count();
        assert_eq!(runs, 8);
        // 3 dated today + 1 tomorrow + 8 instances
        assert_eq!(items.len(), 12);

        let last = items.last().unwrap();
        assert_eq!(last.date(), today() + Duration::days(7));
    }

    #[test]
    fn test_next7days_at_end_of_calendar() {
        let store = TaskStore::seeded(today());
        let last = NaiveDate::MAX;
        assert_eq!(next_days(last).count(), 1);
        assert_eq!(next_days(last - Duration::days(3)).count(), 4);

        let groups = filter(&View::Next7Days, store.tasks(), &CompletionLedger::new(), last);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, GroupLabel::Today);
        assert_eq!(texts(&groups[0].items), vec!["Morning Run"]);
    }

    #[test]
    fn test_next7days_is_day_ascending() {
        let store = TaskStore::seeded(today());
        let items = select(&View::Next7Days, store.tasks(), &CompletionLedger::new(), today());
        assert!(items.windows(2).all(|w| w[0].date() <= w[1].date()));
    }

    #[test]
    fn test_next7days_skips_completed_instances() {
        let store = TaskStore::seeded(today());
        let mut ledger = CompletionLedger::new();
        ledger.set(InstanceKey::new(1, today() + Duration::days(3)), true);

        let items = select(&View::Next7Days, store.tasks(), &ledger, today());
        assert!(!items
            .iter()
            .any(|o| o.task_ref == TaskRef::instance(1, today() + Duration::days(3))));
        assert_eq!(items.len(), 11);
    }

    #[test]
    fn test_completed_view_excludes_recurring_templates() {
        let mut store = TaskStore::seeded(today());
        store.find_mut(1).unwrap().completed = true;
        store.find_mut(2).unwrap().completed = true;

        let items = select(&View::Completed, store.tasks(), &CompletionLedger::new(), today());
        assert_eq!(texts(&items), vec!["Interview Mr. Li"]);
    }

    #[test]
    fn test_unscheduled_view() {
        let store = TaskStore::seeded(today());
        let items = select(&View::Unscheduled, store.tasks(), &CompletionLedger::new(), today());
        assert_eq!(texts(&items), vec!["Check Work Emails"]);
    }

    #[test]
    fn test_category_view() {
        let store = TaskStore::seeded(today());
        let items = select(
            &View::Category(Category::Work),
            store.tasks(),
            &CompletionLedger::new(),
            today(),
        );
        assert_eq!(
            texts(&items),
            vec!["Interview Mr. Li", "Prepare Work Report", "Check Work Emails"]
        );
    }

    #[test]
    fn test_daily_view_shows_templates_regardless_of_completion() {
        let mut store = TaskStore::seeded(today());
        store.find_mut(1).unwrap().completed = true;

        let groups = filter(&View::Daily, store.tasks(), &CompletionLedger::new(), today());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, GroupLabel::DailyRecurring);
        assert_eq!(groups[0].items[0].task_ref, TaskRef::Template(1));
    }

    #[test]
    fn test_unknown_view_shows_all_open_tasks() {
        let mut store = TaskStore::seeded(today());
        store.find_mut(4).unwrap().completed = true;

        let items = select(
            &View::parse("whatever"),
            store.tasks(),
            &CompletionLedger::new(),
            today(),
        );
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|o| !o.is_instance()));
    }

    #[test]
    fn test_grouping_order_follows_first_appearance() {
        let store = TaskStore::seeded(today());
        let groups = filter(&View::Next7Days, store.tasks(), &CompletionLedger::new(), today());
        let labels: Vec<_> = groups.iter().map(|g| g.label).collect();
        assert_eq!(
            labels,
            vec![GroupLabel::Today, GroupLabel::Tomorrow, GroupLabel::Next7Days]
        );
        assert_eq!(groups[0].items.len(), 4);
        assert_eq!(groups[1].items.len(), 2);
        assert_eq!(groups[2].items.len(), 6);
    }

    #[test]
    fn test_completed_view_grouping() {
        let mut store = TaskStore::seeded(today());
        store.find_mut(2).unwrap().completed = true;
        let old = store.create("Old errand", today() - Duration::days(10)).unwrap();
        old.completed = true;

        let groups = filter(&View::Completed, store.tasks(), &CompletionLedger::new(), today());
        let labels: Vec<_> = groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, vec![GroupLabel::Today, GroupLabel::CompletedTasks]);
    }

    #[test]
    fn test_category_grouping_puts_far_dates_in_next7days() {
        let mut store = TaskStore::new();
        store.create("Far away", today() + Duration::days(40)).unwrap().category =
            Some(Category::Travel);

        let groups = filter(
            &View::Category(Category::Travel),
            store.tasks(),
            &CompletionLedger::new(),
            today(),
        );
        assert_eq!(groups[0].label, GroupLabel::Next7Days);
    }

    #[test]
    fn test_empty_selection_has_no_groups() {
        let store = TaskStore::new();
        assert!(filter(&View::Today, store.tasks(), &CompletionLedger::new(), today()).is_empty());
        assert!(filter(&View::Daily, store.tasks(), &CompletionLedger::new(), today()).is_empty());
    }
}
