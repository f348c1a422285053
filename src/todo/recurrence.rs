//! Per-date expansion of the task collection
//!
//! A date's task list is every non-recurring task dated that day, followed by
//! one synthesized instance of every daily template. Instances carry the
//! target date and their completion from the ledger; the template itself is
//! never altered.

use super::ledger::CompletionLedger;
use super::task::Task;
use super::task_ref::{InstanceKey, TaskRef};
use chrono::NaiveDate;

/// A task as it appears on a particular date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub task_ref: TaskRef,
    /// Template fields, with `date` and `completed` overridden for instances
    pub task: Task,
}

impl Occurrence {
    /// A stored task shown as-is
    pub fn template(task: &Task) -> Self {
        Self {
            task_ref: TaskRef::Template(task.id),
            task: task.clone(),
        }
    }

    /// One dated instance of a daily template
    pub fn instance(template: &Task, date: NaiveDate, ledger: &CompletionLedger) -> Self {
        let key = InstanceKey::new(template.id, date);
        let mut task = template.clone();
        task.date = date;
        task.completed = ledger.is_completed(&key);
        Self {
            task_ref: TaskRef::Instance(key),
            task,
        }
    }

    /// Date used for grouping
    pub fn date(&self) -> NaiveDate {
        self.task.date
    }

    pub fn is_completed(&self) -> bool {
        self.task.completed
    }

    pub fn is_instance(&self) -> bool {
        matches!(self.task_ref, TaskRef::Instance(_))
    }
}

/// Everything visible on `date`, dated tasks first, then daily instances
pub fn tasks_for_date(tasks: &[Task], date: NaiveDate, ledger: &CompletionLedger) -> Vec<Occurrence> {
    let dated = tasks
        .iter()
        .filter(|t| !t.is_recurring() && t.date == date)
        .map(Occurrence::template);

    let instances = tasks
        .iter()
        .filter(|t| t.is_recurring())
        .map(|t| Occurrence::instance(t, date, ledger));

    dated.chain(instances).collect()
}
