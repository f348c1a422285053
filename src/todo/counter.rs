//! Badge counts per view
//!
//! Every count except `inbox` is the length of the corresponding view
//! selection, so counts cannot drift from what the views show.

use super::ledger::CompletionLedger;
use super::task::{Category, Task};
use super::view::{View, select};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub today: usize,
    pub next7: usize,
    pub work: usize,
    pub study: usize,
    pub travel: usize,
    pub life: usize,
    /// Open tasks without a category
    pub inbox: usize,
    pub completed: usize,
    pub unscheduled: usize,
    /// Number of daily recurring templates
    pub daily: usize,
    /// Same window as `next7`
    pub week: usize,
}

impl Counts {
    pub fn compute(tasks: &[Task], ledger: &CompletionLedger, today: NaiveDate) -> Self {
        let count = |view: View| select(&view, tasks, ledger, today).len();
        let next7 = count(View::Next7Days);

        Self {
            today: count(View::Today),
            next7,
            work: count(View::Category(Category::Work)),
            study: count(View::Category(Category::Study)),
            travel: count(View::Category(Category::Travel)),
            life: count(View::Category(Category::Life)),
            inbox: tasks
                .iter()
                .filter(|t| t.category.is_none() && !t.completed)
                .count(),
            completed: count(View::Completed),
            unscheduled: count(View::Unscheduled),
            daily: count(View::Daily),
            week: next7,
        }
    }

    /// Count-key / value pairs in display order
    pub fn entries(&self) -> [(&'static str, usize); 11] {
        [
            ("today", self.today),
            ("next7", self.next7),
            ("work", self.work),
            ("study", self.study),
            ("travel", self.travel),
            ("daily", self.daily),
            ("life", self.life),
            ("inbox", self.inbox),
            ("completed", self.completed),
            ("unscheduled", self.unscheduled),
            ("week", self.week),
        ]
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}
