use super::ledger::CompletionLedger;
use super::recurrence::{Occurrence, tasks_for_date};
use super::task::Task;
use chrono::{Datelike, NaiveDate};

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub occurrences: Vec<Occurrence>,
}

impl CalendarDay {
    pub fn pending(&self) -> usize {
        self.occurrences.iter().filter(|o| !o.is_completed()).count()
    }

    pub fn completed(&self) -> usize {
        self.occurrences.len() - self.pending()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// Blank cells before the 1st in a Sunday-first week row
    pub leading_days: u32,
    pub days: Vec<CalendarDay>,
}

/// Build the grid for `year`-`month`, or `None` if the month does not exist
pub fn month(tasks: &[Task], ledger: &CompletionLedger, year: i32, month: u32) -> Option<CalendarMonth> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|date| CalendarDay {
            date,
            occurrences: tasks_for_date(tasks, date, ledger),
        })
        .collect();

    Some(CalendarMonth {
        year,
        month,
        leading_days: first.weekday().num_days_from_sunday(),
        days,
    })
}
