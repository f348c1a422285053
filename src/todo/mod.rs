//! Task scheduling and filtering model
//!
//! This module contains the core data structures and pure logic:
//! - `task`: Task, Subtask, Category, Recurrence
//! - `task_ref`: TaskRef and the instance composite key
//! - `ledger`: per-instance completion of daily tasks
//! - `store`: the persisted task collection
//! - `recurrence`: per-date expansion of daily templates
//! - `view`: view selection and grouping
//! - `counter`: badge counts derived from view selection
//! - `calendar`: month grid of per-day lists
//! - `serde_impl`: Serialization/deserialization of the task store

pub mod calendar;
mod counter;
mod ledger;
mod recurrence;
mod serde_impl;
mod store;
mod task;
mod task_ref;
pub mod view;

// Re-export all public types
pub use calendar::{CalendarDay, CalendarMonth};
pub use counter::Counts;
pub use ledger::CompletionLedger;
pub use recurrence::{Occurrence, tasks_for_date};
pub use store::TaskStore;
pub use task::{
    Category, Recurrence, Subtask, Task, TaskId, format_time, local_date_today, parse_time,
};
pub use task_ref::{InstanceKey, TaskRef};
pub use view::{GroupLabel, TaskGroup, View};
