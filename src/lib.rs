//! Task Tracker MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a personal
//! task tracker with categories, subtasks and daily recurring tasks.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Application Layer**: `app` module - State, mutations and change notifications
//! - **Domain Layer**: `todo` module - Tasks, daily instances, views, counts and calendar
//! - **Persistence Layer**: `storage` module - File-based TOML storage
//!
//! # Example
//!
//! ```no_run
//! use todo_mcp::TodoServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::new("todo-data", None);
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod formatting;
mod handlers;
pub mod storage;
pub mod todo;
pub mod validation;

use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;

// Re-export commonly used types
pub use app::{App, StateChange, TaskField};
pub use storage::Storage;
pub use todo::{Category, Task, TaskId, TaskRef, View};

/// MCP Server handler for the task tracker
///
/// Wraps one [`App`]. Every change is persisted to the data directory before
/// the tool returns.
pub struct TodoServerHandler {
    pub(crate) app: Mutex<App>,
    today: Option<NaiveDate>,
}

impl TodoServerHandler {
    /// Create a handler over a data directory
    ///
    /// # Arguments
    /// * `data_dir` - Directory holding `tasks.toml` and `completions.toml`
    /// * `today` - Fixed reference date; the local date is used when `None`
    ///
    /// Missing or unreadable state never fails: the example tasks are loaded
    /// instead.
    pub fn new(data_dir: impl AsRef<Path>, today: Option<NaiveDate>) -> Self {
        let app = App::open(Storage::new(data_dir), Self::reference_date(today));
        Self {
            app: Mutex::new(app),
            today,
        }
    }

    /// Receive a notification after every persisted change
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.lock().subscribe()
    }

    /// The reference date views and counts are computed against
    pub fn today(&self) -> NaiveDate {
        Self::reference_date(self.today)
    }

    fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
        today.unwrap_or_else(todo::local_date_today)
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, App> {
        self.app.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Personal task tracker with categories, subtasks and daily recurring tasks.
///
/// Key concepts:
/// - **Categories**: work, study, travel, daily, life; tasks without one are in the inbox
/// - **Daily tasks**: a recurring template shows up on every date as its own
///   instance with an id like `1-2026-10-17`; completing it only affects that date
/// - **Views**: today, next7days (default), completed, unscheduled, daily,
///   inbox, work, study, travel, life
///
/// Task IDs are numbers: 1, 2, 3
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Review**: Show one view grouped into Today, Tomorrow and Next 7 Days.
    /// **Views**: today/next7days/completed/unscheduled/daily/inbox/work/study/travel/life. Empty=next7days.
    #[tool]
    async fn list(
        &self,
        /// View name (optional, default next7days)
        view: Option<String>,
        /// Reference date YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(view, date).await
    }

    /// **Day**: Every task on one date, including that date's daily instances.
    #[tool]
    async fn day(
        &self,
        /// Date YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_day(date).await
    }

    /// **Calendar**: Month grid marking how many tasks are still open on each day.
    #[tool]
    async fn calendar(
        &self,
        /// Month YYYY-MM (optional, default this month)
        month: Option<String>,
    ) -> McpResult<String> {
        self.handle_calendar(month).await
    }

    /// **Counts**: Badge counts per view and category.
    #[tool]
    async fn counts(&self) -> McpResult<String> {
        self.handle_counts().await
    }

    /// **Capture**: Add a task dated today; the view picks the category.
    /// **Rules**: category view=that category, inbox=no category, any other view=daily.
    /// **Tip**: Use update with field "recurring" to make it repeat every day.
    /// **Tip**: Pass date to add onto a specific calendar day instead.
    #[tool]
    async fn add(
        &self,
        /// Task text
        text: String,
        /// View the task is added from (optional, default next7days)
        view: Option<String>,
        /// Date YYYY-MM-DD for a calendar add (optional)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_add(text, view, date).await
    }

    /// **Do**: Mark a task, or one date of a daily task, completed or open.
    #[tool]
    async fn toggle(
        &self,
        /// Task ID ("3") or daily instance ID ("1-2026-10-17")
        id: String,
        /// true=completed, false=open (optional, default true)
        completed: Option<bool>,
    ) -> McpResult<String> {
        self.handle_toggle(id, completed).await
    }

    /// **Delete**: Permanently remove a task and its subtasks.
    #[tool]
    async fn delete(
        &self,
        /// Task ID
        id: String,
    ) -> McpResult<String> {
        self.handle_delete(id).await
    }

    /// **Edit**: Change one field of a task.
    /// **Fields**: text, time (HH:MM, ""=unscheduled), category (""=inbox), recurring (none/daily), date (YYYY-MM-DD).
    #[tool]
    async fn update(
        &self,
        /// Task ID
        id: String,
        /// Field name
        field: String,
        /// New value
        value: String,
    ) -> McpResult<String> {
        self.handle_update(id, field, value).await
    }

    /// **Break down**: Add a subtask to a task.
    #[tool]
    async fn add_subtask(
        &self,
        /// Parent task ID
        task_id: String,
        /// Subtask text
        text: String,
    ) -> McpResult<String> {
        self.handle_add_subtask(task_id, text).await
    }

    /// **Do**: Mark a subtask completed or open.
    #[tool]
    async fn toggle_subtask(
        &self,
        /// Parent task ID
        task_id: String,
        /// Subtask ID
        subtask_id: String,
        /// true=completed, false=open (optional, default true)
        completed: Option<bool>,
    ) -> McpResult<String> {
        self.handle_toggle_subtask(task_id, subtask_id, completed).await
    }

    /// **Detail**: Open a task with its subtasks, or show the task already open.
    #[tool]
    async fn detail(
        &self,
        /// Task ID (optional, default the open task)
        id: Option<String>,
    ) -> McpResult<String> {
        self.handle_detail(id).await
    }
}
