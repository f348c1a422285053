//! Completion toggle handler for the task tracker server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Sets completion of a template ("3") or of one daily instance ("1-2026-10-17").
    ///
    /// Completing an instance only touches that date; the template and every
    /// other date keep their state.
    pub async fn handle_toggle(&self, id: String, completed: Option<bool>) -> McpResult<String> {
        let task_ref = validation::parse_task_ref(&id)?;
        let completed = completed.unwrap_or(true);

        let mut app = self.lock();
        match app.toggle_completion(task_ref, completed) {
            Ok(true) => {}
            Ok(false) => {
                drop(app);
                bail_public!(_, "Task '{}' not found", task_ref);
            }
            Err(e) => {
                drop(app);
                bail_public!(_, "Failed to save: {}", e);
            }
        }
        drop(app);

        Ok(format!(
            "Task {} marked {}",
            task_ref,
            if completed { "completed" } else { "open" }
        ))
    }
}
