//! Update handler for the task tracker server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Edits one field of a task.
    ///
    /// Fields: text, time (HH:MM, ""=unscheduled), category (""=inbox),
    /// recurring (none/daily), date (YYYY-MM-DD).
    pub async fn handle_update(&self, id: String, field: String, value: String) -> McpResult<String> {
        let id = validation::parse_task_id(&id)?;
        let task_field = validation::parse_field(&field, &value)?;

        let mut app = self.lock();
        if app.task(id).is_none() {
            drop(app);
            bail_public!(_, "Task '{}' not found", id);
        }
        let result = app.update_task_field(id, task_field);
        drop(app);

        match result {
            Ok(true) => Ok(format!("Task {} updated: {} = '{}'", id, field.trim(), value)),
            // Only an empty text edit is refused for an existing task
            Ok(false) => Ok(format!("Task {} unchanged: text is empty", id)),
            Err(e) => {
                bail_public!(_, "Failed to save: {}", e);
            }
        }
    }
}
