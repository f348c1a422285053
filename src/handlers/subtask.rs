//! Subtask handlers for the task tracker server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    pub async fn handle_add_subtask(&self, task_id: String, text: String) -> McpResult<String> {
        let task_id = validation::parse_task_id(&task_id)?;

        let mut app = self.lock();
        if app.task(task_id).is_none() {
            drop(app);
            bail_public!(_, "Task '{}' not found", task_id);
        }
        let result = app.add_subtask(task_id, &text);
        drop(app);

        match result {
            Ok(Some(subtask)) => Ok(format!(
                "Subtask created with ID: {} (task: {})",
                subtask.id, task_id
            )),
            Ok(None) => Ok("No subtask created: text is empty".to_string()),
            Err(e) => {
                bail_public!(_, "Failed to save: {}", e);
            }
        }
    }

    pub async fn handle_toggle_subtask(
        &self,
        task_id: String,
        subtask_id: String,
        completed: Option<bool>,
    ) -> McpResult<String> {
        let task_id = validation::parse_task_id(&task_id)?;
        let subtask_id = validation::parse_subtask_id(&subtask_id)?;
        let completed = completed.unwrap_or(true);

        let result = self.lock().toggle_subtask(task_id, subtask_id, completed);
        match result {
            Ok(true) => Ok(format!(
                "Subtask {} of task {} marked {}",
                subtask_id,
                task_id,
                if completed { "completed" } else { "open" }
            )),
            Ok(false) => {
                bail_public!(_, "Subtask '{}' of task '{}' not found", subtask_id, task_id);
            }
            Err(e) => {
                bail_public!(_, "Failed to save: {}", e);
            }
        }
    }
}
