//! Delete handler for the task tracker server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    pub async fn handle_delete(&self, id: String) -> McpResult<String> {
        let id = validation::parse_task_id(&id)?;

        let result = self.lock().delete_task(id);
        match result {
            Ok(Some(task)) => Ok(format!("Deleted task {}: {}", task.id, task.text)),
            Ok(None) => {
                bail_public!(_, "Task '{}' not found", id);
            }
            Err(e) => {
                bail_public!(_, "Failed to save: {}", e);
            }
        }
    }
}
