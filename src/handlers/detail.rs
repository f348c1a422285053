//! Detail handler for the task tracker server

use crate::TodoServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Opens a task in the detail view, or shows the one already open.
    ///
    /// A selection whose task was deleted reads as no selection.
    pub async fn handle_detail(&self, id: Option<String>) -> McpResult<String> {
        let id = match id {
            Some(ref id_str) => Some(validation::parse_task_id(id_str)?),
            None => None,
        };

        let mut app = self.lock();
        let detail = match id {
            Some(id) => app.select(id).map(formatting::format_task_detail),
            None => app.selected_task().map(formatting::format_task_detail),
        };
        drop(app);

        match (detail, id) {
            (Some(detail), _) => Ok(detail),
            (None, Some(id)) => {
                bail_public!(_, "Task '{}' not found", id);
            }
            (None, None) => Ok("No task selected".to_string()),
        }
    }
}
