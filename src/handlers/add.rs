//! Add handler for the task tracker server

use crate::TodoServerHandler;
use crate::todo::View;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Quick-add into a view, or onto an explicit date when `date` is given.
    ///
    /// The view decides the category; a dated add always files under daily.
    pub async fn handle_add(
        &self,
        text: String,
        view: Option<String>,
        date: Option<String>,
    ) -> McpResult<String> {
        let date = match date {
            Some(ref date_str) => Some(validation::parse_date(date_str)?),
            None => None,
        };
        let view = view.as_deref().map(View::parse).unwrap_or_default();
        let today = self.today();

        let mut app = self.lock();
        let result = match date {
            Some(date) => app.add_task_for_date(&text, date),
            None => app.add_task(&text, &view, today),
        };
        drop(app);

        match result {
            Ok(Some(task)) => Ok(format!(
                "Task created with ID: {} (category: {}, date: {})",
                task.id,
                task.category.map(|c| c.as_str()).unwrap_or("inbox"),
                task.date
            )),
            Ok(None) => Ok("No task created: text is empty".to_string()),
            Err(e) => {
                bail_public!(_, "Failed to save: {}", e);
            }
        }
    }
}
