//! List handlers: grouped views, single days and badge counts

use crate::TodoServerHandler;
use crate::formatting;
use crate::todo::View;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Renders one view, grouped by Today/Tomorrow/Next 7 Days.
    pub async fn handle_list(&self, view: Option<String>, date: Option<String>) -> McpResult<String> {
        let view = view.as_deref().map(View::parse).unwrap_or_default();
        let today = match date {
            Some(ref date_str) => validation::parse_date(date_str)?,
            None => self.today(),
        };

        let app = self.lock();
        let groups = app.filtered_grouped(&view, today);
        drop(app);

        Ok(formatting::format_groups(&view, &groups))
    }

    /// Renders every task falling on one date, daily instances included.
    pub async fn handle_day(&self, date: Option<String>) -> McpResult<String> {
        let date = match date {
            Some(ref date_str) => validation::parse_date(date_str)?,
            None => self.today(),
        };

        let occurrences = self.lock().tasks_for_date(date);
        Ok(formatting::format_day(date, &occurrences))
    }

    pub async fn handle_counts(&self) -> McpResult<String> {
        let counts = self.lock().counts(self.today());
        Ok(formatting::format_counts(&counts))
    }
}
