//! Calendar handler for the task tracker server

use crate::TodoServerHandler;
use crate::formatting;
use crate::validation;
use chrono::Datelike;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Renders a month grid; defaults to the month containing today.
    pub async fn handle_calendar(&self, month: Option<String>) -> McpResult<String> {
        let (year, month) = match month {
            Some(ref month_str) => validation::parse_month(month_str)?,
            None => {
                let today = self.today();
                (today.year(), today.month())
            }
        };

        let Some(grid) = self.lock().calendar_month(year, month) else {
            bail_public!(_, "Month {}-{:02} is out of range", year, month);
        };
        Ok(formatting::format_calendar(&grid))
    }
}
