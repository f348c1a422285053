//! Validation helper functions for the MCP tool parameters
//!
//! Tool parameters arrive as strings. This module turns them into core types
//! once, at the boundary, and reports bad input as INVALID_PARAMS.

use crate::app::TaskField;
use crate::todo::{Category, Recurrence, TaskId, TaskRef, parse_time};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse a date parameter in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        invalid_params(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2026-10-17')",
            date_str
        ))
    })
}

/// Parse a calendar month parameter in YYYY-MM format
pub fn parse_month(month_str: &str) -> McpResult<(i32, u32)> {
    let invalid = || {
        invalid_params(format!(
            "Invalid month '{}'. Use YYYY-MM (e.g., '2026-10')",
            month_str
        ))
    };
    let (year, month) = month_str.trim().split_once('-').ok_or_else(invalid)?;
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

/// Parse a template task id
pub fn parse_task_id(id_str: &str) -> McpResult<TaskId> {
    id_str
        .trim()
        .parse::<TaskId>()
        .map_err(|_| invalid_params(format!("Invalid task id '{}'. Use a number", id_str)))
}

/// Parse a subtask id
pub fn parse_subtask_id(id_str: &str) -> McpResult<u64> {
    id_str
        .trim()
        .parse::<u64>()
        .map_err(|_| invalid_params(format!("Invalid subtask id '{}'. Use a number", id_str)))
}

/// Parse a task or instance reference ("3" or "1-2026-10-17")
pub fn parse_task_ref(ref_str: &str) -> McpResult<TaskRef> {
    ref_str.parse::<TaskRef>().map_err(invalid_params)
}

/// Parse a category parameter; "" and "inbox" mean no category
pub fn parse_category(category_str: &str) -> McpResult<Option<Category>> {
    match category_str.trim() {
        "" | "inbox" => Ok(None),
        other => other.parse::<Category>().map(Some).map_err(invalid_params),
    }
}

/// Build a field edit from a field name and its new value
///
/// Empty values clear `time` and `category`.
pub fn parse_field(field: &str, value: &str) -> McpResult<TaskField> {
    match field.trim() {
        "text" => Ok(TaskField::Text(value.to_string())),
        "time" => {
            if value.trim().is_empty() {
                return Ok(TaskField::Time(None));
            }
            parse_time(value).map(|t| TaskField::Time(Some(t))).map_err(|_| {
                invalid_params(format!("Invalid time '{}'. Use HH:MM (e.g., '09:30')", value))
            })
        }
        "category" => parse_category(value).map(TaskField::Category),
        "recurring" => value
            .trim()
            .parse::<Recurrence>()
            .map(TaskField::Recurring)
            .map_err(invalid_params),
        "date" => parse_date(value).map(TaskField::Date),
        other => Err(invalid_params(format!(
            "Invalid field '{}'. Valid fields: text, time, category, recurring, date",
            other
        ))),
    }
}
