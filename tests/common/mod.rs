//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;
use todo_mcp::{App, Storage, TodoServerHandler};

/// The fixed reference date every suite runs against
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Open an app over a fresh data directory (seeded with the example tasks)
pub fn open_app() -> (App, TempDir) {
    let dir = TempDir::new().unwrap();
    let app = App::open(Storage::new(dir.path()), today());
    (app, dir)
}

/// Open a second app over the same directory, as a restart would
pub fn reopen(dir: &TempDir) -> App {
    App::open(Storage::new(dir.path()), today())
}

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (TodoServerHandler, TempDir) {
    let dir = TempDir::new().unwrap();
    let handler = TodoServerHandler::new(dir.path(), Some(today()));
    (handler, dir)
}

/// Extract the task ID from an add response
/// Response format: "Task created with ID: <id> (category: ..., date: ...)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}
