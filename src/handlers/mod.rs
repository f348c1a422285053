//! MCP tool handlers for the task tracker server
//!
//! Each handler parses its string parameters through `validation`, calls one
//! `App` operation and renders the result through `formatting`.

pub mod add;
pub mod calendar;
pub mod delete;
pub mod detail;
pub mod list;
pub mod subtask;
pub mod toggle;
pub mod update;
