use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a template task
pub type TaskId = u64;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Category a task is filed under
///
/// A task without a category lives in the inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Study,
    Travel,
    Daily,
    Life,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Study => "study",
            Category::Travel => "travel",
            Category::Daily => "daily",
            Category::Life => "life",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Category::Work),
            "study" => Ok(Category::Study),
            "travel" => Ok(Category::Travel),
            "daily" => Ok(Category::Daily),
            "life" => Ok(Category::Life),
            _ => Err(format!(
                "Invalid category '{}'. Valid options are: work, study, travel, daily, life",
                s
            )),
        }
    }
}

/// Recurrence of a template task
///
/// Only daily recurrence exists. A daily template is never listed by date
/// itself; it produces one instance per requested date instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recurrence {
    #[default]
    #[serde(rename = "none")]
    Never,
    #[serde(rename = "daily")]
    Daily,
}

impl Recurrence {
    pub fn is_never(&self) -> bool {
        *self == Recurrence::Never
    }
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Recurrence::Daily),
            "none" | "" => Ok(Recurrence::Never),
            _ => Err(format!(
                "Invalid recurrence '{}'. Valid options are: daily, none",
                s
            )),
        }
    }
}

/// A checklist item owned by exactly one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    /// Unique among the parent's subtasks only
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// A task template as persisted in the task collection
///
/// For daily recurring tasks `completed` is not consulted by any date-based
/// view; per-date completion lives in the completion ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// `None` files the task in the inbox
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Scheduled time of day, `None` when unscheduled (persisted as "")
    #[serde(default, with = "hhmm")]
    pub time: Option<NaiveTime>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Recurrence::is_never")]
    pub recurring: Recurrence,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Create an open, unscheduled task with no subtasks
    pub fn new(id: TaskId, text: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            category: None,
            time: None,
            date,
            recurring: Recurrence::Never,
            subtasks: Vec::new(),
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.recurring == Recurrence::Daily
    }

    pub fn is_unscheduled(&self) -> bool {
        self.time.is_none()
    }

    pub fn find_subtask_mut(&mut self, id: u64) -> Option<&mut Subtask> {
        self.subtasks.iter_mut().find(|s| s.id == id)
    }

    /// Next free subtask id within this task
    pub fn next_subtask_id(&self) -> u64 {
        self.subtasks.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }
}

/// Parse an "HH:MM" time of day
pub fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
}

/// Format a time of day as "HH:MM"
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Serde adapter for the "HH:MM" / "" time field
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&super::format_time(*t)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        super::parse_time(&raw)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid time '{}': {}", raw, e)))
    }
}
