use super::task::TaskId;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Identity of one daily instance: the template it came from and its date
///
/// The string form `"<templateId>-<YYYY-MM-DD>"` is the completion ledger key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceKey {
    pub template: TaskId,
    pub date: NaiveDate,
}

impl InstanceKey {
    pub fn new(template: TaskId, date: NaiveDate) -> Self {
        Self { template, date }
    }
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.template, self.date.format("%Y-%m-%d"))
    }
}

impl FromStr for InstanceKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (template, date) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid instance key '{}'. Use <id>-YYYY-MM-DD", s))?;
        let template = template
            .parse::<TaskId>()
            .map_err(|_| format!("Invalid template id in instance key '{}'", s))?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date in instance key '{}'", s))?;
        Ok(Self { template, date })
    }
}

/// Reference to something a user can act on: a stored template or a daily instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskRef {
    Template(TaskId),
    Instance(InstanceKey),
}

impl TaskRef {
    pub fn instance(template: TaskId, date: NaiveDate) -> Self {
        TaskRef::Instance(InstanceKey::new(template, date))
    }

    /// The stored task this reference resolves through
    pub fn template_id(&self) -> TaskId {
        match self {
            TaskRef::Template(id) => *id,
            TaskRef::Instance(key) => key.template,
        }
    }
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskRef::Template(id) => write!(f, "{}", id),
            TaskRef::Instance(key) => write!(f, "{}", key),
        }
    }
}

impl FromStr for TaskRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains('-') {
            return s.parse::<InstanceKey>().map(TaskRef::Instance);
        }
        s.parse::<TaskId>()
            .map(TaskRef::Template)
            .map_err(|_| format!("Invalid task id '{}'. Use <id> or <id>-YYYY-MM-DD", s))
    }
}
