//! Serialization and deserialization implementations for TaskStore
//!
//! Deserialization enforces the id invariants of the collection: ids must be
//! unique, and the persisted counter is raised to at least the largest id so
//! a hand-edited or truncated file can never cause an id to be reused.

use super::store::TaskStore;
use super::task::{Task, TaskId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

/// Helper matching the on-disk layout
#[derive(Deserialize)]
struct TaskStoreHelper {
    #[serde(default = "default_format_version")]
    format_version: u32,
    #[serde(default)]
    task_counter: TaskId,
    #[serde(default)]
    tasks: Vec<Task>,
}

fn default_format_version() -> u32 {
    1
}

impl<'de> Deserialize<'de> for TaskStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = TaskStoreHelper::deserialize(deserializer)?;

        let mut seen = HashSet::new();
        for task in &helper.tasks {
            if !seen.insert(task.id) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate task id {}",
                    task.id
                )));
            }
        }

        let max_id = helper.tasks.iter().map(|t| t.id).max().unwrap_or(0);

        Ok(TaskStore {
            format_version: helper.format_version,
            task_counter: helper.task_counter.max(max_id),
            tasks: helper.tasks,
        })
    }
}

impl Serialize for TaskStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TaskStore", 3)?;
        state.serialize_field("format_version", &self.format_version)?;
        state.serialize_field("task_counter", &self.task_counter)?;
        state.serialize_field("tasks", &self.tasks)?;
        state.end()
    }
}
