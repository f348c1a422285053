//! Completion ledger for daily instances
//!
//! Completion of a recurring task is tracked per date, keyed by
//! [`InstanceKey`], separately from the template's own `completed` flag.
//! A missing key means "not completed".

use super::task_ref::InstanceKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionLedger {
    entries: BTreeMap<InstanceKey, bool>,
}

impl CompletionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, key: &InstanceKey) -> bool {
        self.entries.get(key).copied().unwrap_or(false)
    }

    /// Record completion for one instance
    ///
    /// Marking an instance incomplete drops its entry, which reads back the same.
    pub fn set(&mut self, key: InstanceKey, completed: bool) {
        if completed {
            self.entries.insert(key, true);
        } else {
            self.entries.remove(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// On-disk shape: `[completions]` table of "<id>-<date>" = bool
#[derive(Serialize, Deserialize, Default)]
struct LedgerFile {
    #[serde(default)]
    completions: BTreeMap<String, bool>,
}

impl Serialize for CompletionLedger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let file = LedgerFile {
            completions: self
                .entries
                .iter()
                .map(|(key, done)| (key.to_string(), *done))
                .collect(),
        };
        file.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CompletionLedger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let file = LedgerFile::deserialize(deserializer)?;
        let mut entries = BTreeMap::new();
        for (raw, done) in file.completions {
            let key = raw.parse::<InstanceKey>().map_err(serde::de::Error::custom)?;
            // Entries written by older versions may carry explicit `false`.
            if done {
                entries.insert(key, true);
            }
        }
        Ok(Self { entries })
    }
}
