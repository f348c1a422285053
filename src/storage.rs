//! File-backed persistence for the task collection and completion ledger
//!
//! The two records live in separate TOML files inside one data directory and
//! are loaded and saved independently. Saves go through a temp file and a
//! rename so a reader never observes a half-written record.

use crate::todo::{CompletionLedger, TaskStore};
use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TASKS_FILE: &str = "tasks.toml";
pub const LEDGER_FILE: &str = "completions.toml";

/// Why a persisted record could not be loaded
///
/// Callers substitute defaults for every variant; only the log level differs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no saved state at {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corrupt state in {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.dir.join(LEDGER_FILE)
    }

    pub fn load_tasks(&self) -> Result<TaskStore, LoadError> {
        read_record(&self.tasks_path())
    }

    pub fn save_tasks(&self, store: &TaskStore) -> Result<()> {
        write_record(&self.tasks_path(), store)
    }

    pub fn load_ledger(&self) -> Result<CompletionLedger, LoadError> {
        read_record(&self.ledger_path())
    }

    pub fn save_ledger(&self, ledger: &CompletionLedger) -> Result<()> {
        write_record(&self.ledger_path(), ledger)
    }
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::Missing(path.to_path_buf()));
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&content).map_err(|source| LoadError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

fn write_record<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;

    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, content).with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}
