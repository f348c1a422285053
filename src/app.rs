//! Application state and the operations the presentation layer calls
//!
//! `App` owns the task store, the completion ledger, their storage, and the
//! detail selection. Every mutation saves the record it touched and then
//! broadcasts a [`StateChange`]; subscribers re-query views and counts, so
//! what they render is always derived from persisted state.

use crate::storage::{LoadError, Storage};
use crate::todo::{
    self, CalendarMonth, Category, CompletionLedger, Counts, Occurrence, Recurrence, Subtask,
    Task, TaskGroup, TaskId, TaskRef, TaskStore, View,
};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// A notification that stored state changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    TaskAdded(TaskId),
    TaskUpdated(TaskId),
    TaskDeleted(TaskId),
    CompletionToggled(TaskRef),
    SubtasksChanged(TaskId),
}

impl StateChange {
    /// Whether view membership, and so the badge counts, may have changed
    pub fn affects_counts(&self) -> bool {
        !matches!(self, StateChange::SubtasksChanged(_))
    }
}

/// One editable field of a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskField {
    Text(String),
    Time(Option<NaiveTime>),
    Category(Option<Category>),
    Recurring(Recurrence),
    Date(NaiveDate),
}

pub struct App {
    store: TaskStore,
    ledger: CompletionLedger,
    storage: Storage,
    selected: Option<TaskId>,
    changes: broadcast::Sender<StateChange>,
}

impl App {
    /// Load both records, substituting defaults for anything missing or unreadable
    pub fn open(storage: Storage, today: NaiveDate) -> Self {
        let tasks_path = storage.tasks_path();
        let store = match storage.load_tasks() {
            Ok(store) => {
                info!(tasks = store.len(), path = %tasks_path.display(), "loaded tasks");
                store
            }
            Err(LoadError::Missing(path)) => {
                info!(path = %path.display(), "no saved tasks, starting with examples");
                TaskStore::seeded(today)
            }
            Err(e) => {
                warn!(error = %e, "discarding saved tasks, starting with examples");
                TaskStore::seeded(today)
            }
        };

        let ledger = match storage.load_ledger() {
            Ok(ledger) => ledger,
            Err(LoadError::Missing(_)) => CompletionLedger::new(),
            Err(e) => {
                warn!(error = %e, "discarding saved completions");
                CompletionLedger::new()
            }
        };

        Self::with_state(store, ledger, storage)
    }

    /// Wrap already-loaded state
    pub fn with_state(store: TaskStore, ledger: CompletionLedger, storage: Storage) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            store,
            ledger,
            storage,
            selected: None,
            changes,
        }
    }

    /// Receive a [`StateChange`] after every persisted mutation
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.changes.subscribe()
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.store.find(id)
    }

    pub fn ledger(&self) -> &CompletionLedger {
        &self.ledger
    }

    // Queries

    pub fn filtered_grouped(&self, view: &View, today: NaiveDate) -> Vec<TaskGroup> {
        todo::view::filter(view, self.store.tasks(), &self.ledger, today)
    }

    pub fn counts(&self, today: NaiveDate) -> Counts {
        Counts::compute(self.store.tasks(), &self.ledger, today)
    }

    pub fn tasks_for_date(&self, date: NaiveDate) -> Vec<Occurrence> {
        todo::tasks_for_date(self.store.tasks(), date, &self.ledger)
    }

    pub fn calendar_month(&self, year: i32, month: u32) -> Option<CalendarMonth> {
        todo::calendar::month(self.store.tasks(), &self.ledger, year, month)
    }

    // Mutations

    /// Quick-add into the current view, dated today
    ///
    /// The category follows the view: a category view files the task there,
    /// the inbox view leaves it uncategorised, and every other view files it
    /// under daily. Recurrence is never set here.
    pub fn add_task(&mut self, text: &str, view: &View, today: NaiveDate) -> Result<Option<Task>> {
        let previous = self.store.clone();
        let Some(task) = self.store.create(text, today) else {
            debug!("ignoring add with empty text");
            return Ok(None);
        };
        task.category = match view {
            View::Category(category) => Some(*category),
            View::Inbox => None,
            _ => Some(Category::Daily),
        };
        let task = task.clone();

        self.commit_tasks(previous, StateChange::TaskAdded(task.id))?;
        info!(id = task.id, view = %view, "added task");
        Ok(Some(task))
    }

    /// Add a task on an explicit date (the calendar day-add path)
    pub fn add_task_for_date(&mut self, text: &str, date: NaiveDate) -> Result<Option<Task>> {
        let previous = self.store.clone();
        let Some(task) = self.store.create(text, date) else {
            debug!("ignoring add with empty text");
            return Ok(None);
        };
        task.category = Some(Category::Daily);
        let task = task.clone();

        self.commit_tasks(previous, StateChange::TaskAdded(task.id))?;
        info!(id = task.id, %date, "added dated task");
        Ok(Some(task))
    }

    /// Set completion of a task or of one daily instance
    ///
    /// Instances are recorded in the ledger only; their template is never
    /// touched. Returns `false` when the referenced task does not exist.
    pub fn toggle_completion(&mut self, task_ref: TaskRef, completed: bool) -> Result<bool> {
        match task_ref {
            TaskRef::Template(id) => {
                let previous = self.store.clone();
                let Some(task) = self.store.find_mut(id) else {
                    return Ok(false);
                };
                task.completed = completed;
                self.commit_tasks(previous, StateChange::CompletionToggled(task_ref))?;
            }
            TaskRef::Instance(key) => {
                if !self.store.find(key.template).is_some_and(Task::is_recurring) {
                    return Ok(false);
                }
                let mut ledger = self.ledger.clone();
                ledger.set(key, completed);
                self.storage.save_ledger(&ledger)?;
                self.ledger = ledger;
                self.notify(StateChange::CompletionToggled(task_ref));
            }
        }
        debug!(task = %task_ref, completed, "toggled completion");
        Ok(true)
    }

    /// Delete a task, clearing the selection if it pointed at it
    ///
    /// Ledger entries of a deleted daily task are left in place; nothing looks
    /// them up again.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Option<Task>> {
        let previous = self.store.clone();
        let Some(removed) = self.store.remove(id) else {
            return Ok(None);
        };
        self.commit_tasks(previous, StateChange::TaskDeleted(id))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        info!(id, "deleted task");
        Ok(Some(removed))
    }

    /// Edit one field; an empty text edit is rejected
    pub fn update_task_field(&mut self, id: TaskId, field: TaskField) -> Result<bool> {
        let previous = self.store.clone();
        let Some(task) = self.store.find_mut(id) else {
            return Ok(false);
        };
        match field {
            TaskField::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(false);
                }
                task.text = text.to_string();
            }
            TaskField::Time(time) => task.time = time,
            TaskField::Category(category) => task.category = category,
            TaskField::Recurring(recurring) => task.recurring = recurring,
            TaskField::Date(date) => task.date = date,
        }
        self.commit_tasks(previous, StateChange::TaskUpdated(id))?;
        Ok(true)
    }

    pub fn add_subtask(&mut self, task_id: TaskId, text: &str) -> Result<Option<Subtask>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let previous = self.store.clone();
        let Some(task) = self.store.find_mut(task_id) else {
            return Ok(None);
        };
        let subtask = Subtask {
            id: task.next_subtask_id(),
            text: text.to_string(),
            completed: false,
        };
        task.subtasks.push(subtask.clone());

        self.commit_tasks(previous, StateChange::SubtasksChanged(task_id))?;
        Ok(Some(subtask))
    }

    pub fn toggle_subtask(&mut self, task_id: TaskId, subtask_id: u64, completed: bool) -> Result<bool> {
        let previous = self.store.clone();
        let Some(subtask) = self
            .store
            .find_mut(task_id)
            .and_then(|t| t.find_subtask_mut(subtask_id))
        else {
            return Ok(false);
        };
        subtask.completed = completed;

        self.commit_tasks(previous, StateChange::SubtasksChanged(task_id))?;
        Ok(true)
    }

    // Detail selection

    /// Open a task in the detail view
    pub fn select(&mut self, id: TaskId) -> Option<&Task> {
        self.selected = self.store.find(id).map(|t| t.id);
        self.selected_task()
    }

    /// The task open in the detail view; a stale selection reads as none
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|id| self.store.find(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Save the store, or put `previous` back if the save fails
    fn commit_tasks(&mut self, previous: TaskStore, change: StateChange) -> Result<()> {
        if let Err(e) = self.storage.save_tasks(&self.store) {
            warn!(error = %e, "save failed, discarding change");
            self.store = previous;
            return Err(e);
        }
        self.notify(change);
        Ok(())
    }

    fn notify(&self, change: StateChange) {
        // No receivers is fine
        let _ = self.changes.send(change);
    }
}
