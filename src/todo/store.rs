use super::task::{Category, Recurrence, Subtask, Task, TaskId, parse_time};
use chrono::NaiveDate;

/// The persisted task collection
#[derive(Debug, Clone)]
pub struct TaskStore {
    /// Format version for the TOML file (current: 1)
    pub format_version: u32,

    /// All template tasks, in insertion order
    ///
    /// Insertion order is what every view falls back to for ordering, so the
    /// Vec is never re-sorted.
    pub(crate) tasks: Vec<Task>,

    /// Highest task id ever handed out
    ///
    /// Persisted so ids of deleted tasks are never reused.
    pub task_counter: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            format_version: 1,
            tasks: Vec::new(),
            task_counter: 0,
        }
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TaskStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// The example tasks a first run starts with, dated around `today`
    pub fn seeded(today: NaiveDate) -> Self {
        let tomorrow = today.succ_opt().unwrap_or(today);
        let at = |hhmm: &str| parse_time(hhmm).ok();

        let mut morning_run = Task::new(1, "Morning Run", today);
        morning_run.category = Some(Category::Daily);
        morning_run.time = at("07:00");
        morning_run.recurring = Recurrence::Daily;

        let mut interview = Task::new(2, "Interview Mr. Li", today);
        interview.category = Some(Category::Work);
        interview.time = at("09:00");

        let mut report = Task::new(3, "Prepare Work Report", today);
        report.category = Some(Category::Work);
        report.time = at("13:00");
        report.subtasks = vec![
            Subtask {
                id: 31,
                text: "Organize Documents".to_string(),
                completed: false,
            },
            Subtask {
                id: 32,
                text: "Prepare Presentation".to_string(),
                completed: false,
            },
        ];

        let mut reading = Task::new(4, "Evening Reading", today);
        reading.category = Some(Category::Life);
        reading.time = at("22:00");

        let mut emails = Task::new(5, "Check Work Emails", tomorrow);
        emails.category = Some(Category::Work);

        Self {
            format_version: 1,
            tasks: vec![morning_run, interview, report, reading, emails],
            task_counter: 5,
        }
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Generate a new unique task ID
    pub fn generate_task_id(&mut self) -> TaskId {
        self.task_counter += 1;
        self.task_counter
    }

    /// Find a task by its ID
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Find a task by its ID and return a mutable reference
    pub fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Create a task with a fresh id and append it
    ///
    /// Returns `None` without touching the store when `text` is blank.
    pub fn create(&mut self, text: &str, date: NaiveDate) -> Option<&mut Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.generate_task_id();
        self.tasks.push(Task::new(id, text, date));
        self.tasks.last_mut()
    }

    /// Remove a task and return it
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }
}
