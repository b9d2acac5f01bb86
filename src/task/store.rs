use chrono::Duration;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::clock::Clock;
use crate::task::models::{Survey, Task, UploadedFile};
use crate::task::TaskError;

/// Files required per task: home/tree/human triad, animal, self-portrait are
/// captured as three image uploads by the client form.
pub const REQUIRED_UPLOAD_COUNT: usize = 3;

/// Simulated processing delay before a report may be retrieved.
pub const DEFAULT_PROCESSING_WINDOW_MS: i64 = 10_000;

/// In-memory task registry. Process-lifetime only: tasks are never evicted,
/// which is acceptable because volume is operator-controlled.
pub struct TaskStore {
    tasks: RwLock<HashMap<Uuid, Task>>,
    clock: Arc<dyn Clock>,
    processing_window: Duration,
}

impl TaskStore {
    pub fn new(clock: Arc<dyn Clock>, processing_window: Duration) -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
            clock,
            processing_window,
        }
    }

    pub fn with_default_window(clock: Arc<dyn Clock>) -> Self {
        Self::new(clock, Duration::milliseconds(DEFAULT_PROCESSING_WINDOW_MS))
    }

    /// Registers a new task for exactly [`REQUIRED_UPLOAD_COUNT`] uploads.
    pub fn create(&self, files: Vec<UploadedFile>) -> Result<Uuid, TaskError> {
        if files.len() != REQUIRED_UPLOAD_COUNT {
            return Err(TaskError::InvalidUploadCount {
                expected: REQUIRED_UPLOAD_COUNT,
                actual: files.len(),
            });
        }

        let id = Uuid::new_v4();
        let task = Task {
            id,
            created_at: self.clock.now(),
            files,
            survey: None,
        };
        self.tasks.write().insert(id, task);
        Ok(id)
    }

    /// Attaches (or replaces) the survey for a task. Last write wins.
    pub fn attach_survey(&self, id: Uuid, survey: Survey) -> Result<(), TaskError> {
        let mut tasks = self.tasks.write();
        let task = tasks.get_mut(&id).ok_or(TaskError::TaskNotFound(id))?;
        task.survey = Some(survey);
        Ok(())
    }

    /// Whether the processing window has elapsed for a known task.
    pub fn is_ready(&self, id: Uuid) -> Result<bool, TaskError> {
        let tasks = self.tasks.read();
        let task = tasks.get(&id).ok_or(TaskError::TaskNotFound(id))?;
        Ok(self.clock.now() - task.created_at >= self.processing_window)
    }

    pub fn get(&self, id: Uuid) -> Result<Task, TaskError> {
        let tasks = self.tasks.read();
        tasks.get(&id).cloned().ok_or(TaskError::TaskNotFound(id))
    }

    /// Snapshot of a task that is past its processing window. The readiness
    /// check and the read happen under one lock acquisition, so a concurrent
    /// survey overwrite is never observed half-applied.
    pub fn get_ready(&self, id: Uuid) -> Result<Task, TaskError> {
        let tasks = self.tasks.read();
        let task = tasks.get(&id).ok_or(TaskError::TaskNotFound(id))?;
        if self.clock.now() - task.created_at < self.processing_window {
            return Err(TaskError::NotReady(id));
        }
        Ok(task.clone())
    }
}
