/// Task store
///
/// Authoritative in-process collection of tasks. Seeds from storage (or the
/// fixed demo set when storage is empty) and writes the whole collection
/// back through on every mutation — synchronous with the in-memory update,
/// unbatched. Fine at mock-data scale; a real backend would replace the
/// storage port, not this store's logic.
///
/// The store holds a handle to the session store: task creation needs a
/// current identity for the creator field, and edit/delete are only allowed
/// to the task's creator, its assignee, or an admin. Lookup misses are
/// silent no-ops rather than errors.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use taskdesk_client::notify::RecordingNotifier;
/// use taskdesk_client::session::SessionStore;
/// use taskdesk_client::storage::MemoryStorage;
/// use taskdesk_client::tasks::TaskStore;
/// use taskdesk_shared::auth::CredentialTable;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let storage = Arc::new(MemoryStorage::new());
/// let notifier = Arc::new(RecordingNotifier::new());
/// let session = Arc::new(SessionStore::new(
///     CredentialTable::demo(),
///     storage.clone(),
///     notifier.clone(),
///     Duration::ZERO,
/// ));
/// session.hydrate()?;
///
/// let tasks = TaskStore::new(session, storage, notifier, Duration::ZERO);
/// tasks.hydrate()?;
/// assert_eq!(tasks.tasks().len(), 3); // demo seed
/// # Ok(())
/// # }
/// ```
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

use taskdesk_shared::auth::authorization::can_modify_task;
use taskdesk_shared::models::task::{seed_tasks, Task, TaskDraft, TaskPatch, TaskStatus};
use taskdesk_shared::models::user::User;

use crate::notify::{Notification, Notifier};
use crate::session::SessionStore;
use crate::storage::{StorageError, StoragePort};

/// Fixed storage key for the serialized task collection
pub const TASK_STORAGE_KEY: &str = "taskManagerTasks";

/// Task store error
///
/// Lookup misses are not represented here: an unknown task id makes the
/// operation a silent no-op.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Mutation attempted with nobody logged in
    #[error("You must be logged in to modify tasks")]
    Unauthenticated,

    /// Mutation attempted by a user who is neither creator, assignee, nor admin
    #[error("You are not allowed to modify this task")]
    NotAuthorized,

    /// Storage backend failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Collection could not be (de)serialized
    #[error("Task serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Per-status task counts, as shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub todo: usize,
    pub in_progress: usize,
    pub review: usize,
    pub completed: usize,
}

impl StatusSummary {
    /// Total number of tasks
    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.review + self.completed
    }
}

/// The task store
pub struct TaskStore {
    session: Arc<SessionStore>,
    storage: Arc<dyn StoragePort>,
    notifier: Arc<dyn Notifier>,
    latency: Duration,
    tasks: RwLock<Vec<Task>>,
    loading: AtomicBool,
}

impl TaskStore {
    /// Creates a task store
    ///
    /// Starts in the loading state; call [`hydrate`] before first use.
    ///
    /// [`hydrate`]: TaskStore::hydrate
    pub fn new(
        session: Arc<SessionStore>,
        storage: Arc<dyn StoragePort>,
        notifier: Arc<dyn Notifier>,
        latency: Duration,
    ) -> Self {
        TaskStore {
            session,
            storage,
            notifier,
            latency,
            tasks: RwLock::new(Vec::new()),
            loading: AtomicBool::new(true),
        }
    }

    /// Loads the persisted collection, seeding the demo set when absent
    ///
    /// A corrupt persisted collection is replaced by the seed set rather
    /// than propagated.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage backend fails or the seed cannot
    /// be written through.
    pub fn hydrate(&self) -> Result<(), TaskError> {
        let result = self.storage.get(TASK_STORAGE_KEY);
        self.loading.store(false, Ordering::SeqCst);

        let tasks = match result? {
            Some(raw) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => {
                    tracing::debug!(count = tasks.len(), "restored persisted tasks");
                    tasks
                }
                Err(e) => {
                    tracing::warn!("discarding corrupt task collection: {e}");
                    self.seed()?
                }
            },
            None => self.seed()?,
        };

        *self.tasks.write().unwrap_or_else(|e| e.into_inner()) = tasks;
        Ok(())
    }

    fn seed(&self) -> Result<Vec<Task>, TaskError> {
        let tasks = seed_tasks();
        // Seed is persisted immediately so a reload sees the same data
        let serialized = serde_json::to_string(&tasks)?;
        self.storage.set(TASK_STORAGE_KEY, &serialized)?;
        tracing::info!(count = tasks.len(), "seeded demo tasks");
        Ok(tasks)
    }

    /// Creates a task owned by the current identity
    ///
    /// Assigns a fresh time-based id, sets creator to the current user and
    /// both timestamps to now, appends, and persists. The failure is also
    /// delivered through the notifier, so shell callers may discard the
    /// returned error.
    ///
    /// # Errors
    ///
    /// - `TaskError::Unauthenticated` when nobody is logged in (the
    ///   collection is left unchanged)
    /// - `TaskError::Storage`/`Serialization` if the write-through fails
    pub async fn create_task(&self, draft: TaskDraft) -> Result<Task, TaskError> {
        tokio::time::sleep(self.latency).await;

        let Some(user) = self.session.current_user() else {
            self.notifier.notify(Notification::error(
                "Authentication required",
                "You must be logged in to create tasks",
            ));
            return Err(TaskError::Unauthenticated);
        };

        let now = Utc::now();
        let task = Task {
            id: format!("task-{}", now.timestamp_millis()),
            title: draft.title,
            description: draft.description,
            assignee: draft.assignee,
            creator: user.id,
            status: draft.status,
            priority: draft.priority,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
        };

        {
            let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
            tasks.push(task.clone());
        }
        self.persist()?;

        tracing::debug!(task_id = %task.id, "task created");
        self.notifier.notify(Notification::info(
            "Task created",
            "Your task has been created successfully",
        ));
        Ok(task)
    }

    /// Merges a partial update into the matching task
    ///
    /// Refreshes `updated_at`; every other untouched field and every other
    /// task is left exactly as it was. Returns `Ok(None)` without reporting
    /// anything when the id is unknown.
    ///
    /// # Errors
    ///
    /// - `TaskError::Unauthenticated` / `TaskError::NotAuthorized` when the
    ///   caller may not modify this task (also notified)
    /// - `TaskError::Storage`/`Serialization` if the write-through fails
    pub fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Option<Task>, TaskError> {
        let updated = {
            let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
            let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
                tracing::debug!(task_id = %id, "update ignored, no such task");
                return Ok(None);
            };

            self.check_can_modify(task)?;
            task.apply(patch);
            task.clone()
        };
        self.persist()?;

        tracing::debug!(task_id = %id, "task updated");
        self.notifier.notify(Notification::info(
            "Task updated",
            "Task has been updated successfully",
        ));
        Ok(Some(updated))
    }

    /// Removes the matching task
    ///
    /// Returns `Ok(false)` without reporting anything when the id is
    /// unknown.
    ///
    /// # Errors
    ///
    /// Same authorization and write-through failures as [`update_task`].
    ///
    /// [`update_task`]: TaskStore::update_task
    pub fn delete_task(&self, id: &str) -> Result<bool, TaskError> {
        {
            let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
            let Some(index) = tasks.iter().position(|t| t.id == id) else {
                tracing::debug!(task_id = %id, "delete ignored, no such task");
                return Ok(false);
            };

            self.check_can_modify(&tasks[index])?;
            tasks.remove(index);
        }
        self.persist()?;

        tracing::debug!(task_id = %id, "task deleted");
        self.notifier.notify(Notification::info(
            "Task deleted",
            "Task has been deleted successfully",
        ));
        Ok(true)
    }

    /// The first task with the given id, if any
    pub fn get_task_by_id(&self, id: &str) -> Option<Task> {
        self.tasks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Every task where the given user is assignee or creator
    pub fn get_user_tasks(&self, user_id: &str) -> Vec<Task> {
        self.tasks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|t| t.involves(user_id))
            .cloned()
            .collect()
    }

    /// Snapshot of the whole collection, in insertion order
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Per-status counts over the whole collection
    pub fn status_summary(&self) -> StatusSummary {
        let tasks = self.tasks.read().unwrap_or_else(|e| e.into_inner());
        let mut summary = StatusSummary::default();
        for task in tasks.iter() {
            match task.status {
                TaskStatus::Todo => summary.todo += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Review => summary.review += 1,
                TaskStatus::Completed => summary.completed += 1,
            }
        }
        summary
    }

    /// True until [`hydrate`] has completed
    ///
    /// [`hydrate`]: TaskStore::hydrate
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Drops in-memory task state without touching storage
    pub(crate) fn reset(&self) {
        self.tasks
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        self.loading.store(true, Ordering::SeqCst);
    }

    /// Store-side authorization for edit and delete
    ///
    /// The shell applies the same rule for button visibility; enforcing it
    /// here as well closes the gap where a non-UI caller could mutate any
    /// task.
    fn check_can_modify(&self, task: &Task) -> Result<User, TaskError> {
        let Some(user) = self.session.current_user() else {
            self.notifier.notify(Notification::error(
                "Authentication required",
                "You must be logged in to modify tasks",
            ));
            return Err(TaskError::Unauthenticated);
        };
        if !can_modify_task(&user, task) {
            self.notifier.notify(Notification::error(
                "Not allowed",
                "Only the creator, the assignee, or an admin can modify a task",
            ));
            return Err(TaskError::NotAuthorized);
        }
        Ok(user)
    }

    fn persist(&self) -> Result<(), TaskError> {
        let serialized = {
            let tasks = self.tasks.read().unwrap_or_else(|e| e.into_inner());
            serde_json::to_string(&*tasks)?
        };
        self.storage.set(TASK_STORAGE_KEY, &serialized)?;
        Ok(())
    }
}
