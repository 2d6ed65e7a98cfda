/// Task model
///
/// This module provides the `Task` record managed by the task store, plus
/// the input structs used for creation and partial update.
///
/// # Lifecycle
///
/// ```text
/// create (creator fixed, createdAt = updatedAt = now)
///   → partial updates (updatedAt refreshed each time)
///   → delete
/// ```
///
/// Invariants:
/// - `creator` is set once at creation and never changes
/// - `updated_at >= created_at`, refreshed on every mutation
/// - `assignee` may be absent (unassigned task)
///
/// # Persisted Layout
///
/// Tasks serialize as camelCase JSON, matching the array blob stored under
/// the client's task storage key:
///
/// ```json
/// {
///   "id": "1",
///   "title": "Create project plan",
///   "description": "Draft the initial project plan",
///   "assignee": "2",
///   "creator": "1",
///   "status": "todo",
///   "priority": "high",
///   "dueDate": "2023-06-30",
///   "createdAt": "2023-06-01T10:00:00Z",
///   "updatedAt": "2023-06-01T10:00:00Z"
/// }
/// ```
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Task workflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started
    Todo,

    /// Being worked on
    InProgress,

    /// Awaiting review
    Review,

    /// Done
    Completed,
}

impl TaskStatus {
    /// All states, in workflow order
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Completed,
    ];

    /// Human-readable state label
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Completed => "Completed",
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task id (time-based, assigned by the store)
    pub id: String,

    /// Short title
    pub title: String,

    /// Longer description
    pub description: String,

    /// Assigned user id, if any
    ///
    /// Weak reference: may point at a user that no longer resolves.
    pub assignee: Option<String>,

    /// User id of the creator
    ///
    /// Set once at creation, never changed afterwards.
    pub creator: String,

    /// Workflow state
    pub status: TaskStatus,

    /// Priority
    pub priority: TaskPriority,

    /// Optional due date
    pub due_date: Option<NaiveDate>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last mutated
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Merges a partial update into this task and refreshes `updated_at`
    ///
    /// Only fields present in the patch change; `id`, `creator` and
    /// `created_at` are never touched.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        self.updated_at = Utc::now();
    }

    /// Whether the given user id is this task's assignee or creator
    pub fn involves(&self, user_id: &str) -> bool {
        self.creator == user_id || self.assignee.as_deref() == Some(user_id)
    }
}

/// Input for creating a new task
///
/// Everything except the fields the store assigns itself: id, creator and
/// the two timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Short title
    pub title: String,

    /// Longer description
    pub description: String,

    /// Assigned user id, if any
    pub assignee: Option<String>,

    /// Initial workflow state
    pub status: TaskStatus,

    /// Priority
    pub priority: TaskPriority,

    /// Optional due date
    pub due_date: Option<NaiveDate>,
}

/// Partial update for an existing task
///
/// All fields are optional; only present fields are merged. The nullable
/// fields (`assignee`, `due_date`) use a double `Option` so a patch can
/// distinguish "leave unchanged" (`None`) from "clear the value"
/// (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New assignee (`Some(None)` unassigns)
    pub assignee: Option<Option<String>>,

    /// New workflow state
    pub status: Option<TaskStatus>,

    /// New priority
    pub priority: Option<TaskPriority>,

    /// New due date (`Some(None)` clears it)
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Patch that only moves the task to a new workflow state
    pub fn status(status: TaskStatus) -> Self {
        TaskPatch {
            status: Some(status),
            ..TaskPatch::default()
        }
    }
}

/// Fixed demo task set used to seed an empty store
///
/// Three tasks with ids "1" through "3", created by the demo admin and
/// spread across the workflow states.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Create project plan".to_string(),
            description: "Draft the initial project plan with milestones and deliverables"
                .to_string(),
            assignee: Some("2".to_string()),
            creator: "1".to_string(),
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            due_date: NaiveDate::from_ymd_opt(2023, 6, 30),
            created_at: Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap(),
        },
        Task {
            id: "2".to_string(),
            title: "Design user interface".to_string(),
            description: "Create mockups for the main dashboard".to_string(),
            assignee: Some("2".to_string()),
            creator: "1".to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            due_date: NaiveDate::from_ymd_opt(2023, 6, 20),
            created_at: Utc.with_ymd_and_hms(2023, 6, 2, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 6, 5, 14, 30, 0).unwrap(),
        },
        Task {
            id: "3".to_string(),
            title: "Set up development environment".to_string(),
            description: "Install and configure necessary tools and dependencies".to_string(),
            assignee: Some("1".to_string()),
            creator: "1".to_string(),
            status: TaskStatus::Completed,
            priority: TaskPriority::Low,
            due_date: NaiveDate::from_ymd_opt(2023, 6, 5),
            created_at: Utc.with_ymd_and_hms(2023, 6, 2, 11, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 6, 4, 16, 45, 0).unwrap(),
        },
    ]
}
