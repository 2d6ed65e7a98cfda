//! Domain models
//!
//! TaskDesk has exactly two entities: users and tasks. Tasks reference users
//! by id only (weak references, no integrity enforcement).

pub mod task;
pub mod user;

pub use task::{Task, TaskDraft, TaskPatch, TaskPriority, TaskStatus};
pub use user::{User, UserRole};
