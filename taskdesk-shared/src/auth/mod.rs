//! Authentication and authorization
//!
//! TaskDesk authenticates against a fixed in-memory credential table (mock
//! data, plaintext comparison — there is deliberately no real credential
//! security here) and makes access decisions with pure functions over the
//! closed [`crate::models::UserRole`] enum.

pub mod authorization;
pub mod credentials;

pub use authorization::{can_modify_task, is_authorized};
pub use credentials::{AuthError, Credential, CredentialTable};
