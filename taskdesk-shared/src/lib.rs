//! # TaskDesk Shared Library
//!
//! This crate contains the domain types and authentication logic shared by
//! the TaskDesk client state layer and any presentation surface composed on
//! top of it.
//!
//! ## Module Organization
//!
//! - `models`: User and task data structures
//! - `auth`: Mock credential table and authorization rules

pub mod auth;
pub mod models;

/// Current version of the TaskDesk shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
