//! # TaskDesk Client State Layer
//!
//! The in-process state layer of the TaskDesk task manager: who is logged
//! in, the task collection, and the rules for who may see and change what.
//! A presentation shell (pages, forms, toast rendering) composes over this
//! crate; none of that lives here.
//!
//! There is no backend. Authentication runs against a fixed mock credential
//! table and state is mirrored to a local string-keyed JSON store, with the
//! delays of a real backend simulated so the shell behaves realistically.
//!
//! ## Module Organization
//!
//! - `storage`: String-keyed key-value storage seam (memory and file backends)
//! - `notify`: Transient notification seam
//! - `session`: Session store (login, signup, logout, persistence)
//! - `tasks`: Task store (CRUD, queries, persistence)
//! - `routes`: Route surface and per-route role allow-lists
//! - `guard`: Access guard deciding whether a route may render
//! - `config`: Environment-driven configuration
//! - `app`: Composition root wiring the above together

pub mod app;
pub mod config;
pub mod guard;
pub mod notify;
pub mod routes;
pub mod session;
pub mod storage;
pub mod tasks;
