//! Shared test fixtures
//!
//! Builds a fully wired state layer over in-memory storage with a
//! recording notification sink and zero simulated latency. Not every test
//! binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use taskdesk_client::app::App;
use taskdesk_client::notify::RecordingNotifier;
use taskdesk_client::storage::MemoryStorage;
use taskdesk_shared::models::user::User;

pub struct TestContext {
    pub app: App,
    pub storage: Arc<MemoryStorage>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestContext {
    pub fn new() -> Self {
        let storage = Arc::new(MemoryStorage::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let app = App::new(storage.clone(), notifier.clone(), Duration::ZERO)
            .expect("in-memory hydration cannot fail");
        TestContext {
            app,
            storage,
            notifier,
        }
    }

    /// Reopens a fresh `App` over the same storage, as a process restart would
    pub fn reopen(&self) -> App {
        App::new(self.storage.clone(), self.notifier.clone(), Duration::ZERO)
            .expect("in-memory hydration cannot fail")
    }

    pub async fn login_admin(&self) -> User {
        self.app
            .session
            .login("admin@example.com", "password123")
            .await
            .expect("demo admin credentials are valid")
    }

    pub async fn login_member(&self) -> User {
        self.app
            .session
            .login("member@example.com", "password123")
            .await
            .expect("demo member credentials are valid")
    }
}
