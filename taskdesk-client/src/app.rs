/// Composition root
///
/// Wires one storage backend and one notification sink into the two stores
/// and the access guard, and hydrates everything in order. The shell holds
/// one `App` and passes the store handles down; nothing in this crate is a
/// process-wide global, so tests build as many isolated `App`s as they
/// like.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use taskdesk_client::app::App;
/// use taskdesk_client::notify::RecordingNotifier;
/// use taskdesk_client::storage::MemoryStorage;
///
/// # fn main() -> anyhow::Result<()> {
/// let app = App::new(
///     Arc::new(MemoryStorage::new()),
///     Arc::new(RecordingNotifier::new()),
///     Duration::ZERO,
/// )?;
/// assert!(!app.session.is_authenticated());
/// assert_eq!(app.tasks.tasks().len(), 3);
/// # Ok(())
/// # }
/// ```
use std::sync::Arc;
use std::time::Duration;

use taskdesk_shared::auth::CredentialTable;

use crate::guard::AccessGuard;
use crate::notify::Notifier;
use crate::session::SessionStore;
use crate::storage::StoragePort;
use crate::tasks::TaskStore;

/// The wired application state layer
pub struct App {
    /// Session store handle
    pub session: Arc<SessionStore>,

    /// Task store handle
    pub tasks: Arc<TaskStore>,

    /// Route guard over the session store
    pub guard: AccessGuard,
}

impl App {
    /// Builds and hydrates the state layer
    ///
    /// Both stores share the storage backend (disjoint keys) and the
    /// notification sink. Hydration is synchronous: when this returns, any
    /// persisted session and task collection have been restored.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage backend fails during hydration.
    pub fn new(
        storage: Arc<dyn StoragePort>,
        notifier: Arc<dyn Notifier>,
        latency: Duration,
    ) -> anyhow::Result<Self> {
        let session = Arc::new(SessionStore::new(
            CredentialTable::demo(),
            storage.clone(),
            notifier.clone(),
            latency,
        ));
        session.hydrate()?;

        let tasks = Arc::new(TaskStore::new(
            session.clone(),
            storage,
            notifier,
            latency,
        ));
        tasks.hydrate()?;

        let guard = AccessGuard::new(session.clone());

        Ok(App {
            session,
            tasks,
            guard,
        })
    }

    /// Drops all in-memory state without touching storage
    ///
    /// After teardown the stores read as loading again; a fresh `App` over
    /// the same storage resumes from the persisted data.
    pub fn teardown(&self) {
        self.tasks.reset();
        self.session.reset();
    }
}
