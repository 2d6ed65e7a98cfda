/// Session store
///
/// Single authority for "who is logged in". Holds the current [`User`] in
/// memory, authenticates against the injected credential table, and mirrors
/// the identity to storage under a fixed key so a restart resumes the
/// session.
///
/// Operations are simulated-async: login and signup sleep for a configured
/// latency to stand in for a backend round trip. The store does not
/// serialize callers against each other; the surrounding shell is expected
/// to disable triggers while an operation is pending.
///
/// Failed operations are reported twice, deliberately: once through the
/// [`Notifier`] (so the user sees a transient message) and once as the
/// returned error (so a form can stay open and react).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use taskdesk_client::notify::RecordingNotifier;
/// use taskdesk_client::session::SessionStore;
/// use taskdesk_client::storage::MemoryStorage;
/// use taskdesk_shared::auth::CredentialTable;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let store = SessionStore::new(
///     CredentialTable::demo(),
///     Arc::new(MemoryStorage::new()),
///     Arc::new(RecordingNotifier::new()),
///     Duration::ZERO,
/// );
/// store.hydrate()?;
///
/// let user = store.login("admin@example.com", "password123").await?;
/// assert_eq!(user.name, "Admin User");
/// assert!(store.is_authenticated());
/// # Ok(())
/// # }
/// ```
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use taskdesk_shared::auth::credentials::{AuthError, CredentialTable};
use taskdesk_shared::models::user::{User, UserRole};

use crate::notify::{Notification, Notifier};
use crate::storage::{StorageError, StoragePort};

/// Fixed storage key for the serialized current identity
///
/// Absent from storage whenever nobody is logged in.
pub const SESSION_STORAGE_KEY: &str = "taskManagerUser";

/// Session store error
#[derive(Debug, Error)]
pub enum SessionError {
    /// Credential failure (invalid pair, duplicate signup email)
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Signup input failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Storage backend failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Persisted identity could not be (de)serialized
    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Signup input, validated before the credential table is consulted
#[derive(Debug, Deserialize, Validate)]
struct SignupRequest {
    /// Display name
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    name: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    email: String,

    /// Password (mock; compared in plaintext, never hashed)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    password: String,
}

/// The session store
///
/// Constructor-injected and shareable via `Arc`; interior state sits behind
/// locks so read accessors work from anywhere in the shell.
pub struct SessionStore {
    credentials: CredentialTable,
    storage: Arc<dyn StoragePort>,
    notifier: Arc<dyn Notifier>,
    latency: Duration,
    user: RwLock<Option<User>>,
    loading: AtomicBool,
}

impl SessionStore {
    /// Creates a session store
    ///
    /// The store starts in the loading state; call [`hydrate`] to restore a
    /// persisted session before first use.
    ///
    /// [`hydrate`]: SessionStore::hydrate
    pub fn new(
        credentials: CredentialTable,
        storage: Arc<dyn StoragePort>,
        notifier: Arc<dyn Notifier>,
        latency: Duration,
    ) -> Self {
        SessionStore {
            credentials,
            storage,
            notifier,
            latency,
            user: RwLock::new(None),
            loading: AtomicBool::new(true),
        }
    }

    /// Restores the persisted identity, if any
    ///
    /// Synchronous: runs to completion before the shell renders anything
    /// gated on authentication. A corrupt persisted entry is discarded
    /// rather than propagated, since there is nothing a user could do with
    /// that failure.
    ///
    /// # Errors
    ///
    /// Returns an error only when the storage backend itself fails.
    pub fn hydrate(&self) -> Result<(), SessionError> {
        let result = self.storage.get(SESSION_STORAGE_KEY);
        self.loading.store(false, Ordering::SeqCst);

        match result? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    tracing::debug!(user_id = %user.id, "restored persisted session");
                    *self.user_slot() = Some(user);
                }
                Err(e) => {
                    tracing::warn!("discarding corrupt session entry: {e}");
                    self.storage.remove(SESSION_STORAGE_KEY)?;
                }
            },
            None => tracing::debug!("no persisted session"),
        }
        Ok(())
    }

    /// Authenticates by exact email+password match
    ///
    /// On success the secret-free identity becomes current and is persisted.
    /// On failure the current identity is left unchanged, an error
    /// notification is delivered, and the error is returned to the caller.
    ///
    /// # Errors
    ///
    /// - `SessionError::Auth(AuthError::InvalidCredentials)` on a miss
    /// - `SessionError::Storage`/`Serialization` if persisting fails
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        tokio::time::sleep(self.latency).await;

        let user = match self.credentials.authenticate(email, password) {
            Ok(user) => user,
            Err(e) => {
                self.notifier
                    .notify(Notification::error("Login failed", e.to_string()));
                return Err(e.into());
            }
        };

        self.persist_and_set(user.clone())?;
        tracing::info!(user_id = %user.id, "logged in");
        self.notifier.notify(Notification::info(
            "Logged in successfully",
            format!("Welcome back, {}!", user.name),
        ));
        Ok(user)
    }

    /// Creates an account and logs it in
    ///
    /// New accounts always get the member role. The backing credential
    /// table is fixed and is not extended, so the new account cannot
    /// re-authenticate once its session entry is gone (preserved product
    /// quirk, see DESIGN.md).
    ///
    /// # Errors
    ///
    /// - `SessionError::Validation` when inputs are malformed
    /// - `SessionError::Auth(AuthError::DuplicateEmail)` when the email is taken
    /// - `SessionError::Storage`/`Serialization` if persisting fails
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, SessionError> {
        let request = SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        if let Err(e) = request.validate() {
            self.notifier
                .notify(Notification::error("Signup failed", e.to_string()));
            return Err(e.into());
        }

        tokio::time::sleep(self.latency).await;

        if let Err(e) = self.credentials.check_email_free(email) {
            self.notifier
                .notify(Notification::error("Signup failed", e.to_string()));
            return Err(e.into());
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: UserRole::Member,
            team_role: None,
            avatar: None,
        };

        self.persist_and_set(user.clone())?;
        tracing::info!(user_id = %user.id, "account created");
        self.notifier.notify(Notification::info(
            "Account created",
            format!("Welcome, {}!", user.name),
        ));
        Ok(user)
    }

    /// Clears the current identity and its persisted entry
    ///
    /// # Errors
    ///
    /// Returns an error when the storage backend fails; the in-memory
    /// identity is cleared regardless.
    pub fn logout(&self) -> Result<(), SessionError> {
        *self.user_slot() = None;
        self.storage.remove(SESSION_STORAGE_KEY)?;
        tracing::info!("logged out");
        self.notifier.notify(Notification::info(
            "Logged out",
            "You have been logged out successfully",
        ));
        Ok(())
    }

    /// The current identity, if anyone is logged in
    pub fn current_user(&self) -> Option<User> {
        self.user
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Whether somebody is logged in
    pub fn is_authenticated(&self) -> bool {
        self.user
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// True until [`hydrate`] has completed
    ///
    /// [`hydrate`]: SessionStore::hydrate
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Drops in-memory session state without touching storage
    ///
    /// Used by the composition root for teardown; a later hydrate restores
    /// whatever is persisted.
    pub(crate) fn reset(&self) {
        *self.user_slot() = None;
        self.loading.store(true, Ordering::SeqCst);
    }

    fn persist_and_set(&self, user: User) -> Result<(), SessionError> {
        let serialized = serde_json::to_string(&user)?;
        self.storage.set(SESSION_STORAGE_KEY, &serialized)?;
        *self.user_slot() = Some(user);
        Ok(())
    }

    fn user_slot(&self) -> std::sync::RwLockWriteGuard<'_, Option<User>> {
        self.user.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryStorage;

    fn store() -> SessionStore {
        SessionStore::new(
            CredentialTable::demo(),
            Arc::new(MemoryStorage::new()),
            Arc::new(RecordingNotifier::new()),
            Duration::ZERO,
        )
    }

    #[test]
    fn test_loading_until_hydrated() {
        let store = store();
        assert!(store.is_loading());
        store.hydrate().unwrap();
        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_hydrate_discards_corrupt_entry() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(SESSION_STORAGE_KEY, "not json").unwrap();

        let store = SessionStore::new(
            CredentialTable::demo(),
            storage.clone(),
            Arc::new(RecordingNotifier::new()),
            Duration::ZERO,
        );
        store.hydrate().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(storage.get(SESSION_STORAGE_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_signup_validates_inputs() {
        let store = store();
        store.hydrate().unwrap();

        let err = store.signup("Newbie", "not-an-email", "password123").await;
        assert!(matches!(err, Err(SessionError::Validation(_))));

        let err = store.signup("Newbie", "new@example.com", "short").await;
        assert!(matches!(err, Err(SessionError::Validation(_))));

        assert!(!store.is_authenticated());
    }
}
