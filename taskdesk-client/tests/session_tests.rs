/// Session store integration tests
///
/// Login, signup, logout and session persistence over in-memory storage.
mod common;

use common::TestContext;
use taskdesk_client::notify::Severity;
use taskdesk_client::session::{SessionError, SESSION_STORAGE_KEY};
use taskdesk_client::storage::StoragePort;
use taskdesk_shared::auth::credentials::AuthError;
use taskdesk_shared::models::user::UserRole;

#[tokio::test]
async fn test_login_resolves_each_fixed_credential() {
    let ctx = TestContext::new();

    let admin = ctx
        .app
        .session
        .login("admin@example.com", "password123")
        .await
        .unwrap();
    assert_eq!(admin.id, "1");
    assert_eq!(admin.role, UserRole::Admin);
    assert_eq!(ctx.app.session.current_user(), Some(admin));

    let member = ctx
        .app
        .session
        .login("member@example.com", "password123")
        .await
        .unwrap();
    assert_eq!(member.id, "2");
    assert_eq!(member.role, UserRole::Member);
}

#[tokio::test]
async fn test_persisted_identity_carries_no_secret() {
    let ctx = TestContext::new();
    ctx.login_admin().await;

    let raw = ctx
        .storage
        .get(SESSION_STORAGE_KEY)
        .unwrap()
        .expect("identity persisted on login");
    assert!(raw.contains("admin@example.com"));
    assert!(!raw.contains("password"));
}

#[tokio::test]
async fn test_login_failure_leaves_identity_unchanged() {
    let ctx = TestContext::new();

    // Never logged in: stays logged out
    let err = ctx
        .app
        .session
        .login("admin@example.com", "wrong-password")
        .await;
    assert!(matches!(
        err,
        Err(SessionError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(!ctx.app.session.is_authenticated());

    // Already logged in: failed attempt does not clobber the session
    let admin = ctx.login_admin().await;
    let err = ctx.app.session.login("nobody@example.com", "password123").await;
    assert!(matches!(
        err,
        Err(SessionError::Auth(AuthError::InvalidCredentials))
    ));
    assert_eq!(ctx.app.session.current_user(), Some(admin));

    // Failure was also surfaced as a notification
    let errors: Vec<_> = ctx
        .notifier
        .delivered()
        .into_iter()
        .filter(|n| n.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|n| n.title == "Login failed"));
}

#[tokio::test]
async fn test_session_survives_reopen() {
    let ctx = TestContext::new();
    let admin = ctx.login_admin().await;

    let reopened = ctx.reopen();
    assert!(!reopened.session.is_loading());
    assert_eq!(reopened.session.current_user(), Some(admin));
}

#[tokio::test]
async fn test_signup_duplicate_email_fails() {
    let ctx = TestContext::new();

    let err = ctx
        .app
        .session
        .signup("Impostor", "admin@example.com", "password123")
        .await;
    assert!(matches!(
        err,
        Err(SessionError::Auth(AuthError::DuplicateEmail))
    ));
    assert!(!ctx.app.session.is_authenticated());
    assert!(ctx.notifier.titles().contains(&"Signup failed".to_string()));
}

#[tokio::test]
async fn test_signup_fresh_email_creates_member() {
    let ctx = TestContext::new();

    let user = ctx
        .app
        .session
        .signup("New Person", "new@example.com", "password123")
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::Member);
    assert_eq!(user.name, "New Person");
    assert!(!user.id.is_empty());
    assert_eq!(ctx.app.session.current_user(), Some(user.clone()));

    // Persisted like a login would be
    let raw = ctx.storage.get(SESSION_STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains("new@example.com"));

    // The credential table is fixed: after logout the account cannot
    // authenticate again
    ctx.app.session.logout().unwrap();
    let err = ctx.app.session.login("new@example.com", "password123").await;
    assert!(matches!(
        err,
        Err(SessionError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_logout_clears_identity_and_storage() {
    let ctx = TestContext::new();
    ctx.login_admin().await;

    ctx.app.session.logout().unwrap();

    assert!(!ctx.app.session.is_authenticated());
    assert_eq!(ctx.app.session.current_user(), None);
    assert_eq!(ctx.storage.get(SESSION_STORAGE_KEY).unwrap(), None);

    // A reopen stays logged out
    let reopened = ctx.reopen();
    assert!(!reopened.session.is_authenticated());
}

#[tokio::test]
async fn test_teardown_drops_memory_but_not_storage() {
    let ctx = TestContext::new();
    let admin = ctx.login_admin().await;

    ctx.app.teardown();
    assert!(ctx.app.session.is_loading());
    assert!(!ctx.app.session.is_authenticated());

    // Persisted session is untouched
    let reopened = ctx.reopen();
    assert_eq!(reopened.session.current_user(), Some(admin));
}
