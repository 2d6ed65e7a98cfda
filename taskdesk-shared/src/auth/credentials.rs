/// Mock credential table
///
/// This module provides the fixed credential list the session store
/// authenticates against. There is no backend: lookup is an exact
/// email+password match against in-memory entries, and passwords are held
/// in plaintext (mock data only).
///
/// The table is fixed for the lifetime of the process. Signup deliberately
/// does not insert into it, which means a signed-up account cannot log back
/// in after its session entry is cleared. That quirk is preserved from the
/// product behavior being reproduced; see DESIGN.md.
///
/// # Example
///
/// ```
/// use taskdesk_shared::auth::credentials::CredentialTable;
///
/// let table = CredentialTable::demo();
/// let user = table.authenticate("admin@example.com", "password123").unwrap();
/// assert_eq!(user.name, "Admin User");
/// assert!(table.authenticate("admin@example.com", "wrong").is_err());
/// ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::user::{User, UserRole};

/// Authentication error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email+password pair did not match any credential
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup attempted with an email that already has a credential
    #[error("An account with this email already exists")]
    DuplicateEmail,
}

/// A single credential table entry
///
/// The only place a password exists. `authenticate` hands out the embedded
/// `User`, which carries no secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// The user record returned on successful authentication
    pub user: User,

    /// Plaintext mock password
    pub password: String,
}

/// Fixed in-memory credential table
#[derive(Debug, Clone)]
pub struct CredentialTable {
    entries: Vec<Credential>,
}

impl CredentialTable {
    /// Builds a table from explicit entries
    pub fn new(entries: Vec<Credential>) -> Self {
        CredentialTable { entries }
    }

    /// The fixed demo table: one admin, one member
    pub fn demo() -> Self {
        CredentialTable::new(vec![
            Credential {
                user: User {
                    id: "1".to_string(),
                    name: "Admin User".to_string(),
                    email: "admin@example.com".to_string(),
                    role: UserRole::Admin,
                    team_role: None,
                    avatar: None,
                },
                password: "password123".to_string(),
            },
            Credential {
                user: User {
                    id: "2".to_string(),
                    name: "Team Member".to_string(),
                    email: "member@example.com".to_string(),
                    role: UserRole::Member,
                    team_role: None,
                    avatar: None,
                },
                password: "password123".to_string(),
            },
        ])
    }

    /// Authenticates by exact email+password match
    ///
    /// Returns the matching secret-free [`User`] on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when no entry matches.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let found = self
            .entries
            .iter()
            .find(|c| c.user.email == email && c.password == password);

        match found {
            Some(credential) => Ok(credential.user.clone()),
            None => {
                tracing::debug!(email, "credential lookup miss");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Checks that an email is free for signup
    ///
    /// # Errors
    ///
    /// Returns `AuthError::DuplicateEmail` when an entry already uses it.
    pub fn check_email_free(&self, email: &str) -> Result<(), AuthError> {
        if self.entries.iter().any(|c| c.user.email == email) {
            return Err(AuthError::DuplicateEmail);
        }
        Ok(())
    }
}

impl Default for CredentialTable {
    fn default() -> Self {
        CredentialTable::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_matches_every_demo_entry() {
        let table = CredentialTable::demo();

        let admin = table
            .authenticate("admin@example.com", "password123")
            .unwrap();
        assert_eq!(admin.id, "1");
        assert_eq!(admin.role, UserRole::Admin);

        let member = table
            .authenticate("member@example.com", "password123")
            .unwrap();
        assert_eq!(member.id, "2");
        assert_eq!(member.role, UserRole::Member);
    }

    #[test]
    fn test_authenticate_rejects_wrong_pairs() {
        let table = CredentialTable::demo();

        assert_eq!(
            table.authenticate("admin@example.com", "nope"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            table.authenticate("nobody@example.com", "password123"),
            Err(AuthError::InvalidCredentials)
        );
        // Right password, wrong account
        assert_eq!(
            table.authenticate("member@example.com", ""),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_authenticated_user_carries_no_secret() {
        let table = CredentialTable::demo();
        let user = table
            .authenticate("admin@example.com", "password123")
            .unwrap();

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_check_email_free() {
        let table = CredentialTable::demo();

        assert_eq!(
            table.check_email_free("admin@example.com"),
            Err(AuthError::DuplicateEmail)
        );
        assert!(table.check_email_free("new@example.com").is_ok());
    }
}
