/// User model
///
/// This module provides the `User` record held by the session store and the
/// closed `UserRole` enum used for access decisions.
///
/// A `User` never carries a password: credentials live only in the mock
/// credential table (`crate::auth::credentials`), so any user value that is
/// persisted or handed to a caller is secret-free by construction.
///
/// # Persisted Layout
///
/// Users serialize as camelCase JSON, matching the blob stored under the
/// client's session storage key:
///
/// ```json
/// {
///   "id": "1",
///   "name": "Admin User",
///   "email": "admin@example.com",
///   "role": "admin",
///   "avatar": ""
/// }
/// ```
///
/// # Example
///
/// ```
/// use taskdesk_shared::models::user::{User, UserRole};
///
/// let user = User {
///     id: "1".to_string(),
///     name: "Admin User".to_string(),
///     email: "admin@example.com".to_string(),
///     role: UserRole::Admin,
///     team_role: None,
///     avatar: None,
/// };
///
/// assert!(user.is_admin());
/// ```
use serde::{Deserialize, Serialize};

/// Coarse access tier gating route and feature visibility
///
/// Roles are a closed enum: there is no duck-typed role string anywhere in
/// the system. Role is immutable after the user record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access, including the admin settings panel
    Admin,

    /// Regular team member
    Member,
}

impl UserRole {
    /// Human-readable role label
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Member => "Member",
        }
    }
}

/// The authenticated user record held by the session store
///
/// Exactly one user is "current" per session. Tasks reference users by `id`
/// only; nothing prevents a task from pointing at an id that no longer
/// resolves (see [`display_name`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user id
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address, unique within the credential table
    pub email: String,

    /// Access tier
    pub role: UserRole,

    /// Optional free-form team role tag (e.g. "Designer")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_role: Option<String>,

    /// Optional avatar reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Whether this user holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Resolves a user id to a display name, with a fallback for dangling ids
///
/// Task assignee/creator fields are weak references: a task can outlive the
/// user it points at. Callers rendering names go through this lookup so a
/// dangling id degrades to a placeholder instead of failing.
pub fn display_name(users: &[User], id: &str) -> String {
    users
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Unknown user".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> User {
        User {
            id: "2".to_string(),
            name: "Team Member".to_string(),
            email: "member@example.com".to_string(),
            role: UserRole::Member,
            team_role: None,
            avatar: None,
        }
    }

    #[test]
    fn test_role_serialization_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"admin\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Member).unwrap(),
            "\"member\""
        );
    }

    #[test]
    fn test_user_round_trip() {
        let user = member();
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_serialization_omits_empty_optionals() {
        let json = serde_json::to_string(&member()).unwrap();
        assert!(!json.contains("teamRole"));
        assert!(!json.contains("avatar"));
    }

    #[test]
    fn test_display_name_falls_back_for_dangling_id() {
        let users = vec![member()];
        assert_eq!(display_name(&users, "2"), "Team Member");
        assert_eq!(display_name(&users, "999"), "Unknown user");
    }
}
