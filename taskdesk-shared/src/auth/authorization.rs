/// Authorization rules
///
/// Pure access-decision functions over the closed role enum. No I/O, no
/// context objects: callers pass the user and the thing being gated.
///
/// # Permission Model
///
/// 1. **Route access**: a route may carry a role allow-list; an empty list
///    means any authenticated user may enter.
/// 2. **Task mutation**: a task may be edited or deleted by its creator,
///    its assignee, or any admin.
///
/// # Example
///
/// ```
/// use taskdesk_shared::auth::authorization::is_authorized;
/// use taskdesk_shared::auth::credentials::CredentialTable;
/// use taskdesk_shared::models::user::UserRole;
///
/// let member = CredentialTable::demo()
///     .authenticate("member@example.com", "password123")
///     .unwrap();
///
/// assert!(is_authorized(&member, &[]));
/// assert!(!is_authorized(&member, &[UserRole::Admin]));
/// ```
use crate::models::task::Task;
use crate::models::user::{User, UserRole};

/// Whether a user's role is acceptable for a role allow-list
///
/// An empty allow-list admits any authenticated user.
pub fn is_authorized(user: &User, allowed: &[UserRole]) -> bool {
    allowed.is_empty() || allowed.contains(&user.role)
}

/// Whether a user may edit or delete a task
///
/// Creator, assignee, or admin.
pub fn can_modify_task(user: &User, task: &Task) -> bool {
    user.is_admin() || task.involves(&user.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::seed_tasks;

    fn demo_user(email: &str) -> User {
        crate::auth::credentials::CredentialTable::demo()
            .authenticate(email, "password123")
            .unwrap()
    }

    #[test]
    fn test_empty_allow_list_admits_any_role() {
        assert!(is_authorized(&demo_user("admin@example.com"), &[]));
        assert!(is_authorized(&demo_user("member@example.com"), &[]));
    }

    #[test]
    fn test_allow_list_filters_by_role() {
        let admin = demo_user("admin@example.com");
        let member = demo_user("member@example.com");

        assert!(is_authorized(&admin, &[UserRole::Admin]));
        assert!(!is_authorized(&member, &[UserRole::Admin]));
        assert!(is_authorized(&member, &[UserRole::Admin, UserRole::Member]));
    }

    #[test]
    fn test_can_modify_task_creator_assignee_admin() {
        let admin = demo_user("admin@example.com"); // id "1"
        let member = demo_user("member@example.com"); // id "2"
        let tasks = seed_tasks();

        // Task 1: creator "1", assignee "2"
        assert!(can_modify_task(&admin, &tasks[0]));
        assert!(can_modify_task(&member, &tasks[0]));

        // Task 3: creator "1", assignee "1" — member is uninvolved
        assert!(!can_modify_task(&member, &tasks[2]));
        // ...but an admin may always modify
        assert!(can_modify_task(&admin, &tasks[2]));
    }
}
