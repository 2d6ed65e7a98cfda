/// Access guard
///
/// Gates rendering of a protected view on session state and the view's
/// role allow-list.
///
/// # State Machine
///
/// ```text
/// Loading ─(session hydrated)→ Render
///                            → RedirectToLogin     (not authenticated)
///                            → RedirectToDashboard (role not allowed)
/// ```
///
/// While the session store is still loading, the decision is `Loading`: the
/// shell renders a placeholder and performs no navigation. Decisions are
/// recomputed on every call, so a login, logout, or role change is
/// reflected the next time the shell asks.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use taskdesk_client::guard::{AccessGuard, GuardDecision};
/// use taskdesk_client::notify::RecordingNotifier;
/// use taskdesk_client::routes::Route;
/// use taskdesk_client::session::SessionStore;
/// use taskdesk_client::storage::MemoryStorage;
/// use taskdesk_shared::auth::CredentialTable;
///
/// # fn main() -> anyhow::Result<()> {
/// let session = Arc::new(SessionStore::new(
///     CredentialTable::demo(),
///     Arc::new(MemoryStorage::new()),
///     Arc::new(RecordingNotifier::new()),
///     Duration::ZERO,
/// ));
/// session.hydrate()?;
///
/// let guard = AccessGuard::new(session);
/// let decision = guard.evaluate(&Route::Dashboard);
/// assert!(matches!(decision, GuardDecision::RedirectToLogin { .. }));
/// # Ok(())
/// # }
/// ```
use std::sync::Arc;

use taskdesk_shared::auth::authorization::is_authorized;

use crate::routes::Route;
use crate::session::SessionStore;

/// Outcome of guarding one route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still in flight; render a placeholder, do not navigate
    Loading,

    /// Render the protected subtree unmodified
    Render,

    /// Not authenticated; go to login, remembering where we came from
    RedirectToLogin {
        /// Route to return to after a successful login
        return_to: Route,
    },

    /// Authenticated but role not in the route's allow-list
    RedirectToDashboard {
        /// Advisory message for the user
        notice: String,
    },
}

/// The access guard
pub struct AccessGuard {
    session: Arc<SessionStore>,
}

impl AccessGuard {
    /// Creates a guard over the given session store
    pub fn new(session: Arc<SessionStore>) -> Self {
        AccessGuard { session }
    }

    /// Decides whether the given route may render right now
    ///
    /// Public routes always render. For protected routes the decision
    /// follows the state machine above.
    pub fn evaluate(&self, route: &Route) -> GuardDecision {
        if route.is_public() {
            return GuardDecision::Render;
        }
        if self.session.is_loading() {
            return GuardDecision::Loading;
        }

        let Some(user) = self.session.current_user() else {
            tracing::debug!(route = %route, "unauthenticated, redirecting to login");
            return GuardDecision::RedirectToLogin {
                return_to: route.clone(),
            };
        };

        let allowed = route.required_roles();
        if !is_authorized(&user, allowed) {
            tracing::debug!(route = %route, role = ?user.role, "role not allowed");
            return GuardDecision::RedirectToDashboard {
                notice: "You don't have permission to access this page".to_string(),
            };
        }

        GuardDecision::Render
    }
}
