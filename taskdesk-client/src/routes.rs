/// Route surface
///
/// The navigable views as a closed enum, with the role allow-list each one
/// carries. The guard consumes these; the shell maps them to whatever
/// rendering machinery it uses.
///
/// # Routes
///
/// ```text
/// /login             public
/// /signup            public
/// /dashboard         authenticated
/// /tasks             authenticated
/// /tasks/create      authenticated
/// /tasks/:id         authenticated
/// /profile           authenticated
/// /settings          admin only
/// (anything else)    not found
/// ```
use std::fmt;

use taskdesk_shared::models::user::UserRole;

/// A navigable view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    Tasks,
    TaskCreate,
    TaskDetail(String),
    Profile,
    Settings,
    NotFound,
}

impl Route {
    /// Parses a path into a route; unknown paths become `NotFound`
    pub fn parse(path: &str) -> Route {
        let path = path.trim_end_matches('/');
        match path {
            // The root view is the dashboard
            "" => Route::Dashboard,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/dashboard" => Route::Dashboard,
            "/tasks" => Route::Tasks,
            "/tasks/create" => Route::TaskCreate,
            "/profile" => Route::Profile,
            "/settings" => Route::Settings,
            _ => match path.strip_prefix("/tasks/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::TaskDetail(id.to_string())
                }
                _ => Route::NotFound,
            },
        }
    }

    /// The path this route renders at
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Tasks => "/tasks".to_string(),
            Route::TaskCreate => "/tasks/create".to_string(),
            Route::TaskDetail(id) => format!("/tasks/{id}"),
            Route::Profile => "/profile".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Whether this route is reachable without authentication
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Signup | Route::NotFound)
    }

    /// Role allow-list for this route
    ///
    /// Empty means any authenticated user.
    pub fn required_roles(&self) -> &'static [UserRole] {
        match self {
            Route::Settings => &[UserRole::Admin],
            _ => &[],
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
