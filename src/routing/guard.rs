//! Access decisions for a requested path

use super::navigation::home_for;
use super::routes::Route;
use crate::models::User;
use tracing::debug;

/// Upper bound on redirects followed by a navigation
pub const MAX_REDIRECTS: usize = 4;

/// Result of guarding one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The current user is still being fetched
    Loading,
    Render(Route),
    Redirect(Route),
    NotFound,
}

/// Authentication state the guard decides on
#[derive(Debug, Clone, Copy)]
pub enum Access<'a> {
    Loading,
    Anonymous,
    User(&'a User),
}

impl<'a> Access<'a> {
    pub fn new(loading: bool, user: Option<&'a User>) -> Self {
        match (loading, user) {
            (true, _) => Access::Loading,
            (false, Some(user)) => Access::User(user),
            (false, None) => Access::Anonymous,
        }
    }
}

/// Decide what happens when `path` is requested
pub fn resolve(path: &str, access: Access<'_>) -> GuardOutcome {
    let Some(route) = Route::parse(path) else {
        debug!("No route for {}", path);
        return GuardOutcome::NotFound;
    };

    // login and signup never wait for the user lookup
    let user = match access {
        Access::Loading if route.is_public() => return GuardOutcome::Render(route),
        Access::Loading => return GuardOutcome::Loading,
        Access::Anonymous => None,
        Access::User(user) => Some(user),
    };

    if route.is_public() {
        return match user {
            Some(_) => GuardOutcome::Redirect(Route::Dashboard),
            None => GuardOutcome::Render(route),
        };
    }

    let Some(user) = user else {
        return GuardOutcome::Redirect(Route::Login);
    };

    if !route.allows(user.role) {
        debug!("Role {} may not open {}", user.role, route);
        return GuardOutcome::Redirect(Route::Dashboard);
    }

    match route {
        Route::Root => GuardOutcome::Redirect(Route::Dashboard),
        Route::Dashboard => GuardOutcome::Redirect(home_for(user.role)),
        route => GuardOutcome::Render(route),
    }
}
