//! Route guard: pure access decisions from session state.

use claimdesk_auth::SessionSnapshot;

use crate::routes::{Access, Route};

/// Outcome of a navigation request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The session is not restored yet; show a neutral waiting state.
    Loading,
    Render(Route),
    Redirect(Route),
}

/// Decide whether `route` may render for the given session.
///
/// Pure function of its inputs; callers must re-evaluate on every
/// navigation and on every session change.
pub fn resolve(session: &SessionSnapshot, route: Route) -> RouteOutcome {
    if route == Route::Root {
        return RouteOutcome::Redirect(Route::Login);
    }

    match route.access() {
        Access::Public => RouteOutcome::Render(route),
        access => {
            if session.loading {
                return RouteOutcome::Loading;
            }
            if !session.authenticated {
                return RouteOutcome::Redirect(Route::Login);
            }
            if access == Access::AdminOnly && !session.admin {
                return RouteOutcome::Redirect(Route::Dashboard);
            }
            RouteOutcome::Render(route)
        }
    }
}
