use claimdesk_auth::UserProfile;

/// Client-visible routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: entry point, always redirects to the login view.
    Root,
    Login,
    Register,
    /// `/dashboard`: content depends on the caller's roles.
    Dashboard,
    /// `/admin`: reachable only with the ADMIN role.
    Admin,
}

/// Capability a route requires before it may render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    AdminOnly,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Admin => "/admin",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Root),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/dashboard" => Some(Route::Dashboard),
            "/admin" => Some(Route::Admin),
            _ => None,
        }
    }

    pub const fn access(self) -> Access {
        match self {
            Route::Root | Route::Login | Route::Register => Access::Public,
            Route::Dashboard => Access::Authenticated,
            Route::Admin => Access::AdminOnly,
        }
    }
}

/// Which dashboard the `/dashboard` route shows for a profile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DashboardKind {
    User,
    Admin,
}

impl DashboardKind {
    /// Admin content iff the role set contains ADMIN.
    pub fn for_profile(profile: &UserProfile) -> Self {
        if profile.is_admin() {
            DashboardKind::Admin
        } else {
            DashboardKind::User
        }
    }
}
