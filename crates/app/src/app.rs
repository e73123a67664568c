//! Application wiring: session, credential, and navigation lifecycle.

use chrono::{DateTime, Utc};

use claimdesk_auth::{SessionStorage, SessionStore, UserProfile};
use claimdesk_client::{BearerAuth, Credentials, ExpenseApi, NewUser};

use crate::guard::{resolve, RouteOutcome};
use crate::login::LoginFlow;
use crate::register::RegisterFlow;
use crate::routes::{DashboardKind, Route};

/// The client application.
///
/// Owns the session store, the API client (and with it the bearer
/// credential), the current route, and the auth form flows. Dashboards are
/// created per mount by the rendering layer; this type is what keeps the
/// session and credential in step.
#[derive(Debug)]
pub struct App<S, A> {
    session: SessionStore<S>,
    api: A,
    route: Route,
    pub login: LoginFlow,
    pub register: RegisterFlow,
}

impl<S, A> App<S, A>
where
    S: SessionStorage,
    A: ExpenseApi + BearerAuth,
{
    pub fn new(storage: S, api: A) -> Self {
        Self {
            session: SessionStore::new(storage),
            api,
            route: Route::Login,
            login: LoginFlow::new(),
            register: RegisterFlow::new(),
        }
    }

    /// Startup: re-establish a persisted session and re-attach its bearer
    /// credential, then re-evaluate the current route.
    pub fn restore(&mut self) -> RouteOutcome {
        self.session.restore();
        if let Some(token) = self.session.token() {
            self.api.set_bearer(token.clone());
        }
        self.navigate(self.route)
    }

    /// Apply the route guard and follow its redirect, if any.
    pub fn navigate(&mut self, route: Route) -> RouteOutcome {
        let outcome = resolve(&self.session.snapshot(), route);
        match outcome {
            RouteOutcome::Render(target) | RouteOutcome::Redirect(target) => {
                self.route = target;
            }
            RouteOutcome::Loading => {}
        }
        outcome
    }

    /// Sign in with the login form's credentials.
    ///
    /// On success the session is persisted, the bearer credential attached,
    /// and navigation moves to the dashboard.
    pub async fn sign_in(&mut self, now: DateTime<Utc>) -> bool {
        if self.login.in_flight {
            return false;
        }

        let credentials = Credentials {
            email: self.login.email.trim().to_string(),
            password: self.login.password.clone(),
        };

        self.login.in_flight = true;
        let result = self.api.login(&credentials).await;
        self.login.in_flight = false;

        match result {
            Ok(response) => {
                self.api.set_bearer(response.token.clone());
                self.session.login(response.profile, response.token);
                self.login.reset();
                self.navigate(Route::Dashboard);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                self.login
                    .notice
                    .error(err.user_message("Invalid email or password"), now);
                false
            }
        }
    }

    /// Create an account with the registration form's fields.
    ///
    /// Success does not authenticate: the user is sent to the login view
    /// with a confirmation notice, matching the backend's
    /// register-then-login flow.
    pub async fn sign_up(&mut self, now: DateTime<Utc>) -> bool {
        if self.register.in_flight {
            return false;
        }

        let new_user = NewUser::with_default_role(
            self.register.name.trim(),
            self.register.email.trim(),
            self.register.password.clone(),
        );

        self.register.in_flight = true;
        let result = self.api.register(&new_user).await;
        self.register.in_flight = false;

        match result {
            Ok(_profile) => {
                self.register.reset();
                self.register
                    .notice
                    .success("Account created successfully! Please login.", now);
                self.navigate(Route::Login);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration failed");
                self.register
                    .notice
                    .error(err.user_message("Registration failed"), now);
                false
            }
        }
    }

    /// Drop the session, detach the credential, and return to the login
    /// view.
    pub fn sign_out(&mut self) -> RouteOutcome {
        self.session.logout();
        self.api.clear_bearer();
        self.navigate(Route::Login)
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.session.profile()
    }

    /// Which dashboard `/dashboard` shows for the signed-in user.
    pub fn dashboard_kind(&self) -> Option<DashboardKind> {
        self.profile().map(DashboardKind::for_profile)
    }
}
