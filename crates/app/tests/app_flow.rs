//! End-to-end flows through [`App`]: session lifecycle, routing, auth.

mod common;

use claimdesk_app::{App, Route, RouteOutcome};
use claimdesk_auth::{AuthToken, InMemoryStorage, Role, Session, SessionStorage};
use claimdesk_client::{ApiError, BearerAuth, LoginResponse};

use common::{at, profile, rejection, MockApi};

fn app_with_empty_storage() -> App<InMemoryStorage, MockApi> {
    App::new(InMemoryStorage::new(), MockApi::new())
}

fn seeded_storage(roles: Vec<Role>) -> InMemoryStorage {
    InMemoryStorage::with_session(Session {
        profile: profile(1, "Alice", roles),
        token: AuthToken::new("persisted-token"),
    })
}

#[test]
fn restore_without_persisted_state_lands_on_login() {
    let mut app = app_with_empty_storage();
    let outcome = app.restore();

    assert_eq!(outcome, RouteOutcome::Render(Route::Login));
    assert!(!app.session().is_authenticated());
    assert!(!app.session().loading());
    assert!(!app.api().has_bearer());
}

#[test]
fn protected_routes_redirect_to_login_when_unauthenticated() {
    let mut app = app_with_empty_storage();
    app.restore();

    for route in [Route::Dashboard, Route::Admin] {
        assert_eq!(app.navigate(route), RouteOutcome::Redirect(Route::Login));
        assert_eq!(app.route(), Route::Login);
    }
}

#[test]
fn navigation_before_restore_yields_the_waiting_state() {
    let mut app = app_with_empty_storage();
    assert_eq!(app.navigate(Route::Dashboard), RouteOutcome::Loading);
}

#[test]
fn restore_reattaches_the_bearer_credential() {
    let mut app = App::new(seeded_storage(vec![Role::User]), MockApi::new());
    app.restore();

    assert!(app.session().is_authenticated());
    assert_eq!(
        app.api().bearer().map(AuthToken::as_str),
        Some("persisted-token")
    );
}

#[test]
fn admin_route_redirects_non_admins_to_dashboard() {
    let mut app = App::new(seeded_storage(vec![Role::User]), MockApi::new());
    app.restore();

    assert_eq!(
        app.navigate(Route::Admin),
        RouteOutcome::Redirect(Route::Dashboard)
    );
    assert_eq!(app.route(), Route::Dashboard);
}

#[test]
fn admin_route_renders_when_the_role_set_contains_admin() {
    // ADMIN in second position: containment, not position, decides.
    let mut app = App::new(seeded_storage(vec![Role::User, Role::Admin]), MockApi::new());
    app.restore();

    assert_eq!(app.navigate(Route::Admin), RouteOutcome::Render(Route::Admin));
}

#[tokio::test]
async fn sign_in_success_establishes_the_session() {
    let mut app = app_with_empty_storage();
    app.restore();
    app.api().respond_login(Ok(LoginResponse {
        profile: profile(1, "Alice", vec![Role::User]),
        token: AuthToken::new("fresh-token"),
    }));

    app.login.email = "alice@example.com".to_string();
    app.login.password = "pw".to_string();
    assert!(app.sign_in(at(0)).await);

    assert_eq!(app.route(), Route::Dashboard);
    assert!(app.session().is_authenticated());
    assert_eq!(app.api().bearer().map(AuthToken::as_str), Some("fresh-token"));
    // Session persisted for the next start.
    assert!(app.session().storage().load().is_some());
    // Credentials are not kept around after a successful sign-in.
    assert!(app.login.email.is_empty());
    assert!(app.login.password.is_empty());
}

#[tokio::test]
async fn sign_in_failure_surfaces_the_server_message() {
    let mut app = app_with_empty_storage();
    app.restore();
    app.api()
        .respond_login(Err(rejection(401, "Bad credentials")));

    app.login.email = "alice@example.com".to_string();
    app.login.password = "wrong".to_string();
    assert!(!app.sign_in(at(0)).await);

    assert!(!app.session().is_authenticated());
    assert!(!app.api().has_bearer());
    let notice = app.login.notice.peek().unwrap();
    assert_eq!(notice.message, "Bad credentials");
}

#[tokio::test]
async fn sign_in_failure_without_message_uses_the_fallback() {
    let mut app = app_with_empty_storage();
    app.restore();
    app.api()
        .respond_login(Err(ApiError::Network("connection refused".to_string())));

    app.login.email = "alice@example.com".to_string();
    assert!(!app.sign_in(at(0)).await);
    assert_eq!(
        app.login.notice.peek().unwrap().message,
        "Invalid email or password"
    );
}

#[test]
fn sign_out_clears_session_credential_and_storage() {
    let mut app = App::new(seeded_storage(vec![Role::Admin]), MockApi::new());
    app.restore();
    assert!(app.api().has_bearer());

    let outcome = app.sign_out();

    assert_eq!(outcome, RouteOutcome::Render(Route::Login));
    assert!(!app.session().is_authenticated());
    assert!(!app.api().has_bearer());
    assert!(app.session().storage().load().is_none());
}

#[tokio::test]
async fn registration_success_navigates_to_login_without_authenticating() {
    let mut app = app_with_empty_storage();
    app.restore();
    app.navigate(Route::Register);
    app.api()
        .respond_register(Ok(profile(9, "Newcomer", vec![Role::User])));

    app.register.name = "Newcomer".to_string();
    app.register.email = "newcomer@example.com".to_string();
    app.register.password = "pw".to_string();
    assert!(app.sign_up(at(0)).await);

    assert_eq!(app.route(), Route::Login);
    assert!(!app.session().is_authenticated());
    assert_eq!(
        app.register.notice.peek().unwrap().message,
        "Account created successfully! Please login."
    );
}

#[tokio::test]
async fn registration_failure_surfaces_the_server_message() {
    let mut app = app_with_empty_storage();
    app.restore();
    app.navigate(Route::Register);
    app.api()
        .respond_register(Err(rejection(409, "Email already registered")));

    app.register.email = "dup@example.com".to_string();
    assert!(!app.sign_up(at(0)).await);

    assert_eq!(app.route(), Route::Register);
    assert_eq!(
        app.register.notice.peek().unwrap().message,
        "Email already registered"
    );
}
