//! `claimdesk-app` — the application shell.
//!
//! Everything a rendering layer needs to drive the expense client: routes
//! and the route guard, transient notices, the login/register/submission
//! flows, and the dashboard state containers. All state here is
//! presentation state; the backend owns the data.

pub mod admin_dashboard;
pub mod app;
pub mod guard;
pub mod login;
pub mod notice;
pub mod register;
pub mod routes;
pub mod submit;
pub mod user_dashboard;

pub use admin_dashboard::AdminDashboard;
pub use app::App;
pub use guard::{resolve, RouteOutcome};
pub use login::LoginFlow;
pub use notice::{Notice, NoticeSlot, Severity, NOTICE_TTL_SECS};
pub use register::RegisterFlow;
pub use routes::{Access, DashboardKind, Route};
pub use submit::SubmitExpenseForm;
pub use user_dashboard::UserDashboard;
