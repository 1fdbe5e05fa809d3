//! PayrollMaster API: employee payroll records over HTTP, backed by PostgreSQL.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{AppError, ConfigError, FieldError};
pub use migration::ensure_schema;
pub use model::{Employee, EmployeeDraft, NewEmployee};
pub use routes::{common_routes, employee_routes};
pub use settings::Settings;
pub use state::AppState;
pub use store::{EmployeeSession, EmployeeStore, MemoryEmployeeStore, PgEmployeeStore};

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

/// Largest accepted request body. Employee payloads are a few hundred bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application router: common routes plus employee routes under the configured prefix.
pub fn app(state: AppState) -> Router {
    let prefix = state.settings.api_prefix.clone();
    Router::new()
        .merge(common_routes(&prefix, state.clone()))
        .merge(employee_routes(&prefix, state))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
