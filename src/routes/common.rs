//! Common routes: root info, health, API info, readiness, interactive API docs.

use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_PATH: &str = "/openapi.json";
pub const DOCS_PATH: &str = "/docs";
pub const REDOC_PATH: &str = "/redoc";

#[derive(Serialize, ToSchema)]
pub struct RootBody {
    message: &'static str,
    version: &'static str,
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct HealthBody {
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ApiInfoBody {
    message: &'static str,
    docs: &'static str,
    redoc: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

#[utoipa::path(get, path = "/", tag = "meta", responses((status = 200, body = RootBody)))]
pub async fn root() -> Json<RootBody> {
    Json(RootBody {
        message: "PayrollMaster API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

/// Liveness only: answers while the process runs, without touching the store.
#[utoipa::path(get, path = "/api/v1/health", tag = "meta", responses((status = 200, body = HealthBody)))]
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "healthy" })
}

#[utoipa::path(get, path = "/api/v1/", tag = "meta", responses((status = 200, body = ApiInfoBody)))]
pub async fn api_info() -> Json<ApiInfoBody> {
    Json(ApiInfoBody {
        message: "PayrollMaster API v1",
        docs: DOCS_PATH,
        redoc: REDOC_PATH,
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/ready",
    tag = "meta",
    responses(
        (status = 200, description = "Store reachable", body = ReadyBody),
        (status = 503, description = "Store unreachable", body = ReadyBody),
    )
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ready",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}

/// GET /, Swagger UI at /docs (serving /openapi.json), ReDoc at /redoc, and under `prefix`:
/// GET /health, GET /ready, GET / (API info).
/// With an empty prefix the API info route is dropped, since `/` already serves root info.
pub fn common_routes(prefix: &str, state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(root))
        .route(&format!("{}/health", prefix), get(health))
        .route(&format!("{}/ready", prefix), get(ready));
    if !prefix.is_empty() {
        router = router.route(&format!("{}/", prefix), get(api_info));
    }
    router
        .with_state(state)
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .merge(Redoc::with_url(REDOC_PATH, ApiDoc::openapi()))
}
