//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// One offending field in a request body. `loc` is the path to the field, e.g. `["body", "name"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    pub fn body(field: &str, kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
            kind,
        }
    }

    /// Error about the body as a whole (not valid JSON, not an object).
    pub fn whole_body(kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            kind,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("database: {0}")]
    Db(sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => AppError::StoreUnavailable(e.to_string()),
            other => AppError::Db(other),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody<T: Serialize> {
    pub detail: T,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::NotFound(message) => (status, Json(ErrorBody { detail: message })).into_response(),
            AppError::Validation(errors) => {
                tracing::debug!(count = errors.len(), "rejecting invalid payload");
                (status, Json(ErrorBody { detail: errors })).into_response()
            }
            AppError::PayloadTooLarge => (status, Json(ErrorBody { detail: "Request body too large" })).into_response(),
            AppError::StoreUnavailable(reason) => {
                tracing::error!(%reason, "store unavailable");
                (status, Json(ErrorBody { detail: "Service Unavailable" })).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (status, Json(ErrorBody { detail: "Internal Server Error" })).into_response()
            }
        }
    }
}
