//! Per-request store session as a handler argument.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::EmployeeSession;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::ops::{Deref, DerefMut};

/// A store session acquired for the current request and released when the handler returns.
/// Acquisition failure rejects the request with 503.
pub struct Session(Box<dyn EmployeeSession>);

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = state.store.session().await?;
        tracing::trace!(path = %parts.uri.path(), "store session acquired");
        Ok(Session(session))
    }
}

impl Deref for Session {
    type Target = dyn EmployeeSession;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
    }
}
