//! Employee handlers: list, get by business id, create.

use crate::error::{AppError, FieldError};
use crate::extractors::Session;
use crate::model::{Employee, NewEmployee};
use crate::service::EmployeeValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::Value;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

#[utoipa::path(
    get,
    path = "/api/v1/employees/",
    tag = "employees",
    responses(
        (status = 200, description = "All employees ordered by id", body = [Employee]),
        (status = 503, description = "Store unavailable"),
    )
)]
pub async fn list_employees(mut session: Session) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = session.list().await?;
    tracing::debug!(count = employees.len(), "listed employees");
    Ok(Json(employees))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}",
    tag = "employees",
    params(("employee_id" = String, Path, description = "Business employee identifier")),
    responses(
        (status = 200, description = "Matching employee", body = Employee),
        (status = 404, description = "No employee with this id"),
    )
)]
pub async fn get_employee(
    mut session: Session,
    Path(employee_id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    let employee = session
        .find_by_employee_id(&employee_id)
        .await?
        .ok_or(AppError::NotFound(EMPLOYEE_NOT_FOUND))?;
    Ok(Json(employee))
}

#[utoipa::path(
    post,
    path = "/api/v1/employees/",
    tag = "employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Created employee with generated id and timestamps", body = Employee),
        (status = 413, description = "Body larger than the accepted limit"),
        (status = 422, description = "Missing or mistyped fields"),
        (status = 503, description = "Store unavailable"),
    )
)]
/// The store session is acquired only once the payload has been read and validated.
pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let Json(body) = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::Validation(vec![FieldError::whole_body("json_invalid", rejection.body_text())])
        }
    })?;
    let new_employee = EmployeeValidator::parse(body)?;
    let mut session = state.store.session().await?;
    let employee = session.insert(new_employee.stamp(Utc::now())).await?;
    tracing::info!(id = employee.id, employee_id = %employee.employee_id, "employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}
