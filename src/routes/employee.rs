//! Employee routes under `{prefix}/employees`.

use crate::handlers::employee::{create_employee, get_employee, list_employees};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn employee_routes(prefix: &str, state: AppState) -> Router {
    let collection = get(list_employees).post(create_employee);
    Router::new()
        .route(&format!("{}/employees/", prefix), collection.clone())
        .route(&format!("{}/employees", prefix), collection)
        .route(&format!("{}/employees/:employee_id", prefix), get(get_employee))
        .with_state(state)
}
