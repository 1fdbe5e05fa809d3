//! OpenAPI document served at `/openapi.json` and rendered at `/docs` and `/redoc`.

use crate::handlers::employee;
use crate::model::{Employee, NewEmployee};
use crate::routes::common::{self, ApiInfoBody, HealthBody, ReadyBody, RootBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "PayrollMaster API", description = "Employee payroll records"),
    paths(
        common::root,
        common::health,
        common::api_info,
        common::ready,
        employee::list_employees,
        employee::get_employee,
        employee::create_employee
    ),
    components(schemas(Employee, NewEmployee, RootBody, HealthBody, ApiInfoBody, ReadyBody)),
    tags(
        (name = "employees", description = "Employee records"),
        (name = "meta", description = "Service info, liveness and readiness")
    )
)]
pub struct ApiDoc;
