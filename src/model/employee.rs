//! Employee record: the persisted row, the validated create payload, and the insert-ready draft.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// A persisted employee row. `id` is assigned by the store on insert and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "employee_id": "E001",
    "name": "Alice",
    "email": "alice@x.com",
    "department": "Eng",
    "position": "SWE",
    "base_salary": 90000.0,
    "created_at": "2025-01-01T00:00:00Z",
    "updated_at": "2025-01-01T00:00:00Z"
}))]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub base_salary: Decimal,
    pub created_at: DateTime<Utc>,
    /// Set at creation; there is no update operation that would refresh it.
    pub updated_at: DateTime<Utc>,
}

/// Create payload after validation. Field presence and types are checked by
/// [`crate::service::EmployeeValidator`].
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct NewEmployee {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    #[schema(value_type = f64)]
    pub base_salary: Decimal,
}

impl NewEmployee {
    /// Stamp creation time; `created_at` and `updated_at` start equal.
    pub fn stamp(self, now: DateTime<Utc>) -> EmployeeDraft {
        EmployeeDraft {
            employee: self,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Everything an insert needs except the store-generated `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub employee: NewEmployee,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmployeeDraft {
    /// Attach a store-assigned id. Used by stores that do not round-trip through SQL.
    pub fn into_employee(self, id: i64) -> Employee {
        let NewEmployee {
            employee_id,
            name,
            email,
            department,
            position,
            base_salary,
        } = self.employee;
        Employee {
            id,
            employee_id,
            name,
            email,
            department,
            position,
            base_salary,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
