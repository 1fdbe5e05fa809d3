//! Request-scoped access to employee storage.
//!
//! An [`EmployeeStore`] hands out one [`EmployeeSession`] per request. The session owns its
//! connection and releases it when dropped, so every exit path of a handler gives it back.

pub mod memory;
pub mod postgres;

use crate::error::AppError;
use crate::model::{Employee, EmployeeDraft};
use async_trait::async_trait;

pub use memory::MemoryEmployeeStore;
pub use postgres::PgEmployeeStore;

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Acquire a session for one request. Fails with [`AppError::StoreUnavailable`] when the
    /// store cannot be reached.
    async fn session(&self) -> Result<Box<dyn EmployeeSession>, AppError>;

    /// Cheap reachability probe for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

#[async_trait]
pub trait EmployeeSession: Send {
    /// All rows, ordered by `id`.
    async fn list(&mut self) -> Result<Vec<Employee>, AppError>;

    /// First row (lowest `id`) whose `employee_id` matches.
    async fn find_by_employee_id(&mut self, employee_id: &str) -> Result<Option<Employee>, AppError>;

    /// Insert one row and return it as stored, with its generated `id`.
    async fn insert(&mut self, draft: EmployeeDraft) -> Result<Employee, AppError>;
}
