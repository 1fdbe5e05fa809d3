//! PostgreSQL-backed store. One pooled connection per session.

use crate::error::AppError;
use crate::model::{Employee, EmployeeDraft};
use crate::settings::Settings;
use crate::store::{EmployeeSession, EmployeeStore};
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

const SELECT_COLUMNS: &str =
    r#"id, employee_id, name, email, department, "position", base_salary, created_at, updated_at"#;

#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool sized and timed from settings.
    pub async fn connect(settings: &Settings) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.database_max_connections)
            .acquire_timeout(settings.database_acquire_timeout)
            .connect(&settings.database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn session(&self) -> Result<Box<dyn EmployeeSession>, AppError> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(PgEmployeeSession { conn }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Dropping the session returns `conn` to the pool.
pub struct PgEmployeeSession {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl EmployeeSession for PgEmployeeSession {
    async fn list(&mut self) -> Result<Vec<Employee>, AppError> {
        let rows = sqlx::query_as::<_, Employee>(&format!("SELECT {} FROM employee ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(rows)
    }

    async fn find_by_employee_id(&mut self, employee_id: &str) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employee WHERE employee_id = $1 ORDER BY id LIMIT 1",
            SELECT_COLUMNS
        ))
        .bind(employee_id)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(row)
    }

    async fn insert(&mut self, draft: EmployeeDraft) -> Result<Employee, AppError> {
        let EmployeeDraft {
            employee,
            created_at,
            updated_at,
        } = draft;
        let row = sqlx::query_as::<_, Employee>(&format!(
            r#"INSERT INTO employee (employee_id, name, email, department, "position", base_salary, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING {}"#,
            SELECT_COLUMNS
        ))
        .bind(employee.employee_id)
        .bind(employee.name)
        .bind(employee.email)
        .bind(employee.department)
        .bind(employee.position)
        .bind(employee.base_salary)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *self.conn)
        .await?;
        tracing::debug!(id = row.id, employee_id = %row.employee_id, "employee row inserted");
        Ok(row)
    }
}
