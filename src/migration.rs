//! Employee table DDL. Idempotent; run once at startup before serving.

use crate::error::AppError;
use sqlx::PgPool;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS employee (
        id BIGSERIAL PRIMARY KEY,
        employee_id TEXT NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        department TEXT NOT NULL,
        "position" TEXT NOT NULL,
        base_salary NUMERIC NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Lookup indexes only; neither column is unique.
const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS ix_employee_employee_id ON employee (employee_id)",
    "CREATE INDEX IF NOT EXISTS ix_employee_email ON employee (email)",
];

/// Create the `employee` table and its lookup indexes if they do not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query(CREATE_TABLE).execute(&mut *tx).await?;
    for ddl in CREATE_INDEXES {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!("employee schema ready");
    Ok(())
}
