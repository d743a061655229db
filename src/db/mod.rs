//! Database access layer
//!
//! Pool initialization plus one module per entity kind. Table creation
//! is idempotent (`CREATE TABLE IF NOT EXISTS`) and runs at startup.

use crate::error::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

pub mod alerts;
pub mod budget_history;
pub mod customers;
pub mod employees;
pub mod project_kpis;
pub mod projects;
pub mod tasks;

/// Open (or create) the database file and ensure the schema exists
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| crate::error::Error::Internal(e.to_string()))?;
        }
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_tables(&pool).await?;

    Ok(pool)
}

/// In-memory database with the full schema, used by tests
///
/// Capped at a single connection: every connection to `sqlite::memory:`
/// is a distinct database.
pub async fn init_memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;
    create_tables(&pool).await?;

    Ok(pool)
}

/// Create all tables (idempotent, safe to call on every startup)
pub async fn create_tables(pool: &SqlitePool) -> Result<()> {
    create_customers_table(pool).await?;
    create_projects_table(pool).await?;
    create_employees_table(pool).await?;
    create_tasks_table(pool).await?;
    create_alerts_table(pool).await?;
    create_budget_history_table(pool).await?;
    create_project_kpis_table(pool).await?;
    Ok(())
}

async fn create_customers_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            contact_person TEXT,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            address TEXT,
            industry TEXT,
            priority_level INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_projects_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_name TEXT NOT NULL,
            customer_id INTEGER NOT NULL REFERENCES customers(id),
            status TEXT NOT NULL,
            budget_total REAL NOT NULL,
            completion_percentage REAL NOT NULL DEFAULT 0.0,
            budget_used REAL NOT NULL DEFAULT 0.0,
            budget_status TEXT NOT NULL DEFAULT 'OK',
            start_date TEXT NOT NULL,
            launch_date TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_employees_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            position TEXT NOT NULL,
            hire_date TEXT NOT NULL,
            status TEXT NOT NULL,
            preferences TEXT NOT NULL DEFAULT '{}'
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_tasks_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            project_id INTEGER NOT NULL REFERENCES projects(id),
            assignee_id INTEGER REFERENCES employees(id),
            due_date TEXT NOT NULL,
            status TEXT NOT NULL,
            priority TEXT NOT NULL,
            completion_date TEXT,
            reopened_count INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_alerts_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS alerts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            message TEXT NOT NULL,
            project_id INTEGER REFERENCES projects(id),
            task_id INTEGER REFERENCES tasks(id),
            alert_type TEXT NOT NULL,
            created_at TEXT NOT NULL,
            is_resolved INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_budget_history_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS budget_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL REFERENCES projects(id),
            date TEXT NOT NULL,
            amount_spent REAL NOT NULL,
            remaining_budget REAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_project_kpis_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS project_kpis (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL UNIQUE REFERENCES projects(id),
            completion_percentage REAL NOT NULL DEFAULT 0.0,
            milestone_completion REAL NOT NULL DEFAULT 0.0,
            budget_utilization REAL NOT NULL DEFAULT 0.0,
            schedule_variance REAL NOT NULL DEFAULT 0.0,
            overdue_tasks INTEGER NOT NULL DEFAULT 0,
            alert_count INTEGER NOT NULL DEFAULT 0,
            avg_task_completion_time REAL NOT NULL DEFAULT 0.0,
            employee_workload_index REAL NOT NULL DEFAULT 0.0,
            customer_priority_level INTEGER NOT NULL DEFAULT 3,
            reopened_tasks INTEGER NOT NULL DEFAULT 0,
            risk_flag INTEGER NOT NULL DEFAULT 0,
            kpi_class TEXT NOT NULL DEFAULT 'Medium'
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_database_creates_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("pmdash.db");

        let pool = init_database(&db_path).await.unwrap();
        assert!(db_path.exists());
        drop(pool);

        // Reopening an existing database must not fail
        let pool = init_database(&db_path).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced() {
        let pool = init_memory().await.unwrap();

        // budget_history requires an existing project
        let result = sqlx::query(
            "INSERT INTO budget_history (project_id, date, amount_spent, remaining_budget) VALUES (77, '2025-01-01', 1.0, 2.0)",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err());
    }
}
