//! Project database operations
//!
//! Creation verifies the referenced customer exists. The merge-patch
//! special-cases a `customer` field carrying a customer name, which is
//! resolved to an id before any assignment runs.

use crate::error::{Error, Result};
use crate::models::{NewProject, Project, ProjectUpdate};
use sqlx::SqlitePool;

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Project>> {
    let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(project)
}

pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Project>> {
    let projects =
        sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY id LIMIT ? OFFSET ?")
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await?;
    Ok(projects)
}

pub async fn create(pool: &SqlitePool, new: NewProject) -> Result<Project> {
    let customer = super::customers::get(pool, new.customer_id).await?;
    if customer.is_none() {
        return Err(Error::MissingReference(format!(
            "Customer with id '{}' not found",
            new.customer_id
        )));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO projects (project_name, customer_id, status, budget_total, completion_percentage, start_date)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.project_name)
    .bind(new.customer_id)
    .bind(&new.status)
    .bind(new.budget_total)
    .bind(new.completion_percentage.unwrap_or(0.0))
    .bind(new.start_date)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    get(pool, id)
        .await?
        .ok_or_else(|| Error::Internal("project row missing after insert".into()))
}

/// Apply a merge-patch
///
/// An explicit `customer_id` takes precedence over a `customer` name.
/// When only the name is supplied it is resolved first; a dangling name
/// fails the patch regardless of whether the project itself exists.
pub async fn update(pool: &SqlitePool, id: i64, patch: ProjectUpdate) -> Result<Option<Project>> {
    let resolved_customer_id = match (patch.customer_id, &patch.customer) {
        (Some(customer_id), _) => Some(customer_id),
        (None, Some(name)) => {
            let customer = super::customers::get_by_name(pool, name).await?.ok_or_else(|| {
                Error::MissingReference(format!("Customer '{}' not found", name))
            })?;
            Some(customer.id)
        }
        (None, None) => None,
    };

    let Some(mut project) = get(pool, id).await? else {
        return Ok(None);
    };

    if let Some(project_name) = patch.project_name {
        project.project_name = project_name;
    }
    if let Some(customer_id) = resolved_customer_id {
        project.customer_id = customer_id;
    }
    if let Some(status) = patch.status {
        project.status = status;
    }
    if let Some(budget_total) = patch.budget_total {
        project.budget_total = budget_total;
    }
    if let Some(start_date) = patch.start_date {
        project.start_date = start_date;
    }
    if let Some(completion_percentage) = patch.completion_percentage {
        project.completion_percentage = completion_percentage;
    }

    sqlx::query(
        r#"
        UPDATE projects
        SET project_name = ?, customer_id = ?, status = ?, budget_total = ?,
            completion_percentage = ?, budget_used = ?, budget_status = ?,
            start_date = ?, launch_date = ?
        WHERE id = ?
        "#,
    )
    .bind(&project.project_name)
    .bind(project.customer_id)
    .bind(&project.status)
    .bind(project.budget_total)
    .bind(project.completion_percentage)
    .bind(project.budget_used)
    .bind(&project.budget_status)
    .bind(project.start_date)
    .bind(project.launch_date)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(Some(project))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM projects WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
