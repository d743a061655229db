//! Alert database operations

use crate::error::{Error, Result};
use crate::models::{Alert, AlertUpdate, NewAlert};
use sqlx::SqlitePool;

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Alert>> {
    let alert = sqlx::query_as::<_, Alert>("SELECT * FROM alerts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(alert)
}

pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Alert>> {
    let alerts = sqlx::query_as::<_, Alert>("SELECT * FROM alerts ORDER BY id LIMIT ? OFFSET ?")
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await?;
    Ok(alerts)
}

pub async fn create(pool: &SqlitePool, new: NewAlert) -> Result<Alert> {
    let result = sqlx::query(
        r#"
        INSERT INTO alerts (message, project_id, task_id, alert_type, created_at, is_resolved)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.message)
    .bind(new.project_id)
    .bind(new.task_id)
    .bind(&new.alert_type)
    .bind(new.created_at)
    .bind(new.is_resolved)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    get(pool, id)
        .await?
        .ok_or_else(|| Error::Internal("alert row missing after insert".into()))
}

/// Apply a merge-patch: only supplied fields change
pub async fn update(pool: &SqlitePool, id: i64, patch: AlertUpdate) -> Result<Option<Alert>> {
    let Some(mut alert) = get(pool, id).await? else {
        return Ok(None);
    };

    if let Some(message) = patch.message {
        alert.message = message;
    }
    if let Some(project_id) = patch.project_id {
        alert.project_id = Some(project_id);
    }
    if let Some(task_id) = patch.task_id {
        alert.task_id = Some(task_id);
    }
    if let Some(alert_type) = patch.alert_type {
        alert.alert_type = alert_type;
    }
    if let Some(created_at) = patch.created_at {
        alert.created_at = created_at;
    }
    if let Some(is_resolved) = patch.is_resolved {
        alert.is_resolved = is_resolved;
    }

    sqlx::query(
        r#"
        UPDATE alerts
        SET message = ?, project_id = ?, task_id = ?, alert_type = ?, created_at = ?, is_resolved = ?
        WHERE id = ?
        "#,
    )
    .bind(&alert.message)
    .bind(alert.project_id)
    .bind(alert.task_id)
    .bind(&alert.alert_type)
    .bind(alert.created_at)
    .bind(alert.is_resolved)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(Some(alert))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM alerts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_resolve_flag_patch() {
        let pool = init_memory().await.unwrap();
        let alert = create(
            &pool,
            NewAlert {
                message: "Budget threshold crossed".to_string(),
                project_id: None,
                task_id: None,
                alert_type: "budget".to_string(),
                created_at: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
                is_resolved: false,
            },
        )
        .await
        .unwrap();
        assert!(!alert.is_resolved);

        let patch = AlertUpdate {
            is_resolved: Some(true),
            ..Default::default()
        };
        let updated = update(&pool, alert.id, patch).await.unwrap().unwrap();
        assert!(updated.is_resolved);
        assert_eq!(updated.message, "Budget threshold crossed");
    }
}
