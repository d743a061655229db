//! Task database operations

use crate::error::{Error, Result};
use crate::models::{NewTask, Task, TaskUpdate};
use sqlx::SqlitePool;

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Task>> {
    let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(task)
}

pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Task>> {
    let tasks = sqlx::query_as::<_, Task>("SELECT * FROM tasks ORDER BY id LIMIT ? OFFSET ?")
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await?;
    Ok(tasks)
}

pub async fn create(pool: &SqlitePool, new: NewTask) -> Result<Task> {
    let result = sqlx::query(
        r#"
        INSERT INTO tasks (title, description, project_id, assignee_id, due_date, status, priority, completion_date, reopened_count)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.project_id)
    .bind(new.assignee_id)
    .bind(new.due_date)
    .bind(&new.status)
    .bind(&new.priority)
    .bind(new.completion_date)
    .bind(new.reopened_count)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    get(pool, id)
        .await?
        .ok_or_else(|| Error::Internal("task row missing after insert".into()))
}

/// Apply a merge-patch: only supplied fields change
pub async fn update(pool: &SqlitePool, id: i64, patch: TaskUpdate) -> Result<Option<Task>> {
    let Some(mut task) = get(pool, id).await? else {
        return Ok(None);
    };

    if let Some(title) = patch.title {
        task.title = title;
    }
    if let Some(description) = patch.description {
        task.description = Some(description);
    }
    if let Some(project_id) = patch.project_id {
        task.project_id = project_id;
    }
    if let Some(assignee_id) = patch.assignee_id {
        task.assignee_id = Some(assignee_id);
    }
    if let Some(due_date) = patch.due_date {
        task.due_date = due_date;
    }
    if let Some(status) = patch.status {
        task.status = status;
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    if let Some(completion_date) = patch.completion_date {
        task.completion_date = Some(completion_date);
    }
    if let Some(reopened_count) = patch.reopened_count {
        task.reopened_count = reopened_count;
    }

    sqlx::query(
        r#"
        UPDATE tasks
        SET title = ?, description = ?, project_id = ?, assignee_id = ?, due_date = ?,
            status = ?, priority = ?, completion_date = ?, reopened_count = ?
        WHERE id = ?
        "#,
    )
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.project_id)
    .bind(task.assignee_id)
    .bind(task.due_date)
    .bind(&task.status)
    .bind(&task.priority)
    .bind(task.completion_date)
    .bind(task.reopened_count)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(Some(task))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory;
    use crate::models::{NewCustomer, NewProject};
    use chrono::NaiveDate;

    async fn seed_project(pool: &SqlitePool) -> i64 {
        let customer = crate::db::customers::create(
            pool,
            NewCustomer {
                name: "Acme".to_string(),
                email: "office@acme.example".to_string(),
                phone: "555-0100".to_string(),
                contact_person: None,
                address: None,
                industry: None,
                priority_level: None,
            },
        )
        .await
        .unwrap();

        crate::db::projects::create(
            pool,
            NewProject {
                project_name: "Relaunch".to_string(),
                customer_id: customer.id,
                status: "active".to_string(),
                budget_total: 10000.0,
                start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
                completion_percentage: None,
            },
        )
        .await
        .unwrap()
        .id
    }

    fn sample(project_id: i64) -> NewTask {
        NewTask {
            title: "Draft landing page".to_string(),
            description: None,
            project_id,
            assignee_id: None,
            due_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            status: "open".to_string(),
            priority: "high".to_string(),
            completion_date: None,
            reopened_count: 0,
        }
    }

    #[tokio::test]
    async fn test_merge_patch_keeps_untouched_fields() {
        let pool = init_memory().await.unwrap();
        let project_id = seed_project(&pool).await;
        let task = create(&pool, sample(project_id)).await.unwrap();

        let patch = TaskUpdate {
            status: Some("done".to_string()),
            completion_date: Some(NaiveDate::from_ymd_opt(2025, 1, 28).unwrap()),
            ..Default::default()
        };
        let updated = update(&pool, task.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.status, "done");
        assert!(updated.completion_date.is_some());
        assert_eq!(updated.title, "Draft landing page");
        assert_eq!(updated.priority, "high");
        assert_eq!(updated.reopened_count, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let pool = init_memory().await.unwrap();
        assert!(!delete(&pool, 123).await.unwrap());
    }
}
