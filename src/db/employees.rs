//! Employee database operations
//!
//! Preferences cross the store boundary as JSON text; everywhere else
//! they stay structured. Email is unique, checked before insert.

use crate::error::{Error, Result};
use crate::models::{Employee, EmployeePreferences, EmployeeUpdate, NewEmployee};
use sqlx::{Row, SqlitePool};

fn row_to_employee(row: &sqlx::sqlite::SqliteRow) -> Result<Employee> {
    let preferences_text: String = row.get("preferences");
    let preferences: EmployeePreferences = serde_json::from_str(&preferences_text)?;
    Ok(Employee {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        position: row.get("position"),
        hire_date: row.get("hire_date"),
        status: row.get("status"),
        preferences,
    })
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Employee>> {
    let row = sqlx::query("SELECT * FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.as_ref().map(row_to_employee).transpose()
}

pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Employee>> {
    let row = sqlx::query("SELECT * FROM employees WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    row.as_ref().map(row_to_employee).transpose()
}

pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Employee>> {
    let rows = sqlx::query("SELECT * FROM employees ORDER BY id LIMIT ? OFFSET ?")
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await?;
    rows.iter().map(row_to_employee).collect()
}

pub async fn create(pool: &SqlitePool, new: NewEmployee) -> Result<Employee> {
    if get_by_email(pool, &new.email).await?.is_some() {
        return Err(Error::Duplicate(format!(
            "Email already registered: {}",
            new.email
        )));
    }

    let preferences_text = match &new.preferences {
        Some(preferences) => serde_json::to_string(preferences)?,
        None => "{}".to_string(),
    };

    let result = sqlx::query(
        r#"
        INSERT INTO employees (name, email, position, hire_date, status, preferences)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.position)
    .bind(new.hire_date)
    .bind(&new.status)
    .bind(&preferences_text)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    get(pool, id)
        .await?
        .ok_or_else(|| Error::Internal("employee row missing after insert".into()))
}

/// Apply a merge-patch: only supplied fields change
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    patch: EmployeeUpdate,
) -> Result<Option<Employee>> {
    let Some(mut employee) = get(pool, id).await? else {
        return Ok(None);
    };

    if let Some(name) = patch.name {
        employee.name = name;
    }
    if let Some(email) = patch.email {
        employee.email = email;
    }
    if let Some(position) = patch.position {
        employee.position = position;
    }
    if let Some(hire_date) = patch.hire_date {
        employee.hire_date = hire_date;
    }
    if let Some(status) = patch.status {
        employee.status = status;
    }
    if let Some(preferences) = patch.preferences {
        employee.preferences = preferences;
    }

    let preferences_text = serde_json::to_string(&employee.preferences)?;

    sqlx::query(
        r#"
        UPDATE employees
        SET name = ?, email = ?, position = ?, hire_date = ?, status = ?, preferences = ?
        WHERE id = ?
        "#,
    )
    .bind(&employee.name)
    .bind(&employee.email)
    .bind(&employee.position)
    .bind(employee.hire_date)
    .bind(&employee.status)
    .bind(&preferences_text)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(Some(employee))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
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

    fn sample(email: &str) -> NewEmployee {
        NewEmployee {
            name: "Sam Rivera".to_string(),
            email: email.to_string(),
            position: "Engineer".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            status: "active".to_string(),
            preferences: None,
        }
    }

    #[tokio::test]
    async fn test_create_without_preferences_uses_defaults_on_read() {
        let pool = init_memory().await.unwrap();
        let employee = create(&pool, sample("sam@example.com")).await.unwrap();

        // "{}" in storage deserializes to the default structure
        assert_eq!(employee.preferences.theme, "dark");
        assert!(employee.preferences.notifications);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let pool = init_memory().await.unwrap();
        create(&pool, sample("sam@example.com")).await.unwrap();

        let err = create(&pool, sample("sam@example.com")).await.unwrap_err();
        assert!(matches!(err, Error::Duplicate(_)));

        // Exactly one record with that email remains
        let all = list(&pool, 0, 100).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_preferences_round_trip_through_text_storage() {
        let pool = init_memory().await.unwrap();
        let employee = create(&pool, sample("sam@example.com")).await.unwrap();

        let patch = EmployeeUpdate {
            preferences: Some(EmployeePreferences {
                theme: "light".to_string(),
                notifications: false,
            }),
            ..Default::default()
        };
        update(&pool, employee.id, patch).await.unwrap().unwrap();

        let loaded = get(&pool, employee.id).await.unwrap().unwrap();
        assert_eq!(loaded.preferences.theme, "light");
        assert!(!loaded.preferences.notifications);
        // Unrelated fields untouched
        assert_eq!(loaded.position, "Engineer");
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_none() {
        let pool = init_memory().await.unwrap();
        let result = update(&pool, 7, EmployeeUpdate::default()).await.unwrap();
        assert!(result.is_none());
    }
}
