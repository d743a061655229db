//! Budget history database operations
//!
//! Append-only ledger: create, get, and list only. No update or delete
//! exists here on purpose.

use crate::error::{Error, Result};
use crate::models::{BudgetHistory, NewBudgetHistory};
use sqlx::SqlitePool;

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<BudgetHistory>> {
    let entry = sqlx::query_as::<_, BudgetHistory>("SELECT * FROM budget_history WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(entry)
}

pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<BudgetHistory>> {
    let entries = sqlx::query_as::<_, BudgetHistory>(
        "SELECT * FROM budget_history ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

pub async fn create(pool: &SqlitePool, new: NewBudgetHistory) -> Result<BudgetHistory> {
    let result = sqlx::query(
        r#"
        INSERT INTO budget_history (project_id, date, amount_spent, remaining_budget)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(new.project_id)
    .bind(new.date)
    .bind(new.amount_spent)
    .bind(new.remaining_budget)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    get(pool, id)
        .await?
        .ok_or_else(|| Error::Internal("budget history row missing after insert".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory;
    use crate::models::{NewCustomer, NewProject};
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_append_and_list_in_insertion_order() {
        let pool = init_memory().await.unwrap();
        let customer = crate::db::customers::create(
            &pool,
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
        let project = crate::db::projects::create(
            &pool,
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
        .unwrap();

        for (spent, remaining) in [(1000.0, 9000.0), (2500.0, 6500.0)] {
            create(
                &pool,
                NewBudgetHistory {
                    project_id: project.id,
                    date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                    amount_spent: spent,
                    remaining_budget: remaining,
                },
            )
            .await
            .unwrap();
        }

        let entries = list(&pool, 0, 100).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].amount_spent, 1000.0);
        assert_eq!(entries[1].remaining_budget, 6500.0);
    }
}
