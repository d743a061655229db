//! Budget history records
//!
//! Append-only ledger: there is no update or patch payload for this
//! entity, and the store exposes no update/delete operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored budget history entry
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BudgetHistory {
    pub id: i64,
    pub project_id: i64,
    pub date: NaiveDate,
    pub amount_spent: f64,
    pub remaining_budget: f64,
}

/// Creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewBudgetHistory {
    pub project_id: i64,
    pub date: NaiveDate,
    pub amount_spent: f64,
    pub remaining_budget: f64,
}
