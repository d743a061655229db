//! Project records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored project record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub project_name: String,
    pub customer_id: i64,
    pub status: String,
    pub budget_total: f64,
    pub completion_percentage: f64,
    pub budget_used: f64,
    pub budget_status: String,
    pub start_date: NaiveDate,
    pub launch_date: Option<NaiveDate>,
}

/// Creation payload. The referenced customer must exist.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub project_name: String,
    pub customer_id: i64,
    pub status: String,
    pub budget_total: f64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub completion_percentage: Option<f64>,
}

/// Merge-patch payload
///
/// `customer` carries a customer *name* which is resolved to an id
/// before assignment; an explicit `customer_id` takes precedence over
/// it when both are supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectUpdate {
    pub project_name: Option<String>,
    pub customer_id: Option<i64>,
    pub customer: Option<String>,
    pub status: Option<String>,
    pub budget_total: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub completion_percentage: Option<f64>,
}
