//! Task records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored task record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub project_id: i64,
    pub assignee_id: Option<i64>,
    pub due_date: NaiveDate,
    pub status: String,
    pub priority: String,
    pub completion_date: Option<NaiveDate>,
    pub reopened_count: i64,
}

/// Creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub project_id: i64,
    #[serde(default)]
    pub assignee_id: Option<i64>,
    pub due_date: NaiveDate,
    pub status: String,
    pub priority: String,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub reopened_count: i64,
}

/// Merge-patch payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<i64>,
    pub assignee_id: Option<i64>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub reopened_count: Option<i64>,
}
