//! Alert records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored alert record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Alert {
    pub id: i64,
    pub message: String,
    pub project_id: Option<i64>,
    pub task_id: Option<i64>,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub created_at: NaiveDate,
    pub is_resolved: bool,
}

/// Creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewAlert {
    pub message: String,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub task_id: Option<i64>,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub is_resolved: bool,
}

/// Merge-patch payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertUpdate {
    pub message: Option<String>,
    pub project_id: Option<i64>,
    pub task_id: Option<i64>,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    pub created_at: Option<NaiveDate>,
    pub is_resolved: Option<bool>,
}
