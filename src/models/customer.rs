//! Customer records

use serde::{Deserialize, Serialize};

/// Stored customer record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub industry: Option<String>,
    /// 1 = highest priority, 5 = lowest
    pub priority_level: Option<i64>,
}

/// Creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub priority_level: Option<i64>,
}

/// Merge-patch payload: only supplied fields are applied
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub industry: Option<String>,
    pub priority_level: Option<i64>,
}
