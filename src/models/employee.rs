//! Employee records
//!
//! Preferences are structured in memory and JSON text in the store;
//! the encode/decode pair lives at the db boundary (`db::employees`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nested preferences structure, serialized to TEXT for storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePreferences {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_notifications() -> bool {
    true
}

impl Default for EmployeePreferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            notifications: default_notifications(),
        }
    }
}

/// Stored employee record
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    /// Unique across all employees
    pub email: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub status: String,
    pub preferences: EmployeePreferences,
}

/// Creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub status: String,
    #[serde(default)]
    pub preferences: Option<EmployeePreferences>,
}

/// Merge-patch payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub preferences: Option<EmployeePreferences>,
}
