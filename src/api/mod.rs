//! HTTP API handlers
//!
//! One module per entity kind plus the health endpoint. Route wiring
//! lives in `lib.rs::build_router`.

use serde::Deserialize;

pub mod alerts;
pub mod budget_history;
pub mod customers;
pub mod employees;
pub mod health;
pub mod project_kpis;
pub mod projects;
pub mod tasks;

/// skip/limit pagination query parameters
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}
