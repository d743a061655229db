//! Project KPI records
//!
//! One KPI record per project (project_id is unique). Eleven signal
//! fields feed the classification step; `kpi_class` holds the derived
//! Low/Medium/High label.

use serde::{Deserialize, Serialize};

/// Stored KPI record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectKpi {
    pub id: i64,
    pub project_id: i64,
    pub completion_percentage: f64,
    pub milestone_completion: f64,
    pub budget_utilization: f64,
    pub schedule_variance: f64,
    pub overdue_tasks: i64,
    pub alert_count: i64,
    pub avg_task_completion_time: f64,
    pub employee_workload_index: f64,
    pub customer_priority_level: i64,
    pub reopened_tasks: i64,
    pub risk_flag: bool,
    pub kpi_class: String,
}

/// Creation payload. Signal fields default to zero / false; the
/// derived label defaults to "Medium".
#[derive(Debug, Clone, Deserialize)]
pub struct NewProjectKpi {
    pub project_id: i64,
    #[serde(default)]
    pub completion_percentage: f64,
    #[serde(default)]
    pub milestone_completion: f64,
    #[serde(default)]
    pub budget_utilization: f64,
    #[serde(default)]
    pub schedule_variance: f64,
    #[serde(default)]
    pub overdue_tasks: i64,
    #[serde(default)]
    pub alert_count: i64,
    #[serde(default)]
    pub avg_task_completion_time: f64,
    #[serde(default)]
    pub employee_workload_index: f64,
    #[serde(default = "default_customer_priority")]
    pub customer_priority_level: i64,
    #[serde(default)]
    pub reopened_tasks: i64,
    #[serde(default)]
    pub risk_flag: bool,
    #[serde(default = "default_kpi_class")]
    pub kpi_class: String,
}

fn default_customer_priority() -> i64 {
    3
}

fn default_kpi_class() -> String {
    "Medium".to_string()
}

/// Merge-patch payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectKpiUpdate {
    pub completion_percentage: Option<f64>,
    pub milestone_completion: Option<f64>,
    pub budget_utilization: Option<f64>,
    pub schedule_variance: Option<f64>,
    pub overdue_tasks: Option<i64>,
    pub alert_count: Option<i64>,
    pub avg_task_completion_time: Option<f64>,
    pub employee_workload_index: Option<f64>,
    pub customer_priority_level: Option<i64>,
    pub reopened_tasks: Option<i64>,
    pub risk_flag: Option<bool>,
    pub kpi_class: Option<String>,
}

/// The eleven signal values fed to the classifier
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSignals {
    pub completion_percentage: f64,
    pub milestone_completion: f64,
    pub budget_utilization: f64,
    pub schedule_variance: f64,
    pub overdue_tasks: i64,
    pub alert_count: i64,
    pub avg_task_completion_time: f64,
    pub employee_workload_index: f64,
    pub customer_priority_level: i64,
    pub reopened_tasks: i64,
    pub risk_flag: bool,
}

impl From<&ProjectKpi> for KpiSignals {
    fn from(kpi: &ProjectKpi) -> Self {
        Self {
            completion_percentage: kpi.completion_percentage,
            milestone_completion: kpi.milestone_completion,
            budget_utilization: kpi.budget_utilization,
            schedule_variance: kpi.schedule_variance,
            overdue_tasks: kpi.overdue_tasks,
            alert_count: kpi.alert_count,
            avg_task_completion_time: kpi.avg_task_completion_time,
            employee_workload_index: kpi.employee_workload_index,
            customer_priority_level: kpi.customer_priority_level,
            reopened_tasks: kpi.reopened_tasks,
            risk_flag: kpi.risk_flag,
        }
    }
}
