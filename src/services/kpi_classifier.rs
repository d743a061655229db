//! KPI classification client
//!
//! Renders the eleven KPI signals into a constrained natural-language
//! prompt, sends it to a local Ollama-style generation endpoint as a
//! single non-streamed request, and normalizes the free-text reply into
//! one of three labels. Transport failures degrade to the `Error`
//! sentinel; unrecognized replies fall back to `Medium`.

use crate::models::{KpiSignals, ProjectKpi};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{error, info, warn};

/// Classification outcome. `Error` is the failed-call sentinel, never
/// a valid label and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiClass {
    Low,
    Medium,
    High,
    Error,
}

impl KpiClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            KpiClass::Low => "Low",
            KpiClass::Medium => "Medium",
            KpiClass::High => "High",
            KpiClass::Error => "Error",
        }
    }
}

/// Request body for the generation endpoint
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
}

/// Response envelope. Anything without a `response` field is treated
/// as a transport-level failure.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Client for the external generation endpoint
///
/// Constructed once at startup and injected through `AppState`; its
/// configuration is read-only afterwards.
pub struct KpiClient {
    http_client: reqwest::Client,
    api_url: String,
    model: String,
}

impl KpiClient {
    pub fn new(api_url: String, model: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_url,
            model,
        }
    }

    /// Classify the eleven signals into Low/Medium/High
    ///
    /// Terminal outcomes only: a failed round-trip returns the `Error`
    /// sentinel, an off-label reply returns `Medium`. No retries.
    pub async fn classify(&self, signals: &KpiSignals) -> KpiClass {
        let payload = GenerateRequest {
            model: &self.model,
            prompt: render_prompt(signals),
            stream: false,
        };

        let response = match self
            .http_client
            .post(&self.api_url)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(
                    endpoint = %self.api_url,
                    "Could not reach generation endpoint: {}",
                    e
                );
                return KpiClass::Error;
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(
                endpoint = %self.api_url,
                status = status.as_u16(),
                "Generation endpoint returned error status"
            );
            return KpiClass::Error;
        }

        let envelope: GenerateResponse = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                error!(
                    endpoint = %self.api_url,
                    "Malformed generation response envelope: {}",
                    e
                );
                return KpiClass::Error;
            }
        };

        let Some(text) = envelope.response else {
            error!(
                endpoint = %self.api_url,
                "Generation response is missing the 'response' field"
            );
            return KpiClass::Error;
        };

        normalize_reply(&text)
    }
}

/// Render the deterministic classification prompt
fn render_prompt(signals: &KpiSignals) -> String {
    format!(
        "You are an expert project manager and an AI assistant designed to classify project KPI performance.\n\
         Given the following project parameters, classify the project's overall KPI class as 'Low', 'Medium', or 'High'.\n\
         Only respond with one of these three words: 'Low', 'Medium', or 'High'. Do not include any other text or explanation.\n\
         \n\
         Project Parameters:\n\
         - Completion Percentage: {}%\n\
         - Milestone Completion: {}%\n\
         - Budget Utilization: {}%\n\
         - Schedule Variance: {} days (positive is ahead, negative is behind)\n\
         - Overdue Tasks: {}\n\
         - Alert Count: {}\n\
         - Average Task Completion Time: {} days\n\
         - Employee Workload Index: {}\n\
         - Customer Priority Level: {} (1=highest, 5=lowest)\n\
         - Reopened Tasks: {}\n\
         - Risk Flag: {}\n\
         \n\
         Based on these parameters, what is the KPI class of this project?",
        signals.completion_percentage,
        signals.milestone_completion,
        signals.budget_utilization,
        signals.schedule_variance,
        signals.overdue_tasks,
        signals.alert_count,
        signals.avg_task_completion_time,
        signals.employee_workload_index,
        signals.customer_priority_level,
        signals.reopened_tasks,
        signals.risk_flag,
    )
}

/// Normalize a free-text reply into a label
///
/// Trim, capitalize the first letter and lowercase the rest, then
/// require an exact match; anything else falls back to Medium.
fn normalize_reply(text: &str) -> KpiClass {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let normalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    };

    match normalized.as_str() {
        "Low" => KpiClass::Low,
        "Medium" => KpiClass::Medium,
        "High" => KpiClass::High,
        other => {
            warn!(
                reply = other,
                "Unexpected classification reply, defaulting to Medium"
            );
            KpiClass::Medium
        }
    }
}

/// Classify a project's KPI record and persist the resulting label
///
/// Returns `Ok(None)` when no KPI record exists for the project, and
/// also when the classification round-trip or the label write fails:
/// the stored kpi_class is then left untouched and the caller reports
/// the soft not-found outcome.
pub async fn classify_and_update_kpi_class(
    pool: &SqlitePool,
    client: &KpiClient,
    project_id: i64,
) -> crate::error::Result<Option<ProjectKpi>> {
    let Some(kpi) = crate::db::project_kpis::get_by_project(pool, project_id).await? else {
        return Ok(None);
    };

    let label = client.classify(&KpiSignals::from(&kpi)).await;
    if label == KpiClass::Error {
        warn!(project_id, "KPI classification failed, leaving stored label unchanged");
        return Ok(None);
    }

    if let Err(e) = crate::db::project_kpis::set_kpi_class(pool, kpi.id, label.as_str()).await {
        error!(project_id, "Failed to persist KPI class: {}", e);
        return Ok(None);
    }

    info!(project_id, kpi_class = label.as_str(), "Project KPI classified");
    crate::db::project_kpis::get(pool, kpi.id).await
}
