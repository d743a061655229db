//! KPI classification tests against an in-process fake endpoint
//!
//! Spins up a minimal generation service on an ephemeral port so the
//! round-trip, normalization, fallback, and failure-sentinel paths are
//! all exercised without a real model.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::NaiveDate;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use pmdash::models::{KpiSignals, NewCustomer, NewProject, NewProjectKpi};
use pmdash::services::{classify_and_update_kpi_class, KpiClass, KpiClient};

/// Serve a canned JSON reply on /api/generate, returning the full URL
async fn spawn_fake_endpoint(reply: Value) -> String {
    let app = Router::new()
        .route(
            "/api/generate",
            post(|State(reply): State<Value>| async move { Json(reply) }),
        )
        .with_state(reply);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/generate", addr)
}

/// Same, but always replies with a 500
async fn spawn_failing_endpoint() -> String {
    let app = Router::new().route(
        "/api/generate",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/generate", addr)
}

fn sample_signals() -> KpiSignals {
    KpiSignals {
        completion_percentage: 95.0,
        milestone_completion: 98.0,
        budget_utilization: 92.0,
        schedule_variance: 10.0,
        overdue_tasks: 0,
        alert_count: 0,
        avg_task_completion_time: 5.0,
        employee_workload_index: 55.0,
        customer_priority_level: 3,
        reopened_tasks: 0,
        risk_flag: false,
    }
}

async fn seed_kpi(pool: &SqlitePool) -> (i64, i64) {
    let customer = pmdash::db::customers::create(
        pool,
        NewCustomer {
            name: "Acme".to_string(),
            email: "office@acme.example".to_string(),
            phone: "555-0100".to_string(),
            contact_person: None,
            address: None,
            industry: None,
            priority_level: Some(1),
        },
    )
    .await
    .unwrap();

    let project = pmdash::db::projects::create(
        pool,
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

    let kpi = pmdash::db::project_kpis::create(
        pool,
        NewProjectKpi {
            project_id: project.id,
            completion_percentage: 40.0,
            milestone_completion: 35.0,
            budget_utilization: 120.0,
            schedule_variance: -15.0,
            overdue_tasks: 7,
            alert_count: 5,
            avg_task_completion_time: 20.0,
            employee_workload_index: 90.0,
            customer_priority_level: 1,
            reopened_tasks: 3,
            risk_flag: true,
            kpi_class: "Medium".to_string(),
        },
    )
    .await
    .unwrap();

    (project.id, kpi.id)
}

// =============================================================================
// classify(): normalization, fallback, failure sentinel
// =============================================================================

#[tokio::test]
async fn test_classify_normalizes_lowercase_reply() {
    let url = spawn_fake_endpoint(json!({"response": "high"})).await;
    let client = KpiClient::new(url, "llama3".to_string());

    assert_eq!(client.classify(&sample_signals()).await, KpiClass::High);
}

#[tokio::test]
async fn test_classify_trims_whitespace() {
    let url = spawn_fake_endpoint(json!({"response": "  Low \n"})).await;
    let client = KpiClient::new(url, "llama3".to_string());

    assert_eq!(client.classify(&sample_signals()).await, KpiClass::Low);
}

#[tokio::test]
async fn test_classify_off_label_reply_falls_back_to_medium() {
    let url = spawn_fake_endpoint(json!({"response": "It depends"})).await;
    let client = KpiClient::new(url, "llama3".to_string());

    assert_eq!(client.classify(&sample_signals()).await, KpiClass::Medium);
}

#[tokio::test]
async fn test_classify_connection_failure_returns_error_sentinel() {
    // Nothing listens on the discard port
    let client = KpiClient::new(
        "http://127.0.0.1:9/api/generate".to_string(),
        "llama3".to_string(),
    );

    assert_eq!(client.classify(&sample_signals()).await, KpiClass::Error);
}

#[tokio::test]
async fn test_classify_error_status_returns_error_sentinel() {
    let url = spawn_failing_endpoint().await;
    let client = KpiClient::new(url, "llama3".to_string());

    assert_eq!(client.classify(&sample_signals()).await, KpiClass::Error);
}

#[tokio::test]
async fn test_classify_missing_response_field_returns_error_sentinel() {
    let url = spawn_fake_endpoint(json!({"done": true})).await;
    let client = KpiClient::new(url, "llama3".to_string());

    assert_eq!(client.classify(&sample_signals()).await, KpiClass::Error);
}

// =============================================================================
// classify_and_update orchestration
// =============================================================================

#[tokio::test]
async fn test_orchestration_absent_kpi_reports_none() {
    let pool = pmdash::db::init_memory().await.unwrap();
    let url = spawn_fake_endpoint(json!({"response": "Low"})).await;
    let client = KpiClient::new(url, "llama3".to_string());

    let result = classify_and_update_kpi_class(&pool, &client, 1).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_orchestration_persists_label() {
    let pool = pmdash::db::init_memory().await.unwrap();
    let (project_id, kpi_id) = seed_kpi(&pool).await;

    let url = spawn_fake_endpoint(json!({"response": "low"})).await;
    let client = KpiClient::new(url, "llama3".to_string());

    let updated = classify_and_update_kpi_class(&pool, &client, project_id)
        .await
        .unwrap()
        .expect("KPI record exists");
    assert_eq!(updated.kpi_class, "Low");

    let stored = pmdash::db::project_kpis::get(&pool, kpi_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.kpi_class, "Low");
    // Signals untouched
    assert_eq!(stored.overdue_tasks, 7);
}

#[tokio::test]
async fn test_orchestration_error_sentinel_leaves_row_unchanged() {
    let pool = pmdash::db::init_memory().await.unwrap();
    let (project_id, kpi_id) = seed_kpi(&pool).await;

    let client = KpiClient::new(
        "http://127.0.0.1:9/api/generate".to_string(),
        "llama3".to_string(),
    );

    let result = classify_and_update_kpi_class(&pool, &client, project_id)
        .await
        .unwrap();
    assert!(result.is_none());

    let stored = pmdash::db::project_kpis::get(&pool, kpi_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.kpi_class, "Medium");
}
