//! pmdash library - Project Management Dashboard backend
//!
//! CRUD over projects, tasks, employees, customers, alerts, budget
//! history, and KPI records, plus a classification step that asks a
//! local generation service to grade a project's KPI tier.

use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

use services::KpiClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Classification client, configured once at startup
    pub kpi_client: Arc<KpiClient>,
}

impl AppState {
    pub fn new(db: SqlitePool, kpi_client: KpiClient) -> Self {
        Self {
            db,
            kpi_client: Arc::new(kpi_client),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Employees
        .route(
            "/employees",
            post(api::employees::create_employee).get(api::employees::list_employees),
        )
        .route(
            "/employees/:id",
            get(api::employees::get_employee)
                .patch(api::employees::update_employee)
                .delete(api::employees::delete_employee),
        )
        // Customers
        .route(
            "/customers",
            post(api::customers::create_customer).get(api::customers::list_customers),
        )
        .route(
            "/customers/:id",
            get(api::customers::get_customer)
                .patch(api::customers::update_customer)
                .delete(api::customers::delete_customer),
        )
        // Projects
        .route(
            "/projects",
            post(api::projects::create_project).get(api::projects::list_projects),
        )
        .route(
            "/projects/:id",
            get(api::projects::get_project)
                .patch(api::projects::update_project)
                .delete(api::projects::delete_project),
        )
        .route("/projects/:id/kpi", get(api::projects::get_project_kpi))
        .route(
            "/projects/:id/classify_kpi",
            post(api::projects::classify_project_kpi),
        )
        // Tasks
        .route(
            "/tasks",
            post(api::tasks::create_task).get(api::tasks::list_tasks),
        )
        .route(
            "/tasks/:id",
            get(api::tasks::get_task)
                .patch(api::tasks::update_task)
                .delete(api::tasks::delete_task),
        )
        // Alerts
        .route(
            "/alerts",
            post(api::alerts::create_alert).get(api::alerts::list_alerts),
        )
        .route(
            "/alerts/:id",
            get(api::alerts::get_alert)
                .patch(api::alerts::update_alert)
                .delete(api::alerts::delete_alert),
        )
        // Budget history: append-only, no patch/delete routes
        .route(
            "/budget-history",
            post(api::budget_history::create_budget_history)
                .get(api::budget_history::list_budget_histories),
        )
        .route(
            "/budget-history/:id",
            get(api::budget_history::get_budget_history),
        )
        // Project KPIs (by KPI id)
        .route(
            "/project-kpis",
            post(api::project_kpis::create_project_kpi).get(api::project_kpis::list_project_kpis),
        )
        .route(
            "/project-kpis/:id",
            get(api::project_kpis::get_project_kpi)
                .patch(api::project_kpis::update_project_kpi)
                .delete(api::project_kpis::delete_project_kpi),
        );

    Router::new()
        .nest("/api", api)
        .merge(api::health::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
