//! Project endpoints
//!
//! Beyond plain CRUD, projects expose a KPI lookup by project id and
//! the classification trigger that round-trips the generation service.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::ListParams;
use crate::db;
use crate::error::{Error, Result};
use crate::models::{NewProject, Project, ProjectKpi, ProjectUpdate};
use crate::services;
use crate::AppState;

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(new): Json<NewProject>,
) -> Result<(StatusCode, Json<Project>)> {
    let project = db::projects::create(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Project>>> {
    let projects = db::projects::list(&state.db, params.skip, params.limit).await?;
    Ok(Json(projects))
}

/// GET /api/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>> {
    db::projects::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Project not found".to_string()))
}

/// PATCH /api/projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ProjectUpdate>,
) -> Result<Json<Project>> {
    db::projects::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Project not found".to_string()))
}

/// DELETE /api/projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if db::projects::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound("Project not found".to_string()))
    }
}

/// GET /api/projects/:id/kpi
///
/// KPI lookup by owning project id, not by KPI id.
pub async fn get_project_kpi(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<ProjectKpi>> {
    db::project_kpis::get_by_project(&state.db, project_id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Project KPI not found for this project ID".to_string()))
}

/// POST /api/projects/:id/classify_kpi
///
/// Triggers the generation-service round-trip and persists the label.
/// Both "no KPI record" and "classification failed" surface as the
/// same soft not-found outcome.
pub async fn classify_project_kpi(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<ProjectKpi>> {
    services::classify_and_update_kpi_class(&state.db, &state.kpi_client, project_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            Error::NotFound("Project KPI not found or classification failed".to_string())
        })
}
