//! Project KPI endpoints (by KPI id)
//!
//! The by-project lookup and the classification trigger live under the
//! project routes (`api::projects`).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::ListParams;
use crate::db;
use crate::error::{Error, Result};
use crate::models::{NewProjectKpi, ProjectKpi, ProjectKpiUpdate};
use crate::AppState;

/// POST /api/project-kpis
pub async fn create_project_kpi(
    State(state): State<AppState>,
    Json(new): Json<NewProjectKpi>,
) -> Result<(StatusCode, Json<ProjectKpi>)> {
    let kpi = db::project_kpis::create(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(kpi)))
}

/// GET /api/project-kpis
pub async fn list_project_kpis(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ProjectKpi>>> {
    let kpis = db::project_kpis::list(&state.db, params.skip, params.limit).await?;
    Ok(Json(kpis))
}

/// GET /api/project-kpis/:id
pub async fn get_project_kpi(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProjectKpi>> {
    db::project_kpis::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Project KPI not found".to_string()))
}

/// PATCH /api/project-kpis/:id
pub async fn update_project_kpi(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ProjectKpiUpdate>,
) -> Result<Json<ProjectKpi>> {
    db::project_kpis::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Project KPI not found".to_string()))
}

/// DELETE /api/project-kpis/:id
pub async fn delete_project_kpi(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if db::project_kpis::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound("Project KPI not found".to_string()))
    }
}
