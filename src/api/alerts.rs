//! Alert endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::ListParams;
use crate::db;
use crate::error::{Error, Result};
use crate::models::{Alert, AlertUpdate, NewAlert};
use crate::AppState;

/// POST /api/alerts
pub async fn create_alert(
    State(state): State<AppState>,
    Json(new): Json<NewAlert>,
) -> Result<(StatusCode, Json<Alert>)> {
    let alert = db::alerts::create(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(alert)))
}

/// GET /api/alerts
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Alert>>> {
    let alerts = db::alerts::list(&state.db, params.skip, params.limit).await?;
    Ok(Json(alerts))
}

/// GET /api/alerts/:id
pub async fn get_alert(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Alert>> {
    db::alerts::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Alert not found".to_string()))
}

/// PATCH /api/alerts/:id
pub async fn update_alert(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<AlertUpdate>,
) -> Result<Json<Alert>> {
    db::alerts::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Alert not found".to_string()))
}

/// DELETE /api/alerts/:id
pub async fn delete_alert(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if db::alerts::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound("Alert not found".to_string()))
    }
}
