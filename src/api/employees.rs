//! Employee endpoints
//!
//! Creation enforces email uniqueness; the store rejects duplicates
//! with a 400 carrying the offending address.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::ListParams;
use crate::db;
use crate::error::{Error, Result};
use crate::models::{Employee, EmployeeUpdate, NewEmployee};
use crate::AppState;

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(new): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>)> {
    let employee = db::employees::create(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Employee>>> {
    let employees = db::employees::list(&state.db, params.skip, params.limit).await?;
    Ok(Json(employees))
}

/// GET /api/employees/:id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>> {
    db::employees::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Employee not found".to_string()))
}

/// PATCH /api/employees/:id
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<EmployeeUpdate>,
) -> Result<Json<Employee>> {
    db::employees::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Employee not found".to_string()))
}

/// DELETE /api/employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if db::employees::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound("Employee not found".to_string()))
    }
}
