//! Budget history endpoints
//!
//! The ledger is append-only: the operation set is exactly
//! {create, get, list}. No patch or delete route exists.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::ListParams;
use crate::db;
use crate::error::{Error, Result};
use crate::models::{BudgetHistory, NewBudgetHistory};
use crate::AppState;

/// POST /api/budget-history
pub async fn create_budget_history(
    State(state): State<AppState>,
    Json(new): Json<NewBudgetHistory>,
) -> Result<(StatusCode, Json<BudgetHistory>)> {
    let entry = db::budget_history::create(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/budget-history
pub async fn list_budget_histories(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<BudgetHistory>>> {
    let entries = db::budget_history::list(&state.db, params.skip, params.limit).await?;
    Ok(Json(entries))
}

/// GET /api/budget-history/:id
pub async fn get_budget_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BudgetHistory>> {
    db::budget_history::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Budget history record not found".to_string()))
}
