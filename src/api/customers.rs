//! Customer endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::ListParams;
use crate::db;
use crate::error::{Error, Result};
use crate::models::{Customer, CustomerUpdate, NewCustomer};
use crate::AppState;

/// POST /api/customers
pub async fn create_customer(
    State(state): State<AppState>,
    Json(new): Json<NewCustomer>,
) -> Result<(StatusCode, Json<Customer>)> {
    let customer = db::customers::create(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/customers
pub async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Customer>>> {
    let customers = db::customers::list(&state.db, params.skip, params.limit).await?;
    Ok(Json(customers))
}

/// GET /api/customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>> {
    db::customers::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Customer not found".to_string()))
}

/// PATCH /api/customers/:id
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<CustomerUpdate>,
) -> Result<Json<Customer>> {
    db::customers::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Customer not found".to_string()))
}

/// DELETE /api/customers/:id
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if db::customers::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound("Customer not found".to_string()))
    }
}
