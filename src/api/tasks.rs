//! Task endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::ListParams;
use crate::db;
use crate::error::{Error, Result};
use crate::models::{NewTask, Task, TaskUpdate};
use crate::AppState;

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    Json(new): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>)> {
    let task = db::tasks::create(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Task>>> {
    let tasks = db::tasks::list(&state.db, params.skip, params.limit).await?;
    Ok(Json(tasks))
}

/// GET /api/tasks/:id
pub async fn get_task(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Task>> {
    db::tasks::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Task not found".to_string()))
}

/// PATCH /api/tasks/:id
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<TaskUpdate>,
) -> Result<Json<Task>> {
    db::tasks::update(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound("Task not found".to_string()))
}

/// DELETE /api/tasks/:id
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    if db::tasks::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound("Task not found".to_string()))
    }
}
