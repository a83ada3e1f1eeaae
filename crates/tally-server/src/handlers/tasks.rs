//! Task HTTP handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tally_core::Task;

use crate::dto::{CreateTaskRequest, UpdateTaskRequest};
use crate::error::AppError;
use crate::services;
use crate::AppState;

/// Lists all tasks.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Task>> {
    Json(services::tasks::list(&state).await)
}

/// Gets a task by id.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, AppError> {
    let id = services::tasks::parse_id(&id)?;
    services::tasks::get(&state, id).await.map(Json)
}

/// Creates a task.
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let task = services::tasks::create(&state, super::body(payload)).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Partially updates a task.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, AppError> {
    let id = services::tasks::parse_id(&id)?;
    services::tasks::update(&state, id, super::body(payload))
        .await
        .map(Json)
}

/// Deletes a task.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = services::tasks::parse_id(&id)?;
    services::tasks::delete(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
