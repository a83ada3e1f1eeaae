//! Task service.

use tally_core::{Lookup, Store, Task, TaskId, ValidationError};
use tracing::{info, warn};

use crate::dto::{CreateTaskRequest, UpdateTaskRequest};
use crate::error::AppError;
use crate::AppState;

/// Task ids arrive as path text; anything that is not an unsigned integer
/// cannot name a task.
pub fn parse_id(raw: &str) -> Result<TaskId, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("task '{}' not found", raw)))
}

fn not_found(id: TaskId) -> AppError {
    AppError::NotFound(format!("task '{}' not found", id))
}

/// Returns every task.
pub async fn list(state: &AppState) -> Vec<Task> {
    state.tasks.all().await
}

/// Finds a task by id.
pub async fn get(state: &AppState, id: TaskId) -> Result<Task, AppError> {
    state
        .tasks
        .get(Lookup::Id(&id))
        .await
        .ok_or_else(|| not_found(id))
}

/// Validates and stores a new task. Nothing is stored when validation fails.
pub async fn create(
    state: &AppState,
    req: Result<CreateTaskRequest, ValidationError>,
) -> Result<Task, AppError> {
    let draft = req.and_then(CreateTaskRequest::into_draft).map_err(|e| {
        warn!("Rejected task create: {}", e);
        AppError::BadRequest(e.to_string())
    })?;

    let task = state
        .tasks
        .insert(draft)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    info!("Created task {}", task.id);
    Ok(task)
}

/// Applies a partial update to a task.
///
/// An unknown id is reported before the body is looked at, so a bad body for
/// a missing task is still `404`.
pub async fn update(
    state: &AppState,
    id: TaskId,
    req: Result<UpdateTaskRequest, ValidationError>,
) -> Result<Task, AppError> {
    get(state, id).await?;

    let patch = req.and_then(UpdateTaskRequest::into_patch).map_err(|e| {
        warn!("Rejected update for task {}: {}", id, e);
        AppError::BadRequest(e.to_string())
    })?;

    let task = state
        .tasks
        .update(&id, patch)
        .await
        .map_err(|_| not_found(id))?;

    info!("Updated task {}", task.id);
    Ok(task)
}

/// Removes a task.
pub async fn delete(state: &AppState, id: TaskId) -> Result<(), AppError> {
    state.tasks.delete(&id).await.map_err(|_| not_found(id))?;
    info!("Deleted task {}", id);
    Ok(())
}
