//! Asset HTTP handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tally_core::{Asset, AssetId};

use crate::dto::{CreateAssetRequest, UpdateAssetRequest};
use crate::error::AppError;
use crate::services;
use crate::AppState;

/// Lists all assets.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Asset>> {
    Json(services::assets::list(&state).await)
}

/// Gets an asset by id.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Asset>, AppError> {
    services::assets::get(&state, &AssetId::from(id))
        .await
        .map(Json)
}

/// Gets an asset by slug.
pub async fn get_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Asset>, AppError> {
    services::assets::get_by_slug(&state, &slug).await.map(Json)
}

/// Creates an asset.
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAssetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Asset>), AppError> {
    let asset = services::assets::create(&state, super::body(payload)).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Partially updates an asset.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAssetRequest>, JsonRejection>,
) -> Result<Json<Asset>, AppError> {
    services::assets::update(&state, &AssetId::from(id), super::body(payload))
        .await
        .map(Json)
}

/// Deletes an asset.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    services::assets::delete(&state, &AssetId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
