//! Asset service.
//!
//! Creation failures are reported as `400`. Update failures of any kind
//! (unknown id, invalid fields, taken slug, undecodable body) are all
//! reported as `404`.

use tally_core::{Asset, AssetId, Lookup, Store, ValidationError};
use tracing::{info, warn};

use crate::dto::{CreateAssetRequest, UpdateAssetRequest};
use crate::error::AppError;
use crate::AppState;

fn not_found(id: &AssetId) -> AppError {
    AppError::NotFound(format!("asset '{}' not found", id))
}

/// Returns every asset.
pub async fn list(state: &AppState) -> Vec<Asset> {
    state.assets.all().await
}

/// Finds an asset by id.
pub async fn get(state: &AppState, id: &AssetId) -> Result<Asset, AppError> {
    state
        .assets
        .get(Lookup::Id(id))
        .await
        .ok_or_else(|| not_found(id))
}

/// Finds an asset by slug.
pub async fn get_by_slug(state: &AppState, slug: &str) -> Result<Asset, AppError> {
    state
        .assets
        .get(Lookup::SecondaryKey(slug))
        .await
        .ok_or_else(|| AppError::NotFound(format!("asset with slug '{}' not found", slug)))
}

/// Validates and stores a new asset.
pub async fn create(
    state: &AppState,
    req: Result<CreateAssetRequest, ValidationError>,
) -> Result<Asset, AppError> {
    let draft = req.and_then(CreateAssetRequest::into_draft).map_err(|e| {
        warn!("Rejected asset create: {}", e);
        AppError::BadRequest(e.to_string())
    })?;

    let asset = state.assets.insert(draft).await.map_err(|e| {
        warn!("Rejected asset create: {}", e);
        AppError::BadRequest(e.to_string())
    })?;

    info!("Created asset {} ({})", asset.id, asset.slug);
    Ok(asset)
}

/// Applies a partial update to an asset.
pub async fn update(
    state: &AppState,
    id: &AssetId,
    req: Result<UpdateAssetRequest, ValidationError>,
) -> Result<Asset, AppError> {
    let patch = req.and_then(UpdateAssetRequest::into_patch).map_err(|e| {
        warn!("Rejected update for asset {}: {}", id, e);
        not_found(id)
    })?;

    let asset = state.assets.update(id, patch).await.map_err(|e| {
        warn!("Rejected update for asset {}: {}", id, e);
        not_found(id)
    })?;

    info!("Updated asset {}", asset.id);
    Ok(asset)
}

/// Removes an asset.
pub async fn delete(state: &AppState, id: &AssetId) -> Result<(), AppError> {
    let removed = state.assets.delete(id).await.map_err(|_| not_found(id))?;
    info!("Deleted asset {} ({})", removed.id, removed.slug);
    Ok(())
}
