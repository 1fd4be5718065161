//! Audio item endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/audio-items
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AudioItem>>> {
    let items = state.db.list_items().await?;
    Ok(Json(items))
}

/// GET /api/audio-items/:id
pub async fn get(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<AudioItem>> {
    let Path(item_id) = path?;
    let item = state
        .db
        .get_item(item_id)
        .await?
        .ok_or_else(|| ApiError::item_not_found(item_id))?;
    Ok(Json(item))
}

/// POST /api/audio-items
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AudioItemInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AudioItem>)> {
    let Json(payload) = payload?;
    let input = payload.trimmed();
    input.validate()?;

    let item = state
        .db
        .upsert_item(&input, None)
        .await?
        .ok_or_else(|| ApiError::Internal("Insert returned no row".to_string()))?;

    tracing::info!("Created audio item {}", item.id);

    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/audio-items/:id
/// Overwrites every field; there is no partial update.
pub async fn update(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<AudioItemInput>, JsonRejection>,
) -> Result<Json<AudioItem>> {
    let Path(item_id) = path?;
    let Json(payload) = payload?;
    let input = payload.trimmed();
    input.validate()?;

    let item = state
        .db
        .upsert_item(&input, Some(item_id))
        .await?
        .ok_or_else(|| ApiError::item_not_found(item_id))?;

    tracing::info!("Updated audio item {}", item.id);

    Ok(Json(item))
}

/// DELETE /api/audio-items/:id
pub async fn delete(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteItemResponse>> {
    let Path(item_id) = path?;
    let deleted = state.db.delete_item(item_id).await?;

    if deleted {
        tracing::info!("Deleted audio item {}", item_id);
    }

    Ok(Json(DeleteItemResponse { deleted }))
}
