//! Answer check endpoint

use axum::{body::Bytes, extract::State, Json};
use kana_drill_core::check_answer;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /check
/// Body is parsed as JSON whatever the content type says.
pub async fn check(State(state): State<AppState>, body: Bytes) -> Result<Json<CheckAnswerResponse>> {
    let request = CheckAnswerRequest::from_slice(&body)?;

    let item = state
        .db
        .get_item(request.id)
        .await?
        .ok_or_else(|| ApiError::item_not_found(request.id))?;

    let result = check_answer(&request.text, &item);

    tracing::debug!(item_id = item.id, correct = result.correct, "Checked answer");

    Ok(Json(result.into()))
}
