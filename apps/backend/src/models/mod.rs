//! Database models and API types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::error::{ApiError, Result};

// Re-export shared types from kana-drill-core
pub use kana_drill_core::types::{AudioItem, AudioItemInput};
pub use kana_drill_core::CheckResult;

// === Database Entity Types ===

/// Audio item row stored in SQLite
#[derive(Debug, Clone, FromRow)]
pub struct DbAudioItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub level: String,
    pub audio_url: String,
    pub expected_kana: String,
    pub expected_kanji: String,
}

impl DbAudioItem {
    /// Convert to API item type
    pub fn to_api_item(&self) -> AudioItem {
        AudioItem {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            level: self.level.clone(),
            audio_url: self.audio_url.clone(),
            expected_kana: self.expected_kana.clone(),
            expected_kanji: self.expected_kanji.clone(),
        }
    }
}

// === API Request/Response Types ===

/// Id used when a check request carries no id. Never assigned by the store.
pub const MISSING_ITEM_ID: i64 = 0;

/// Answer check request, coerced from a loosely typed JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckAnswerRequest {
    pub id: i64,
    pub text: String,
}

impl CheckAnswerRequest {
    /// Parse a raw request body regardless of its content type.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let payload: Value = serde_json::from_slice(body)
            .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {}", e)))?;
        Self::from_value(&payload)
    }

    /// Coerce `{id, text}` from a JSON value.
    ///
    /// A missing or null `text` becomes the empty string and a missing or null
    /// `id` becomes [`MISSING_ITEM_ID`]. Numeric strings and floats are accepted
    /// as ids.
    pub fn from_value(payload: &Value) -> Result<Self> {
        let object = payload
            .as_object()
            .ok_or_else(|| ApiError::BadRequest("request body must be a JSON object".to_string()))?;

        let id = match object.get("id") {
            None | Some(Value::Null) => MISSING_ITEM_ID,
            Some(value) => coerce_id(value)
                .ok_or_else(|| ApiError::BadRequest(format!("invalid id: {}", value)))?,
        };

        let text = match object.get("text") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(value) => {
                return Err(ApiError::BadRequest(format!("invalid text: {}", value)));
            }
        };

        Ok(Self { id, text })
    }
}

fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Successful answer check response
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckAnswerResponse {
    pub ok: bool,
    pub correct: bool,
    pub expected_kana: String,
    pub expected_kanji: String,
}

impl From<CheckResult> for CheckAnswerResponse {
    fn from(result: CheckResult) -> Self {
        Self {
            ok: true,
            correct: result.correct,
            expected_kana: result.expected_kana,
            expected_kanji: result.expected_kanji,
        }
    }
}

/// Delete response
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    pub deleted: bool,
}
