//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use kana_drill_backend::models::AudioItemInput;

/// Build item input with the given answers and placeholder metadata.
pub fn item_input(expected_kana: &str, expected_kanji: &str) -> AudioItemInput {
    AudioItemInput {
        name: "買い物 1".to_string(),
        description: "買い物で使う表現".to_string(),
        level: "N4".to_string(),
        audio_url: "/static/audio/sample2.mp3".to_string(),
        expected_kana: expected_kana.to_string(),
        expected_kanji: expected_kanji.to_string(),
    }
}

/// Item input whose kanji form differs from the kana form.
pub fn shopping_item() -> AudioItemInput {
    item_input("これください", "これ下さい")
}

/// Item input with identical kana and kanji forms.
pub fn greeting_item() -> AudioItemInput {
    AudioItemInput {
        name: "挨拶 1".to_string(),
        description: "日常的な挨拶の練習".to_string(),
        level: "N5".to_string(),
        audio_url: "/static/audio/sample1.mp3".to_string(),
        expected_kana: "おはようございます".to_string(),
        expected_kanji: "おはようございます".to_string(),
    }
}

/// Create a check request body.
pub fn check_request(id: i64, text: &str) -> serde_json::Value {
    json!({ "id": id, "text": text })
}

/// Create an item request body from input.
pub fn item_request(input: &AudioItemInput) -> serde_json::Value {
    json!({
        "name": input.name,
        "description": input.description,
        "level": input.level,
        "audio_url": input.audio_url,
        "expected_kana": input.expected_kana,
        "expected_kanji": input.expected_kanji,
    })
}
