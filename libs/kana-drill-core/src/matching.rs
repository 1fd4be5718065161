//! Answer matching for listening drills.
//!
//! A typed answer is accepted when, after normalization, it equals the
//! normalized kana form or the normalized kanji form of the item. There is no
//! partial credit and no fuzzy matching.

use crate::types::AudioItem;
use serde::{Deserialize, Serialize};

/// First code point of the folded katakana range (ァ).
const KATAKANA_START: u32 = 0x30A1;
/// Last code point of the folded katakana range (ヶ).
const KATAKANA_END: u32 = 0x30F6;
/// Distance between a katakana code point and its hiragana counterpart.
const KATAKANA_HIRAGANA_OFFSET: u32 = 0x60;

/// Punctuation removed before comparison: middle dot, ideographic comma and full stop.
const STRIPPED_PUNCTUATION: [char; 3] = ['・', '、', '。'];

/// Whitespace as the answer form treats it: Unicode White_Space plus the
/// information separators U+001C to U+001F.
fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Result of checking a typed answer against an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the answer is accepted.
    pub correct: bool,
    /// Kana answer as stored (not normalized), for display.
    pub expected_kana: String,
    /// Kanji answer as stored (not normalized), for display.
    pub expected_kanji: String,
}

/// Fold a katakana character in `[U+30A1, U+30F6]` to hiragana.
///
/// Anything outside that range is returned unchanged, including the
/// prolonged sound mark and the small katakana extensions above U+30F6.
pub fn fold_katakana(ch: char) -> char {
    let code = ch as u32;
    if (KATAKANA_START..=KATAKANA_END).contains(&code) {
        char::from_u32(code - KATAKANA_HIRAGANA_OFFSET).unwrap_or(ch)
    } else {
        ch
    }
}

/// Fold every katakana character of `text` to hiragana.
pub fn fold_katakana_str(text: &str) -> String {
    text.chars().map(fold_katakana).collect()
}

/// Normalize text into the form used for comparison.
///
/// Trims, drops all whitespace, drops `・`, `、` and `。`, then folds katakana
/// to hiragana.
pub fn normalize_input(text: &str) -> String {
    text.trim_matches(is_space)
        .chars()
        .filter(|&ch| !is_space(ch) && !STRIPPED_PUNCTUATION.contains(&ch))
        .map(fold_katakana)
        .collect()
}

/// Decide whether `user_input` matches either accepted form of `item`.
pub fn is_correct_answer(user_input: &str, item: &AudioItem) -> bool {
    let normalized = normalize_input(user_input);
    let accepted = [
        normalize_input(&item.expected_kana),
        normalize_input(&item.expected_kanji),
    ];
    accepted.contains(&normalized)
}

/// Check `user_input` and pass the item's canonical answers through.
pub fn check_answer(user_input: &str, item: &AudioItem) -> CheckResult {
    CheckResult {
        correct: is_correct_answer(user_input, item),
        expected_kana: item.expected_kana.clone(),
        expected_kanji: item.expected_kanji.clone(),
    }
}
