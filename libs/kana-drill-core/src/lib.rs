//! Core answer-checking library for the kana drill backend.
//!
//! Provides:
//! - Katakana to hiragana folding
//! - Answer normalization (whitespace and Japanese punctuation stripping)
//! - Match decision against the kana and kanji forms of an item
//! - Shared types (AudioItem, AudioItemInput, CheckResult)

pub mod error;
pub mod matching;
pub mod types;

pub use error::{Result, ValidationError};
pub use matching::{
    check_answer, fold_katakana, fold_katakana_str, is_correct_answer, normalize_input,
    CheckResult,
};
pub use types::{AudioItem, AudioItemInput};
