//! Core types for the kana drill.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// A listening exercise: an audio clip plus the answers it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub level: String,
    pub audio_url: String,
    /// Answer written in kana.
    pub expected_kana: String,
    /// Answer written with kanji. May equal `expected_kana`.
    pub expected_kanji: String,
}

/// Editable fields of an item, used for create and full-overwrite update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioItemInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub audio_url: String,
    #[serde(default)]
    pub expected_kana: String,
    #[serde(default)]
    pub expected_kanji: String,
}

impl AudioItemInput {
    /// Copy with every field trimmed of surrounding whitespace.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            level: self.level.trim().to_string(),
            audio_url: self.audio_url.trim().to_string(),
            expected_kana: self.expected_kana.trim().to_string(),
            expected_kanji: self.expected_kanji.trim().to_string(),
        }
    }

    /// Reject input with any empty field. Fields are checked in declaration order.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("description", &self.description),
            ("level", &self.level),
            ("audio_url", &self.audio_url),
            ("expected_kana", &self.expected_kana),
            ("expected_kanji", &self.expected_kanji),
        ];

        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ValidationError::EmptyField { field: *field }),
            None => Ok(()),
        }
    }

    /// Attach an id, producing the stored representation.
    pub fn into_item(self, id: i64) -> AudioItem {
        AudioItem {
            id,
            name: self.name,
            description: self.description,
            level: self.level,
            audio_url: self.audio_url,
            expected_kana: self.expected_kana,
            expected_kanji: self.expected_kanji,
        }
    }
}

impl From<&AudioItem> for AudioItemInput {
    fn from(item: &AudioItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            level: item.level.clone(),
            audio_url: item.audio_url.clone(),
            expected_kana: item.expected_kana.clone(),
            expected_kanji: item.expected_kanji.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_input() -> AudioItemInput {
        AudioItemInput {
            name: "挨拶 1".to_string(),
            description: "日常的な挨拶の練習".to_string(),
            level: "N5".to_string(),
            audio_url: "/static/audio/sample1.mp3".to_string(),
            expected_kana: "おはようございます".to_string(),
            expected_kanji: "おはようございます".to_string(),
        }
    }

    #[test]
    fn test_trimmed_strips_each_field() {
        let input = AudioItemInput {
            name: "  挨拶 1 ".to_string(),
            level: "\tN5\n".to_string(),
            ..sample_input()
        };
        let trimmed = input.trimmed();
        assert_eq!(trimmed.name, "挨拶 1");
        assert_eq!(trimmed.level, "N5");
        assert_eq!(trimmed.expected_kana, "おはようございます");
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        assert_eq!(sample_input().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_empty_field() {
        let input = AudioItemInput {
            level: String::new(),
            expected_kanji: String::new(),
            ..sample_input()
        };
        assert_eq!(
            input.validate(),
            Err(ValidationError::EmptyField { field: "level" })
        );
    }

    #[test]
    fn test_validate_after_trim_rejects_blank() {
        let input = AudioItemInput {
            audio_url: "   ".to_string(),
            ..sample_input()
        };
        assert!(input.validate().is_ok());
        assert_eq!(
            input.trimmed().validate(),
            Err(ValidationError::EmptyField { field: "audio_url" })
        );
    }

    #[test]
    fn test_into_item_round_trips_fields() {
        let item = sample_input().into_item(7);
        assert_eq!(item.id, 7);
        assert_eq!(AudioItemInput::from(&item), sample_input());
    }
}
