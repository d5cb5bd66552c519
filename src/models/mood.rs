use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Suggested vocabulary offered by the client. The server accepts any non-empty mood.
pub const MOOD_OPTIONS: [&str; 7] = [
    "Very Happy",
    "Happy",
    "Neutral",
    "Sad",
    "Very Sad",
    "Stressed",
    "Calm",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: i64,
    pub mood: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// POST /api/moods
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateMoodRequest {
    #[validate(
        required(message = "Mood is required"),
        length(min = 1, message = "Mood is required")
    )]
    #[serde(default, deserialize_with = "string_or_none")]
    pub mood: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CreateMoodRequest {
    pub fn new(mood: impl Into<String>, note: Option<String>) -> Self {
        Self {
            mood: Some(mood.into()),
            note,
        }
    }

    /// The note as it should be stored: a blank note is no note.
    pub fn normalized_note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.is_empty())
    }
}

/// Anything other than a JSON string (null, `false`, `0`, objects...) counts
/// as no mood, so it fails the same `required` check as an absent field.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
