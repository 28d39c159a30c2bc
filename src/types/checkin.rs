//! Mood check-in records, as persisted to the journal

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The `{emotion, analysis, advice}` triple shown after a check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodResult {
    /// Title-cased emotion name
    pub emotion: String,
    /// One-line human-readable summary
    pub analysis: String,
    /// Suggestion text
    pub advice: String,
}

/// One journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodCheckIn {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// Original text as typed
    pub entry: String,
    pub result: MoodResult,
}

impl MoodCheckIn {
    /// Create a new check-in stamped now
    pub fn new(entry: impl Into<String>, result: MoodResult) -> Self {
        Self::at(entry, result, Utc::now())
    }

    /// Create a check-in with an explicit timestamp
    pub fn at(entry: impl Into<String>, result: MoodResult, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            entry: entry.into(),
            result,
        }
    }
}
