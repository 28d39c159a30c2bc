//! Per-message analysis result

use serde::{Deserialize, Serialize};
use crate::types::{Emotion, Intent, ReasonCode, Severity, Topic};

/// Match count for one emotion pattern (debug breakdown)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionHit {
    pub emotion: Emotion,
    pub count: u32,
}

/// Structured classification of a single user message.
///
/// Built fresh for each message and never mutated afterwards. Carries no
/// timestamp so identical input always yields an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Highest-scoring emotion (neutral if nothing matched)
    pub emotion: Emotion,
    /// 0-10, from match count
    pub intensity: u8,
    /// Risk tier
    pub severity: Severity,
    /// Signal that set the tier
    pub severity_reason: ReasonCode,
    /// Detected topics, never empty
    pub topics: Vec<Topic>,
    /// Communicative purpose
    pub intent: Intent,
    /// Phrase naming what the feeling is about
    pub context: String,
    /// Up to 8 content words in message order
    pub keywords: Vec<String>,
    /// Clauses captured by event connectives (may repeat)
    pub mentioned_events: Vec<String>,
    /// Raw message contained a question mark
    pub is_question: bool,
    /// Non-zero emotion pattern counts, in detection order
    pub emotion_hits: Vec<EmotionHit>,
}

impl Analysis {
    /// Is this a crisis-tier analysis?
    pub fn is_crisis(&self) -> bool {
        self.severity == Severity::Severe
    }

    /// Topics excluding the General placeholder
    pub fn specific_topics(&self) -> impl Iterator<Item = Topic> + '_ {
        self.topics.iter().copied().filter(|t| *t != Topic::General)
    }
}
