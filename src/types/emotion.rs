//! Classification enums: emotion, severity, intent

use serde::{Deserialize, Serialize};
use colored::Color;

/// Coarse affect category detected from text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// No pattern matched
    Neutral,
    Anxiety,
    Sadness,
    Anger,
    Overwhelm,
    Joy,
    Fear,
    Shame,
    Grief,
    Confusion,
}

impl Emotion {
    /// Detection order; on equal counts the earlier entry wins
    pub const SCORED: [Emotion; 9] = [
        Emotion::Anxiety,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Overwhelm,
        Emotion::Joy,
        Emotion::Fear,
        Emotion::Shame,
        Emotion::Grief,
        Emotion::Confusion,
    ];

    /// Lowercase key used in lexicon and template tables
    pub fn key(&self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Anxiety => "anxiety",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Overwhelm => "overwhelm",
            Emotion::Joy => "joy",
            Emotion::Fear => "fear",
            Emotion::Shame => "shame",
            Emotion::Grief => "grief",
            Emotion::Confusion => "confusion",
        }
    }

    /// Title-cased name for display and check-in records
    pub fn title(&self) -> &'static str {
        match self {
            Emotion::Neutral => "Neutral",
            Emotion::Anxiety => "Anxiety",
            Emotion::Sadness => "Sadness",
            Emotion::Anger => "Anger",
            Emotion::Overwhelm => "Overwhelm",
            Emotion::Joy => "Joy",
            Emotion::Fear => "Fear",
            Emotion::Shame => "Shame",
            Emotion::Grief => "Grief",
            Emotion::Confusion => "Confusion",
        }
    }

    /// Adjective form, substituted for `{emotion}` in templates
    pub fn adjective(&self) -> &'static str {
        match self {
            Emotion::Neutral => "this way",
            Emotion::Anxiety => "anxious",
            Emotion::Sadness => "sad",
            Emotion::Anger => "angry",
            Emotion::Overwhelm => "overwhelmed",
            Emotion::Joy => "happy",
            Emotion::Fear => "afraid",
            Emotion::Shame => "ashamed",
            Emotion::Grief => "grief-stricken",
            Emotion::Confusion => "confused",
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Emotion::Neutral
    }

    /// Parse a table key or title back into an emotion
    pub fn from_key(key: &str) -> Option<Emotion> {
        let key = key.trim().to_lowercase();
        std::iter::once(Emotion::Neutral)
            .chain(Emotion::SCORED)
            .find(|e| e.key() == key)
    }

    /// Terminal color
    pub fn color(&self) -> Color {
        match self {
            Emotion::Neutral => Color::BrightBlack,
            Emotion::Joy => Color::Green,
            Emotion::Anxiety | Emotion::Fear => Color::Yellow,
            Emotion::Anger => Color::Red,
            Emotion::Sadness | Emotion::Grief => Color::Blue,
            Emotion::Overwhelm | Emotion::Confusion => Color::Magenta,
            Emotion::Shame => Color::Cyan,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Coarse risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    /// Crisis language present; always routed to referral
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Communicative purpose of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Venting,
    SeekingAdvice,
    AskingQuestion,
    SharingExperience,
    Crisis,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Venting => "venting",
            Intent::SeekingAdvice => "seeking_advice",
            Intent::AskingQuestion => "asking_question",
            Intent::SharingExperience => "sharing_experience",
            Intent::Crisis => "crisis",
            Intent::General => "general",
        }
    }

    /// Short phrase for one-line summaries
    pub fn describe(&self) -> &'static str {
        match self {
            Intent::Venting => "you seem to need to be heard",
            Intent::SeekingAdvice => "you seem to be looking for guidance",
            Intent::AskingQuestion => "you have a question on your mind",
            Intent::SharingExperience => "you are sharing something that happened",
            Intent::Crisis => "you may be in real distress right now",
            Intent::General => "you are checking in",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for emotion in Emotion::SCORED {
            assert_eq!(Emotion::from_key(emotion.key()), Some(emotion));
        }
        assert_eq!(Emotion::from_key("Neutral"), Some(Emotion::Neutral));
        assert_eq!(Emotion::from_key("contemplative"), None);
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Severe > Severity::Moderate);
        assert!(Severity::Moderate > Severity::Mild);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Intent::SeekingAdvice).unwrap();
        assert_eq!(json, "\"seeking_advice\"");
    }
}
