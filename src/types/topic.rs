//! Topic tags

use serde::{Deserialize, Serialize};

/// Life area a message touches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Work,
    Relationships,
    Family,
    Health,
    Finances,
    Education,
    Social,
    Identity,
    Future,
    Past,
    SelfEsteem,
    Grief,
    Trauma,
    Substance,
    Focus,
    Sleep,
    /// Placeholder when nothing else matched
    General,
}

impl Topic {
    /// Detection order (General is never detected, only defaulted)
    pub const DETECTABLE: [Topic; 16] = [
        Topic::Work,
        Topic::Relationships,
        Topic::Family,
        Topic::Health,
        Topic::Finances,
        Topic::Education,
        Topic::Social,
        Topic::Identity,
        Topic::Future,
        Topic::Past,
        Topic::SelfEsteem,
        Topic::Grief,
        Topic::Trauma,
        Topic::Substance,
        Topic::Focus,
        Topic::Sleep,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Topic::Work => "work",
            Topic::Relationships => "relationships",
            Topic::Family => "family",
            Topic::Health => "health",
            Topic::Finances => "finances",
            Topic::Education => "education",
            Topic::Social => "social",
            Topic::Identity => "identity",
            Topic::Future => "future",
            Topic::Past => "past",
            Topic::SelfEsteem => "self_esteem",
            Topic::Grief => "grief",
            Topic::Trauma => "trauma",
            Topic::Substance => "substance",
            Topic::Focus => "focus",
            Topic::Sleep => "sleep",
            Topic::General => "general",
        }
    }

    /// Natural-language noun used in "your {topic} situation"
    pub fn phrase(&self) -> &'static str {
        match self {
            Topic::SelfEsteem => "self-esteem",
            Topic::Finances => "financial",
            Topic::Relationships => "relationship",
            other => other.key(),
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
