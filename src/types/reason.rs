//! Reason codes for severity, stage and response-branch decisions

use serde::{Deserialize, Serialize};

/// Why a decision came out the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // R001: Severity
    // =========================================================================
    /// Crisis phrase found in corpus
    R001_CRISIS_TERM,
    /// Moderate distress phrase found
    R001_DISTRESS_TERM,
    /// Intensifier alongside a non-neutral emotion
    R001_INTENSIFIED_EMOTION,
    /// Emotion intensity alone reached the floor
    R001_HIGH_INTENSITY,
    /// No distress signal
    R001_NO_DISTRESS,

    // =========================================================================
    // R002: Stage transitions
    // =========================================================================
    /// initial → exploring on first turn
    R002_STAGE_STARTED,
    /// exploring → coping
    R002_STAGE_TO_COPING,
    /// coping → reflection
    R002_STAGE_TO_REFLECTION,
    /// reflection → closing
    R002_STAGE_TO_CLOSING,
    /// No transition this turn
    R002_STAGE_MAINTAINED,

    // =========================================================================
    // R003: Response branch
    // =========================================================================
    /// Severe → referral
    R003_CRISIS_REFERRAL,
    /// Moderate severity → coping
    R003_MODERATE_COPING,
    /// Coping stage → coping
    R003_STAGE_COPING,
    /// Question intent → education
    R003_QUESTION_EDUCATION,
    /// Topic with educational content → education
    R003_TOPIC_EDUCATION,
    /// Nothing else applied → support
    R003_DEFAULT_SUPPORT,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R001_CRISIS_TERM => "R001_CRISIS_TERM",
            Self::R001_DISTRESS_TERM => "R001_DISTRESS_TERM",
            Self::R001_INTENSIFIED_EMOTION => "R001_INTENSIFIED_EMOTION",
            Self::R001_HIGH_INTENSITY => "R001_HIGH_INTENSITY",
            Self::R001_NO_DISTRESS => "R001_NO_DISTRESS",
            Self::R002_STAGE_STARTED => "R002_STAGE_STARTED",
            Self::R002_STAGE_TO_COPING => "R002_STAGE_TO_COPING",
            Self::R002_STAGE_TO_REFLECTION => "R002_STAGE_TO_REFLECTION",
            Self::R002_STAGE_TO_CLOSING => "R002_STAGE_TO_CLOSING",
            Self::R002_STAGE_MAINTAINED => "R002_STAGE_MAINTAINED",
            Self::R003_CRISIS_REFERRAL => "R003_CRISIS_REFERRAL",
            Self::R003_MODERATE_COPING => "R003_MODERATE_COPING",
            Self::R003_STAGE_COPING => "R003_STAGE_COPING",
            Self::R003_QUESTION_EDUCATION => "R003_QUESTION_EDUCATION",
            Self::R003_TOPIC_EDUCATION => "R003_TOPIC_EDUCATION",
            Self::R003_DEFAULT_SUPPORT => "R003_DEFAULT_SUPPORT",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R001_CRISIS_TERM => "Crisis language detected",
            Self::R001_DISTRESS_TERM => "Distress language detected",
            Self::R001_INTENSIFIED_EMOTION => "Emotion with intensifier",
            Self::R001_HIGH_INTENSITY => "High emotion intensity",
            Self::R001_NO_DISTRESS => "No distress signal",
            Self::R002_STAGE_STARTED => "Conversation started",
            Self::R002_STAGE_TO_COPING => "Moving to coping",
            Self::R002_STAGE_TO_REFLECTION => "Moving to reflection",
            Self::R002_STAGE_TO_CLOSING => "Moving to closing",
            Self::R002_STAGE_MAINTAINED => "Stage unchanged",
            Self::R003_CRISIS_REFERRAL => "Offering crisis resources",
            Self::R003_MODERATE_COPING => "Coping support for moderate distress",
            Self::R003_STAGE_COPING => "Coping support for current stage",
            Self::R003_QUESTION_EDUCATION => "Answering with information",
            Self::R003_TOPIC_EDUCATION => "Sharing topic information",
            Self::R003_DEFAULT_SUPPORT => "Reflective support",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

// =============================================================================
// TESTS
// =============================================================================
