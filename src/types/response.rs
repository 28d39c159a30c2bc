//! Composed companion response

use serde::{Deserialize, Serialize};
use crate::types::ReasonCode;

/// Which kind of reply was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    Support,
    Coping,
    Education,
    Referral,
}

impl std::fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResponseCategory::Support => "support",
            ResponseCategory::Coping => "coping",
            ResponseCategory::Education => "education",
            ResponseCategory::Referral => "referral",
        };
        write!(f, "{}", name)
    }
}

/// Reply text plus quick-reply suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub category: ResponseCategory,
    /// Fully substituted, no placeholders left
    pub text: String,
    /// 3-4 short quick replies
    pub suggested_replies: Vec<String>,
    /// Branch that produced this response
    pub reason: ReasonCode,
}

impl Response {
    pub fn new(
        category: ResponseCategory,
        text: String,
        suggested_replies: &[&str],
        reason: ReasonCode,
    ) -> Self {
        Self {
            category,
            text,
            suggested_replies: suggested_replies.iter().map(|s| s.to_string()).collect(),
            reason,
        }
    }
}
