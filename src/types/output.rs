//! Output structures for terminal display

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use colored::Colorize;
use crate::types::{
    Analysis, ConversationStage, ConversationState, Emotion, ReasonCode, Response,
    ResponseCategory, Severity,
};

/// One-line status for each processed turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// 1-based turn number
    pub turn: u32,
    pub emotion: Emotion,
    pub intensity: u8,
    pub severity: Severity,
    pub stage: ConversationStage,
    pub category: ResponseCategory,
    /// Branch that produced the response
    pub reason: ReasonCode,
}

impl TurnOutput {
    /// Create new output
    pub fn new(
        turn: u32,
        analysis: &Analysis,
        state: &ConversationState,
        response: &Response,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            turn,
            emotion: analysis.emotion,
            intensity: analysis.intensity,
            severity: analysis.severity,
            stage: state.conversation_stage,
            category: response.category,
            reason: response.reason,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let severity = match self.severity {
            Severity::Severe => self.severity.as_str().red().bold(),
            Severity::Moderate => self.severity.as_str().yellow(),
            Severity::Mild => self.severity.as_str().normal(),
        };
        format!(
            "#{} {} {}/10 | severity={} | stage={} | {}",
            self.turn,
            self.emotion.title().color(self.emotion.color()).bold(),
            self.intensity,
            severity,
            self.stage.to_string().color(self.stage.color()),
            self.reason.code().dimmed(),
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "turn={} | emotion={} | intensity={} | severity={} | stage={} | category={} | reason={}",
            self.turn,
            self.emotion,
            self.intensity,
            self.severity,
            self.stage,
            self.category,
            self.reason.code()
        )
    }
}
