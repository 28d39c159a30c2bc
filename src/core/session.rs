//! Turn orchestrator: one companion conversation
//!
//! Each turn runs analyze → advance → compose against state the session owns
//! exclusively. Sessions share nothing, so a server can hold many of them.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::config::EngineConfig;
use crate::core::composer::{journaling_prompt, reflect_pronouns};
use crate::core::{MessageAnalyzer, ResponseComposer, StateTracker};
use crate::types::{
    Analysis, ConversationState, MessageHistory, MoodCheckIn, MoodResult, ReasonCode, Response,
};

/// Everything produced by one turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// 1-based turn number
    pub turn: u32,
    pub analysis: Analysis,
    /// State after this turn
    pub state: ConversationState,
    pub response: Response,
    /// Stage transition reason
    pub transition: ReasonCode,
    /// Journal record for this turn
    pub check_in: MoodCheckIn,
}

/// A single conversation with its own state, history and random source
#[derive(Debug)]
pub struct Session {
    analyzer: MessageAnalyzer,
    tracker: StateTracker,
    composer: ResponseComposer<StdRng>,
    state: ConversationState,
    history: MessageHistory,
    turn_count: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Session {
    pub fn new(config: &EngineConfig) -> Self {
        let composer = match config.seed {
            Some(seed) => ResponseComposer::seeded(seed),
            None => ResponseComposer::from_entropy(),
        };
        Self {
            analyzer: MessageAnalyzer::with_window(config.history_window),
            tracker: StateTracker::new(),
            composer,
            state: ConversationState::new(),
            history: MessageHistory::with_capacity(config.history_window),
            turn_count: 0,
        }
    }

    /// Process one user message
    pub fn respond(&mut self, text: &str) -> TurnOutcome {
        self.turn_count += 1;
        let turn = self.turn_count;

        let analysis = self.analyzer.analyze(text, &self.history.recent());
        let transition = self.tracker.advance(&mut self.state, &analysis, turn);
        let response = self.composer.compose(&analysis, &self.state);

        // Pushed after analysis so a message never reinforces itself
        let text = text.trim();
        if !text.is_empty() {
            self.history.push(text);
        }

        let check_in = MoodCheckIn::new(
            text,
            MoodResult {
                emotion: analysis.emotion.title().to_string(),
                analysis: summarize(&analysis),
                advice: response.text.clone(),
            },
        );

        info!(
            turn,
            emotion = %analysis.emotion,
            severity = %analysis.severity,
            stage = %self.state.conversation_stage,
            category = %response.category,
            "Turn complete"
        );

        TurnOutcome {
            turn,
            analysis,
            state: self.state.clone(),
            response,
            transition,
            check_in,
        }
    }

    /// End the conversation and forget everything
    pub fn end(&mut self) {
        info!(turns = self.turn_count, "Session ended");
        self.state.reset();
        self.history.clear();
        self.turn_count = 0;
    }

    /// Journaling prompt for the session's current emotion
    pub fn journaling_prompt(&mut self) -> &'static str {
        let emotion = self.state.primary_emotion;
        journaling_prompt(emotion, self.composer.rng_mut())
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn history(&self) -> &MessageHistory {
        &self.history
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }
}

/// One-line human-readable analysis, as stored with a check-in
pub fn summarize(analysis: &Analysis) -> String {
    if analysis.emotion.is_neutral() {
        return format!("No strong emotion detected; {}.", analysis.intent.describe());
    }
    format!(
        "Detected {} feelings ({}/10, {}) about {}; {}.",
        analysis.emotion.adjective(),
        analysis.intensity,
        analysis.severity,
        reflect_pronouns(&analysis.context),
        analysis.intent.describe()
    )
}

/// Analyze a single check-in outside any conversation
pub fn check_in(text: &str, config: &EngineConfig) -> TurnOutcome {
    Session::new(config).respond(text)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConversationStage, Emotion, ResponseCategory};
    use pretty_assertions::assert_eq;

    fn seeded() -> Session {
        Session::new(&EngineConfig { seed: Some(3), ..EngineConfig::default() })
    }

    #[test]
    fn test_turns_are_counted() {
        let mut session = seeded();
        assert_eq!(session.respond("hello").turn, 1);
        assert_eq!(session.respond("hello again").turn, 2);
        assert_eq!(session.turn_count(), 2);
    }

    #[test]
    fn test_history_excludes_current_message() {
        let mut session = seeded();
        let first = session.respond("I feel so sad today");
        assert_eq!(first.analysis.emotion, Emotion::Sadness);
        // Sadness carried from history into a neutral follow-up
        let second = session.respond("ok");
        assert_eq!(second.analysis.emotion, Emotion::Sadness);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_empty_message_not_stored() {
        let mut session = seeded();
        session.respond("   ");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_check_in_shape() {
        let mut session = seeded();
        let outcome = session.respond("I feel anxious about my exam tomorrow");
        assert_eq!(outcome.check_in.entry, "I feel anxious about my exam tomorrow");
        assert_eq!(outcome.check_in.result.emotion, "Anxiety");
        assert_eq!(outcome.check_in.result.advice, outcome.response.text);
        assert!(outcome.check_in.result.analysis.contains("your exam tomorrow"));
    }

    #[test]
    fn test_end_resets() {
        let mut session = seeded();
        for _ in 0..6 {
            session.respond("I feel tired of all this");
        }
        assert_eq!(session.state().conversation_stage, ConversationStage::Coping);
        session.end();
        assert_eq!(session.turn_count(), 0);
        assert_eq!(session.state(), &ConversationState::new());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_crisis_turn() {
        let outcome = check_in("I don't want to live anymore", &EngineConfig::default());
        assert_eq!(outcome.response.category, ResponseCategory::Referral);
        assert!(outcome.check_in.result.analysis.contains("real distress"));
    }

    #[test]
    fn test_summary_neutral() {
        let analysis = MessageAnalyzer::new().analyze("ok", &[]);
        assert_eq!(summarize(&analysis), "No strong emotion detected; you are checking in.");
    }
}
