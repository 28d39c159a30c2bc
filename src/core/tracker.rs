//! Conversation State Tracker: folds each analysis into the session state
//!
//! Stage transitions (one step per turn, never backwards):
//! - INITIAL → EXPLORING: first turn
//! - EXPLORING → COPING: turn > 4
//! - COPING → REFLECTION: turn > 8
//! - REFLECTION → CLOSING: turn > 12

use tracing::{debug, info};
use crate::{
    INTENSITY_MILD, INTENSITY_MODERATE, INTENSITY_SEVERE, MAX_TRACKED_CONCERNS,
    MAX_TRACKED_EVENTS, MAX_TRACKED_TOPICS, STAGE_CLOSING_AFTER, STAGE_COPING_AFTER,
    STAGE_REFLECTION_AFTER,
};
use crate::core::lexicon::FILLER_VERBS;
use crate::types::{
    push_recent, Analysis, ConversationStage, ConversationState, Intent, ReasonCode,
    ResponseStyle, Severity, Topic,
};

/// Stateless rule set; the state itself is owned by the caller
#[derive(Debug, Default, Clone, Copy)]
pub struct StateTracker;

impl StateTracker {
    pub fn new() -> Self {
        Self
    }

    /// Apply one turn. `turn_count` is 1-based and includes this turn.
    /// Returns the stage reason code.
    pub fn advance(
        &self,
        state: &mut ConversationState,
        analysis: &Analysis,
        turn_count: u32,
    ) -> ReasonCode {
        if !analysis.emotion.is_neutral() {
            state.primary_emotion = analysis.emotion;
        }
        if !analysis.context.is_empty() {
            state.context = analysis.context.clone();
        }
        state.intensity = match analysis.severity {
            Severity::Severe => INTENSITY_SEVERE,
            Severity::Moderate => INTENSITY_MODERATE,
            Severity::Mild => INTENSITY_MILD,
        };

        let topics: Vec<Topic> = analysis.specific_topics().collect();
        push_recent(&mut state.topics, &topics, MAX_TRACKED_TOPICS);
        push_recent(&mut state.mentioned_events, &analysis.mentioned_events, MAX_TRACKED_EVENTS);

        let concerns: Vec<String> = analysis
            .keywords
            .iter()
            .filter(|k| !FILLER_VERBS.contains(&k.as_str()))
            .cloned()
            .collect();
        push_recent(&mut state.user_concerns, &concerns, MAX_TRACKED_CONCERNS);

        let (stage, reason) = next_stage(state.conversation_stage, turn_count);
        if stage != state.conversation_stage {
            info!(from = %state.conversation_stage, to = %stage, turn = turn_count, "Stage transition");
            state.conversation_stage = stage;
        }

        state.response_style = next_style(state.response_style, analysis, stage);

        debug!(
            turn = turn_count,
            stage = %state.conversation_stage,
            style = %state.response_style,
            intensity = state.intensity,
            "Advanced state"
        );
        reason
    }
}

fn next_stage(current: ConversationStage, turn_count: u32) -> (ConversationStage, ReasonCode) {
    match current {
        ConversationStage::Initial => {
            (ConversationStage::Exploring, ReasonCode::R002_STAGE_STARTED)
        }
        ConversationStage::Exploring if turn_count > STAGE_COPING_AFTER => {
            (ConversationStage::Coping, ReasonCode::R002_STAGE_TO_COPING)
        }
        ConversationStage::Coping if turn_count > STAGE_REFLECTION_AFTER => {
            (ConversationStage::Reflection, ReasonCode::R002_STAGE_TO_REFLECTION)
        }
        ConversationStage::Reflection if turn_count > STAGE_CLOSING_AFTER => {
            (ConversationStage::Closing, ReasonCode::R002_STAGE_TO_CLOSING)
        }
        other => (other, ReasonCode::R002_STAGE_MAINTAINED),
    }
}

fn next_style(
    current: ResponseStyle,
    analysis: &Analysis,
    stage: ConversationStage,
) -> ResponseStyle {
    if analysis.intent == Intent::AskingQuestion || analysis.is_question {
        ResponseStyle::Educational
    } else if analysis.intent == Intent::SeekingAdvice || stage == ConversationStage::Coping {
        ResponseStyle::Direct
    } else if analysis.intent == Intent::Venting {
        ResponseStyle::Supportive
    } else if stage == ConversationStage::Reflection {
        ResponseStyle::Reflective
    } else {
        current
    }
}

// =============================================================================
// TESTS
// =============================================================================
