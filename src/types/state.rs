//! Session-scoped conversation state

use serde::{Deserialize, Serialize};
use colored::Color;
use crate::types::{Emotion, Topic};

/// Progress marker for a multi-turn session.
///
/// Ordered: a session only ever moves forward through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStage {
    /// Before the first message
    Initial,
    /// Learning what is going on
    Exploring,
    /// Offering strategies
    Coping,
    /// Looking back on what was shared
    Reflection,
    /// Wrapping up
    Closing,
}

impl ConversationStage {
    /// Terminal color
    pub fn color(&self) -> Color {
        match self {
            ConversationStage::Initial => Color::BrightBlack,
            ConversationStage::Exploring => Color::Cyan,
            ConversationStage::Coping => Color::Yellow,
            ConversationStage::Reflection => Color::Magenta,
            ConversationStage::Closing => Color::Green,
        }
    }
}

impl std::fmt::Display for ConversationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConversationStage::Initial => "INITIAL",
            ConversationStage::Exploring => "EXPLORING",
            ConversationStage::Coping => "COPING",
            ConversationStage::Reflection => "REFLECTION",
            ConversationStage::Closing => "CLOSING",
        };
        write!(f, "{}", name)
    }
}

/// How the companion should pitch its replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStyle {
    Direct,
    Reflective,
    Educational,
    Supportive,
}

impl std::fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResponseStyle::Direct => "direct",
            ResponseStyle::Reflective => "reflective",
            ResponseStyle::Educational => "educational",
            ResponseStyle::Supportive => "supportive",
        };
        write!(f, "{}", name)
    }
}

/// Mutable state for one chat or check-in session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    /// Last non-neutral emotion seen
    pub primary_emotion: Emotion,
    /// Last non-empty context phrase
    pub context: String,
    /// Proxy from the latest severity tier
    pub intensity: u8,
    /// Newest-first, bounded
    pub topics: Vec<Topic>,
    /// Newest-first, bounded
    pub mentioned_events: Vec<String>,
    /// Newest-first, bounded
    pub user_concerns: Vec<String>,
    pub conversation_stage: ConversationStage,
    pub response_style: ResponseStyle,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationState {
    /// Fresh state at session start
    pub fn new() -> Self {
        Self {
            primary_emotion: Emotion::Neutral,
            context: String::new(),
            intensity: 0,
            topics: Vec::new(),
            mentioned_events: Vec::new(),
            user_concerns: Vec::new(),
            conversation_stage: ConversationStage::Initial,
            response_style: ResponseStyle::Supportive,
        }
    }

    /// Reset on session end
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Prepend items not already present (newest first), then truncate to `bound`.
///
/// Items are inserted in reverse so the first incoming item ends up at the
/// front.
pub fn push_recent<T: PartialEq + Clone>(list: &mut Vec<T>, incoming: &[T], bound: usize) {
    let mut fresh: Vec<T> = Vec::new();
    for item in incoming {
        if !list.contains(item) && !fresh.contains(item) {
            fresh.push(item.clone());
        }
    }
    for item in fresh.into_iter().rev() {
        list.insert(0, item);
    }
    list.truncate(bound);
}
