//! Core types for Mano

mod analysis;
mod checkin;
mod emotion;
mod output;
mod reason;
mod response;
mod state;
mod topic;
mod turn;

pub use analysis::{Analysis, EmotionHit};
pub use checkin::{MoodCheckIn, MoodResult};
pub use emotion::{Emotion, Intent, Severity};
pub use output::TurnOutput;
pub use reason::ReasonCode;
pub use response::{Response, ResponseCategory};
pub use state::{push_recent, ConversationStage, ConversationState, ResponseStyle};
pub use topic::Topic;
pub use turn::MessageHistory;
