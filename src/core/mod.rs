//! Core modules for Mano

pub mod lexicon;
pub mod templates;
pub mod analyzer;
pub mod tracker;
pub mod composer;
pub mod session;
pub mod journal;
pub mod insights;
pub mod api;

pub use analyzer::MessageAnalyzer;
pub use tracker::StateTracker;
pub use composer::{journaling_prompt, ResponseComposer};
pub use session::{check_in, summarize, Session, TurnOutcome};
pub use journal::JournalStore;
pub use insights::{current_streak, wellness_score, MoodStats};
pub use api::{create_router, run_server};
