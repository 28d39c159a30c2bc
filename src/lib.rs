//! Mano: rule-based mood analysis and supportive response engine
//!
//! Pipeline: text → MessageAnalyzer → StateTracker → ResponseComposer → output

pub mod config;
pub mod core;
pub mod error;
pub mod types;

// =============================================================================
// ANALYZER LIMITS
// =============================================================================

/// Upper bound for emotion intensity
pub const MAX_INTENSITY: u8 = 10;

/// Offset added to the winning emotion's match count
pub const INTENSITY_BASE: u8 = 2;

/// Intensity at which a message is at least moderate on its own
pub const MODERATE_INTENSITY_FLOOR: u8 = 6;

/// Maximum keywords kept per message
pub const MAX_KEYWORDS: usize = 8;

/// Prior user messages folded into the detection corpus
pub const HISTORY_WINDOW: usize = 3;

// =============================================================================
// CONVERSATION STATE
// =============================================================================

/// Turn count after which exploring → coping
pub const STAGE_COPING_AFTER: u32 = 4;

/// Turn count after which coping → reflection
pub const STAGE_REFLECTION_AFTER: u32 = 8;

/// Turn count after which reflection → closing
pub const STAGE_CLOSING_AFTER: u32 = 12;

/// Recency bound for tracked topics
pub const MAX_TRACKED_TOPICS: usize = 3;

/// Recency bound for tracked events
pub const MAX_TRACKED_EVENTS: usize = 3;

/// Recency bound for tracked concerns
pub const MAX_TRACKED_CONCERNS: usize = 5;

/// Session intensity proxy per severity tier
pub const INTENSITY_SEVERE: u8 = 8;
pub const INTENSITY_MODERATE: u8 = 5;
pub const INTENSITY_MILD: u8 = 3;

// =============================================================================
// COMPOSER
// =============================================================================

/// Approximate length of educational excerpts (chars)
pub const EXCERPT_CHARS: usize = 180;

/// Coping strategies appended per coping response
pub const STRATEGIES_PER_RESPONSE: usize = 2;

/// Default artificial typing delay (milliseconds), applied by callers only
pub const DEFAULT_TYPING_DELAY_MS: u64 = 0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
