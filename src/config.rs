//! Engine configuration
//!
//! Defaults mirror the constants in the crate root. A JSON file may override
//! any subset of fields; CLI flags override the file.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ManoError, Result};
use crate::{DEFAULT_TYPING_DELAY_MS, HISTORY_WINDOW};

/// Runtime settings for sessions, the journal and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Prior user messages folded into detection
    pub history_window: usize,
    /// Artificial pause before a reply is shown
    pub typing_delay_ms: u64,
    /// Fixed seed for template selection (None = entropy)
    pub seed: Option<u64>,
    /// Where mood check-ins are persisted
    pub history_path: PathBuf,
    /// Fallback filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_window: HISTORY_WINDOW,
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            seed: None,
            history_path: PathBuf::from("./mood_history.json"),
            log_filter: "mano=info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file; absent fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Reject values the session cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.history_window == 0 {
            return Err(ManoError::Config("history_window must be at least 1".into()));
        }
        if self.typing_delay_ms > 10_000 {
            return Err(ManoError::Config(format!(
                "typing_delay_ms {} exceeds 10000",
                self.typing_delay_ms
            )));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.history_window, HISTORY_WINDOW);
        assert_eq!(config.typing_delay_ms, DEFAULT_TYPING_DELAY_MS);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed": 42, "typing_delay_ms": 250}}"#).unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.typing_delay_ms, 250);
        assert_eq!(config.history_window, HISTORY_WINDOW);
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"history_window": 0}}"#).unwrap();

        let err = EngineConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ManoError::Config(_)));
    }

    #[test]
    fn test_bad_json_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = EngineConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ManoError::Json(_)));
    }
}
