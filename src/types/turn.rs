//! Rolling window of prior user messages
//!
//! Detection reads the last few user messages so recent history can
//! reinforce a weak signal. Only user text is kept; companion replies are
//! never fed back into analysis.

use std::collections::VecDeque;
use serde::{Deserialize, Serialize};
use crate::HISTORY_WINDOW;

/// Bounded, oldest-first message window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageHistory {
    messages: VecDeque<String>,
    capacity: usize,
}

impl Default for MessageHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageHistory {
    /// Create new window with default capacity (3)
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_WINDOW)
    }

    /// Create window with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Add a message, evicting the oldest past capacity
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push_back(message.into());
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
        }
    }

    /// Messages oldest-first, ready to pass to the analyzer
    pub fn recent(&self) -> Vec<String> {
        self.messages.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear all messages
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================
