//! Message Analyzer: classifies one user message against the lexicon tables
//!
//! Emotion, topic and severity detection run on a small corpus (the message
//! plus the most recent prior messages) so history can reinforce a weak
//! signal. Intent, context, keywords and events look at the message alone.

use tracing::{debug, warn};
use crate::{HISTORY_WINDOW, INTENSITY_BASE, MAX_INTENSITY, MAX_KEYWORDS, MODERATE_INTENSITY_FLOOR};
use crate::core::lexicon::{
    count_matches, is_numeral, CONTEXT_CONNECTIVES, CONTEXT_FEELING, CRISIS_TERMS,
    DISTRESS_TERMS, EMOTION_PATTERNS, EVENT_PATTERNS, INTENSIFIERS, INTENT_PATTERNS,
    STOPWORDS, TOPIC_PATTERNS,
};
use crate::types::{Analysis, Emotion, EmotionHit, Intent, ReasonCode, Severity, Topic};

/// Longest clause (in words) kept for context and events
const MAX_CLAUSE_WORDS: usize = 12;

const FALLBACK_CONTEXT_EMOTIONAL: &str = "what you're going through";
const FALLBACK_CONTEXT: &str = "your situation";

/// Rule-based analyzer. Holds no mutable state, so one instance can serve
/// any number of sessions.
#[derive(Debug, Clone)]
pub struct MessageAnalyzer {
    window: usize,
}

impl Default for MessageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageAnalyzer {
    /// Analyzer using the default history window
    pub fn new() -> Self {
        Self { window: HISTORY_WINDOW }
    }

    /// Analyzer folding up to `window` prior messages into the corpus
    pub fn with_window(window: usize) -> Self {
        Self { window }
    }

    /// Classify `message`. `recent` is oldest-first; only its tail is used.
    pub fn analyze(&self, message: &str, recent: &[String]) -> Analysis {
        let message = message.trim();

        // Empty input never borrows signal from history
        if message.is_empty() {
            return blank_analysis();
        }

        let corpus = self.build_corpus(message, recent);

        // Emotion: strictly highest count wins, ties keep detection order
        let mut emotion_hits = Vec::new();
        let mut best: Option<(Emotion, u32)> = None;
        for (emotion, pattern) in EMOTION_PATTERNS.iter() {
            let count = count_matches(pattern, &corpus);
            if count == 0 {
                continue;
            }
            emotion_hits.push(EmotionHit { emotion: *emotion, count });
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((*emotion, count));
            }
        }
        let (emotion, intensity) = match best {
            Some((emotion, count)) => {
                let raw = count.saturating_add(INTENSITY_BASE as u32);
                (emotion, raw.min(MAX_INTENSITY as u32) as u8)
            }
            None => (Emotion::Neutral, 0),
        };

        let (severity, severity_reason) = classify_severity(&corpus, emotion, intensity);

        let intent = if severity == Severity::Severe {
            Intent::Crisis
        } else {
            detect_intent(message)
        };

        let mut topics: Vec<Topic> = TOPIC_PATTERNS
            .iter()
            .filter(|(_, pattern)| pattern.is_match(&corpus))
            .map(|(topic, _)| *topic)
            .collect();
        if topics.is_empty() {
            topics.push(Topic::General);
        }

        let context = extract_context(message, emotion, &topics);
        let keywords = extract_keywords(message);
        let mentioned_events = extract_events(message);

        debug!(
            emotion = %emotion,
            intensity,
            severity = %severity,
            intent = %intent,
            topics = topics.len(),
            reason = severity_reason.code(),
            "Analyzed message"
        );
        if severity == Severity::Severe {
            warn!(reason = severity_reason.code(), "Crisis language detected");
        }

        Analysis {
            emotion,
            intensity,
            severity,
            severity_reason,
            topics,
            intent,
            context,
            keywords,
            mentioned_events,
            is_question: message.contains('?'),
            emotion_hits,
        }
    }

    /// Message followed by up to `window` most recent prior messages
    fn build_corpus(&self, message: &str, recent: &[String]) -> String {
        let skip = recent.len().saturating_sub(self.window);
        let mut corpus = String::from(message);
        for prior in &recent[skip..] {
            corpus.push('\n');
            corpus.push_str(prior);
        }
        corpus
    }
}

fn blank_analysis() -> Analysis {
    Analysis {
        emotion: Emotion::Neutral,
        intensity: 0,
        severity: Severity::Mild,
        severity_reason: ReasonCode::R001_NO_DISTRESS,
        topics: vec![Topic::General],
        intent: Intent::General,
        context: FALLBACK_CONTEXT.to_string(),
        keywords: Vec::new(),
        mentioned_events: Vec::new(),
        is_question: false,
        emotion_hits: Vec::new(),
    }
}

fn classify_severity(corpus: &str, emotion: Emotion, intensity: u8) -> (Severity, ReasonCode) {
    if CRISIS_TERMS.is_match(corpus) {
        (Severity::Severe, ReasonCode::R001_CRISIS_TERM)
    } else if DISTRESS_TERMS.is_match(corpus) {
        (Severity::Moderate, ReasonCode::R001_DISTRESS_TERM)
    } else if !emotion.is_neutral() && INTENSIFIERS.is_match(corpus) {
        (Severity::Moderate, ReasonCode::R001_INTENSIFIED_EMOTION)
    } else if intensity >= MODERATE_INTENSITY_FLOOR {
        (Severity::Moderate, ReasonCode::R001_HIGH_INTENSITY)
    } else {
        (Severity::Mild, ReasonCode::R001_NO_DISTRESS)
    }
}

fn detect_intent(message: &str) -> Intent {
    INTENT_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(message))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::General)
}

/// Fallback chain: feeling phrase, connective clause, topic phrase, generic
fn extract_context(message: &str, emotion: Emotion, topics: &[Topic]) -> String {
    if let Some(phrase) = CONTEXT_FEELING
        .captures(message)
        .and_then(|caps| caps.get(2))
        .map(|m| clip_clause(m.as_str()))
        .filter(|p| !p.is_empty())
    {
        return phrase;
    }

    for pattern in CONTEXT_CONNECTIVES.iter() {
        if let Some(phrase) = pattern
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| clip_clause(m.as_str()))
            .filter(|p| !p.is_empty())
        {
            return phrase;
        }
    }

    if emotion.is_neutral() {
        return FALLBACK_CONTEXT.to_string();
    }

    match topics.iter().find(|t| **t != Topic::General) {
        Some(topic) => format!("your {} situation", topic.phrase()),
        None => FALLBACK_CONTEXT_EMOTIONAL.to_string(),
    }
}

fn extract_keywords(message: &str) -> Vec<String> {
    message
        .to_lowercase()
        .replace('’', "'")
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| token.chars().count() > 3)
        .filter(|token| !is_numeral(token) && !STOPWORDS.contains(token))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

fn extract_events(message: &str) -> Vec<String> {
    let mut events = Vec::new();
    for pattern in EVENT_PATTERNS.iter() {
        for caps in pattern.captures_iter(message) {
            if let Some(clause) = caps.get(1).map(|m| clip_clause(m.as_str())) {
                if !clause.is_empty() {
                    events.push(clause);
                }
            }
        }
    }
    events
}

/// Trim punctuation and cap a captured clause to a short phrase
fn clip_clause(raw: &str) -> String {
    let words: Vec<&str> = raw.split_whitespace().take(MAX_CLAUSE_WORDS).collect();
    words
        .join(" ")
        .trim_matches(|c: char| c.is_ascii_punctuation() && c != '\'')
        .trim()
        .to_string()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn analyze(text: &str) -> Analysis {
        MessageAnalyzer::new().analyze(text, &[])
    }

    #[test]
    fn test_exam_anxiety() {
        let result = analyze("I feel anxious about my exam tomorrow");
        assert_eq!(result.emotion, Emotion::Anxiety);
        assert_eq!(result.intensity, 3);
        assert_eq!(result.severity, Severity::Mild);
        assert_eq!(result.intent, Intent::Venting);
        assert!(result.topics.contains(&Topic::Education));
        assert_eq!(result.context, "my exam tomorrow");
        assert_eq!(result.keywords, vec!["feel", "anxious", "exam", "tomorrow"]);
        assert!(!result.is_question);
    }

    #[test]
    fn test_crisis_forces_intent() {
        let result = analyze("What should I do, I want to kill myself");
        assert_eq!(result.severity, Severity::Severe);
        assert_eq!(result.intent, Intent::Crisis);
        assert_eq!(result.severity_reason, ReasonCode::R001_CRISIS_TERM);
    }

    #[test]
    fn test_question_intent() {
        let result = analyze("What is anxiety?");
        assert_eq!(result.intent, Intent::AskingQuestion);
        assert_eq!(result.emotion, Emotion::Anxiety);
        assert!(result.is_question);
    }

    #[test]
    fn test_no_match_is_neutral() {
        let result = analyze("ok");
        assert_eq!(result.emotion, Emotion::Neutral);
        assert_eq!(result.intensity, 0);
        assert_eq!(result.severity, Severity::Mild);
        assert_eq!(result.topics, vec![Topic::General]);
        assert_eq!(result.context, "your situation");
        assert!(result.emotion_hits.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = MessageAnalyzer::new().analyze("   ", &["I feel so sad".to_string()]);
        assert_eq!(result.emotion, Emotion::Neutral);
        assert_eq!(result.topics, vec![Topic::General]);
        assert_eq!(result.context, "your situation");
    }

    #[test]
    fn test_tie_keeps_first_declared() {
        let result = analyze("worried and sad");
        assert_eq!(result.emotion, Emotion::Anxiety);
        assert_eq!(result.emotion_hits.len(), 2);
    }

    #[test]
    fn test_intensity_capped() {
        let result = analyze(&"worried ".repeat(20));
        assert_eq!(result.intensity, MAX_INTENSITY);
        assert_eq!(result.severity, Severity::Moderate);
        assert_eq!(result.severity_reason, ReasonCode::R001_HIGH_INTENSITY);
    }

    #[test]
    fn test_intensifier_with_emotion() {
        let result = analyze("I am so sad");
        assert_eq!(result.severity, Severity::Moderate);
        assert_eq!(result.severity_reason, ReasonCode::R001_INTENSIFIED_EMOTION);
        // Intensifier alone is not enough
        assert_eq!(analyze("it is so late").severity, Severity::Mild);
    }

    #[test]
    fn test_history_reinforces_emotion_only() {
        let history = vec!["I have been sad all week".to_string()];
        let result = MessageAnalyzer::new().analyze("ok then", &history);
        assert_eq!(result.emotion, Emotion::Sadness);
        assert!(result.keywords.iter().all(|k| k != "week"));
    }

    #[test]
    fn test_window_limits_history() {
        let history = vec![
            "I am furious".to_string(),
            "fine".to_string(),
            "fine".to_string(),
            "fine".to_string(),
        ];
        let result = MessageAnalyzer::new().analyze("ok", &history);
        assert_eq!(result.emotion, Emotion::Neutral);
        let wide = MessageAnalyzer::with_window(4).analyze("ok", &history);
        assert_eq!(wide.emotion, Emotion::Anger);
    }

    #[test]
    fn test_context_fallbacks() {
        assert_eq!(analyze("I hate my job").context, "your work situation");
        assert_eq!(analyze("I'm feeling sad").context, "what you're going through");
        assert_eq!(analyze("the weather is nice").context, "your situation");
    }

    #[test]
    fn test_connective_context() {
        let result = analyze("Everything is hard because my manager keeps yelling.");
        assert_eq!(result.context, "my manager keeps yelling");
    }

    #[test]
    fn test_keywords_filtered_and_capped() {
        let result = analyze(
            "Honestly, 2024 brought deadlines, meetings, reviews, audits, budgets, layoffs, rumours, worries",
        );
        assert_eq!(result.keywords.len(), MAX_KEYWORDS);
        assert_eq!(result.keywords[0], "honestly");
        assert!(!result.keywords.iter().any(|k| k == "2024"));
    }

    #[test]
    fn test_curly_apostrophes_hit_stopwords() {
        let result = analyze("I don’t know, it’s my landlord again");
        assert_eq!(result.keywords, vec!["know", "landlord", "again"]);
    }

    #[test]
    fn test_events_extracted() {
        let result = analyze("Yesterday I failed my driving test.");
        assert!(result.mentioned_events.contains(&"I failed my driving test".to_string()));
        assert!(result.mentioned_events.contains(&"my driving test".to_string()));
    }

    #[test]
    fn test_deterministic() {
        let analyzer = MessageAnalyzer::new();
        let history = vec!["work has been rough".to_string()];
        let text = "I'm really stressed about the deadline, what should I do?";
        assert_eq!(analyzer.analyze(text, &history), analyzer.analyze(text, &history));
    }
}
