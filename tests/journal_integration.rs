//! Integration tests for the journal store and profile insights
//!
//! Check-ins written by sessions, read back for stats

use chrono::{Duration, Utc};
use mano::config::EngineConfig;
use mano::core::{current_streak, wellness_score, JournalStore, MoodStats, Session};
use mano::types::{MoodCheckIn, MoodResult};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn test_session_check_ins_round_trip_through_journal() {
    let dir = tempdir().unwrap();
    let store = JournalStore::open(dir.path().join("mood_history.json"));
    let mut session = Session::new(&EngineConfig { seed: Some(1), ..EngineConfig::default() });

    for text in ["I feel great today", "I am worried about money"] {
        let outcome = session.respond(text);
        store.append(outcome.check_in).unwrap();
    }

    let history = store.load().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].entry, "I am worried about money");
    assert_eq!(history[0].result.emotion, "Anxiety");
    assert_eq!(history[1].result.emotion, "Joy");
    assert!(!history[0].result.advice.is_empty());
    assert!(!history[0].result.analysis.is_empty());
}

#[test]
fn test_stats_from_stored_history() {
    let dir = tempdir().unwrap();
    let store = JournalStore::open(dir.path().join("history.json"));
    let now = Utc::now();
    let moods = ["Joy", "Sadness", "Joy", "Neutral"];
    // Oldest first on disk order after prepending
    for (i, emotion) in moods.iter().enumerate().rev() {
        let check_in = MoodCheckIn::at(
            "a short but honest journal entry",
            MoodResult {
                emotion: emotion.to_string(),
                analysis: String::new(),
                advice: String::new(),
            },
            now - Duration::days(i as i64),
        );
        store.append(check_in).unwrap();
    }

    let history = store.load().unwrap();
    assert_eq!(history[0].result.emotion, "Joy");
    assert_eq!(current_streak(&history), 4);

    let stats = MoodStats::from_history(&history);
    assert_eq!(stats.check_ins, 4);
    assert_eq!(stats.most_frequent, "Joy");
    assert_eq!(stats.positive_percent, 50);
    assert_eq!(stats.weekly.len(), 4);
    assert_eq!(stats.weekly.last().unwrap().value, 7);
    assert_eq!(stats.wellness_score, wellness_score(&history, 4));
    assert!(stats.wellness_score > 0 && stats.wellness_score <= 100);
}

#[test]
fn test_weekly_keeps_last_seven() {
    let dir = tempdir().unwrap();
    let store = JournalStore::open(dir.path().join("history.json"));
    for i in 0..10 {
        let result = MoodResult {
            emotion: if i % 2 == 0 { "Neutral" } else { "Grief" }.to_string(),
            analysis: String::new(),
            advice: String::new(),
        };
        store.append(MoodCheckIn::new(format!("entry {}", i), result)).unwrap();
    }
    let stats = MoodStats::from_history(&store.load().unwrap());
    assert_eq!(stats.weekly.len(), 7);
    assert_eq!(stats.weekly.last().unwrap().emotion, "Grief");
}

#[test]
fn test_clear_empties_stats() {
    let dir = tempdir().unwrap();
    let store = JournalStore::open(dir.path().join("history.json"));
    let mut session = Session::default();
    store.append(session.respond("hello").check_in).unwrap();
    store.clear().unwrap();
    let stats = MoodStats::from_history(&store.load().unwrap());
    assert_eq!(stats.check_ins, 0);
    assert_eq!(stats.wellness_score, 0);
}
