//! Profile statistics over the journal: streak, wellness score, mood stats
//!
//! All functions take history newest-first, as the journal stores it.

use std::collections::BTreeSet;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use crate::types::{Emotion, MoodCheckIn};

const NO_DATA: &str = "No data";
const WEEKLY_ENTRIES: usize = 7;
const REGULAR_GAP_HOURS: i64 = 48;

/// Consecutive calendar days (UTC) with a check-in, counted back from the
/// most recent one
pub fn current_streak(history: &[MoodCheckIn]) -> u32 {
    let days: BTreeSet<NaiveDate> = history.iter().map(|c| c.date.date_naive()).collect();
    let Some(mut day) = days.iter().next_back().copied() else {
        return 0;
    };
    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// 0-100 composite of volume, streak, regularity, entry length and positivity
pub fn wellness_score(history: &[MoodCheckIn], streak: u32) -> u32 {
    let n = history.len();
    if n == 0 {
        return 0;
    }

    let checkins = (n as u32 * 2).min(20);
    let streak_points = (streak * 3).min(15);

    let consistency = if n > 1 {
        let mut dates: Vec<DateTime<Utc>> = history.iter().map(|c| c.date).collect();
        dates.sort();
        let regular = dates
            .windows(2)
            .filter(|w| w[1] - w[0] <= Duration::hours(REGULAR_GAP_HOURS))
            .count();
        ((regular as f64 / (n - 1) as f64 * 25.0).round() as u32).min(25)
    } else {
        0
    };

    let total_chars: usize = history.iter().map(|c| c.entry.chars().count()).sum();
    let avg_len = total_chars as f64 / n as f64;
    let quality = ((avg_len / 10.0).round() as u32).min(20);

    let positive = history.iter().filter(|c| is_positive(c)).count();
    let positivity = (positive as f64 / n as f64 * 20.0).round() as u32;

    (checkins + streak_points + consistency + quality + positivity).min(100)
}

/// Mood value on a 1-7 scale for charts
pub fn mood_value(emotion: &str) -> u8 {
    match Emotion::from_key(emotion) {
        Some(Emotion::Joy) => 7,
        Some(Emotion::Neutral) => 5,
        Some(Emotion::Confusion) => 4,
        Some(Emotion::Anxiety | Emotion::Overwhelm | Emotion::Fear) => 3,
        Some(Emotion::Sadness | Emotion::Grief) => 2,
        _ => 1,
    }
}

fn is_positive(check_in: &MoodCheckIn) -> bool {
    Emotion::from_key(&check_in.result.emotion) == Some(Emotion::Joy)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionCount {
    pub emotion: String,
    pub count: usize,
}

/// One point of the weekly mood chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodPoint {
    pub date: DateTime<Utc>,
    pub emotion: String,
    pub value: u8,
}

/// Profile page statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodStats {
    pub check_ins: usize,
    pub current_emotion: String,
    pub most_frequent: String,
    /// Share of joy check-ins, 0-100
    pub positive_percent: u32,
    /// Ordered by first appearance, newest first
    pub distribution: Vec<EmotionCount>,
    /// Last 7 entries, oldest first
    pub weekly: Vec<MoodPoint>,
    pub streak: u32,
    pub wellness_score: u32,
}

impl MoodStats {
    pub fn from_history(history: &[MoodCheckIn]) -> Self {
        if history.is_empty() {
            return Self {
                check_ins: 0,
                current_emotion: NO_DATA.to_string(),
                most_frequent: NO_DATA.to_string(),
                positive_percent: 0,
                distribution: Vec::new(),
                weekly: Vec::new(),
                streak: 0,
                wellness_score: 0,
            };
        }

        let mut distribution: Vec<EmotionCount> = Vec::new();
        for check_in in history {
            let emotion = &check_in.result.emotion;
            match distribution.iter_mut().find(|d| &d.emotion == emotion) {
                Some(entry) => entry.count += 1,
                None => distribution.push(EmotionCount { emotion: emotion.clone(), count: 1 }),
            }
        }

        // Ties go to the emotion seen most recently
        let mut most_frequent = &distribution[0];
        for entry in &distribution[1..] {
            if entry.count > most_frequent.count {
                most_frequent = entry;
            }
        }
        let most_frequent = most_frequent.emotion.clone();

        let positive = history.iter().filter(|c| is_positive(c)).count();
        let positive_percent = (positive as f64 / history.len() as f64 * 100.0).round() as u32;

        let weekly = history
            .iter()
            .take(WEEKLY_ENTRIES)
            .rev()
            .map(|c| MoodPoint {
                date: c.date,
                emotion: c.result.emotion.clone(),
                value: mood_value(&c.result.emotion),
            })
            .collect();

        let streak = current_streak(history);
        Self {
            check_ins: history.len(),
            current_emotion: history[0].result.emotion.clone(),
            most_frequent,
            positive_percent,
            distribution,
            weekly,
            streak,
            wellness_score: wellness_score(history, streak),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
