//! Integration tests for the Message Analyzer
//!
//! Crisis detection, value ranges and the reference scenarios

use mano::core::MessageAnalyzer;
use mano::types::{Emotion, Intent, Severity, Topic};
use mano::MAX_INTENSITY;
use pretty_assertions::assert_eq;

const CRISIS_MESSAGES: &[&str] = &[
    "I want to kill myself",
    "I've been thinking about suicide a lot",
    "Honestly I just want to die",
    "I keep hurting myself when things get bad",
    "There's no reason to live anymore",
    "Everyone would be better off without me",
    "I am so happy today but I want to end my life",
    "I've been feeling suicidal",
    "I don't want to live like this",
    "I have been harming myself again",
    "I started self-harm last year",
    "I think about death every night",
    "There's no point",
    "there is no point in trying anymore",
    "I can't go on",
    "It's not worth it",
    "I have a plan to end things",
    "There is no way out of this",
    "I have no hope",
];

#[test]
fn test_crisis_always_severe() {
    let analyzer = MessageAnalyzer::new();
    for text in CRISIS_MESSAGES {
        let analysis = analyzer.analyze(text, &[]);
        assert_eq!(analysis.severity, Severity::Severe, "not severe: {}", text);
        assert_eq!(analysis.intent, Intent::Crisis, "intent not forced: {}", text);
    }
}

#[test]
fn test_crisis_in_recent_history() {
    let history = vec!["I want to kill myself".to_string()];
    let analysis = MessageAnalyzer::new().analyze("I don't know", &history);
    assert_eq!(analysis.severity, Severity::Severe);
}

#[test]
fn test_ranges_hold() {
    let analyzer = MessageAnalyzer::new();
    let samples = [
        "",
        "ok",
        "???",
        "sad sad sad sad sad sad sad sad sad sad sad sad",
        "My boss, my wife, my kids, my money, my health, my sleep - everything is falling apart!",
        "12345 67890",
        "🙂🙂🙂",
    ];
    for text in samples {
        let analysis = analyzer.analyze(text, &[]);
        assert!(analysis.intensity <= MAX_INTENSITY);
        assert!(!analysis.topics.is_empty());
        assert!(!analysis.context.is_empty());
        assert!(analysis.keywords.len() <= 8);
    }
}

#[test]
fn test_scenario_exam_anxiety() {
    let analysis = MessageAnalyzer::new().analyze("I feel anxious about my exam tomorrow", &[]);
    assert_eq!(analysis.emotion, Emotion::Anxiety);
    assert!(analysis.topics.contains(&Topic::Education));
    assert_eq!(analysis.severity, Severity::Mild);
    assert_eq!(analysis.intent, Intent::Venting);
    assert_eq!(analysis.context, "my exam tomorrow");
}

#[test]
fn test_scenario_what_is_anxiety() {
    let analysis = MessageAnalyzer::new().analyze("What is anxiety?", &[]);
    assert_eq!(analysis.intent, Intent::AskingQuestion);
    assert!(analysis.is_question);
}

#[test]
fn test_scenario_ok() {
    let analysis = MessageAnalyzer::new().analyze("ok", &[]);
    assert_eq!(analysis.emotion, Emotion::Neutral);
    assert_eq!(analysis.intensity, 0);
    assert_eq!(analysis.severity, Severity::Mild);
    assert_eq!(analysis.topics, vec![Topic::General]);
}

#[test]
fn test_distress_is_moderate() {
    let analysis = MessageAnalyzer::new().analyze("My life is falling apart", &[]);
    assert_eq!(analysis.severity, Severity::Moderate);
}

#[test]
fn test_intent_priority() {
    let analyzer = MessageAnalyzer::new();
    assert_eq!(analyzer.analyze("Can you help me?", &[]).intent, Intent::AskingQuestion);
    assert_eq!(analyzer.analyze("I need some advice", &[]).intent, Intent::SeekingAdvice);
    assert_eq!(analyzer.analyze("I feel invisible", &[]).intent, Intent::Venting);
    assert_eq!(analyzer.analyze("Yesterday we went to the lake", &[]).intent, Intent::SharingExperience);
    assert_eq!(analyzer.analyze("the lake", &[]).intent, Intent::General);
    assert_eq!(analyzer.analyze("Can't sleep again, feeling awful", &[]).intent, Intent::Venting);
    assert_eq!(analyzer.analyze("Is anyone even listening. I feel sad", &[]).intent, Intent::Venting);
    assert_eq!(analyzer.analyze("Do you think it gets better", &[]).intent, Intent::AskingQuestion);
    assert_eq!(analyzer.analyze("How do people cope with this", &[]).intent, Intent::AskingQuestion);
}

#[test]
fn test_all_topics_collected() {
    let analysis = MessageAnalyzer::new()
        .analyze("My boss keeps me late so I can't sleep and my girlfriend is upset", &[]);
    assert!(analysis.topics.contains(&Topic::Work));
    assert!(analysis.topics.contains(&Topic::Sleep));
    assert!(analysis.topics.contains(&Topic::Relationships));
}

#[test]
fn test_analysis_serializes_snake_case() {
    let analysis = MessageAnalyzer::new().analyze("What should I do about my self-esteem?", &[]);
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["intent"], "asking_question");
    assert!(json["topics"].as_array().unwrap().iter().any(|t| t == "self_esteem"));
}

#[test]
fn test_idempotent() {
    let analyzer = MessageAnalyzer::new();
    let history = vec!["I lost my job last week".to_string(), "money is tight".to_string()];
    for text in ["I'm so scared about rent", "ok", "Why do I feel like this?"] {
        assert_eq!(analyzer.analyze(text, &history), analyzer.analyze(text, &history));
    }
}
