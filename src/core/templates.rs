//! Response template libraries
//!
//! Pure data. Templates may contain `{context}` and `{emotion}` placeholders,
//! resolved by literal substitution in the composer. Lookups return `None`
//! when an emotion or topic has no dedicated entry; callers pick the
//! documented fallback table.

use crate::types::{Emotion, Topic};

pub const CONTEXT_PLACEHOLDER: &str = "{context}";
pub const EMOTION_PLACEHOLDER: &str = "{emotion}";

// =============================================================================
// VALIDATION / EMPATHY (coping branch, fallback: neutral)
// =============================================================================

const VALIDATION_NEUTRAL: &[&str] = &[
    "Thank you for telling me about {context}. It makes sense to feel {emotion} given everything.",
    "I hear you. Dealing with {context} sounds like a lot to carry right now.",
    "It's completely understandable to feel {emotion} when dealing with {context}.",
];

const VALIDATION_ANXIETY: &[&str] = &[
    "It makes sense that you're feeling {emotion} about {context}. Anxiety often shows up when something matters to us.",
    "Feeling {emotion} about {context} is a very human response. Your mind is trying to protect you.",
    "I can hear how much {context} is weighing on you. Anxious thoughts can feel so loud.",
];

const VALIDATION_SADNESS: &[&str] = &[
    "I'm sorry you're feeling {emotion}. Going through {context} sounds really hard, and it's okay to not be okay.",
    "It sounds like {context} has left you feeling {emotion}. Your feelings are valid.",
    "Sadness about {context} deserves space. Thank you for letting me sit with you in it.",
];

const VALIDATION_ANGER: &[&str] = &[
    "It's understandable to feel {emotion} about {context}. Anger often points to something that matters to you.",
    "Feeling {emotion} when dealing with {context} makes sense. Your frustration is valid.",
    "It sounds like {context} crossed a line for you. It's okay to feel {emotion}.",
];

const VALIDATION_OVERWHELM: &[&str] = &[
    "It sounds like {context} is piling up, and feeling {emotion} is a natural response.",
    "When {context} takes up so much space, anyone would feel {emotion}.",
    "You're carrying a lot with {context}. It's okay to feel {emotion} and to slow down.",
];

const VALIDATION_FEAR: &[&str] = &[
    "Feeling {emotion} about {context} is a real and valid reaction. You're not alone in this.",
    "It takes courage to name what scares you. Facing {context} sounds frightening.",
];

const VALIDATION_SHAME: &[&str] = &[
    "Feeling {emotion} about {context} is painful. You deserve the same kindness you'd give a friend.",
    "Shame can make {context} feel bigger than it is. Being human means making mistakes sometimes.",
];

const VALIDATION_GRIEF: &[&str] = &[
    "I'm so sorry. Grief around {context} can come in waves, and there's no right way to feel.",
    "Loss like {context} changes things. Feeling {emotion} is a reflection of how much it mattered.",
];

const VALIDATION_JOY: &[&str] = &[
    "It's wonderful that you're feeling {emotion} about {context}. Let's make room for that.",
    "I love hearing that {context} brings you joy. Moments like this are worth savoring.",
];

/// Emotion-keyed validation templates
pub fn validation_templates(emotion: Emotion) -> Option<&'static [&'static str]> {
    match emotion {
        Emotion::Neutral => Some(VALIDATION_NEUTRAL),
        Emotion::Anxiety => Some(VALIDATION_ANXIETY),
        Emotion::Sadness => Some(VALIDATION_SADNESS),
        Emotion::Anger => Some(VALIDATION_ANGER),
        Emotion::Overwhelm => Some(VALIDATION_OVERWHELM),
        Emotion::Fear => Some(VALIDATION_FEAR),
        Emotion::Shame => Some(VALIDATION_SHAME),
        Emotion::Grief => Some(VALIDATION_GRIEF),
        Emotion::Joy => Some(VALIDATION_JOY),
        Emotion::Confusion => None,
    }
}

// =============================================================================
// COPING STRATEGIES (fallback: anxiety)
// =============================================================================

const COPING_ANXIETY: &[&str] = &[
    "Try 4-7-8 breathing: inhale for 4 counts, hold for 7, exhale for 8.",
    "Ground yourself with 5-4-3-2-1: name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.",
    "Write the worry down, then ask: what is one small thing within my control right now?",
    "Try box breathing: inhale for 4, hold for 4, exhale for 4, hold for 4, for two minutes.",
];

const COPING_SADNESS: &[&str] = &[
    "Do one small act of kindness for yourself, like a warm drink or a short walk outside.",
    "Reach out to someone you trust, even with a simple message.",
    "Try journaling for five minutes about what you're feeling, without judging it.",
    "Put on music that matches your mood, then slowly shift to something gentler.",
];

const COPING_ANGER: &[&str] = &[
    "Step away for a few minutes and take slow breaths before responding.",
    "Move your body: a brisk walk or a few stretches can release built-up tension.",
    "Write down exactly what upset you, then read it back once you feel calmer.",
];

const COPING_OVERWHELM: &[&str] = &[
    "List everything on your plate, then circle just one thing to do next.",
    "Give yourself a 10-minute break with no screens and no tasks.",
    "Ask whether anything on your list can be delegated, postponed, or dropped.",
];

const COPING_FEAR: &[&str] = &[
    "Name the fear out loud or on paper. Fears often shrink when they are specific.",
    "Place a hand on your chest and breathe slowly until your heartbeat settles.",
    "Remind yourself of a time you got through something frightening before.",
];

const COPING_GRIEF: &[&str] = &[
    "Let yourself feel what comes up without putting a timeline on it.",
    "Write a letter to the person or thing you've lost.",
    "Lean on someone who understands, or look for a grief support group.",
];

const COPING_SHAME: &[&str] = &[
    "Talk to yourself the way you'd talk to a good friend in the same situation.",
    "Separate what you did from who you are: one moment does not define you.",
];

const COPING_JOY: &[&str] = &[
    "Take a moment to savor this feeling and notice where you feel it in your body.",
    "Write down three things that contributed to this good moment.",
    "Share your good news with someone who will celebrate with you.",
];

/// Emotion-keyed coping strategies
pub fn coping_strategies(emotion: Emotion) -> Option<&'static [&'static str]> {
    match emotion {
        Emotion::Anxiety => Some(COPING_ANXIETY),
        Emotion::Sadness => Some(COPING_SADNESS),
        Emotion::Anger => Some(COPING_ANGER),
        Emotion::Overwhelm => Some(COPING_OVERWHELM),
        Emotion::Fear => Some(COPING_FEAR),
        Emotion::Grief => Some(COPING_GRIEF),
        Emotion::Shame => Some(COPING_SHAME),
        Emotion::Joy => Some(COPING_JOY),
        Emotion::Neutral | Emotion::Confusion => None,
    }
}

// =============================================================================
// REFLECTION (support branch)
// =============================================================================

pub const REFLECTION_QUESTIONS: &[&str] = &[
    "How are you feeling about {context} right now?",
    "What do you think would help you most with {context}?",
    "What would you like to change about {context}, if you could?",
    "When did you first start noticing this about {context}?",
    "What does support look like for you when it comes to {context}?",
    "Can you tell me more about {context}?",
];

/// Short per-emotion openers for the support branch
pub fn empathetic_opener(emotion: Emotion) -> Option<&'static str> {
    match emotion {
        Emotion::Neutral => None,
        Emotion::Anxiety => Some("That sounds stressful."),
        Emotion::Sadness => Some("I'm sorry things feel heavy right now."),
        Emotion::Anger => Some("That sounds really frustrating."),
        Emotion::Overwhelm => Some("That sounds like a lot to handle."),
        Emotion::Joy => Some("I'm so glad to hear that!"),
        Emotion::Fear => Some("That sounds frightening."),
        Emotion::Shame => Some("Thank you for trusting me with something so personal."),
        Emotion::Grief => Some("I'm so sorry for your loss."),
        Emotion::Confusion => Some("It's okay not to have it all figured out."),
    }
}

// =============================================================================
// EDUCATION (topic first, then emotion, fallback: anxiety)
// =============================================================================

const EDU_ANXIETY: &str = "Anxiety is the body's natural response to perceived threat. It activates the fight-or-flight system, which can cause a racing heart, shallow breathing and racing thoughts. In small doses it keeps us alert, but when it becomes constant it can interfere with daily life. Techniques like slow breathing, grounding and challenging catastrophic thoughts can calm the nervous system.";

const EDU_SADNESS: &str = "Sadness is a normal emotion that helps us process loss and disappointment. When low mood lasts for more than two weeks and affects sleep, appetite or interest in things you used to enjoy, it may be depression, which is common and treatable with support, therapy and sometimes medication.";

const EDU_ANGER: &str = "Anger is a signal that something feels unfair, threatening or blocked. It's a healthy emotion, but acting on it in the heat of the moment can cause harm. Pausing, naming the feeling and expressing the underlying need calmly tends to lead to better outcomes.";

const EDU_OVERWHELM: &str = "Feeling overwhelmed happens when demands outpace the resources we feel we have. Chronic overwhelm can lead to burnout, marked by exhaustion, cynicism and reduced effectiveness. Breaking tasks into small steps, setting boundaries and scheduling real rest all help restore balance.";

const EDU_FEAR: &str = "Fear is an immediate response to danger, real or imagined. When fear shows up in safe situations it can keep us stuck. Gradual, gentle exposure to what we fear, paired with calming techniques, helps the brain learn that the situation is manageable.";

const EDU_GRIEF: &str = "Grief is the natural response to loss, and it rarely moves in neat stages. It can include sadness, anger, guilt, numbness and even relief. There is no timeline for grief; connection, rituals of remembrance and patience with yourself are central to healing.";

const EDU_SLEEP: &str = "Sleep and mental health are closely linked. Poor sleep amplifies stress and low mood, and stress makes sleep harder. A consistent schedule, limiting screens before bed, keeping caffeine to the morning and a wind-down routine can noticeably improve sleep quality.";

const EDU_FOCUS: &str = "Difficulty focusing is often a sign of stress, fatigue or an overloaded mind rather than a lack of willpower. Working in short blocks with breaks, reducing notifications and writing down intrusive to-dos can free up attention.";

const EDU_SUBSTANCE: &str = "Alcohol and other substances can feel like relief in the short term but often worsen anxiety, low mood and sleep over time. Noticing when and why you reach for them is a useful first step, and support services are available if cutting back feels hard.";

const EDU_TRAUMA: &str = "Trauma is the lasting impact of an experience that overwhelmed your ability to cope. Reactions like flashbacks, hypervigilance or numbness are the nervous system trying to protect you. Trauma-informed therapy can help the mind and body feel safe again.";

const EDU_SELF_ESTEEM: &str = "Self-esteem is how we value ourselves, and it is shaped by past experiences and the way we talk to ourselves. Noticing harsh self-talk, recording small wins and spending time with people who respect you can gradually build a kinder self-image.";

/// Topic-keyed educational content
pub fn education_for_topic(topic: Topic) -> Option<&'static str> {
    match topic {
        Topic::Sleep => Some(EDU_SLEEP),
        Topic::Focus => Some(EDU_FOCUS),
        Topic::Substance => Some(EDU_SUBSTANCE),
        Topic::Trauma => Some(EDU_TRAUMA),
        Topic::SelfEsteem => Some(EDU_SELF_ESTEEM),
        Topic::Grief => Some(EDU_GRIEF),
        _ => None,
    }
}

/// Emotion-keyed educational content
pub fn education_for_emotion(emotion: Emotion) -> Option<&'static str> {
    match emotion {
        Emotion::Anxiety => Some(EDU_ANXIETY),
        Emotion::Sadness => Some(EDU_SADNESS),
        Emotion::Anger => Some(EDU_ANGER),
        Emotion::Overwhelm => Some(EDU_OVERWHELM),
        Emotion::Fear => Some(EDU_FEAR),
        Emotion::Grief => Some(EDU_GRIEF),
        _ => None,
    }
}

/// Default educational entry
pub fn default_education() -> &'static str {
    EDU_ANXIETY
}

pub const EDUCATION_INVITATION: &str =
    "Would you like to hear more about this, or talk about how it shows up for you?";

// =============================================================================
// REFERRAL
// =============================================================================

pub const CRISIS_RESOURCE_OFFER: &str = "You don't have to face this alone. If you are in immediate danger or thinking about ending your life, please contact a crisis line right now: call or text 988 (Suicide & Crisis Lifeline, US), text HOME to 741741, or call your local emergency number. Would you like me to share more crisis resources?";

// =============================================================================
// SUGGESTED REPLIES
// =============================================================================

pub const REFERRAL_REPLIES: &[&str] = &[
    "Yes, please share resources",
    "I want to talk to someone now",
    "I'm safe right now",
    "Not right now",
];

pub const COPING_REPLIES: &[&str] = &[
    "I'll try one of those",
    "Why does that help?",
    "I need something different",
    "I just want to keep talking",
];

pub const EDUCATION_REPLIES: &[&str] = &[
    "Tell me more",
    "What coping strategies help?",
    "Can we talk about something else?",
];

pub const FEELING_REPLIES: &[&str] = &[
    "It feels really heavy",
    "I'm not sure how I feel",
    "A little better, actually",
];

pub const HELP_REPLIES: &[&str] = &[
    "Someone to listen",
    "Practical advice",
    "Some time for myself",
];

pub const CHANGE_REPLIES: &[&str] = &[
    "I wish I had more control",
    "I want things to go back to how they were",
    "I don't know where to start",
];

pub const ORIGIN_REPLIES: &[&str] = &[
    "It started recently",
    "It's been going on for a while",
    "I'm not sure",
];

pub const DEFAULT_SUPPORT_REPLIES: &[&str] = &[
    "Tell me more",
    "I'd like some coping ideas",
    "Can you explain what I'm feeling?",
];

// =============================================================================
// JOURNALING PROMPTS
// =============================================================================

const PROMPTS_ANXIETY: &[&str] = &[
    "What's one thing that's making you anxious today?",
    "What helps you feel safe when you're anxious?",
    "What would you tell a friend who's feeling the same way?",
    "What's one small step you could take today to address your worry?",
];

const PROMPTS_STRESS: &[&str] = &[
    "What are your biggest stressors right now?",
    "Which parts of your stress can you control, and which can't you?",
    "When was the last time you felt truly relaxed?",
    "What's one boundary you could set to reduce your stress?",
];

const PROMPTS_SADNESS: &[&str] = &[
    "What's weighing on your heart today?",
    "When did you start feeling this way?",
    "What's one small thing that brings you joy, even when you're sad?",
    "If your sadness could speak, what might it be trying to tell you?",
];

const PROMPTS_HAPPINESS: &[&str] = &[
    "What's bringing you joy right now?",
    "How can you extend this good feeling?",
    "What are you grateful for today?",
    "How could you share your positive energy with someone else?",
];

const PROMPTS_NEUTRAL: &[&str] = &[
    "What's on your mind today?",
    "How would you describe your current state of being?",
    "What would make today more meaningful for you?",
    "What's one thing you're looking forward to?",
];

pub const GENERAL_PROMPTS: &[&str] = &[
    "How are you feeling today?",
    "What's one thing you'd like to accomplish today?",
    "What's something you learned about yourself recently?",
    "Describe a moment today when you felt at ease.",
];

/// Emotion-keyed journaling prompts
pub fn journaling_prompts(emotion: Emotion) -> Option<&'static [&'static str]> {
    match emotion {
        Emotion::Anxiety | Emotion::Fear => Some(PROMPTS_ANXIETY),
        Emotion::Overwhelm => Some(PROMPTS_STRESS),
        Emotion::Sadness | Emotion::Grief => Some(PROMPTS_SADNESS),
        Emotion::Joy => Some(PROMPTS_HAPPINESS),
        Emotion::Neutral => Some(PROMPTS_NEUTRAL),
        _ => None,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_tables_exist() {
        assert!(validation_templates(Emotion::Neutral).is_some());
        assert!(coping_strategies(Emotion::Anxiety).is_some());
        assert!(!default_education().is_empty());
    }

    #[test]
    fn test_strategy_tables_have_two_choices() {
        for emotion in Emotion::SCORED {
            if let Some(list) = coping_strategies(emotion) {
                assert!(list.len() >= 2, "{} needs at least two strategies", emotion);
            }
        }
    }

    #[test]
    fn test_reply_sets_sized() {
        for set in [
            REFERRAL_REPLIES, COPING_REPLIES, EDUCATION_REPLIES, FEELING_REPLIES,
            HELP_REPLIES, CHANGE_REPLIES, ORIGIN_REPLIES, DEFAULT_SUPPORT_REPLIES,
        ] {
            assert!((3..=4).contains(&set.len()));
        }
    }

    #[test]
    fn test_only_known_placeholders() {
        let all = [
            VALIDATION_NEUTRAL, VALIDATION_ANXIETY, VALIDATION_SADNESS, VALIDATION_ANGER,
            VALIDATION_OVERWHELM, VALIDATION_FEAR, VALIDATION_SHAME, VALIDATION_GRIEF,
            VALIDATION_JOY, REFLECTION_QUESTIONS,
        ];
        for table in all {
            for template in table {
                let stripped = template
                    .replace(CONTEXT_PLACEHOLDER, "")
                    .replace(EMOTION_PLACEHOLDER, "");
                assert!(!stripped.contains('{'), "unknown placeholder in: {}", template);
            }
        }
    }
}
