//! Response Composer: turns an analysis plus session state into a reply
//!
//! Branch order (first match wins):
//! 1. severe → referral
//! 2. moderate, or stage COPING → coping
//! 3. question intent, or a topic with educational content → education
//! 4. otherwise → support
//!
//! Template choice is random; the source is injected so a seed pins wording.

use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use regex::{Captures, Regex};
use tracing::debug;
use crate::{EXCERPT_CHARS, STRATEGIES_PER_RESPONSE};
use crate::core::lexicon::CRISIS_WORDS;
use crate::core::templates::{
    self, CHANGE_REPLIES, COPING_REPLIES, CONTEXT_PLACEHOLDER, CRISIS_RESOURCE_OFFER,
    DEFAULT_SUPPORT_REPLIES, EDUCATION_INVITATION, EDUCATION_REPLIES, EMOTION_PLACEHOLDER,
    FEELING_REPLIES, GENERAL_PROMPTS, HELP_REPLIES, ORIGIN_REPLIES, REFERRAL_REPLIES,
    REFLECTION_QUESTIONS,
};
use crate::types::{
    Analysis, ConversationStage, ConversationState, Emotion, Intent, ReasonCode, Response,
    ResponseCategory, Severity,
};

lazy_static! {
    /// First-person words flipped to second person before filling `{context}`
    static ref FIRST_PERSON: Regex = Regex::new(
        r"(?i)\b(?:i['’]m|i am|myself|mine|my|me|i|am)\b"
    ).unwrap();
}

const GENERIC_CONTEXT: &str = "your situation";

/// Composer over an injected random source
#[derive(Debug)]
pub struct ResponseComposer<R: Rng = StdRng> {
    rng: R,
}

impl ResponseComposer<StdRng> {
    /// Deterministic composer
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Composer seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ResponseComposer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Access the random source (journaling prompts share it)
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Build the reply for this turn
    pub fn compose(&mut self, analysis: &Analysis, state: &ConversationState) -> Response {
        let response = if analysis.is_crisis() {
            self.referral(state)
        } else if analysis.severity == Severity::Moderate {
            self.coping(state, ReasonCode::R003_MODERATE_COPING)
        } else if state.conversation_stage == ConversationStage::Coping {
            self.coping(state, ReasonCode::R003_STAGE_COPING)
        } else if analysis.intent == Intent::AskingQuestion {
            self.education(analysis, ReasonCode::R003_QUESTION_EDUCATION)
        } else if has_educational_topic(analysis) {
            self.education(analysis, ReasonCode::R003_TOPIC_EDUCATION)
        } else {
            self.support(state)
        };

        debug!(
            category = %response.category,
            reason = response.reason.code(),
            replies = response.suggested_replies.len(),
            "Composed response"
        );
        response
    }

    fn referral(&mut self, state: &ConversationState) -> Response {
        let mut text = if state.primary_emotion.is_neutral() {
            String::from("Thank you for trusting me with something this painful.")
        } else {
            format!(
                "I can hear how {} you're feeling right now, and I'm really glad you told me.",
                state.primary_emotion.adjective()
            )
        };
        if let Some(concern) = state
            .user_concerns
            .iter()
            .find(|c| !CRISIS_WORDS.is_match(c))
        {
            text.push_str(&format!(
                " It sounds like {} is weighing on you heavily.",
                reflect_pronouns(concern)
            ));
        }
        text.push(' ');
        text.push_str(CRISIS_RESOURCE_OFFER);

        Response::new(
            ResponseCategory::Referral,
            text,
            REFERRAL_REPLIES,
            ReasonCode::R003_CRISIS_REFERRAL,
        )
    }

    fn coping(&mut self, state: &ConversationState, reason: ReasonCode) -> Response {
        let emotion = state.primary_emotion;
        let table = templates::validation_templates(emotion)
            .or_else(|| templates::validation_templates(Emotion::Neutral))
            .unwrap_or_default();
        let template = table.choose(&mut self.rng).copied().unwrap_or_default();

        let mut text = String::new();
        if let Some(mention) = state
            .mentioned_events
            .first()
            .or_else(|| state.user_concerns.first())
        {
            text.push_str(&format!(
                "You mentioned {}, which sounds significant. ",
                reflect_pronouns(mention)
            ));
        }
        text.push_str(&fill(template, &state_context(state), emotion));

        let strategies = templates::coping_strategies(emotion)
            .or_else(|| templates::coping_strategies(Emotion::Anxiety))
            .unwrap_or_default();
        text.push_str("\n\nHere are a couple of things that might help:");
        for strategy in strategies.choose_multiple(&mut self.rng, STRATEGIES_PER_RESPONSE) {
            text.push_str("\n- ");
            text.push_str(strategy);
        }

        Response::new(ResponseCategory::Coping, text, COPING_REPLIES, reason)
    }

    fn education(&mut self, analysis: &Analysis, reason: ReasonCode) -> Response {
        let entry = analysis
            .topics
            .iter()
            .find_map(|topic| templates::education_for_topic(*topic))
            .or_else(|| templates::education_for_emotion(analysis.emotion))
            .unwrap_or_else(templates::default_education);

        let text = format!("{}\n\n{}", excerpt(entry, EXCERPT_CHARS), EDUCATION_INVITATION);
        Response::new(ResponseCategory::Education, text, EDUCATION_REPLIES, reason)
    }

    fn support(&mut self, state: &ConversationState) -> Response {
        let question = REFLECTION_QUESTIONS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();
        let filled = fill(question, &state_context(state), state.primary_emotion);
        let text = match templates::empathetic_opener(state.primary_emotion) {
            Some(opener) => format!("{} {}", opener, filled),
            None => filled,
        };

        Response::new(
            ResponseCategory::Support,
            text,
            support_replies_for(question),
            ReasonCode::R003_DEFAULT_SUPPORT,
        )
    }
}

/// Pick a journaling prompt for this emotion, falling back to general prompts
pub fn journaling_prompt<R: Rng + ?Sized>(emotion: Emotion, rng: &mut R) -> &'static str {
    templates::journaling_prompts(emotion)
        .unwrap_or(GENERAL_PROMPTS)
        .choose(rng)
        .copied()
        .unwrap_or_default()
}

/// Does any analysed topic have a dedicated educational entry?
pub fn has_educational_topic(analysis: &Analysis) -> bool {
    analysis
        .topics
        .iter()
        .any(|topic| templates::education_for_topic(*topic).is_some())
}

/// Literal, single-pass placeholder substitution
pub fn fill(template: &str, context: &str, emotion: Emotion) -> String {
    template
        .replace(EMOTION_PLACEHOLDER, emotion.adjective())
        .replace(CONTEXT_PLACEHOLDER, &reflect_pronouns(context))
}

/// "my exam" → "your exam", "I'm stuck" → "you're stuck"
pub fn reflect_pronouns(text: &str) -> String {
    FIRST_PERSON
        .replace_all(text, |caps: &Captures| {
            let word = caps[0].to_lowercase().replace('’', "'");
            match word.as_str() {
                "i'm" => "you're",
                "i am" => "you are",
                "myself" => "yourself",
                "mine" => "yours",
                "my" => "your",
                "am" => "are",
                _ => "you",
            }
        })
        .into_owned()
}

/// Cut at a word boundary near `limit` chars
pub fn excerpt(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    let head = match cut.rfind(' ') {
        Some(idx) => &cut[..idx],
        None => cut.as_str(),
    };
    format!("{}...", head.trim_end_matches(|c: char| c.is_ascii_punctuation()))
}

fn state_context(state: &ConversationState) -> String {
    if state.context.is_empty() {
        GENERIC_CONTEXT.to_string()
    } else {
        state.context.clone()
    }
}

/// Reply set matching what the reflective question asked about
fn support_replies_for(question: &str) -> &'static [&'static str] {
    let question = question.to_lowercase();
    if question.contains("feel") {
        FEELING_REPLIES
    } else if question.contains("help") || question.contains("support") {
        HELP_REPLIES
    } else if question.contains("change") {
        CHANGE_REPLIES
    } else if question.contains("when") {
        ORIGIN_REPLIES
    } else {
        DEFAULT_SUPPORT_REPLIES
    }
}

// =============================================================================
// TESTS
// =============================================================================
