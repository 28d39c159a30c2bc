//! Lexicon tables: emotion, topic, severity, intent and extraction patterns
//!
//! All patterns are case-insensitive. A leading `\b` anchors each alternative
//! to a word start; alternatives written without a trailing `\b` are stems
//! ("frustrat" matches frustrated/frustrating).
//!
//! Crisis terms are deliberately over-inclusive: a referral for a harmless
//! "I could die of embarrassment" is preferred to a missed crisis.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use crate::types::{Emotion, Intent, Topic};

lazy_static! {
    // =========================================================================
    // EMOTIONS (detection order = Emotion::SCORED)
    // =========================================================================
    pub static ref EMOTION_PATTERNS: Vec<(Emotion, Regex)> = vec![
        (Emotion::Anxiety, Regex::new(
            r"(?i)\b(?:anxi|worr(?:y|ied|ies|ying)|stress|panic|afraid\b|fear\b|fears\b|nervous|tense\b|uneasy|apprehensive|dread|restless|on edge|jittery|can['’]?t relax|overthink)"
        ).unwrap()),
        (Emotion::Sadness, Regex::new(
            r"(?i)\b(?:sad\b|sadness|depress|down\b|unhappy|miserable|hopeless|gloomy|empty\b|sorrow|heartbreak|disappoint|upset|lonely|alone\b|isolated|melancholy|despondent|lost\b|crying|cried|tears\b)"
        ).unwrap()),
        (Emotion::Anger, Regex::new(
            r"(?i)\b(?:angry|anger\b|furious|mad\b|irritat|frustrat|rage\b|hate\b|hated\b|annoy|resent|bitter\b|hostile|outraged|fed up|ticked off|pissed|livid|enraged|seething)"
        ).unwrap()),
        (Emotion::Overwhelm, Regex::new(
            r"(?i)\b(?:overwhelm|too much|can['’]?t cope|cannot cope|can['’]?t handle|exhausted|burn(?:ed|t)?\s?out|tired\b|drained|swamped|buried|too many|unbearable|crushing|suffocating|drowning)"
        ).unwrap()),
        (Emotion::Joy, Regex::new(
            r"(?i)\b(?:happy|happiness|joy|excited|great\b|good\b|wonderful|fantastic|amazing|positive|delighted|pleased|content\b|thrilled|grateful|thankful|blessed|elated|overjoyed|ecstatic)"
        ).unwrap()),
        (Emotion::Fear, Regex::new(
            r"(?i)\b(?:scared|terrified|frighten|horror|alarmed|panicking|petrified|threatened|insecure|vulnerable|helpless|defenseless|unsafe)"
        ).unwrap()),
        (Emotion::Shame, Regex::new(
            r"(?i)\b(?:shame|ashamed|embarrass|humiliat|guilt|regret|remorse|foolish|stupid|inadequate|unworthy|mortified|disgraced|self-conscious|worthless)"
        ).unwrap()),
        (Emotion::Grief, Regex::new(
            r"(?i)\b(?:griev|grief|mourn|loss\b|missing\b|miss (?:him|her|them)|yearning|devastated|bereft|heartbroken|bereave|widow|deceased|passed away)"
        ).unwrap()),
        (Emotion::Confusion, Regex::new(
            r"(?i)\b(?:confus|unsure|uncertain|don['’]?t understand|puzzled|perplexed|bewildered|disoriented|unclear|mixed signals|mixed messages|don['’]?t know what i want)"
        ).unwrap()),
    ];

    // =========================================================================
    // TOPICS (detection order = Topic::DETECTABLE)
    // =========================================================================
    pub static ref TOPIC_PATTERNS: Vec<(Topic, Regex)> = vec![
        (Topic::Work, Regex::new(
            r"(?i)\b(?:work|job\b|jobs\b|boss|colleague|career|profession|coworker|co-worker|fired\b|layoff|laid off|promotion|office|business|client|deadline|project|workload|salary|paycheck|manager)"
        ).unwrap()),
        (Topic::Relationships, Regex::new(
            r"(?i)\b(?:relationship|partner|spouse|husband|wife\b|boyfriend|girlfriend|dating|marriage|married|divorce|breakup|break up|broke up|ex\b|romantic|affair|cheat|intimacy)"
        ).unwrap()),
        (Topic::Family, Regex::new(
            r"(?i)\b(?:family|parent|child|children|sibling|mother|father|son\b|daughter|brother|sister|grandparent|grandma|grandpa|in-law|relative|mom\b|mum\b|dad\b|kid\b|kids\b|uncle|aunt|cousin|nephew|niece)"
        ).unwrap()),
        (Topic::Health, Regex::new(
            r"(?i)\b(?:health|sick|illness|disease|pain\b|doctor|hospital|medication|symptom|diagnos|chronic|treatment|surgery|medical|therap|appointment)"
        ).unwrap()),
        (Topic::Finances, Regex::new(
            r"(?i)\b(?:money|financ|debt|afford|expensive|bills?\b|payment|income|savings|budget|loan|mortgage|rent\b|bank\b|credit|cash\b|taxes|poverty|broke\b)"
        ).unwrap()),
        (Topic::Education, Regex::new(
            r"(?i)\b(?:school|college|university|stud(?:y|ies|ying)\b|exam|homework|grades?\b|professor|student|class\b|classes|course|degree|assignment|teacher|academic|graduat|thesis)"
        ).unwrap()),
        (Topic::Social, Regex::new(
            r"(?i)\b(?:friend|social|lonel|isolat|community|belong|rejected|rejection|left out|party\b|parties|gathering|peers?\b|acquaintance|hang\s?out)"
        ).unwrap()),
        (Topic::Identity, Regex::new(
            r"(?i)\b(?:identity|who i am|purpose|meaning of|self-worth|fitting in|fit in\b|outsider|authentic|true self|gender|sexuality|cultur|racial|ethnic|religio|spiritual)"
        ).unwrap()),
        (Topic::Future, Regex::new(
            r"(?i)\b(?:future|tomorrow|next (?:week|month|year)|someday|what if|plans?\b|planning|goals?\b)"
        ).unwrap()),
        (Topic::Past, Regex::new(
            r"(?i)\b(?:past\b|used to|childhood|years ago|back then|memor|remember)"
        ).unwrap()),
        (Topic::SelfEsteem, Regex::new(
            r"(?i)\b(?:self-esteem|self esteem|confidence|not good enough|worthless|hate myself|ugly|failure|useless|compare myself|comparing myself)"
        ).unwrap()),
        (Topic::Grief, Regex::new(
            r"(?i)\b(?:griev|grief|passed away|died\b|funeral|mourn|lost my|loss\b)"
        ).unwrap()),
        (Topic::Trauma, Regex::new(
            r"(?i)\b(?:trauma|abuse|abusive|assault|ptsd|flashback|violence|violent|accident)"
        ).unwrap()),
        (Topic::Substance, Regex::new(
            r"(?i)\b(?:drink(?:ing)?\b|alcohol|drunk|drugs?\b|weed\b|smok|addict|sober|relapse)"
        ).unwrap()),
        (Topic::Focus, Regex::new(
            r"(?i)\b(?:focus|concentrat|distract|attention|mind wander|scattered|forgetful|productiv|procrastinat|brain fog|zoning out|spacing out)"
        ).unwrap()),
        (Topic::Sleep, Regex::new(
            r"(?i)\b(?:sleep|insomnia|nightmare|awake\b|bedtime|nap\b|naps\b|dream|fatigue|drowsy|waking up)"
        ).unwrap()),
    ];

    // =========================================================================
    // SEVERITY
    // =========================================================================

    /// Self-harm / suicide language. Any match → severe.
    pub static ref CRISIS_TERMS: Regex = Regex::new(
        r"(?i)\b(?:suicid|kill(?:ing)? myself|end(?:ing)? my life|end it all|don['’]?t want to (?:live|be alive|be here)|do not want to live|want to die|wanna die|hurt(?:ing)? myself|harm(?:ing)? myself|self[- ]harm|cut(?:ting)? myself|no reason to live|no point\b|can['’]?t go on|cannot go on|not worth living|not worth it\b|better off without me|better off dead|plan to end|no way out|no hope\b|overdose|die\b|death\b)"
    ).unwrap();

    /// Single tokens from crisis phrases; never echoed back as a concern
    pub static ref CRISIS_WORDS: Regex = Regex::new(
        r"(?i)^(?:suicid\w*|kill\w*|die[sd]?|dying|death|dead|harm\w*|hurt\w*|self-harm\w*|cut\w*|overdos\w*|alive|live|living)$"
    ).unwrap();

    /// Distress without crisis language
    pub static ref DISTRESS_TERMS: Regex = Regex::new(
        r"(?i)\b(?:hopeless|unbearable|can['’]?t handle|breaking down|falling apart|desperate|at my limit|can['’]?t cope|cannot cope|going crazy|losing my mind|panic attack|can['’]?t stop crying|can['’]?t take (?:it|this))"
    ).unwrap();

    pub static ref INTENSIFIERS: Regex = Regex::new(
        r"(?i)\b(?:very|extremely|really|so|too|incredibly|terribly|absolutely|completely|totally|utterly|deeply)\b"
    ).unwrap();

    // =========================================================================
    // INTENT (tested against the raw message, first group wins)
    // =========================================================================
    /// A leading auxiliary only counts as a question when a subject follows it
    pub static ref INTENT_PATTERNS: Vec<(Intent, Regex)> = vec![
        (Intent::AskingQuestion, Regex::new(
            r"(?i)\?|(?:^|[.!]\s+)(?:how|what|why|who|where|which)(?:\s|$)|(?:^|[.!]\s+)when\s+(?:is|are|will|does|do|did|can|should)\s|(?:^|[.!]\s+)(?:is|are|am|can|could|should|would|do|does|did|will)\s+(?:i|you|it|we|they|he|she|this|that|there|my|your)\b|\b(?:can you|could you|tell me|explain)\b"
        ).unwrap()),
        (Intent::SeekingAdvice, Regex::new(
            r"(?i)\b(?:help\b|advice|advise|suggest|recommend|what should|how (?:can|do) i|need guidance|don['’]?t know what to do|any tips|tips\b)"
        ).unwrap()),
        (Intent::Venting, Regex::new(
            r"(?i)\b(?:feel like|feeling|i feel|i felt|i am\b|i['’]m\b|im\b|just need|listen|hear me|understand me|sick of|tired of)"
        ).unwrap()),
        (Intent::SharingExperience, Regex::new(
            r"(?i)\b(?:happened|experienced|went through|i had\b|had a\b|i did\b|i went\b|i saw\b|today i\b|yesterday)"
        ).unwrap()),
    ];

    // =========================================================================
    // CONTEXT EXTRACTION
    // =========================================================================

    /// "<feeling> <word> about/because ... <phrase>" (group 1 = feeling word, 2 = phrase)
    pub static ref CONTEXT_FEELING: Regex = Regex::new(
        r"(?i)\b(?:feel|feeling|felt|am|i['’]m|been|getting|get)\s+(?:\w+\s+)?(\w+)\s+(?:about|because(?: of)?|since|due to|over|regarding|with)\s+([^.!?;]+)"
    ).unwrap();

    /// Single-group fallbacks, tried in order
    pub static ref CONTEXT_CONNECTIVES: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(?:because(?: of)?|due to|since|as a result of)\s+([^.!?;,]+)").unwrap(),
        Regex::new(r"(?i)\b(?:about|regarding|concerning|over)\s+([^.!?;,]+)").unwrap(),
        Regex::new(r"(?i)\b(?:when|after|whenever|ever since)\s+([^.!?;,]+)").unwrap(),
    ];

    // =========================================================================
    // EVENTS
    // =========================================================================
    pub static ref EVENT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(?:yesterday|today|tonight|last (?:night|week|month|year)|this (?:morning|week)|earlier|recently)\b,?\s+([^.!?;]+)").unwrap(),
        Regex::new(r"(?i)\b(?:when|after|before|ever since)\s+([^.!?;,]+)").unwrap(),
        Regex::new(r"(?i)\b(?:i|we)\s+(?:had|went through|experienced|lost|failed|got)\s+([^.!?;,]+)").unwrap(),
        Regex::new(r"(?i)\bhappened\s+(?:at|in|with|to|during)\s+([^.!?;,]+)").unwrap(),
    ];

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    pub static ref STOPWORDS: HashSet<&'static str> = [
        "that", "this", "then", "than", "with", "would", "could", "should", "have",
        "what", "when", "where", "why", "how", "like", "just", "very", "really",
        "much", "many", "some", "other", "such", "from", "about", "been", "they",
        "their", "them", "these", "those", "your", "yours", "mine", "ours", "theirs",
        "and", "but", "or", "nor", "for", "yet", "so", "although", "because", "since",
        "unless", "until", "while", "after", "before", "if", "though", "even",
        "i'm", "i've", "it's", "don't", "that's", "there", "here", "were", "will",
        "into", "also", "still", "being", "myself",
    ]
    .into_iter()
    .collect();

    static ref NUMERAL: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Words that never become tracked concerns
pub const FILLER_VERBS: [&str; 10] = [
    "feel", "feeling", "felt", "think", "thought", "going", "want", "wanted", "need", "needed",
];

/// Is this token a pure numeral?
pub fn is_numeral(token: &str) -> bool {
    NUMERAL.is_match(token)
}

/// Count pattern matches in text
pub fn count_matches(regex: &Regex, text: &str) -> u32 {
    regex.find_iter(text).count() as u32
}

// =============================================================================
// TESTS
// =============================================================================
