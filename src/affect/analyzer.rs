//! Sentiment scoring and emotion detection.
//!
//! Sentiment counts every token occurrence, so repeated emphasis ("sad sad
//! sad") increases the score magnitude. Emotion detection collapses the
//! token stream to a set first, so a single repeated word cannot dominate
//! the emotion ranking.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::affect::lexicon;
use crate::utilities::text::tokenize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fraction of the distinct-token count that match density is normalized
/// against.
const DENSITY_NORMALIZER: f64 = 0.1;

/// How far ahead of the runner-up the primary emotion must be to count as
/// dominant.
const DOMINANCE_MARGIN: f64 = 1.5;

/// Confidence multiplier applied when the primary emotion is dominant.
const DOMINANCE_BOOST: f64 = 1.3;

// ---------------------------------------------------------------------------
// Emotion
// ---------------------------------------------------------------------------

/// The six emotion categories the analyzer can detect.
///
/// Declaration order doubles as the tie-breaking priority: when two emotions
/// share the maximum match count, the variant declared first wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Anxious,
    Frustrated,
    Excited,
    Worried,
}

impl Emotion {
    /// Every emotion, in tie-breaking priority order.
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Anxious,
        Emotion::Frustrated,
        Emotion::Excited,
        Emotion::Worried,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Anxious => "anxious",
            Emotion::Frustrated => "frustrated",
            Emotion::Excited => "excited",
            Emotion::Worried => "worried",
        }
    }

    fn lexicon(&self) -> &'static HashSet<&'static str> {
        match self {
            Emotion::Happy => &lexicon::HAPPY_WORDS,
            Emotion::Sad => &lexicon::SAD_WORDS,
            Emotion::Anxious => &lexicon::ANXIOUS_WORDS,
            Emotion::Frustrated => &lexicon::FRUSTRATED_WORDS,
            Emotion::Excited => &lexicon::EXCITED_WORDS,
            Emotion::Worried => &lexicon::WORRIED_WORDS,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SentimentLabel
// ---------------------------------------------------------------------------

/// Coarse sentiment classification derived from the score's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "neg")]
    Negative,
    #[serde(rename = "neu")]
    Neutral,
    #[serde(rename = "pos")]
    Positive,
}

impl SentimentLabel {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 0 => SentimentLabel::Positive,
            s if s < 0 => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Negative => "neg",
            SentimentLabel::Neutral => "neu",
            SentimentLabel::Positive => "pos",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AnalysisResult
// ---------------------------------------------------------------------------

/// Complete affect assessment for one piece of text.
///
/// Invariants:
/// - `score == positive_matches.len() - negative_matches.len()`
/// - `label` follows the sign of `score`
/// - `emotion_confidence` is in `[0, 1]`
/// - `emotion_scores` always carries all six emotion keys
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Positive occurrences minus negative occurrences.
    pub score: i32,
    pub label: SentimentLabel,
    /// Positive lexicon hits in order of occurrence, duplicates preserved.
    pub positive_matches: Vec<String>,
    /// Negative lexicon hits in order of occurrence, duplicates preserved.
    pub negative_matches: Vec<String>,
    /// Primary emotion, or `None` when no emotion word matched.
    #[serde(serialize_with = "serialize_emotion")]
    pub emotion: Option<Emotion>,
    pub emotion_confidence: f64,
    /// Distinct-token match count per emotion.
    pub emotion_scores: BTreeMap<Emotion, u32>,
}

impl AnalysisResult {
    /// The primary emotion's name, `"neutral"` when nothing matched.
    pub fn emotion_name(&self) -> &'static str {
        self.emotion.map(|e| e.as_str()).unwrap_or("neutral")
    }

    fn neutral() -> Self {
        AnalysisResult {
            score: 0,
            label: SentimentLabel::Neutral,
            positive_matches: Vec::new(),
            negative_matches: Vec::new(),
            emotion: None,
            emotion_confidence: 0.0,
            emotion_scores: Emotion::ALL.iter().map(|e| (*e, 0)).collect(),
        }
    }
}

fn serialize_emotion<S>(emotion: &Option<Emotion>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match emotion {
        Some(e) => e.serialize(serializer),
        None => serializer.serialize_str("neutral"),
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Analyze `text` for sentiment and emotion.
///
/// Total function: empty or whitespace-only input yields the neutral result
/// rather than an error, and no input can fail.
pub fn analyze(text: &str) -> AnalysisResult {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return AnalysisResult::neutral();
    }

    let mut positive_matches = Vec::new();
    let mut negative_matches = Vec::new();
    for token in &tokens {
        if lexicon::POSITIVE_WORDS.contains(token.as_str()) {
            positive_matches.push(token.clone());
        }
        if lexicon::NEGATIVE_WORDS.contains(token.as_str()) {
            negative_matches.push(token.clone());
        }
    }

    let score = positive_matches.len() as i32 - negative_matches.len() as i32;
    let label = SentimentLabel::from_score(score);

    let (emotion, emotion_confidence, emotion_scores) = detect_emotion(&tokens);

    log::debug!(
        "affect analysis: score={}, label={}, emotion={}, confidence={:.2}",
        score,
        label,
        emotion.map(|e| e.as_str()).unwrap_or("neutral"),
        emotion_confidence,
    );

    AnalysisResult {
        score,
        label,
        positive_matches,
        negative_matches,
        emotion,
        emotion_confidence,
        emotion_scores,
    }
}

/// Rank the six emotions against the distinct tokens of the input.
///
/// Confidence rewards both density (matches relative to distinct-token
/// count) and dominance (clear separation from the runner-up emotion).
fn detect_emotion(tokens: &[String]) -> (Option<Emotion>, f64, BTreeMap<Emotion, u32>) {
    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    let mut scores = BTreeMap::new();
    for emotion in Emotion::ALL {
        let count = distinct
            .iter()
            .filter(|token| emotion.lexicon().contains(**token))
            .count() as u32;
        scores.insert(emotion, count);
    }

    // Strict comparison keeps the earliest emotion in priority order on ties.
    let mut primary = Emotion::Happy;
    let mut match_count = 0u32;
    for emotion in Emotion::ALL {
        let count = scores[&emotion];
        if count > match_count {
            primary = emotion;
            match_count = count;
        }
    }

    if match_count == 0 {
        return (None, 0.0, scores);
    }

    let second_best = Emotion::ALL
        .iter()
        .filter(|e| **e != primary)
        .map(|e| scores[e])
        .max()
        .unwrap_or(0);

    let total_unique = distinct.len() as f64;
    let mut confidence =
        (f64::from(match_count) / (DENSITY_NORMALIZER * total_unique).max(1.0)).min(1.0);
    if f64::from(match_count) > f64::from(second_best) * DOMINANCE_MARGIN {
        confidence = (confidence * DOMINANCE_BOOST).min(1.0);
    }

    (Some(primary), confidence, scores)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_neutral() {
        for input in ["", "   ", "\t\n", "!!! ..."] {
            let result = analyze(input);
            assert_eq!(result.score, 0);
            assert_eq!(result.label, SentimentLabel::Neutral);
            assert_eq!(result.emotion, None);
            assert_eq!(result.emotion_name(), "neutral");
            assert_eq!(result.emotion_confidence, 0.0);
            assert!(result.positive_matches.is_empty());
            assert!(result.negative_matches.is_empty());
            assert_eq!(result.emotion_scores.len(), 6);
            assert!(result.emotion_scores.values().all(|&c| c == 0));
        }
    }

    #[test]
    fn test_positive_sentence() {
        let result = analyze("I am happy and joyful");
        assert_eq!(result.score, 2);
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.positive_matches.contains(&"happy".to_string()));
        assert!(result.positive_matches.contains(&"joyful".to_string()));
        assert!(result.negative_matches.is_empty());
        assert_eq!(result.emotion, Some(Emotion::Happy));
    }

    #[test]
    fn test_negative_sentence() {
        let result = analyze("I am sad and depressed");
        assert_eq!(result.score, -2);
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.negative_matches.contains(&"sad".to_string()));
        assert!(result.negative_matches.contains(&"depressed".to_string()));
        assert!(result.positive_matches.is_empty());
        assert_eq!(result.emotion, Some(Emotion::Sad));
    }

    #[test]
    fn test_neutral_sentence() {
        let result = analyze("The car is blue and has four wheels");
        assert_eq!(result.score, 0);
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert!(result.positive_matches.is_empty());
        assert!(result.negative_matches.is_empty());
    }

    #[test]
    fn test_score_counts_duplicate_occurrences() {
        let result = analyze("sad sad sad");
        assert_eq!(result.score, -3);
        assert_eq!(result.negative_matches, vec!["sad", "sad", "sad"]);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_emotion_collapses_duplicates() {
        // Three occurrences of "sad" count once in emotion matching.
        let result = analyze("sad sad sad");
        assert_eq!(result.emotion_scores[&Emotion::Sad], 1);
        assert_eq!(result.emotion, Some(Emotion::Sad));
    }

    #[test]
    fn test_score_matches_hit_counts_invariant() {
        for input in [
            "happy but tired",
            "grateful and calm yet worried",
            "angry angry happy",
            "nothing to see here",
        ] {
            let result = analyze(input);
            assert_eq!(
                result.score,
                result.positive_matches.len() as i32 - result.negative_matches.len() as i32,
            );
            assert_eq!(result.label, SentimentLabel::from_score(result.score));
        }
    }

    #[test]
    fn test_tie_break_follows_priority_order() {
        // "worried" appears in both the anxious and worried lexicons; the
        // anxious variant is earlier in priority and must win the 1-1 tie.
        let result = analyze("I am worried");
        assert_eq!(result.emotion_scores[&Emotion::Anxious], 1);
        assert_eq!(result.emotion_scores[&Emotion::Worried], 1);
        assert_eq!(result.emotion, Some(Emotion::Anxious));
    }

    #[test]
    fn test_confidence_within_unit_interval() {
        for input in [
            "happy",
            "sad and miserable and hopeless",
            "a long message where only one word is anxious among many many other filler words",
            "The weather today is cloudy",
        ] {
            let confidence = analyze(input).emotion_confidence;
            assert!((0.0..=1.0).contains(&confidence), "confidence {} for {:?}", confidence, input);
        }
    }

    #[test]
    fn test_confidence_density_and_dominance() {
        // Five distinct tokens, two happy matches, no runner-up:
        // min(2 / max(0.5, 1), 1) = 1.0, boosted stays 1.0.
        let result = analyze("I am happy and joyful");
        assert_eq!(result.emotion_confidence, 1.0);

        // One match among twenty distinct tokens: 1 / max(2, 1) = 0.5,
        // dominance boost lifts it to 0.65.
        let filler = "one two three four five six seven eight nine ten \
                      eleven twelve thirteen fourteen fifteen sixteen \
                      seventeen eighteen nineteen";
        let result = analyze(&format!("{} cheerful", filler));
        assert!((result.emotion_confidence - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_analyzer_never_truncates_input() {
        // Remote providers truncate at 500 characters; the analyzer must
        // still count matches past that point.
        let input = format!("{}happy", "x ".repeat(300));
        let result = analyze(&input);
        assert_eq!(result.score, 1);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_all_six_scores_always_present() {
        let result = analyze("a perfectly ordinary sentence");
        assert_eq!(result.emotion_scores.len(), 6);
        for emotion in Emotion::ALL {
            assert!(result.emotion_scores.contains_key(&emotion));
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let input = "I feel anxious, worried, and a little hopeful today";
        let first = analyze(input);
        let second = analyze(input);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap(),
        );
    }

    #[test]
    fn test_serializes_neutral_emotion_as_string() {
        let value = serde_json::to_value(analyze("")).unwrap();
        assert_eq!(value["emotion"], "neutral");
        assert_eq!(value["label"], "neu");
    }

    #[test]
    fn test_serializes_emotion_names_lowercase() {
        let value = serde_json::to_value(analyze("I am so frustrated")).unwrap();
        assert_eq!(value["emotion"], "frustrated");
        assert!(value["emotion_scores"].get("frustrated").is_some());
    }
}
