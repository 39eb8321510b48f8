//! Sentiment and emotion word lexicons.
//!
//! Pure data: immutable, lowercase word sets built once and shared by every
//! request. The positive and negative sentiment sets are disjoint; the six
//! emotion sets may overlap each other and the sentiment sets.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Words counted toward a positive sentiment score.
pub static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Core positive emotions
        "happy", "joy", "joyful", "excited", "elated", "cheerful", "pleased", "delighted",
        "content", "satisfied", "glad", "euphoric", "blissful", "ecstatic",
        // Achievement and success
        "proud", "accomplished", "successful", "confident", "motivated", "inspired",
        "optimistic", "hopeful", "encouraged", "empowered",
        // Relationships and connection
        "loved", "supported", "connected", "grateful", "thankful", "blessed",
        "appreciated", "valued", "accepted", "understood",
        // Energy and vitality
        "energetic", "vibrant", "alive", "refreshed", "revitalized", "strong",
        "healthy", "active", "dynamic",
        // Peace and calm
        "peaceful", "calm", "relaxed", "serene", "tranquil", "balanced", "centered",
        "harmonious", "stable",
    ]
    .into_iter()
    .collect()
});

/// Words counted toward a negative sentiment score.
pub static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Core negative emotions
        "sad", "depressed", "unhappy", "miserable", "devastated", "heartbroken",
        "grief", "sorrow", "despair", "hopeless", "defeated",
        // Anxiety and fear
        "anxious", "worried", "nervous", "scared", "afraid", "terrified", "panicked",
        "stressed", "overwhelmed", "tense", "restless", "uneasy",
        // Anger and frustration
        "angry", "frustrated", "irritated", "annoyed", "furious", "enraged",
        "bitter", "resentful", "hostile", "aggressive",
        // Isolation and rejection
        "lonely", "isolated", "abandoned", "rejected", "unwanted", "excluded",
        "disconnected", "alienated", "ignored", "forgotten",
        // Physical and mental distress
        "tired", "exhausted", "drained", "weak", "sick", "painful", "hurt",
        "suffering", "struggling", "broken", "empty", "numb",
    ]
    .into_iter()
    .collect()
});

/// Happiness and joy vocabulary.
pub static HAPPY_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "happy", "joy", "joyful", "excited", "elated", "cheerful", "pleased", "delighted",
        "content", "satisfied", "glad", "euphoric", "blissful", "ecstatic", "amazing",
        "wonderful", "fantastic", "great", "awesome", "brilliant", "excellent", "perfect",
        "love", "loving", "adore", "celebrate", "celebrating", "thrilled", "overjoyed",
    ]
    .into_iter()
    .collect()
});

/// Sadness and grief vocabulary.
pub static SAD_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "sad", "depressed", "unhappy", "miserable", "devastated", "heartbroken",
        "grief", "sorrow", "despair", "hopeless", "defeated", "crying", "tears",
        "melancholy", "gloomy", "downhearted", "dejected", "despondent", "mourn",
        "mourning", "weep", "weeping", "blue", "down", "low", "empty",
    ]
    .into_iter()
    .collect()
});

/// Anxiety and fear vocabulary.
pub static ANXIOUS_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "anxious", "worried", "nervous", "scared", "afraid", "terrified", "panicked",
        "stressed", "overwhelmed", "tense", "restless", "uneasy", "panic", "fear",
        "fearful", "apprehensive", "concerned", "troubled", "distressed", "agitated",
        "jittery", "edgy", "unsettled", "bothered", "worry", "stress", "tension",
    ]
    .into_iter()
    .collect()
});

/// Anger and irritation vocabulary.
pub static FRUSTRATED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "frustrated", "annoyed", "irritated", "angry", "furious", "enraged", "mad",
        "bitter", "resentful", "hostile", "aggressive", "impatient",
        "aggravated", "exasperated", "infuriated", "livid", "outraged", "indignant",
        "vexed", "irked", "peeved", "bothered", "upset", "cross", "grumpy",
    ]
    .into_iter()
    .collect()
});

/// Enthusiasm and energy vocabulary.
pub static EXCITED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "excited", "enthusiastic", "eager", "thrilled", "pumped", "energetic",
        "motivated", "inspired", "passionate", "animated", "vibrant", "dynamic",
        "stimulated", "invigorated", "electrified", "exhilarated",
        "psyched", "amped", "stoked", "buzzing", "charged", "alive",
    ]
    .into_iter()
    .collect()
});

/// Concern and unease vocabulary.
pub static WORRIED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "worried", "concerned", "troubled", "anxious", "apprehensive", "fearful",
        "uneasy", "disturbed", "perturbed", "bothered", "distressed", "nervous",
        "tense", "stressed", "overwhelmed", "burden", "burdened", "preoccupied",
        "restless", "unsettled", "agitated", "fretful", "care", "caring",
    ]
    .into_iter()
    .collect()
});

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_sets_are_disjoint() {
        let overlap: Vec<_> = POSITIVE_WORDS.intersection(&NEGATIVE_WORDS).collect();
        assert!(overlap.is_empty(), "overlapping sentiment words: {:?}", overlap);
    }

    #[test]
    fn test_all_sets_are_lowercase_single_words() {
        for set in [
            &POSITIVE_WORDS,
            &NEGATIVE_WORDS,
            &HAPPY_WORDS,
            &SAD_WORDS,
            &ANXIOUS_WORDS,
            &FRUSTRATED_WORDS,
            &EXCITED_WORDS,
            &WORRIED_WORDS,
        ] {
            for word in set.iter() {
                assert_eq!(*word, word.to_lowercase(), "not lowercase: {}", word);
                assert!(!word.contains(char::is_whitespace), "multi-word entry: {}", word);
            }
        }
    }

    #[test]
    fn test_emotion_sets_are_non_empty() {
        assert!(!HAPPY_WORDS.is_empty());
        assert!(!SAD_WORDS.is_empty());
        assert!(!ANXIOUS_WORDS.is_empty());
        assert!(!FRUSTRATED_WORDS.is_empty());
        assert!(!EXCITED_WORDS.is_empty());
        assert!(!WORRIED_WORDS.is_empty());
    }
}
