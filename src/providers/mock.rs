//! Local rule-based reply provider.
//!
//! Keyword-matched canned responses for development and testing without API
//! costs. Always available, needs no credential, and never falls back.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::ProviderConfig;
use crate::errors::ProviderError;
use crate::providers::{Provider, ReplyProvider};

/// Keyword pools checked in priority order; the first keyword contained in
/// the lowercased input selects its pool.
static KEYWORD_RESPONSES: [(&str, [&str; 3]); 5] = [
    (
        "anxious",
        [
            "I understand you're feeling anxious. Try taking deep breaths and focusing on the present moment.",
            "Anxiety can be overwhelming. Consider grounding techniques like naming 5 things you can see.",
            "It's okay to feel anxious sometimes. What specific situation is making you feel this way?",
        ],
    ),
    (
        "sad",
        [
            "I'm sorry you're feeling sad. Your feelings are valid and it's okay to sit with them.",
            "Sadness is a natural emotion. Would you like to talk about what's contributing to these feelings?",
            "Thank you for sharing how you're feeling. Sometimes expressing sadness can be the first step.",
        ],
    ),
    (
        "happy",
        [
            "It's wonderful that you're feeling happy! What's bringing you joy today?",
            "I'm glad to hear you're in good spirits. Happiness is precious - savor this moment.",
            "That's great to hear! Positive emotions can be contagious and healing.",
        ],
    ),
    (
        "stressed",
        [
            "Stress can be really challenging. Have you tried any relaxation techniques recently?",
            "It sounds like you have a lot on your plate. What's the most pressing concern right now?",
            "Stress is your body's way of signaling that something needs attention. Let's break it down.",
        ],
    ),
    (
        "help",
        [
            "I'm here to listen and support you. What would be most helpful right now?",
            "Asking for help takes courage. What specific area would you like to focus on?",
            "You've taken an important step by reaching out. How can I best support you today?",
        ],
    ),
];

/// Responses for input matching no keyword.
static DEFAULT_RESPONSES: [&str; 5] = [
    "Thank you for sharing that with me. Can you tell me more about how you're feeling?",
    "I hear you. It sounds like you have something important on your mind.",
    "I appreciate you opening up. What would be most helpful for you right now?",
    "Your thoughts and feelings matter. Would you like to explore this topic further?",
    "It takes strength to express yourself. How has your day been overall?",
];

/// Rule-based provider with an injectable random source.
///
/// The draw among a pool's candidates is the only non-determinism in the
/// crate; construct via [`MockProvider::seeded`] to pin outcomes in tests.
#[derive(Debug)]
pub struct MockProvider {
    rng: Mutex<StdRng>,
}

impl MockProvider {
    /// Provider with an entropy-seeded random source.
    pub fn new() -> Self {
        MockProvider {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Provider with a fixed seed, for deterministic tests.
    pub fn seeded(seed: u64) -> Self {
        MockProvider {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn pick(&self, pool: &[&'static str]) -> String {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        pool.choose(&mut *rng)
            .copied()
            .unwrap_or(DEFAULT_RESPONSES[0])
            .to_string()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        MockProvider::new()
    }
}

#[async_trait]
impl ReplyProvider for MockProvider {
    fn provider(&self) -> Provider {
        Provider::Mock
    }

    fn fallback_reply(&self) -> &'static str {
        // Unreachable in practice: try_reply below never errors.
        DEFAULT_RESPONSES[0]
    }

    async fn try_reply(
        &self,
        text: &str,
        _config: &ProviderConfig,
    ) -> Result<String, ProviderError> {
        let lowered = text.to_lowercase();
        for (keyword, pool) in &KEYWORD_RESPONSES {
            if lowered.contains(keyword) {
                return Ok(self.pick(pool));
            }
        }
        Ok(self.pick(&DEFAULT_RESPONSES))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
