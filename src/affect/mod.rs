//! Lexicon-based affect analysis.
//!
//! Fast, offline sentiment scoring and emotion detection over fixed word
//! lexicons. No model inference, no I/O, no failure path: every input,
//! including empty text, yields a fully populated [`AnalysisResult`].

pub mod analyzer;
pub mod lexicon;

pub use analyzer::{analyze, AnalysisResult, Emotion, SentimentLabel};
