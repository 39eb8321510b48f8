//! Text normalization utilities.

use std::borrow::Cow;

/// Normalize `text` into a token stream: lowercase, replace every character
/// that is neither alphanumeric nor whitespace with a space, then split on
/// whitespace.
///
/// Sentiment and emotion matching both run on exactly this token stream, so
/// `"Happy!!"` and `"happy"` land on the same lexicon entry.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Truncate `text` to at most `max_chars` code points.
///
/// Borrows when the input is already short enough, which is the common case.
pub fn truncate_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => Cow::Owned(text[..byte_index].to_string()),
        None => Cow::Borrowed(text),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
