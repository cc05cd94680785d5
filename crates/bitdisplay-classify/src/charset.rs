//! # Character Set Classification
//!
//! Buckets a label by the kind of characters it is made of. Checks run from
//! narrowest to broadest, so `"123"` is [`CharacterSet::Digit`] even though
//! it is also alphanumeric:
//!
//! 1. ASCII digits only → `Digit`
//! 2. ASCII letters only → `Letter`
//! 3. Unicode letters and numbers only → `Alphanumeric`
//! 4. Emoji grapheme clusters only → `Emoji`
//! 5. Anything else → `Mixed`

use bitdisplay_core::DisplayError;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// The character set of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterSet {
    /// `0-9` only.
    Digit,
    /// `a-z` / `A-Z` only.
    Letter,
    /// Unicode letters and numbers, at least one outside ASCII.
    Alphanumeric,
    /// Emoji sequences only.
    Emoji,
    /// Any other combination.
    Mixed,
}

impl CharacterSet {
    /// Returns the set name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::Letter => "letter",
            Self::Alphanumeric => "alphanumeric",
            Self::Emoji => "emoji",
            Self::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the characters of `label`.
///
/// # Errors
///
/// Returns [`DisplayError::InvalidInput`] if `label` is empty.
pub fn character_set_of(label: &str) -> Result<CharacterSet, DisplayError> {
    if label.is_empty() {
        return Err(DisplayError::empty("label"));
    }
    let set = if label.chars().all(|c| c.is_ascii_digit()) {
        CharacterSet::Digit
    } else if label.chars().all(|c| c.is_ascii_alphabetic()) {
        CharacterSet::Letter
    } else if label.chars().all(char::is_alphanumeric) {
        CharacterSet::Alphanumeric
    } else if label.graphemes(true).all(is_emoji) {
        CharacterSet::Emoji
    } else {
        CharacterSet::Mixed
    };
    Ok(set)
}

/// Whether a grapheme cluster is a single emoji, with or without the
/// emoji presentation selector.
fn is_emoji(grapheme: &str) -> bool {
    emojis::get(grapheme).is_some()
        || (grapheme.contains('\u{FE0F}')
            && emojis::get(&grapheme.replace('\u{FE0F}', "")).is_some())
}
