//! # Account Categories
//!
//! Derives the trait list shown on marketplaces from a label. Rules are
//! grouped by length class and the first class that applies is the only one
//! evaluated; inside a class every applicable rule emits, in the order
//! below.
//!
//! | Class | Shape | Traits, in emission order |
//! |---|---|---|
//! | hex | `0x` + 3, 4 or 5 digits | `0x999` / `0x10k` / `0x100k` only |
//! | 3D | 3 digits | `Lucky`, `999 club` |
//! | 4D | 4 digits | `10k club` + `Lucky`, template, `MMDD`, `ABCD`, `DCBA` |
//! | 5D | 5 digits | `Lucky`, `100k club`, template, `ABCDE`, `EDCBA` |
//! | Letter | ASCII letters | template, `Word{n}L` |
//!
//! A label is lucky when it contains a `6` or an `8`. In the 4D class the
//! lucky trait follows the club tag unless the label opens with a lucky
//! digit, in which case it leads. That placement reproduces the published
//! 4D outputs (`1638`, `8765`) and is not a naming rule in its own right.

use serde::{Deserialize, Serialize};

use crate::template::first_match;
use crate::words;

/// Repetition templates for 4-digit labels, most specific first.
pub const FOUR_DIGIT_TEMPLATES: [&str; 10] = [
    "AAAA", "ABBB", "AAAB", "AABA", "ABAA", "AABB", "ABAB", "ABBA", "AABC", "ABCC",
];

/// Repetition templates for 5-digit labels, most specific first.
pub const FIVE_DIGIT_TEMPLATES: [&str; 14] = [
    "AAAAA", "AABAA", "ABBBB", "AAAAB", "ABAAA", "AAABB", "AABBB", "AAABA", "ABBBA", "ABCCC",
    "ABBBC", "AAABC", "ABABA", "ABCBA",
];

/// Repetition templates for letter labels, most specific first.
pub const LETTER_TEMPLATES: [&str; 5] = ["AAAA", "ABBBA", "AABB", "ABAB", "ABABA"];

const LUCKY: &str = "Lucky";

/// The trait family a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitType {
    /// Three-digit labels.
    #[serde(rename = "3D")]
    ThreeDigit,
    /// Four-digit labels.
    #[serde(rename = "4D")]
    FourDigit,
    /// Five-digit labels.
    #[serde(rename = "5D")]
    FiveDigit,
    /// Letter labels.
    #[serde(rename = "Letter")]
    Letter,
}

impl TraitType {
    /// Returns the marketplace trait type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeDigit => "3D",
            Self::FourDigit => "4D",
            Self::FiveDigit => "5D",
            Self::Letter => "Letter",
        }
    }
}

impl std::fmt::Display for TraitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(trait_type, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trait {
    /// The trait family.
    pub trait_type: TraitType,
    /// The category value, e.g. `"999 club"` or `"ABBA"`.
    pub value: String,
}

impl Trait {
    /// Create a trait.
    pub fn new(trait_type: TraitType, value: impl Into<String>) -> Self {
        Self {
            trait_type,
            value: value.into(),
        }
    }
}

/// Classify `label` into its ordered trait list.
///
/// Labels that fit no class (including the empty label) yield an empty
/// list.
pub fn classify(label: &str) -> Vec<Trait> {
    if let Some(digits) = label.strip_prefix("0x") {
        if is_digits(digits) {
            return match digits.len() {
                3 => vec![Trait::new(TraitType::ThreeDigit, "0x999")],
                4 => vec![Trait::new(TraitType::FourDigit, "0x10k")],
                5 => vec![Trait::new(TraitType::FiveDigit, "0x100k")],
                _ => Vec::new(),
            };
        }
    }

    if is_digits(label) {
        return match label.len() {
            3 => three_digit(label),
            4 => four_digit(label),
            5 => five_digit(label),
            _ => Vec::new(),
        };
    }

    if !label.is_empty() && label.bytes().all(|b| b.is_ascii_alphabetic()) {
        return letters(label);
    }

    Vec::new()
}

fn three_digit(label: &str) -> Vec<Trait> {
    let mut traits = Vec::new();
    if is_lucky(label) {
        traits.push(Trait::new(TraitType::ThreeDigit, LUCKY));
    }
    traits.push(Trait::new(TraitType::ThreeDigit, "999 club"));
    traits
}

fn four_digit(label: &str) -> Vec<Trait> {
    let t = TraitType::FourDigit;
    let mut traits = Vec::new();

    let lucky = is_lucky(label);
    let leads_lucky = label.starts_with(['6', '8']);
    if lucky && leads_lucky {
        traits.push(Trait::new(t, LUCKY));
    }
    traits.push(Trait::new(t, "10k club"));
    if lucky && !leads_lucky {
        traits.push(Trait::new(t, LUCKY));
    }

    if let Some(template) = first_match(&FOUR_DIGIT_TEMPLATES, label) {
        traits.push(Trait::new(t, template));
    }
    if is_month_day(label) {
        traits.push(Trait::new(t, "MMDD"));
    }
    if is_run(label, 1) {
        traits.push(Trait::new(t, "ABCD"));
    }
    if is_run(label, -1) {
        traits.push(Trait::new(t, "DCBA"));
    }
    traits
}

fn five_digit(label: &str) -> Vec<Trait> {
    let t = TraitType::FiveDigit;
    let mut traits = Vec::new();
    if is_lucky(label) {
        traits.push(Trait::new(t, LUCKY));
    }
    traits.push(Trait::new(t, "100k club"));
    if let Some(template) = first_match(&FIVE_DIGIT_TEMPLATES, label) {
        traits.push(Trait::new(t, template));
    }
    if is_run(label, 1) {
        traits.push(Trait::new(t, "ABCDE"));
    }
    if is_run(label, -1) {
        traits.push(Trait::new(t, "EDCBA"));
    }
    traits
}

fn letters(label: &str) -> Vec<Trait> {
    let t = TraitType::Letter;
    let mut traits = Vec::new();
    if let Some(template) = first_match(&LETTER_TEMPLATES, label) {
        traits.push(Trait::new(t, template));
    }
    if words::contains(label) {
        traits.push(Trait::new(t, format!("Word{}L", label.len())));
    }
    traits
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_lucky(label: &str) -> bool {
    label.contains(['6', '8'])
}

/// `MMDD` with month `01..=12` and day `01..=31`, compared as strings.
fn is_month_day(label: &str) -> bool {
    let (month, day) = label.split_at(2);
    ("01"..="12").contains(&month) && ("01"..="31").contains(&day)
}

/// Whether each byte differs from the previous by exactly `step`.
fn is_run(label: &str, step: i16) -> bool {
    label
        .as_bytes()
        .windows(2)
        .all(|w| i16::from(w[1]) - i16::from(w[0]) == step)
}
