//! # Card Text Layout
//!
//! Sizes and breaks the account name printed on the NFT card. A label's
//! display weight counts emoticons (U+1F600..=U+1F64F) as two and every
//! other character as one; the weight picks a [`TextFormat`] bucket, and the
//! label is split greedily into that bucket's number of lines.
//!
//! ## Line breaking
//!
//! Characters are appended to the current line until its accumulated weight
//! reaches `weight / lines`, then a new line starts. Because no character
//! weighs more than two, every bucket with more than one line leaves
//! enough weight for each later line, so the output always has exactly
//! `format.lines` non-empty lines.

use bitdisplay_core::DisplayError;
use serde::Serialize;

/// A text format bucket covering display weights `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextFormat {
    /// Smallest weight in the bucket.
    pub min: u32,
    /// Largest weight in the bucket.
    pub max: u32,
    /// Font size in card units.
    pub font_size: u32,
    /// Number of lines.
    pub lines: u32,
}

impl TextFormat {
    /// Whether `weight` falls in this bucket.
    pub fn contains(&self, weight: u32) -> bool {
        (self.min..=self.max).contains(&weight)
    }
}

/// Format buckets in ascending weight order. Contiguous from zero; the last
/// bucket is open-ended.
pub const ACCOUNT_FORMATS: [TextFormat; 9] = [
    TextFormat { min: 0, max: 9, font_size: 66, lines: 1 },
    TextFormat { min: 10, max: 10, font_size: 60, lines: 1 },
    TextFormat { min: 11, max: 13, font_size: 48, lines: 1 },
    TextFormat { min: 14, max: 17, font_size: 36, lines: 1 },
    TextFormat { min: 18, max: 24, font_size: 48, lines: 2 },
    TextFormat { min: 25, max: 32, font_size: 36, lines: 2 },
    TextFormat { min: 33, max: 48, font_size: 36, lines: 3 },
    TextFormat { min: 49, max: 75, font_size: 24, lines: 3 },
    TextFormat { min: 76, max: u32::MAX, font_size: 24, lines: 4 },
];

/// Display weight of one character.
pub fn char_weight(c: char) -> u32 {
    if ('\u{1F600}'..='\u{1F64F}').contains(&c) {
        2
    } else {
        1
    }
}

/// Display weight of a label, saturating at `u32::MAX`.
pub fn label_weight(label: &str) -> u32 {
    label
        .chars()
        .fold(0u32, |acc, c| acc.saturating_add(char_weight(c)))
}

/// The bucket containing `weight`.
pub fn format_for_weight(weight: u32) -> TextFormat {
    let last = ACCOUNT_FORMATS[ACCOUNT_FORMATS.len() - 1];
    ACCOUNT_FORMATS
        .iter()
        .copied()
        .find(|format| format.contains(weight))
        .unwrap_or(last)
}

/// A sized, line-broken label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLayout {
    /// The label split into `format.lines` lines.
    pub lines: Vec<String>,
    /// Font size for every line.
    pub font_size: u32,
    /// Total display weight of the label.
    pub weight: u32,
    /// The bucket the weight selected.
    pub format: TextFormat,
}

impl DisplayLayout {
    /// Vertical offset (`dy`) for each line when centring a multi-line
    /// block: the first line moves up by half the block, later lines step
    /// down one font size. Single-line layouts need no offset.
    pub fn line_offsets(&self) -> Vec<Option<i32>> {
        if self.lines.len() <= 1 {
            return vec![None; self.lines.len()];
        }
        let font_size = self.font_size as i32;
        let first = -(font_size / 2) * (self.format.lines as i32 - 1);
        std::iter::once(Some(first))
            .chain(std::iter::repeat(Some(font_size)).take(self.lines.len() - 1))
            .collect()
    }
}

/// Size and break `label` for the card.
///
/// # Errors
///
/// Returns [`DisplayError::InvalidInput`] if `label` is empty.
pub fn display_layout(label: &str) -> Result<DisplayLayout, DisplayError> {
    if label.is_empty() {
        return Err(DisplayError::empty("label"));
    }
    let weight = label_weight(label);
    let format = format_for_weight(weight);
    let line_count = u64::from(format.lines);

    let mut lines: Vec<String> = Vec::with_capacity(format.lines as usize);
    let mut current = String::new();
    let mut current_weight: u64 = 0;

    for c in label.chars() {
        current.push(c);
        current_weight += u64::from(char_weight(c));
        // current_weight >= weight / lines, without division.
        if current_weight * line_count >= u64::from(weight) {
            lines.push(std::mem::take(&mut current));
            current_weight = 0;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    Ok(DisplayLayout {
        lines,
        font_size: format.font_size,
        weight,
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_weight() {
        assert_eq!(char_weight('a'), 1);
        assert_eq!(char_weight('中'), 1);
        assert_eq!(char_weight('😀'), 2);
        assert_eq!(char_weight('🙏'), 2);
        // Outside the emoticon block.
        assert_eq!(char_weight('🚀'), 1);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(format_for_weight(0).font_size, 66);
        assert_eq!(format_for_weight(9).font_size, 66);
        assert_eq!(format_for_weight(10).font_size, 60);
        assert_eq!(format_for_weight(11).font_size, 48);
        assert_eq!(format_for_weight(75).lines, 3);
        assert_eq!(format_for_weight(76).lines, 4);
        assert_eq!(format_for_weight(u32::MAX).lines, 4);
    }

    #[test]
    fn test_buckets_are_contiguous() {
        assert_eq!(ACCOUNT_FORMATS[0].min, 0);
        for pair in ACCOUNT_FORMATS.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min);
        }
        assert_eq!(ACCOUNT_FORMATS[ACCOUNT_FORMATS.len() - 1].max, u32::MAX);
    }

    #[test]
    fn test_short_label_single_line() {
        let layout = display_layout("alice").unwrap();
        assert_eq!(layout.lines, vec!["alice"]);
        assert_eq!(layout.font_size, 66);
        assert_eq!(layout.weight, 5);
        assert_eq!(layout.line_offsets(), vec![None]);
    }

    #[test]
    fn test_two_line_split() {
        let label = "abcdefghijklmnopqr"; // weight 18
        let layout = display_layout(label).unwrap();
        assert_eq!(layout.lines, vec!["abcdefghi", "jklmnopqr"]);
        assert_eq!(layout.font_size, 48);
        assert_eq!(layout.line_offsets(), vec![Some(-24), Some(48)]);
    }

    #[test]
    fn test_three_line_offsets() {
        let label = "a".repeat(33);
        let layout = display_layout(&label).unwrap();
        assert_eq!(layout.lines.len(), 3);
        assert!(layout.lines.iter().all(|l| l.len() == 11));
        assert_eq!(layout.line_offsets(), vec![Some(-36), Some(36), Some(36)]);
    }

    #[test]
    fn test_emoji_weighs_two() {
        let layout = display_layout("😀😀😀😀😀").unwrap();
        assert_eq!(layout.weight, 10);
        assert_eq!(layout.font_size, 60);
        assert_eq!(layout.lines.len(), 1);
    }

    #[test]
    fn test_wide_character_overflows_threshold() {
        // weight 18, threshold 9: the fifth emoji pushes line one to 10.
        let label = format!("{}{}", "😀".repeat(5), "a".repeat(8));
        let layout = display_layout(&label).unwrap();
        assert_eq!(layout.lines, vec!["😀".repeat(5), "a".repeat(8)]);
    }

    #[test]
    fn test_empty_label_rejected() {
        assert!(display_layout("").is_err());
    }
}
