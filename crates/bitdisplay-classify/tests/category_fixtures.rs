//! Category fixtures covering every rule of every length class.

use bitdisplay_classify::{classify, Trait, TraitType};
use proptest::prelude::*;

fn expect(label: &str, trait_type: TraitType, values: &[&str]) {
    let expected: Vec<Trait> = values.iter().map(|v| Trait::new(trait_type, *v)).collect();
    assert_eq!(classify(label), expected, "label {label:?}");
}

#[test]
fn test_three_digit() {
    let t = TraitType::ThreeDigit;
    expect("0x999", t, &["0x999"]);
    expect("0x123", t, &["0x999"]);
    expect("123", t, &["999 club"]);
    expect("163", t, &["Lucky", "999 club"]);
}

#[test]
fn test_four_digit() {
    let t = TraitType::FourDigit;
    expect("0994", t, &["10k club"]);
    expect("1638", t, &["10k club", "Lucky"]);
    expect("0x2433", t, &["0x10k"]);
    expect("5977", t, &["10k club", "ABCC"]);
    expect("0129", t, &["10k club", "MMDD"]);
    expect("3345", t, &["10k club", "AABC"]);
    expect("3343", t, &["10k club", "AABA"]);
    expect("2333", t, &["10k club", "ABBB"]);
    expect("2223", t, &["10k club", "AAAB"]);
    expect("2233", t, &["10k club", "AABB"]);
    expect("7977", t, &["10k club", "ABAA"]);
    expect("5757", t, &["10k club", "ABAB"]);
    expect("9009", t, &["10k club", "ABBA"]);
    expect("1234", t, &["10k club", "ABCD"]);
    expect("8765", t, &["Lucky", "10k club", "DCBA"]);
    expect("5555", t, &["10k club", "AAAA"]);
}

#[test]
fn test_five_digit() {
    let t = TraitType::FiveDigit;
    expect("23790", t, &["100k club"]);
    expect("18234", t, &["Lucky", "100k club"]);
    expect("0x24336", t, &["0x100k"]);
    expect("12223", t, &["100k club", "ABBBC"]);
    expect("33321", t, &["100k club", "AAABC"]);
    expect("34543", t, &["100k club", "ABCBA"]);
    expect("90000", t, &["100k club", "ABBBB"]);
    expect("11112", t, &["100k club", "AAAAB"]);
    expect("11222", t, &["100k club", "AABBB"]);
    expect("13111", t, &["100k club", "ABAAA"]);
    expect("19991", t, &["100k club", "ABBBA"]);
    expect("09777", t, &["100k club", "ABCCC"]);
    expect("12121", t, &["100k club", "ABABA"]);
    expect("11121", t, &["100k club", "AAABA"]);
    expect("11122", t, &["100k club", "AAABB"]);
    expect("99999", t, &["100k club", "AAAAA"]);
    expect("99299", t, &["100k club", "AABAA"]);
    expect("12345", t, &["100k club", "ABCDE"]);
    expect("54321", t, &["100k club", "EDCBA"]);
}

#[test]
fn test_letters() {
    let t = TraitType::Letter;
    expect("me", t, &["Word2L"]);
    expect("this", t, &["Word4L"]);
    expect("verve", t, &["Word5L"]);
    expect("rolls", t, &["Word5L"]);
    expect("abab", t, &["ABAB"]);
    expect("cccc", t, &["AAAA"]);
    expect("uuii", t, &["AABB"]);
    expect("yoyoy", t, &["ABABA"]);
    expect("pooop", t, &["ABBBA"]);
    expect("fringe", t, &["Word6L"]);
}

#[test]
fn test_most_specific_template_wins() {
    // 5555 also matches AABB and ABAB; only the first listed is emitted.
    let values: Vec<String> = classify("5555").into_iter().map(|t| t.value).collect();
    assert!(values.contains(&"AAAA".to_string()));
    assert!(!values.contains(&"AABB".to_string()));
    assert!(!values.contains(&"ABAB".to_string()));
}

#[test]
fn test_unclassified_labels() {
    assert!(classify("").is_empty());
    assert!(classify("中文").is_empty());
    assert!(classify("😀").is_empty());
    assert!(classify("a1b2").is_empty());
}

proptest! {
    #[test]
    fn classify_is_deterministic(label in "\\PC{0,8}") {
        prop_assert_eq!(classify(&label), classify(&label));
    }

    #[test]
    fn digit_classes_always_carry_club_tag(label in "[0-9]{3,5}") {
        let club = match label.len() {
            3 => "999 club",
            4 => "10k club",
            _ => "100k club",
        };
        let traits = classify(&label);
        prop_assert!(traits.iter().any(|t| t.value == club));
    }

    #[test]
    fn traits_share_one_type(label in "[0-9a-z]{1,6}") {
        let traits = classify(&label);
        if let Some(first) = traits.first() {
            prop_assert!(traits.iter().all(|t| t.trait_type == first.trait_type));
        }
    }
}
