//! # Repetition Templates
//!
//! A template such as `AABC` describes which positions of a candidate must
//! repeat. Matching walks the template left to right: the first occurrence
//! of a template letter binds it to the candidate character at that
//! position, and every later occurrence must equal the bound character.
//!
//! Distinct template letters may bind to equal characters, so `5555`
//! matches `AABB` as well as `AAAA`. Template lists are therefore ordered
//! from most to least specific and [`first_match`] returns the earliest hit.

/// Whether `candidate` matches `template`.
///
/// Lengths are compared in characters; a length mismatch never matches.
pub fn matches(template: &str, candidate: &str) -> bool {
    let mut bindings: Vec<(char, char)> = Vec::with_capacity(template.len());
    let mut candidate_chars = candidate.chars();

    for letter in template.chars() {
        let Some(c) = candidate_chars.next() else {
            return false;
        };
        match bindings.iter().find(|(bound, _)| *bound == letter) {
            Some(&(_, expected)) if expected != c => return false,
            Some(_) => {}
            None => bindings.push((letter, c)),
        }
    }

    candidate_chars.next().is_none()
}

/// The first template in `templates` that `candidate` matches.
pub fn first_match<'t>(templates: &[&'t str], candidate: &str) -> Option<&'t str> {
    templates
        .iter()
        .copied()
        .find(|template| matches(template, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_walk() {
        assert!(matches("AABC", "3345"));
        assert!(matches("ABBA", "9009"));
        assert!(!matches("ABBA", "9001"));
        assert!(matches("ABCBA", "34543"));
    }

    #[test]
    fn test_distinct_letters_may_bind_equal_chars() {
        assert!(matches("AABB", "5555"));
        assert!(matches("ABCD", "1111"));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!matches("AAAA", "aaa"));
        assert!(!matches("AAA", "aaaa"));
        assert!(!matches("A", ""));
    }

    #[test]
    fn test_first_match_priority() {
        let templates = ["AAAA", "AABB", "ABAB"];
        assert_eq!(first_match(&templates, "cccc"), Some("AAAA"));
        assert_eq!(first_match(&templates, "uuii"), Some("AABB"));
        assert_eq!(first_match(&templates, "abab"), Some("ABAB"));
        assert_eq!(first_match(&templates, "abcd"), None);
    }

    #[test]
    fn test_multibyte_candidates() {
        assert!(matches("ABA", "中文中"));
        assert!(!matches("ABA", "中文字"));
    }
}
