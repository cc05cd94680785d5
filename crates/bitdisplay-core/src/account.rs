//! # Account Newtypes
//!
//! A `.bit` account (`alice.bit`) and its label (`alice`) are distinct
//! types: the composition engines hash the label but color by the full
//! account, and mixing the two silently changes every derived output.
//!
//! ## Validation
//!
//! Both types reject the empty string at construction. No other
//! normalization happens here; lowercasing is the caller's contract, so
//! `Alice.bit` and `alice.bit` remain different accounts.

use serde::{Deserialize, Serialize};

use crate::error::DisplayError;

/// The suffix every registered account carries.
pub const BIT_SUFFIX: &str = ".bit";

/// Implement `Deserialize` by routing the raw string through `new()` so
/// empty values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A full account name, usually ending in `.bit`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AccountName(String);

impl_validating_deserialize!(AccountName);

impl AccountName {
    /// Create an account name.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidInput`] if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, DisplayError> {
        let s = value.into();
        if s.is_empty() {
            return Err(DisplayError::empty("account name"));
        }
        Ok(Self(s))
    }

    /// Access the account string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the account carries the `.bit` suffix.
    pub fn is_bit(&self) -> bool {
        self.0.ends_with(BIT_SUFFIX)
    }

    /// The label with one trailing `.bit` removed.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidInput`] for the bare suffix `".bit"`,
    /// whose label would be empty.
    pub fn label(&self) -> Result<Label, DisplayError> {
        Label::new(self.0.strip_suffix(BIT_SUFFIX).unwrap_or(&self.0))
    }
}

impl std::fmt::Display for AccountName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AccountName {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// An account label: the name without its `.bit` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Label(String);

impl_validating_deserialize!(Label);

impl Label {
    /// Create a label.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidInput`] if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, DisplayError> {
        let s = value.into();
        if s.is_empty() {
            return Err(DisplayError::empty("label"));
        }
        Ok(Self(s))
    }

    /// Access the label string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of Unicode scalar values in the label.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Re-attach the `.bit` suffix.
    pub fn to_account(&self) -> AccountName {
        AccountName(format!("{}{BIT_SUFFIX}", self.0))
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Label {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_rejects_empty() {
        assert!(matches!(
            AccountName::new(""),
            Err(DisplayError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_label_strips_single_suffix() {
        let account = AccountName::new("alice.bit").unwrap();
        assert!(account.is_bit());
        assert_eq!(account.label().unwrap().as_str(), "alice");

        let nested = AccountName::new("alice.bit.bit").unwrap();
        assert_eq!(nested.label().unwrap().as_str(), "alice.bit");
    }

    #[test]
    fn test_label_without_suffix_is_unchanged() {
        let account = AccountName::new("alice").unwrap();
        assert!(!account.is_bit());
        assert_eq!(account.label().unwrap().as_str(), "alice");
    }

    #[test]
    fn test_bare_suffix_has_no_label() {
        let account = AccountName::new(".bit").unwrap();
        assert!(account.label().is_err());
    }

    #[test]
    fn test_case_is_preserved() {
        let account = AccountName::new("Alice.bit").unwrap();
        assert_eq!(account.label().unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_char_len_counts_scalars() {
        let label = Label::new("a😀b").unwrap();
        assert_eq!(label.char_len(), 3);
        assert_eq!(label.to_account().as_str(), "a😀b.bit");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<AccountName, _> = serde_json::from_str("\"bob.bit\"");
        assert_eq!(ok.unwrap().as_str(), "bob.bit");
        let err: Result<Label, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }
}
