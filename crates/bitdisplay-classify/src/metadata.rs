//! # ERC-721 Metadata
//!
//! Assembles the token metadata document marketplaces fetch for an account
//! NFT. Registration and expiry dates live on chain and are passed in by the
//! caller; everything else is derived from the account name.
//!
//! Attribute order is stable: dates, `Length`, `Character Set`, then the
//! category traits in classification order.

use bitdisplay_core::{AccountName, DisplayError};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::category::classify;
use crate::charset::character_set_of;

/// Project homepage linked from every token.
pub const EXTERNAL_URL: &str = "https://did.id";

/// Chain-sourced dates for an account. Either may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountDates {
    /// When the registration expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// When the account was registered.
    pub registered_at: Option<DateTime<Utc>>,
}

/// An attribute value: marketplaces accept numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Numeric value; dates are milliseconds since the epoch.
    Number(i64),
    /// Text value.
    Text(String),
}

/// One entry of the `attributes` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Marketplace rendering hint (`date`, `number`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_type: Option<&'static str>,
    /// Attribute name.
    pub trait_type: String,
    /// Attribute value.
    pub value: AttributeValue,
}

/// The ERC-721 metadata JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Erc721Metadata {
    /// The full account name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Card image URL.
    pub image: String,
    /// Project homepage.
    pub external_url: String,
    /// Marketplace traits.
    pub attributes: Vec<Attribute>,
}

/// Build the metadata document for `account`.
///
/// `image_base` is the public origin of the card endpoint, without a
/// trailing slash.
///
/// # Errors
///
/// Returns [`DisplayError::InvalidInput`] if the account has an empty label.
pub fn erc721_metadata(
    account: &AccountName,
    dates: &AccountDates,
    image_base: &str,
) -> Result<Erc721Metadata, DisplayError> {
    let label = account.label()?;
    let mut attributes = Vec::new();

    if let Some(expires_at) = dates.expires_at {
        attributes.push(date_attribute("Expiration Date", expires_at));
    }
    if let Some(registered_at) = dates.registered_at {
        attributes.push(date_attribute("Registration Date", registered_at));
    }
    attributes.push(Attribute {
        display_type: Some("number"),
        trait_type: "Length".to_string(),
        value: AttributeValue::Number(label.char_len() as i64),
    });
    attributes.push(Attribute {
        display_type: None,
        trait_type: "Character Set".to_string(),
        value: AttributeValue::Text(character_set_of(label.as_str())?.to_string()),
    });
    attributes.extend(classify(label.as_str()).into_iter().map(|t| Attribute {
        display_type: None,
        trait_type: t.trait_type.to_string(),
        value: AttributeValue::Text(t.value),
    }));

    Ok(Erc721Metadata {
        name: account.to_string(),
        description: format!(
            "{account}, Web3.0 identity for you and your community.\n {EXTERNAL_URL}"
        ),
        image: format!("{image_base}/erc721/card/{account}"),
        external_url: EXTERNAL_URL.to_string(),
        attributes,
    })
}

fn date_attribute(trait_type: &str, at: DateTime<Utc>) -> Attribute {
    Attribute {
        display_type: Some("date"),
        trait_type: trait_type.to_string(),
        value: AttributeValue::Number(at.timestamp_millis()),
    }
}
