//! # Classification Subcommands

use bitdisplay_classify::{character_set_of, classify, erc721_metadata, AccountDates};
use bitdisplay_core::AccountName;
use chrono::{DateTime, Utc};
use clap::Args;
use serde_json::{json, Value};

/// Arguments for `classify` and `charset`.
#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Account or bare label; a `.bit` suffix is stripped.
    pub label: String,
}

/// Arguments for `metadata`.
#[derive(Args, Debug)]
pub struct MetadataArgs {
    /// Account, e.g. `1234.bit`.
    pub account: String,

    /// Expiry as RFC 3339, e.g. `2030-01-01T00:00:00Z`.
    #[arg(long)]
    pub expires_at: Option<DateTime<Utc>>,

    /// Registration time as RFC 3339.
    #[arg(long)]
    pub registered_at: Option<DateTime<Utc>>,

    /// Public origin used for the image URL.
    #[arg(long, default_value = "https://display.did.id")]
    pub image_base: String,
}

fn label_of(raw: &str) -> anyhow::Result<String> {
    let account = AccountName::new(raw.to_lowercase())?;
    Ok(account.label()?.as_str().to_string())
}

/// Ordered category traits.
pub fn run_classify(args: &LabelArgs) -> anyhow::Result<Value> {
    let label = label_of(&args.label)?;
    Ok(serde_json::to_value(classify(&label))?)
}

/// Character set of the label.
pub fn run_charset(args: &LabelArgs) -> anyhow::Result<Value> {
    let label = label_of(&args.label)?;
    let character_set = character_set_of(&label)?;
    Ok(json!({ "label": label, "character_set": character_set }))
}

/// ERC-721 metadata document.
pub fn run_metadata(args: &MetadataArgs) -> anyhow::Result<Value> {
    let account = AccountName::new(args.account.to_lowercase())?;
    let dates = AccountDates {
        expires_at: args.expires_at,
        registered_at: args.registered_at,
    };
    let base = args.image_base.trim_end_matches('/');
    Ok(serde_json::to_value(erc721_metadata(&account, &dates, base)?)?)
}
