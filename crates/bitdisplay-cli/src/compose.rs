//! # Composition Subcommands

use anyhow::Context;
use bitdisplay_compose::{avatar, display_layout, identicon};
use bitdisplay_core::{AccountName, AvatarSize};
use clap::Args;
use serde_json::{json, Value};

/// Arguments for `identicon`.
#[derive(Args, Debug)]
pub struct IdenticonArgs {
    /// Name to hash. Lowercased before hashing.
    pub name: String,
}

/// Arguments for `avatar`.
#[derive(Args, Debug)]
pub struct AvatarArgs {
    /// Account, e.g. `alice.bit`.
    pub account: String,

    /// Output size name (xxs, xs, sm, md, lg, xl, xxl).
    #[arg(long, default_value = "md")]
    pub size: AvatarSize,
}

/// Arguments for `layout`.
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Account or bare label; a `.bit` suffix is stripped.
    pub label: String,
}

/// Identicon composition for the lowercased name.
pub fn run_identicon(args: &IdenticonArgs) -> anyhow::Result<Value> {
    let name = args.name.to_lowercase();
    let composition = identicon::compose(&name).context("composing identicon")?;
    Ok(serde_json::to_value(composition)?)
}

/// Avatar composition with the requested pixel size.
pub fn run_avatar(args: &AvatarArgs) -> anyhow::Result<Value> {
    let composition = avatar::compose(&args.account.to_lowercase()).context("composing avatar")?;
    let mut value = serde_json::to_value(composition)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("size".to_string(), json!(args.size));
        obj.insert("pixels".to_string(), json!(args.size.pixels()));
    }
    Ok(value)
}

/// Card text layout, with per-line offsets.
pub fn run_layout(args: &LayoutArgs) -> anyhow::Result<Value> {
    let label = AccountName::new(args.label.as_str())?.label()?;
    let layout = display_layout(label.as_str())?;
    let offsets = layout.line_offsets();
    let mut value = serde_json::to_value(layout)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("line_offsets".to_string(), json!(offsets));
    }
    Ok(value)
}
