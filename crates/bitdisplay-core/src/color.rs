//! # Account Color
//!
//! A single brand color per account, chosen from a fixed 12-color palette by
//! summing the account's UTF-16 code units. The avatar engine paints it as
//! the flat background when the texture layer is skipped, and the NFT card
//! uses it for the rounded square behind the name.

use serde::Serialize;

/// The account palette, in index order.
pub const ACCOUNT_COLORS: [&str; 12] = [
    "#9692E6", "#40C3F0", "#FF9895", "#FEC165", "#E96565", "#3370FF", "#FF4F6E", "#6957ED",
    "#22C4C6", "#BC51EC", "#FFA86A", "#22C68D",
];

/// A palette entry chosen for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccountColor {
    /// Index into [`ACCOUNT_COLORS`].
    pub index: usize,
    /// The `#RRGGBB` color value.
    pub hex: &'static str,
}

/// Pick the palette color for `account`.
///
/// Sums UTF-16 code units rather than scalar values, so characters outside
/// the Basic Multilingual Plane contribute both surrogate halves.
pub fn account_color(account: &str) -> AccountColor {
    let sum: u64 = account.encode_utf16().map(u64::from).sum();
    let index = (sum % ACCOUNT_COLORS.len() as u64) as usize;
    AccountColor {
        index,
        hex: ACCOUNT_COLORS[index],
    }
}
