//! # API Route Modules
//!
//! - `identicon`: MD5 identicon compositions.
//! - `avatar`: layered avatar compositions, with the legacy path.
//! - `erc721`: NFT card text layout and token metadata.
//! - `category`: character set and marketplace traits.
//!
//! Every handler memoizes its JSON through the shared
//! [`ResponseCache`](crate::cache::ResponseCache) and advertises the same
//! TTL in `Cache-Control`.

pub mod avatar;
pub mod category;
pub mod erc721;
pub mod identicon;

use std::time::Duration;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

/// Account names are case-insensitive on chain; every route works on the
/// trimmed lowercase form.
pub(crate) fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A JSON response with a public `Cache-Control` matching `ttl`.
pub(crate) fn cached_json(value: Value, ttl: Duration) -> Response {
    (
        [(
            header::CACHE_CONTROL,
            format!("public, max-age={}", ttl.as_secs()),
        )],
        Json(value),
    )
        .into_response()
}
