//! # ERC-721 API
//!
//! - `GET /erc721/card/{account}`: what the NFT card draws: the label
//!   broken into lines with per-line offsets, the account color and the
//!   account identicon.
//! - `GET /erc721/data/{account}?expires_at=&registered_at=`: the token
//!   metadata document. Dates are unix seconds as stored on chain.
//!
//! Both are short-lived in the cache since expiry and ownership change.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use bitdisplay_classify::{erc721_metadata, AccountDates};
use bitdisplay_compose::{display_layout, IdenticonComposition};
use bitdisplay_core::{account_color, AccountColor, AccountName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{cached_json, normalize};
use crate::cache::TIME_10S;
use crate::error::AppError;
use crate::state::AppState;

/// Everything the card renderer needs besides fonts and templates.
#[derive(Debug, Serialize)]
pub struct CardLayout {
    pub account: String,
    pub lines: Vec<String>,
    pub font_size: u32,
    /// `dy` per line; `None` for a single line.
    pub line_offsets: Vec<Option<i32>>,
    pub color: AccountColor,
    pub identicon: IdenticonComposition,
}

/// Metadata query parameters, in unix seconds.
#[derive(Debug, Default, Deserialize)]
pub struct MetadataQuery {
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub registered_at: Option<i64>,
}

/// Build the ERC-721 router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/erc721/card/{account}", get(card))
        .route("/erc721/data/{account}", get(metadata))
}

/// GET /erc721/card/{account}
async fn card(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> Result<Response, AppError> {
    let account = normalize(&account);
    let value = state
        .cache
        .memoize("erc721-card", &account, TIME_10S, || -> Result<Value, AppError> {
            let account = AccountName::new(account.as_str())?;
            let layout = display_layout(account.label()?.as_str())?;
            Ok(serde_json::to_value(CardLayout {
                line_offsets: layout.line_offsets(),
                lines: layout.lines,
                font_size: layout.font_size,
                color: account_color(account.as_str()),
                identicon: state.identicon.compose(account.as_str())?,
                account: account.to_string(),
            })?)
        })?;
    Ok(cached_json(value, TIME_10S))
}

/// GET /erc721/data/{account}?expires_at=&registered_at=
async fn metadata(
    State(state): State<AppState>,
    Path(account): Path<String>,
    query: Result<Query<MetadataQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let account = normalize(&account);
    let dates = AccountDates {
        expires_at: query.expires_at.map(to_datetime).transpose()?,
        registered_at: query.registered_at.map(to_datetime).transpose()?,
    };

    let args = format!(
        "{account}?expires_at={:?}&registered_at={:?}",
        query.expires_at, query.registered_at
    );
    let value = state
        .cache
        .memoize("erc721-data", &args, TIME_10S, || -> Result<Value, AppError> {
            let account = AccountName::new(account.as_str())?;
            let meta = erc721_metadata(&account, &dates, &state.config.image_base)?;
            Ok(serde_json::to_value(meta)?)
        })?;
    Ok(cached_json(value, TIME_10S))
}

fn to_datetime(secs: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| AppError::Validation(format!("timestamp out of range: {secs}")))
}
