//! # Category API
//!
//! `GET /category/{account}` returns the character set and the ordered
//! marketplace traits of the account's label.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use bitdisplay_classify::{character_set_of, classify, CharacterSet, Trait};
use bitdisplay_core::AccountName;
use serde::Serialize;
use serde_json::Value;

use super::{cached_json, normalize};
use crate::cache::TIME_1H;
use crate::error::AppError;
use crate::state::AppState;

/// Category response.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub account: String,
    pub character_set: CharacterSet,
    pub traits: Vec<Trait>,
}

/// Build the category router.
pub fn router() -> Router<AppState> {
    Router::new().route("/category/{account}", get(category))
}

/// GET /category/{account}
async fn category(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> Result<Response, AppError> {
    let account = normalize(&account);
    let value = state
        .cache
        .memoize("category", &account, TIME_1H, || -> Result<Value, AppError> {
            let account = AccountName::new(account.as_str())?;
            let label = account.label()?;
            Ok(serde_json::to_value(CategoryResponse {
                character_set: character_set_of(label.as_str())?,
                traits: classify(label.as_str()),
                account: account.to_string(),
            })?)
        })?;
    Ok(cached_json(value, TIME_1H))
}
