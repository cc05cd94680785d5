//! # Identicon API
//!
//! `GET /identicon/{name}` returns the identicon composition for the
//! lowercased name. The name is hashed whole, suffix included.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde_json::Value;

use super::{cached_json, normalize};
use crate::cache::TIME_30D;
use crate::error::AppError;
use crate::state::AppState;

/// Build the identicon router.
pub fn router() -> Router<AppState> {
    Router::new().route("/identicon/{name}", get(identicon))
}

/// GET /identicon/{name}
async fn identicon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let name = normalize(&name);
    let value = state
        .cache
        .memoize("identicon", &name, TIME_30D, || -> Result<Value, AppError> {
            let composition = state.identicon.compose(&name)?;
            Ok(serde_json::to_value(composition)?)
        })?;
    Ok(cached_json(value, TIME_30D))
}
