//! # Avatar API
//!
//! `GET /avatar/image/{account}?size=` and the legacy `GET /avatar/{account}`
//! return the layered avatar composition together with the requested output
//! size. Unknown sizes fall back to the default rather than failing, so old
//! links keep resolving.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use bitdisplay_compose::AvatarComposition;
use bitdisplay_core::AvatarSize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{cached_json, normalize};
use crate::cache::TIME_30D;
use crate::error::AppError;
use crate::state::AppState;

/// Avatar query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct AvatarQuery {
    #[serde(default)]
    pub size: Option<String>,
}

/// Avatar response: the composition plus the edge length to render at.
#[derive(Debug, Serialize)]
pub struct AvatarResponse {
    pub size: AvatarSize,
    pub pixels: u32,
    #[serde(flatten)]
    pub composition: AvatarComposition,
}

/// Build the avatar router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/avatar/image/{account}", get(avatar))
        .route("/avatar/{account}", get(avatar))
}

/// GET /avatar/image/{account}?size= and GET /avatar/{account}?size=
async fn avatar(
    State(state): State<AppState>,
    Path(account): Path<String>,
    Query(query): Query<AvatarQuery>,
) -> Result<Response, AppError> {
    let account = normalize(&account);
    let size = query
        .size
        .as_deref()
        .and_then(|s| s.parse::<AvatarSize>().ok())
        .unwrap_or_default();

    let args = format!("{account}?size={size}");
    let value = state
        .cache
        .memoize("avatar", &args, TIME_30D, || -> Result<Value, AppError> {
            let composition = state.avatar.compose(&account)?;
            Ok(serde_json::to_value(AvatarResponse {
                size,
                pixels: size.pixels(),
                composition,
            })?)
        })?;
    Ok(cached_json(value, TIME_30D))
}
