//! # Integration Tests for bitdisplay-api
//!
//! Drives the assembled router with `oneshot` requests: health probe,
//! every composition route, cache headers, and error bodies.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bitdisplay_api::{ApiConfig, AppState};

/// Helper: build the test app with default configuration.
fn test_app() -> axum::Router {
    bitdisplay_api::app(AppState::new())
}

/// Helper: issue a GET and return the response.
async fn get(app: axum::Router, uri: &str) -> axum::http::Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Helper: read response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn cache_control(response: &axum::http::Response<Body>) -> &str {
    response
        .headers()
        .get(header::CACHE_CONTROL)
        .unwrap()
        .to_str()
        .unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = get(test_app(), "/health/liveness").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

// -- Identicon ----------------------------------------------------------------

#[tokio::test]
async fn test_identicon_composition() {
    let response = get(test_app(), "/identicon/abc").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(cache_control(&response), "public, max-age=2592000");

    let json = body_json(response).await;
    assert_eq!(json["name"], "abc");
    assert_eq!(json["digest"], "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(json["colors"], serde_json::json!([9, 1, 5, 1, 6, 6, 10, 2, 10, 15]));
    assert_eq!(json["ring"], 9);
    assert_eq!(json["background"], 10);
    assert_eq!(json["figures"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_identicon_name_is_lowercased() {
    let upper = body_json(get(test_app(), "/identicon/ABC").await).await;
    let lower = body_json(get(test_app(), "/identicon/abc").await).await;
    assert_eq!(upper, lower);
}

#[tokio::test]
async fn test_identicon_served_from_cache() {
    let state = AppState::new();
    let app = bitdisplay_api::app(state.clone());
    let first = body_json(get(app.clone(), "/identicon/alice").await).await;
    assert_eq!(state.cache.len(), 1);
    let second = body_json(get(app, "/identicon/alice").await).await;
    assert_eq!(first, second);
    assert_eq!(state.cache.len(), 1);
}

// -- Avatar -------------------------------------------------------------------

#[tokio::test]
async fn test_avatar_layers_back_to_front() {
    let response = get(test_app(), "/avatar/image/abc.bit?size=lg").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(cache_control(&response), "public, max-age=2592000");

    let json = body_json(response).await;
    assert_eq!(json["account"], "abc.bit");
    assert_eq!(json["size"], "lg");
    assert_eq!(json["pixels"], 500);
    let layers = json["layers"].as_array().unwrap();
    assert_eq!(layers.len(), 11);
    assert_eq!(layers[0]["name"], "texture");
    assert_eq!(layers[0]["choice"], serde_json::json!({"kind": "unit", "id": "02"}));
    assert_eq!(layers[10]["name"], "headset");
    assert_eq!(layers[10]["choice"], serde_json::json!({"kind": "unit", "id": "13"}));
}

#[tokio::test]
async fn test_avatar_legacy_path_and_default_size() {
    let json = body_json(get(test_app(), "/avatar/abc.bit?size=huge").await).await;
    assert_eq!(json["size"], "md");
    assert_eq!(json["pixels"], 300);
    let image = body_json(get(test_app(), "/avatar/image/abc.bit").await).await;
    assert_eq!(json, image);
}

#[tokio::test]
async fn test_avatar_bare_suffix_rejected() {
    let response = get(test_app(), "/avatar/image/.bit").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

// -- ERC-721 ------------------------------------------------------------------

#[tokio::test]
async fn test_card_layout() {
    let response = get(test_app(), "/erc721/card/alice.bit").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(cache_control(&response), "public, max-age=10");

    let json = body_json(response).await;
    assert_eq!(json["account"], "alice.bit");
    assert_eq!(json["lines"], serde_json::json!(["alice"]));
    assert_eq!(json["font_size"], 66);
    assert_eq!(json["line_offsets"], serde_json::json!([null]));
    assert_eq!(json["color"]["index"], 11);
    assert_eq!(json["color"]["hex"], "#22C68D");
    assert_eq!(json["identicon"]["name"], "alice.bit");
}

#[tokio::test]
async fn test_card_multiline() {
    let json = body_json(get(test_app(), "/erc721/card/abcdefghijklmnopqr.bit").await).await;
    assert_eq!(json["lines"], serde_json::json!(["abcdefghi", "jklmnopqr"]));
    assert_eq!(json["font_size"], 48);
    assert_eq!(json["line_offsets"], serde_json::json!([-24, 48]));
}

#[tokio::test]
async fn test_metadata_document() {
    let config = ApiConfig {
        image_base: "https://img.test".to_string(),
        ..ApiConfig::default()
    };
    let app = bitdisplay_api::app(AppState::with_config(config));
    let response = get(
        app,
        "/erc721/data/1234.bit?expires_at=1700000000&registered_at=1600000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(cache_control(&response), "public, max-age=10");

    let json = body_json(response).await;
    assert_eq!(json["name"], "1234.bit");
    assert_eq!(json["image"], "https://img.test/erc721/card/1234.bit");
    assert_eq!(json["external_url"], "https://did.id");
    let attributes = json["attributes"].as_array().unwrap();
    assert_eq!(
        attributes[0],
        serde_json::json!({"display_type": "date", "trait_type": "Expiration Date", "value": 1_700_000_000_000_i64})
    );
    assert_eq!(attributes[1]["trait_type"], "Registration Date");
    assert_eq!(attributes[2]["value"], 4);
    assert_eq!(attributes[4], serde_json::json!({"trait_type": "4D", "value": "10k club"}));
    assert_eq!(attributes[5], serde_json::json!({"trait_type": "4D", "value": "ABCD"}));
}

#[tokio::test]
async fn test_metadata_without_dates() {
    let json = body_json(get(test_app(), "/erc721/data/me.bit").await).await;
    assert_eq!(json["attributes"][0]["trait_type"], "Length");
    assert_eq!(json["image"], "https://display.did.id/erc721/card/me.bit");
}

#[tokio::test]
async fn test_metadata_bad_query() {
    let response = get(test_app(), "/erc721/data/me.bit?expires_at=soon").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

// -- Category -----------------------------------------------------------------

#[tokio::test]
async fn test_category() {
    let response = get(test_app(), "/category/8765.bit").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(cache_control(&response), "public, max-age=3600");

    let json = body_json(response).await;
    assert_eq!(json["account"], "8765.bit");
    assert_eq!(json["character_set"], "digit");
    assert_eq!(
        json["traits"],
        serde_json::json!([
            {"trait_type": "4D", "value": "Lucky"},
            {"trait_type": "4D", "value": "10k club"},
            {"trait_type": "4D", "value": "DCBA"}
        ])
    );
}

#[tokio::test]
async fn test_category_uncategorized_label() {
    let json = body_json(get(test_app(), "/category/a-b.bit").await).await;
    assert_eq!(json["character_set"], "mixed");
    assert_eq!(json["traits"], serde_json::json!([]));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = get(test_app(), "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "not found: /nope");
}
