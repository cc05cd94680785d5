//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor: runtime configuration, the response cache and
//! the two composers.

use std::sync::Arc;

use bitdisplay_compose::{Avatar, Identicon};

use crate::cache::{ResponseCache, DEFAULT_CAPACITY};

/// Default public origin used in metadata image URLs.
pub const DEFAULT_IMAGE_BASE: &str = "https://display.did.id";

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Maximum number of cached responses.
    pub cache_capacity: usize,
    /// Public origin of this service, without a trailing slash.
    pub image_base: String,
}

impl ApiConfig {
    /// Build configuration from `PORT`, `BITDISPLAY_CACHE_CAPACITY` and
    /// `BITDISPLAY_IMAGE_BASE`. Missing or unparsable values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cache_capacity: lookup("BITDISPLAY_CACHE_CAPACITY")
                .and_then(|c| c.parse().ok())
                .unwrap_or(defaults.cache_capacity),
            image_base: lookup("BITDISPLAY_IMAGE_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .filter(|b| !b.is_empty())
                .unwrap_or(defaults.image_base),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            cache_capacity: DEFAULT_CAPACITY,
            image_base: DEFAULT_IMAGE_BASE.to_string(),
        }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub cache: ResponseCache,
    pub identicon: Identicon,
    pub avatar: Avatar,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Create application state from `config`.
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            cache: ResponseCache::new(config.cache_capacity),
            config: Arc::new(config),
            identicon: Identicon::new(),
            avatar: Avatar::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
