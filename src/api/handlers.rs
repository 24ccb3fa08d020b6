//! API Handlers
//!
//! HTTP request handlers for each endpoint of the shout service.

use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, Json};
use tracing::info;

use super::extract::DataField;
use crate::cache::{MemoizedTransform, TransformStore};
use crate::config::Config;
use crate::error::{HealthCheckFailure, Result};
use crate::models::{StatsResponse, TransformResponse};
use crate::upstream::{ShoutClient, Transformer};

/// Input sent through the full stack by `GET /health`.
pub const HEALTH_PROBE_INPUT: &str = "test";

/// Output the probe must produce.
pub const HEALTH_PROBE_EXPECTED: &str = "TSET";

/// Application state shared across all handlers.
///
/// Built once by the composition root and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    /// Upstream transformer with its LRU memo
    pub transform: MemoizedTransform,
}

impl AppState {
    pub fn new(upstream: Arc<dyn Transformer>, store: TransformStore) -> Self {
        Self {
            transform: MemoizedTransform::new(upstream, store),
        }
    }

    /// Creates a new AppState talking to the configured shout endpoint.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = ShoutClient::new(config.shout_api_url.clone(), config.upstream_timeout())
            .context("failed to build shout api client")?;
        info!("Shout client targeting {}", client.url());

        let store = TransformStore::new(config.max_entries, config.entry_ttl());
        Ok(Self::new(Arc::new(client), store))
    }
}

/// Handler for POST /, /v1 and /v1/
///
/// Reverses and shouts the `data` field, answering from the cache when possible.
pub async fn transform_handler(
    State(state): State<AppState>,
    DataField(input): DataField,
) -> Result<Json<TransformResponse>> {
    let output = state.transform.get_or_compute(&input).await?;
    Ok(Json(TransformResponse::new(output)))
}

/// Handler for GET /health
///
/// Runs the fixed probe through the cached transform. Any failure is fatal.
pub async fn health_handler(
    State(state): State<AppState>,
) -> std::result::Result<&'static str, HealthCheckFailure> {
    let output = state.transform.get_or_compute(HEALTH_PROBE_INPUT).await?;
    if output != HEALTH_PROBE_EXPECTED {
        return Err(HealthCheckFailure::UnexpectedOutput {
            expected: HEALTH_PROBE_EXPECTED,
            actual: output,
        });
    }
    Ok("success")
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.transform.stats().await))
}
