//! Shoutcloud Client
//!
//! Reverses the input and asks the upstream API to shout it back.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::Transformer;
use crate::error::{
    Result, ServiceError, UPSTREAM_BAD_SHAPE_MESSAGE, UPSTREAM_NOT_JSON_MESSAGE,
};

/// Request body understood by the upstream API.
#[derive(Debug, Serialize)]
struct ShoutRequest<'a> {
    #[serde(rename = "INPUT")]
    input: &'a str,
}

// == Shout Client ==
/// HTTP client for the upstream shout endpoint.
///
/// Performs exactly one attempt per call; there are no retries.
#[derive(Debug, Clone)]
pub struct ShoutClient {
    http: reqwest::Client,
    url: String,
}

impl ShoutClient {
    /// Builds a client posting to `url` with a per-request `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transformer for ShoutClient {
    async fn transform(&self, input: &str) -> Result<String> {
        let reversed = reverse(input);

        let response = self
            .http
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&ShoutRequest { input: &reversed })
            .send()
            .await
            .map_err(|e| {
                warn!("Shout request to {} failed: {}", self.url, e);
                ServiceError::upstream_unavailable()
            })?;

        debug!("Shout upstream answered with status {}", response.status());

        let body = response.bytes().await.map_err(|e| {
            warn!("Reading shout response body failed: {}", e);
            ServiceError::upstream_unavailable()
        })?;

        parse_output(&body)
    }
}

// == Helpers ==
/// Reverses a string by Unicode scalar value.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Extracts the `OUTPUT` string from an upstream response body.
fn parse_output(body: &[u8]) -> Result<String> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        warn!("Shout response is not JSON: {}", e);
        ServiceError::UpstreamBadResponse(UPSTREAM_NOT_JSON_MESSAGE.to_string())
    })?;

    match value.get("OUTPUT") {
        Some(Value::String(output)) => Ok(output.clone()),
        _ => {
            warn!("Shout response lacks a string OUTPUT field: {}", value);
            Err(ServiceError::UpstreamBadResponse(
                UPSTREAM_BAD_SHAPE_MESSAGE.to_string(),
            ))
        }
    }
}
