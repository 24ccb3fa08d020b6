//! Stub upstream servers shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns the shout URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/V1/SHOUT", addr)
}

/// A URL nothing is listening on.
pub async fn closed_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/V1/SHOUT", addr)
}

fn input_of(body: &Value) -> String {
    body["INPUT"].as_str().unwrap_or_default().to_string()
}

/// Behaves like shoutcloud: upper-cases `INPUT`.
pub fn shout_router() -> Router {
    Router::new().route(
        "/V1/SHOUT",
        post(|Json(body): Json<Value>| async move {
            let input = input_of(&body);
            Json(json!({ "INPUT": input, "OUTPUT": input.to_uppercase() }))
        }),
    )
}

/// Shouts like [`shout_router`] and counts every call it receives.
pub fn counting_shout_router(calls: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route(
            "/V1/SHOUT",
            post(
                |State(calls): State<Arc<AtomicUsize>>, Json(body): Json<Value>| async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "OUTPUT": input_of(&body).to_uppercase() }))
                },
            ),
        )
        .with_state(calls)
}

/// Returns `INPUT` unchanged as `OUTPUT`.
pub fn echo_router() -> Router {
    Router::new().route(
        "/V1/SHOUT",
        post(|Json(body): Json<Value>| async move { Json(json!({ "OUTPUT": input_of(&body) })) }),
    )
}

/// Answers every request with a fixed raw body.
pub fn fixed_body_router(body: &'static str) -> Router {
    Router::new().route("/V1/SHOUT", post(move || async move { body }))
}

/// Shouts, but only after `delay`.
pub fn slow_router(delay: Duration) -> Router {
    Router::new().route(
        "/V1/SHOUT",
        post(move |Json(body): Json<Value>| async move {
            tokio::time::sleep(delay).await;
            Json(json!({ "OUTPUT": input_of(&body).to_uppercase() }))
        }),
    )
}
