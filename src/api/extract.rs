//! Request Extractors
//!
//! Pulls the `data` field out of JSON or form-encoded bodies.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use tracing::debug;

use crate::error::ServiceError;
use crate::models::{FormPayload, JsonPayload};

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// == Data Field ==
/// The `data` string of an inbound transform request.
///
/// Rejects with [`ServiceError::InvalidInput`] when the content type is not
/// JSON or form-encoded, the body is malformed, or `data` is missing or not
/// a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataField(pub String);

#[async_trait]
impl<S> FromRequest<S> for DataField
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(media_type);

        let input = match content_type.as_deref() {
            Some(JSON_CONTENT_TYPE) => Json::<JsonPayload>::from_request(req, state)
                .await
                .ok()
                .and_then(|Json(payload)| payload.into_input()),
            Some(FORM_CONTENT_TYPE) => Form::<FormPayload>::from_request(req, state)
                .await
                .ok()
                .and_then(|Form(payload)| payload.into_input()),
            _ => None,
        };

        input.map(DataField).ok_or_else(|| {
            debug!("No usable data field (content type {:?})", content_type);
            ServiceError::invalid_input()
        })
    }
}

/// Media type of a Content-Type header, without parameters.
fn media_type(header: &str) -> String {
    header
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
