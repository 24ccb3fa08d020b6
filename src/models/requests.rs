//! Request DTOs for the shout API
//!
//! Both accepted body encodings carry the input in a field named `data`.

use serde::Deserialize;
use serde_json::{Map, Value};

/// JSON body of `POST /` (`{"data": "<string>"}`)
///
/// Kept as a raw object so only a real `data` member counts: arrays are
/// rejected, a wrong type is reported like a missing field, and the last of
/// duplicate keys wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct JsonPayload(pub Map<String, Value>);

impl JsonPayload {
    /// The input string, if `data` is present and a string.
    pub fn into_input(mut self) -> Option<String> {
        match self.0.remove("data") {
            Some(Value::String(input)) => Some(input),
            _ => None,
        }
    }
}

/// Form body of `POST /` (`data=<string>`)
///
/// Pairs are kept in order; the first `data` wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormPayload(pub Vec<(String, String)>);

impl FormPayload {
    /// The first `data` value, if any.
    pub fn into_input(self) -> Option<String> {
        self.0
            .into_iter()
            .find(|(name, _)| name == "data")
            .map(|(_, value)| value)
    }
}
