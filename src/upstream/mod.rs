//! Upstream Module
//!
//! Outbound calls to the text-transformation provider.

mod shout;

use async_trait::async_trait;

use crate::error::Result;

pub use shout::{reverse, ShoutClient};

// == Transformer ==
/// A single, uncached call to a text-transformation provider.
#[async_trait]
pub trait Transformer: Send + Sync {
    async fn transform(&self, input: &str) -> Result<String>;
}
