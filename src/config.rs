//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default upstream endpoint for the shout transformation.
pub const DEFAULT_SHOUT_API_URL: &str = "http://api.shoutcloud.io/V1/SHOUT";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of memoized transformations
    pub max_entries: usize,
    /// Seconds a memoized transformation stays valid, 0 = forever
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
    /// Upstream shout endpoint
    pub shout_api_url: String,
    /// Upstream request timeout in milliseconds
    pub upstream_timeout_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Cache capacity (default: 100)
    /// - `CACHE_TTL` - Entry lifetime in seconds, 0 disables expiry (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    /// - `SHOUT_API_URL` - Upstream endpoint (default: shoutcloud)
    /// - `UPSTREAM_TIMEOUT_MS` - Upstream timeout in milliseconds (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            shout_api_url: env::var("SHOUT_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.shout_api_url),
            upstream_timeout_ms: parse_var("UPSTREAM_TIMEOUT_MS")
                .unwrap_or(defaults.upstream_timeout_ms),
        }
    }

    /// Entry lifetime, `None` when expiry is disabled.
    pub fn entry_ttl(&self) -> Option<Duration> {
        (self.cache_ttl > 0).then(|| Duration::from_secs(self.cache_ttl))
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 100,
            cache_ttl: 300,
            server_port: 5000,
            cleanup_interval: 60,
            shout_api_url: DEFAULT_SHOUT_API_URL.to_string(),
            upstream_timeout_ms: 1000,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_entries, 100);
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.shout_api_url, DEFAULT_SHOUT_API_URL);
        assert_eq!(config.upstream_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        for name in [
            "MAX_ENTRIES",
            "CACHE_TTL",
            "SERVER_PORT",
            "CLEANUP_INTERVAL",
            "SHOUT_API_URL",
            "UPSTREAM_TIMEOUT_MS",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env();
        assert_eq!(config.max_entries, 100);
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.shout_api_url, DEFAULT_SHOUT_API_URL);
        assert_eq!(config.upstream_timeout_ms, 1000);
    }

    #[test]
    fn test_entry_ttl_zero_disables_expiry() {
        let config = Config {
            cache_ttl: 0,
            ..Config::default()
        };
        assert_eq!(config.entry_ttl(), None);

        let config = Config::default();
        assert_eq!(config.entry_ttl(), Some(Duration::from_secs(300)));
    }
}
