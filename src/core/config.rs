//! Client configuration sourced from the environment
//!
//! Token acquisition (the OAuth dance) is the caller's problem; by the time a
//! client is built the token must already be valid.

use crate::core::error::{Result, TuneError};

/// Public Spotify Web API base. Overridable for tests and proxies.
pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1";

/// Configuration for the streaming-service client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// OAuth bearer token presented on every request
    pub access_token: String,
    /// Base URL the API paths are joined onto (no trailing slash)
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(access_token: impl Into<String>, api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            access_token: access_token.into(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Create a config from environment variables
    ///
    /// Required: SPOTIFY_ACCESS_TOKEN
    /// Optional: SPOTIFY_API_BASE (defaults to the public API)
    pub fn from_env() -> Result<Self> {
        let access_token = std::env::var("SPOTIFY_ACCESS_TOKEN")
            .map_err(|_| TuneError::ConfigError("SPOTIFY_ACCESS_TOKEN not set".into()))?;
        let api_base =
            std::env::var("SPOTIFY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());

        let config = Self::new(access_token, api_base);
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.access_token.trim().is_empty() {
            return Err(TuneError::ConfigError("access token is empty".into()));
        }
        if !self.api_base.starts_with("http") {
            return Err(TuneError::ConfigError(format!(
                "api_base ({}) is not an HTTP(S) URL",
                self.api_base
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ClientConfig::new("token", "https://api.example.com/v1/");
        assert_eq!(config.api_base, "https://api.example.com/v1");
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        let config = ClientConfig::new("  ", DEFAULT_API_BASE);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_base() {
        let config = ClientConfig::new("token", "ftp://example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let config = ClientConfig::new("token", DEFAULT_API_BASE);
        assert!(config.validate().is_ok());
    }
}
