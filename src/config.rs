//! Settings shared by the async and blocking clients.

use crate::endpoint::DEFAULT_BASE_URL;
use bon::Builder;
use std::time::Duration;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// How a client reaches the text data server.
///
/// Every setting has a default, so `ClientConfig::default()` talks to the public AWC server
/// with no timeout of its own.
///
/// # Examples
///
/// ```
/// use aviationweather::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .base_url("http://localhost:8080/httpparam")
///     .timeout(Duration::from_secs(10))
///     .build();
///
/// assert_eq!(config.base_url, "http://localhost:8080/httpparam");
/// assert_eq!(config.timeout, Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ClientConfig {
    /// Server path without query parameters.
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    #[builder(into, default = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,
    /// Total request timeout. `None` leaves the HTTP transport's default in place.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("aviationweather/"));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::builder()
            .user_agent("metar-board/2.1")
            .maybe_timeout(None)
            .build();
        assert_eq!(config.user_agent, "metar-board/2.1");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
    }
}
