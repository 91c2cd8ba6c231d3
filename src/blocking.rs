//! A blocking client.
//!
//! Same contract as [`crate::AviationWeather`], but every call blocks the current thread until
//! the response body has been read and decoded. Do not use it from inside an async runtime.

use crate::client::{check_status, decode_body};
use crate::config::ClientConfig;
use crate::error::AwcError;
use crate::query::MetarQuery;
use crate::types::response::MetarResponse;
use log::debug;

/// Blocking client for the AWC text data server.
///
/// # Examples
///
/// ```no_run
/// use aviationweather::blocking::AviationWeather;
/// use aviationweather::{AwcError, MetarQuery};
///
/// # fn main() -> Result<(), AwcError> {
/// let client = AviationWeather::new()?;
/// let query = MetarQuery::new()
///     .radial_filter(25.0, 39.85, -104.65)
///     .hours_before_now(1.0);
///
/// let response = client.metars(&query)?;
/// if !response.is_ok() {
///     eprintln!("server said: {:?}", response.errors);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AviationWeather {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl AviationWeather {
    /// # Errors
    ///
    /// Returns [`AwcError::ClientBuild`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, AwcError> {
        Self::with_config(ClientConfig::default())
    }

    /// # Errors
    ///
    /// Returns [`AwcError::ClientBuild`] if the HTTP client cannot be built from `config`.
    pub fn with_config(config: ClientConfig) -> Result<Self, AwcError> {
        // The blocking builder defaults to a 30s timeout; `None` keeps that default.
        let mut builder = reqwest::blocking::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(AwcError::ClientBuild)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the METARs matching `query` with one GET request.
    ///
    /// # Errors
    ///
    /// * [`AwcError::Transport`] if the request cannot be sent or the body cannot be read.
    /// * [`AwcError::UnexpectedStatus`] for a status outside `200..=299`. The body is not parsed.
    /// * [`AwcError::Decode`] if the body is not a text data server response.
    pub fn metars(&self, query: &MetarQuery) -> Result<MetarResponse, AwcError> {
        let url = query.url_with_base(&self.config.base_url);
        debug!("Requesting METARs from {}", url);

        let response = self
            .http
            .get(url.as_str())
            .send()
            .map_err(|e| AwcError::Transport(url.clone(), e))?;

        check_status(&url, response.status())?;

        let body = response
            .text()
            .map_err(|e| AwcError::Transport(url.clone(), e))?;

        decode_body(url, &body)
    }
}

/// One-shot fetch against the public AWC server with a default client.
///
/// # Errors
///
/// See [`AviationWeather::metars`]. Also returns [`AwcError::ClientBuild`] if the default
/// client cannot be built.
pub fn get_metars(query: &MetarQuery) -> Result<MetarResponse, AwcError> {
    AviationWeather::new()?.metars(query)
}
