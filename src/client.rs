//! The async client.
//!
//! [`AviationWeather`] runs on whatever async runtime the caller already uses. For plain
//! synchronous code see [`crate::blocking`], which has the same contract.

use crate::config::ClientConfig;
use crate::error::AwcError;
use crate::query::MetarQuery;
use crate::types::response::MetarResponse;
use log::{debug, info, warn};
use reqwest::StatusCode;

/// Async client for the AWC text data server.
///
/// Each call to [`metars`](Self::metars) sends exactly one GET request. Nothing is retried or
/// cached.
///
/// # Examples
///
/// ```no_run
/// # use aviationweather::{AviationWeather, AwcError, MetarQuery};
/// # #[tokio::main]
/// # async fn main() -> Result<(), AwcError> {
/// let client = AviationWeather::new()?;
/// let response = client
///     .metars(&MetarQuery::new().station("KDEN").hours_before_now(3.0))
///     .await?;
///
/// for metar in &response.metars {
///     println!("{}", metar.raw_text.as_deref().unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AviationWeather {
    http: reqwest::Client,
    config: ClientConfig,
}

impl AviationWeather {
    /// Client for the public AWC server with default settings.
    ///
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
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(AwcError::ClientBuild)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the METARs matching `query`.
    ///
    /// Errors the server embeds in the response body are not failures here; they are
    /// returned in [`MetarResponse::errors`].
    ///
    /// # Errors
    ///
    /// * [`AwcError::Transport`] if the request cannot be sent or the body cannot be read.
    /// * [`AwcError::UnexpectedStatus`] for a status outside `200..=299`. The body is not parsed.
    /// * [`AwcError::Decode`] if the body is not a text data server response.
    pub async fn metars(&self, query: &MetarQuery) -> Result<MetarResponse, AwcError> {
        let url = query.url_with_base(&self.config.base_url);
        debug!("Requesting METARs from {}", url);

        let response = self
            .http
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| AwcError::Transport(url.clone(), e))?;

        check_status(&url, response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| AwcError::Transport(url.clone(), e))?;

        decode_body(url, &body)
    }
}

pub(crate) fn check_status(url: &str, status: StatusCode) -> Result<(), AwcError> {
    if status.is_success() {
        return Ok(());
    }
    warn!("HTTP error for {}: {}", url, status);
    Err(AwcError::UnexpectedStatus {
        url: url.to_string(),
        status,
    })
}

pub(crate) fn decode_body(url: String, body: &str) -> Result<MetarResponse, AwcError> {
    let response = match MetarResponse::from_xml(body) {
        Ok(response) => response,
        Err(source) => return Err(AwcError::Decode { url, source }),
    };

    if !response.is_ok() {
        warn!(
            "Server reported {} error(s) for {}: {:?}",
            response.errors.len(),
            url,
            response.errors
        );
    }
    info!(
        "Received {} METAR(s) with {} warning(s) from {}",
        response.metars.len(),
        response.warnings.len(),
        url
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, serve_once, FIXTURE};

    fn client_for(base_url: String) -> AviationWeather {
        AviationWeather::with_config(ClientConfig::builder().base_url(base_url).build())
            .expect("client should build")
    }

    #[tokio::test]
    async fn test_metars_parses_canned_response() -> Result<(), AwcError> {
        let server = serve_once(200, "OK", FIXTURE);
        let client = client_for(server.base_url.clone());

        let response = client
            .metars(&MetarQuery::new().station("KDEN").most_recent(true))
            .await?;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.warnings.len(), 1);
        assert_eq!(response.metars.len(), 1);
        assert_eq!(
            server.finish().request_line,
            "GET /httpparam?dataSource=metars&requestType=retrieve&format=xml&stationString=KDEN&mostRecent=true HTTP/1.1"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_metars_not_found_is_unexpected_status() {
        let server = serve_once(404, "Not Found", "<html>not xml");
        let client = client_for(server.base_url.clone());

        let err = client
            .metars(&MetarQuery::new().hours_before_now(1.0))
            .await
            .expect_err("404 must fail");
        assert!(
            matches!(err, AwcError::UnexpectedStatus { status, .. } if status == StatusCode::NOT_FOUND),
            "expected unexpected status, got {err:?}"
        );
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_metars_invalid_body_is_decode_error() {
        let server = serve_once(200, "OK", "<response><data></response>");
        let client = client_for(server.base_url.clone());

        let err = client
            .metars(&MetarQuery::new().hours_before_now(1.0))
            .await
            .expect_err("malformed XML must fail");
        assert!(matches!(err, AwcError::Decode { .. }), "expected decode error, got {err:?}");
    }

    #[tokio::test]
    async fn test_metars_html_page_is_decode_error() {
        let server = serve_once(200, "OK", "<html><body><p>Service moved</p></body></html>");
        let client = client_for(server.base_url.clone());

        let err = client
            .metars(&MetarQuery::new().hours_before_now(1.0))
            .await
            .expect_err("an HTML page is not a response");
        assert!(matches!(err, AwcError::Decode { .. }), "expected decode error, got {err:?}");
    }

    #[tokio::test]
    async fn test_metars_connection_refused_is_transport_error() {
        let client = client_for(closed_port_url());

        let err = client
            .metars(&MetarQuery::new().most_recent(true))
            .await
            .expect_err("nothing is listening");
        assert!(matches!(err, AwcError::Transport(..)), "expected transport error, got {err:?}");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_check_status_accepts_2xx_only() {
        assert!(check_status("u", StatusCode::OK).is_ok());
        assert!(check_status("u", StatusCode::NO_CONTENT).is_ok());
        assert!(check_status("u", StatusCode::MULTIPLE_CHOICES).is_err());
        assert!(check_status("u", StatusCode::INTERNAL_SERVER_ERROR).is_err());
    }
}
