use thiserror::Error;

#[derive(Debug, Error)]
pub enum AwcError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    // DNS, connect, TLS and timeout failures, and failures while reading the body
    #[error("Network request failed for {0}")]
    Transport(String, #[source] reqwest::Error),

    #[error("Unexpected status code {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode METAR response from {url}")]
    Decode {
        url: String,
        #[source]
        source: quick_xml::DeError,
    },
}

impl AwcError {
    /// HTTP status code for [`AwcError::UnexpectedStatus`], `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            AwcError::UnexpectedStatus { status, .. } => Some(status.as_u16()),
            _ => None,
        }
    }
}
