//! The parsed body of a text data server response.

use crate::types::metar::Metar;
use quick_xml::events::Event;
use quick_xml::{DeError, Reader};
use serde::de::Error as _;
use serde::Deserialize;

const ROOT_ELEMENT: &[u8] = b"response";

/// Everything the server put into one response body.
///
/// The server reports problems with a query (no time constraint, unknown station, ...) inside
/// a normal `200 OK` response, so a `MetarResponse` may carry errors and still be a successful
/// fetch. Check [`errors`](Self::errors) and [`warnings`](Self::warnings) before trusting an
/// empty [`metars`](Self::metars) list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetarResponse {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub metars: Vec<Metar>,
    /// Server-side processing time, when reported.
    pub time_taken_ms: Option<u64>,
    /// The `num_results` attribute of the `data` element, when reported.
    pub num_results: Option<u32>,
}

impl MetarResponse {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns the deserializer error if `xml` is not well formed, its root element is not
    /// `<response>`, or it does not match the response layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use aviationweather::MetarResponse;
    ///
    /// let body = r#"<response>
    ///     <errors />
    ///     <warnings><warning>No constraints specified</warning></warnings>
    ///     <data num_results="0" />
    /// </response>"#;
    ///
    /// let response = MetarResponse::from_xml(body).unwrap();
    /// assert!(response.is_ok());
    /// assert_eq!(response.warnings, vec!["No constraints specified".to_string()]);
    /// assert!(response.metars.is_empty());
    /// ```
    pub fn from_xml(xml: &str) -> Result<Self, DeError> {
        check_root(xml)?;
        let raw: RawResponse = quick_xml::de::from_str(xml)?;
        Ok(raw.into())
    }

    /// `true` when the server reported no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Fails unless the first element of the document is `<response>`. `de::from_str` does not
/// look at the root element's name.
fn check_root(xml: &str) -> Result<(), DeError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return if e.name().as_ref() == ROOT_ELEMENT {
                    Ok(())
                } else {
                    Err(DeError::custom(format!(
                        "expected root element <response>, found <{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    )))
                };
            }
            Event::Eof => return Err(DeError::custom("no root element")),
            _ => {}
        }
    }
}

// Wire layout: <errors><error>..</error></errors>, <warnings><warning>..</warning></warnings>
// and <data><METAR>..</METAR></data>. The wrappers are flattened away in `From`.

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    errors: ErrorList,
    #[serde(default)]
    warnings: WarningList,
    time_taken_ms: Option<u64>,
    #[serde(default)]
    data: RawData,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorList {
    #[serde(rename = "error", default)]
    entries: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WarningList {
    #[serde(rename = "warning", default)]
    entries: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawData {
    #[serde(rename = "@num_results")]
    num_results: Option<u32>,
    #[serde(rename = "METAR", default)]
    metars: Vec<Metar>,
}

impl From<RawResponse> for MetarResponse {
    fn from(raw: RawResponse) -> Self {
        MetarResponse {
            errors: raw.errors.entries,
            warnings: raw.warnings.entries,
            metars: raw.data.metars,
            time_taken_ms: raw.time_taken_ms,
            num_results: raw.data.num_results,
        }
    }
}
