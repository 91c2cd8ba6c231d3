//! Assembles request URLs for the AWC text data server.
//!
//! The server takes every constraint as a plain `&key=value` pair appended to a fixed
//! prefix that selects the data source, request type and output format.

use std::fmt;

/// Path of the text data server, without any query parameters.
pub const DEFAULT_BASE_URL: &str = "https://aviationweather.gov/adds/dataserver_current/httpparam";

/// Report types served by the text data server. Only METARs are implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum DataSource {
    Metars,
}

impl DataSource {
    pub(crate) fn as_param(&self) -> &'static str {
        match self {
            DataSource::Metars => "metars",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// An endpoint URL under construction. Each `add_*` call appends one `&key=value` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoint(String);

impl Endpoint {
    pub(crate) fn new(base_url: &str, source: DataSource) -> Self {
        Endpoint(format!(
            "{}?dataSource={}&requestType=retrieve&format=xml",
            base_url.trim_end_matches('?'),
            source
        ))
    }

    pub(crate) fn add_string(mut self, key: &str, value: &str) -> Self {
        self.push(key, value);
        self
    }

    pub(crate) fn add_bool(mut self, key: &str, value: bool) -> Self {
        self.push(key, value);
        self
    }

    pub(crate) fn add_int(mut self, key: &str, value: i64) -> Self {
        self.push(key, value);
        self
    }

    pub(crate) fn add_float(mut self, key: &str, value: f32) -> Self {
        self.push(key, format_float(value));
        self
    }

    fn push(&mut self, key: &str, value: impl fmt::Display) {
        self.0.push_str(&format!("&{key}={value}"));
    }

    pub(crate) fn into_string(self) -> String {
        self.0
    }
}

/// Six fixed decimals, the precision the server has always been sent.
pub(crate) fn format_float(value: f32) -> String {
    format!("{:.6}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_endpoint() {
        let url = Endpoint::new(DEFAULT_BASE_URL, DataSource::Metars).into_string();
        assert_eq!(
            url,
            "https://aviationweather.gov/adds/dataserver_current/httpparam?dataSource=metars&requestType=retrieve&format=xml"
        );
    }

    #[test]
    fn test_segments_are_appended_in_call_order() {
        let url = Endpoint::new("http://localhost/httpparam", DataSource::Metars)
            .add_string("stationString", "KDEN")
            .add_int("startTime", 1_600_000_000)
            .add_bool("mostRecent", true)
            .add_float("hoursBeforeNow", 1.5)
            .into_string();
        assert!(
            url.ends_with("&stationString=KDEN&startTime=1600000000&mostRecent=true&hoursBeforeNow=1.500000"),
            "unexpected url {url}"
        );
    }

    #[test]
    fn test_format_float_fixed_precision() {
        assert_eq!(format_float(1.0), "1.000000");
        assert_eq!(format_float(-90.0), "-90.000000");
    }
}
