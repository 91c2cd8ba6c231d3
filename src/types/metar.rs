//! Data structures for a single METAR as served by the AWC text data server.
//!
//! Every field maps to the XML element of the same name (the server's names are kept in
//! `serde(rename)` where they are not snake_case). The server omits elements it has no value
//! for, and a query restricted with [`MetarQuery::fields`](crate::MetarQuery::fields) omits
//! everything else, so nearly every field is optional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// A single METAR observation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Metar {
    /// The report as it was transmitted, e.g. `KDEN 191753Z 17012KT 10SM FEW080 ...`.
    pub raw_text: Option<String>,
    /// ICAO identifier of the reporting station.
    pub station_id: Option<String>,
    /// Observation time as an ISO 8601 string. See [`Metar::observed_at`].
    pub observation_time: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub latitude: Option<f32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub longitude: Option<f32>,
    /// Air temperature in degrees Celsius.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub temp_c: Option<f32>,
    /// Dew point in degrees Celsius.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub dewpoint_c: Option<f32>,
    /// Direction the wind is blowing from, in degrees true. 0 for variable.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub wind_dir_degrees: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub wind_speed_kt: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub wind_gust_kt: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub visibility_statute_mi: Option<f32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub altim_in_hg: Option<f32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sea_level_pressure_mb: Option<f32>,
    pub quality_control_flags: Option<QualityControlFlags>,
    /// Present weather, e.g. `-RA BR`.
    pub wx_string: Option<String>,
    /// Cloud layers, lowest first. Empty when the server reported none.
    #[serde(rename = "sky_condition", default)]
    pub sky_conditions: Vec<SkyCondition>,
    /// `VFR`, `MVFR`, `IFR` or `LIFR`.
    pub flight_category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub three_hr_pressure_tendency_mb: Option<f32>,
    /// Maximum temperature over the past 6 hours, in degrees Celsius.
    #[serde(rename = "maxT_c", default, deserialize_with = "empty_as_none")]
    pub max_t_c: Option<f32>,
    /// Minimum temperature over the past 6 hours, in degrees Celsius.
    #[serde(rename = "minT_c", default, deserialize_with = "empty_as_none")]
    pub min_t_c: Option<f32>,
    #[serde(rename = "maxT24hr_c", default, deserialize_with = "empty_as_none")]
    pub max_t24hr_c: Option<f32>,
    #[serde(rename = "minT24hr_c", default, deserialize_with = "empty_as_none")]
    pub min_t24hr_c: Option<f32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub precip_in: Option<f32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pcp3hr_in: Option<f32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pcp6hr_in: Option<f32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pcp24hr_in: Option<f32>,
    /// Snow depth in inches.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub snow_in: Option<f32>,
    /// Vertical visibility in feet, reported for an obscured sky.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub vert_vis_ft: Option<i32>,
    /// `METAR` or `SPECI`.
    pub metar_type: Option<String>,
    /// Station elevation in meters.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub elevation_m: Option<f32>,
}

/// Reads an optional number from element or attribute text. The server sometimes sends an
/// empty element (`<wind_gust_kt></wind_gust_kt>`) or attribute for a value it does not have,
/// which is read as `None` instead of failing the whole response.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    match text.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl Metar {
    /// Observation time parsed as RFC 3339. `None` if the field is missing or malformed.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.observation_time
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Quality control flags attached to a METAR. A flag the server leaves out is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct QualityControlFlags {
    pub corrected: bool,
    pub auto: bool,
    pub auto_station: bool,
    pub maintenance_indicator: bool,
    pub no_signal: bool,
    pub lightning_sensor_off: bool,
    pub freezing_rain_sensor_off: bool,
    pub present_weather_sensor_off: bool,
}

/// One cloud layer. Both values are attributes of `<sky_condition>` rather than child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SkyCondition {
    /// `SKC`, `CLR`, `FEW`, `SCT`, `BKN`, `OVC` or `OVX`.
    #[serde(rename = "@sky_cover")]
    pub sky_cover: Option<String>,
    /// Cloud base in feet above ground level. Absent for clear skies.
    #[serde(rename = "@cloud_base_ft_agl", default, deserialize_with = "empty_as_none")]
    pub cloud_base_ft_agl: Option<i32>,
}
