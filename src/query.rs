//! The METAR query builder.
//!
//! A [`MetarQuery`] collects the constraints the text data server understands and renders
//! them into a request URL. Competing constraints live in one enum per group, so setting a
//! time window drops any "hours before now" setting (and likewise for the recency and area
//! groups) without any bookkeeping.
//!
//! Nothing here checks that the query makes sense to the server. A query without a time or
//! recency constraint renders fine and the server answers with an error in the response body.

use crate::endpoint::{format_float, DataSource, Endpoint, DEFAULT_BASE_URL};
use crate::utils::{clamp_latitude, clamp_longitude, clamp_radius};
use chrono::{DateTime, TimeZone};
use std::fmt;

/// Time constraint of a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeConstraint {
    /// Absolute window, in Unix seconds.
    Between { start: i64, end: i64 },
    /// Window ending now and starting this many hours ago. Never negative.
    HoursBeforeNow(f32),
}

/// Result-limiting mode of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recency {
    /// Only the single most recent METAR.
    MostRecent(bool),
    /// Most recent METAR per station. The server accepts `constraint`, `postfilter`,
    /// `true` and `false`.
    MostRecentForEachStation(String),
}

/// Min/max latitude and longitude, already clamped to valid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRectangle {
    pub min_lat: f32,
    pub min_lon: f32,
    pub max_lat: f32,
    pub max_lon: f32,
}

/// A circle around a point. `radius` is in statute miles, within `(0, 500]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialArea {
    pub radius: f32,
    pub lat: f32,
    pub lon: f32,
}

/// Spatial filter of a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaFilter {
    Rectangle(BoundingRectangle),
    Radial(RadialArea),
}

/// Builder for a METAR request.
///
/// Every setter takes and returns the query so calls can be chained. Either a time
/// constraint ([`between`](Self::between), [`hours_before_now`](Self::hours_before_now)) or a
/// recency constraint should be set, otherwise the server will refuse the request.
///
/// # Examples
///
/// ```
/// use aviationweather::MetarQuery;
///
/// let query = MetarQuery::new()
///     .station("KDEN")
///     .hours_before_now(2.0)
///     .most_recent(true)
///     .fields(["raw_text", "station_id"]);
///
/// assert!(query.url().ends_with(
///     "&stationString=KDEN&hoursBeforeNow=2.000000&mostRecent=true&fields=raw_text,station_id"
/// ));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct MetarQuery {
    station: Option<String>,
    time: Option<TimeConstraint>,
    recency: Option<Recency>,
    area: Option<AreaFilter>,
    fields: Vec<String>,
}

impl MetarQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Station string, e.g. `KDEN` or a space/comma separated list of stations.
    pub fn station(mut self, id: impl Into<String>) -> Self {
        self.station = Some(id.into());
        self
    }

    /// Only METARs observed between `start` and `end`. Replaces
    /// [`hours_before_now`](Self::hours_before_now).
    pub fn between<Tz: TimeZone>(mut self, start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        self.time = Some(TimeConstraint::Between {
            start: start.timestamp(),
            end: end.timestamp(),
        });
        self
    }

    /// Only METARs from the last `hours` hours. The sign is ignored. Replaces
    /// [`between`](Self::between).
    pub fn hours_before_now(mut self, hours: f32) -> Self {
        self.time = Some(TimeConstraint::HoursBeforeNow(hours.abs()));
        self
    }

    /// Replaces [`most_recent_for_each_station`](Self::most_recent_for_each_station).
    pub fn most_recent(mut self, value: bool) -> Self {
        self.recency = Some(Recency::MostRecent(value));
        self
    }

    /// Replaces [`most_recent`](Self::most_recent).
    pub fn most_recent_for_each_station(mut self, selector: impl Into<String>) -> Self {
        self.recency = Some(Recency::MostRecentForEachStation(selector.into()));
        self
    }

    /// Restricts results to a rectangle. Each coordinate is clamped on its own, latitudes
    /// to `[-90, 90]` and longitudes to `[-180, 180]`. Replaces
    /// [`radial_filter`](Self::radial_filter).
    pub fn bounding_rectangle(mut self, min_lat: f32, min_lon: f32, max_lat: f32, max_lon: f32) -> Self {
        self.area = Some(AreaFilter::Rectangle(BoundingRectangle {
            min_lat: clamp_latitude(min_lat),
            min_lon: clamp_longitude(min_lon),
            max_lat: clamp_latitude(max_lat),
            max_lon: clamp_longitude(max_lon),
        }));
        self
    }

    /// Restricts results to `radius` statute miles around a point.
    ///
    /// The radius is clamped to `[0, 500]` and a zero radius becomes 1. Coordinates are
    /// clamped like in [`bounding_rectangle`](Self::bounding_rectangle), which this replaces.
    pub fn radial_filter(mut self, radius: f32, lat: f32, lon: f32) -> Self {
        self.area = Some(AreaFilter::Radial(RadialArea {
            radius: clamp_radius(radius),
            lat: clamp_latitude(lat),
            lon: clamp_longitude(lon),
        }));
        self
    }

    /// Limits each returned METAR to these fields. Replaces any earlier list.
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn station_id(&self) -> Option<&str> {
        self.station.as_deref()
    }

    pub fn time_constraint(&self) -> Option<&TimeConstraint> {
        self.time.as_ref()
    }

    pub fn recency(&self) -> Option<&Recency> {
        self.recency.as_ref()
    }

    pub fn area(&self) -> Option<&AreaFilter> {
        self.area.as_ref()
    }

    pub fn field_names(&self) -> &[String] {
        &self.fields
    }

    /// Request URL against the public AWC server.
    pub fn url(&self) -> String {
        self.url_with_base(DEFAULT_BASE_URL)
    }

    /// Request URL against another server path, e.g. a mirror or a test server.
    pub fn url_with_base(&self, base_url: &str) -> String {
        self.build_endpoint(base_url).into_string()
    }

    fn build_endpoint(&self, base_url: &str) -> Endpoint {
        let mut endpoint = Endpoint::new(base_url, DataSource::Metars);
        if let Some(station) = &self.station {
            endpoint = endpoint.add_string("stationString", station);
        }
        match self.time {
            Some(TimeConstraint::Between { start, end }) => {
                endpoint = endpoint.add_int("startTime", start).add_int("endTime", end);
            }
            Some(TimeConstraint::HoursBeforeNow(hours)) => {
                endpoint = endpoint.add_float("hoursBeforeNow", hours);
            }
            None => {}
        }
        match &self.recency {
            Some(Recency::MostRecent(value)) => {
                endpoint = endpoint.add_bool("mostRecent", *value);
            }
            Some(Recency::MostRecentForEachStation(selector)) => {
                endpoint = endpoint.add_string("mostRecentForEachStation", selector);
            }
            None => {}
        }
        match self.area {
            Some(AreaFilter::Rectangle(rect)) => {
                endpoint = endpoint
                    .add_float("minLat", rect.min_lat)
                    .add_float("minLon", rect.min_lon)
                    .add_float("maxLat", rect.max_lat)
                    .add_float("maxLon", rect.max_lon);
            }
            Some(AreaFilter::Radial(radial)) => {
                endpoint = endpoint.add_string("radialDistance", &radial.to_param());
            }
            None => {}
        }
        if !self.fields.is_empty() {
            endpoint = endpoint.add_string("fields", &self.fields.join(","));
        }
        endpoint
    }
}

impl RadialArea {
    /// `radius;lon,lat`. Longitude comes first on the wire.
    fn to_param(self) -> String {
        format!(
            "{};{},{}",
            format_float(self.radius),
            format_float(self.lon),
            format_float(self.lat)
        )
    }
}

impl fmt::Display for MetarQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
