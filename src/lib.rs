//! Client for the Aviation Weather Center (AWC) text data server.
//!
//! Build a [`MetarQuery`], hand it to a client, and get back a [`MetarResponse`] with the
//! decoded METARs plus whatever errors and warnings the server put in the body.
//!
//! ```no_run
//! use aviationweather::{blocking, AwcError, MetarQuery};
//!
//! # fn main() -> Result<(), AwcError> {
//! let query = MetarQuery::new().station("KDEN").most_recent(true).hours_before_now(2.0);
//! let response = blocking::get_metars(&query)?;
//!
//! for metar in &response.metars {
//!     println!("{:?} {:?}", metar.station_id, metar.temp_c);
//! }
//! # Ok(())
//! # }
//! ```

pub mod blocking;
mod client;
mod config;
mod endpoint;
mod error;
mod query;
mod types;
mod utils;

#[cfg(test)]
mod test_support;

pub use client::AviationWeather;
pub use config::{ClientConfig, DEFAULT_USER_AGENT};
pub use endpoint::DEFAULT_BASE_URL;
pub use error::AwcError;
pub use query::{AreaFilter, BoundingRectangle, MetarQuery, RadialArea, Recency, TimeConstraint};

pub use types::metar::{Metar, QualityControlFlags, SkyCondition};
pub use types::response::MetarResponse;
