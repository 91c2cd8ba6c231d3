pub mod metar;
pub mod response;
