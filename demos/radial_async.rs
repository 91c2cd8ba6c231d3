use aviationweather::{AviationWeather, AwcError, ClientConfig, MetarQuery};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), AwcError> {
    let client = AviationWeather::with_config(
        ClientConfig::builder()
            .timeout(Duration::from_secs(20))
            .build(),
    )?;

    // Everything within 50 miles of Denver International over the last hour.
    let query = MetarQuery::new()
        .radial_filter(50.0, 39.85, -104.65)
        .hours_before_now(1.0)
        .most_recent_for_each_station("constraint")
        .fields(["station_id", "observation_time", "flight_category", "raw_text"]);

    let response = client.metars(&query).await?;
    println!(
        "{} station(s), {} error(s), {} warning(s)",
        response.metars.len(),
        response.errors.len(),
        response.warnings.len()
    );

    for metar in &response.metars {
        println!(
            "{:<5} {:<5} {}",
            metar.station_id.as_deref().unwrap_or("?"),
            metar.flight_category.as_deref().unwrap_or("-"),
            metar.raw_text.as_deref().unwrap_or_default()
        );
    }

    Ok(())
}
