use aviationweather::{blocking, AwcError, MetarQuery};
use std::env;

fn main() -> Result<(), AwcError> {
    let station = env::args().nth(1).unwrap_or_else(|| "KDEN".to_string());

    let query = MetarQuery::new()
        .station(station.as_str())
        .hours_before_now(2.0)
        .most_recent(true);
    println!("GET {}", query);

    let response = blocking::get_metars(&query)?;
    for error in &response.errors {
        eprintln!("error: {}", error);
    }
    for warning in &response.warnings {
        eprintln!("warning: {}", warning);
    }

    match response.metars.first() {
        Some(metar) => println!("{:#?}", metar),
        None => println!("No METAR for {}", station),
    }

    Ok(())
}
