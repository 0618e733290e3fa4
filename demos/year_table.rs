// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! This example needs to be run with the `std` feature.
//!
//! Prints sunrise/sunset on the 21st of each month, the way a relay timer
//! would precompute its switching table.
//!
//! ```sh
//! RUST_LOG=duskdawn=debug cargo run --example year_table -- 78.22 15.65 1 2024
//! ```

use std::env;
use std::process::ExitCode;

use duskdawn::{Location, SolarEvent, StdFloatOps};

fn cell(event: SolarEvent) -> String {
    match event {
        SolarEvent::Occurs(minute) => event
            .clock_time()
            .map(|t| t.to_string())
            .unwrap_or_else(|| format!("({minute})")),
        SolarEvent::PolarDay => "polar day".to_owned(),
        SolarEvent::PolarNight => "polar night".to_owned(),
    }
}

fn parse_args(lat: &str, lon: &str, tz: &str, year: &str) -> Result<(f64, f64, i32, i32), String> {
    Ok((
        lat.parse::<f64>().map_err(|e| format!("latitude: {e}"))?,
        lon.parse::<f64>().map_err(|e| format!("longitude: {e}"))?,
        tz.parse::<i32>().map_err(|e| format!("utc offset: {e}"))?,
        year.parse::<i32>().map_err(|e| format!("year: {e}"))?,
    ))
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = match args.as_slice() {
        [] => Ok((52.52, 13.40, 1, 2024)),
        [lat, lon, tz, year] => parse_args(lat, lon, tz, year),
        _ => Err("usage: year_table [LAT LON UTC_OFFSET YEAR]".to_owned()),
    };

    let (lat, lon, tz, year) = match parsed {
        Ok(values) => values,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let location = match Location::try_new(lat, lon, tz) {
        Ok(location) => location,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{year}, lat {lat}, lon {lon}, UTC{tz:+} (standard time)");
    for month in 1..=12 {
        let (sunrise, sunset) = location.sunrise_and_set::<StdFloatOps>(year, month, 21, false);
        println!("{month:>2}/21  {:>12}  {:>12}", cell(sunrise), cell(sunset));
    }
    ExitCode::SUCCESS
}
