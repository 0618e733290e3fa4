// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! This example needs to be run with the `std` and `chrono` features.
//!
//! Prints this week's sunrise and sunset for Toronto, taking the
//! daylight-saving flag from the tz database.

use chrono::{Duration, TimeZone, Utc};
use chrono_tz::OffsetComponents;
use duskdawn::{Location, SolarEvent, StdFloatOps};

fn describe(event: SolarEvent) -> String {
    match event {
        SolarEvent::Occurs(minute) => match event.clock_time() {
            Some(time) => time.to_string(),
            None => format!("minute {minute} (outside the local day)"),
        },
        SolarEvent::PolarDay => "sun stays up".to_owned(),
        SolarEvent::PolarNight => "sun stays down".to_owned(),
    }
}

fn main() {
    env_logger::init();

    let tz = chrono_tz::America::Toronto;
    // standard-time offset, DST is signalled per date
    let toronto = Location::new(43.65, -79.38, -5);

    let today = Utc::now().with_timezone(&tz).date_naive();
    for date in today.iter_days().take(7) {
        let is_dst = tz.offset_from_utc_date(&date).dst_offset() != Duration::zero();
        let sunrise = toronto.sunrise_on::<StdFloatOps>(date, is_dst);
        let sunset = toronto.sunset_on::<StdFloatOps>(date, is_dst);

        println!(
            "{date}{}: sunrise {} ----> sunset {}",
            if is_dst { " (DST)" } else { "" },
            describe(sunrise),
            describe(sunset)
        )
    }
}
