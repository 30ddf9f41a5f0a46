//! Day/night classification over a day, in the observer's time zone.

use chrono::{TimeDelta, TimeZone};
use chrono_tz::America::Chicago;
use solar_day::{Phase, day_or_night};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let latitude = 32.9;
    let longitude = -96.2;

    let start = Chicago
        .with_ymd_and_hms(2014, 11, 19, 0, 0, 0)
        .single()
        .ok_or("ambiguous local midnight")?;

    for hour in (0..24).step_by(3) {
        let now = start + TimeDelta::hours(hour);
        let result = day_or_night(latitude, longitude, &now);
        let label = match result.phase() {
            Phase::Day => "day  ",
            Phase::Night => "night",
        };
        println!(
            "{}  {}  {} .. {}",
            now.format("%H:%M"),
            label,
            result.start().format("%b %-d %H:%M:%S"),
            result.end().format("%b %-d %H:%M:%S")
        );
    }

    Ok(())
}
