//! Sunrise and sunset for the first days of a month across diverse global locations.

use chrono::TimeZone;
use chrono_tz::Tz;
use solar_day::{Daylight, Sunrise};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    tz: Tz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            tz: chrono_tz::Arctic::Longyearbyen,
        },
        City {
            name: "Los Angeles, USA",
            latitude: 34.05,
            longitude: -118.25,
            tz: chrono_tz::America::Los_Angeles,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            tz: chrono_tz::Asia::Singapore,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            tz: chrono_tz::Pacific::Auckland,
        },
    ];

    for city in &cities {
        println!("{} ({:.2}°, {:.2}°)", city.name, city.latitude, city.longitude);

        let start = city
            .tz
            .with_ymd_and_hms(2013, 6, 1, 0, 0, 0)
            .single()
            .ok_or("ambiguous local midnight")?;
        let first = Sunrise::try_around(city.latitude, city.longitude, &start)?;

        for day in first.days().skip_while(|d| d.sunrise() < start).take(5) {
            match day.daylight() {
                Daylight::Regular => println!(
                    "  Sunrise: {}  Sunset: {}  ({}h{:02}m of daylight)",
                    day.sunrise().format("%b %-d %H:%M:%S"),
                    day.sunset().format("%b %-d %H:%M:%S"),
                    day.day_length().num_hours(),
                    day.day_length().num_minutes() % 60
                ),
                Daylight::PolarDay => println!(
                    "  {}: sun never sets",
                    day.solar_noon().format("%b %-d")
                ),
                Daylight::PolarNight => println!(
                    "  {}: sun never rises",
                    day.solar_noon().format("%b %-d")
                ),
            }
        }
        println!();
    }

    Ok(())
}
