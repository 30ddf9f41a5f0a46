//! Sunrise/sunset with the numeric API, without the chrono dependency.

use solar_day::time::JulianDay;
use solar_day::{Daylight, SolarDay, day_or_night_unix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tromsø, Norway on 2023-06-21 and 2023-12-21, 12:00 UTC
    for (month, day) in [(6, 21), (12, 21)] {
        let jd = JulianDay::from_utc(2023, month, day, 12, 0, 0.0)?;
        let solar_day = SolarDay::try_around_julian(69.65, 18.96, jd)?;

        println!("Tromsø, 2023-{month:02}-{day:02}:");
        match solar_day.daylight() {
            Daylight::Regular => {
                println!("  Sunrise: {} (Unix)", solar_day.sunrise_unix());
                println!("  Sunset:  {} (Unix)", solar_day.sunset_unix());
            }
            Daylight::PolarDay => println!("  Polar day - sun never sets"),
            Daylight::PolarNight => println!("  Polar night - sun never rises"),
        }
        println!("  Solar noon: JD {:.5}", solar_day.solar_noon_julian().value());
    }

    // Day or night right at J2000.0 in Greenwich
    let result = day_or_night_unix(51.48, 0.0, 946_728_000);
    println!(
        "\nGreenwich at J2000.0: {:?} from {} to {} (Unix)",
        result.phase(),
        result.start(),
        result.end()
    );

    Ok(())
}
