//! Day or night at an arbitrary instant.
//!
//! Anchors a [`SolarDay`] at the instant and, when the instant falls outside that
//! day's sunrise-to-sunset window, looks exactly one solar day ahead or behind for
//! the neighbouring transition. The anchor is always within about a day of the
//! instant, so one step is enough.
//!
//! Windows are half-open: the sunrise instant is day and the sunset instant is night.

use crate::error::check_coordinates;
use crate::{DayOrNight, Phase, Result, SolarDay};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Determines whether `instant` (Unix seconds) is day or night at a location.
///
/// Returns the phase together with the sunrise/sunset transitions bounding it,
/// as Unix seconds, with `start <= instant < end`.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees, positive north, strictly inside (-90°, 90°)
/// * `longitude` - Observer longitude in degrees, positive east
/// * `instant` - Seconds since 1970-01-01 00:00:00 UTC
///
/// # Example
/// ```
/// use solar_day::{Phase, day_night};
///
/// // Dallas area, 2014-11-19 12:00:00 CST
/// let result = day_night::day_or_night_unix(32.9, -96.2, 1_416_420_000);
/// assert_eq!(result.phase(), Phase::Day);
/// assert_eq!(*result.start(), 1_416_402_024); // 07:00:24 CST
/// assert_eq!(*result.end(), 1_416_439_377); // 17:22:57 CST
/// ```
#[must_use]
pub fn day_or_night_unix(latitude: f64, longitude: f64, instant: i64) -> DayOrNight<i64> {
    let day = SolarDay::around_unix(latitude, longitude, instant);
    let sunrise = day.sunrise_unix();
    let sunset = day.sunset_unix();

    if sunrise <= instant && instant < sunset {
        return DayOrNight::new(Phase::Day, sunrise, sunset);
    }

    if instant >= sunset {
        let next = day.add_days(1);
        let next_sunrise = next.sunrise_unix();
        // No night between the two windows: tomorrow's daylight already started
        if instant >= next_sunrise {
            return DayOrNight::new(Phase::Day, next_sunrise, next.sunset_unix());
        }
        return DayOrNight::new(Phase::Night, sunset, next_sunrise);
    }

    let previous = day.add_days(-1);
    let previous_sunset = previous.sunset_unix();
    // Yesterday's daylight has not ended yet
    if instant < previous_sunset {
        return DayOrNight::new(Phase::Day, previous.sunrise_unix(), previous_sunset);
    }
    DayOrNight::new(Phase::Night, previous_sunset, sunrise)
}

/// Like [`day_or_night_unix`], but validates the coordinates first.
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
pub fn try_day_or_night_unix(
    latitude: f64,
    longitude: f64,
    instant: i64,
) -> Result<DayOrNight<i64>> {
    check_coordinates(latitude, longitude)?;
    Ok(day_or_night_unix(latitude, longitude, instant))
}

/// Determines whether `instant` is day or night at a location.
///
/// The bounds are returned in the time zone of `instant`. Comparison happens at
/// whole-second resolution; since every transition falls on a whole second this
/// gives the same answer as comparing the exact instant.
///
/// # Example
/// ```rust
/// use solar_day::{Phase, day_or_night};
/// use chrono::{DateTime, FixedOffset};
///
/// let now = "2014-11-19T18:30:00-06:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let result = day_or_night(32.9, -96.2, &now);
///
/// assert_eq!(result.phase(), Phase::Night);
/// assert_eq!(result.start().to_rfc3339(), "2014-11-19T17:22:57-06:00");
/// assert!(*result.end() > now);
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn day_or_night<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    instant: &DateTime<Tz>,
) -> DayOrNight<DateTime<Tz>> {
    let tz = instant.timezone();
    day_or_night_unix(latitude, longitude, instant.timestamp())
        .map(|secs| crate::time::unix_seconds_to_datetime(secs, &tz))
}

/// Like [`day_or_night`], but validates the coordinates first.
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
#[cfg(feature = "chrono")]
pub fn try_day_or_night<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    instant: &DateTime<Tz>,
) -> Result<DayOrNight<DateTime<Tz>>> {
    check_coordinates(latitude, longitude)?;
    Ok(day_or_night(latitude, longitude, instant))
}
