//! Julian day arithmetic.
//!
//! The sunrise equation works on fractional Julian days. This module converts
//! between Julian days, Unix seconds and (with the `chrono` feature) timezone-aware
//! `DateTime` values. The Julian/Unix correspondence is fixed: Julian day
//! 2451545.0 is Unix time 946728000 (2000-01-01 12:00:00 UTC).

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::cast_possible_wrap)]

use crate::math::{floor, trunc};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Utc};

/// Seconds per day (86,400)
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Unix time of the J2000.0 epoch.
pub const UNIX_AT_J2000: i64 = 946_728_000;

/// A fractional Julian day.
///
/// Values are referenced to UTC; no ΔT correction is applied since the sunrise
/// equation's own error (a few minutes) dwarfs it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw fractional Julian day.
    #[must_use]
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    /// Converts whole Unix seconds to a Julian day.
    ///
    /// # Example
    /// ```
    /// # use solar_day::time::JulianDay;
    /// assert_eq!(JulianDay::from_unix_seconds(946_728_000).value(), 2_451_545.0);
    /// assert_eq!(JulianDay::from_unix_seconds(0).value(), 2_440_587.5);
    /// ```
    #[must_use]
    pub fn from_unix_seconds(unix: i64) -> Self {
        Self(unix.saturating_sub(UNIX_AT_J2000) as f64 / SECONDS_PER_DAY + J2000_JDN)
    }

    /// Converts to whole Unix seconds, truncating the fractional second toward zero.
    ///
    /// Values beyond the `i64` range saturate.
    #[must_use]
    pub fn to_unix_seconds(self) -> i64 {
        (trunc((self.0 - J2000_JDN) * SECONDS_PER_DAY) + UNIX_AT_J2000 as f64) as i64
    }

    /// Creates a Julian day from year, month, day, hour, minute, and second in UTC.
    ///
    /// Uses the Gregorian calendar from 1582-10-15 onwards and the Julian calendar before.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its valid range
    /// (month 1-12, day within the month, hour 0-23, minute 0-59, second 0-59.999).
    ///
    /// # Example
    /// ```
    /// # use solar_day::time::JulianDay;
    /// let jd = JulianDay::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
    /// assert_eq!(jd.value(), 2_451_545.0);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }
        if day > days_in_month(year, month, day)? {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        Ok(Self(calculate_julian_day(
            year, month, day, hour, minute, second,
        )))
    }

    /// Julian day of a timezone-aware instant, at whole-second resolution.
    ///
    /// Sub-second precision is dropped by flooring, so every instant within the
    /// same Unix second maps to the same Julian day regardless of its zone.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_unix_seconds(datetime.timestamp())
    }

    /// Renders this Julian day as a `DateTime` in the given zone, at whole-second resolution.
    ///
    /// Julian days outside chrono's representable range saturate to
    /// `DateTime::<Utc>::MIN_UTC` or `MAX_UTC`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_datetime<Tz: TimeZone>(self, tz: &Tz) -> DateTime<Tz> {
        unix_seconds_to_datetime(self.to_unix_seconds(), tz)
    }

    /// Gets the raw fractional Julian day.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Days elapsed since the J2000.0 epoch (negative before it).
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000_JDN
    }

    /// Returns this Julian day shifted by a (possibly fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }
}

/// Renders whole Unix seconds in the given zone, saturating at chrono's range limits.
#[cfg(feature = "chrono")]
pub(crate) fn unix_seconds_to_datetime<Tz: TimeZone>(secs: i64, tz: &Tz) -> DateTime<Tz> {
    let utc = DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or(if secs < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    });
    utc.with_timezone(tz)
}

/// Calculates a Julian day from UTC date/time components.
///
/// Meeus, "Astronomical Algorithms", 2nd edition, chapter 7.
fn calculate_julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let mut y = year;
    // month is validated to 1..=12 by the caller
    let mut m = month as i32;

    // January and February count as months 13 and 14 of the previous year
    if m < 3 {
        y -= 1;
        m += 12;
    }

    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let mut jd =
        floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1)) + d - 1524.5;

    // Gregorian calendar correction (JDN 2299161 is 1582-10-15)
    if jd >= 2_299_161.0 {
        let a = floor(f64::from(y) / 100.0);
        let b = 2.0 - a + floor(a / 4.0);
        jd += b;
    }

    jd
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let is_gregorian = is_gregorian_date(year, month, day);
    let days = match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year, is_gregorian) => 29,
        2 => 28,
        _ => 31,
    };
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_j2000_correspondence() {
        let jd = JulianDay::from_unix_seconds(UNIX_AT_J2000);
        assert_eq!(jd.value(), J2000_JDN);
        assert_eq!(jd.days_since_j2000(), 0.0);
        assert_eq!(jd.to_unix_seconds(), UNIX_AT_J2000);
    }

    #[test]
    fn test_unix_seconds_round_trip_whole_seconds() {
        for unix in [0_i64, 946_728_000, 1_416_402_024, 1_370_070_241, -86_400] {
            let jd = JulianDay::from_unix_seconds(unix);
            // A Julian day cannot carry every second exactly, allow one second of truncation
            let back = jd.to_unix_seconds();
            assert!((back - unix).abs() <= 1, "unix={unix} back={back}");
        }
    }

    #[test]
    fn test_to_unix_truncates_toward_zero() {
        // Half a second after and before the epoch
        let after = JulianDay::new(J2000_JDN + 0.5 / SECONDS_PER_DAY);
        let before = JulianDay::new(J2000_JDN - 0.5 / SECONDS_PER_DAY);
        assert_eq!(after.to_unix_seconds(), UNIX_AT_J2000);
        assert_eq!(before.to_unix_seconds(), UNIX_AT_J2000);
    }

    #[test]
    fn test_to_unix_saturates() {
        assert_eq!(JulianDay::new(1e300).to_unix_seconds(), i64::MAX);
        assert_eq!(JulianDay::new(-1e300).to_unix_seconds(), i64::MIN);
    }

    #[test]
    fn test_from_utc_matches_unix_path() {
        let from_calendar = JulianDay::from_utc(2014, 11, 19, 13, 0, 24.0).unwrap();
        let from_unix = JulianDay::from_unix_seconds(1_416_402_024);
        assert!((from_calendar.value() - from_unix.value()).abs() < 1e-8);
    }

    #[test]
    fn test_specific_julian_days() {
        let unix_epoch = JulianDay::from_utc(1970, 1, 1, 0, 0, 0.0).unwrap();
        assert!((unix_epoch.value() - 2_440_587.5).abs() < 1e-6);

        let y2k = JulianDay::from_utc(2000, 1, 1, 0, 0, 0.0).unwrap();
        assert!((y2k.value() - 2_451_544.5).abs() < 1e-6);

        let j2000 = JulianDay::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert!((j2000.value() - J2000_JDN).abs() < EPSILON);
    }

    #[test]
    fn test_from_utc_validation() {
        assert!(JulianDay::from_utc(2024, 13, 1, 0, 0, 0.0).is_err());
        assert!(JulianDay::from_utc(2024, 1, 32, 0, 0, 0.0).is_err());
        assert!(JulianDay::from_utc(2024, 1, 1, 24, 0, 0.0).is_err());
        assert!(JulianDay::from_utc(2024, 1, 1, 0, 60, 0.0).is_err());
        assert!(JulianDay::from_utc(2024, 1, 1, 0, 0, 60.0).is_err());
        assert!(JulianDay::from_utc(2024, 2, 30, 0, 0, 0.0).is_err());
        assert!(JulianDay::from_utc(2024, 2, 29, 0, 0, 0.0).is_ok());
        assert!(JulianDay::from_utc(1900, 2, 29, 0, 0, 0.0).is_err());
        assert!(JulianDay::from_utc(1500, 2, 29, 0, 0, 0.0).is_ok());
        assert!(JulianDay::from_utc(1582, 10, 10, 0, 0, 0.0).is_err());
        assert!(JulianDay::from_utc(2023, 4, 31, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_gregorian_calendar_correction() {
        // 1582-10-04 (Julian) was followed directly by 1582-10-15 (Gregorian)
        let last_julian = JulianDay::from_utc(1582, 10, 4, 12, 0, 0.0).unwrap();
        let first_gregorian = JulianDay::from_utc(1582, 10, 15, 12, 0, 0.0).unwrap();
        assert!((first_gregorian.value() - last_julian.value() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_add_days() {
        let jd = JulianDay::new(J2000_JDN).add_days(-1.5);
        assert_eq!(jd.value(), 2_451_543.5);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_datetime_conversions() {
        use chrono::{FixedOffset, Timelike};

        let datetime = "2014-11-19T07:00:24.750-06:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let jd = JulianDay::from_datetime(&datetime);
        assert_eq!(jd, JulianDay::from_unix_seconds(1_416_402_024));

        let rendered = JulianDay::from_unix_seconds(1_416_402_024).to_datetime(datetime.offset());
        assert_eq!(rendered.offset(), datetime.offset());
        assert_eq!(rendered.timestamp(), 1_416_402_024);
        assert_eq!(rendered.nanosecond(), 0);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_to_datetime_saturates() {
        assert_eq!(
            JulianDay::new(1e300).to_datetime(&Utc),
            DateTime::<Utc>::MAX_UTC
        );
        assert_eq!(
            JulianDay::new(-1e300).to_datetime(&Utc),
            DateTime::<Utc>::MIN_UTC
        );
    }
}
