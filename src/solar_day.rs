//! Sunrise and sunset from the sunrise equation.
//!
//! A [`SolarDay`] is anchored to the mean solar noon nearest a given instant at a
//! given longitude. From that anchor it derives the true solar noon and the hour
//! angle between noon and sunrise/sunset. Expect errors of a minute or two against
//! high-precision ephemerides such as NREL's SPA.
//!
//! Reference: <https://en.wikipedia.org/wiki/Sunrise_equation>

#![allow(clippy::unreadable_literal)]

use crate::error::check_coordinates;
use crate::math::{
    acos_deg_clamped, asin_deg, cos_deg, floor, normalize_degrees_0_to_360, sin_deg,
};
use crate::time::JulianDay;
use crate::{Daylight, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeDelta, TimeZone};

/// Offset of mean solar noon from the Julian day boundary at longitude 0, in days.
const SOLAR_NOON_OFFSET: f64 = 0.0009;

/// Sun elevation at sunrise and sunset in degrees (refraction plus solar disc radius).
const SUNRISE_SUNSET_ANGLE: f64 = -0.83;

/// Obliquity of the ecliptic in degrees.
const OBLIQUITY: f64 = 23.45;

/// One solar day at a fixed latitude and longitude.
///
/// Immutable: [`add_days`](Self::add_days) returns a new value, and solar noon and
/// hour angle are recomputed by every constructor, so they always match the anchor.
///
/// Latitude must lie strictly inside (-90°, 90°). At the poles the hour-angle
/// equation divides by a cosine that is zero or nearly so; use
/// [`try_around_unix`](Self::try_around_unix) to reject out-of-range coordinates.
///
/// # Example
/// ```
/// use solar_day::SolarDay;
///
/// // Los Angeles, 2013-06-01 07:00:00 UTC (midnight PDT)
/// let day = SolarDay::around_unix(34.05, -118.25, 1_370_070_000);
/// assert!(day.sunrise_unix() < day.solar_noon_unix());
/// assert!(day.solar_noon_unix() < day.sunset_unix());
///
/// let next = day.add_days(1);
/// assert!((next.sunrise_unix() - day.sunrise_unix() - 86_400).abs() < 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    sin_lat: f64,
    cos_lat: f64,
    jstar: f64,
    solar_noon: f64,
    hour_angle_in_days: f64,
}

impl SolarDay {
    /// Anchors to the solar day around an instant given as Unix seconds.
    ///
    /// The computed sunrise is generally no earlier than 24 hours before `unix`
    /// and the computed sunset no later than 24 hours after it; days with more
    /// than 23 hours of daylight can exceed that.
    ///
    /// # Arguments
    /// * `latitude` - Observer latitude in degrees, positive north
    /// * `longitude` - Observer longitude in degrees, positive east
    /// * `unix` - Reference instant in seconds since 1970-01-01 00:00:00 UTC
    #[must_use]
    pub fn around_unix(latitude: f64, longitude: f64, unix: i64) -> Self {
        Self::around_julian(latitude, longitude, JulianDay::from_unix_seconds(unix))
    }

    /// Anchors to the solar day around a Julian day.
    ///
    /// Snaps to the nearest mean solar noon for the longitude.
    #[must_use]
    pub fn around_julian(latitude: f64, longitude: f64, jd: JulianDay) -> Self {
        let jstar = floor(jd.value() - SOLAR_NOON_OFFSET + longitude / 360.0 + 0.5)
            + SOLAR_NOON_OFFSET
            - longitude / 360.0;
        Self::from_anchor(sin_deg(latitude), cos_deg(latitude), jstar)
    }

    /// Like [`around_unix`](Self::around_unix), but validates the coordinates first.
    ///
    /// # Errors
    /// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
    pub fn try_around_unix(latitude: f64, longitude: f64, unix: i64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::around_unix(latitude, longitude, unix))
    }

    /// Like [`around_julian`](Self::around_julian), but validates the coordinates first.
    ///
    /// # Errors
    /// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
    pub fn try_around_julian(latitude: f64, longitude: f64, jd: JulianDay) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::around_julian(latitude, longitude, jd))
    }

    /// Returns the solar day `days` after this one (before it, if negative).
    ///
    /// Shifting is additive: `d.add_days(a).add_days(b) == d.add_days(a + b)`.
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        let jstar = self.jstar().add_days(days as f64);
        Self::from_anchor(self.sin_lat, self.cos_lat, jstar.value())
    }

    /// Iterates over this solar day and every following one.
    ///
    /// # Example
    /// ```
    /// use solar_day::SolarDay;
    ///
    /// let week: Vec<_> = SolarDay::around_unix(34.05, -118.25, 1_370_070_000)
    ///     .days()
    ///     .take(7)
    ///     .map(|d| d.sunrise_unix())
    ///     .collect();
    /// assert!(week.windows(2).all(|w| w[1] > w[0]));
    /// ```
    pub fn days(self) -> impl Iterator<Item = Self> {
        core::iter::successors(Some(self), |day| Some(day.add_days(1)))
    }

    /// Gets the anchor: the mean solar noon this day is built around, as a Julian day.
    #[must_use]
    pub const fn jstar(&self) -> JulianDay {
        JulianDay::new(self.jstar)
    }

    /// Gets true solar noon as a Julian day.
    #[must_use]
    pub const fn solar_noon_julian(&self) -> JulianDay {
        JulianDay::new(self.solar_noon)
    }

    /// Gets sunrise as a Julian day.
    #[must_use]
    pub fn sunrise_julian(&self) -> JulianDay {
        JulianDay::new(self.solar_noon - self.hour_angle_in_days)
    }

    /// Gets sunset as a Julian day.
    #[must_use]
    pub fn sunset_julian(&self) -> JulianDay {
        JulianDay::new(self.solar_noon + self.hour_angle_in_days)
    }

    /// Gets sunrise in Unix seconds.
    #[must_use]
    pub fn sunrise_unix(&self) -> i64 {
        self.sunrise_julian().to_unix_seconds()
    }

    /// Gets sunset in Unix seconds.
    #[must_use]
    pub fn sunset_unix(&self) -> i64 {
        self.sunset_julian().to_unix_seconds()
    }

    /// Gets true solar noon in Unix seconds.
    #[must_use]
    pub fn solar_noon_unix(&self) -> i64 {
        self.solar_noon_julian().to_unix_seconds()
    }

    /// Gets half the daylight duration in days, between 0.0 and 0.5.
    #[must_use]
    pub const fn hour_angle_in_days(&self) -> f64 {
        self.hour_angle_in_days
    }

    /// Gets the time from sunrise to sunset in whole seconds.
    ///
    /// 86,400 on a polar day and 0 on a polar night.
    #[must_use]
    pub fn day_length_seconds(&self) -> i64 {
        self.sunset_unix() - self.sunrise_unix()
    }

    /// Classifies the day as regular, polar day or polar night.
    #[must_use]
    pub fn daylight(&self) -> Daylight {
        if self.hour_angle_in_days <= 0.0 {
            Daylight::PolarNight
        } else if self.hour_angle_in_days >= 0.5 {
            Daylight::PolarDay
        } else {
            Daylight::Regular
        }
    }

    fn from_anchor(sin_lat: f64, cos_lat: f64, jstar: f64) -> Self {
        let (solar_noon, declination) = calculate_solar_noon_and_declination(jstar);
        let hour_angle = calculate_hour_angle(sin_lat, cos_lat, declination);
        Self {
            sin_lat,
            cos_lat,
            jstar,
            solar_noon,
            hour_angle_in_days: hour_angle / 360.0,
        }
    }
}

/// Solar noon (Julian day) and solar declination (degrees) for an anchor.
fn calculate_solar_noon_and_declination(jstar: f64) -> (f64, f64) {
    let days = JulianDay::new(jstar).days_since_j2000();
    let mean_anomaly = normalize_degrees_0_to_360(357.5291 + 0.98560028 * days);
    let center = 1.9148 * sin_deg(mean_anomaly)
        + 0.02 * sin_deg(2.0 * mean_anomaly)
        + 0.0003 * sin_deg(3.0 * mean_anomaly);
    // 102.9372° is the argument of perihelion
    let ecliptic_longitude =
        normalize_degrees_0_to_360(mean_anomaly + 102.9372 + center + 180.0);

    let solar_noon =
        jstar + 0.0053 * sin_deg(mean_anomaly) - 0.0069 * sin_deg(2.0 * ecliptic_longitude);
    let declination = asin_deg(sin_deg(ecliptic_longitude) * sin_deg(OBLIQUITY));
    (solar_noon, declination)
}

/// Hour angle between solar noon and sunrise/sunset, in degrees (0° to 180°).
///
/// 0° when the sun never rises, 180° when it never sets.
fn calculate_hour_angle(sin_lat: f64, cos_lat: f64, declination: f64) -> f64 {
    acos_deg_clamped(
        (sin_deg(SUNRISE_SUNSET_ANGLE) - sin_lat * sin_deg(declination))
            / (cos_lat * cos_deg(declination)),
    )
}

/// A solar day tied to the time zone of the instant it was anchored at.
///
/// Every returned `DateTime` is in that zone, regardless of what later calls pass in.
///
/// # Example
/// ```rust
/// use solar_day::Sunrise;
/// use chrono::{DateTime, FixedOffset};
///
/// let start = "2013-06-01T00:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let mut day = Sunrise::around(34.05, -118.25, &start);
/// while day.sunrise() < start {
///     day = day.add_days(1);
/// }
///
/// assert_eq!(day.sunrise().to_rfc3339(), "2013-06-01T05:44:01-07:00");
/// assert_eq!(day.sunset().to_rfc3339(), "2013-06-01T20:00:42-07:00");
/// ```
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, PartialEq)]
pub struct Sunrise<Tz: TimeZone> {
    day: SolarDay,
    tz: Tz,
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> Sunrise<Tz> {
    /// Anchors to the solar day around `datetime`, keeping its time zone for output.
    ///
    /// See [`SolarDay::around_unix`] for the arguments and the latitude precondition.
    #[must_use]
    pub fn around(latitude: f64, longitude: f64, datetime: &DateTime<Tz>) -> Self {
        Self {
            day: SolarDay::around_unix(latitude, longitude, datetime.timestamp()),
            tz: datetime.timezone(),
        }
    }

    /// Like [`around`](Self::around), but validates the coordinates first.
    ///
    /// # Errors
    /// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
    pub fn try_around(latitude: f64, longitude: f64, datetime: &DateTime<Tz>) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::around(latitude, longitude, datetime))
    }

    /// Returns the solar day `days` after this one (before it, if negative), in the same zone.
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        Self {
            day: self.day.add_days(days),
            tz: self.tz,
        }
    }

    /// Iterates over this solar day and every following one.
    pub fn days(self) -> impl Iterator<Item = Self> {
        core::iter::successors(Some(self), |day| Some(day.clone().add_days(1)))
    }

    /// Gets sunrise in the anchoring time zone.
    #[must_use]
    pub fn sunrise(&self) -> DateTime<Tz> {
        self.day.sunrise_julian().to_datetime(&self.tz)
    }

    /// Gets sunset in the anchoring time zone.
    #[must_use]
    pub fn sunset(&self) -> DateTime<Tz> {
        self.day.sunset_julian().to_datetime(&self.tz)
    }

    /// Gets true solar noon in the anchoring time zone.
    #[must_use]
    pub fn solar_noon(&self) -> DateTime<Tz> {
        self.day.solar_noon_julian().to_datetime(&self.tz)
    }

    /// Gets the time from sunrise to sunset.
    #[must_use]
    pub fn day_length(&self) -> TimeDelta {
        TimeDelta::seconds(self.day.day_length_seconds())
    }

    /// Classifies the day as regular, polar day or polar night.
    #[must_use]
    pub fn daylight(&self) -> Daylight {
        self.day.daylight()
    }

    /// Gets the underlying zone-free solar day.
    #[must_use]
    pub const fn solar_day(&self) -> &SolarDay {
        &self.day
    }

    /// Gets the time zone outputs are rendered in.
    #[must_use]
    pub const fn timezone(&self) -> &Tz {
        &self.tz
    }
}
