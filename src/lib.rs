//! # Solar Day
//!
//! Sunrise, sunset and day/night classification from the sunrise equation.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The library anchors a *solar day* to the mean solar noon nearest a given instant
//! at a given longitude, derives true solar noon and the sunrise/sunset hour angle,
//! and answers "is it day or night right now, and since/until when?".
//!
//! The formula is the simple one from the
//! [Wikipedia sunrise equation article](https://en.wikipedia.org/wiki/Sunrise_equation):
//! results can differ from high-precision ephemerides by a minute or two, with a
//! fixed sun elevation of -0.83° at sunrise/sunset standing in for refraction.
//!
//! ## Features
//!
//! - Polar latitudes handled: 24-hour daylight and 24-hour darkness are domain
//!   conditions, never NaN or errors
//! - Immutable, `Copy` values; stepping a day forward or back returns a new value
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-day = "0.1"
//!
//! # Numeric API only (Unix seconds and Julian days)
//! solar-day = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # no_std
//! solar-day = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sunrise and Sunset (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_day::Sunrise;
//! use chrono::{DateTime, FixedOffset};
//!
//! // Los Angeles, first five days of June 2013
//! let start = "2013-06-01T00:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let first = Sunrise::around(34.05, -118.25, &start);
//!
//! for day in first.days().skip_while(|d| d.sunrise() < start).take(5) {
//!     println!("Sunrise: {} Sunset: {}", day.sunrise(), day.sunset());
//! }
//! # }
//! ```
//!
//! ### Day or Night (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_day::{Phase, day_or_night};
//! use chrono::{DateTime, FixedOffset};
//!
//! let now = "2014-11-19T12:00:00-06:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let result = day_or_night(32.9, -96.2, &now);
//!
//! assert_eq!(result.phase(), Phase::Day);
//! println!("Day since {} until {}", result.start(), result.end());
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use solar_day::{Daylight, SolarDay, time::JulianDay};
//!
//! // 68°N on 2014-06-20, 07:00 UTC
//! let jd = JulianDay::from_utc(2014, 6, 20, 7, 0, 0.0).unwrap();
//! let day = SolarDay::around_julian(68.0, -118.25, jd);
//!
//! assert_eq!(day.daylight(), Daylight::PolarDay);
//! assert_eq!(day.day_length_seconds(), 86_400);
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, positive north. Must lie strictly inside (-90°, 90°);
//!   use the `try_*` functions to validate.
//! - **Longitude**: degrees, positive east.
//! - **Day/night windows**: half-open `[start, end)`; the sunrise instant is day,
//!   the sunset instant is night.
//! - **Time zones**: outputs use the zone of the `DateTime` passed in; zones are
//!   never looked up or converted beyond that.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of clamped hour angles in tests
)]

// Public API exports
#[cfg(feature = "chrono")]
pub use crate::day_night::{day_or_night, try_day_or_night};
pub use crate::day_night::{day_or_night_unix, try_day_or_night_unix};
pub use crate::error::{Error, Result};
#[cfg(feature = "chrono")]
pub use crate::solar_day::Sunrise;
pub use crate::solar_day::SolarDay;
pub use crate::types::{DayOrNight, Daylight, Phase};

// Algorithm modules
pub mod day_night;
pub mod solar_day;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
