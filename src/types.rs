//! Core data types for day/night calculations.

/// Whether the sun is up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Between sunrise and sunset
    Day,
    /// Between sunset and the following sunrise
    Night,
}

impl Phase {
    /// Checks if this is the day phase.
    #[must_use]
    pub const fn is_day(self) -> bool {
        matches!(self, Self::Day)
    }

    /// Checks if this is the night phase.
    #[must_use]
    pub const fn is_night(self) -> bool {
        matches!(self, Self::Night)
    }
}

/// Daylight classification of a single solar day.
///
/// Derived from the hour-angle equation: when its argument leaves [-1, 1] the sun
/// either never sets or never rises on that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Daylight {
    /// Distinct sunrise and sunset
    Regular,
    /// Sun stays up all day; sunset is exactly 24 hours after sunrise
    PolarDay,
    /// Sun stays down all day; sunrise and sunset coincide at solar noon
    PolarNight,
}

/// The day or night an instant falls in, with the transitions bounding it.
///
/// `start` and `end` bound the half-open interval `[start, end)` that contains
/// the queried instant, so `start <= instant < end` always holds. A sunrise
/// instant belongs to the day it starts and a sunset instant to the night it starts.
///
/// `T` is Unix seconds (`i64`) for the numeric API and `chrono::DateTime<Tz>`
/// for the chrono API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOrNight<T> {
    phase: Phase,
    start: T,
    end: T,
}

impl<T> DayOrNight<T> {
    /// Creates a new result from its phase and bounds.
    pub const fn new(phase: Phase, start: T, end: T) -> Self {
        Self { phase, start, end }
    }

    /// Gets the phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Gets the transition that started this phase (inclusive).
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// Gets the transition that ends this phase (exclusive).
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Checks if the queried instant is in daytime.
    pub const fn is_day(&self) -> bool {
        self.phase.is_day()
    }

    /// Checks if the queried instant is in nighttime.
    pub const fn is_night(&self) -> bool {
        self.phase.is_night()
    }

    /// Splits the result into `(phase, start, end)`.
    pub fn into_parts(self) -> (Phase, T, T) {
        (self.phase, self.start, self.end)
    }

    /// Converts both bounds, keeping the phase.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> DayOrNight<U> {
        DayOrNight {
            phase: self.phase,
            start: f(self.start),
            end: f(self.end),
        }
    }
}

impl<T: PartialOrd> DayOrNight<T> {
    /// Checks if an instant lies within `[start, end)`.
    pub fn contains(&self, instant: &T) -> bool {
        self.start <= *instant && *instant < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert!(Phase::Day.is_day());
        assert!(!Phase::Day.is_night());
        assert!(Phase::Night.is_night());
        assert!(!Phase::Night.is_day());
    }

    #[test]
    fn test_day_or_night_accessors() {
        let result = DayOrNight::new(Phase::Night, 100_i64, 200_i64);
        assert_eq!(result.phase(), Phase::Night);
        assert_eq!(*result.start(), 100);
        assert_eq!(*result.end(), 200);
        assert!(result.is_night());
        assert!(!result.is_day());
        assert_eq!(result.into_parts(), (Phase::Night, 100, 200));
    }

    #[test]
    fn test_day_or_night_half_open() {
        let result = DayOrNight::new(Phase::Day, 100_i64, 200_i64);
        assert!(result.contains(&100));
        assert!(result.contains(&199));
        assert!(!result.contains(&200));
        assert!(!result.contains(&99));
    }

    #[test]
    fn test_day_or_night_map() {
        let result = DayOrNight::new(Phase::Day, 1_i64, 2_i64).map(|t| t * 10);
        assert_eq!(result, DayOrNight::new(Phase::Day, 10, 20));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_day_or_night_with_datetimes() {
        use chrono::{DateTime, Utc};

        let start = "2014-11-19T13:00:24Z".parse::<DateTime<Utc>>().unwrap();
        let end = "2014-11-19T23:22:57Z".parse::<DateTime<Utc>>().unwrap();
        let noon = "2014-11-19T18:11:00Z".parse::<DateTime<Utc>>().unwrap();

        let result = DayOrNight::new(Phase::Day, start, end);
        assert!(result.contains(&start));
        assert!(result.contains(&noon));
        assert!(!result.contains(&end));
    }
}
