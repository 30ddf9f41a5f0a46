//! Degree-based math utilities for the sunrise equation.

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Converts degrees to radians.
///
/// Evaluated as `degrees * PI / 180`, which rounds differently from `f64::to_radians`.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees - 360.0 * floor(degrees / 360.0);
    // floor() of a tiny negative quotient can round the result up to exactly 360
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Inverse sine, result in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    radians_to_degrees(asin(x))
}

/// Inverse cosine in degrees, clamped to the function's domain.
///
/// Arguments at or above 1 give 0° and arguments at or below -1 give 180°,
/// so out-of-range inputs never produce NaN. For the hour-angle equation these
/// are the "sun never rises" and "sun never sets" cases.
#[inline]
pub fn acos_deg_clamped(x: f64) -> f64 {
    if x >= 1.0 {
        return 0.0;
    }
    if x <= -1.0 {
        return 180.0;
    }
    radians_to_degrees(acos(x))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Computes trunc(x) using the appropriate function for the compilation target.
#[inline]
pub fn trunc(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.trunc();

    #[cfg(not(feature = "std"))]
    return libm::trunc(x);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(90.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_0_to_360(-360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(-720.5), 359.5);

        let tiny = normalize_degrees_0_to_360(-1e-300);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_degree_trig() {
        assert!(sin_deg(0.0).abs() < EPSILON);
        assert!((sin_deg(90.0) - 1.0).abs() < EPSILON);
        assert!((cos_deg(60.0) - 0.5).abs() < EPSILON);
        assert!((asin_deg(0.5) - 30.0).abs() < EPSILON);
        assert!((asin_deg(-1.0) + 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_acos_clamped_in_domain() {
        assert!((acos_deg_clamped(0.0) - 90.0).abs() < EPSILON);
        assert!((acos_deg_clamped(0.5) - 60.0).abs() < EPSILON);
        assert!((acos_deg_clamped(-0.5) - 120.0).abs() < EPSILON);
    }

    #[test]
    fn test_acos_clamped_out_of_domain() {
        assert_eq!(acos_deg_clamped(1.0), 0.0);
        assert_eq!(acos_deg_clamped(1.5), 0.0);
        assert_eq!(acos_deg_clamped(f64::INFINITY), 0.0);
        assert_eq!(acos_deg_clamped(-1.0), 180.0);
        assert_eq!(acos_deg_clamped(-42.0), 180.0);
        assert_eq!(acos_deg_clamped(f64::NEG_INFINITY), 180.0);
    }

    #[test]
    fn test_trunc_toward_zero() {
        assert_eq!(trunc(2.7), 2.0);
        assert_eq!(trunc(-2.7), -2.0);
        assert_eq!(floor(-2.7), -3.0);
    }
}
