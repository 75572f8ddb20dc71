use crate::constants::{JulianDay, J2000_JD};
use crate::coordinates::EquatorialCoord;

/// Geocentric equatorial coordinates of the Moon from a coarse single-term model.
///
/// ```text
/// Lm = 218.32 + 13.176396 d                   (mean longitude)
/// Mm = 134.96 + 13.064993 d                   (mean anomaly)
/// F  = 93.27  + 13.22935 d                    (argument of latitude)
/// α ≈ Lm + 6.29 sin Mm
/// δ ≈ 5.13 sin F
/// ```
///
/// The main equation-of-center term is added straight onto the right ascension, and the
/// declination is the ecliptic latitude term alone. No ecliptic-to-equatorial rotation,
/// parallax or distance correction is applied.
///
/// Arguments
/// ---------
/// * `jd`: Julian Day of the instant.
///
/// Return
/// ------
/// * Right ascension (not reduced, may slightly exceed `[0, 360)`) and declination, in degrees.
pub fn lunar_position(jd: JulianDay) -> EquatorialCoord {
    let days_since_j2000 = jd - J2000_JD;

    let mean_longitude = (218.32 + 13.176396 * days_since_j2000).rem_euclid(360.0);
    let mean_anomaly = (134.96 + 13.064993 * days_since_j2000)
        .rem_euclid(360.0)
        .to_radians();
    let argument_of_latitude = (93.27 + 13.22935 * days_since_j2000)
        .rem_euclid(360.0)
        .to_radians();

    let right_ascension = mean_longitude + 6.29 * mean_anomaly.sin();
    // degrees, passed through a radian round trip
    let declination = (5.13 * argument_of_latitude.sin())
        .to_radians()
        .to_degrees();

    EquatorialCoord::new(right_ascension, declination)
}

#[cfg(test)]
mod lunar_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lunar_position_j2000() {
        let moon = lunar_position(J2000_JD);
        assert_abs_diff_eq!(moon.right_ascension, 222.7708056510534, epsilon = 1e-10);
        assert_abs_diff_eq!(moon.declination, 5.12164743770885, epsilon = 1e-10);
    }

    #[test]
    fn test_lunar_position_target() {
        let moon = lunar_position(2461088.920138889);
        assert_abs_diff_eq!(moon.right_ascension, 326.5148998796171, epsilon = 1e-10);
        assert_abs_diff_eq!(moon.declination, -0.6136451218971154, epsilon = 1e-10);
    }

    #[test]
    fn test_lunar_declination_amplitude() {
        for k in 0..60 {
            let moon = lunar_position(J2000_JD + 0.5 * k as f64);
            assert!(moon.declination.abs() <= 5.13 + 1e-12);
        }
    }
}
