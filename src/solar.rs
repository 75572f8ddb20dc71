use crate::constants::{JulianDay, J2000_JD, OBLIQUITY_DEG};
use crate::coordinates::EquatorialCoord;

/// Geocentric equatorial coordinates of the Sun from the low-precision almanac model.
///
/// The model uses the mean longitude and mean anomaly of the Sun, a two-term equation of
/// center, and a fixed obliquity of the ecliptic (23.439°):
///
/// ```text
/// L = 280.460 + 0.9856474 d          (mean longitude)
/// g = 357.528 + 0.9856003 d          (mean anomaly)
/// λ = L + 1.915 sin g + 0.020 sin 2g (ecliptic longitude)
/// α = atan2(cos ε sin λ, cos λ)
/// δ = asin(sin ε sin λ)
/// ```
///
/// with `d = jd - 2451545.0`. Accuracy is sub-degree, sufficient for the ~1° scale of the
/// visibility thresholds.
///
/// Arguments
/// ---------
/// * `jd`: Julian Day of the instant.
///
/// Return
/// ------
/// * Right ascension in `(-180, 180]` degrees and declination in degrees.
pub fn solar_position(jd: JulianDay) -> EquatorialCoord {
    let days_since_j2000 = jd - J2000_JD;

    let mean_longitude = (280.460 + 0.9856474 * days_since_j2000).rem_euclid(360.0);
    let mean_anomaly = (357.528 + 0.9856003 * days_since_j2000)
        .rem_euclid(360.0)
        .to_radians();

    let ecliptic_longitude = (mean_longitude
        + 1.915 * mean_anomaly.sin()
        + 0.020 * (2.0 * mean_anomaly).sin())
    .to_radians();
    let obliquity = OBLIQUITY_DEG.to_radians();

    let right_ascension = (obliquity.cos() * ecliptic_longitude.sin())
        .atan2(ecliptic_longitude.cos())
        .to_degrees();
    let declination = (obliquity.sin() * ecliptic_longitude.sin())
        .asin()
        .to_degrees();

    EquatorialCoord::new(right_ascension, declination)
}

#[cfg(test)]
mod solar_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_solar_position_j2000() {
        let sun = solar_position(J2000_JD);
        assert_abs_diff_eq!(sun.right_ascension, -78.71416016021453, epsilon = 1e-10);
        assert_abs_diff_eq!(sun.declination, -23.03342861127065, epsilon = 1e-10);
    }

    #[test]
    fn test_solar_position_target() {
        let sun = solar_position(2461088.920138889);
        assert_abs_diff_eq!(sun.right_ascension, -29.105824346332398, epsilon = 1e-10);
        assert_abs_diff_eq!(sun.declination, -11.908487176731697, epsilon = 1e-10);
    }

    #[test]
    fn test_solar_declination_bounded_by_obliquity() {
        for k in 0..366 {
            let sun = solar_position(J2000_JD + k as f64);
            assert!(sun.declination.abs() <= OBLIQUITY_DEG + 1e-9);
        }
    }
}
