use crate::constants::Degree;
use crate::coordinates::{normalize_degrees, EquatorialCoord, HorizontalCoord};

/// Transform equatorial coordinates into local horizontal coordinates.
///
/// Standard spherical-astronomy rotation through the hour angle `H = LST - α`:
///
/// ```text
/// alt = asin(sin δ sin φ + cos δ cos φ cos H)
/// az  = atan2(-sin H cos δ, cos φ sin δ - sin φ cos δ cos H)
/// ```
///
/// Azimuth is measured from north through east and reduced to `[0, 360)`. The `asin` argument
/// is clamped to `[-1, 1]`, so a body at the zenith or nadir yields ±90° instead of `NaN`.
///
/// No atmospheric refraction is applied. Near the horizon, where the crescent is sought,
/// refraction lifts the apparent altitude by up to ~0.5°, so the altitudes returned here are
/// geometric and slightly low for bodies close to the horizon.
///
/// Arguments
/// ---------
/// * `eq`: equatorial coordinates of the body (degrees).
/// * `lst`: local sidereal time (degrees).
/// * `latitude`: observer latitude φ (degrees).
///
/// Return
/// ------
/// * The body's [`HorizontalCoord`].
pub fn to_horizontal(eq: &EquatorialCoord, lst: Degree, latitude: Degree) -> HorizontalCoord {
    let hour_angle = (lst - eq.right_ascension).to_radians();
    let declination = eq.declination.to_radians();
    let latitude = latitude.to_radians();

    let altitude = (declination.sin() * latitude.sin()
        + declination.cos() * latitude.cos() * hour_angle.cos())
    .clamp(-1.0, 1.0)
    .asin();
    let azimuth = (-hour_angle.sin() * declination.cos()).atan2(
        latitude.cos() * declination.sin() - latitude.sin() * declination.cos() * hour_angle.cos(),
    );

    HorizontalCoord::new(normalize_degrees(azimuth.to_degrees()), altitude.to_degrees())
}

#[cfg(test)]
mod horizontal_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_body_on_meridian_at_equator() {
        // RA == LST, dec == 0, observer on the equator: body at zenith
        let hz = to_horizontal(&EquatorialCoord::new(0.0, 0.0), 0.0, 0.0);
        assert_abs_diff_eq!(hz.altitude, 90.0, epsilon = 1e-12);
        assert_eq!(hz.azimuth, 0.0);
    }

    #[test]
    fn test_celestial_pole_altitude_equals_latitude() {
        let hz = to_horizontal(&EquatorialCoord::new(0.0, 90.0), 123.0, 10.0);
        assert_abs_diff_eq!(hz.altitude, 10.0, epsilon = 1e-12);
        // due north, tiny negative azimuth folded onto 0
        assert!(hz.azimuth < 1e-9 || hz.azimuth > 360.0 - 1e-9);
        assert!(hz.azimuth < 360.0);
    }

    #[test]
    fn test_rising_body_in_the_east() {
        // hour angle of -90° on the equator: body rising due east
        let hz = to_horizontal(&EquatorialCoord::new(90.0, 0.0), 0.0, 0.0);
        assert_abs_diff_eq!(hz.azimuth, 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hz.altitude, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_setting_body_in_the_west() {
        let hz = to_horizontal(&EquatorialCoord::new(0.0, 0.0), 90.0, 0.0);
        assert_abs_diff_eq!(hz.azimuth, 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hz.altitude, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zenith_altitude_is_finite() {
        for x in [1.4098, 1.9663, 2.8567, 3.8955] {
            let hz = to_horizontal(&EquatorialCoord::new(0.0, x), 0.0, x);
            assert_abs_diff_eq!(hz.altitude, 90.0, epsilon = 1e-5);
            assert!((0.0..360.0).contains(&hz.azimuth));
            assert!(hz.azimuth.is_sign_positive());
        }

        let nadir = to_horizontal(&EquatorialCoord::new(180.0, -1.4098), 0.0, 1.4098);
        assert_abs_diff_eq!(nadir.altitude, -90.0, epsilon = 1e-5);
    }
}
