use crate::constants::Degree;
use crate::coordinates::EquatorialCoord;

/// Angular separation between two bodies, via the spherical law of cosines.
///
/// ```text
/// cos E = sin δ1 sin δ2 + cos δ1 cos δ2 cos(α1 - α2)
/// ```
///
/// The cosine is clamped to `[-1, 1]` before `acos`, so rounding on nearly coincident or
/// nearly opposite bodies cannot leave the arccosine domain. Identical inputs short-circuit to
/// exactly `0.0`, since `sin² δ + cos² δ` can round just below one.
///
/// Arguments
/// ---------
/// * `first`, `second`: equatorial coordinates of the two bodies. Order is irrelevant.
///
/// Return
/// ------
/// * The separation in degrees, within `[0, 180]`.
pub fn elongation(first: &EquatorialCoord, second: &EquatorialCoord) -> Degree {
    if first == second {
        return 0.0;
    }

    let (ra1, dec1) = (
        first.right_ascension.to_radians(),
        first.declination.to_radians(),
    );
    let (ra2, dec2) = (
        second.right_ascension.to_radians(),
        second.declination.to_radians(),
    );

    let cos_sep = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (ra1 - ra2).cos();
    cos_sep.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod elongation_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_elongation_degenerate() {
        let x = EquatorialCoord::new(326.5148998796171, -0.6136451218971154);
        assert_eq!(elongation(&x, &x), 0.0);
    }

    #[test]
    fn test_elongation_opposite_points() {
        let a = EquatorialCoord::new(10.0, 20.0);
        let b = EquatorialCoord::new(190.0, -20.0);
        assert_abs_diff_eq!(elongation(&a, &b), 180.0, epsilon = 1e-5);
    }

    #[test]
    fn test_elongation_along_equator() {
        let a = EquatorialCoord::new(350.0, 0.0);
        let b = EquatorialCoord::new(-3.6, 0.0);
        assert_abs_diff_eq!(elongation(&a, &b), 6.4, epsilon = 1e-9);
    }

    #[test]
    fn test_elongation_target() {
        let sun = EquatorialCoord::new(-29.105824346332398, -11.908487176731697);
        let moon = EquatorialCoord::new(326.5148998796171, -0.6136451218971154);
        assert_abs_diff_eq!(elongation(&sun, &moon), 12.102052109115105, epsilon = 1e-10);
        assert_eq!(elongation(&sun, &moon), elongation(&moon, &sun));
    }
}
