//! # Celestial coordinate containers
//!
//! Plain value types for the two coordinate systems handled by the engine:
//!
//! - [`EquatorialCoord`] – right ascension / declination, sky-fixed, one per body per instant.
//! - [`HorizontalCoord`] – azimuth / altitude, observer-local.
//!
//! Both are expressed in **degrees**. Azimuth is measured from north through east and lies in
//! `[0, 360)`; altitude lies in `[-90, 90]`.
//!
//! Each type can be lifted onto the unit sphere as a [`nalgebra::Vector3`], which is what a 3D
//! sky view plots and what the property tests use to cross-check the elongation formula.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, FULL_TURN_DEG};

/// Reduce an angle into `[0, 360)` degrees.
///
/// `rem_euclid` alone can round a tiny negative input up to exactly `360.0`; that value is
/// folded back onto `0.0`. A negative zero comes back as `+0.0`.
#[inline]
pub fn normalize_degrees(angle: Degree) -> Degree {
    let reduced = angle.rem_euclid(FULL_TURN_DEG);
    if reduced >= FULL_TURN_DEG {
        0.0
    } else {
        reduced + 0.0
    }
}

/// Equatorial coordinates of a body, in degrees.
///
/// The right ascension is not reduced: the lunar model yields values slightly outside
/// `[0, 360)`, which every consumer only feeds into trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoord {
    pub right_ascension: Degree,
    pub declination: Degree,
}

impl EquatorialCoord {
    pub fn new(right_ascension: Degree, declination: Degree) -> Self {
        EquatorialCoord {
            right_ascension,
            declination,
        }
    }

    /// Unit vector pointing to the body in the equatorial frame
    /// (x toward the equinox, z toward the celestial north pole).
    pub fn to_unit_vector(&self) -> Vector3<f64> {
        let (ra, dec) = (
            self.right_ascension.to_radians(),
            self.declination.to_radians(),
        );
        Vector3::new(dec.cos() * ra.cos(), dec.cos() * ra.sin(), dec.sin())
    }
}

/// Horizontal coordinates of a body, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoord {
    pub azimuth: Degree,
    pub altitude: Degree,
}

impl HorizontalCoord {
    pub fn new(azimuth: Degree, altitude: Degree) -> Self {
        HorizontalCoord { azimuth, altitude }
    }

    /// True when the body's center is above the geometric horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }

    /// Position on the local unit sphere: `x = cos(alt) cos(az)`, `y = cos(alt) sin(az)`,
    /// `z = sin(alt)`. The horizon is the `z = 0` plane.
    pub fn to_unit_vector(&self) -> Vector3<f64> {
        let (az, alt) = (self.azimuth.to_radians(), self.altitude.to_radians());
        Vector3::new(alt.cos() * az.cos(), alt.cos() * az.sin(), alt.sin())
    }
}
