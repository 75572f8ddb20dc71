//! # Constants and type definitions for Hilal
//!
//! This module centralizes the **epoch constants**, the **model coefficients** shared by the
//! orbital approximations, the **default visibility thresholds**, and the **type aliases** used
//! throughout the crate.
//!
//! ## Overview
//!
//! - Epoch and unit constants (J2000.0, full turn in degrees)
//! - Default observation site (Gorontalo) and its civil UTC offset (WITA)
//! - Default crescent visibility thresholds
//! - Core type aliases (`Degree`, `JulianDay`, `Hours`)

// -------------------------------------------------------------------------------------------------
// Epoch and unit constants
// -------------------------------------------------------------------------------------------------

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00)
pub const J2000_JD: f64 = 2_451_545.0;

/// One full turn, in degrees
pub const FULL_TURN_DEG: f64 = 360.0;

/// Degrees of Earth rotation per hour of solar time
pub const DEG_PER_HOUR: f64 = 15.0;

/// Obliquity of the ecliptic used by the low-precision solar model, in degrees
pub const OBLIQUITY_DEG: f64 = 23.439;

/// Largest civil UTC offset in use, in hours (Line Islands, UTC+14)
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

// -------------------------------------------------------------------------------------------------
// Default deployment site
// -------------------------------------------------------------------------------------------------

/// Latitude of the Gorontalo observation site, in degrees
pub const GORONTALO_LATITUDE: f64 = 0.5425734567096381;

/// Longitude of the Gorontalo observation site, in degrees east
pub const GORONTALO_LONGITUDE: f64 = 123.0666501530012;

/// Civil offset of Gorontalo local time (WITA) from UTC, in hours
pub const WITA_UTC_OFFSET_HOURS: f64 = 8.0;

// -------------------------------------------------------------------------------------------------
// Default visibility thresholds
// -------------------------------------------------------------------------------------------------

/// Minimum Moon altitude for the possible-visibility (imkan) criterion, in degrees
pub const MIN_MOON_ALTITUDE_IMKAN: f64 = 3.0;

/// Minimum elongation for the possible-visibility (imkan) criterion, in degrees
pub const MIN_ELONGATION_IMKAN: f64 = 6.4;

/// Minimum elongation for the definitive-visibility (qath'i) criterion, in degrees
pub const MIN_ELONGATION_QATHI: f64 = 9.9;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Continuous day count (Julian Day)
pub type JulianDay = f64;
/// Fractional hours
pub type Hours = f64;
