//! # Hilal
//!
//! Sun and Moon apparent positions and crescent (hilal) visibility classification for a fixed
//! observation site.
//!
//! The crate is a pure, stateless engine: given a UTC instant and an observer location it
//! computes the Julian Day and local sidereal time, low-precision solar and lunar equatorial
//! coordinates, their local azimuth/altitude, the Sun–Moon elongation, and a visibility verdict
//! (`ISTIHALAH`, `IMKAN` or `QATHI`) from configurable thresholds.
//!
//! Entry point: [`engine::HilalEngine`]. The building blocks are public for callers that need a
//! single stage (e.g. [`time::julian_day`], [`horizontal::to_horizontal`]).

pub mod constants;
pub mod coordinates;
pub mod display;
pub mod elongation;
pub mod engine;
pub mod hilal_errors;
pub mod horizontal;
pub mod lunar;
pub mod observer;
pub mod solar;
pub mod time;
pub mod visibility;
