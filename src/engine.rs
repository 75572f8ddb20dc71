//! # Hilal engine: configuration and per-instant snapshots
//!
//! This module defines [`HilalEngine`], the façade that wires the time conversion, the solar and
//! lunar models, the horizontal projection, the elongation and the visibility classifier into a
//! single call, and [`PositionSnapshot`], the immutable record that call produces.
//!
//! ## Data flow
//!
//! ```text
//! Epoch (UTC) ──► JD, UT hours ──► LST ─────────────┐
//!                   │                               ▼
//!                   ├──► solar_position ──► to_horizontal ──► sun  ─┐
//!                   └──► lunar_position ──► to_horizontal ──► moon ─┼──► classify ──► verdict
//!                          │                                        │
//!                          └──────────────► elongation ─────────────┘
//! ```
//!
//! ## Modes
//!
//! The same [`HilalEngine::snapshot`] call serves both operating modes:
//!
//! - **fixed-target**: pass a chosen instant once (e.g. [`TARGET_GHURUB_UTC`](crate::time::TARGET_GHURUB_UTC));
//! - **real-time**: call [`HilalEngine::snapshot_now`] on whatever cadence the caller likes.
//!
//! The engine holds only immutable configuration. It keeps no cache, performs no I/O while
//! evaluating, and a given `(instant, configuration)` pair always yields a bit-identical
//! snapshot.
//!
//! ## Typical usage
//!
//! ```rust
//! use hifitime::Epoch;
//! use hilal::engine::{EngineConfig, HilalEngine};
//!
//! let engine = HilalEngine::new(EngineConfig::default())?;
//! let snapshot = engine.snapshot(&Epoch::from_gregorian_utc(2026, 2, 17, 10, 5, 0, 0));
//! println!("{} (elongation {:.4}°)", snapshot.verdict, snapshot.elongation);
//! # Ok::<(), hilal::hilal_errors::HilalError>(())
//! ```

use std::fs;
use std::path::Path;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hours, JulianDay, WITA_UTC_OFFSET_HOURS};
use crate::coordinates::{EquatorialCoord, HorizontalCoord};
use crate::elongation::elongation;
use crate::hilal_errors::HilalError;
use crate::horizontal::to_horizontal;
use crate::lunar::lunar_position;
use crate::observer::ObserverLocation;
use crate::solar::solar_position;
use crate::time::{
    format_local_time, julian_day_from_calendar, local_sidereal_time, parse_utc_instant,
    validate_utc_offset, UtcCalendar,
};
use crate::visibility::{VisibilityCriteria, VisibilityVerdict};

/// Deployment configuration of the engine.
///
/// Fields
/// -----------------
/// * `site` – observer location (default: Gorontalo).
/// * `criteria` – visibility thresholds (default: 3.0° / 6.4° / 9.9°).
/// * `utc_offset_hours` – fixed civil offset used for the local clock (default: +8 h, WITA).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub site: ObserverLocation,
    #[serde(default)]
    pub criteria: VisibilityCriteria,
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: Hours,
}

fn default_utc_offset() -> Hours {
    WITA_UTC_OFFSET_HOURS
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            site: ObserverLocation::gorontalo(),
            criteria: VisibilityCriteria::default(),
            utc_offset_hours: WITA_UTC_OFFSET_HOURS,
        }
    }
}

impl EngineConfig {
    /// Check every field of the configuration.
    ///
    /// Errors
    /// ----------
    /// * the first [`HilalError`] raised by the site, the criteria or the UTC offset.
    pub fn validate(&self) -> Result<(), HilalError> {
        self.site.validate()?;
        self.criteria.validate()?;
        validate_utc_offset(self.utc_offset_hours)?;
        Ok(())
    }

    /// Read a JSON configuration file and validate it.
    ///
    /// Missing `criteria` and `utc_offset_hours` fall back to their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<EngineConfig, HilalError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::info!(path = %path.as_ref().display(), "loaded engine configuration");
        Ok(config)
    }
}

/// Immutable result of one evaluation.
///
/// Angles are in degrees. `sun` and `moon` are geometric (refraction-free) horizontal
/// coordinates; `elongation` is geocentric.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSnapshot {
    pub instant: Epoch,
    pub julian_day: JulianDay,
    pub local_sidereal_time: Degree,
    pub sun_equatorial: EquatorialCoord,
    pub moon_equatorial: EquatorialCoord,
    pub sun: HorizontalCoord,
    pub moon: HorizontalCoord,
    pub elongation: Degree,
    pub verdict: VisibilityVerdict,
}

/// Stateless evaluator bound to one [`EngineConfig`].
#[derive(Debug, Clone)]
pub struct HilalEngine {
    config: EngineConfig,
}

impl Default for HilalEngine {
    fn default() -> Self {
        HilalEngine {
            config: EngineConfig::default(),
        }
    }
}

impl HilalEngine {
    /// Construct an engine after validating its configuration.
    pub fn new(config: EngineConfig) -> Result<Self, HilalError> {
        config.validate()?;
        Ok(HilalEngine { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn site(&self) -> &ObserverLocation {
        &self.config.site
    }

    /// Evaluate the sky at a given UTC instant.
    ///
    /// Arguments
    /// -----------------
    /// * `instant`: the instant of evaluation.
    ///
    /// Return
    /// ----------
    /// * A freshly built [`PositionSnapshot`].
    pub fn snapshot(&self, instant: &Epoch) -> PositionSnapshot {
        let calendar = UtcCalendar::from_epoch(instant);
        let jd = julian_day_from_calendar(&calendar);
        let lst = local_sidereal_time(jd, calendar.ut_hours(), self.config.site.longitude());

        let sun_equatorial = solar_position(jd);
        let moon_equatorial = lunar_position(jd);

        let latitude = self.config.site.latitude();
        let sun = to_horizontal(&sun_equatorial, lst, latitude);
        let moon = to_horizontal(&moon_equatorial, lst, latitude);
        let elongation = elongation(&sun_equatorial, &moon_equatorial);

        let verdict = self
            .config
            .criteria
            .classify(moon.altitude, sun.altitude, elongation);

        tracing::debug!(
            jd,
            lst,
            sun_altitude = sun.altitude,
            moon_altitude = moon.altitude,
            elongation,
            verdict = verdict.label(),
            "evaluated snapshot"
        );

        PositionSnapshot {
            instant: *instant,
            julian_day: jd,
            local_sidereal_time: lst,
            sun_equatorial,
            moon_equatorial,
            sun,
            moon,
            elongation,
            verdict,
        }
    }

    /// Evaluate the sky at the current system time (real-time mode).
    pub fn snapshot_now(&self) -> Result<PositionSnapshot, HilalError> {
        let now = Epoch::now()?;
        Ok(self.snapshot(&now))
    }

    /// Evaluate the sky at an instant given as `YYYY-MM-DDTHH:MM:SS` (UTC).
    pub fn snapshot_at_str(&self, instant: &str) -> Result<PositionSnapshot, HilalError> {
        let epoch = parse_utc_instant(instant)?;
        Ok(self.snapshot(&epoch))
    }

    /// Civil clock of a snapshot at the configured UTC offset, `YYYY-MM-DD HH:MM:SS`.
    pub fn local_time(&self, snapshot: &PositionSnapshot) -> String {
        format_local_time(&snapshot.instant, self.config.utc_offset_hours)
    }
}

#[cfg(test)]
mod engine_test {
    use super::*;
    use crate::time::TARGET_GHURUB_UTC;
    use crate::visibility::IstihalahReason;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_snapshot_target_ghurub() {
        let engine = HilalEngine::default();
        let snap = engine.snapshot_at_str(TARGET_GHURUB_UTC).unwrap();

        assert_eq!(snap.julian_day, 2461088.920138889);
        assert_abs_diff_eq!(snap.local_sidereal_time, 61.7170174947604, epsilon = 1e-9);
        assert_eq!(
            snap.verdict,
            VisibilityVerdict::Istihalah(IstihalahReason::MoonBelowHorizon)
        );
        assert_eq!(engine.local_time(&snap), "2026-02-17 18:05:00");
    }

    #[test]
    fn test_snapshot_is_deterministic() {
        let engine = HilalEngine::default();
        let t = Epoch::from_gregorian_utc(2026, 3, 19, 10, 30, 15, 250_000_000);
        assert_eq!(engine.snapshot(&t), engine.snapshot(&t));
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = EngineConfig {
            utc_offset_hours: 20.0,
            ..EngineConfig::default()
        };
        assert_eq!(
            HilalEngine::new(config).unwrap_err(),
            HilalError::InvalidUtcOffset(20.0)
        );
    }

    #[test]
    fn test_config_json_defaults() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"site": {"latitude": -6.2, "longitude": 106.8, "name": "Jakarta"}}"#,
        )
        .unwrap();
        assert_eq!(config.criteria, VisibilityCriteria::default());
        assert_eq!(config.utc_offset_hours, 8.0);
        assert!(config.validate().is_ok());
    }
}
