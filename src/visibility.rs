//! # Crescent visibility classification
//!
//! This module turns the three quantities that matter for a crescent sighting, the Moon's
//! altitude, the Sun's altitude and the Sun–Moon elongation, into a [`VisibilityVerdict`].
//!
//! ## Rules
//!
//! Rules are evaluated in order and the **first match wins**:
//!
//! 1. Sun altitude `> 0` → [`VisibilityVerdict::Istihalah`] ([`IstihalahReason::SunAboveHorizon`])
//! 2. Moon altitude `≤ 0` → [`VisibilityVerdict::Istihalah`] ([`IstihalahReason::MoonBelowHorizon`])
//! 3. Elongation `≥ min_elongation_certain` → [`VisibilityVerdict::Qathi`]
//! 4. Moon altitude `≥ min_moon_altitude` **and** elongation `≥ min_elongation_possible`
//!    → [`VisibilityVerdict::Imkan`]
//! 5. Otherwise → [`VisibilityVerdict::Istihalah`] ([`IstihalahReason::CriterionNotMet`])
//!
//! The ordering matters: a daytime Sun pre-empts an otherwise definitive elongation, and the
//! definitive elongation rule fires even when the Moon is too low for the possible-visibility
//! criterion.
//!
//! ## Thresholds
//!
//! Thresholds live in [`VisibilityCriteria`]; the default values are the 3.0° / 6.4° / 9.9°
//! set in force for 1447 H. A custom set is assembled with [`VisibilityCriteria::builder`],
//! which validates the values before handing back the criteria.
//!
//! ## Example
//!
//! ```rust
//! use hilal::visibility::{VisibilityCriteria, VisibilityVerdict};
//!
//! let criteria = VisibilityCriteria::default();
//! let verdict = criteria.classify(3.0, -1.0, 6.4);
//! assert_eq!(verdict, VisibilityVerdict::Imkan);
//! ```

use std::cmp::Ordering::{Equal, Greater};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    Degree, MIN_ELONGATION_IMKAN, MIN_ELONGATION_QATHI, MIN_MOON_ALTITUDE_IMKAN,
};
use crate::hilal_errors::HilalError;

/// Why a crescent was ruled impossible to observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IstihalahReason {
    /// Daytime: the Sun has not set yet.
    SunAboveHorizon,
    /// The Moon has already set, or not risen.
    MoonBelowHorizon,
    /// The Moon is up but neither visibility criterion is satisfied.
    CriterionNotMet,
}

/// Outcome of the visibility classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibilityVerdict {
    /// Impossible: the crescent cannot be sighted.
    Istihalah(IstihalahReason),
    /// Possible: the altitude and elongation criteria are both met.
    Imkan,
    /// Certain: the definitive elongation criterion is met.
    Qathi,
}

impl VisibilityVerdict {
    /// Upper-case label of the verdict, as shown on the status banner.
    pub fn label(&self) -> &'static str {
        match self {
            VisibilityVerdict::Istihalah(_) => "ISTIHALAH",
            VisibilityVerdict::Imkan => "IMKAN",
            VisibilityVerdict::Qathi => "QATHI",
        }
    }

    /// Human-readable rationale of the verdict.
    pub fn rationale(&self) -> &'static str {
        match self {
            VisibilityVerdict::Istihalah(IstihalahReason::SunAboveHorizon) => {
                "Sun still above horizon."
            }
            VisibilityVerdict::Istihalah(IstihalahReason::MoonBelowHorizon) => {
                "Moon below horizon."
            }
            VisibilityVerdict::Istihalah(IstihalahReason::CriterionNotMet) => {
                "Fails the possible-visibility criterion."
            }
            VisibilityVerdict::Imkan => "Meets the possible-visibility (imkan) criterion.",
            VisibilityVerdict::Qathi => "Meets the definitive-visibility (qath'i) criterion.",
        }
    }

    /// Display color token (CSS hex) associated with the verdict.
    pub fn color(&self) -> &'static str {
        match self {
            VisibilityVerdict::Istihalah(IstihalahReason::SunAboveHorizon) => "#64748b",
            VisibilityVerdict::Istihalah(IstihalahReason::MoonBelowHorizon) => "#ef4444",
            VisibilityVerdict::Istihalah(IstihalahReason::CriterionNotMet) => "#f59e0b",
            VisibilityVerdict::Imkan => "#3b82f6",
            VisibilityVerdict::Qathi => "#10b981",
        }
    }

    /// True for the two verdicts under which a sighting may be accepted.
    pub fn is_visible(&self) -> bool {
        !matches!(self, VisibilityVerdict::Istihalah(_))
    }
}

impl fmt::Display for VisibilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.rationale())
    }
}

/// Threshold set used by the classifier, in degrees.
///
/// Fields
/// -----------------
/// * `min_moon_altitude` – minimum Moon altitude for the possible-visibility criterion.
/// * `min_elongation_possible` – minimum elongation for the possible-visibility criterion.
/// * `min_elongation_certain` – minimum elongation for the definitive criterion.
///
/// Defaults
/// -----------------
/// * `min_moon_altitude`: 3.0°
/// * `min_elongation_possible`: 6.4°
/// * `min_elongation_certain`: 9.9°
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityCriteria {
    pub min_moon_altitude: Degree,
    pub min_elongation_possible: Degree,
    pub min_elongation_certain: Degree,
}

impl Default for VisibilityCriteria {
    fn default() -> Self {
        VisibilityCriteria {
            min_moon_altitude: MIN_MOON_ALTITUDE_IMKAN,
            min_elongation_possible: MIN_ELONGATION_IMKAN,
            min_elongation_certain: MIN_ELONGATION_QATHI,
        }
    }
}

impl VisibilityCriteria {
    /// Construct the default criteria. Equivalent to [`VisibilityCriteria::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`VisibilityCriteriaBuilder`] starting from the default thresholds.
    pub fn builder() -> VisibilityCriteriaBuilder {
        VisibilityCriteriaBuilder::new()
    }

    /// Classify a sky configuration.
    ///
    /// Total over its inputs: every triple maps to exactly one verdict, and comparisons with
    /// `NaN` fall through to [`IstihalahReason::CriterionNotMet`].
    ///
    /// Arguments
    /// -----------------
    /// * `moon_altitude`: geometric altitude of the Moon (degrees).
    /// * `sun_altitude`: geometric altitude of the Sun (degrees).
    /// * `elongation`: Sun–Moon separation (degrees).
    pub fn classify(
        &self,
        moon_altitude: Degree,
        sun_altitude: Degree,
        elongation: Degree,
    ) -> VisibilityVerdict {
        if sun_altitude > 0.0 {
            VisibilityVerdict::Istihalah(IstihalahReason::SunAboveHorizon)
        } else if moon_altitude <= 0.0 {
            VisibilityVerdict::Istihalah(IstihalahReason::MoonBelowHorizon)
        } else if elongation >= self.min_elongation_certain {
            VisibilityVerdict::Qathi
        } else if moon_altitude >= self.min_moon_altitude
            && elongation >= self.min_elongation_possible
        {
            VisibilityVerdict::Imkan
        } else {
            VisibilityVerdict::Istihalah(IstihalahReason::CriterionNotMet)
        }
    }

    /// Re-run the builder checks on an existing set, e.g. one deserialized from a file.
    pub fn validate(&self) -> Result<(), HilalError> {
        VisibilityCriteriaBuilder { criteria: *self }.build().map(|_| ())
    }
}

/// Classify with the default thresholds.
pub fn classify(moon_altitude: Degree, sun_altitude: Degree, elongation: Degree) -> VisibilityVerdict {
    VisibilityCriteria::default().classify(moon_altitude, sun_altitude, elongation)
}

/// Builder for [`VisibilityCriteria`], with validation.
#[derive(Debug, Clone)]
pub struct VisibilityCriteriaBuilder {
    criteria: VisibilityCriteria,
}

impl Default for VisibilityCriteriaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityCriteriaBuilder {
    pub fn new() -> Self {
        VisibilityCriteriaBuilder {
            criteria: VisibilityCriteria::default(),
        }
    }

    pub fn min_moon_altitude(mut self, v: Degree) -> Self {
        self.criteria.min_moon_altitude = v;
        self
    }

    pub fn min_elongation_possible(mut self, v: Degree) -> Self {
        self.criteria.min_elongation_possible = v;
        self
    }

    pub fn min_elongation_certain(mut self, v: Degree) -> Self {
        self.criteria.min_elongation_certain = v;
        self
    }

    /// Return true iff x >= 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn ge0(x: f64) -> bool {
        matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
    }

    fn reject(reason: &str) -> HilalError {
        tracing::warn!(reason, "rejected visibility criteria");
        HilalError::InvalidCriteria(reason.into())
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * every threshold is finite;
    /// * `min_moon_altitude ∈ [-90, 90]`;
    /// * `min_elongation_possible ∈ [0, 180]` and `min_elongation_certain ∈ [0, 180]`;
    /// * `min_elongation_possible ≤ min_elongation_certain`.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(VisibilityCriteria)` when all rules hold, `Err(HilalError::InvalidCriteria)`
    ///   (or [`HilalError::NonFiniteValue`]) otherwise.
    pub fn build(self) -> Result<VisibilityCriteria, HilalError> {
        let c = &self.criteria;

        for (name, value) in [
            ("min_moon_altitude", c.min_moon_altitude),
            ("min_elongation_possible", c.min_elongation_possible),
            ("min_elongation_certain", c.min_elongation_certain),
        ] {
            if !value.is_finite() {
                tracing::warn!(threshold = name, "rejected non-finite visibility threshold");
                return Err(HilalError::NonFiniteValue(name.into()));
            }
        }

        if c.min_moon_altitude.abs() > 90.0 {
            return Err(Self::reject("min_moon_altitude must lie within [-90, 90]"));
        }
        if !Self::ge0(c.min_elongation_possible) || c.min_elongation_possible > 180.0 {
            return Err(Self::reject("min_elongation_possible must lie within [0, 180]"));
        }
        if !Self::ge0(c.min_elongation_certain) || c.min_elongation_certain > 180.0 {
            return Err(Self::reject("min_elongation_certain must lie within [0, 180]"));
        }
        if c.min_elongation_possible > c.min_elongation_certain {
            return Err(Self::reject(
                "min_elongation_possible must not exceed min_elongation_certain",
            ));
        }

        Ok(self.criteria)
    }
}
