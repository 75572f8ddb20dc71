use serde::{Deserialize, Serialize};

use crate::constants::{Degree, GORONTALO_LATITUDE, GORONTALO_LONGITUDE};
use crate::hilal_errors::HilalError;

/// Geographic location of the observation site.
///
/// Units
/// -----
/// * `latitude`: degrees, north positive, within `[-90, 90]`.
/// * `longitude`: degrees, east positive, within `[-180, 180]`.
///
/// Both values are checked at construction, so an `ObserverLocation` obtained through
/// [`ObserverLocation::new`] never feeds `NaN` or out-of-range angles into the projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    latitude: Degree,
    longitude: Degree,
    pub name: Option<String>,
}

impl ObserverLocation {
    /// Create a new observer location from geographic coordinates.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`: geographic latitude in **degrees**.
    /// * `longitude`: geographic longitude in **degrees** (east positive).
    /// * `name`: optional site name.
    ///
    /// Errors
    /// ----------
    /// * [`HilalError::NonFiniteValue`] for `NaN` or infinite inputs.
    /// * [`HilalError::InvalidLatitude`] / [`HilalError::InvalidLongitude`] for out-of-range inputs.
    pub fn new(
        latitude: Degree,
        longitude: Degree,
        name: Option<String>,
    ) -> Result<ObserverLocation, HilalError> {
        let err = if !latitude.is_finite() {
            Some(HilalError::NonFiniteValue("latitude".into()))
        } else if !longitude.is_finite() {
            Some(HilalError::NonFiniteValue("longitude".into()))
        } else if !(-90.0..=90.0).contains(&latitude) {
            Some(HilalError::InvalidLatitude(latitude))
        } else if !(-180.0..=180.0).contains(&longitude) {
            Some(HilalError::InvalidLongitude(longitude))
        } else {
            None
        };
        if let Some(err) = err {
            tracing::warn!(latitude, longitude, %err, "rejected observer location");
            return Err(err);
        }

        Ok(ObserverLocation {
            latitude,
            longitude,
            name,
        })
    }

    /// The Gorontalo observation site, the default deployment.
    pub fn gorontalo() -> ObserverLocation {
        ObserverLocation {
            latitude: GORONTALO_LATITUDE,
            longitude: GORONTALO_LONGITUDE,
            name: Some("Gorontalo".to_string()),
        }
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    /// Re-check a location that bypassed [`ObserverLocation::new`], e.g. through deserialization.
    pub fn validate(&self) -> Result<(), HilalError> {
        ObserverLocation::new(self.latitude, self.longitude, None).map(|_| ())
    }
}

impl Default for ObserverLocation {
    fn default() -> Self {
        Self::gorontalo()
    }
}
