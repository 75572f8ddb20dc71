use thiserror::Error;

#[derive(Error, Debug)]
pub enum HilalError {
    #[error("Latitude must lie within [-90, 90] degrees, got {0}")]
    InvalidLatitude(f64),

    #[error("Longitude must lie within [-180, 180] degrees, got {0}")]
    InvalidLongitude(f64),

    #[error("Non-finite value for {0}")]
    NonFiniteValue(String),

    #[error("Invalid visibility criteria: {0}")]
    InvalidCriteria(String),

    #[error("UTC offset must lie within [-14, 14] hours, got {0}")]
    InvalidUtcOffset(f64),

    #[error("Unable to parse time instant: {0}")]
    InvalidInstant(String),

    #[error("Time library error: {0}")]
    TimeError(#[from] hifitime::HifitimeError),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON (de)serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PartialEq for HilalError {
    fn eq(&self, other: &Self) -> bool {
        use HilalError::*;
        match (self, other) {
            (InvalidLatitude(a), InvalidLatitude(b)) => a.to_bits() == b.to_bits(),
            (InvalidLongitude(a), InvalidLongitude(b)) => a.to_bits() == b.to_bits(),
            (NonFiniteValue(a), NonFiniteValue(b)) => a == b,
            (InvalidCriteria(a), InvalidCriteria(b)) => a == b,
            (InvalidUtcOffset(a), InvalidUtcOffset(b)) => a.to_bits() == b.to_bits(),
            (InvalidInstant(a), InvalidInstant(b)) => a == b,

            // wrapped library errors only compare by variant
            (TimeError(_), TimeError(_)) => true,
            (IoError(_), IoError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            _ => false,
        }
    }
}
