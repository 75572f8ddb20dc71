#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use hifitime::Epoch;
use hilal::coordinates::HorizontalCoord;
use hilal::engine::{HilalEngine, PositionSnapshot};

pub fn target_instant() -> Epoch {
    Epoch::from_gregorian_utc(2026, 2, 17, 10, 5, 0, 0)
}

pub fn target_snapshot() -> PositionSnapshot {
    HilalEngine::default().snapshot(&target_instant())
}

pub fn assert_horizontal_close(actual: &HorizontalCoord, expected: &HorizontalCoord, epsilon: f64) {
    assert_abs_diff_eq!(actual.azimuth, expected.azimuth, epsilon = epsilon);
    assert_abs_diff_eq!(actual.altitude, expected.altitude, epsilon = epsilon);
}
