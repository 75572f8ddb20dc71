use hifitime::{Epoch, Unit};
use std::str::FromStr;

use crate::constants::{
    Degree, Hours, JulianDay, DEG_PER_HOUR, J2000_JD, MAX_UTC_OFFSET_HOURS,
};
use crate::coordinates::normalize_degrees;
use crate::hilal_errors::HilalError;

/// Built-in fixed-target instant: sunset (ghurub) observation on 2026-02-17, 10:05:00 UTC.
pub const TARGET_GHURUB_UTC: &str = "2026-02-17T10:05:00";

/// Broken-down UTC calendar fields of an instant.
///
/// `second` carries the sub-second part of the instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcCalendar {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl UtcCalendar {
    /// Decompose an epoch into its UTC Gregorian fields.
    pub fn from_epoch(epoch: &Epoch) -> Self {
        let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
        UtcCalendar {
            year,
            month,
            day,
            hour,
            minute,
            second: second as f64 + nanos as f64 * 1e-9,
        }
    }

    /// Fractional UTC hour of the day.
    pub fn ut_hours(&self) -> Hours {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }
}

/// Parse a UTC instant in the format `YYYY-MM-DDTHH:MM:SS[.fff]`.
///
/// Arguments
/// ---------
/// * `instant`: the textual instant, interpreted in UTC when no time scale is given
///
/// Return
/// ------
/// * the corresponding [`Epoch`], or [`HilalError::InvalidInstant`] if parsing fails
pub fn parse_utc_instant(instant: &str) -> Result<Epoch, HilalError> {
    Epoch::from_str(instant.trim()).map_err(|e| HilalError::InvalidInstant(format!("{instant}: {e}")))
}

/// Transformation from a UTC instant to Julian Day.
///
/// Standard Gregorian-calendar algorithm: January and February are counted as months 13 and 14
/// of the previous year, and the Gregorian century correction `B = 2 - A + floor(A/4)` is added.
///
/// ```text
/// JD = floor(365.25 (Y + 4716)) + floor(30.6001 (M + 1)) + D + B - 1524.5 + dayFraction
/// ```
///
/// Argument
/// --------
/// * `epoch`: the instant to convert
///
/// Return
/// ------
/// * the Julian Day of the instant
pub fn julian_day(epoch: &Epoch) -> JulianDay {
    julian_day_from_calendar(&UtcCalendar::from_epoch(epoch))
}

/// Same as [`julian_day`], starting from already decomposed UTC fields.
pub fn julian_day_from_calendar(cal: &UtcCalendar) -> JulianDay {
    let (mut year, mut month) = (cal.year as f64, cal.month as f64);
    if cal.month <= 2 {
        year -= 1.0;
        month += 12.0;
    }

    let century = (year / 100.0).floor();
    let gregorian_correction = 2.0 - century + (century / 4.0).floor();

    let jd0 = (365.25 * (year + 4716.0)).floor()
        + (30.6001 * (month + 1.0)).floor()
        + cal.day as f64
        + gregorian_correction
        - 1524.5;

    jd0 + cal.ut_hours() / 24.0
}

/// Greenwich Mean Sidereal Time in degrees, normalized to `[0, 360)`.
///
/// # Arguments
/// * `jd` - Julian Day of the instant
/// * `ut_hours` - fractional UTC hour of day at the same instant
pub fn gmst_deg(jd: JulianDay, ut_hours: Hours) -> Degree {
    let days_since_j2000 = jd - J2000_JD;
    normalize_degrees(100.4606184 + 0.9856473662862 * days_since_j2000 + ut_hours * DEG_PER_HOUR)
}

/// Local Sidereal Time in degrees, normalized to `[0, 360)`.
///
/// `LST = (GMST + longitude) mod 360`, longitude east positive.
pub fn local_sidereal_time(jd: JulianDay, ut_hours: Hours, longitude: Degree) -> Degree {
    normalize_degrees(gmst_deg(jd, ut_hours) + longitude)
}

/// Check that a civil UTC offset is finite and within `[-14, 14]` hours.
pub fn validate_utc_offset(offset_hours: Hours) -> Result<Hours, HilalError> {
    if !offset_hours.is_finite() {
        tracing::warn!(offset_hours, "rejected non-finite UTC offset");
        return Err(HilalError::NonFiniteValue("utc_offset_hours".into()));
    }
    if offset_hours.abs() > MAX_UTC_OFFSET_HOURS {
        tracing::warn!(offset_hours, "rejected out-of-range UTC offset");
        return Err(HilalError::InvalidUtcOffset(offset_hours));
    }
    Ok(offset_hours)
}

/// Format the civil time at a fixed UTC offset as `YYYY-MM-DD HH:MM:SS`.
///
/// Sub-second digits are truncated.
pub fn format_local_time(epoch: &Epoch, offset_hours: Hours) -> String {
    let local = *epoch + Unit::Hour * offset_hours;
    let (y, m, d, hh, mm, ss, _) = local.to_gregorian_utc();
    format!("{y:04}-{m:02}-{d:02} {hh:02}:{mm:02}:{ss:02}")
}

/// Format the UTC clock time as `HH:MM:SS`.
pub fn format_utc_clock(epoch: &Epoch) -> String {
    let (_, _, _, hh, mm, ss, _) = epoch.to_gregorian_utc();
    format!("{hh:02}:{mm:02}:{ss:02}")
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_julian_day_reference_dates() {
        let j2000 = Epoch::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0);
        assert_eq!(julian_day(&j2000), 2451545.0);

        // Meeus, Astronomical Algorithms, example 7.a variant
        let date = Epoch::from_gregorian_utc(1987, 1, 27, 0, 0, 0, 0);
        assert_eq!(julian_day(&date), 2446822.5);

        let target = Epoch::from_gregorian_utc(2026, 2, 17, 10, 5, 0, 0);
        assert_eq!(julian_day(&target), 2461088.920138889);
    }

    #[test]
    fn test_julian_day_sub_second() {
        let a = Epoch::from_gregorian_utc(2026, 2, 17, 10, 5, 0, 0);
        let b = Epoch::from_gregorian_utc(2026, 2, 17, 10, 5, 0, 500_000_000);
        let diff = julian_day(&b) - julian_day(&a);
        assert_abs_diff_eq!(diff, 0.5 / 86400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ut_hours() {
        let cal = UtcCalendar::from_epoch(&Epoch::from_gregorian_utc(2026, 2, 17, 10, 5, 0, 0));
        assert_abs_diff_eq!(cal.ut_hours(), 10.0 + 5.0 / 60.0, epsilon = 1e-15);
    }

    #[test]
    fn test_gmst_at_j2000_noon() {
        assert_abs_diff_eq!(gmst_deg(J2000_JD, 12.0), 280.4606184, epsilon = 1e-10);
    }

    #[test]
    fn test_local_sidereal_time_wraps() {
        let lst = local_sidereal_time(J2000_JD, 12.0, 100.0);
        assert_abs_diff_eq!(lst, 20.4606184, epsilon = 1e-10);

        let lst = local_sidereal_time(J2000_JD, 12.0, -180.0);
        assert_abs_diff_eq!(lst, 100.4606184, epsilon = 1e-10);
    }

    #[test]
    fn test_parse_utc_instant() {
        let epoch = parse_utc_instant(TARGET_GHURUB_UTC).unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(2026, 2, 17, 10, 5, 0, 0));

        assert!(matches!(
            parse_utc_instant("not a date"),
            Err(HilalError::InvalidInstant(_))
        ));
    }

    #[test]
    fn test_format_local_time() {
        let epoch = Epoch::from_gregorian_utc(2026, 2, 17, 10, 5, 0, 0);
        assert_eq!(format_local_time(&epoch, 8.0), "2026-02-17 18:05:00");
        assert_eq!(format_local_time(&epoch, -11.0), "2026-02-16 23:05:00");
        assert_eq!(format_utc_clock(&epoch), "10:05:00");
    }

    #[test]
    fn test_validate_utc_offset() {
        assert_eq!(validate_utc_offset(8.0).unwrap(), 8.0);
        assert_eq!(
            validate_utc_offset(15.0),
            Err(HilalError::InvalidUtcOffset(15.0))
        );
        assert!(validate_utc_offset(f64::NAN).is_err());
    }
}
