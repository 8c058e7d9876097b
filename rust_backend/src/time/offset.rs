//! UTC offset arithmetic, parsing and formatting.
//!
//! Offsets are carried as signed hours (`f64`) at quarter-hour granularity.
//! Anything that needs equality (deduplication, exact search matches) goes
//! through [`offset_minutes`] instead of comparing floats.

use once_cell::sync::Lazy;
use regex::Regex;

/// Westernmost offset in use.
pub const MIN_OFFSET_HOURS: f64 = -12.0;
/// Easternmost offset in use (Line Islands).
pub const MAX_OFFSET_HOURS: f64 = 14.0;

static GMT_OFFSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"GMT([+-])(\d{2}):(\d{2})").unwrap());

/// Whole minutes represented by an offset in hours.
#[inline]
pub fn offset_minutes(hours: f64) -> i32 {
    (hours * 60.0).round() as i32
}

/// Offset in hours from whole minutes.
#[inline]
pub fn hours_from_minutes(minutes: i32) -> f64 {
    f64::from(minutes) / 60.0
}

/// Snap an offset to the nearest quarter hour and clamp it to the range in use.
pub fn snap_to_quarter_hour(hours: f64) -> f64 {
    if !hours.is_finite() {
        return 0.0;
    }
    ((hours * 4.0).round() / 4.0).clamp(MIN_OFFSET_HOURS, MAX_OFFSET_HOURS)
}

/// Combine the pieces of an offset string into signed hours.
///
/// Returns `None` when the hours or minutes are out of range.
pub fn signed_offset(negative: bool, hours: u32, minutes: u32) -> Option<f64> {
    if hours > 14 || minutes >= 60 {
        return None;
    }
    let magnitude = f64::from(hours) + f64::from(minutes) / 60.0;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a long-form numeric offset such as `"GMT-05:00"`.
///
/// The pattern may appear anywhere in the text. Returns `None` when it is
/// absent, which callers treat as a zero offset.
pub fn parse_gmt_offset(text: &str) -> Option<f64> {
    let captures = GMT_OFFSET.captures(text)?;
    let negative = &captures[1] == "-";
    let hours = captures[2].parse().ok()?;
    let minutes = captures[3].parse().ok()?;
    signed_offset(negative, hours, minutes)
}

/// Format an offset as `GMT±HH:MM`.
pub fn format_gmt_offset(hours: f64) -> String {
    let minutes = offset_minutes(hours);
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.unsigned_abs();
    format!("GMT{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Short display label for an offset: `UTC`, `UTC+5`, `UTC-9:30`.
///
/// Used as the fallback display name of zones the authority cannot name.
pub fn format_utc_label(hours: f64) -> String {
    let minutes = offset_minutes(hours);
    if minutes == 0 {
        return "UTC".to_string();
    }
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.unsigned_abs();
    match minutes % 60 {
        0 => format!("UTC{}{}", sign, minutes / 60),
        rest => format!("UTC{}{}:{:02}", sign, minutes / 60, rest),
    }
}

/// Signed distance from `reference` to `offset`, wrapped into `[-12, 12]`.
pub fn circular_distance(offset: f64, reference: f64) -> f64 {
    let mut distance = offset - reference;
    if distance > 12.0 {
        distance -= 24.0;
    } else if distance < -12.0 {
        distance += 24.0;
    }
    distance
}

/// Distance travelled eastward from `reference` to `offset`, in `[0, 24)`.
///
/// This is the circular distance with the western half shifted by a full
/// day, so sorting on it walks the globe starting at the reference.
pub fn eastward_distance(offset: f64, reference: f64) -> f64 {
    let distance = circular_distance(offset, reference);
    if distance < 0.0 {
        distance + 24.0
    } else {
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gmt_offset() {
        assert_eq!(parse_gmt_offset("GMT-05:00"), Some(-5.0));
        assert_eq!(parse_gmt_offset("GMT+05:45"), Some(5.75));
        assert_eq!(parse_gmt_offset("GMT-09:30"), Some(-9.5));
        assert_eq!(parse_gmt_offset("6/1/2026, GMT+14:00"), Some(14.0));
    }

    #[test]
    fn test_parse_gmt_offset_failures() {
        assert_eq!(parse_gmt_offset("GMT"), None);
        assert_eq!(parse_gmt_offset("UTC-5"), None);
        assert_eq!(parse_gmt_offset("GMT+5:00"), None);
        assert_eq!(parse_gmt_offset("GMT+05:75"), None);
    }

    #[test]
    fn test_format_gmt_offset() {
        assert_eq!(format_gmt_offset(-5.0), "GMT-05:00");
        assert_eq!(format_gmt_offset(5.75), "GMT+05:45");
        assert_eq!(format_gmt_offset(0.0), "GMT+00:00");
        assert_eq!(format_gmt_offset(-9.5), "GMT-09:30");
    }

    #[test]
    fn test_format_utc_label() {
        assert_eq!(format_utc_label(0.0), "UTC");
        assert_eq!(format_utc_label(5.0), "UTC+5");
        assert_eq!(format_utc_label(-9.5), "UTC-9:30");
        assert_eq!(format_utc_label(5.75), "UTC+5:45");
        assert_eq!(format_utc_label(-12.0), "UTC-12");
    }

    #[test]
    fn test_circular_distance_wraps() {
        assert_eq!(circular_distance(3.0, -5.0), 8.0);
        assert_eq!(circular_distance(-10.0, 14.0), 0.0);
        assert_eq!(circular_distance(12.0, -5.0), -7.0);
        assert_eq!(circular_distance(-11.0, 9.0), 4.0);
    }

    #[test]
    fn test_eastward_distance() {
        assert_eq!(eastward_distance(-5.0, -5.0), 0.0);
        assert_eq!(eastward_distance(-6.0, -5.0), 23.0);
        assert_eq!(eastward_distance(1.0, -5.0), 6.0);
    }

    #[test]
    fn test_snap_to_quarter_hour() {
        assert_eq!(snap_to_quarter_hour(5.76), 5.75);
        assert_eq!(snap_to_quarter_hour(-9.4), -9.5);
        assert_eq!(snap_to_quarter_hour(20.0), 14.0);
        assert_eq!(snap_to_quarter_hour(f64::NAN), 0.0);
    }

    #[test]
    fn test_signed_offset_rejects_out_of_range() {
        assert_eq!(signed_offset(true, 12, 0), Some(-12.0));
        assert_eq!(signed_offset(false, 15, 0), None);
        assert_eq!(signed_offset(false, 5, 60), None);
    }
}
