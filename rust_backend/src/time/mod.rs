//! Calendar helpers shared by the catalog and the timeline builder.
//!
//! - [`offset`]: offset parsing/formatting and circular distance
//! - anchor instants used as summer/winter samples of a year
//! - local wall-clock conversion and hour labels

pub mod offset;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

pub use offset::{
    circular_distance, eastward_distance, format_gmt_offset, format_utc_label, offset_minutes,
    parse_gmt_offset, snap_to_quarter_hour,
};

/// The two sample instants of a calendar year.
///
/// June 1 stands in for "summer" and December 31 for "winter". They are a
/// proxy for the offsets a zone uses during the year, not its transition dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorInstants {
    pub summer: DateTime<Utc>,
    pub winter: DateTime<Utc>,
}

/// Anchor instants (12:00 UTC on June 1 and December 31) for `year`.
///
/// Returns `None` only for years outside chrono's supported range.
pub fn anchor_instants(year: i32) -> Option<AnchorInstants> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0)?;
    let summer = NaiveDate::from_ymd_opt(year, 6, 1)?.and_time(noon).and_utc();
    let winter = NaiveDate::from_ymd_opt(year, 12, 31)?.and_time(noon).and_utc();
    Some(AnchorInstants { summer, winter })
}

/// Calendar year of an instant, in UTC.
pub fn utc_year(instant: DateTime<Utc>) -> i32 {
    instant.year()
}

/// Wall-clock time at `instant` in a zone `offset_hours` from UTC.
pub fn local_wall_time(instant: DateTime<Utc>, offset_hours: f64) -> NaiveDateTime {
    instant.naive_utc() + Duration::minutes(i64::from(offset_minutes(offset_hours)))
}

/// UTC instant of a wall-clock time in a zone `offset_hours` from UTC.
pub fn utc_from_wall_time(local: NaiveDateTime, offset_hours: f64) -> DateTime<Utc> {
    (local - Duration::minutes(i64::from(offset_minutes(offset_hours)))).and_utc()
}

/// Drop minutes, seconds and sub-seconds.
pub fn truncate_to_hour(local: NaiveDateTime) -> NaiveDateTime {
    let hour = NaiveTime::from_hms_opt(local.hour(), 0, 0).unwrap_or_default();
    local.date().and_time(hour)
}

/// 24-hour label: `"07"` on the hour, `"07:30"` otherwise.
pub fn label_24h(local: NaiveDateTime) -> String {
    if local.minute() == 0 {
        local.format("%H").to_string()
    } else {
        local.format("%H:%M").to_string()
    }
}

/// 12-hour label: `"7am"`, `"12pm"`, `"5:30am"`.
pub fn label_12h(local: NaiveDateTime) -> String {
    let (is_pm, hour) = local.hour12();
    let suffix = if is_pm { "pm" } else { "am" };
    if local.minute() == 0 {
        format!("{}{}", hour, suffix)
    } else {
        format!("{}:{:02}{}", hour, local.minute(), suffix)
    }
}
