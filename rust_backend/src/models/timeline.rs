use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::zone::TimeZone;

/// Clock style used for hour labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HourFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl HourFormat {
    /// Parse `"12h"`/`"24h"` (also `"12"`/`"24"`).
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "12h" | "12" => Ok(Self::TwelveHour),
            "24h" | "24" => Ok(Self::TwentyFourHour),
            _ => Err(format!("Unknown hour format: {}", s)),
        }
    }
}

/// One column of a per-zone timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineHour {
    /// Absolute instant at the start of the column.
    pub instant: DateTime<Utc>,
    /// Wall-clock time in the row's zone.
    pub local: NaiveDateTime,
    pub label_12h: String,
    pub label_24h: String,
    pub is_daylight: bool,
    /// Local midnight: the column starts a new calendar day.
    pub is_date_transition: bool,
    pub is_sunrise_hour: bool,
    pub is_sunset_hour: bool,
    /// "Sunrise 06:42" / "Sunset 19:58" on the transition hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl TimelineHour {
    pub fn label(&self, format: HourFormat) -> &str {
        match format {
            HourFormat::TwelveHour => &self.label_12h,
            HourFormat::TwentyFourHour => &self.label_24h,
        }
    }
}

/// A zone with its timeline, built per request and not cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRow {
    pub zone: TimeZone,
    pub hours: Vec<TimelineHour>,
    pub is_reference_zone: bool,
}
