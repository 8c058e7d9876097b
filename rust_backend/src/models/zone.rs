use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::parsing::zone_id;
use crate::time::offset::{format_utc_label, offset_minutes, snap_to_quarter_hour};

/// Geographic position used for sunrise/sunset computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Degrees north, in `[-90, 90]`.
    pub latitude: f64,
    /// Degrees east, in `[-180, 180]`.
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and in range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// How a zone is identified.
///
/// Custom zones have no database identifier; their synthetic id is derived
/// from the offset and never parsed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    /// A zone database identifier such as `Europe/Paris`.
    Standard(String),
    /// A user-defined fixed offset, in whole minutes.
    Custom { offset_minutes: i32 },
}

/// One resolvable zone at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeZone {
    pub kind: ZoneKind,
    /// Signed hours from UTC, quarter-hour granularity.
    pub offset_hours: f64,
    /// Long name ("Eastern Standard Time"), or `UTC±offset` when unknown.
    pub display_name: String,
    /// Short place name derived from the identifier.
    pub city_name: String,
    /// Short code of at most five characters, `"GMT"` as last resort.
    pub abbreviation: String,
    /// Season-independent name ("Eastern Time"), when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,
    /// Pinned to the DST/Standard variant that does not match the reference
    /// instant; exempt from re-resolution on date change.
    #[serde(default)]
    pub is_off_cycle: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl TimeZone {
    /// Build a user-defined zone at a fixed offset.
    ///
    /// The offset is snapped to quarter hours and clamped to `[-12, 14]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldclock::models::TimeZone;
    ///
    /// let zone = TimeZone::custom(5.76, Some("Base camp"), None);
    /// assert_eq!(zone.offset_hours, 5.75);
    /// assert_eq!(zone.id(), "custom-5.75");
    /// assert!(zone.is_custom());
    /// ```
    pub fn custom(offset_hours: f64, name: Option<&str>, coordinates: Option<Coordinates>) -> Self {
        let offset_hours = snap_to_quarter_hour(offset_hours);
        let label = format_utc_label(offset_hours);
        let city_name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map_or_else(|| label.clone(), str::to_string);
        Self {
            kind: ZoneKind::Custom {
                offset_minutes: offset_minutes(offset_hours),
            },
            offset_hours,
            display_name: label,
            city_name,
            abbreviation: "GMT".to_string(),
            generic_name: None,
            is_off_cycle: false,
            coordinates: coordinates.filter(Coordinates::is_valid),
        }
    }

    /// Stable identifier: the database id, or `custom-<offset>`.
    pub fn id(&self) -> Cow<'_, str> {
        match &self.kind {
            ZoneKind::Standard(id) => Cow::Borrowed(id),
            ZoneKind::Custom { .. } => Cow::Owned(format!("custom-{}", self.offset_hours)),
        }
    }

    /// Database identifier, `None` for custom zones.
    pub fn zone_id(&self) -> Option<&str> {
        match &self.kind {
            ZoneKind::Standard(id) => Some(id),
            ZoneKind::Custom { .. } => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.kind, ZoneKind::Custom { .. })
    }

    /// Offset in whole minutes, the key used for offset equality.
    pub fn offset_minutes(&self) -> i32 {
        offset_minutes(self.offset_hours)
    }

    /// Region (first identifier segment) of a standard zone.
    pub fn region(&self) -> Option<&str> {
        self.zone_id().and_then(zone_id::region)
    }
}

/// All DST/Standard variants of one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedZone {
    /// Base location ("Paris"), underscores replaced by spaces.
    pub location: String,
    /// Region ("Europe"), empty for single-segment identifiers.
    pub region: String,
    /// Variant matching the reference instant.
    pub current: TimeZone,
    /// The other variant, only when the location has two distinct offsets.
    pub alternate: Option<TimeZone>,
    /// Every distinct-offset variant, current first.
    pub variants: Vec<TimeZone>,
}

impl GroupedZone {
    pub fn has_alternate(&self) -> bool {
        self.alternate.is_some()
    }
}
