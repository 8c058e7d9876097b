//! Deterministic fakes shared by unit tests.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};

use crate::authority::{
    AuthorityError, AuthorityResult, FormatHint, TimeAuthority, ZoneDirectory,
};
use crate::models::{Coordinates, TimeZone, ZoneKind};
use crate::time::offset::format_gmt_offset;

/// A standard zone with a fixed offset and derived names.
pub fn zone(id: &str, offset_hours: f64) -> TimeZone {
    TimeZone {
        kind: ZoneKind::Standard(id.to_string()),
        offset_hours,
        display_name: format!("{} Time", crate::parsing::city_name(id)),
        city_name: crate::parsing::city_name(id),
        abbreviation: "GMT".to_string(),
        generic_name: None,
        is_off_cycle: false,
        coordinates: None,
    }
}

pub fn zone_at(id: &str, offset_hours: f64, latitude: f64, longitude: f64) -> TimeZone {
    TimeZone {
        coordinates: Some(Coordinates::new(latitude, longitude)),
        ..zone(id, offset_hours)
    }
}

/// Names reported for one variant of a fake zone.
#[derive(Debug, Clone, Default)]
pub struct FakeNames {
    pub long: Option<String>,
    pub short: Option<String>,
    pub generic: Option<String>,
}

#[derive(Debug, Clone)]
struct FakeZone {
    /// Offset from April through October, in hours.
    summer: f64,
    /// Offset for the rest of the year.
    winter: f64,
    summer_names: FakeNames,
    winter_names: FakeNames,
}

/// In-memory time authority with hand-written offsets.
///
/// A zone is in its summer offset for UTC months April to October, which
/// covers the June 1 anchor, and in its winter offset otherwise.
#[derive(Debug, Clone, Default)]
pub struct FixedAuthority {
    zones: HashMap<String, FakeZone>,
    order: Vec<String>,
    unavailable: bool,
}

impl FixedAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone without daylight saving.
    pub fn with_zone(self, id: &str, offset_hours: f64) -> Self {
        self.with_seasonal_zone(id, offset_hours, offset_hours)
    }

    pub fn with_seasonal_zone(mut self, id: &str, summer: f64, winter: f64) -> Self {
        if !self.zones.contains_key(id) {
            self.order.push(id.to_string());
        }
        self.zones.insert(
            id.to_string(),
            FakeZone {
                summer,
                winter,
                summer_names: FakeNames::default(),
                winter_names: FakeNames::default(),
            },
        );
        self
    }

    /// Names for both seasons; `zone` must already be registered.
    pub fn with_names(mut self, id: &str, summer: FakeNames, winter: FakeNames) -> Self {
        if let Some(zone) = self.zones.get_mut(id) {
            zone.summer_names = summer;
            zone.winter_names = winter;
        }
        self
    }

    /// Make every query fail with [`AuthorityError::Unavailable`].
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    fn is_summer(instant: DateTime<Utc>) -> bool {
        (4..=10).contains(&instant.month())
    }
}

impl TimeAuthority for FixedAuthority {
    fn format(
        &self,
        zone_id: &str,
        instant: DateTime<Utc>,
        hint: FormatHint,
    ) -> AuthorityResult<Option<String>> {
        if self.unavailable {
            return Err(AuthorityError::Unavailable("fake authority offline".to_string()));
        }
        let zone = self
            .zones
            .get(zone_id)
            .ok_or_else(|| AuthorityError::UnknownZone(zone_id.to_string()))?;
        let (offset, names) = if Self::is_summer(instant) {
            (zone.summer, &zone.summer_names)
        } else {
            (zone.winter, &zone.winter_names)
        };
        Ok(match hint {
            FormatHint::LongOffset if offset == 0.0 => Some("GMT".to_string()),
            FormatHint::LongOffset => Some(format_gmt_offset(offset)),
            FormatHint::LongName => names.long.clone(),
            FormatHint::ShortName => names.short.clone(),
            FormatHint::GenericName => names.generic.clone(),
        })
    }
}

impl ZoneDirectory for FixedAuthority {
    fn zone_ids(&self) -> Vec<String> {
        self.order.clone()
    }
}

pub fn names(long: &str, short: &str) -> FakeNames {
    FakeNames {
        long: Some(long.to_string()),
        short: Some(short.to_string()),
        generic: None,
    }
}

/// Four-zone world: New York and Paris observe DST, Tokyo and Kolkata do not.
pub fn small_world() -> FixedAuthority {
    FixedAuthority::new()
        .with_seasonal_zone("America/New_York", -4.0, -5.0)
        .with_names(
            "America/New_York",
            names("Eastern Daylight Time", "EDT"),
            names("Eastern Standard Time", "EST"),
        )
        .with_seasonal_zone("Europe/Paris", 2.0, 1.0)
        .with_names(
            "Europe/Paris",
            names("Central European Summer Time", "CEST"),
            names("Central European Standard Time", "CET"),
        )
        .with_zone("Asia/Kolkata", 5.5)
        .with_names(
            "Asia/Kolkata",
            names("India Standard Time", "IST"),
            names("India Standard Time", "IST"),
        )
        .with_zone("Asia/Tokyo", 9.0)
        .with_names(
            "Asia/Tokyo",
            names("Japan Standard Time", "JST"),
            names("Japan Standard Time", "JST"),
        )
}
