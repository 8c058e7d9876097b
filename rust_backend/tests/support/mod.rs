//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, TimeZone as _, Utc};
use worldclock::algorithms::SeededRandom;
use worldclock::authority::TzdbAuthority;
use worldclock::db::repositories::FileRepository;
use worldclock::models::{TimeZone, ZoneKind};
use worldclock::parsing::city_name;
use worldclock::services::{DaylightOracle, ZoneCatalogCache, ZoneEngine};

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// Engine over the bundled database with a file store in `dir`.
pub fn file_engine(reference: &str, dir: &Path) -> ZoneEngine {
    let authority = Arc::new(TzdbAuthority::new());
    let store = Arc::new(FileRepository::new(dir));
    ZoneEngine::new(
        authority.clone(),
        authority.as_ref(),
        reference,
        Arc::new(ZoneCatalogCache::new(store)),
        Arc::new(SeededRandom::new(42)),
        DaylightOracle::default(),
    )
    .unwrap()
}

/// A standard zone at a fixed offset.
pub fn zone(id: &str, offset_hours: f64) -> TimeZone {
    TimeZone {
        kind: ZoneKind::Standard(id.to_string()),
        offset_hours,
        display_name: id.to_string(),
        city_name: city_name(id),
        abbreviation: "GMT".to_string(),
        generic_name: None,
        is_off_cycle: false,
        coordinates: None,
    }
}
