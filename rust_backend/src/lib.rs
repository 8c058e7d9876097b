//! World clock zone engine.
//!
//! Resolves zone offsets and names at an instant, keeps a yearly catalog of
//! every zone, picks a set of zones centred on a reference zone, groups
//! DST/Standard variants, builds hourly timelines with daylight flags and
//! ranks zones for search.
//!
//! ```no_run
//! use chrono::Utc;
//! use worldclock::config::EngineConfig;
//! use worldclock::services::ZoneEngine;
//!
//! let engine = ZoneEngine::from_config(&EngineConfig::default()).unwrap();
//! let now = Utc::now();
//! let zones = engine.select_zones_for_timeline(7, now).unwrap();
//! let rows = engine.build_timelines(48, &zones, now).unwrap();
//! assert_eq!(rows.len(), zones.len());
//! ```

pub mod algorithms;
pub mod astro;
pub mod authority;
pub mod config;
pub mod data;
pub mod db;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;
pub mod time;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use models::{GroupedZone, HourFormat, TimeZone, TimelineHour, TimelineRow};
pub use services::ZoneEngine;
