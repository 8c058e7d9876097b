//! Service layer: the zone components and the engine that composes them.
//!
//! Each service owns one concern (offset resolution, the yearly catalog,
//! grouping, timelines, daylight, search). [`ZoneEngine`] wires them
//! together and is the surface callers use.

pub mod catalog;
pub mod daylight;
pub mod engine;
pub mod grouping;
pub mod resolver;
pub mod search;
pub mod timeline;

#[cfg(test)]
mod grouping_tests;

pub use catalog::{ZoneCatalog, ZoneCatalogCache};
pub use daylight::DaylightOracle;
pub use engine::ZoneEngine;
pub use grouping::ZoneVariantGrouper;
pub use resolver::{OffsetResolver, ResolvedOffset};
pub use search::{SearchHit, SearchIndex};
pub use timeline::TimelineBuilder;
