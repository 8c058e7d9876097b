//! Composition root tying the zone services together.
//!
//! ```text
//! EngineConfig ──► ZoneEngine
//!                   ├── ZoneCatalog ── OffsetResolver ── TimeAuthority
//!                   │        └──────── ZoneCatalogCache ── CacheRepository
//!                   ├── ZoneSelector ── RandomSource
//!                   ├── ZoneVariantGrouper
//!                   ├── TimelineBuilder ── DaylightOracle ── SolarCalculator
//!                   └── SearchIndex
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::catalog::{ZoneCatalog, ZoneCatalogCache};
use super::daylight::DaylightOracle;
use super::grouping::ZoneVariantGrouper;
use super::resolver::OffsetResolver;
use super::search::SearchIndex;
use super::timeline::TimelineBuilder;
use crate::algorithms::{RandomSource, SeededRandom, ZoneSelector};
use crate::authority::{TimeAuthority, TzdbAuthority, ZoneDirectory};
use crate::config::EngineConfig;
use crate::db::RepositoryFactory;
use crate::error::{EngineError, EngineResult};
use crate::models::{Coordinates, GroupedZone, HourFormat, TimeZone, TimelineHour, TimelineRow};

/// Reference zone used when neither the configuration nor the system names one.
pub const FALLBACK_REFERENCE_ZONE: &str = "UTC";

/// The public surface: reference zone, selection, timelines, grouping and search.
pub struct ZoneEngine {
    catalog: ZoneCatalog,
    selector: ZoneSelector,
    grouper: ZoneVariantGrouper,
    timeline: TimelineBuilder,
    search: SearchIndex,
    width: usize,
    zone_count: usize,
    hour_format: HourFormat,
}

impl ZoneEngine {
    /// Build an engine from explicit collaborators.
    ///
    /// # Arguments
    /// * `authority` - Offset and name source
    /// * `directory` - Lists the catalog's zone identifiers
    /// * `reference_zone_id` - Identifier of the reference zone
    /// * `cache` - Yearly catalog cache
    /// * `random` - Random source for zone selection
    /// * `oracle` - Daylight lookups for timelines
    ///
    /// # Errors
    /// * `EngineError::InvalidZone` - the authority does not know `reference_zone_id`
    pub fn new(
        authority: Arc<dyn TimeAuthority>,
        directory: &dyn ZoneDirectory,
        reference_zone_id: &str,
        cache: Arc<ZoneCatalogCache>,
        random: Arc<dyn RandomSource>,
        oracle: DaylightOracle,
    ) -> EngineResult<Self> {
        let resolver = OffsetResolver::new(authority);
        resolver
            .offset_at(reference_zone_id, Utc::now())
            .map_err(|e| EngineError::InvalidZone(format!("{}: {}", reference_zone_id, e)))?;

        let defaults = EngineConfig::default();
        Ok(Self {
            catalog: ZoneCatalog::new(resolver, directory, reference_zone_id, cache),
            selector: ZoneSelector::new(random),
            grouper: ZoneVariantGrouper::new(),
            timeline: TimelineBuilder::new(oracle),
            search: SearchIndex::new(),
            width: defaults.timeline.width,
            zone_count: defaults.timeline.zone_count,
            hour_format: defaults.engine.hour_format,
        })
    }

    /// Build an engine over the bundled zone database as configured.
    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let authority = Arc::new(TzdbAuthority::new());

        let reference_zone_id = match &config.engine.reference_zone {
            Some(id) => id.trim().to_string(),
            None => system_zone_id(&authority),
        };

        let store = RepositoryFactory::create(
            config.repository_type()?,
            Some(config.cache.path.as_path()),
        )?;
        let random: Arc<dyn RandomSource> = match config.selector.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(SeededRandom::from_clock()),
        };

        let mut engine = Self::new(
            authority.clone(),
            authority.as_ref(),
            &reference_zone_id,
            Arc::new(ZoneCatalogCache::new(store)),
            random,
            DaylightOracle::default(),
        )?;
        engine.width = config.timeline.width;
        engine.zone_count = config.timeline.zone_count;
        engine.hour_format = config.engine.hour_format;
        log::info!(
            "Zone engine ready: reference {}, {} zones",
            reference_zone_id,
            engine.catalog.zone_ids().len()
        );
        Ok(engine)
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    pub fn reference_zone_id(&self) -> &str {
        self.catalog.reference_zone_id()
    }

    /// Configured timeline width.
    pub fn default_width(&self) -> usize {
        self.width
    }

    /// Configured number of timeline rows.
    pub fn default_zone_count(&self) -> usize {
        self.zone_count
    }

    pub fn hour_format(&self) -> HourFormat {
        self.hour_format
    }

    /// The reference zone with its offset and names at `instant`.
    pub fn resolve_reference_zone(&self, instant: DateTime<Utc>) -> EngineResult<TimeZone> {
        self.catalog.reference_zone(instant)
    }

    /// All catalog zones, reference first, then eastward around the globe.
    pub fn ordered_zones(&self, instant: DateTime<Utc>) -> EngineResult<Vec<TimeZone>> {
        self.catalog.ordered_zones(instant)
    }

    /// Zones for a timeline view, centred on the reference zone.
    ///
    /// The result is ordered by offset and holds an odd number of distinct
    /// offsets, at least three when the catalog has them.
    pub fn select_zones_for_timeline(
        &self,
        count: usize,
        instant: DateTime<Utc>,
    ) -> EngineResult<Vec<TimeZone>> {
        let reference = self.resolve_reference_zone(instant)?;
        let catalog = self.catalog.ordered_zones(instant)?;
        Ok(self.selector.select(&reference, count, &catalog))
    }

    /// Hour columns for `zone`, aligned on the reference zone's current hour.
    pub fn build_timeline(
        &self,
        width: usize,
        zone: &TimeZone,
        instant: DateTime<Utc>,
    ) -> EngineResult<Vec<TimelineHour>> {
        let reference = self.resolve_reference_zone(instant)?;
        self.timeline.build(width, zone, &reference, instant)
    }

    /// One row per zone, the reference zone's row flagged.
    pub fn build_timelines(
        &self,
        width: usize,
        zones: &[TimeZone],
        instant: DateTime<Utc>,
    ) -> EngineResult<Vec<TimelineRow>> {
        let reference = self.resolve_reference_zone(instant)?;
        zones
            .iter()
            .map(|zone| self.timeline.build_row(width, zone, &reference, instant))
            .collect()
    }

    /// Zones collapsed by location, with their DST/Standard alternates.
    pub fn grouped_zones(&self, instant: DateTime<Utc>) -> EngineResult<Vec<GroupedZone>> {
        self.grouper.group(&self.catalog, instant)
    }

    /// Ranked search over the catalog and grouped alternates at `instant`.
    pub fn search(&self, query: &str, instant: DateTime<Utc>) -> EngineResult<Vec<TimeZone>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let reference = self.resolve_reference_zone(instant)?;
        let catalog = self.catalog.ordered_zones(instant)?;
        let groups = self.grouped_zones(instant)?;
        Ok(self.search.search(query, &catalog, &groups, &reference))
    }

    /// A user-defined zone at a fixed offset.
    pub fn custom_zone(
        &self,
        offset_hours: f64,
        name: Option<&str>,
        coordinates: Option<Coordinates>,
    ) -> TimeZone {
        TimeZone::custom(offset_hours, name, coordinates)
    }

    /// The alternate variant of `grouped`, pinned against re-resolution.
    pub fn pin_alternate(&self, grouped: &GroupedZone) -> Option<TimeZone> {
        grouped.alternate.clone().map(|mut zone| {
            zone.is_off_cycle = true;
            zone
        })
    }

    /// Re-resolve `zone` at `instant`.
    ///
    /// Custom and off-cycle zones are returned unchanged. Coordinates the
    /// caller attached are kept when the lookup table has none.
    pub fn refresh_zone(&self, zone: &TimeZone, instant: DateTime<Utc>) -> EngineResult<TimeZone> {
        let id = match zone.zone_id() {
            Some(id) if !zone.is_off_cycle => id,
            _ => return Ok(zone.clone()),
        };
        let mut refreshed = self.catalog.resolver().resolve_zone(id, instant)?;
        if refreshed.coordinates.is_none() {
            refreshed.coordinates = zone.coordinates;
        }
        Ok(refreshed)
    }

    /// Drop every cached yearly entry, in memory and persisted.
    pub fn clear_cache(&self) -> EngineResult<()> {
        self.catalog.cache().clear()
    }
}

/// The system's zone if the bundled database knows it, else `UTC`.
pub fn system_zone_id(authority: &TzdbAuthority) -> String {
    match iana_time_zone::get_timezone() {
        Ok(id) if authority.is_known(&id) => id,
        Ok(id) => {
            log::warn!(
                "System zone {} is unknown, using {}",
                id,
                FALLBACK_REFERENCE_ZONE
            );
            FALLBACK_REFERENCE_ZONE.to_string()
        }
        Err(e) => {
            log::warn!(
                "Cannot determine system zone ({}), using {}",
                e,
                FALLBACK_REFERENCE_ZONE
            );
            FALLBACK_REFERENCE_ZONE.to_string()
        }
    }
}
