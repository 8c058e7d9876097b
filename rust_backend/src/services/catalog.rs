//! Zone catalog and its yearly cache.
//!
//! Resolving every known zone is the expensive part of the engine, so the
//! catalog resolves each zone once per year at two anchor instants and
//! keeps the result in a [`ZoneCatalogCache`]. Queries for an arbitrary
//! instant pick whichever anchor set matches the reference zone's offset at
//! that instant.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use super::resolver::OffsetResolver;
use crate::authority::ZoneDirectory;
use crate::db::repositories::LocalRepository;
use crate::db::repository::{CacheRepository, RepositoryError};
use crate::error::{EngineError, EngineResult};
use crate::models::{Season, TimeZone, YearlyCacheEntry};
use crate::time::offset::eastward_distance;
use crate::time::{anchor_instants, utc_year};

/// Offsets closer than this are considered equal when choosing a season.
pub const SEASON_TOLERANCE_HOURS: f64 = 0.1;

/// Yearly catalog entries, in memory and in a persisted store.
///
/// Owned by the composition root and shared with the catalog. A stored
/// entry that fails to decode or validate causes the whole store to be
/// cleared; the entry is then recomputed on demand.
pub struct ZoneCatalogCache {
    entries: RwLock<HashMap<i32, Arc<YearlyCacheEntry>>>,
    store: Arc<dyn CacheRepository>,
}

impl ZoneCatalogCache {
    pub fn new(store: Arc<dyn CacheRepository>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            store,
        }
    }

    /// Cache backed by a private in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(LocalRepository::new()))
    }

    pub fn store(&self) -> &Arc<dyn CacheRepository> {
        &self.store
    }

    /// Entry for `year`, from memory or the persisted store.
    pub fn get(&self, year: i32) -> Option<Arc<YearlyCacheEntry>> {
        if let Some(entry) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            return Some(Arc::clone(entry));
        }

        let entry = Arc::new(self.load_persisted(year)?);
        log::info!(
            "Loaded zone catalog for {} ({} zones)",
            year,
            entry.summer_zones.len()
        );
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Some(Arc::clone(entries.entry(year).or_insert(entry)))
    }

    /// Keep `entry` in memory and persist it.
    ///
    /// A store failure is logged; the in-memory entry is still used.
    pub fn insert(&self, entry: YearlyCacheEntry) -> Arc<YearlyCacheEntry> {
        let year = entry.year;
        if let Err(e) = self.persist(&entry) {
            log::warn!("Failed to persist zone catalog for {}: {}", year, e);
        }
        let entry = Arc::new(entry);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(year, Arc::clone(&entry));
        entry
    }

    /// Drop every entry, in memory and persisted.
    pub fn clear(&self) -> EngineResult<()> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.store.clear()?;
        Ok(())
    }

    fn persist(&self, entry: &YearlyCacheEntry) -> Result<(), RepositoryError> {
        entry
            .validate_shape(entry.year)
            .map_err(RepositoryError::ValidationError)?;
        let payload = serde_json::to_string(entry)?;
        self.store.store(entry.year, &payload)
    }

    fn load_persisted(&self, year: i32) -> Option<YearlyCacheEntry> {
        let payload = match self.store.load(year) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read zone catalog for {}: {}", year, e);
                return None;
            }
        };

        match decode_entry(&payload, year) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!(
                    "Discarding persisted zone catalog: entry for {} is invalid ({})",
                    year,
                    e
                );
                if let Err(e) = self.store.clear() {
                    log::warn!("Failed to clear zone catalog store: {}", e);
                }
                None
            }
        }
    }
}

/// Deserialize and shape-check a stored entry.
fn decode_entry(payload: &str, year: i32) -> Result<YearlyCacheEntry, RepositoryError> {
    let deserializer = &mut serde_json::Deserializer::from_str(payload);
    let entry: YearlyCacheEntry = serde_path_to_error::deserialize(deserializer).map_err(|e| {
        RepositoryError::SerializationError(format!("at `{}`: {}", e.path(), e.inner()))
    })?;
    entry
        .validate_shape(year)
        .map_err(RepositoryError::ValidationError)?;
    Ok(entry)
}

/// Every known zone, resolved per year and ordered around the reference zone.
pub struct ZoneCatalog {
    resolver: OffsetResolver,
    zone_ids: Vec<String>,
    reference_zone_id: String,
    cache: Arc<ZoneCatalogCache>,
}

impl ZoneCatalog {
    /// Build a catalog over every identifier `directory` lists.
    pub fn new(
        resolver: OffsetResolver,
        directory: &dyn ZoneDirectory,
        reference_zone_id: &str,
        cache: Arc<ZoneCatalogCache>,
    ) -> Self {
        Self::with_zone_ids(resolver, directory.zone_ids(), reference_zone_id, cache)
    }

    pub fn with_zone_ids(
        resolver: OffsetResolver,
        zone_ids: Vec<String>,
        reference_zone_id: &str,
        cache: Arc<ZoneCatalogCache>,
    ) -> Self {
        Self {
            resolver,
            zone_ids,
            reference_zone_id: reference_zone_id.to_string(),
            cache,
        }
    }

    pub fn zone_ids(&self) -> &[String] {
        &self.zone_ids
    }

    pub fn reference_zone_id(&self) -> &str {
        &self.reference_zone_id
    }

    pub fn resolver(&self) -> &OffsetResolver {
        &self.resolver
    }

    pub fn cache(&self) -> &Arc<ZoneCatalogCache> {
        &self.cache
    }

    /// The yearly entry for `year`, computed on first use.
    ///
    /// # Errors
    /// * `EngineError::YearOutOfRange` - the anchors of `year` cannot be represented
    pub fn entry(&self, year: i32) -> EngineResult<Arc<YearlyCacheEntry>> {
        if let Some(entry) = self.cache.get(year) {
            return Ok(entry);
        }
        let entry = self.compute(year)?;
        log::info!(
            "Computed zone catalog for {} ({} zones)",
            year,
            entry.summer_zones.len()
        );
        Ok(self.cache.insert(entry))
    }

    fn compute(&self, year: i32) -> EngineResult<YearlyCacheEntry> {
        let anchors = anchor_instants(year).ok_or(EngineError::YearOutOfRange(year))?;
        let mut summer_zones = Vec::with_capacity(self.zone_ids.len());
        let mut winter_zones = Vec::with_capacity(self.zone_ids.len());

        for id in &self.zone_ids {
            let summer = self.resolver.resolve_zone(id, anchors.summer);
            let winter = self.resolver.resolve_zone(id, anchors.winter);
            match (summer, winter) {
                (Ok(summer), Ok(winter)) => {
                    summer_zones.push(summer);
                    winter_zones.push(winter);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::warn!("Skipping zone {}: {}", id, e);
                }
            }
        }

        Ok(YearlyCacheEntry {
            summer_zones,
            winter_zones,
            reference_zone_id: self.reference_zone_id.clone(),
            year,
        })
    }

    /// The reference zone resolved at exactly `instant`.
    pub fn reference_zone(&self, instant: DateTime<Utc>) -> EngineResult<TimeZone> {
        Ok(self.resolver.resolve_zone(&self.reference_zone_id, instant)?)
    }

    /// Which anchor set describes `instant`.
    ///
    /// Compares the reference zone's offset at `instant` with its offsets at
    /// the two anchors; summer wins ties and mismatches.
    pub fn season_at(
        &self,
        instant: DateTime<Utc>,
        entry: &YearlyCacheEntry,
    ) -> EngineResult<Season> {
        let current = self.resolver.offset_at(&self.reference_zone_id, instant)?;
        let anchored = |season: Season| -> EngineResult<f64> {
            let cached = entry
                .zones(season)
                .iter()
                .find(|z| z.zone_id() == Some(self.reference_zone_id.as_str()))
                .map(|z| z.offset_hours);
            match cached {
                Some(offset) => Ok(offset),
                None => {
                    let anchors = anchor_instants(entry.year)
                        .ok_or(EngineError::YearOutOfRange(entry.year))?;
                    let at = match season {
                        Season::Summer => anchors.summer,
                        Season::Winter => anchors.winter,
                    };
                    Ok(self.resolver.offset_at(&self.reference_zone_id, at)?)
                }
            }
        };

        if (current - anchored(Season::Summer)?).abs() < SEASON_TOLERANCE_HOURS {
            return Ok(Season::Summer);
        }
        if (current - anchored(Season::Winter)?).abs() < SEASON_TOLERANCE_HOURS {
            return Ok(Season::Winter);
        }
        Ok(Season::Summer)
    }

    /// Catalog zones valid at `instant`, in catalog order.
    pub fn zones_at(&self, instant: DateTime<Utc>) -> EngineResult<Vec<TimeZone>> {
        let entry = self.entry(utc_year(instant))?;
        let season = self.season_at(instant, &entry)?;
        Ok(entry.zones(season).to_vec())
    }

    /// Zones ordered around the globe starting at the reference zone.
    ///
    /// The reference zone comes first, resolved at `instant`; the rest follow
    /// by eastward distance from it, ties broken by identifier.
    pub fn ordered_zones(&self, instant: DateTime<Utc>) -> EngineResult<Vec<TimeZone>> {
        let reference = self.reference_zone(instant)?;
        let reference_offset = reference.offset_hours;

        let mut others: Vec<TimeZone> = self
            .zones_at(instant)?
            .into_iter()
            .filter(|z| z.zone_id() != Some(self.reference_zone_id.as_str()))
            .collect();
        others.sort_by(|a, b| {
            eastward_distance(a.offset_hours, reference_offset)
                .total_cmp(&eastward_distance(b.offset_hours, reference_offset))
                .then_with(|| a.id().cmp(&b.id()))
        });

        let mut ordered = Vec::with_capacity(others.len() + 1);
        ordered.push(reference);
        ordered.extend(others);
        Ok(ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{small_world, zone};

    #[test]
    fn test_decode_entry_reports_path() {
        let payload = r#"{"summerZones": 3, "winterZones": [], "referenceZoneId": "UTC", "year": 2026}"#;
        let err = decode_entry(payload, 2026).unwrap_err();
        assert!(err.to_string().contains("summerZones"), "{}", err);
    }

    #[test]
    fn test_decode_entry_rejects_wrong_year() {
        let entry = YearlyCacheEntry {
            summer_zones: vec![zone("Asia/Tokyo", 9.0)],
            winter_zones: vec![zone("Asia/Tokyo", 9.0)],
            reference_zone_id: "Asia/Tokyo".to_string(),
            year: 2025,
        };
        let payload = serde_json::to_string(&entry).unwrap();
        assert!(decode_entry(&payload, 2025).is_ok());
        assert!(matches!(
            decode_entry(&payload, 2026),
            Err(RepositoryError::ValidationError(_))
        ));
    }

    #[test]
    fn test_ids_come_from_directory() {
        let authority = Arc::new(small_world());
        let catalog = ZoneCatalog::new(
            OffsetResolver::new(authority.clone()),
            authority.as_ref(),
            "Europe/Paris",
            Arc::new(ZoneCatalogCache::in_memory()),
        );
        assert_eq!(catalog.zone_ids().len(), 4);
        assert_eq!(catalog.reference_zone_id(), "Europe/Paris");
    }
}
