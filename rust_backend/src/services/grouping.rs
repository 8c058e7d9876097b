//! DST/Standard variant pairs per location.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::catalog::ZoneCatalog;
use crate::error::EngineResult;
use crate::models::{GroupedZone, Season};
use crate::parsing::zone_id::{place_name, ZoneIdParts};
use crate::time::offset::circular_distance;

/// Groups catalog zones by `(region, base location)` and exposes the
/// variant not in effect at the reference instant as the alternate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneVariantGrouper;

impl ZoneVariantGrouper {
    pub fn new() -> Self {
        Self
    }

    /// Group the catalog at `instant`.
    ///
    /// # Returns
    /// One [`GroupedZone`] per location, sorted by signed circular distance
    /// from the reference zone (west to east), then by location name.
    pub fn group(&self, catalog: &ZoneCatalog, instant: DateTime<Utc>) -> EngineResult<Vec<GroupedZone>> {
        let entry = catalog.entry(crate::time::utc_year(instant))?;
        let season = catalog.season_at(instant, &entry)?;
        let other_season = match season {
            Season::Summer => Season::Winter,
            Season::Winter => Season::Summer,
        };
        let reference_offset = catalog.reference_zone(instant)?.offset_hours;

        let current_set = entry.zones(season);
        let other_set = entry.zones(other_season);

        // Index of the representative zone per group key.
        let mut representatives: BTreeMap<(&str, &str), usize> = BTreeMap::new();
        for (index, zone) in current_set.iter().enumerate() {
            let Some(id) = zone.zone_id() else {
                continue;
            };
            let parts = ZoneIdParts::parse(id);
            representatives
                .entry(parts.group_key())
                .and_modify(|best| {
                    if let Some(best_id) = current_set[*best].zone_id() {
                        if is_better_representative(id, best_id) {
                            *best = index;
                        }
                    }
                })
                .or_insert(index);
        }

        let mut groups: Vec<GroupedZone> = representatives
            .into_iter()
            .map(|((region, base_location), index)| {
                let current = current_set[index].clone();
                let alternate = other_set
                    .get(index)
                    .filter(|other| other.kind == current.kind)
                    .filter(|other| other.offset_minutes() != current.offset_minutes())
                    .cloned();
                let mut variants = vec![current.clone()];
                variants.extend(alternate.iter().cloned());
                GroupedZone {
                    location: place_name(base_location),
                    region: region.to_string(),
                    current,
                    alternate,
                    variants,
                }
            })
            .collect();

        groups.sort_by(|a, b| {
            circular_distance(a.current.offset_hours, reference_offset)
                .total_cmp(&circular_distance(b.current.offset_hours, reference_offset))
                .then_with(|| a.location.cmp(&b.location))
        });
        Ok(groups)
    }
}

/// Fewer segments wins, then the lexicographically smaller identifier.
fn is_better_representative(candidate: &str, incumbent: &str) -> bool {
    let candidate_segments = ZoneIdParts::parse(candidate).segments;
    let incumbent_segments = ZoneIdParts::parse(incumbent).segments;
    (candidate_segments, candidate) < (incumbent_segments, incumbent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representative_prefers_fewer_segments() {
        assert!(is_better_representative("Europe/Paris", "Europe/Paris/District"));
        assert!(!is_better_representative("Europe/Paris/District", "Europe/Paris"));
        assert!(is_better_representative(
            "America/Argentina/Buenos_Aires",
            "America/Argentina/Cordoba"
        ));
    }
}
