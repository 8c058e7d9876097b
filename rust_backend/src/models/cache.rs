use serde::{Deserialize, Serialize};

use super::zone::TimeZone;
use crate::time::offset::{offset_minutes, MAX_OFFSET_HOURS, MIN_OFFSET_HOURS};

/// Every catalog zone resolved at the two anchor instants of one year.
///
/// Created once per distinct calendar year and kept for the session; the
/// persisted copy is only dropped when a load fails validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyCacheEntry {
    pub summer_zones: Vec<TimeZone>,
    pub winter_zones: Vec<TimeZone>,
    pub reference_zone_id: String,
    pub year: i32,
}

impl YearlyCacheEntry {
    /// Structural check applied to entries read back from the store.
    ///
    /// # Arguments
    /// * `expected_year` - Year the entry was stored under
    ///
    /// # Returns
    /// * `Ok(())` if the entry is usable
    /// * `Err(reason)` describing the first problem found
    pub fn validate_shape(&self, expected_year: i32) -> Result<(), String> {
        if self.year != expected_year {
            return Err(format!(
                "entry year {} stored under key {}",
                self.year, expected_year
            ));
        }
        if self.summer_zones.is_empty() || self.winter_zones.is_empty() {
            return Err("empty zone list".to_string());
        }
        if self.summer_zones.len() != self.winter_zones.len() {
            return Err(format!(
                "summer/winter length mismatch ({} vs {})",
                self.summer_zones.len(),
                self.winter_zones.len()
            ));
        }
        for zone in self.summer_zones.iter().chain(&self.winter_zones) {
            let hours = zone.offset_hours;
            if !hours.is_finite() || !(MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&hours) {
                return Err(format!("zone {} has offset {} out of range", zone.id(), hours));
            }
            if offset_minutes(hours) % 15 != 0 {
                return Err(format!("zone {} has non quarter-hour offset {}", zone.id(), hours));
            }
            if zone.is_custom() {
                return Err(format!("custom zone {} in catalog entry", zone.id()));
            }
        }
        Ok(())
    }

    /// The zone set for one season.
    pub fn zones(&self, season: Season) -> &[TimeZone] {
        match season {
            Season::Summer => &self.summer_zones,
            Season::Winter => &self.winter_zones,
        }
    }
}

/// Which anchor set of a [`YearlyCacheEntry`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
}
