//! Weighted zone search over names, identifiers and offsets.

use std::collections::HashSet;

use crate::models::{GroupedZone, TimeZone};
use crate::parsing::parse_offset_query;

/// Bonus for a zone whose offset equals the one written in the query.
pub const OFFSET_MATCH_BONUS: u32 = 1000;
/// Bonus for matches in the reference zone's region.
pub const SAME_REGION_BONUS: u32 = 50;

const CITY_WEIGHT: u32 = 100;
const DISPLAY_NAME_WEIGHT: u32 = 80;
const ABBREVIATION_WEIGHT: u32 = 60;
const GENERIC_NAME_WEIGHT: u32 = 40;
const ID_WEIGHT: u32 = 20;

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub zone: TimeZone,
    pub score: u32,
}

/// Scores zones against free text or an offset pattern.
///
/// Text matching is case-insensitive and treats underscores as spaces.
/// Within a field an exact match scores three times the field weight, a
/// prefix twice and a substring once; fields add up.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchIndex;

impl SearchIndex {
    pub fn new() -> Self {
        Self
    }

    /// Ranked zones matching `query`, best first.
    ///
    /// # Arguments
    /// * `query` - Free text (`"paris"`) or an offset (`"utc-5"`, `"+05:30"`)
    /// * `catalog` - Primary candidates
    /// * `groups` - Grouped zones whose alternates are searched too
    /// * `reference` - Reference zone, for the same-region bonus
    pub fn search(
        &self,
        query: &str,
        catalog: &[TimeZone],
        groups: &[GroupedZone],
        reference: &TimeZone,
    ) -> Vec<TimeZone> {
        self.search_scored(query, catalog, groups, reference)
            .into_iter()
            .map(|hit| hit.zone)
            .collect()
    }

    /// Like [`search`](Self::search), keeping the scores.
    pub fn search_scored(
        &self,
        query: &str,
        catalog: &[TimeZone],
        groups: &[GroupedZone],
        reference: &TimeZone,
    ) -> Vec<SearchHit> {
        let needle = normalize(query);
        if needle.is_empty() {
            return Vec::new();
        }
        let offset_minutes = parse_offset_query(query).map(crate::time::offset_minutes);
        let reference_region = reference.region();

        let mut seen: HashSet<(String, i32)> = HashSet::new();
        let candidates = catalog
            .iter()
            .chain(groups.iter().filter_map(|g| g.alternate.as_ref()))
            .filter(|z| seen.insert((z.id().into_owned(), z.offset_minutes())));

        let mut hits: Vec<SearchHit> = candidates
            .filter_map(|zone| {
                let text = text_score(&needle, zone);
                let offset = match offset_minutes {
                    Some(minutes) if minutes == zone.offset_minutes() => OFFSET_MATCH_BONUS,
                    _ => 0,
                };
                let mut score = text + offset;
                if score > 0 && reference_region.is_some() && zone.region() == reference_region {
                    score += SAME_REGION_BONUS;
                }
                (score > 0).then(|| SearchHit {
                    zone: zone.clone(),
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.zone.city_name.cmp(&b.zone.city_name))
                .then_with(|| a.zone.id().cmp(&b.zone.id()))
        });
        hits
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase().replace('_', " ")
}

fn field_score(needle: &str, value: &str, weight: u32) -> u32 {
    let value = normalize(value);
    if value.is_empty() {
        0
    } else if value == needle {
        3 * weight
    } else if value.starts_with(needle) {
        2 * weight
    } else if value.contains(needle) {
        weight
    } else {
        0
    }
}

fn text_score(needle: &str, zone: &TimeZone) -> u32 {
    field_score(needle, &zone.city_name, CITY_WEIGHT)
        + field_score(needle, &zone.display_name, DISPLAY_NAME_WEIGHT)
        + field_score(needle, &zone.abbreviation, ABBREVIATION_WEIGHT)
        + zone
            .generic_name
            .as_deref()
            .map_or(0, |g| field_score(needle, g, GENERIC_NAME_WEIGHT))
        + field_score(needle, &zone.id(), ID_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_score_tiers() {
        assert_eq!(field_score("paris", "Paris", 100), 300);
        assert_eq!(field_score("par", "Paris", 100), 200);
        assert_eq!(field_score("ari", "Paris", 100), 100);
        assert_eq!(field_score("rome", "Paris", 100), 0);
    }

    #[test]
    fn test_underscores_match_spaces() {
        assert_eq!(field_score("new york", "America/New_York", 20), 20);
        assert_eq!(normalize("  New_York "), "new york");
    }
}
