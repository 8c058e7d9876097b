//! Centering algorithm: a bounded, offset-unique set of zones around a
//! reference zone.

use std::collections::HashSet;
use std::sync::Arc;

use super::random::{sample, shuffle, RandomSource, SeededRandom};
use crate::models::TimeZone;

/// Smallest selection ever returned when the catalog allows it.
pub const MIN_SELECTION: usize = 3;

/// Picks the zones shown on the timeline.
///
/// The result always contains the reference zone, never two zones with the
/// same offset, and is sorted ascending by offset. Which neighbours are
/// picked is random; inject a seeded [`RandomSource`] for reproducible
/// output.
pub struct ZoneSelector {
    random: Arc<dyn RandomSource>,
}

impl ZoneSelector {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Arc::new(SeededRandom::new(seed)))
    }

    /// `max(3, count)` rounded up to the next odd number.
    pub fn target_count(count: usize) -> usize {
        let count = count.max(MIN_SELECTION);
        if count % 2 == 0 {
            count + 1
        } else {
            count
        }
    }

    /// Select `count` zones centred on `reference`.
    ///
    /// # Arguments
    /// * `reference` - Zone that must appear in the result
    /// * `count` - Requested size, raised to at least 3 and to an odd number
    /// * `catalog` - Candidate zones, in catalog order
    ///
    /// # Returns
    /// Zones sorted ascending by offset. Exactly [`target_count`](Self::target_count)
    /// zones when the catalog holds that many distinct offsets; otherwise the
    /// largest odd number available.
    pub fn select(&self, reference: &TimeZone, count: usize, catalog: &[TimeZone]) -> Vec<TimeZone> {
        let target = Self::target_count(count);
        let slots = target - 1;
        let reference_minutes = reference.offset_minutes();

        let candidates = distinct_offsets(reference_minutes, catalog);
        let (below, above): (Vec<&TimeZone>, Vec<&TimeZone>) = candidates
            .iter()
            .copied()
            .partition(|z| z.offset_minutes() < reference_minutes);

        let mut picked: Vec<&TimeZone> = Vec::with_capacity(slots);
        let remaining = below.len() + above.len();

        if (below.is_empty() || above.is_empty()) && remaining < slots {
            let (depleted, abundant) = if below.is_empty() {
                (&below, &above)
            } else {
                (&above, &below)
            };
            log::debug!(
                "Selector edge case around {}: {} below, {} above, {} slots",
                reference.id(),
                below.len(),
                above.len(),
                slots
            );
            picked.extend(depleted.iter().copied());
            picked.extend(sample(abundant, slots - picked.len(), self.random.as_ref()));
        } else {
            let below_take = slots / 2;
            let above_take = slots - below_take;

            let mut below = below;
            let mut above = above;
            shuffle(&mut below, self.random.as_ref());
            shuffle(&mut above, self.random.as_ref());

            picked.extend(below.into_iter().take(below_take));
            picked.extend(above.into_iter().take(above_take));
        }

        if picked.len() < slots {
            let used: HashSet<i32> = picked.iter().map(|z| z.offset_minutes()).collect();
            let mut unused: Vec<&TimeZone> = candidates
                .iter()
                .copied()
                .filter(|z| !used.contains(&z.offset_minutes()))
                .collect();
            unused.sort_by_key(|z| {
                let minutes = z.offset_minutes();
                ((minutes - reference_minutes).abs(), minutes)
            });
            let missing = slots - picked.len();
            if !unused.is_empty() {
                log::debug!(
                    "Filling {} slot(s) around {} with nearest offsets",
                    missing.min(unused.len()),
                    reference.id()
                );
            }
            picked.extend(unused.into_iter().take(missing));
        }

        let mut selection: Vec<TimeZone> = std::iter::once(reference)
            .chain(picked)
            .cloned()
            .collect();

        // Only a catalog with fewer distinct offsets than requested can
        // leave an even count; drop the farthest neighbour.
        if selection.len() % 2 == 0 {
            if let Some(index) = farthest_neighbour(&selection, reference_minutes) {
                selection.remove(index);
            }
        }

        selection.sort_by_key(TimeZone::offset_minutes);
        selection.truncate(target);
        selection
    }
}

/// One zone per offset other than the reference offset, first in catalog
/// order wins.
fn distinct_offsets(reference_minutes: i32, catalog: &[TimeZone]) -> Vec<&TimeZone> {
    let mut seen = HashSet::from([reference_minutes]);
    catalog
        .iter()
        .filter(|z| z.offset_hours.is_finite())
        .filter(|z| seen.insert(z.offset_minutes()))
        .collect()
}

fn farthest_neighbour(selection: &[TimeZone], reference_minutes: i32) -> Option<usize> {
    selection
        .iter()
        .enumerate()
        .skip(1)
        .max_by_key(|(_, z)| {
            let minutes = z.offset_minutes();
            ((minutes - reference_minutes).abs(), minutes)
        })
        .map(|(index, _)| index)
}
