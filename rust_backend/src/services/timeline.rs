//! Fixed-width hourly timelines relative to the reference zone.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};

use super::daylight::DaylightOracle;
use crate::astro::{solar_date, SolarDay};
use crate::error::{EngineError, EngineResult};
use crate::models::{TimeZone, TimelineHour, TimelineRow};
use crate::time::{label_12h, label_24h, local_wall_time, truncate_to_hour, utc_from_wall_time};

/// Timeline width used by the shipped configuration: a day either side.
pub const DEFAULT_WIDTH: usize = 48;

/// Builds per-zone hour columns aligned on the reference zone's current hour.
#[derive(Clone, Default)]
pub struct TimelineBuilder {
    oracle: DaylightOracle,
}

/// Solar days of one zone, computed once per solar date within a build.
struct SolarDays<'a> {
    oracle: &'a DaylightOracle,
    zone: &'a TimeZone,
    days: HashMap<NaiveDate, Option<SolarDay>>,
}

impl<'a> SolarDays<'a> {
    fn new(oracle: &'a DaylightOracle, zone: &'a TimeZone) -> Self {
        Self {
            oracle,
            zone,
            days: HashMap::new(),
        }
    }

    fn get(&mut self, date: NaiveDate) -> Option<SolarDay> {
        let (oracle, zone) = (self.oracle, self.zone);
        *self
            .days
            .entry(date)
            .or_insert_with(|| oracle.solar_day(zone.coordinates.as_ref(), date))
    }

    fn date_of(&self, instant: DateTime<Utc>) -> Option<NaiveDate> {
        let coordinates = self.zone.coordinates.as_ref().filter(|c| c.is_valid())?;
        Some(solar_date(instant, coordinates.longitude))
    }

    fn is_daylight(&mut self, instant: DateTime<Utc>) -> bool {
        self.date_of(instant)
            .and_then(|date| self.get(date))
            .is_some_and(|day| day.is_daylight_at(instant))
    }

    /// The sunrise or sunset that fell between two consecutive column starts.
    fn crossing(
        &mut self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        sunrise: bool,
    ) -> Option<DateTime<Utc>> {
        [self.date_of(to), self.date_of(from)]
            .into_iter()
            .flatten()
            .filter_map(|date| self.get(date).and_then(|day| day.sun_times()))
            .map(|times| if sunrise { times.sunrise } else { times.sunset })
            .find(|event| from < *event && *event <= to)
    }
}

impl TimelineBuilder {
    pub fn new(oracle: DaylightOracle) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &DaylightOracle {
        &self.oracle
    }

    /// Build `width` hour columns for `zone`.
    ///
    /// Column `width / 2` is the reference zone's current hour (truncated);
    /// the columns before and after step one hour each way.
    ///
    /// # Arguments
    /// * `width` - Number of columns, even and greater than zero
    /// * `zone` - Zone the row is for
    /// * `reference` - Reference zone the columns are aligned on
    /// * `instant` - Reference instant
    ///
    /// # Errors
    /// * `EngineError::InvalidWidth` - `width` is zero or odd
    pub fn build(
        &self,
        width: usize,
        zone: &TimeZone,
        reference: &TimeZone,
        instant: DateTime<Utc>,
    ) -> EngineResult<Vec<TimelineHour>> {
        if width == 0 || width % 2 != 0 {
            return Err(EngineError::InvalidWidth(width));
        }
        let half = (width / 2) as i64;

        let anchor_local = truncate_to_hour(local_wall_time(instant, reference.offset_hours));
        let anchor = utc_from_wall_time(anchor_local, reference.offset_hours);

        let mut solar = SolarDays::new(&self.oracle, zone);
        let mut previous_daylight = solar.is_daylight(anchor - Duration::hours(half + 1));

        let mut hours = Vec::with_capacity(width);
        for step in -half..half {
            let column = anchor + Duration::hours(step);
            let local = local_wall_time(column, zone.offset_hours);
            let is_daylight = solar.is_daylight(column);
            let is_sunrise_hour = is_daylight && !previous_daylight;
            let is_sunset_hour = !is_daylight && previous_daylight;

            let annotation = if is_sunrise_hour || is_sunset_hour {
                solar
                    .crossing(column - Duration::hours(1), column, is_sunrise_hour)
                    .map(|event| {
                        let at = local_wall_time(event, zone.offset_hours).format("%H:%M");
                        if is_sunrise_hour {
                            format!("Sunrise {}", at)
                        } else {
                            format!("Sunset {}", at)
                        }
                    })
            } else {
                None
            };

            hours.push(TimelineHour {
                instant: column,
                local,
                label_12h: label_12h(local),
                label_24h: label_24h(local),
                is_daylight,
                is_date_transition: local.hour() == 0,
                is_sunrise_hour,
                is_sunset_hour,
                annotation,
            });
            previous_daylight = is_daylight;
        }
        Ok(hours)
    }

    /// Build a full row, flagging it when `zone` is the reference zone.
    pub fn build_row(
        &self,
        width: usize,
        zone: &TimeZone,
        reference: &TimeZone,
        instant: DateTime<Utc>,
    ) -> EngineResult<TimelineRow> {
        let hours = self.build(width, zone, reference, instant)?;
        Ok(TimelineRow {
            zone: zone.clone(),
            hours,
            is_reference_zone: zone.id() == reference.id(),
        })
    }
}
