//! Daylight classification from sunrise/sunset.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::astro::{
    approximate_solar_day, solar_date, SolarCalculator, SolarDay, SunTimes, SunriseCalculator,
};
use crate::models::Coordinates;
use crate::time::utc_from_wall_time;

/// Answers "is the sun up" for a place and a local wall-clock time.
///
/// Zones without (valid) coordinates are always night: no sunrise, no
/// sunset, no daylight.
#[derive(Clone)]
pub struct DaylightOracle {
    calculator: Arc<dyn SolarCalculator>,
}

impl Default for DaylightOracle {
    fn default() -> Self {
        Self::new(Arc::new(SunriseCalculator::new()))
    }
}

impl DaylightOracle {
    pub fn new(calculator: Arc<dyn SolarCalculator>) -> Self {
        Self { calculator }
    }

    /// Solar day of `date` at `coordinates`; `date` is a solar date (see
    /// [`solar_date`]).
    ///
    /// Falls back to the latitude approximation when the calculator fails.
    /// Returns `None` without coordinates.
    pub fn solar_day(&self, coordinates: Option<&Coordinates>, date: NaiveDate) -> Option<SolarDay> {
        let coordinates = coordinates.filter(|c| c.is_valid())?;
        let day = self
            .calculator
            .solar_day(date, coordinates.latitude, coordinates.longitude)
            .unwrap_or_else(|e| {
                log::warn!(
                    "Solar calculation failed for {} at ({}, {}): {}; using approximation",
                    date,
                    coordinates.latitude,
                    coordinates.longitude,
                    e
                );
                approximate_solar_day(date, coordinates.latitude, coordinates.longitude)
            });
        Some(day)
    }

    /// Sunrise and sunset of `date`, as UTC instants.
    ///
    /// `None` without coordinates and on polar days and nights.
    pub fn sun_times(&self, coordinates: Option<&Coordinates>, date: NaiveDate) -> Option<SunTimes> {
        self.solar_day(coordinates, date)?.sun_times()
    }

    /// Whether the sun is up at a local wall-clock time.
    ///
    /// # Arguments
    /// * `coordinates` - Position of the zone's city
    /// * `local` - Wall-clock time in the zone
    /// * `offset_hours` - Zone offset used to convert `local` to UTC
    pub fn is_daylight(
        &self,
        coordinates: Option<&Coordinates>,
        local: NaiveDateTime,
        offset_hours: f64,
    ) -> bool {
        self.is_daylight_at(coordinates, utc_from_wall_time(local, offset_hours))
    }

    /// Whether the sun is up at `instant`.
    ///
    /// The solar day is chosen by the instant's mean solar date, not by the
    /// zone's civil date.
    pub fn is_daylight_at(&self, coordinates: Option<&Coordinates>, instant: DateTime<Utc>) -> bool {
        let Some(coordinates) = coordinates.filter(|c| c.is_valid()) else {
            return false;
        };
        self.solar_day(Some(coordinates), solar_date(instant, coordinates.longitude))
            .is_some_and(|day| day.is_daylight_at(instant))
    }
}
