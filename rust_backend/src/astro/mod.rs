//! Sunrise and sunset computation.
//!
//! The daylight oracle talks to a [`SolarCalculator`]. [`SunriseCalculator`]
//! is the default implementation; [`approximate_solar_day`] is the
//! latitude-only estimate used when a calculator fails.
//!
//! A solar day is keyed by its date in local mean solar time, see
//! [`solar_date`]. That date can differ from the civil date of a zone whose
//! offset is far from `longitude / 15`, as on either side of the date line.

pub mod solar;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use solar::{approximate_solar_day, SunriseCalculator};

/// Error type for solar computations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolarError {
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Solar computation failed: {0}")]
    Computation(String),
}

/// Sunrise and sunset of one day, as UTC instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SunTimes {
    /// Whether `instant` falls in `[sunrise, sunset)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.sunrise <= instant && instant < self.sunset
    }
}

/// Outcome of a sunrise/sunset computation for one date and place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarDay {
    Normal(SunTimes),
    /// The sun stays above the horizon all day.
    PolarDay,
    /// The sun stays below the horizon all day.
    PolarNight,
}

impl SolarDay {
    pub fn sun_times(&self) -> Option<SunTimes> {
        match self {
            SolarDay::Normal(times) => Some(*times),
            SolarDay::PolarDay | SolarDay::PolarNight => None,
        }
    }

    /// Whether the sun is up at `instant`, which must fall in this solar day.
    pub fn is_daylight_at(&self, instant: DateTime<Utc>) -> bool {
        match self {
            SolarDay::Normal(times) => times.contains(instant),
            SolarDay::PolarDay => true,
            SolarDay::PolarNight => false,
        }
    }
}

/// Date of the solar day containing `instant` at `longitude`.
///
/// This is the calendar date of local mean solar time (UTC shifted by
/// four minutes per degree east). Calculators centre the day they compute
/// on that date's mean solar noon.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use worldclock::astro::solar_date;
///
/// // Local noon in Kiritimati (UTC+14) on January 15 is 22:00 UTC on the
/// // 14th and 11:30 mean solar time on the 14th.
/// let instant = Utc.with_ymd_and_hms(2026, 1, 14, 22, 0, 0).unwrap();
/// assert_eq!(solar_date(instant, -157.43), NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// ```
pub fn solar_date(instant: DateTime<Utc>, longitude: f64) -> NaiveDate {
    let shift = Duration::seconds((longitude * 240.0).round() as i64);
    (instant + shift).date_naive()
}

/// Source of sunrise/sunset instants for a date and position.
pub trait SolarCalculator: Send + Sync {
    /// Compute the solar day of `date` at the given position.
    ///
    /// # Arguments
    /// * `date` - Solar date, evaluated around its mean solar noon
    /// * `latitude` - Degrees north
    /// * `longitude` - Degrees east
    fn solar_day(&self, date: NaiveDate, latitude: f64, longitude: f64)
        -> Result<SolarDay, SolarError>;
}
