use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use super::{SolarCalculator, SolarDay, SolarError, SunTimes};

fn check_coordinates(latitude: f64, longitude: f64) -> Result<(), SolarError> {
    let valid = latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude);
    if valid {
        Ok(())
    } else {
        Err(SolarError::InvalidCoordinates {
            latitude,
            longitude,
        })
    }
}

/// Solar calculator backed by the `sunrise` crate.
///
/// The crate evaluates `date` around its mean solar noon at `longitude`
/// (12:00 UTC shifted by `-longitude / 15` hours). It has no notion of polar
/// days: when the sun never crosses the horizon it yields degenerate
/// timestamps, and the day is classified from the sun's declination instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunriseCalculator;

impl SunriseCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl SolarCalculator for SunriseCalculator {
    fn solar_day(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
    ) -> Result<SolarDay, SolarError> {
        check_coordinates(latitude, longitude)?;

        #[allow(deprecated)]
        let (sunrise, sunset) =
            sunrise::sunrise_sunset(latitude, longitude, date.year(), date.month(), date.day());

        let midnight = date.and_time(NaiveTime::default()).and_utc();
        let plausible = (midnight - Duration::days(1))..(midnight + Duration::days(2));
        let times = DateTime::from_timestamp(sunrise, 0)
            .zip(DateTime::from_timestamp(sunset, 0))
            .filter(|(rise, set)| {
                rise < set && plausible.contains(rise) && plausible.contains(set)
            });

        match times {
            Some((sunrise, sunset)) => Ok(SolarDay::Normal(SunTimes { sunrise, sunset })),
            None => match approximate_solar_day(date, latitude, longitude) {
                polar @ (SolarDay::PolarDay | SolarDay::PolarNight) => Ok(polar),
                SolarDay::Normal(_) => Err(SolarError::Computation(format!(
                    "no sunrise/sunset for {} at ({}, {})",
                    date, latitude, longitude
                ))),
            },
        }
    }
}

/// Latitude-based sunrise/sunset estimate.
///
/// Uses Cooper's declination formula and a solar noon of `12h - lon/15` UTC,
/// without refraction or equation of time. Off by up to roughly twenty
/// minutes, which is enough to shade an hour column.
pub fn approximate_solar_day(date: NaiveDate, latitude: f64, longitude: f64) -> SolarDay {
    let day_of_year = f64::from(date.ordinal());
    let declination =
        (23.44 * (2.0 * std::f64::consts::PI * (284.0 + day_of_year) / 365.0).sin()).to_radians();
    let phi = latitude.clamp(-90.0, 90.0).to_radians();

    let cos_hour_angle = -phi.tan() * declination.tan();
    if cos_hour_angle.is_nan() || cos_hour_angle < -1.0 {
        return SolarDay::PolarDay;
    }
    if cos_hour_angle > 1.0 {
        return SolarDay::PolarNight;
    }

    let half_day_hours = cos_hour_angle.acos().to_degrees() / 15.0;
    let noon_hours = 12.0 - longitude / 15.0;
    let midnight = date.and_time(NaiveTime::default()).and_utc();
    let at = |hours: f64| midnight + Duration::seconds((hours * 3600.0).round() as i64);

    SolarDay::Normal(SunTimes {
        sunrise: at(noon_hours - half_day_hours),
        sunset: at(noon_hours + half_day_hours),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_near(actual: DateTime<Utc>, expected: DateTime<Utc>, tolerance_minutes: i64) {
        let delta = (actual - expected).num_minutes().abs();
        assert!(
            delta <= tolerance_minutes,
            "{} differs from {} by {} minutes",
            actual,
            expected,
            delta
        );
    }

    #[test]
    fn test_london_midsummer() {
        let day = SunriseCalculator::new()
            .solar_day(date(2026, 6, 21), 51.5074, -0.1278)
            .unwrap();
        let times = day.sun_times().expect("London has a sunrise in June");
        assert_near(times.sunrise, Utc.with_ymd_and_hms(2026, 6, 21, 3, 43, 0).unwrap(), 5);
        assert_near(times.sunset, Utc.with_ymd_and_hms(2026, 6, 21, 20, 21, 0).unwrap(), 5);
    }

    #[test]
    fn test_eastern_longitude_starts_the_day_before() {
        // Tokyo sunrise on 2026-01-15 is 06:51 JST, i.e. 21:51 UTC the day before.
        let day = SunriseCalculator::new()
            .solar_day(date(2026, 1, 15), 35.6762, 139.6503)
            .unwrap();
        let times = day.sun_times().unwrap();
        assert_near(times.sunrise, Utc.with_ymd_and_hms(2026, 1, 14, 21, 51, 0).unwrap(), 5);
    }

    #[test]
    fn test_western_longitude_ends_the_day_after() {
        // Kiritimati: solar noon near 22:30 UTC, sunset after midnight UTC.
        let day = SunriseCalculator::new()
            .solar_day(date(2026, 1, 14), 1.8721, -157.4278)
            .unwrap();
        let times = day.sun_times().unwrap();
        assert_eq!(times.sunrise.date_naive(), date(2026, 1, 14));
        assert_eq!(times.sunset.date_naive(), date(2026, 1, 15));
        let noon = Utc.with_ymd_and_hms(2026, 1, 14, 22, 30, 0).unwrap();
        assert!(times.contains(noon));
    }

    #[test]
    fn test_polar_day_and_night() {
        let calculator = SunriseCalculator::new();
        let tromso = (69.6492, 18.9553);
        assert_eq!(
            calculator.solar_day(date(2026, 6, 21), tromso.0, tromso.1),
            Ok(SolarDay::PolarDay)
        );
        assert_eq!(
            calculator.solar_day(date(2026, 12, 21), tromso.0, tromso.1),
            Ok(SolarDay::PolarNight)
        );
    }

    #[test]
    fn test_invalid_coordinates() {
        let result = SunriseCalculator::new().solar_day(date(2026, 1, 1), 91.0, 0.0);
        assert!(matches!(result, Err(SolarError::InvalidCoordinates { .. })));
        let result = SunriseCalculator::new().solar_day(date(2026, 1, 1), f64::NAN, 0.0);
        assert!(matches!(result, Err(SolarError::InvalidCoordinates { .. })));
    }

    #[test]
    fn test_approximation_near_equinox() {
        let day = approximate_solar_day(date(2026, 3, 20), 51.5074, -0.1278);
        let times = day.sun_times().unwrap();
        assert_near(times.sunrise, Utc.with_ymd_and_hms(2026, 3, 20, 6, 0, 0).unwrap(), 30);
        assert_near(times.sunset, Utc.with_ymd_and_hms(2026, 3, 20, 18, 10, 0).unwrap(), 30);
    }

    #[test]
    fn test_approximation_polar() {
        assert_eq!(approximate_solar_day(date(2026, 6, 21), 75.0, 15.0), SolarDay::PolarDay);
        assert_eq!(approximate_solar_day(date(2026, 12, 21), 75.0, 15.0), SolarDay::PolarNight);
        assert_eq!(approximate_solar_day(date(2026, 6, 21), -75.0, 15.0), SolarDay::PolarNight);
    }
}
