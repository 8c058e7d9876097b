//! [`TimeAuthority`] over the IANA database compiled into `chrono-tz`.

use chrono::{DateTime, Offset, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};

use super::{names, AuthorityError, AuthorityResult, FormatHint, TimeAuthority, ZoneDirectory};
use crate::time::offset::format_gmt_offset;

/// Regions holding geographic identifiers; `Etc/*`, `US/*` and the POSIX
/// style names are left out of the catalog.
const GEOGRAPHIC_REGIONS: &[&str] = &[
    "Africa",
    "America",
    "Antarctica",
    "Asia",
    "Atlantic",
    "Australia",
    "Europe",
    "Indian",
    "Pacific",
];

/// Backward-compatibility links whose canonical zone is also listed.
const LEGACY_ALIASES: &[&str] = &[
    "America/Buenos_Aires",
    "America/Catamarca",
    "America/Cordoba",
    "America/Fort_Wayne",
    "America/Indianapolis",
    "America/Jujuy",
    "America/Knox_IN",
    "America/Louisville",
    "America/Mendoza",
    "America/Porto_Acre",
    "America/Rosario",
    "America/Shiprock",
    "America/Virgin",
    "Antarctica/South_Pole",
    "Asia/Calcutta",
    "Asia/Chongqing",
    "Asia/Chungking",
    "Asia/Dacca",
    "Asia/Harbin",
    "Asia/Katmandu",
    "Asia/Macao",
    "Asia/Rangoon",
    "Asia/Saigon",
    "Asia/Tel_Aviv",
    "Asia/Thimbu",
    "Asia/Ujung_Pandang",
    "Asia/Ulan_Bator",
    "Atlantic/Faeroe",
    "Atlantic/Jan_Mayen",
    "Australia/ACT",
    "Australia/Canberra",
    "Australia/LHI",
    "Australia/NSW",
    "Australia/North",
    "Australia/Queensland",
    "Australia/South",
    "Australia/Tasmania",
    "Australia/Victoria",
    "Australia/West",
    "Australia/Yancowinna",
    "Europe/Belfast",
    "Europe/Kiev",
    "Europe/Nicosia",
    "Europe/Tiraspol",
    "Pacific/Enderbury",
    "Pacific/Johnston",
    "Pacific/Ponape",
    "Pacific/Samoa",
    "Pacific/Truk",
    "Pacific/Yap",
];

/// Zone database adapter backed by `chrono-tz`.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use worldclock::authority::{FormatHint, TimeAuthority, TzdbAuthority};
///
/// let authority = TzdbAuthority::new();
/// let instant = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
/// let offset = authority
///     .format("America/New_York", instant, FormatHint::LongOffset)
///     .unwrap();
/// assert_eq!(offset.as_deref(), Some("GMT-05:00"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TzdbAuthority;

impl TzdbAuthority {
    pub fn new() -> Self {
        Self
    }

    fn parse_zone(zone_id: &str) -> AuthorityResult<Tz> {
        zone_id
            .parse::<Tz>()
            .map_err(|_| AuthorityError::UnknownZone(zone_id.to_string()))
    }

    /// Whether the identifier is known to the database.
    pub fn is_known(&self, zone_id: &str) -> bool {
        Self::parse_zone(zone_id).is_ok()
    }
}

impl TimeAuthority for TzdbAuthority {
    fn format(
        &self,
        zone_id: &str,
        instant: DateTime<Utc>,
        hint: FormatHint,
    ) -> AuthorityResult<Option<String>> {
        let tz = Self::parse_zone(zone_id)?;
        let local = instant.with_timezone(&tz);
        let offset_seconds = local.offset().fix().local_minus_utc();
        let offset_minutes = offset_seconds / 60;
        let abbreviation = local.format("%Z").to_string();

        let text = match hint {
            FormatHint::LongOffset if offset_seconds == 0 => Some("GMT".to_string()),
            FormatHint::LongOffset => Some(format_gmt_offset(f64::from(offset_seconds) / 3600.0)),
            FormatHint::ShortName => Some(abbreviation).filter(|a| !a.is_empty()),
            FormatHint::LongName => {
                names::long_name(&abbreviation, offset_minutes).map(str::to_string)
            }
            FormatHint::GenericName => {
                names::generic_name(&abbreviation, offset_minutes).map(str::to_string)
            }
        };
        Ok(text)
    }
}

impl ZoneDirectory for TzdbAuthority {
    fn zone_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = TZ_VARIANTS
            .iter()
            .map(|tz| tz.name())
            .filter(|name| {
                name.split_once('/')
                    .is_some_and(|(region, _)| GEOGRAPHIC_REGIONS.contains(&region))
            })
            .filter(|name| !LEGACY_ALIASES.contains(name))
            .map(str::to_string)
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }
}
