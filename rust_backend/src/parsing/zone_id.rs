//! Parsing of geographic zone identifiers (`Region/City`, `Region/Sub/City`).
//!
//! The identifier is the only place-name source the catalog has, so the
//! human-readable city name is derived here: the last path segment with
//! underscores turned into spaces, then a table of spelling corrections
//! (diacritics the database omits, multi-word names it squashes).

/// Spelling corrections keyed by the raw identifier segment.
const CITY_CORRECTIONS: &[(&str, &str)] = &[
    ("Asuncion", "Asunción"),
    ("Bogota", "Bogotá"),
    ("Cordoba", "Córdoba"),
    ("Curacao", "Curaçao"),
    ("DumontDUrville", "Dumont d'Urville"),
    ("Merida", "Mérida"),
    ("Noumea", "Nouméa"),
    ("Reykjavik", "Reykjavík"),
    ("Sao_Paulo", "São Paulo"),
    ("Sao_Tome", "São Tomé"),
    ("St_Barthelemy", "St. Barthélemy"),
    ("St_Johns", "St. John's"),
    ("St_Kitts", "St. Kitts"),
    ("St_Lucia", "St. Lucia"),
    ("St_Thomas", "St. Thomas"),
    ("St_Vincent", "St. Vincent"),
    ("Zurich", "Zürich"),
    ("Ho_Chi_Minh", "Ho Chi Minh City"),
    ("Port_of_Spain", "Port of Spain"),
    ("ComodRivadavia", "Comodoro Rivadavia"),
];

/// The structural pieces of a zone identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneIdParts<'a> {
    /// First segment (`"Europe"`), empty for single-segment identifiers.
    pub region: &'a str,
    /// Second segment (`"Paris"` in `Europe/Paris/District`), or the whole
    /// identifier when it has a single segment.
    pub base_location: &'a str,
    /// Last segment, the raw city.
    pub city: &'a str,
    /// Number of `/`-separated segments.
    pub segments: usize,
}

impl<'a> ZoneIdParts<'a> {
    /// Split an identifier into its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldclock::parsing::zone_id::ZoneIdParts;
    ///
    /// let parts = ZoneIdParts::parse("America/Argentina/Buenos_Aires");
    /// assert_eq!(parts.region, "America");
    /// assert_eq!(parts.base_location, "Argentina");
    /// assert_eq!(parts.city, "Buenos_Aires");
    /// assert_eq!(parts.segments, 3);
    /// ```
    pub fn parse(id: &'a str) -> Self {
        let mut segments = id.split('/').filter(|s| !s.is_empty());
        let first = segments.next().unwrap_or(id);
        let Some(second) = segments.next() else {
            return Self {
                region: "",
                base_location: first,
                city: first,
                segments: 1,
            };
        };
        let mut city = second;
        let mut count = 2;
        for segment in segments {
            city = segment;
            count += 1;
        }
        Self {
            region: first,
            base_location: second,
            city,
            segments: count,
        }
    }

    /// Grouping key: region plus base location.
    pub fn group_key(&self) -> (&'a str, &'a str) {
        (self.region, self.base_location)
    }
}

/// Human-readable city name for a zone identifier.
///
/// ```
/// use worldclock::parsing::zone_id::city_name;
///
/// assert_eq!(city_name("America/New_York"), "New York");
/// assert_eq!(city_name("America/Sao_Paulo"), "São Paulo");
/// assert_eq!(city_name("UTC"), "UTC");
/// ```
pub fn city_name(id: &str) -> String {
    place_name(ZoneIdParts::parse(id).city)
}

/// Human-readable form of a single identifier segment.
pub fn place_name(segment: &str) -> String {
    CITY_CORRECTIONS
        .iter()
        .find(|(raw, _)| *raw == segment)
        .map(|(_, corrected)| (*corrected).to_string())
        .unwrap_or_else(|| segment.replace('_', " "))
}

/// Region (first segment) of an identifier, if it has one.
pub fn region(id: &str) -> Option<&str> {
    let region = ZoneIdParts::parse(id).region;
    (!region.is_empty()).then_some(region)
}
