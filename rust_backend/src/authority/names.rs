//! Curated long and generic zone names.
//!
//! The compiled zone database only carries abbreviations, several of which
//! are ambiguous (`CST`, `IST`), so names are keyed by abbreviation *and*
//! offset in minutes.

struct ZoneName {
    abbreviation: &'static str,
    offset_minutes: i32,
    long: &'static str,
    generic: Option<&'static str>,
}

const fn name(
    abbreviation: &'static str,
    offset_minutes: i32,
    long: &'static str,
    generic: Option<&'static str>,
) -> ZoneName {
    ZoneName {
        abbreviation,
        offset_minutes,
        long,
        generic,
    }
}

#[rustfmt::skip]
const ZONE_NAMES: &[ZoneName] = &[
    // North America
    name("HST", -600, "Hawaii-Aleutian Standard Time", Some("Hawaii-Aleutian Time")),
    name("HDT", -540, "Hawaii-Aleutian Daylight Time", Some("Hawaii-Aleutian Time")),
    name("AKST", -540, "Alaska Standard Time", Some("Alaska Time")),
    name("AKDT", -480, "Alaska Daylight Time", Some("Alaska Time")),
    name("PST", -480, "Pacific Standard Time", Some("Pacific Time")),
    name("PDT", -420, "Pacific Daylight Time", Some("Pacific Time")),
    name("MST", -420, "Mountain Standard Time", Some("Mountain Time")),
    name("MDT", -360, "Mountain Daylight Time", Some("Mountain Time")),
    name("CST", -360, "Central Standard Time", Some("Central Time")),
    name("CDT", -300, "Central Daylight Time", Some("Central Time")),
    name("EST", -300, "Eastern Standard Time", Some("Eastern Time")),
    name("EDT", -240, "Eastern Daylight Time", Some("Eastern Time")),
    name("AST", -240, "Atlantic Standard Time", Some("Atlantic Time")),
    name("ADT", -180, "Atlantic Daylight Time", Some("Atlantic Time")),
    name("NST", -210, "Newfoundland Standard Time", Some("Newfoundland Time")),
    name("NDT", -150, "Newfoundland Daylight Time", Some("Newfoundland Time")),
    // Europe and Africa
    name("GMT", 0, "Greenwich Mean Time", Some("Greenwich Mean Time")),
    name("UTC", 0, "Coordinated Universal Time", None),
    name("BST", 60, "British Summer Time", Some("United Kingdom Time")),
    name("IST", 60, "Irish Standard Time", Some("Ireland Time")),
    name("WET", 0, "Western European Standard Time", Some("Western European Time")),
    name("WEST", 60, "Western European Summer Time", Some("Western European Time")),
    name("CET", 60, "Central European Standard Time", Some("Central European Time")),
    name("CEST", 120, "Central European Summer Time", Some("Central European Time")),
    name("EET", 120, "Eastern European Standard Time", Some("Eastern European Time")),
    name("EEST", 180, "Eastern European Summer Time", Some("Eastern European Time")),
    name("MSK", 180, "Moscow Standard Time", Some("Moscow Time")),
    name("WAT", 60, "West Africa Standard Time", Some("West Africa Time")),
    name("CAT", 120, "Central Africa Time", None),
    name("SAST", 120, "South Africa Standard Time", None),
    name("EAT", 180, "East Africa Time", None),
    // Asia
    name("IST", 120, "Israel Standard Time", Some("Israel Time")),
    name("IDT", 180, "Israel Daylight Time", Some("Israel Time")),
    name("PKT", 300, "Pakistan Standard Time", Some("Pakistan Time")),
    name("IST", 330, "India Standard Time", None),
    name("WIB", 420, "Western Indonesia Time", None),
    name("WITA", 480, "Central Indonesia Time", None),
    name("WIT", 540, "Eastern Indonesia Time", None),
    name("CST", 480, "China Standard Time", Some("China Time")),
    name("HKT", 480, "Hong Kong Standard Time", Some("Hong Kong Time")),
    name("PST", 480, "Philippine Standard Time", Some("Philippine Time")),
    name("JST", 540, "Japan Standard Time", Some("Japan Time")),
    name("KST", 540, "Korean Standard Time", Some("Korean Time")),
    // Oceania
    name("AWST", 480, "Australian Western Standard Time", Some("Western Australia Time")),
    name("ACST", 570, "Australian Central Standard Time", Some("Central Australia Time")),
    name("ACDT", 630, "Australian Central Daylight Time", Some("Central Australia Time")),
    name("AEST", 600, "Australian Eastern Standard Time", Some("Eastern Australia Time")),
    name("AEDT", 660, "Australian Eastern Daylight Time", Some("Eastern Australia Time")),
    name("ChST", 600, "Chamorro Standard Time", None),
    name("NZST", 720, "New Zealand Standard Time", Some("New Zealand Time")),
    name("NZDT", 780, "New Zealand Daylight Time", Some("New Zealand Time")),
    name("SST", -660, "Samoa Standard Time", None),
];

fn lookup(abbreviation: &str, offset_minutes: i32) -> Option<&'static ZoneName> {
    ZONE_NAMES
        .iter()
        .find(|n| n.abbreviation == abbreviation && n.offset_minutes == offset_minutes)
}

/// Long name for an abbreviation in use at `offset_minutes`.
pub fn long_name(abbreviation: &str, offset_minutes: i32) -> Option<&'static str> {
    lookup(abbreviation, offset_minutes).map(|n| n.long)
}

/// Season-independent name for an abbreviation in use at `offset_minutes`.
pub fn generic_name(abbreviation: &str, offset_minutes: i32) -> Option<&'static str> {
    lookup(abbreviation, offset_minutes).and_then(|n| n.generic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_abbreviations_use_offset() {
        assert_eq!(long_name("CST", -360), Some("Central Standard Time"));
        assert_eq!(long_name("CST", 480), Some("China Standard Time"));
        assert_eq!(long_name("IST", 330), Some("India Standard Time"));
        assert_eq!(long_name("IST", 60), Some("Irish Standard Time"));
    }

    #[test]
    fn test_generic_name() {
        assert_eq!(generic_name("EDT", -240), Some("Eastern Time"));
        assert_eq!(generic_name("EAT", 180), None);
        assert_eq!(generic_name("XYZ", 0), None);
    }
}
