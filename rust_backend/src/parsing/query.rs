//! Offset-pattern recognition for search queries.
//!
//! Three shapes are accepted, tried in order:
//!
//! 1. `gmt`/`utc` followed by an offset: `utc-5`, `GMT +05:30`
//! 2. an abbreviation-like prefix followed by an offset: `est-5`, `ist+0530`
//! 3. a bare signed offset: `+9`, `-03:30`
//!
//! Hours are one or two digits, minutes are optional (`:30` or `30`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::time::offset::signed_offset;

static GMT_PREFIXED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:gmt|utc)\s*([+-])(\d{1,2})(?::?(\d{2}))?$").unwrap()
});

static ABBREVIATION_PREFIXED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z]{2,5}\s*([+-])(\d{1,2})(?::?(\d{2}))?$").unwrap()
});

static BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([+-])(\d{1,2})(?::?(\d{2}))?$").unwrap());

/// Parse a query as an offset, returning signed hours.
///
/// # Examples
///
/// ```
/// use worldclock::parsing::parse_offset_query;
///
/// assert_eq!(parse_offset_query("utc-12"), Some(-12.0));
/// assert_eq!(parse_offset_query("IST+0530"), Some(5.5));
/// assert_eq!(parse_offset_query("+9:45"), Some(9.75));
/// assert_eq!(parse_offset_query("paris"), None);
/// ```
pub fn parse_offset_query(query: &str) -> Option<f64> {
    let normalized = query.trim().to_lowercase();
    [&*GMT_PREFIXED, &*ABBREVIATION_PREFIXED, &*BARE]
        .into_iter()
        .find_map(|pattern| {
            let captures = pattern.captures(&normalized)?;
            let negative = &captures[1] == "-";
            let hours = captures[2].parse().ok()?;
            let minutes = captures
                .get(3)
                .map_or(Some(0), |m| m.as_str().parse().ok())?;
            signed_offset(negative, hours, minutes)
        })
}
