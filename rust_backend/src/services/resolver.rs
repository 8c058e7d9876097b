//! Offset and name resolution against the time authority.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::authority::{AuthorityResult, FormatHint, TimeAuthority};
use crate::data::coordinates_for;
use crate::models::{TimeZone, ZoneKind};
use crate::parsing::city_name;
use crate::time::offset::{format_utc_label, parse_gmt_offset};

/// Longest abbreviation accepted from the authority.
pub const MAX_ABBREVIATION_LEN: usize = 5;
/// Last-resort abbreviation.
pub const FALLBACK_ABBREVIATION: &str = "GMT";

const SKIPPED_WORDS: &[&str] = &["a", "an", "the", "and", "or", "nor", "but", "of"];

/// Offset and names of one zone at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOffset {
    pub offset_hours: f64,
    pub display_name: String,
    pub abbreviation: String,
    pub generic_name: Option<String>,
}

/// Turns zone identifiers into offsets and names.
#[derive(Clone)]
pub struct OffsetResolver {
    authority: Arc<dyn TimeAuthority>,
}

impl OffsetResolver {
    pub fn new(authority: Arc<dyn TimeAuthority>) -> Self {
        Self { authority }
    }

    pub fn authority(&self) -> &Arc<dyn TimeAuthority> {
        &self.authority
    }

    /// Offset of `zone_id` at `instant`, in hours.
    ///
    /// A long-form offset that does not parse (including a bare `"GMT"`)
    /// counts as zero.
    pub fn offset_at(&self, zone_id: &str, instant: DateTime<Utc>) -> AuthorityResult<f64> {
        let text = self
            .authority
            .format(zone_id, instant, FormatHint::LongOffset)?;
        Ok(text.as_deref().and_then(parse_gmt_offset).unwrap_or(0.0))
    }

    /// Resolve offset, display name and abbreviation.
    ///
    /// # Arguments
    /// * `zone_id` - Zone database identifier
    /// * `instant` - Instant the offset applies to
    ///
    /// # Returns
    /// * `Ok(ResolvedOffset)` - names fall back to `UTC±offset` and a
    ///   synthesized abbreviation when the authority has none
    /// * `Err(AuthorityError)` - the authority rejected the identifier
    pub fn resolve(&self, zone_id: &str, instant: DateTime<Utc>) -> AuthorityResult<ResolvedOffset> {
        let offset_hours = self.offset_at(zone_id, instant)?;

        let display_name = match self.optional(zone_id, instant, FormatHint::LongName) {
            Some(name) => name,
            None => {
                let label = format_utc_label(offset_hours);
                log::debug!("No long name for {}, using {}", zone_id, label);
                label
            }
        };

        let abbreviation = self
            .optional(zone_id, instant, FormatHint::ShortName)
            .filter(|short| is_usable_abbreviation(short))
            .unwrap_or_else(|| synthesize_abbreviation(&display_name));

        let generic_name = self.optional(zone_id, instant, FormatHint::GenericName);

        Ok(ResolvedOffset {
            offset_hours,
            display_name,
            abbreviation,
            generic_name,
        })
    }

    /// Resolve a standard zone into a full [`TimeZone`].
    pub fn resolve_zone(&self, zone_id: &str, instant: DateTime<Utc>) -> AuthorityResult<TimeZone> {
        let resolved = self.resolve(zone_id, instant)?;
        Ok(TimeZone {
            kind: ZoneKind::Standard(zone_id.to_string()),
            offset_hours: resolved.offset_hours,
            display_name: resolved.display_name,
            city_name: city_name(zone_id),
            abbreviation: resolved.abbreviation,
            generic_name: resolved.generic_name,
            is_off_cycle: false,
            coordinates: coordinates_for(zone_id),
        })
    }

    /// A name query whose failure only costs the name.
    fn optional(&self, zone_id: &str, instant: DateTime<Utc>, hint: FormatHint) -> Option<String> {
        match self.authority.format(zone_id, instant, hint) {
            Ok(text) => text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("{:?} lookup failed for {}: {}", hint, zone_id, e);
                None
            }
        }
    }
}

/// Letters-based codes of at most five characters; numeric stand-ins such
/// as `"+0530"` are rejected.
fn is_usable_abbreviation(short: &str) -> bool {
    short.chars().count() <= MAX_ABBREVIATION_LEN
        && short.chars().any(char::is_alphabetic)
        && short.chars().all(|c| c.is_alphanumeric())
}

/// Abbreviation from the initials of up to three significant words of a
/// display name.
///
/// # Examples
///
/// ```
/// use worldclock::services::resolver::synthesize_abbreviation;
///
/// assert_eq!(synthesize_abbreviation("Eastern Standard Time"), "EST");
/// assert_eq!(synthesize_abbreviation("Time of the Pacific Islands"), "TPI");
/// assert_eq!(synthesize_abbreviation("UTC+5:30"), "GMT");
/// assert_eq!(synthesize_abbreviation(""), "GMT");
/// ```
pub fn synthesize_abbreviation(display_name: &str) -> String {
    let trimmed = display_name.trim();
    if trimmed.starts_with("UTC") || trimmed.starts_with("GMT") {
        return FALLBACK_ABBREVIATION.to_string();
    }

    let initials: String = trimmed
        .split_whitespace()
        .filter(|word| !SKIPPED_WORDS.contains(&word.to_lowercase().as_str()))
        .filter_map(|word| word.chars().next().filter(|c| c.is_alphabetic()))
        .take(3)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        FALLBACK_ABBREVIATION.to_string()
    } else {
        initials
    }
}
