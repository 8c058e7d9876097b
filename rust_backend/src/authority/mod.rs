//! The external time authority.
//!
//! Offsets and names come from a zone database that this crate does not
//! implement. [`TimeAuthority`] is the one capability the engine needs from
//! it: format an instant in a zone according to a [`FormatHint`].
//! [`ZoneDirectory`] enumerates the identifiers the catalog is built from.
//!
//! [`TzdbAuthority`] is the production adapter over the IANA database
//! compiled into `chrono-tz`.

pub mod names;
pub mod tzdb;

use chrono::{DateTime, Utc};

pub use tzdb::TzdbAuthority;

/// Result type for authority queries
pub type AuthorityResult<T> = Result<T, AuthorityError>;

/// Error type for authority queries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorityError {
    #[error("Unknown time zone identifier: {0}")]
    UnknownZone(String),

    #[error("Time authority unavailable: {0}")]
    Unavailable(String),
}

/// What the authority should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatHint {
    /// Numeric long-form offset, `"GMT-05:00"` (bare `"GMT"` at zero).
    LongOffset,
    /// Long display name, `"Eastern Standard Time"`.
    LongName,
    /// Short name, `"EST"`.
    ShortName,
    /// Season-independent name, `"Eastern Time"`.
    GenericName,
}

/// Locale-formatting source of truth for zone offsets and names.
pub trait TimeAuthority: Send + Sync {
    /// Render `instant` in `zone_id` according to `hint`.
    ///
    /// # Returns
    /// * `Ok(Some(text))` - the formatted value
    /// * `Ok(None)` - the authority has no value for this hint
    /// * `Err(AuthorityError::UnknownZone)` - the identifier is not recognised
    fn format(
        &self,
        zone_id: &str,
        instant: DateTime<Utc>,
        hint: FormatHint,
    ) -> AuthorityResult<Option<String>>;
}

/// Enumerates known zone identifiers.
pub trait ZoneDirectory: Send + Sync {
    fn zone_ids(&self) -> Vec<String>;
}
