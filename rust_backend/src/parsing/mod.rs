//! Parsers for zone identifiers and free-text queries.
//!
//! - [`zone_id`]: split IANA identifiers into region, base location and city
//! - [`query`]: recognise offset patterns (`utc-5`, `EST+5`, `+05:30`) in search input

pub mod query;
pub mod zone_id;

pub use query::parse_offset_query;
pub use zone_id::{city_name, region, ZoneIdParts};
