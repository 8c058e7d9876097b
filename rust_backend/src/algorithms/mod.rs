//! Zone selection algorithms.
//!
//! # Components
//!
//! - [`selector`]: Centering algorithm picking an odd, offset-unique set of
//!   zones around the reference zone
//! - [`random`]: Injectable random source and shuffling helpers
//!
//! # Example
//!
//! ```
//! use worldclock::algorithms::ZoneSelector;
//! use worldclock::models::TimeZone;
//!
//! let catalog: Vec<TimeZone> = (-12..=14)
//!     .map(|h| TimeZone::custom(f64::from(h), None, None))
//!     .collect();
//! let reference = catalog[12].clone();
//!
//! let selection = ZoneSelector::seeded(42).select(&reference, 5, &catalog);
//! assert_eq!(selection.len(), 5);
//! assert!(selection.contains(&reference));
//! ```

pub mod random;
pub mod selector;

pub use random::{RandomSource, SeededRandom};
pub use selector::ZoneSelector;

#[cfg(test)]
mod selector_tests;
