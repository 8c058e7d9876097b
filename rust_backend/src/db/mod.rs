//! Persisted key-value store for the yearly zone cache.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  ZoneCatalogCache (services::catalog)        │
//! │  - serialization, shape validation           │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────┐
//! │  CacheRepository trait (repository)          │
//! └───────────────────┬──────────────────────────┘
//!          ┌──────────┴──────────┐
//! ┌────────▼─────────┐ ┌─────────▼───────────────┐
//! │ LocalRepository  │ │ FileRepository          │
//! │ (in-memory)      │ │ (zones-<year>.json)     │
//! └──────────────────┘ └─────────────────────────┘
//! ```
//!
//! Use [`RepositoryFactory`] to build the store named in the configuration.

pub mod factory;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repository::{CacheRepository, RepositoryError, RepositoryResult};
