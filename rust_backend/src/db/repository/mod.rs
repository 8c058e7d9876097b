//! Persisted key-value store behind the yearly zone cache.
//!
//! The store only knows about opaque serialized payloads keyed by calendar
//! year. Shape validation and (de)serialization of
//! [`YearlyCacheEntry`](crate::models::YearlyCacheEntry) live in the catalog
//! cache, so any backend that can keep strings works.
//!
//! - [`error`]: Error types for repository operations

pub mod error;

pub use error::{RepositoryError, RepositoryResult};

/// Year-keyed payload store.
///
/// Implementations must be safe to share between threads; the catalog cache
/// holds them as `Arc<dyn CacheRepository>`.
pub trait CacheRepository: Send + Sync {
    /// Load the payload stored for `year`.
    ///
    /// # Returns
    /// * `Ok(Some(payload))` if an entry exists
    /// * `Ok(None)` if nothing is stored for that year
    /// * `Err(RepositoryError)` if the store cannot be read
    fn load(&self, year: i32) -> RepositoryResult<Option<String>>;

    /// Store `payload` for `year`, replacing any previous entry.
    fn store(&self, year: i32, payload: &str) -> RepositoryResult<()>;

    /// Remove every stored entry.
    fn clear(&self) -> RepositoryResult<()>;

    /// Years that currently have an entry, ascending.
    fn years(&self) -> RepositoryResult<Vec<i32>>;
}
