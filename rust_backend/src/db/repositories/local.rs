//! In-memory cache store.
//!
//! Entries live for the lifetime of the value. Used when persistence across
//! sessions is not wanted, and in tests.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::db::repository::{CacheRepository, RepositoryResult};

/// In-memory local repository.
///
/// Clones share the same underlying map.
///
/// # Example
/// ```
/// use worldclock::db::repositories::LocalRepository;
/// use worldclock::db::repository::CacheRepository;
///
/// let repo = LocalRepository::new();
/// repo.store(2026, "{}").unwrap();
/// assert_eq!(repo.load(2026).unwrap().as_deref(), Some("{}"));
/// assert_eq!(repo.load(2027).unwrap(), None);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<BTreeMap<i32, String>>>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.data.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheRepository for LocalRepository {
    fn load(&self, year: i32) -> RepositoryResult<Option<String>> {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        Ok(data.get(&year).cloned())
    }

    fn store(&self, year: i32, payload: &str) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        data.insert(year, payload.to_string());
        Ok(())
    }

    fn clear(&self) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        data.clear();
        Ok(())
    }

    fn years(&self) -> RepositoryResult<Vec<i32>> {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        Ok(data.keys().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_overwrites() {
        let repo = LocalRepository::new();
        repo.store(2026, "a").unwrap();
        repo.store(2026, "b").unwrap();
        assert_eq!(repo.load(2026).unwrap().as_deref(), Some("b"));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_clear_and_years() {
        let repo = LocalRepository::new();
        repo.store(2027, "x").unwrap();
        repo.store(2025, "y").unwrap();
        assert_eq!(repo.years().unwrap(), vec![2025, 2027]);

        let shared = repo.clone();
        shared.clear().unwrap();
        assert!(repo.is_empty());
        assert_eq!(repo.load(2025).unwrap(), None);
    }
}
