//! Repository factory for dependency injection.
//!
//! Builds the cache store selected by configuration or the
//! `REPOSITORY_TYPE` environment variable.

use std::path::Path;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{CacheRepository, RepositoryError, RepositoryResult};

#[cfg(feature = "file-store")]
use super::repositories::FileRepository;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryType {
    /// In-memory store, lost when the process exits
    #[default]
    Memory,
    /// JSON files in a directory
    File,
}

impl RepositoryType {
    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("memory", "file")
    ///
    /// # Returns
    /// * `Ok(RepositoryType)` if valid
    /// * `Err` if invalid
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "local" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }

    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. Returns `None` when unset or unrecognised.
    pub fn from_env() -> Option<Self> {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|s| Self::from_str(&s).ok())
    }
}

/// Repository factory for creating cache store instances.
///
/// # Example
/// ```
/// use worldclock::db::{CacheRepository, RepositoryFactory, RepositoryType};
///
/// let repo = RepositoryFactory::create(RepositoryType::Memory, None).unwrap();
/// assert!(repo.load(2026).unwrap().is_none());
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `path` - Directory for the file store (required for `File`)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn CacheRepository>)` - Shared repository instance
    /// * `Err(RepositoryError)` - If the configuration is incomplete
    pub fn create(
        repo_type: RepositoryType,
        path: Option<&Path>,
    ) -> RepositoryResult<Arc<dyn CacheRepository>> {
        match repo_type {
            RepositoryType::Memory => Ok(Self::create_local()),
            RepositoryType::File => {
                let path = path.ok_or_else(|| {
                    RepositoryError::ConfigurationError(
                        "File repository requires a cache path".to_string(),
                    )
                })?;
                Self::create_file(path)
            }
        }
    }

    /// Create an in-memory repository.
    pub fn create_local() -> Arc<dyn CacheRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a directory-backed repository.
    #[cfg(feature = "file-store")]
    pub fn create_file(path: &Path) -> RepositoryResult<Arc<dyn CacheRepository>> {
        if path.as_os_str().is_empty() {
            return Err(RepositoryError::ConfigurationError(
                "File repository path is empty".to_string(),
            ));
        }
        if path.is_file() {
            return Err(RepositoryError::ConfigurationError(format!(
                "File repository path {} is not a directory",
                path.display()
            )));
        }
        Ok(Arc::new(FileRepository::new(path)))
    }

    #[cfg(not(feature = "file-store"))]
    pub fn create_file(path: &Path) -> RepositoryResult<Arc<dyn CacheRepository>> {
        Err(RepositoryError::ConfigurationError(format!(
            "File repository at {} requires the `file-store` feature",
            path.display()
        )))
    }
}
