//! Directory-backed cache store, one JSON file per year.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::db::repository::{CacheRepository, RepositoryResult};

static ENTRY_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^zones-(-?\d+)\.json$").unwrap());

/// Cache store writing `zones-<year>.json` files inside a directory.
///
/// The directory is created on the first write. Files that do not match the
/// entry naming scheme are never touched, including by [`clear`](CacheRepository::clear).
#[derive(Debug, Clone)]
pub struct FileRepository {
    root: PathBuf,
}

impl FileRepository {
    /// Create a repository rooted at `root`.
    ///
    /// # Arguments
    /// * `root` - Directory holding the entry files; need not exist yet
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, year: i32) -> PathBuf {
        self.root.join(format!("zones-{}.json", year))
    }

    fn entries(&self) -> RepositoryResult<Vec<(i32, PathBuf)>> {
        let dir = match fs::read_dir(&self.root) {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for item in dir {
            let item = item?;
            let name = item.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(year) = ENTRY_FILE
                .captures(name)
                .and_then(|c| c[1].parse::<i32>().ok())
            {
                entries.push((year, item.path()));
            }
        }
        entries.sort_by_key(|(year, _)| *year);
        Ok(entries)
    }
}

impl CacheRepository for FileRepository {
    fn load(&self, year: i32) -> RepositoryResult<Option<String>> {
        match fs::read_to_string(self.entry_path(year)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, year: i32, payload: &str) -> RepositoryResult<()> {
        fs::create_dir_all(&self.root)?;
        // Write then rename so a crash never leaves a half-written entry.
        let target = self.entry_path(year);
        let staging = target.with_extension("json.tmp");
        fs::write(&staging, payload)?;
        fs::rename(&staging, &target)?;
        log::debug!("Stored zone cache entry {}", target.display());
        Ok(())
    }

    fn clear(&self) -> RepositoryResult<()> {
        for (_, path) in self.entries()? {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn years(&self) -> RepositoryResult<Vec<i32>> {
        Ok(self.entries()?.into_iter().map(|(year, _)| year).collect())
    }
}
