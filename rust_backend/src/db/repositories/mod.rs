//! Cache store implementations.
//!
//! - `local`: In-memory store for tests and single-session use
//! - `file`: One JSON file per year inside a directory (`file-store` feature)

#[cfg(feature = "file-store")]
pub mod file;
pub mod local;

#[cfg(feature = "file-store")]
pub use file::FileRepository;
pub use local::LocalRepository;
