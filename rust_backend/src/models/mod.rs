pub mod cache;
pub mod timeline;
pub mod zone;

pub use cache::*;
pub use timeline::*;
pub use zone::*;
