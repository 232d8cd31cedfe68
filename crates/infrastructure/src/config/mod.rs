//! Configuration document loading.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, load_config, map_document};
