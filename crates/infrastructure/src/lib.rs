//! Enumforge Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the configuration loader, one emitter per
//! target surface, and the system clock and file system adapters.

pub mod adapters;
pub mod config;
pub mod emitters;

pub use adapters::{StdFileSystem, SystemClock};
pub use config::{ConfigError, load_config};
pub use emitters::{C_HEADER_FILE_NAME, CHeaderEmitter, ModuleInterfaceEmitter};
