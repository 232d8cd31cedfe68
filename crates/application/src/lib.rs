//! Enumforge Application - Generation pipeline
//!
//! This crate orchestrates a generation run over ports implemented by the
//! infrastructure layer: a clock, a file system, and one emitter per
//! target surface.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{GenerateError, GenerateResult};
pub use ports::{Clock, Emitter, FileSystem, FileSystemError, RenderContext};
pub use use_cases::{GenerateInterfaces, GenerateInterfacesInput};
