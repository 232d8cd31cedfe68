//! Emitter implementations, one per target surface.

pub mod c_header;
pub mod module_interface;

pub use c_header::{C_HEADER_FILE_NAME, CHeaderEmitter};
pub use module_interface::ModuleInterfaceEmitter;
