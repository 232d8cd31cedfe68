//! Use cases

pub mod generate_interfaces;

pub use generate_interfaces::{GenerateInterfaces, GenerateInterfacesInput};
