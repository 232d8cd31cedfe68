//! Clock port for time-related operations

use chrono::{DateTime, Utc};

/// Port for getting the current time.
///
/// The generation timestamp embedded in output banners is the sole
/// non-deterministic output field; injecting a fixed clock makes runs
/// byte-reproducible in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
