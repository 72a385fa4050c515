//! Clock port for stamping generated reports.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Reports are the only time-dependent output; substituting a fixed clock
/// keeps rendered reports reproducible under test.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
