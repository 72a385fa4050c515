//! Clock frozen at a single instant.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Always reports the instant it was built with.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
