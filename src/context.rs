//! Service context bundling the port trait objects.

use chrono::{TimeZone, Utc};

use crate::adapters::live::{LiveClock, LiveFileSystem};
use crate::adapters::memory::{FixedClock, MemoryFileSystem};
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles the external boundaries a run needs.
///
/// Constructors wire up different adapter implementations (live, in-memory).
pub struct ServiceContext {
    /// Clock for report timestamps.
    pub clock: Box<dyn Clock>,
    /// Filesystem for manifests, sources, docs and outputs.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, clock: Box<dyn Clock>) -> Self {
        Self { clock, fs }
    }

    /// Creates a live context backed by the real disk and system clock.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Box::new(LiveFileSystem), Box::new(LiveClock))
    }

    /// Creates a context over an in-memory filesystem with the clock fixed
    /// at 2025-01-01T00:00:00Z.
    #[must_use]
    pub fn in_memory(fs: MemoryFileSystem) -> Self {
        let epoch = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().unwrap_or_default();
        Self::new(Box::new(fs), Box::new(FixedClock(epoch)))
    }
}
