//! Port traits defining external boundaries.
//!
//! Drift analysis touches the outside world in two places: the filesystem
//! (manifest, sources, docs, outputs) and the clock (report timestamps).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod filesystem;

pub use clock::Clock;
pub use filesystem::{FileSystem, FsError};
