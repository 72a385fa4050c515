//! In-memory adapters: a map-backed filesystem and a fixed clock.

pub mod clock;
pub mod filesystem;

pub use clock::FixedClock;
pub use filesystem::MemoryFileSystem;
