//! Live adapters for real disk and clock access.

pub mod clock;
pub mod filesystem;

pub use clock::LiveClock;
pub use filesystem::LiveFileSystem;
