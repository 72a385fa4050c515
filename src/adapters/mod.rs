//! Adapter implementations for the port traits.
//!
//! - `live`: real disk and system clock.
//! - `memory`: map-backed files and a fixed clock, for tests.

pub mod live;
pub mod memory;
