//! JSON configuration for the demo binaries.
pub mod scan;
pub mod warp;
