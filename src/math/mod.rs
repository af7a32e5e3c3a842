//! Mathematical utilities for the generation engine

/// Shannon entropy over weighted candidate distributions
pub mod entropy;
/// Seeded random sampling utilities
pub mod sampling;
