//! Procedural level generation combining binary space partitioning with wave function collapse
//!
//! The engine runs a two-stage pipeline: a randomized BSP pass carves the canvas
//! into disjoint sectors, then an entropy-guided constraint solver fills the grid
//! with concrete tile placements. Both stages draw on seeded RNG streams derived
//! from a single seed token, so identical seeds reproduce identical artifacts.

#![forbid(unsafe_code)]

/// Constraint solver: candidate sets, tile catalog, and the collapse grid
pub mod algorithm;
/// Input/output operations, JSON export, and error handling
pub mod io;
/// Entropy and seeded sampling utilities
pub mod math;
/// Pipeline orchestration from parameters to a generated artifact
pub mod pipeline;
/// Rectangles, space partitioning, and sector role assignment
pub mod spatial;

pub use io::error::{GenerationError, Result};
