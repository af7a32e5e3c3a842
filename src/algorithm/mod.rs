//! Constraint-solving core of the generation engine
//!
//! The solver fills a fixed-size grid by repeatedly collapsing the cell with
//! the lowest Shannon entropy and propagating adjacency constraints to its
//! neighbors until the grid resolves, contradicts, or hits the iteration cap.

/// Efficient bitset implementation for candidate tile tracking
pub mod bitset;
/// Immutable tile definitions with precompiled adjacency rules
pub mod catalog;
/// Entropy-guided collapse grid with constraint propagation
pub mod grid;

pub use bitset::CandidateSet;
pub use catalog::{Direction, TileCatalog, TileDef};
pub use grid::{ConstraintGrid, SolveOutcome, TileInstance};
