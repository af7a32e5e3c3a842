//! Spatial data structures and binary space partitioning
//!
//! This module contains the spatial half of the pipeline:
//! - Integer rectangles and split arithmetic
//! - Randomized BSP tree generation over an arena of nodes
//! - Sector flattening and semantic role assignment

/// Randomized binary space partitioning over an arena of nodes
pub mod partition;
/// Integer rectangle with split arithmetic
pub mod rect;
/// Sector views over partition leaves and role assignment
pub mod sector;

pub use partition::PartitionTree;
pub use rect::Rectangle;
pub use sector::{Sector, SectorKind};
