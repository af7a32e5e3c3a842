use serde::{Deserialize, Serialize};

use crate::algorithm::grid::TileInstance;
use crate::spatial::sector::Sector;

/// Summary statistics attached to a generated artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Number of sectors in the artifact
    pub sector_count: usize,
    /// Number of tile instances in the artifact
    ///
    /// Callers enforcing a downstream capacity limit must check this count
    /// before handing the artifact to an adapter; the pipeline itself does
    /// not enforce the limit.
    pub tile_count: usize,
    /// Tile instances per canvas cell, `tile_count / (width * height)`
    pub density: f64,
}

/// Immutable output of one successful pipeline run
///
/// Sectors and tiles share only the overall canvas dimensions; sectors are a
/// semantic overlay over the independently solved grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// Identifier derived deterministically from the seed
    pub id: String,
    /// Seed token that reproduces this artifact exactly
    pub seed: String,
    /// Canvas width in cells
    pub width: u32,
    /// Canvas height in cells
    pub height: u32,
    /// Sectors in pre-order traversal order
    pub sectors: Vec<Sector>,
    /// Tile instances in row-major order
    pub tiles: Vec<TileInstance>,
    /// Summary statistics
    pub metadata: ArtifactMetadata,
}
