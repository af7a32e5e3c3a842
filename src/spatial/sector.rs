use serde::{Deserialize, Serialize};

use crate::math::sampling::RandomSource;
use crate::spatial::rect::Rectangle;

/// Semantic role attached to a partition sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorKind {
    /// Unremarkable sector with no special role
    Generic,
    /// Player entry sector (always the first leaf)
    Spawn,
    /// Boss encounter sector (always the last leaf)
    Boss,
    /// Vendor sector chosen from the interior leaves
    Shop,
    /// Central connector sector
    Hub,
}

/// Flattened leaf view of the partition tree
///
/// Sectors are emitted in pre-order traversal order; role assignment indexes
/// into that order, so it must not be re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    /// Stable identifier derived from the leaf's traversal position
    pub id: String,
    /// Rectangle covered by the sector
    pub bounds: Rectangle,
    /// Semantic role of the sector
    pub kind: SectorKind,
}

impl Sector {
    /// Create a generic sector from its traversal position and bounds
    pub fn new(position: usize, bounds: Rectangle) -> Self {
        Self {
            id: format!("sector_{position}"),
            bounds,
            kind: SectorKind::Generic,
        }
    }
}

/// Assign spawn, boss, and shop roles across the sector list
///
/// The first sector becomes the spawn. With more than one sector the last
/// becomes the boss. With more than three sectors, `min(2, len / 3)` distinct
/// interior sectors (never the first or last) become shops. Everything else
/// stays generic. An empty list is a no-op.
pub fn assign_roles(sectors: &mut [Sector], rng: &mut RandomSource) {
    let len = sectors.len();

    if let Some(first) = sectors.first_mut() {
        first.kind = SectorKind::Spawn;
    } else {
        return;
    }

    if len > 1
        && let Some(last) = sectors.last_mut()
    {
        last.kind = SectorKind::Boss;
    }

    let shop_count = 2.min(len / 3);
    if len > 3 {
        // Interior indices exclude the spawn and boss positions
        for interior in rng.sample_distinct(len - 2, shop_count) {
            if let Some(sector) = sectors.get_mut(interior + 1) {
                sector.kind = SectorKind::Shop;
            }
        }
    }
}
