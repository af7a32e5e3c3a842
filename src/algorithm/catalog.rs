//! Immutable tile catalog with precompiled adjacency rules
//!
//! Tile definitions name their neighbors by id; the catalog resolves those
//! names to dense indices and precompiles each directional whitelist into a
//! [`CandidateSet`] so propagation never touches string keys.

use std::collections::{BTreeSet, HashMap};

use crate::algorithm::bitset::CandidateSet;

/// Cardinal direction on the grid
///
/// The array order of [`Direction::ALL`] is the propagation visit order;
/// changing it changes the RNG-visible collapse sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards decreasing y
    North,
    /// Towards increasing y
    South,
    /// Towards increasing x
    East,
    /// Towards decreasing x
    West,
}

impl Direction {
    /// All directions in fixed propagation order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Grid offset of the neighboring cell in this direction
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// Dense index used for rule table lookups
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }
}

/// Definition of a single tile kind
///
/// An absent direction entry in `allowed_neighbors` means "no restriction";
/// a present but empty set means nothing may sit on that side.
#[derive(Debug, Clone)]
pub struct TileDef {
    /// Unique tile identifier
    pub id: String,
    /// Coarse category tag (floor, wall, ...)
    pub category: String,
    /// Free-form descriptive tags
    pub tags: BTreeSet<String>,
    /// Positive selection weight
    pub weight: f64,
    /// Directional adjacency whitelist by neighbor tile id
    pub allowed_neighbors: HashMap<Direction, BTreeSet<String>>,
}

impl TileDef {
    /// Create a tile definition with no adjacency restrictions
    pub fn new(id: &str, category: &str, weight: f64) -> Self {
        Self {
            id: id.to_string(),
            category: category.to_string(),
            tags: BTreeSet::new(),
            weight,
            allowed_neighbors: HashMap::new(),
        }
    }

    /// Add a descriptive tag
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.insert(tag.to_string());
        self
    }

    /// Restrict a direction to the given neighbor ids
    #[must_use]
    pub fn with_allowed(mut self, direction: Direction, neighbors: &[&str]) -> Self {
        self.allowed_neighbors.insert(
            direction,
            neighbors.iter().map(|id| (*id).to_string()).collect(),
        );
        self
    }

    /// Restrict all four directions to the same neighbor ids
    #[must_use]
    pub fn with_allowed_everywhere(self, neighbors: &[&str]) -> Self {
        Direction::ALL
            .iter()
            .fold(self, |def, &dir| def.with_allowed(dir, neighbors))
    }
}

/// Immutable set of tile definitions consumed by the solver
///
/// Construction resolves ids to dense indices and precompiles the adjacency
/// whitelists; after that the catalog is read-only and safe to share across
/// concurrent runs.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    tiles: Vec<TileDef>,
    index_by_id: HashMap<String, usize>,
    /// Per tile, per direction: `None` = unrestricted
    adjacency: Vec<[Option<CandidateSet>; 4]>,
}

impl TileCatalog {
    /// Build a catalog from tile definitions
    ///
    /// Neighbor ids that name no tile in the set are dropped from the
    /// compiled whitelists; an entry whose ids all resolve to nothing
    /// compiles to an empty set (nothing allowed), not to "unrestricted".
    pub fn new(tiles: Vec<TileDef>) -> Self {
        let index_by_id: HashMap<String, usize> = tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| (tile.id.clone(), i))
            .collect();

        let universe = tiles.len();
        let adjacency = tiles
            .iter()
            .map(|tile| {
                let mut rules: [Option<CandidateSet>; 4] = [None, None, None, None];
                for &direction in &Direction::ALL {
                    if let Some(names) = tile.allowed_neighbors.get(&direction) {
                        let mut allowed = CandidateSet::empty(universe);
                        for name in names {
                            if let Some(&tile_index) = index_by_id.get(name) {
                                allowed.insert(tile_index);
                            }
                        }
                        if let Some(slot) = rules.get_mut(direction.index()) {
                            *slot = Some(allowed);
                        }
                    }
                }
                rules
            })
            .collect();

        Self {
            tiles,
            index_by_id,
            adjacency,
        }
    }

    /// Number of tile kinds in the catalog
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile definition at a dense index
    pub fn tile(&self, index: usize) -> Option<&TileDef> {
        self.tiles.get(index)
    }

    /// Tile id at a dense index
    pub fn id(&self, index: usize) -> Option<&str> {
        self.tiles.get(index).map(|tile| tile.id.as_str())
    }

    /// Dense index of a tile id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Selection weight at a dense index, defaulting to 1.0 for unknown tiles
    pub fn weight(&self, index: usize) -> f64 {
        self.tiles.get(index).map_or(1.0, |tile| tile.weight)
    }

    /// Precompiled whitelist for a tile's neighbors in a direction
    ///
    /// `None` means the tile places no restriction on that side.
    pub fn allowed(&self, index: usize, direction: Direction) -> Option<&CandidateSet> {
        self.adjacency
            .get(index)
            .and_then(|rules| rules.get(direction.index()))
            .and_then(|rule| rule.as_ref())
    }
}
