//! Constraint grid with entropy-guided collapse and propagation
//!
//! State machine over the whole grid: unresolved cells are repeatedly
//! selected by lowest Shannon entropy, collapsed by weighted draw, and their
//! constraints propagated until the grid reaches a terminal state. The solver
//! is greedy: a contradiction ends the run, no backtracking is attempted.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::algorithm::bitset::CandidateSet;
use crate::algorithm::catalog::{Direction, TileCatalog};
use crate::io::configuration::{ENTROPY_JITTER_SCALE, ENTROPY_TIE_TOLERANCE};
use crate::math::entropy::shannon_entropy;
use crate::math::sampling::RandomSource;

/// Single cell of the constraint grid
///
/// Owned exclusively by its grid; `candidates` stays non-empty while the cell
/// is unresolved unless a contradiction has already ended the run.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Remaining candidate tile indices
    pub candidates: CandidateSet,
    /// Whether the cell has been collapsed to a single tile
    pub collapsed: bool,
    /// Dense index of the resolved tile, set on collapse
    pub resolved: Option<usize>,
}

impl Cell {
    fn open(universe: usize) -> Self {
        Self {
            candidates: CandidateSet::all(universe),
            collapsed: false,
            resolved: None,
        }
    }
}

/// Position at which a candidate set became empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction {
    /// Column of the contradicted cell
    pub x: usize,
    /// Row of the contradicted cell
    pub y: usize,
}

/// Terminal state of a grid solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every cell collapsed successfully
    Resolved,
    /// A candidate set became empty during propagation
    Contradiction {
        /// Column of the contradicted cell
        x: usize,
        /// Row of the contradicted cell
        y: usize,
    },
    /// The solve loop exceeded its iteration cap
    IterationLimitExceeded {
        /// Collapses performed before giving up
        iterations: usize,
    },
}

/// Concrete tile placement produced from a resolved cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileInstance {
    /// Identifier of the placed tile
    pub tile_id: String,
    /// Column of the placement
    pub x: u32,
    /// Row of the placement
    pub y: u32,
}

/// 2D grid of candidate cells driven by a single seeded RNG stream
///
/// The run depends only on the grid's own RNG: identical seed, catalog, and
/// dimensions produce an identical sequence of collapses and an identical
/// final layout.
pub struct ConstraintGrid<'c> {
    width: usize,
    height: usize,
    cells: Array2<Cell>,
    catalog: &'c TileCatalog,
    rng: RandomSource,
}

impl<'c> ConstraintGrid<'c> {
    /// Create a grid with every cell holding the full candidate universe
    pub fn new(width: usize, height: usize, catalog: &'c TileCatalog, rng: RandomSource) -> Self {
        let universe = catalog.len();
        Self {
            width,
            height,
            cells: Array2::from_elem((height, width), Cell::open(universe)),
            catalog,
            rng,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Cell at a position, or `None` outside the grid
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get((y, x))
    }

    /// Resolved tile id at a position, or `None` while unresolved
    pub fn resolved_tile(&self, x: usize, y: usize) -> Option<&str> {
        self.cell(x, y)
            .filter(|cell| cell.collapsed)
            .and_then(|cell| cell.resolved)
            .and_then(|index| self.catalog.id(index))
    }

    /// Whether every cell has collapsed
    pub fn is_resolved(&self) -> bool {
        self.cells.iter().all(|cell| cell.collapsed)
    }

    /// Find the unresolved cell with the lowest entropy
    ///
    /// Scans row-major, tracking the minimum Shannon entropy seen. A uniform
    /// jitter in `[0, 0.001)` breaks exact ties deterministically per seed;
    /// cells within 0.001 of the running minimum collect as tie candidates
    /// and one is drawn uniformly. Returns `None` once no unresolved cell
    /// with candidates remains. Both tolerances are load-bearing for seed
    /// reproducibility and must not be approximated.
    pub fn select_lowest_entropy_cell(&mut self) -> Option<(usize, usize)> {
        let catalog = self.catalog;
        let mut min_entropy = f64::INFINITY;
        let mut ties: Vec<(usize, usize)> = Vec::new();

        for y in 0..self.height {
            for x in 0..self.width {
                let Some(cell) = self.cells.get((y, x)) else {
                    continue;
                };
                if cell.collapsed || cell.candidates.is_empty() {
                    continue;
                }

                let weights: Vec<f64> = cell
                    .candidates
                    .indices()
                    .into_iter()
                    .map(|index| catalog.weight(index))
                    .collect();
                let entropy = shannon_entropy(&weights) + self.rng.uniform() * ENTROPY_JITTER_SCALE;

                if entropy < min_entropy {
                    min_entropy = entropy;
                    ties.clear();
                    ties.push((x, y));
                } else if (entropy - min_entropy).abs() < ENTROPY_TIE_TOLERANCE {
                    ties.push((x, y));
                }
            }
        }

        if ties.is_empty() {
            return None;
        }
        let pick = self.rng.pick_index(ties.len());
        ties.get(pick).copied()
    }

    /// Collapse a cell to a single tile by weighted draw
    ///
    /// Already-collapsed cells return their resolved tile unchanged. Returns
    /// `None` for out-of-bounds positions or cells with no candidates.
    pub fn collapse(&mut self, x: usize, y: usize) -> Option<usize> {
        let catalog = self.catalog;

        let candidates = {
            let cell = self.cells.get((y, x))?;
            if cell.collapsed {
                return cell.resolved;
            }
            cell.candidates.indices()
        };
        if candidates.is_empty() {
            return None;
        }

        let weights: Vec<f64> = candidates
            .iter()
            .map(|&index| catalog.weight(index))
            .collect();
        let choice = self.rng.weighted_choice(&weights);
        let tile = candidates.get(choice).copied()?;

        let cell = self.cells.get_mut((y, x))?;
        cell.resolved = Some(tile);
        cell.collapsed = true;
        cell.candidates.collapse_to(tile);
        Some(tile)
    }

    /// Propagate adjacency constraints outward from a collapsed cell
    ///
    /// Maintains an explicit stack of positions; non-collapsed pops are
    /// skipped. For each in-bounds, not-yet-collapsed neighbor the candidate
    /// set is intersected with the collapsed tile's whitelist for that
    /// direction (an absent whitelist leaves the neighbor untouched). A
    /// strict shrink re-queues the neighbor; an empty result is a
    /// contradiction.
    ///
    /// # Errors
    ///
    /// Returns the position whose candidate set became empty.
    pub fn propagate(&mut self, origin: (usize, usize)) -> Result<(), Contradiction> {
        let catalog = self.catalog;
        let mut stack = vec![origin];

        while let Some((cx, cy)) = stack.pop() {
            let tile = match self.cells.get((cy, cx)) {
                Some(cell) if cell.collapsed => match cell.resolved {
                    Some(tile) => tile,
                    None => continue,
                },
                _ => continue,
            };

            for direction in Direction::ALL {
                let (dx, dy) = direction.offset();
                let nx = cx as i64 + dx;
                let ny = cy as i64 + dy;
                if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);

                let Some(allowed) = catalog.allowed(tile, direction) else {
                    continue;
                };
                let Some(neighbor) = self.cells.get_mut((ny, nx)) else {
                    continue;
                };
                if neighbor.collapsed {
                    continue;
                }

                let before = neighbor.candidates.count();
                neighbor.candidates.intersect_with(allowed);

                if neighbor.candidates.is_empty() {
                    return Err(Contradiction { x: nx, y: ny });
                }
                if neighbor.candidates.count() < before {
                    stack.push((nx, ny));
                }
            }
        }

        Ok(())
    }

    /// Perform one select-collapse-propagate step
    ///
    /// Returns `Ok(false)` when no unresolved cell remains and `Ok(true)`
    /// after a successful collapse.
    ///
    /// # Errors
    ///
    /// Returns the contradiction position when propagation empties a
    /// neighbor's candidate set.
    pub fn step(&mut self) -> Result<bool, Contradiction> {
        let Some((x, y)) = self.select_lowest_entropy_cell() else {
            return Ok(false);
        };

        if self.collapse(x, y).is_some() {
            self.propagate((x, y))?;
        }
        Ok(true)
    }

    /// Run steps until the grid reaches a terminal state
    ///
    /// Stops as resolved when a step finds nothing left to do, as a
    /// contradiction when propagation fails, or as limit-exceeded once
    /// `max_iterations` collapses have been performed with work remaining.
    pub fn run_to_completion(&mut self, max_iterations: usize) -> SolveOutcome {
        let mut iterations = 0;
        while iterations < max_iterations {
            match self.step() {
                Ok(false) => return SolveOutcome::Resolved,
                Ok(true) => iterations += 1,
                Err(contradiction) => {
                    return SolveOutcome::Contradiction {
                        x: contradiction.x,
                        y: contradiction.y,
                    };
                }
            }
        }
        SolveOutcome::IterationLimitExceeded { iterations }
    }

    /// Extract one tile instance per resolved cell in row-major order
    pub fn tile_instances(&self) -> Vec<TileInstance> {
        let mut instances = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(tile_id) = self.resolved_tile(x, y) {
                    instances.push(TileInstance {
                        tile_id: tile_id.to_string(),
                        x: x as u32,
                        y: y as u32,
                    });
                }
            }
        }
        instances
    }
}
