//! Pipeline driver composing partitioning and the grid solve
//!
//! Each run is single-threaded and fully sequential: partitioning finishes
//! before the catalog and grid steps begin. Distinct runs share no mutable
//! state and may execute concurrently; the catalog is read-only once built.

use rand::{Rng, distr::Alphanumeric};

use crate::algorithm::catalog::{TileCatalog, TileDef};
use crate::algorithm::grid::{ConstraintGrid, SolveOutcome};
use crate::io::configuration::{DEFAULT_MAX_ITERATIONS, DEFAULT_TARGET, SEED_TOKEN_LENGTH};
use crate::io::error::{GenerationError, Result};
use crate::math::sampling::{RandomSource, seed_from_token};
use crate::pipeline::artifact::{ArtifactMetadata, GeneratedArtifact};
use crate::pipeline::config::{GenerationParams, map_parameters_to_config};
use crate::pipeline::outcome::{OutcomeLog, OutcomeLogEntry, OutcomeStatus, unix_timestamp};
use crate::spatial::partition::PartitionTree;
use crate::spatial::rect::Rectangle;
use crate::spatial::sector::assign_roles;

/// Build the default dungeon tile catalog
///
/// Three tiles: walkable floor (weight 5.0) neighboring floor, door, and
/// wall on every side; blocking wall (weight 2.0) neighboring wall and
/// floor; passage door (weight 0.5) neighboring floor and wall.
pub fn build_default_catalog() -> TileCatalog {
    TileCatalog::new(vec![
        TileDef::new("floor", "floor", 5.0)
            .with_tag("base")
            .with_tag("walkable")
            .with_allowed_everywhere(&["floor", "door", "wall"]),
        TileDef::new("wall", "wall", 2.0)
            .with_tag("blocking")
            .with_allowed_everywhere(&["wall", "floor"]),
        TileDef::new("door", "door", 0.5)
            .with_tag("passage")
            .with_allowed_everywhere(&["floor", "wall"]),
    ])
}

/// Synthesize a fresh random seed token
///
/// Used only when the caller supplies no seed; the returned token feeds the
/// deterministic generation path like any caller-provided seed would.
pub fn synthesize_seed() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(SEED_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Two-stage generation pipeline with an outcome log
///
/// Runs the space partitioner and the constraint grid off the same seed
/// token and merges both outputs into one artifact. Every attempt after
/// parameter validation appends exactly one log entry, success or error.
pub struct GenerationPipeline {
    target: String,
    catalog: Option<TileCatalog>,
    max_iterations: usize,
    log: OutcomeLog,
}

impl Default for GenerationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationPipeline {
    /// Create a pipeline with the default catalog and iteration cap
    pub fn new() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            catalog: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            log: OutcomeLog::new(),
        }
    }

    /// Record a different target label in outcome log entries
    #[must_use]
    pub fn with_target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    /// Replace the default tile catalog for all runs of this pipeline
    #[must_use]
    pub fn with_catalog(mut self, catalog: TileCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Override the solver iteration cap
    #[must_use]
    pub const fn with_iteration_cap(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// The outcome log accumulated across runs
    pub const fn log(&self) -> &OutcomeLog {
        &self.log
    }

    /// Generate an artifact from a parameter set
    ///
    /// Synthesizes a seed token when none is given. The same seed, parameters,
    /// and catalog always reproduce a byte-identical artifact. Failures after
    /// parameter validation append an error log entry before surfacing; no
    /// partial artifact is ever returned.
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error before any generation work when the
    /// parameter set fails validation (not logged as an attempt), and a
    /// contradiction or iteration-limit error when the grid solve fails.
    pub fn generate(
        &mut self,
        params: &GenerationParams,
        requester_id: &str,
        category: &str,
        seed: Option<&str>,
    ) -> Result<GeneratedArtifact> {
        let config = map_parameters_to_config(params)?;

        let seed_token = seed.map_or_else(synthesize_seed, str::to_string);
        let seed_value = seed_from_token(&seed_token);
        let request_id = format!("req_{:08x}", (seed_value >> 32) as u32);

        // Stage one: partition the canvas and overlay sector roles
        let mut partition_rng = RandomSource::new(seed_value);
        let bounds = Rectangle::new(0, 0, config.width, config.height);
        let tree = PartitionTree::generate(
            bounds,
            config.min_sector_size,
            config.bsp_depth,
            &mut partition_rng,
        );
        let mut sectors = tree.sectors();
        if config.has_boss_room {
            assign_roles(&mut sectors, &mut partition_rng);
        }

        // Stage two: solve the full canvas with a fresh stream off the same seed
        let catalog = self
            .catalog
            .clone()
            .unwrap_or_else(build_default_catalog);
        let mut grid = ConstraintGrid::new(
            config.width as usize,
            config.height as usize,
            &catalog,
            RandomSource::new(seed_value),
        );

        let error = match grid.run_to_completion(self.max_iterations) {
            SolveOutcome::Resolved => {
                let tiles = grid.tile_instances();
                let metadata = ArtifactMetadata {
                    sector_count: sectors.len(),
                    tile_count: tiles.len(),
                    density: tiles.len() as f64 / (f64::from(config.width) * f64::from(config.height)),
                };
                let artifact = GeneratedArtifact {
                    id: format!("map_{:08x}", seed_value as u32),
                    seed: seed_token.clone(),
                    width: config.width,
                    height: config.height,
                    sectors,
                    tiles,
                    metadata,
                };

                self.log.append(OutcomeLogEntry {
                    timestamp: unix_timestamp(),
                    requester_id: requester_id.to_string(),
                    request_id,
                    category: category.to_string(),
                    target: self.target.clone(),
                    seed: seed_token,
                    sector_count: artifact.metadata.sector_count,
                    tile_count: artifact.metadata.tile_count,
                    status: OutcomeStatus::Success,
                    error_kind: None,
                    error_message: None,
                });
                return Ok(artifact);
            }
            SolveOutcome::Contradiction { x, y } => GenerationError::Contradiction { x, y },
            SolveOutcome::IterationLimitExceeded { iterations } => {
                GenerationError::IterationLimit { iterations }
            }
        };

        self.log.append(OutcomeLogEntry {
            timestamp: unix_timestamp(),
            requester_id: requester_id.to_string(),
            request_id,
            category: category.to_string(),
            target: self.target.clone(),
            seed: seed_token,
            sector_count: 0,
            tile_count: 0,
            status: OutcomeStatus::Error,
            error_kind: Some(error.kind().to_string()),
            error_message: Some(error.to_string()),
        });
        Err(error)
    }
}
