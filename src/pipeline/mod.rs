//! Pipeline orchestration from a parameter set to a generated artifact
//!
//! The pipeline maps parameters to concrete dimensions, runs the space
//! partitioner and the constraint grid off the same seed token, merges both
//! outputs into a single immutable artifact, and records a structured outcome
//! log entry for every attempt.

/// Generated artifact shape and metadata
pub mod artifact;
/// Parameter mapping and validation
pub mod config;
/// Append-only outcome log
pub mod outcome;
/// Pipeline driver composing partitioning and the grid solve
pub mod runner;

pub use artifact::{ArtifactMetadata, GeneratedArtifact};
pub use config::{Difficulty, GenerationConfig, GenerationParams, map_parameters_to_config};
pub use outcome::{OutcomeLog, OutcomeLogEntry, OutcomeStatus};
pub use runner::{GenerationPipeline, build_default_catalog, synthesize_seed};
