//! Engine constants and runtime configuration defaults

// Canvas defaults applied when parameters omit dimensions
/// Default canvas width in cells
pub const DEFAULT_WIDTH: u32 = 40;
/// Default canvas height in cells
pub const DEFAULT_HEIGHT: u32 = 40;

/// Default requested sector count
pub const DEFAULT_AREA_COUNT: u32 = 3;
/// Default minimum sector size along either axis
pub const DEFAULT_MIN_SECTOR_SIZE: u32 = 8;

/// Default cap on solver collapses before giving up
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

// Both tolerances are load-bearing for seed reproducibility
/// Width of the entropy band treated as a tie during cell selection
pub const ENTROPY_TIE_TOLERANCE: f64 = 0.001;
/// Ceiling of the uniform jitter added to each entropy measurement
pub const ENTROPY_JITTER_SCALE: f64 = 0.001;

/// Length of synthesized seed tokens
pub const SEED_TOKEN_LENGTH: usize = 8;

/// Target label recorded in outcome log entries
pub const DEFAULT_TARGET: &str = "generic";

/// Requester recorded when the CLI runs without an explicit requester id
pub const DEFAULT_REQUESTER: &str = "cli";
