use std::str::FromStr;

use crate::io::configuration::{
    DEFAULT_AREA_COUNT, DEFAULT_HEIGHT, DEFAULT_MIN_SECTOR_SIZE, DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};

/// Difficulty label carried through generation unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Relaxed pacing
    Easy,
    /// Baseline pacing
    #[default]
    Normal,
    /// Punishing pacing
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// Recognized generation parameters with their documented defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    /// Canvas width in cells
    pub width: u32,
    /// Canvas height in cells
    pub height: u32,
    /// Requested sector count, mapped onto a partition depth
    pub area_count: u32,
    /// Minimum sector size along either axis
    pub min_sector_size: u32,
    /// Whether sector roles (spawn, boss, shop) are assigned
    pub has_boss_room: bool,
    /// Difficulty label
    pub difficulty: Difficulty,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            area_count: DEFAULT_AREA_COUNT,
            min_sector_size: DEFAULT_MIN_SECTOR_SIZE,
            has_boss_room: true,
            difficulty: Difficulty::Normal,
        }
    }
}

/// Concrete generation configuration derived from a parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Canvas width in cells
    pub width: u32,
    /// Canvas height in cells
    pub height: u32,
    /// Minimum sector size along either axis
    pub min_sector_size: u32,
    /// Partition recursion depth derived from the requested sector count
    pub bsp_depth: u32,
    /// Whether sector roles are assigned
    pub has_boss_room: bool,
    /// Difficulty label
    pub difficulty: Difficulty,
}

/// Derive a concrete configuration from a parameter set
///
/// The partition depth follows the sector-count table: up to 2 sectors map
/// to depth 1, up to 4 to depth 2, up to 8 to depth 3, anything larger to
/// depth 4.
///
/// # Errors
///
/// Fails fast with an invalid-parameter error when a dimension is zero or
/// the minimum sector size reaches half of either dimension; no generation
/// work starts and no outcome log entry is recorded.
pub fn map_parameters_to_config(params: &GenerationParams) -> Result<GenerationConfig> {
    if params.width == 0 {
        return Err(invalid_parameter(
            "width",
            &params.width,
            &"width must be positive",
        ));
    }
    if params.height == 0 {
        return Err(invalid_parameter(
            "height",
            &params.height,
            &"height must be positive",
        ));
    }
    if params.min_sector_size == 0 {
        return Err(invalid_parameter(
            "min_sector_size",
            &params.min_sector_size,
            &"minimum sector size must be positive",
        ));
    }
    if params.min_sector_size * 2 >= params.width || params.min_sector_size * 2 >= params.height {
        return Err(invalid_parameter(
            "min_sector_size",
            &params.min_sector_size,
            &"minimum sector size must stay below half of each dimension",
        ));
    }

    let bsp_depth = match params.area_count {
        0..=2 => 1,
        3..=4 => 2,
        5..=8 => 3,
        _ => 4,
    };

    Ok(GenerationConfig {
        width: params.width,
        height: params.height,
        min_sector_size: params.min_sector_size,
        bsp_depth,
        has_boss_room: params.has_boss_room,
        difficulty: params.difficulty,
    })
}
