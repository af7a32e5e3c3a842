//! Command-line interface for batch map generation

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::{
    DEFAULT_AREA_COUNT, DEFAULT_HEIGHT, DEFAULT_MIN_SECTOR_SIZE, DEFAULT_REQUESTER, DEFAULT_WIDTH,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::export::write_json_file;
use crate::pipeline::config::{Difficulty, GenerationParams};
use crate::pipeline::runner::GenerationPipeline;

#[derive(Parser)]
#[command(name = "mapweave")]
#[command(
    author,
    version,
    about = "Generate tile maps using binary space partitioning and wave function collapse"
)]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Directory receiving artifact JSON files
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output: PathBuf,

    /// Canvas width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Requested sector count
    #[arg(short, long, default_value_t = DEFAULT_AREA_COUNT)]
    pub areas: u32,

    /// Minimum sector size along either axis
    #[arg(short, long, default_value_t = DEFAULT_MIN_SECTOR_SIZE)]
    pub min_sector_size: u32,

    /// Difficulty label (easy, normal, hard)
    #[arg(short, long, default_value = "normal")]
    pub difficulty: String,

    /// Skip sector role assignment (spawn, boss, shop)
    #[arg(long)]
    pub no_boss: bool,

    /// Seed token for reproducible generation; suffixed per map in batches
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Number of maps to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Requester id recorded in the outcome log
    #[arg(long, default_value = DEFAULT_REQUESTER)]
    pub requester: String,

    /// Category label recorded in the outcome log
    #[arg(long, default_value = "dungeon")]
    pub category: String,

    /// Write the outcome log as outcome_log.json alongside the artifacts
    #[arg(short, long)]
    pub log: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Whether batch progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed token for the map at a batch index
    ///
    /// A caller-provided seed is used verbatim for single maps and suffixed
    /// with the index in batches so every map stays individually
    /// reproducible. Without a seed each map synthesizes its own.
    pub fn seed_for(&self, index: usize) -> Option<String> {
        self.seed.as_ref().map(|seed| {
            if self.count > 1 {
                format!("{seed}-{index}")
            } else {
                seed.clone()
            }
        })
    }
}

/// Orchestrates batch map generation with progress tracking
pub struct BatchProcessor {
    cli: Cli,
    pipeline: GenerationPipeline,
}

impl BatchProcessor {
    /// Create a processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            pipeline: GenerationPipeline::new(),
        }
    }

    /// Generate the requested maps and write them as JSON files
    ///
    /// # Errors
    ///
    /// Returns an error when the arguments fail validation, a generation
    /// attempt fails, or an output file cannot be written.
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        let difficulty = Difficulty::from_str(&self.cli.difficulty)
            .map_err(|reason| invalid_parameter("difficulty", &self.cli.difficulty, &reason))?;

        let params = GenerationParams {
            width: self.cli.width,
            height: self.cli.height,
            area_count: self.cli.areas,
            min_sector_size: self.cli.min_sector_size,
            has_boss_room: !self.cli.no_boss,
            difficulty,
        };

        std::fs::create_dir_all(&self.cli.output)
            .map_err(|source| file_system_error(&self.cli.output, "create directory", source))?;

        let start_time = Instant::now();
        let progress = (self.cli.should_show_progress() && self.cli.count > 1)
            .then(|| batch_progress_bar(self.cli.count));

        for index in 0..self.cli.count {
            let seed = self.cli.seed_for(index);
            let artifact = self.pipeline.generate(
                &params,
                &self.cli.requester,
                &self.cli.category,
                seed.as_deref(),
            )?;

            let path = self.cli.output.join(format!("{}.json", artifact.id));
            write_json_file(&artifact, &path, "artifact")?;

            if let Some(ref bar) = progress {
                bar.inc(1);
            }
        }

        if let Some(bar) = progress {
            bar.finish();
        }

        if self.cli.log {
            let path = self.cli.output.join("outcome_log.json");
            write_json_file(self.pipeline.log().entries(), &path, "outcome log")?;
        }

        if self.cli.should_show_progress() {
            eprintln!(
                "Generated {} map(s) in {:.2?}",
                self.cli.count,
                start_time.elapsed()
            );
        }

        Ok(())
    }
}

fn batch_progress_bar(count: usize) -> ProgressBar {
    let bar = ProgressBar::new(count as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
