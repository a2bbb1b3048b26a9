//! Command-line interface for reconstructing an image from a tile directory

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use crate::algorithm::assembly::assemble;
use crate::algorithm::scores::ScoreTable;
use crate::io::configuration::DEFAULT_OUTPUT_NAME;
use crate::io::error::Result;
use crate::io::image::{component_output_path, export_component};
use crate::io::progress::ScoringProgress;
use crate::io::tiles::load_tile_set;
use crate::spatial::grid::ComponentLayout;

#[derive(Parser)]
#[command(name = "jigsolve")]
#[command(
    author,
    version,
    about = "Reconstruct an image from unordered tiles using gradient compatibility"
)]
/// Command-line arguments for the reconstruction tool
pub struct Cli {
    /// Directory containing the tile images
    #[arg(value_name = "TILE_DIR")]
    pub tile_dir: PathBuf,

    /// Output path for the reconstructed image
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output: PathBuf,

    /// Export secondary components alongside the principal one
    #[arg(short, long)]
    pub all_components: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates loading, scoring, assembly and export
pub struct SolveProcessor {
    cli: Cli,
}

impl SolveProcessor {
    /// Create a processor from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full reconstruction pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if the tile set cannot be loaded or validated,
    /// or if an output image cannot be written.
    // Allow print for user feedback on reconstruction progress
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        let start_time = Instant::now();

        let tiles = load_tile_set(&self.cli.tile_dir)?;
        if !self.cli.quiet {
            eprintln!(
                "Loaded {} tiles ({}x{}) from {}",
                tiles.len(),
                tiles.tile_height(),
                tiles.tile_width(),
                self.cli.tile_dir.display()
            );
        }

        let pair_total = tiles.len() * tiles.len().saturating_sub(1);
        let progress = self
            .cli
            .should_show_progress()
            .then(|| ScoringProgress::new(pair_total));

        let table = ScoreTable::build_with_progress(&tiles, |evaluated| {
            if let Some(bar) = progress.as_ref() {
                bar.update(evaluated);
            }
        });

        if let Some(bar) = progress.as_ref() {
            bar.finish();
        }

        let mosaic = assemble(&table);

        if !self.cli.quiet {
            if table.incompatible_pairs() > 0 {
                eprintln!(
                    "Excluded {} incompatible pair evaluations",
                    table.incompatible_pairs()
                );
            }

            if mosaic.is_complete() {
                eprintln!(
                    "Assembled a single component of {} tiles",
                    mosaic.tile_count()
                );
            } else {
                let sizes: Vec<usize> = mosaic
                    .components()
                    .iter()
                    .map(ComponentLayout::tile_count)
                    .collect();
                eprintln!(
                    "Assembly fragmented into {} components (sizes: {sizes:?})",
                    sizes.len()
                );
            }
        }

        if let Some(principal) = mosaic.principal() {
            export_component(principal, &tiles, &self.cli.output)?;
            if !self.cli.quiet {
                eprintln!("Wrote {}", self.cli.output.display());
            }
        }

        if self.cli.all_components {
            for (number, component) in mosaic.components().iter().enumerate().skip(1) {
                let path = component_output_path(&self.cli.output, number);
                export_component(component, &tiles, &path)?;
                if !self.cli.quiet {
                    eprintln!("Wrote {}", path.display());
                }
            }
        }

        if !self.cli.quiet {
            eprintln!("Finished in {:.2?}", start_time.elapsed());
        }

        Ok(())
    }
}
