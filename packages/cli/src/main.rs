#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the crime dashboard data pipeline.
//!
//! Runs the load-time data preparation the browser dashboard needs:
//! ingest the exported boundary and incident files, build the spatial
//! index, and batch-join incidents to ZIP codes, reporting match
//! statistics.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use crime_dash_crime_models::CrimeCategory;
use crime_dash_spatial::{SpatialIndex, assign_zip_codes};

#[derive(Parser)]
#[command(name = "crime_dash_cli", about = "Crime dashboard data tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Spatially join incidents to their containing ZIP boundaries
    Join {
        /// ZIP boundary file (flattened CSV export or raw `GeoJSON`)
        #[arg(long)]
        boundaries: PathBuf,
        /// Incident CSV export
        #[arg(long)]
        incidents: PathBuf,
        /// Write the enriched incidents as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the crime category taxonomy and the keywords each matches
    Categories,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Join {
            boundaries,
            incidents,
            output,
        } => {
            let start = Instant::now();

            let boundaries = crime_dash_ingest::boundaries::load(&boundaries)?;
            let incidents = crime_dash_ingest::incidents::load(&incidents)?;

            let index = SpatialIndex::build(&boundaries);
            log::info!(
                "Spatial index ready: {} of {} boundaries indexed",
                index.len(),
                boundaries.len()
            );

            let result = assign_zip_codes(incidents, &index, &boundaries);

            let total = result.incidents.len();
            #[allow(clippy::cast_precision_loss)]
            let match_rate = if total == 0 {
                0.0
            } else {
                result.matched as f64 * 100.0 / total as f64
            };
            log::info!(
                "Join complete: {}/{total} matched ({match_rate:.1}%), {} unmatched, in {:.2}s",
                result.matched,
                result.unmatched,
                start.elapsed().as_secs_f64()
            );

            if let Some(path) = output {
                let file = std::fs::File::create(&path)?;
                serde_json::to_writer_pretty(std::io::BufWriter::new(file), &result.incidents)?;
                log::info!("Wrote {total} incidents to {}", path.display());
            }
        }
        Commands::Categories => {
            for category in CrimeCategory::all() {
                println!("{}: {}", category, category.label());
                for keyword in category.keywords() {
                    println!("    {keyword}");
                }
            }
        }
    }

    Ok(())
}
