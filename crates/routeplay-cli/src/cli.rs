use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Routeplay - track-log ingestion toolkit for route survey footage
#[derive(Parser, Debug)]
#[command(name = "routeplay")]
#[command(about = "Track-log ingestion toolkit for route survey footage", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest a GPX track log and report the normalized point sequence
    Ingest {
        /// Path to the GPX file
        file: PathBuf,

        /// Print the retained points as a table
        #[arg(long)]
        points: bool,

        /// Maximum number of points to print
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Route offset in meters added to displayed chainages
        #[arg(long, default_value_t = 0.0)]
        offset_m: f64,
    },

    /// Find the track point nearest to a coordinate
    Nearest {
        /// Path to the GPX file
        file: PathBuf,

        /// Target latitude in degrees
        #[arg(long)]
        lat: f64,

        /// Target longitude in degrees
        #[arg(long)]
        lon: f64,
    },
}
