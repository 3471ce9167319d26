pub mod ingest;
pub mod nearest;

use anyhow::Result;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;

pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match cli.command {
        Commands::Ingest {
            file,
            points,
            limit,
            offset_m,
        } => ingest::run(&output, &file, points, limit, offset_m),
        Commands::Nearest { file, lat, lon } => nearest::run(&output, &file, lat, lon),
    }
}
