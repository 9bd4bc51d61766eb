use clap::Parser;
use segline_core::{IntensityLine, IntensityLineDto};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

// The top-level arguments: output shaping plus which subcommand to execute
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Write compact JSON instead of pretty-printed JSON
    #[arg(long, global = true, env = "SEGLINE_COMPACT")]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Replay { io, snapshots } => {
                let script = io.read_json::<Vec<Operation>>()?;
                if snapshots {
                    io.write_json(&replay_snapshots(&script), self.compact)?;
                } else {
                    io.write_json(&replay(&script), self.compact)?;
                }
            }
            Commands::Eval { io, at } => {
                let line = io.read_json::<IntensityLine>()?;
                io.write_json(&sample(&line, &at), self.compact)?;
            }
            Commands::Check { io } => {
                let report = check(io.read_json::<IntensityLineDto>()?)?;
                io.write_json(&report, self.compact)?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("breakpoint list is not canonical: {0}")]
    NotCanonical(#[from] segline_core::IntensityLineError),
    #[error("breakpoint {index} has a non-finite point, which JSON cannot represent")]
    NonFinite { index: usize },
}
