use super::IOArgs;
use clap::Subcommand;

mod check;
mod eval;
mod replay;

pub use check::*;
pub use eval::*;
pub use replay::*;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a script of add/set operations to an empty line and report the breakpoints
    Replay {
        #[command(flatten)]
        io: IOArgs,

        /// Report the breakpoints after every operation, not just the last
        #[arg(long)]
        snapshots: bool,
    },

    /// Evaluate a breakpoint list at the given points
    Eval {
        #[command(flatten)]
        io: IOArgs,

        /// A point to evaluate (may be repeated)
        #[arg(long, required = true, allow_negative_numbers = true)]
        at: Vec<f64>,
    },

    /// Verify that a breakpoint list is canonical
    Check {
        #[command(flatten)]
        io: IOArgs,
    },
}
