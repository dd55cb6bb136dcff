//! Command-line definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "botnaught",
    version,
    about = "Botnaught poker decision engine CLI"
)]
pub struct BotnaughtCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decide an action for a game snapshot read as JSON
    Decide {
        /// Snapshot file, or `-` for stdin. Accepts a bare game or `{"game": ...}`.
        #[arg(long, short, default_value = "-")]
        input: String,
        /// Strategy name; defaults to the configured one
        #[arg(long)]
        strategy: Option<String>,
        /// Pretty-print the action
        #[arg(long)]
        pretty: bool,
    },
    /// Rank 5 to 7 cards on the 1..=7462 scale
    Eval {
        /// Cards such as `As Kd Qh Jc Tc`
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
