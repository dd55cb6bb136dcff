//! # Botnaught CLI Library
//!
//! Command-line access to the Botnaught decision engine: decide an action
//! for a saved game snapshot, rank a hand, or inspect the configuration.
//!
//! ## Example Usage
//!
//! ```
//! let args = vec!["botnaught", "eval", "Ah", "Kh", "Qh", "Jh", "Th"];
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = botnaught_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Rank: 1 / 7462"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `decide`: Read a game snapshot (file or stdin) and print the chosen action
//! - `eval`: Rank 5 to 7 cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{Read, Write};

pub mod cli;
mod commands;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod ui;

use cli::{BotnaughtCli, Commands};
use commands::{handle_cfg_command, handle_decide_command, handle_eval_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["decide", "eval", "cfg"];

/// Main entry point for the CLI application, reading stdin when a command
/// asks for `-`.
///
/// Returns `0` on success and `2` on any error.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// [`run`] with an explicit stand-in for stdin.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn Read,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BotnaughtCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Decide {
            input,
            strategy,
            pretty,
        } => handle_decide_command(&input, strategy.as_deref(), pretty, out, err, stdin),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: botnaught <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    exit_code::ERROR
}
