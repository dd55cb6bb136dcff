//! Command handlers.
//!
//! Each handler takes its output streams as `&mut dyn Write` and returns
//! `Result<(), CliError>`; [`crate::run`] maps the result to an exit code.

mod cfg;
mod decide;
mod eval;

pub use cfg::handle_cfg_command;
pub use decide::handle_decide_command;
pub use eval::handle_eval_command;
