//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value paired with where
//! it came from (`default`, `file` or `env`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "strategy": { "value": "staged", "source": "default" },
//!   "port": { "value": 9501, "source": "env" },
//!   ...
//! }
//! ```

use crate::error::CliError;
use crate::ui;
use botnaught_ai::available_strategies;
use botnaught_ai::config::{self, ConfigResolved};
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };

    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "strategy": {
            "value": config.strategy,
            "source": sources.strategy,
            "available": available_strategies(),
        },
        "host": {
            "value": config.host,
            "source": sources.host,
        },
        "port": {
            "value": config.port,
            "source": sources.port,
        },
        "thresholds": {
            "value": config.thresholds,
            "source": sources.thresholds,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
