//! Decide command: one game snapshot in, one action out.

use crate::error::CliError;
use crate::io_utils::read_input;
use crate::ui;
use botnaught_ai::config;
use botnaught_ai::create_strategy;
use botnaught_engine::game::GameState;
use botnaught_engine::player::ActionKind;
use serde_json::Value;
use std::io::{Read, Write};

/// Accepts the same `{"game": ...}` envelope the HTTP API takes, or a bare
/// snapshot.
fn parse_snapshot(text: &str) -> Result<GameState, CliError> {
    let invalid = |e: serde_json::Error| CliError::InvalidInput(format!("Invalid game JSON: {}", e));
    let mut value: Value = serde_json::from_str(text).map_err(invalid)?;
    let game = if value.get("game").is_some() {
        value["game"].take()
    } else {
        value
    };
    serde_json::from_value(game).map_err(invalid)
}

pub fn handle_decide_command(
    input: &str,
    strategy: Option<&str>,
    pretty: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn Read,
) -> Result<(), CliError> {
    let settings = config::load()?;
    let name = strategy.unwrap_or(&settings.strategy);
    let fallback = settings.thresholds.fallback_action;
    let strategy = create_strategy(name, settings.thresholds)?;

    let text = read_input(input, stdin).map_err(CliError::InvalidInput)?;
    let game = parse_snapshot(&text)?;

    let view = game.table_view()?;
    if !view.is_available(ActionKind::Call) && !view.is_available(ActionKind::Check) {
        ui::display_warning(
            err,
            &format!("neither call nor check offered; passive action is {}", fallback),
        )?;
    }
    let action = strategy.decide(&view)?;

    let json = if pretty {
        serde_json::to_string_pretty(&action)
    } else {
        serde_json::to_string(&action)
    }
    .map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
