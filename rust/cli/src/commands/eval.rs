//! Hand evaluation command.

use crate::error::CliError;
use botnaught_engine::cards::parse_cards;
use botnaught_engine::hand::{WORST_RANK, evaluate_hand, hand_rank};
use std::io::Write;

/// Rank the cards given on the command line and print the hand category
/// alongside its position on the 1..=7462 scale.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(&cards.join(" "))?;
    let strength = evaluate_hand(&cards)?;
    let rank = hand_rank(&strength)
        .ok_or_else(|| CliError::Engine(format!("no rank for {:?}", strength)))?;

    let shown: Vec<String> = cards.iter().map(ToString::to_string).collect();
    writeln!(out, "Cards: {}", shown.join(" "))?;
    writeln!(out, "Hand: {}", strength.category.label())?;
    writeln!(out, "Rank: {} / {}", rank, WORST_RANK)?;
    Ok(())
}
