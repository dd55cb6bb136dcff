use std::fmt;

use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// One seat as reported by the game server.
///
/// Only the acting player is dealt visible hole cards; opponents arrive with
/// an empty `holeCards` list and an arbitrary `handRank` (commonly -1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub name: String,
    #[serde(default)]
    pub chips: i64,
    #[serde(default)]
    pub hole_cards: Vec<Card>,
    /// 0 = unranked, otherwise 1..=7462 (lower is stronger)
    #[serde(default)]
    pub hand_rank: i32,
    #[serde(default)]
    pub chips_committed_this_action: i64,
}

/// The acting player after validation, with hole cards and chip counts in
/// their checked forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroState {
    pub name: String,
    pub chips: u32,
    pub hole: [Card; 2],
    pub hand_rank: u16,
    pub committed: u32,
}

impl HeroState {
    /// Everything the player could put in this hand: stack plus chips
    /// already committed to the current action.
    pub fn total(&self) -> i64 {
        i64::from(self.chips) + i64::from(self.committed)
    }

    pub fn is_ranked(&self) -> bool {
        self.hand_rank > 0
    }
}

/// The four decisions the bot can return.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Call,
    Check,
    Raise,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Call => "call",
            ActionKind::Check => "check",
            ActionKind::Raise => "raise",
        }
    }

    pub fn parse(token: &str) -> Option<ActionKind> {
        match token.trim().to_ascii_lowercase().as_str() {
            "fold" => Some(ActionKind::Fold),
            "call" => Some(ActionKind::Call),
            "check" => Some(ActionKind::Check),
            "raise" => Some(ActionKind::Raise),
            _ => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision returned to the game server. `value` is only meaningful for a
/// raise, where it is the chips added beyond the current bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub selected_action: ActionKind,
    #[serde(default)]
    pub value: u32,
}

impl Action {
    pub fn fold() -> Self {
        Self::passive(ActionKind::Fold)
    }

    pub fn call() -> Self {
        Self::passive(ActionKind::Call)
    }

    pub fn check() -> Self {
        Self::passive(ActionKind::Check)
    }

    pub fn raise(value: u32) -> Self {
        Self {
            selected_action: ActionKind::Raise,
            value,
        }
    }

    pub fn passive(kind: ActionKind) -> Self {
        Self {
            selected_action: kind,
            value: 0,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.selected_action {
            ActionKind::Raise => write!(f, "raise {}", self.value),
            kind => write!(f, "{kind}"),
        }
    }
}
