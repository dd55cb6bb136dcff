use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;
use crate::hand::WORST_RANK;
use crate::player::{ActionKind, HeroState, PlayerState};

/// Represents a betting street in Texas Hold'em poker.
/// Identified by how many community cards are showing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Before flop (no community cards)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub fn from_community_count(count: usize) -> Option<Street> {
        match count {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };
        f.write_str(name)
    }
}

/// Snapshot of a hand as delivered by the game server for one decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(rename = "gameID", default)]
    pub game_id: String,
    #[serde(default)]
    pub players: Vec<PlayerState>,
    #[serde(default)]
    pub community_cards: Vec<Card>,
    #[serde(default)]
    pub current_bet: i64,
    #[serde(default)]
    pub available_actions: Vec<String>,
}

impl GameState {
    /// Validate the snapshot and extract the acting player's view of it.
    ///
    /// The acting player is the single seat showing hole cards, and it must
    /// show exactly two of them.
    pub fn table_view(&self) -> Result<TableView, EngineError> {
        let street = Street::from_community_count(self.community_cards.len()).ok_or_else(|| {
            invalid(format!(
                "community card count must be 0, 3, 4 or 5, got {}",
                self.community_cards.len()
            ))
        })?;

        let current_bet = u32::try_from(self.current_bet)
            .map_err(|_| invalid(format!("current bet out of range: {}", self.current_bet)))?;

        for p in &self.players {
            if p.chips < 0 || p.chips_committed_this_action < 0 {
                return Err(invalid(format!("player {} has a negative chip count", p.name)));
            }
        }

        let mut holders = self.players.iter().filter(|p| !p.hole_cards.is_empty());
        let hero = holders
            .next()
            .ok_or_else(|| invalid("no player holds hole cards".to_string()))?;
        if holders.next().is_some() {
            return Err(invalid(
                "more than one player shows hole cards".to_string(),
            ));
        }
        let hole: [Card; 2] = hero.hole_cards.as_slice().try_into().map_err(|_| {
            invalid(format!(
                "player {} must hold exactly two hole cards, got {}",
                hero.name,
                hero.hole_cards.len()
            ))
        })?;

        let hand_rank = u16::try_from(hero.hand_rank)
            .ok()
            .filter(|&r| r <= WORST_RANK)
            .ok_or_else(|| invalid(format!("hand rank out of range: {}", hero.hand_rank)))?;

        let chips = u32::try_from(hero.chips)
            .map_err(|_| invalid(format!("chip count out of range: {}", hero.chips)))?;
        let committed = u32::try_from(hero.chips_committed_this_action).map_err(|_| {
            invalid(format!(
                "committed chips out of range: {}",
                hero.chips_committed_this_action
            ))
        })?;

        let visible = hole.iter().chain(self.community_cards.iter());
        for (i, card) in visible.clone().enumerate() {
            if visible.clone().take(i).any(|c| c == card) {
                return Err(invalid(format!("card {card} appears twice")));
            }
        }

        Ok(TableView {
            game_id: self.game_id.clone(),
            hero: HeroState {
                name: hero.name.clone(),
                chips,
                hole,
                hand_rank,
                committed,
            },
            street,
            community: self.community_cards.clone(),
            current_bet,
            available_actions: self.available_actions.clone(),
        })
    }
}

fn invalid(message: String) -> EngineError {
    EngineError::InvalidGameState(message)
}

/// Validated, hero-centred view of a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub game_id: String,
    pub hero: HeroState,
    pub street: Street,
    pub community: Vec<Card>,
    pub current_bet: u32,
    pub available_actions: Vec<String>,
}

impl TableView {
    pub fn is_available(&self, kind: ActionKind) -> bool {
        self.available_actions
            .iter()
            .any(|token| ActionKind::parse(token) == Some(kind))
    }

    /// "call" when offered, else "check" when offered, else `fallback`.
    pub fn call_or_check(&self, fallback: ActionKind) -> ActionKind {
        [ActionKind::Call, ActionKind::Check]
            .into_iter()
            .find(|&kind| self.is_available(kind))
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn state(hole: &str, board: &str) -> GameState {
        GameState {
            game_id: "g1".into(),
            players: vec![
                PlayerState {
                    name: "Vinnie".into(),
                    chips: 100,
                    hole_cards: parse_cards(hole).unwrap(),
                    ..Default::default()
                },
                PlayerState {
                    name: "Jimmy".into(),
                    chips: 99,
                    hand_rank: -1,
                    ..Default::default()
                },
            ],
            community_cards: parse_cards(board).unwrap(),
            current_bet: 0,
            available_actions: vec!["fold".into(), "call".into(), "raise".into()],
        }
    }

    #[test]
    fn street_follows_community_count() {
        for (board, street) in [
            ("", Street::Preflop),
            ("Ts 3h 7c", Street::Flop),
            ("Ts 3h 7c 9d", Street::Turn),
            ("Ts 3h 7c 9d Kc", Street::River),
        ] {
            let view = state("Qs 2d", board).table_view().expect("valid");
            assert_eq!(view.street, street);
        }
    }

    #[test]
    fn rejects_other_community_counts() {
        for board in ["Ts", "Ts 3h", "Ts 3h 7c 9d Kc Ad"] {
            let err = state("Qs 2d", board).table_view().unwrap_err();
            assert!(matches!(err, EngineError::InvalidGameState(_)), "{board}");
        }
    }

    #[test]
    fn finds_hero_among_opponents() {
        let mut gs = state("As Kd", "");
        gs.players.swap(0, 1);
        let view = gs.table_view().expect("valid");
        assert_eq!(view.hero.name, "Vinnie");
        assert_eq!(view.hero.chips, 100);
    }

    #[test]
    fn rejects_missing_or_partial_hole_cards() {
        let mut gs = state("As Kd", "");
        gs.players[0].hole_cards.clear();
        assert!(gs.table_view().is_err());

        gs.players[0].hole_cards = parse_cards("As").unwrap();
        assert!(gs.table_view().is_err());
    }

    #[test]
    fn rejects_two_visible_hands() {
        let mut gs = state("As Kd", "");
        gs.players[1].hole_cards = parse_cards("2c 3c").unwrap();
        assert!(gs.table_view().is_err());
    }

    #[test]
    fn rejects_negative_values() {
        let mut gs = state("As Kd", "");
        gs.current_bet = -1;
        assert!(gs.table_view().is_err());

        let mut gs = state("As Kd", "");
        gs.players[1].chips = -5;
        assert!(gs.table_view().is_err());

        let mut gs = state("As Kd", "");
        gs.players[0].hand_rank = 7463;
        assert!(gs.table_view().is_err());
    }

    #[test]
    fn rejects_duplicate_cards() {
        let err = state("As Kd", "As 3h 7c").table_view().unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidGameState("card As appears twice".into())
        );
    }

    #[test]
    fn call_preferred_over_check() {
        let mut view = state("As Kd", "").table_view().unwrap();
        assert_eq!(view.call_or_check(ActionKind::Check), ActionKind::Call);

        view.available_actions = vec!["check".into(), "fold".into()];
        assert_eq!(view.call_or_check(ActionKind::Call), ActionKind::Check);

        view.available_actions = vec!["fold".into()];
        assert_eq!(view.call_or_check(ActionKind::Check), ActionKind::Check);
    }

    #[test]
    fn parses_server_json() {
        let json = r#"{
            "gameID": "FlopCall",
            "players": [
                {"name": "Vinnie", "chips": 100, "holeCards": ["Qs", "2d"], "handRank": 0,
                 "chipsCommittedThisAction": 0},
                {"name": "Jimmy", "chips": 99, "holeCards": [], "handRank": -1}
            ],
            "communityCards": ["Ts", "3h", "7c"],
            "currentBet": 0,
            "availableActions": ["fold", "call", "raise"]
        }"#;
        let gs: GameState = serde_json::from_str(json).expect("deserialize");
        let view = gs.table_view().expect("valid");
        assert_eq!(view.game_id, "FlopCall");
        assert_eq!(view.street, Street::Flop);
        assert_eq!(view.hero.hole[0].to_string(), "Qs");
    }
}
