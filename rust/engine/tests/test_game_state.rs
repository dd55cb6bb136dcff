use botnaught_engine::errors::EngineError;
use botnaught_engine::game::{GameState, Street};
use botnaught_engine::player::{Action, ActionKind};

fn snapshot(community: &str, current_bet: i64) -> String {
    format!(
        r#"{{
            "gameID": "RiverRaise",
            "players": [
                {{"name": "Jimmy", "chips": 250, "holeCards": [], "handRank": -1,
                  "chipsCommittedThisAction": 10}},
                {{"name": "Vinnie", "chips": 90, "holeCards": ["Kh", "Kd"], "handRank": 2500,
                  "chipsCommittedThisAction": 10}}
            ],
            "communityCards": [{community}],
            "currentBet": {current_bet},
            "availableActions": ["fold", "call", "raise"]
        }}"#
    )
}

#[test]
fn server_snapshot_produces_hero_view() {
    let state: GameState =
        serde_json::from_str(&snapshot(r#""Ts", "3h", "7c", "9d", "2s""#, 20)).unwrap();
    let view = state.table_view().expect("valid snapshot");
    assert_eq!(view.game_id, "RiverRaise");
    assert_eq!(view.street, Street::River);
    assert_eq!(view.hero.name, "Vinnie");
    assert_eq!(view.hero.hand_rank, 2500);
    assert_eq!(view.hero.total(), 100);
    assert_eq!(view.current_bet, 20);
    assert!(view.is_available(ActionKind::Raise));
    assert!(!view.is_available(ActionKind::Check));
}

#[test]
fn missing_optional_fields_default() {
    let state: GameState = serde_json::from_str(
        r#"{"players": [{"name": "Vinnie", "holeCards": ["2c", "7d"]}]}"#,
    )
    .unwrap();
    let view = state.table_view().expect("valid snapshot");
    assert_eq!(view.game_id, "");
    assert_eq!(view.street, Street::Preflop);
    assert_eq!(view.hero.chips, 0);
    assert_eq!(view.hero.hand_rank, 0);
    assert!(!view.hero.is_ranked());
}

#[test]
fn malformed_cards_fail_to_parse() {
    let err = serde_json::from_str::<GameState>(&snapshot(r#""Ts", "1h", "7c""#, 0));
    assert!(err.is_err());
}

#[test]
fn five_card_board_with_hole_duplicate_is_rejected() {
    let state: GameState =
        serde_json::from_str(&snapshot(r#""Ts", "3h", "7c", "9d", "Kh""#, 0)).unwrap();
    match state.table_view() {
        Err(EngineError::InvalidGameState(msg)) => assert_eq!(msg, "card Kh appears twice"),
        other => panic!("expected invalid state, got {other:?}"),
    }
}

#[test]
fn actions_serialize_in_wire_form() {
    let json = serde_json::to_value(Action::raise(46)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"selectedAction": "raise", "value": 46})
    );
    let json = serde_json::to_value(Action::fold()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"selectedAction": "fold", "value": 0})
    );
}
