use crate::errors::IntoErrorResponse;
use crate::server::AppContext;
use botnaught_ai::DecisionError;
use botnaught_engine::game::GameState;
use botnaught_engine::player::Action;
use serde::{Deserialize, Serialize};
use warp::reply::{self, Response};
use warp::Reply;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    pub game: GameState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub action: Action,
}

/// Chooses the acting player's next move.
///
/// # HTTP Method and Path
/// - **Method**: POST
/// - **Path**: `/action`
///
/// # Request Format
/// ```json
/// {
///   "game": {
///     "gameID": "abc",
///     "players": [{"name": "Vinnie", "chips": 100, "holeCards": ["As", "2d"], "handRank": 0}],
///     "communityCards": [],
///     "currentBet": 0,
///     "availableActions": ["fold", "call", "raise"]
///   }
/// }
/// ```
///
/// # Response Format
/// - **200 OK**: `{"action": {"selectedAction": "raise", "value": 20}}`
/// - **400 Bad Request**: `invalid_game_state` when the snapshot fails validation
pub fn decide(context: &AppContext, request: ActionRequest) -> Response {
    let game = request.game;

    if context.tracker().observe(&game.game_id) {
        tracing::info!(game_id = %game.game_id, "==================== new game ====================");
    }

    let outcome = game
        .table_view()
        .map_err(DecisionError::from)
        .and_then(|view| {
            let action = context.strategy().decide(&view)?;
            Ok((view, action))
        });

    match outcome {
        Ok((view, action)) => {
            tracing::info!(
                game_id = %view.game_id,
                street = %view.street,
                player = %view.hero.name,
                hand_rank = view.hero.hand_rank,
                current_bet = view.current_bet,
                action = %action,
                "decision"
            );
            reply::json(&ActionResponse { action }).into_response()
        }
        Err(err) => {
            tracing::warn!(game_id = %game.game_id, error = %err, "rejected game state");
            err.into_http_response()
        }
    }
}
