//! # botnaught-ai: Betting Decisions
//!
//! Turns a validated game snapshot into a single action for the acting
//! player. Strategies share the [`Strategy`] trait and are built by name
//! through [`create_strategy`].
//!
//! ## Core Components
//!
//! - [`Strategy`] - Interface every decision policy implements
//! - [`staged`] - The staged pre-flop / post-flop betting policy
//! - [`rules`] - Ordered post-flop bet rules
//! - [`config`] - Tunable thresholds and layered config loading
//! - [`tracker`] - Game-change detection for transports
//!
//! ## Quick Start
//!
//! ```rust
//! use botnaught_ai::config::StrategyConfig;
//! use botnaught_ai::create_strategy;
//! use botnaught_engine::game::GameState;
//! use botnaught_engine::player::ActionKind;
//!
//! let strategy = create_strategy("staged", StrategyConfig::default()).unwrap();
//!
//! let state: GameState = serde_json::from_str(r#"{
//!     "gameID": "demo",
//!     "players": [{"name": "Vinnie", "chips": 100, "holeCards": ["Ts", "2d"]}],
//!     "communityCards": [],
//!     "currentBet": 0,
//!     "availableActions": ["fold", "call", "raise"]
//! }"#).unwrap();
//!
//! let view = state.table_view().unwrap();
//! let action = strategy.decide(&view).unwrap();
//! assert_eq!(action.selected_action, ActionKind::Call);
//! ```

use botnaught_engine::game::TableView;
use botnaught_engine::player::Action;

pub mod config;
pub mod errors;
pub mod rules;
pub mod staged;
pub mod tracker;

pub use config::StrategyConfig;
pub use errors::DecisionError;
pub use staged::StagedStrategy;
pub use tracker::GameTracker;

/// Name of the strategy used when none is configured.
pub const DEFAULT_STRATEGY: &str = "staged";

/// A decision policy for the acting player.
///
/// Implementations must be deterministic: the same view always yields the
/// same action.
pub trait Strategy: Send + Sync {
    fn decide(&self, view: &TableView) -> Result<Action, DecisionError>;

    fn name(&self) -> &str;
}

/// Build a strategy by name.
///
/// # Example
///
/// ```rust
/// use botnaught_ai::{create_strategy, StrategyConfig};
///
/// let strategy = create_strategy("staged", StrategyConfig::default()).unwrap();
/// assert_eq!(strategy.name(), "staged");
/// assert!(create_strategy("random", StrategyConfig::default()).is_err());
/// ```
pub fn create_strategy(
    name: &str,
    config: StrategyConfig,
) -> Result<Box<dyn Strategy>, DecisionError> {
    match name {
        "staged" => Ok(Box::new(StagedStrategy::new(config)?)),
        other => Err(DecisionError::UnknownStrategy(other.to_string())),
    }
}

/// Names accepted by [`create_strategy`].
pub fn available_strategies() -> &'static [&'static str] {
    &["staged"]
}
