//! # botnaught-engine: Poker Domain Core
//!
//! Card representation, hand-strength evaluation and the game-state data
//! model consumed by the Botnaught decision engine.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`hand`] - Hand evaluation and the 1..=7462 strength ordering
//! - [`game`] - Game snapshot from the server, streets, and validated views
//! - [`player`] - Player seats, the acting hero, and output actions
//! - [`errors`] - Error types for parsing and validation
//!
//! ## Quick Start
//!
//! ```rust
//! use botnaught_engine::cards::parse_cards;
//! use botnaught_engine::hand::{HandEvaluator, StandardEvaluator};
//!
//! // Rank a 7-card poker hand; 1 is a royal flush, 7462 the weakest hand
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let rank = StandardEvaluator.rank(&cards).unwrap();
//! assert_eq!(rank, 1);
//! ```
//!
//! ## Validating a Snapshot
//!
//! ```rust
//! use botnaught_engine::game::{GameState, Street};
//!
//! let json = r#"{
//!     "gameID": "demo",
//!     "players": [{"name": "Vinnie", "chips": 100, "holeCards": ["As", "2d"]}],
//!     "communityCards": [],
//!     "currentBet": 0,
//!     "availableActions": ["fold", "call", "raise"]
//! }"#;
//! let state: GameState = serde_json::from_str(json).unwrap();
//! let view = state.table_view().unwrap();
//! assert_eq!(view.street, Street::Preflop);
//! ```

pub mod cards;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
