//! Staged betting strategy.
//!
//! Turns the hero's hand rank and stack into a wager, street by street:
//!
//! 1. **Pre-flop:** open-raise strong starting hands (pairs, any ace, suited
//!    king or queen), otherwise keep calling while the bet stays cheap.
//! 2. **Post-flop:** normalise the hand rank to `rank_pct`, look ahead on the
//!    turn and river to estimate `hand_lead`, and size the bet from the first
//!    matching [`BetRule`](crate::rules::BetRule).
//! 3. **Clamp:** scale up on a big lead, cap at the stack, then decide
//!    between matching the bet and folding.
//!
//! A tentative bet of `-1` means "no commitment"; after clamping a negative
//! bet folds, zero calls or checks, and anything else raises.

use std::sync::Arc;

use botnaught_engine::cards::{Card, Rank};
use botnaught_engine::game::{GameState, Street, TableView};
use botnaught_engine::hand::{HandEvaluator, StandardEvaluator, WORST_RANK};
use botnaught_engine::player::Action;
use tracing::debug;

use crate::Strategy;
use crate::config::StrategyConfig;
use crate::errors::DecisionError;
use crate::rules::{RuleTable, Signals, round_chips};

const NO_BET: i64 = -1;

/// How one decision was reached; useful for logging and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct BetPlan {
    pub signals: Signals,
    /// Name of the rule that sized the bet, if any.
    pub rule: Option<&'static str>,
    /// Bet before clamping.
    pub tentative: i64,
    /// Bet after clamping: negative folds, zero matches, positive raises.
    pub bet: i64,
}

#[derive(Clone)]
pub struct StagedStrategy {
    config: StrategyConfig,
    rules: RuleTable,
    evaluator: Arc<dyn HandEvaluator>,
}

impl std::fmt::Debug for StagedStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StagedStrategy")
            .field("config", &self.config)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl StagedStrategy {
    pub fn new(config: StrategyConfig) -> Result<Self, DecisionError> {
        Self::with_evaluator(config, Arc::new(StandardEvaluator::new()))
    }

    pub fn with_evaluator(
        config: StrategyConfig,
        evaluator: Arc<dyn HandEvaluator>,
    ) -> Result<Self, DecisionError> {
        config
            .validate()
            .map_err(|e| DecisionError::InvalidConfig(e.to_string()))?;
        let rules = RuleTable::from_config(&config);
        Ok(Self {
            config,
            rules,
            evaluator,
        })
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Validate a raw snapshot and decide on it.
    pub fn decide_state(&self, state: &GameState) -> Result<Action, DecisionError> {
        let view = state.table_view()?;
        self.decide(&view)
    }

    /// Work out the bet for a validated view, or `None` when the hero cannot
    /// cover the current bet and the passive action applies unchanged.
    pub fn plan(&self, view: &TableView) -> Result<Option<BetPlan>, DecisionError> {
        let my_total = view.hero.total();
        let current_bet = i64::from(view.current_bet);
        if my_total - current_bet < 0 {
            return Ok(None);
        }

        let signals = Signals {
            street: view.street,
            my_total,
            rank_pct: rank_pct(view.hero.hand_rank),
            hand_lead: self.hand_lead(view)?,
        };

        let (tentative, rule) = match view.street {
            Street::Preflop => (self.preflop_bet(view, &signals), None),
            _ => match self.rules.first_match(&signals) {
                Some(rule) => (rule.size(&signals), Some(rule.name)),
                None => (self.willing_bet(view, &signals), None),
            },
        };

        let bet = self.clamp(view, &signals, tentative);
        Ok(Some(BetPlan {
            signals,
            rule,
            tentative,
            bet,
        }))
    }

    fn preflop_bet(&self, view: &TableView, signals: &Signals) -> i64 {
        let total = signals.my_total as f64;
        if should_open_raise(&view.hero.hole) {
            round_chips(total * self.config.open_raise_fraction)
        } else if (view.current_bet as f64) < total * self.config.preflop_call_fraction {
            i64::from(view.current_bet)
        } else {
            NO_BET
        }
    }

    fn willing_bet(&self, view: &TableView, signals: &Signals) -> i64 {
        let willing = round_chips(signals.my_total as f64 * signals.rank_pct);
        let current_bet = i64::from(view.current_bet);
        if willing >= current_bet {
            current_bet
        } else {
            NO_BET
        }
    }

    /// River: board alone versus the hero. Turn: the stronger of the two
    /// single-hole-card completions versus the hero. Earlier streets: 0.
    fn hand_lead(&self, view: &TableView) -> Result<i32, DecisionError> {
        let my_rank = i32::from(view.hero.hand_rank);
        match view.street {
            Street::Preflop | Street::Flop => Ok(0),
            Street::Turn => {
                let mut best = i32::from(WORST_RANK);
                for hole in view.hero.hole {
                    let mut cards = view.community.clone();
                    cards.push(hole);
                    best = best.min(i32::from(self.evaluator.rank(&cards)?));
                }
                Ok(best - my_rank)
            }
            Street::River => {
                let board = i32::from(self.evaluator.rank(&view.community)?);
                Ok(board - my_rank)
            }
        }
    }

    fn clamp(&self, view: &TableView, signals: &Signals, tentative: i64) -> i64 {
        let current_bet = i64::from(view.current_bet);
        let mut bet = tentative;

        if signals.hand_lead > self.config.big_lead {
            bet = round_chips(bet as f64 * self.config.big_lead_multiplier);
        }
        bet = bet.min(i64::from(view.hero.chips));

        if bet < current_bet {
            // An unranked hand (rank 0) is below the threshold and defends too.
            bet = if view.hero.hand_rank < self.config.defend_rank {
                current_bet
            } else {
                NO_BET
            };
        }
        if bet == current_bet {
            bet = 0;
        }
        bet
    }
}

impl Strategy for StagedStrategy {
    fn decide(&self, view: &TableView) -> Result<Action, DecisionError> {
        let passive = view.call_or_check(self.config.fallback_action);

        let Some(plan) = self.plan(view)? else {
            debug!(
                game_id = %view.game_id,
                current_bet = view.current_bet,
                "cannot cover current bet, staying passive"
            );
            return Ok(Action::passive(passive));
        };

        debug!(
            game_id = %view.game_id,
            street = %plan.signals.street,
            hand_rank = view.hero.hand_rank,
            rank_pct = plan.signals.rank_pct,
            hand_lead = plan.signals.hand_lead,
            rule = plan.rule.unwrap_or("-"),
            tentative = plan.tentative,
            bet = plan.bet,
            "bet planned"
        );

        let action = match plan.bet {
            bet if bet < 0 => Action::fold(),
            0 => Action::passive(passive),
            bet => Action::raise(u32::try_from(bet).unwrap_or(view.hero.chips)),
        };
        Ok(action)
    }

    fn name(&self) -> &str {
        "staged"
    }
}

/// `1 - rank / 7462` for a ranked hand, 0 for an unranked one.
pub fn rank_pct(hand_rank: u16) -> f64 {
    if hand_rank == 0 {
        0.0
    } else {
        1.0 - f64::from(hand_rank) / f64::from(WORST_RANK)
    }
}

/// Pre-flop open: pocket pair, any ace, or a suited king or queen.
pub fn should_open_raise(hole: &[Card; 2]) -> bool {
    let [a, b] = hole;
    let pair = a.rank == b.rank;
    let ace = a.rank == Rank::Ace || b.rank == Rank::Ace;
    let royal = [a.rank, b.rank]
        .iter()
        .any(|r| matches!(r, Rank::King | Rank::Queen));
    pair || ace || (royal && a.suit == b.suit)
}
