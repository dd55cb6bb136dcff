//! Ordered post-flop bet rules.
//!
//! Rules are evaluated top to bottom and the first match sizes the bet. When
//! nothing matches, the strategy falls back to calling what it is willing to
//! pay.

use botnaught_engine::game::Street;

use crate::config::StrategyConfig;

/// Inputs the rules look at, computed once per decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    pub street: Street,
    /// Stack plus chips already committed this action.
    pub my_total: i64,
    /// 1 for the best possible hand, 0 for the worst or an unranked one.
    pub rank_pct: f64,
    /// Positive when the hero's hand beats the board-derived reference hand.
    pub hand_lead: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    AllIn,
    /// `round(my_total * rank_pct)`
    Proportional,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BetRule {
    pub name: &'static str,
    /// Strictly greater than.
    pub min_rank_pct: f64,
    pub street: Option<Street>,
    /// Strictly greater than, when present.
    pub min_lead: Option<i32>,
    pub sizing: Sizing,
}

impl BetRule {
    pub fn matches(&self, signals: &Signals) -> bool {
        signals.rank_pct > self.min_rank_pct
            && self.street.is_none_or(|street| street == signals.street)
            && self.min_lead.is_none_or(|lead| signals.hand_lead > lead)
    }

    pub fn size(&self, signals: &Signals) -> i64 {
        match self.sizing {
            Sizing::AllIn => signals.my_total,
            Sizing::Proportional => round_chips(signals.my_total as f64 * signals.rank_pct),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: Vec<BetRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<BetRule>) -> Self {
        Self { rules }
    }

    pub fn from_config(cfg: &StrategyConfig) -> Self {
        Self::new(vec![
            BetRule {
                name: "all_in",
                min_rank_pct: cfg.all_in_rank_pct,
                street: None,
                min_lead: Some(cfg.lead_threshold),
                sizing: Sizing::AllIn,
            },
            BetRule {
                name: "flop_value",
                min_rank_pct: cfg.flop_rank_pct,
                street: Some(Street::Flop),
                min_lead: None,
                sizing: Sizing::Proportional,
            },
            BetRule {
                name: "turn_value",
                min_rank_pct: cfg.turn_rank_pct,
                street: Some(Street::Turn),
                min_lead: Some(cfg.lead_threshold),
                sizing: Sizing::Proportional,
            },
            BetRule {
                name: "river_value",
                min_rank_pct: cfg.river_rank_pct,
                street: Some(Street::River),
                min_lead: Some(cfg.lead_threshold),
                sizing: Sizing::Proportional,
            },
        ])
    }

    pub fn rules(&self) -> &[BetRule] {
        &self.rules
    }

    pub fn first_match(&self, signals: &Signals) -> Option<&BetRule> {
        self.rules.iter().find(|rule| rule.matches(signals))
    }
}

/// Round half away from zero to whole chips.
pub fn round_chips(amount: f64) -> i64 {
    amount.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(street: Street, rank_pct: f64, hand_lead: i32) -> Signals {
        Signals {
            street,
            my_total: 100,
            rank_pct,
            hand_lead,
        }
    }

    fn table() -> RuleTable {
        RuleTable::from_config(&StrategyConfig::default())
    }

    #[test]
    fn all_in_needs_strength_and_lead() {
        let table = table();
        let rule = &table.rules()[0];
        assert!(rule.matches(&signals(Street::River, 0.71, 11)));
        assert!(!rule.matches(&signals(Street::River, 0.70, 11)));
        assert!(!rule.matches(&signals(Street::River, 0.9, 10)));
        assert_eq!(rule.size(&signals(Street::Turn, 0.9, 50)), 100);
    }

    #[test]
    fn flop_rule_ignores_lead() {
        let table = table();
        let rule = &table.rules()[1];
        assert!(rule.matches(&signals(Street::Flop, 0.41, 0)));
        assert!(!rule.matches(&signals(Street::Turn, 0.41, 0)));
        assert_eq!(rule.size(&signals(Street::Flop, 0.456, 0)), 46);
    }

    #[test]
    fn turn_and_river_rules_gate_on_lead() {
        let rules = table();
        let turn = &rules.rules()[2];
        assert!(turn.matches(&signals(Street::Turn, 0.46, 11)));
        assert!(!turn.matches(&signals(Street::Turn, 0.46, 10)));
        assert!(!turn.matches(&signals(Street::Turn, 0.45, 50)));

        let river = &rules.rules()[3];
        assert!(river.matches(&signals(Street::River, 0.51, 11)));
        assert!(!river.matches(&signals(Street::River, 0.50, 11)));
        assert!(!river.matches(&signals(Street::Turn, 0.9, 11)));
    }

    #[test]
    fn first_match_wins() {
        let rules = table();
        let hit = rules.first_match(&signals(Street::Turn, 0.8, 20)).expect("match");
        assert_eq!(hit.name, "all_in");
        let hit = rules.first_match(&signals(Street::Flop, 0.8, 0)).expect("match");
        assert_eq!(hit.name, "flop_value");
        assert!(rules.first_match(&signals(Street::Preflop, 0.8, 0)).is_none());
        assert!(rules.first_match(&signals(Street::River, 0.6, 5)).is_none());
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_chips(2.5), 3);
        assert_eq!(round_chips(2.49), 2);
        assert_eq!(round_chips(-1.5), -2);
    }
}
