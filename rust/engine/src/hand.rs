//! Hand evaluation and the 7462-class strength ordering.
//!
//! Every five-card poker hand falls into one of 7462 equivalence classes.
//! Class 1 is the royal flush and class 7462 is 7-5-4-3-2 unsuited; lower is
//! stronger. [`evaluate_hand`] finds the best five-card hand among 5-7 cards
//! and [`hand_rank`] maps it onto that ordering.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use crate::cards::{all_ranks, Card, Suit};
use crate::errors::EngineError;

/// Rank of the strongest possible hand (royal flush).
pub const BEST_RANK: u16 = 1;
/// Rank of the weakest possible hand (7-5-4-3-2 unsuited).
pub const WORST_RANK: u16 = 7462;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Category plus tiebreak ranks. Derived ordering compares category first,
/// then kickers, so a greater value is a stronger hand.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks, zero padded
    pub kickers: [u8; 5],
}

/// Capability the decision engine needs from a hand evaluator.
pub trait HandEvaluator: Send + Sync {
    /// Rank 5-7 distinct cards on the 1..=7462 scale (lower is stronger).
    fn rank(&self, cards: &[Card]) -> Result<u16, EngineError>;
}

/// Table-backed evaluator over [`evaluate_hand`] and [`hand_rank`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEvaluator;

impl StandardEvaluator {
    pub fn new() -> Self {
        StandardEvaluator
    }
}

impl HandEvaluator for StandardEvaluator {
    fn rank(&self, cards: &[Card]) -> Result<u16, EngineError> {
        let strength = evaluate_hand(cards)?;
        hand_rank(&strength).ok_or(EngineError::InvalidCardCount(cards.len()))
    }
}

/// Evaluate the best five-card hand contained in 5-7 distinct cards.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandStrength, EngineError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EngineError::InvalidCardCount(cards.len()));
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(EngineError::DuplicateCard(card.to_string()));
        }
    }
    Ok(classify(cards))
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Position of `strength` in the 7462-class ordering, or `None` if it does
/// not describe a real five-card hand.
pub fn hand_rank(strength: &HandStrength) -> Option<u16> {
    rank_table().get(strength).copied()
}

fn rank_table() -> &'static HashMap<HandStrength, u16> {
    static TABLE: OnceLock<HashMap<HandStrength, u16>> = OnceLock::new();
    TABLE.get_or_init(build_rank_table)
}

// Enumerates every distinct five-card class once and numbers them from the
// strongest down.
fn build_rank_table() -> HashMap<HandStrength, u16> {
    let mut classes = BTreeSet::new();
    let ranks = all_ranks();
    let mut counts = [0u8; 13];
    enumerate_multisets(&mut counts, 0, 5, &mut |counts| {
        let mut offsuit = Vec::with_capacity(5);
        for (idx, &n) in counts.iter().enumerate() {
            for _ in 0..n {
                let suit = SUIT_CYCLE[offsuit.len() % 4];
                offsuit.push(Card::new(ranks[idx], suit));
            }
        }
        classes.insert(classify(&offsuit));

        if counts.iter().all(|&n| n <= 1) {
            let suited: Vec<Card> = offsuit
                .iter()
                .map(|c| Card::new(c.rank, Suit::Spades))
                .collect();
            classes.insert(classify(&suited));
        }
    });

    classes
        .into_iter()
        .rev()
        .enumerate()
        .map(|(i, strength)| (strength, i as u16 + BEST_RANK))
        .collect()
}

const SUIT_CYCLE: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

fn enumerate_multisets(
    counts: &mut [u8; 13],
    idx: usize,
    remaining: u8,
    visit: &mut dyn FnMut(&[u8; 13]),
) {
    if remaining == 0 {
        visit(counts);
        return;
    }
    if idx == counts.len() {
        return;
    }
    for take in (0..=remaining.min(4)).rev() {
        counts[idx] = take;
        enumerate_multisets(counts, idx + 1, remaining - take, visit);
    }
    counts[idx] = 0;
}

fn classify(cards: &[Card]) -> HandStrength {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut rank_mask: u16 = 0;
    let mut suit_counts = [0u8; 4];
    let mut by_suit_mask = [0u16; 4];
    for c in cards {
        let r = c.rank.value();
        let s = suit_index(c.suit);
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
        suit_counts[s] += 1;
        by_suit_mask[s] |= 1 << r;
    }

    let flush_suit = suit_counts.iter().position(|&n| n >= 5);

    if let Some(s) = flush_suit {
        if let Some(high) = straight_high_from_mask(by_suit_mask[s]) {
            return strength(Category::StraightFlush, &[high]);
        }
    }

    let mut quads = vec![];
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            4 => quads.push(r),
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }

    if let Some(&quad) = quads.first() {
        let kicker = (2..=14u8)
            .rev()
            .find(|&r| r != quad && rank_counts[r as usize] > 0)
            .unwrap_or(0);
        return strength(Category::FourOfAKind, &[quad, kicker]);
    }

    if let Some(&trip) = trips.first() {
        let pair = [trips.get(1).copied(), pairs.first().copied()]
            .into_iter()
            .flatten()
            .max();
        if let Some(pair) = pair {
            return strength(Category::FullHouse, &[trip, pair]);
        }
    }

    if let Some(s) = flush_suit {
        let top: Vec<u8> = (2..=14u8)
            .rev()
            .filter(|r| by_suit_mask[s] & (1 << r) != 0)
            .take(5)
            .collect();
        return strength(Category::Flush, &top);
    }

    if let Some(high) = straight_high_from_mask(rank_mask) {
        return strength(Category::Straight, &[high]);
    }

    if let Some(&trip) = trips.first() {
        let mut k = vec![trip];
        k.extend(singles.iter().take(2));
        return strength(Category::ThreeOfAKind, &k);
    }

    if pairs.len() >= 2 {
        let kicker = pairs[2..]
            .iter()
            .chain(singles.iter())
            .copied()
            .max()
            .unwrap_or(0);
        return strength(Category::TwoPair, &[pairs[0], pairs[1], kicker]);
    }

    if let Some(&pair) = pairs.first() {
        let mut k = vec![pair];
        k.extend(singles.iter().take(3));
        return strength(Category::OnePair, &k);
    }

    strength(Category::HighCard, &singles[..singles.len().min(5)])
}

fn strength(category: Category, ranks: &[u8]) -> HandStrength {
    let mut kickers = [0u8; 5];
    for (slot, &r) in kickers.iter_mut().zip(ranks) {
        *slot = r;
    }
    HandStrength { category, kickers }
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    // Treat Ace as 14 and optionally as 1
    let mut m = mask;
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5
    (5..=14u8).rev().find(|&high| {
        let window = 0b11111u16 << (high - 4);
        (m & window) == window
    })
}
