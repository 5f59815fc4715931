// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand classifier.
//!
//! The classifier tries a table of detectors from the strongest category to
//! the weakest and stops at the first detector that finds a hand, so that a
//! pool is always reported with its strongest category. Each detector picks
//! the five cards ordered by descending significance (quads before kicker,
//! higher pair before lower pair, straight high card first) and the tie-break
//! key is read from those cards in the same order.
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::HandCategory;
use showdown_cards::{Card, Rank, Suit};

/// The number of cards in a pool, five shared cards and two private cards.
pub const POOL_SIZE: usize = 7;

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// The comparable value of a hand.
///
/// Values are ordered by category first and then by the tie-break key, suits
/// never break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    category: HandCategory,
    key: [u8; HAND_SIZE],
}

impl HandValue {
    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tie-break key, the strength of each hand card in order.
    pub fn key(&self) -> [u8; HAND_SIZE] {
        self.key
    }
}

/// The best five cards hand found in a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHand {
    value: HandValue,
    cards: [Card; HAND_SIZE],
}

impl BestHand {
    fn new(category: HandCategory, cards: [Card; HAND_SIZE]) -> Self {
        let mut key = cards.map(|c| c.rank().strength());

        // An ace at the bottom of a straight is the wheel, the ace plays low.
        let is_straight = matches!(
            category,
            HandCategory::Straight | HandCategory::StraightFlush
        );
        if is_straight && cards[0].rank() == Rank::Five && cards[4].rank() == Rank::Ace {
            key[4] = Rank::LOW_ACE_STRENGTH;
        }

        Self {
            value: HandValue { category, key },
            cards,
        }
    }

    /// The hand value used for comparisons.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.value.category
    }

    /// The tie-break key.
    pub fn key(&self) -> [u8; HAND_SIZE] {
        self.value.key
    }

    /// The hand cards by descending significance.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category())?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// Classifies a pool of seven cards and returns its best five cards hand.
///
/// The caller is responsible for passing physically distinct cards, duplicate
/// cards are not detected and the result for such pools is unspecified.
///
/// ```
/// # use showdown_eval::{classify, parse_cards, Card, HandCategory, POOL_SIZE};
/// let pool: [Card; POOL_SIZE] = parse_cards("7C 8D 8H 7S 8C 7D 4H")
///     .unwrap()
///     .try_into()
///     .unwrap();
/// let best = classify(&pool);
/// assert_eq!(best.category(), HandCategory::FullHouse);
/// assert_eq!(best.key(), [8, 8, 8, 7, 7]);
/// ```
pub fn classify(pool: &[Card; POOL_SIZE]) -> BestHand {
    let pool = Pool::new(pool);

    let (category, cards) = DETECTORS
        .iter()
        .find_map(|(category, detect)| detect(&pool).map(|cards| (*category, cards)))
        .unwrap_or_else(|| (HandCategory::HighCard, pool.high_card()));

    trace!("Classified {:?} as {category}", pool.cards);
    BestHand::new(category, cards)
}

/// A detector returns the five cards for its category or `None` if the pool
/// doesn't contain the category.
type Detector = fn(&Pool) -> Option<[Card; HAND_SIZE]>;

/// Detectors ordered from the strongest category, the high card is the
/// fallback when no detector matches.
const DETECTORS: [(HandCategory, Detector); 9] = [
    (HandCategory::RoyalFlush, royal_flush),
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind, four_of_a_kind),
    (HandCategory::FullHouse, full_house),
    (HandCategory::Flush, flush),
    (HandCategory::Straight, straight),
    (HandCategory::ThreeOfAKind, three_of_a_kind),
    (HandCategory::TwoPair, two_pair),
    (HandCategory::OnePair, one_pair),
];

/// The pool cards sorted by descending rank with the per rank counts.
struct Pool {
    cards: [Card; POOL_SIZE],
    counts: [usize; 13],
}

impl Pool {
    fn new(cards: &[Card; POOL_SIZE]) -> Self {
        let mut cards = *cards;
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));

        let mut counts = [0; 13];
        for card in &cards {
            counts[card.rank().index()] += 1;
        }

        Self { cards, counts }
    }

    fn count(&self, rank: Rank) -> usize {
        self.counts[rank.index()]
    }

    /// Ranks with at least `n` cards, highest first.
    fn ranks_with(&self, n: usize) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().rev().filter(move |r| self.count(*r) >= n)
    }

    /// Cards with the given rank.
    fn of_rank(&self, rank: Rank) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.rank() == rank)
    }

    /// Cards whose rank is not in `skip`, highest first.
    fn kickers<const N: usize>(&self, skip: [Rank; N]) -> impl Iterator<Item = Card> + '_ {
        self.cards
            .iter()
            .copied()
            .filter(move |c| !skip.contains(&c.rank()))
    }

    /// Cards with the given suit, highest first.
    fn suited(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.suit() == suit)
    }

    /// The suit with at least five cards, with seven cards there is at most one.
    fn flush_suit(&self) -> Option<Suit> {
        Suit::suits().find(|&s| self.suited(s).count() >= HAND_SIZE)
    }

    fn high_card(&self) -> [Card; HAND_SIZE] {
        let mut cards = [self.cards[0]; HAND_SIZE];
        cards.copy_from_slice(&self.cards[..HAND_SIZE]);
        cards
    }
}

/// Takes the first five cards, or `None` if there are fewer than five.
fn take_hand(cards: impl Iterator<Item = Card>) -> Option<[Card; HAND_SIZE]> {
    cards.take(HAND_SIZE).collect::<Vec<_>>().try_into().ok()
}

/// Finds the highest five cards run in cards sorted by descending rank.
///
/// Cards with the same rank count once, the first of them is used.
fn straight_run(cards: impl Iterator<Item = Card>) -> Option<[Card; HAND_SIZE]> {
    let mut by_rank: [Option<Card>; 13] = [None; 13];
    for card in cards {
        by_rank[card.rank().index()].get_or_insert(card);
    }

    // From ace high down to six high.
    for high in (HAND_SIZE - 1..by_rank.len()).rev() {
        let run = (high + 1 - HAND_SIZE..=high)
            .rev()
            .map(|idx| by_rank[idx])
            .collect::<Option<Vec<_>>>();
        if let Some(run) = run {
            return run.try_into().ok();
        }
    }

    // The wheel: five to deuce with the ace below the deuce.
    let wheel = [Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce, Rank::Ace]
        .iter()
        .map(|r| by_rank[r.index()])
        .collect::<Option<Vec<_>>>()?;
    wheel.try_into().ok()
}

fn royal_flush(pool: &Pool) -> Option<[Card; HAND_SIZE]> {
    let suit = pool.flush_suit()?;
    let royal =
        [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten].map(|r| Card::new(r, suit));
    royal
        .iter()
        .all(|card| pool.cards.contains(card))
        .then_some(royal)
}

fn straight_flush(pool: &Pool) -> Option<[Card; HAND_SIZE]> {
    let suit = pool.flush_suit()?;
    straight_run(pool.suited(suit))
}

fn four_of_a_kind(pool: &Pool) -> Option<[Card; HAND_SIZE]> {
    let quads = pool.ranks_with(4).next()?;
    take_hand(pool.of_rank(quads).take(4).chain(pool.kickers([quads]).take(1)))
}

fn full_house(pool: &Pool) -> Option<[Card; HAND_SIZE]> {
    let trips = pool.ranks_with(3).next()?;

    // Any other rank with two or more cards, a second set of trips included.
    let pair = pool.ranks_with(2).find(|&r| r != trips)?;
    take_hand(pool.of_rank(trips).take(3).chain(pool.of_rank(pair).take(2)))
}

fn flush(pool: &Pool) -> Option<[Card; HAND_SIZE]> {
    let suit = pool.flush_suit()?;
    take_hand(pool.suited(suit))
}

fn straight(pool: &Pool) -> Option<[Card; HAND_SIZE]> {
    straight_run(pool.cards.iter().copied())
}

fn three_of_a_kind(pool: &Pool) -> Option<[Card; HAND_SIZE]> {
    let trips = pool.ranks_with(3).find(|&r| pool.count(r) == 3)?;
    take_hand(pool.of_rank(trips).chain(pool.kickers([trips]).take(2)))
}

fn two_pair(pool: &Pool) -> Option<[Card; HAND_SIZE]> {
    let mut pairs = pool.ranks_with(2);
    let (high, low) = (pairs.next()?, pairs.next()?);
    take_hand(
        pool.of_rank(high)
            .take(2)
            .chain(pool.of_rank(low).take(2))
            .chain(pool.kickers([high, low]).take(1)),
    )
}

fn one_pair(pool: &Pool) -> Option<[Card; HAND_SIZE]> {
    let pair = pool.ranks_with(2).next()?;
    take_hand(pool.of_rank(pair).take(2).chain(pool.kickers([pair]).take(3)))
}
