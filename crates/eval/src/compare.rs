// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands comparison.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::BestHand;

/// The outcome of a two players showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Both players have hands of equal value.
    Tie,
    /// The first player wins.
    Player1,
    /// The second player wins.
    Player2,
}

impl Verdict {
    /// Maps the ordering of the first player hand against the second player
    /// hand to a verdict.
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Verdict::Player1,
            Ordering::Less => Verdict::Player2,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Tie => write!(f, "Tie"),
            Verdict::Player1 => write!(f, "Player 1 wins"),
            Verdict::Player2 => write!(f, "Player 2 wins"),
        }
    }
}

/// Compares two hands, the category decides first and the tie-break keys are
/// compared element by element when the categories are equal.
pub fn compare(a: &BestHand, b: &BestHand) -> Ordering {
    a.value().cmp(&b.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandCategory, POOL_SIZE, classify};
    use showdown_cards::{Card, parse_cards};

    fn classify_str(s: &str) -> BestHand {
        let pool: [Card; POOL_SIZE] = parse_cards(s).unwrap().try_into().unwrap();
        classify(&pool)
    }

    #[test]
    fn higher_category_wins() {
        // Lowest full house against the highest flush.
        let full_house = classify_str("2C 2D 2H 3S 3C 8D 9H");
        let flush = classify_str("AH KH QH JH 9H 2C 3D");
        assert_eq!(full_house.category(), HandCategory::FullHouse);
        assert_eq!(flush.category(), HandCategory::Flush);

        assert_eq!(compare(&full_house, &flush), Ordering::Greater);
        assert_eq!(compare(&flush, &full_house), Ordering::Less);
    }

    #[test]
    fn kickers_break_ties() {
        let a = classify_str("AH AD KC 8S 7C 3D 2H");
        let b = classify_str("AS AC QC 8D 7H 3C 2D");
        assert_eq!(a.category(), HandCategory::OnePair);
        assert_eq!(b.category(), HandCategory::OnePair);
        assert_eq!(compare(&a, &b), Ordering::Greater);

        // Last kicker.
        let a = classify_str("KH QD 9C 7S 4C 3D 2H");
        let b = classify_str("KS QC 9D 7H 3C 2D 5S");
        assert_eq!(a.category(), HandCategory::HighCard);
        assert_eq!(b.category(), HandCategory::HighCard);
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn suits_never_break_ties() {
        let a = classify_str("AH KD 9C 7S 4C 3D 2H");
        let b = classify_str("AS KC 9D 7H 4D 3C 2S");
        assert_eq!(compare(&a, &b), Ordering::Equal);
        assert_ne!(a.cards(), b.cards());
    }

    #[test]
    fn wheel_is_the_lowest_straight() {
        let wheel = classify_str("AH 2D 3C 4S 5C 9D KH");
        let six_high = classify_str("2H 3D 4C 5S 6C 9D KH");
        assert_eq!(compare(&wheel, &six_high), Ordering::Less);

        let wheel_flush = classify_str("AS 2S 3S 4S 5S 9D KH");
        let six_high_flush = classify_str("2H 3H 4H 5H 6H 9D KD");
        assert_eq!(compare(&wheel_flush, &six_high_flush), Ordering::Less);
        assert_eq!(compare(&wheel_flush, &six_high), Ordering::Greater);
    }

    #[test]
    fn verdict_from_ordering() {
        assert_eq!(Verdict::from_ordering(Ordering::Greater), Verdict::Player1);
        assert_eq!(Verdict::from_ordering(Ordering::Less), Verdict::Player2);
        assert_eq!(Verdict::from_ordering(Ordering::Equal), Verdict::Tie);
    }
}
