// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors returned when parsing cards from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank symbol is not one of 2..10, T, J, Q, K, A.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit symbol is not one of C, D, H, S or a suit symbol.
    #[error("invalid suit '{0}'")]
    InvalidSuit(String),
    /// The card text is too short to hold a rank and a suit.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}

/// A Poker card.
///
/// Cards are plain values, two cards with the same rank and suit are equal and
/// the evaluator never relies on cards being distinct.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card like `AH`, `10d`, `TS` or `Q♣`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (idx, _) = s
            .char_indices()
            .last()
            .filter(|(idx, _)| *idx > 0)
            .ok_or_else(|| ParseCardError::InvalidCard(s.to_string()))?;

        let rank = s[..idx].parse::<Rank>()?;
        let suit = s[idx..].parse::<Suit>()?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by whitespace or commas.
///
/// ```
/// # use showdown_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("AH, 10d KS").unwrap();
/// assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Diamonds));
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

/// Rank strengths indexed by rank, deuce is 2 and ace is 14.
const STRENGTHS: [u8; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

impl Rank {
    /// The strength of an ace playing as the low end of a straight.
    pub const LOW_ACE_STRENGTH: u8 = 1;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The numeric strength of this rank, from 2 for a deuce to 14 for an ace.
    pub fn strength(&self) -> u8 {
        STRENGTHS[*self as usize]
    }

    /// The rank index, from 0 for a deuce to 12 for an ace.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s {
            "C" | "c" | "♣" | "♧" => Suit::Clubs,
            "D" | "d" | "♦" | "♢" => Suit::Diamonds,
            "H" | "h" | "♥" | "♡" => Suit::Hearts,
            "S" | "s" | "♠" | "♤" => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit(s.to_string())),
        };

        Ok(suit)
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` once the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `N` cards from the deck.
    pub fn deal_n<const N: usize>(&mut self) -> Option<[Card; N]> {
        if self.cards.len() < N {
            return None;
        }

        let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); N];
        for card in cards.iter_mut() {
            *card = self.cards.pop()?;
        }

        Some(cards)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_cards_are_unique() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_deal_n() {
        let mut deck = Deck::default();
        let board = deck.deal_n::<5>().unwrap();
        assert_eq!(board.len(), 5);
        assert_eq!(deck.count(), Deck::SIZE - 5);

        let mut deck = Deck::default();
        for _ in 0..Deck::SIZE - 1 {
            deck.deal();
        }
        assert!(deck.deal_n::<2>().is_none());
        assert_eq!(deck.count(), 1);
    }

    #[test]
    fn rank_strength() {
        let strengths = Rank::ranks().map(|r| r.strength()).collect::<Vec<_>>();
        assert_eq!(strengths, (2..=14).collect::<Vec<u8>>());
        assert!(Rank::LOW_ACE_STRENGTH < Rank::Deuce.strength());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10H");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        assert_eq!("KD".parse(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("10h".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("tS".parse(), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!("A♣".parse(), Ok(Card::new(Rank::Ace, Suit::Clubs)));
        assert_eq!(" 2♥ ".parse(), Ok(Card::new(Rank::Deuce, Suit::Hearts)));

        // Every card round trips through its display form.
        for card in Deck::default() {
            assert_eq!(card.to_string().parse(), Ok(card));
        }
    }

    #[test]
    fn card_from_invalid_string() {
        assert_eq!(
            "".parse::<Card>(),
            Err(ParseCardError::InvalidCard("".to_string()))
        );
        assert_eq!(
            "H".parse::<Card>(),
            Err(ParseCardError::InvalidCard("H".to_string()))
        );
        assert_eq!(
            "1H".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "11H".parse::<Card>(),
            Err(ParseCardError::InvalidRank("11".to_string()))
        );
        assert_eq!(
            "AX".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("X".to_string()))
        );
    }

    #[test]
    fn parse_card_lists() {
        let cards = parse_cards("2H 5C,7S, 8C  4D").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Deuce, Suit::Hearts),
                Card::new(Rank::Five, Suit::Clubs),
                Card::new(Rank::Seven, Suit::Spades),
                Card::new(Rank::Eight, Suit::Clubs),
                Card::new(Rank::Four, Suit::Diamonds),
            ]
        );

        assert_eq!(parse_cards(""), Ok(vec![]));
        assert_eq!(
            parse_cards("AH ZZ"),
            Err(ParseCardError::InvalidRank("Z".to_string()))
        );
    }
}
