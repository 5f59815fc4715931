// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Two players showdown.
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    BestHand, EvalError, HAND_SIZE, HandCategory, POOL_SIZE, Verdict, classify, compare,
};
use showdown_cards::{Card, parse_cards};

/// The number of shared cards.
pub const BOARD_SIZE: usize = 5;

/// The number of private cards for each player.
pub const HOLE_SIZE: usize = 2;

/// The shared cards.
pub type Board = [Card; BOARD_SIZE];

/// A player private cards.
pub type Hole = [Card; HOLE_SIZE];

/// The result of a two players showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    category: HandCategory,
    verdict: Verdict,
    player1: BestHand,
    player2: BestHand,
}

impl Showdown {
    /// The winning hand category, on a tie the category both players share.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The showdown verdict.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// The first player best hand.
    pub fn player1(&self) -> &BestHand {
        &self.player1
    }

    /// The second player best hand.
    pub fn player2(&self) -> &BestHand {
        &self.player2
    }

    /// The winner best hand, `None` on a tie.
    pub fn winner(&self) -> Option<&BestHand> {
        match self.verdict {
            Verdict::Player1 => Some(&self.player1),
            Verdict::Player2 => Some(&self.player2),
            Verdict::Tie => None,
        }
    }

    /// The winning five cards.
    ///
    /// On a tie these are the cards both players play, when they play the same
    /// cards (the board plays), otherwise there is no single winning hand.
    pub fn winning_cards(&self) -> Option<[Card; HAND_SIZE]> {
        match self.winner() {
            Some(best) => Some(*best.cards()),
            None if self.player1.cards() == self.player2.cards() => Some(*self.player1.cards()),
            None => None,
        }
    }
}

impl fmt::Display for Showdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(best) => write!(f, "{} with {best}", self.verdict),
            None => write!(f, "{} with {}", self.verdict, self.category),
        }
    }
}

/// Evaluates a showdown between two players sharing the same board.
///
/// ```
/// # use showdown_eval::{evaluate, parse_cards, Board, HandCategory, Hole, Verdict};
/// let board: Board = parse_cards("2H 5C 7S 8C 4D").unwrap().try_into().unwrap();
/// let hand1: Hole = parse_cards("AH AD").unwrap().try_into().unwrap();
/// let hand2: Hole = parse_cards("KC QS").unwrap().try_into().unwrap();
///
/// let showdown = evaluate(&board, &hand1, &hand2);
/// assert_eq!(showdown.category(), HandCategory::OnePair);
/// assert_eq!(showdown.verdict(), Verdict::Player1);
/// ```
pub fn evaluate(board: &Board, hand1: &Hole, hand2: &Hole) -> Showdown {
    let player1 = classify(&pool(board, hand1));
    let player2 = classify(&pool(board, hand2));
    debug!("Player 1 {player1}");
    debug!("Player 2 {player2}");

    let verdict = Verdict::from_ordering(compare(&player1, &player2));
    let category = match verdict {
        Verdict::Player2 => player2.category(),
        Verdict::Player1 | Verdict::Tie => player1.category(),
    };
    debug!("{verdict} ({category})");

    Showdown {
        category,
        verdict,
        player1,
        player2,
    }
}

/// Evaluates a showdown from cards slices, fails if the board doesn't have
/// five cards or a hand doesn't have two cards.
pub fn evaluate_cards(
    board: &[Card],
    hand1: &[Card],
    hand2: &[Card],
) -> Result<Showdown, EvalError> {
    let board = sized::<BOARD_SIZE>("board", board)?;
    let hand1 = sized::<HOLE_SIZE>("player 1 hand", hand1)?;
    let hand2 = sized::<HOLE_SIZE>("player 2 hand", hand2)?;
    Ok(evaluate(&board, &hand1, &hand2))
}

/// Evaluates a showdown from cards text like `"2H 5C 7S 8C 4D"`.
///
/// ```
/// # use showdown_eval::{evaluate_str, HandCategory, Verdict};
/// let showdown = evaluate_str("5C 6D 7H 8S KD", "4C 2H", "AS QD").unwrap();
/// assert_eq!(showdown.category(), HandCategory::Straight);
/// assert_eq!(showdown.verdict(), Verdict::Player1);
/// ```
pub fn evaluate_str(board: &str, hand1: &str, hand2: &str) -> Result<Showdown, EvalError> {
    evaluate_cards(&parse_cards(board)?, &parse_cards(hand1)?, &parse_cards(hand2)?)
}

fn sized<const N: usize>(what: &'static str, cards: &[Card]) -> Result<[Card; N], EvalError> {
    cards.try_into().map_err(|_| EvalError::InvalidInput {
        what,
        expected: N,
        found: cards.len(),
    })
}

fn pool(board: &Board, hole: &Hole) -> [Card; POOL_SIZE] {
    let mut pool = [board[0]; POOL_SIZE];
    pool[..BOARD_SIZE].copy_from_slice(board);
    pool[BOARD_SIZE..].copy_from_slice(hole);
    pool
}
