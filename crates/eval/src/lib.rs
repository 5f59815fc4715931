// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Evaluates a two players Texas Hold'em showdown: each player combines two
//! private cards with five shared cards, the evaluator finds the best five
//! cards hand in each seven cards pool, and compares the two hands to get the
//! winner and the winning hand category.
//!
//! ```
//! # use showdown_eval::*;
//! let showdown = evaluate_str("AC KC QC JC 9C", "2H 3D", "4S 5H").unwrap();
//! assert_eq!(showdown.category(), HandCategory::Flush);
//! assert_eq!(showdown.verdict(), Verdict::Tie);
//! ```
//!
//! The evaluation is a pure function of its inputs, the evaluator doesn't check
//! that the cards are physically distinct, that is the caller responsibility.
//!
//! To classify a single seven cards pool use [classify] and [compare] to order
//! two classified hands:
//!
//! ```
//! # use showdown_eval::*;
//! # use std::cmp::Ordering;
//! let deck = Deck::default().into_iter().collect::<Vec<_>>();
//! let low: [Card; POOL_SIZE] = deck[0..7].try_into().unwrap();
//! let high: [Card; POOL_SIZE] = deck[6..13].try_into().unwrap();
//! assert_eq!(compare(&classify(&high), &classify(&low)), Ordering::Greater);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod category;
mod classify;
mod compare;
mod error;
mod showdown;

pub use category::HandCategory;
pub use classify::{BestHand, HAND_SIZE, HandValue, POOL_SIZE, classify};
pub use compare::{Verdict, compare};
pub use error::EvalError;
pub use showdown::{
    BOARD_SIZE, Board, HOLE_SIZE, Hole, Showdown, evaluate, evaluate_cards, evaluate_str,
};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
