// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use showdown_cards::ParseCardError;
use thiserror::Error;

/// Errors returned for malformed showdown inputs.
///
/// Duplicate cards across board and hands are not errors, callers are
/// responsible for dealing physically distinct cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A group of cards has the wrong number of cards.
    #[error("invalid input: {what} needs {expected} cards, found {found}")]
    InvalidInput {
        /// The cards group, the board or a player hand.
        what: &'static str,
        /// The expected number of cards.
        expected: usize,
        /// The number of cards found.
        found: usize,
    },
    /// A card has an invalid rank or suit symbol.
    #[error("invalid input: {0}")]
    InvalidCard(#[from] ParseCardError),
}
