// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Command line configuration.

/// Where the showdown cards come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deal {
    /// Cards given as text.
    Cards {
        /// The board cards.
        board: String,
        /// The first player cards.
        hand1: String,
        /// The second player cards.
        hand2: String,
    },
    /// Cards dealt from a shuffled deck, with an optional seed.
    Random {
        /// The shuffle seed.
        seed: Option<u64>,
    },
}

/// The output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human readable text.
    Text,
    /// Pretty printed JSON.
    Json,
}

/// The CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The showdown deal.
    pub deal: Deal,
    /// The output format.
    pub format: Format,
}
