// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown evaluation and reporting.
use anyhow::{Context, Result};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::fmt;

use showdown_eval::{
    BOARD_SIZE, Card, Deck, HOLE_SIZE, Showdown, evaluate_cards, parse_cards,
};

use crate::config::{Config, Deal, Format};

/// The evaluated showdown with the cards it was dealt from.
#[derive(Debug, Serialize)]
struct Report {
    board: Vec<Card>,
    hand1: Vec<Card>,
    hand2: Vec<Card>,
    showdown: Showdown,
}

/// Evaluates the configured showdown and returns the formatted report.
pub fn run(config: &Config) -> Result<String> {
    let (board, hand1, hand2) = deal(&config.deal)?;
    let showdown = evaluate_cards(&board, &hand1, &hand2)?;

    let report = Report {
        board,
        hand1,
        hand2,
        showdown,
    };

    match config.format {
        Format::Text => Ok(report.to_string()),
        Format::Json => serde_json::to_string_pretty(&report).context("Cannot encode showdown"),
    }
}

fn deal(deal: &Deal) -> Result<(Vec<Card>, Vec<Card>, Vec<Card>)> {
    match deal {
        Deal::Cards {
            board,
            hand1,
            hand2,
        } => Ok((
            parse_cards(board).context("Invalid board")?,
            parse_cards(hand1).context("Invalid player 1 hand")?,
            parse_cards(hand2).context("Invalid player 2 hand")?,
        )),
        Deal::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_os_rng(),
            };

            let mut deck = Deck::new_and_shuffled(&mut rng);
            let board = deck.deal_n::<BOARD_SIZE>().context("Not enough cards")?;
            let hand1 = deck.deal_n::<HOLE_SIZE>().context("Not enough cards")?;
            let hand2 = deck.deal_n::<HOLE_SIZE>().context("Not enough cards")?;
            info!("Dealt random showdown with seed {seed:?}");

            Ok((board.to_vec(), hand1.to_vec(), hand2.to_vec()))
        }
    }
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let showdown = &self.showdown;
        writeln!(f, "Board:    {}", join_cards(&self.board))?;
        writeln!(
            f,
            "Player 1: {:<6} {}",
            join_cards(&self.hand1),
            showdown.player1()
        )?;
        writeln!(
            f,
            "Player 2: {:<6} {}",
            join_cards(&self.hand2),
            showdown.player2()
        )?;
        write!(f, "{showdown}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards_config(board: &str, hand1: &str, hand2: &str, format: Format) -> Config {
        Config {
            deal: Deal::Cards {
                board: board.to_string(),
                hand1: hand1.to_string(),
                hand2: hand2.to_string(),
            },
            format,
        }
    }

    #[test]
    fn text_report() {
        let config = cards_config("2H 5C 7S 8C 4D", "AH AD", "KC QS", Format::Text);
        let text = run(&config).unwrap();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Board:    2H 5C 7S 8C 4D");
        assert_eq!(lines[1], "Player 1: AH AD  One Pair [AH AD 8C 7S 5C]");
        assert_eq!(lines[2], "Player 2: KC QS  High Card [KC QS 8C 7S 5C]");
        assert_eq!(lines[3], "Player 1 wins with One Pair [AH AD 8C 7S 5C]");
    }

    #[test]
    fn tie_report() {
        let config = cards_config("AC KC QC JC 9C", "2H 3D", "4S 5H", Format::Text);
        let text = run(&config).unwrap();
        assert_eq!(text.lines().last(), Some("Tie with Flush"));
    }

    #[test]
    fn json_report() {
        let config = cards_config("2H 5C 7S 8C 4D", "AH AD", "KC QS", Format::Json);
        let json = run(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["showdown"]["verdict"], "Player1");
        assert_eq!(value["showdown"]["category"], "OnePair");
        assert_eq!(value["board"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn invalid_cards() {
        let config = cards_config("2H 5C 7S 8C", "AH AD", "KC QS", Format::Text);
        let err = run(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: board needs 5 cards, found 4"
        );

        let config = cards_config("2H 5C 7S 8C 4D", "AH A", "KC QS", Format::Text);
        let err = run(&config).unwrap_err();
        assert_eq!(err.to_string(), "Invalid player 1 hand");
    }

    #[test]
    fn seeded_random_deal() {
        let config = Config {
            deal: Deal::Random { seed: Some(42) },
            format: Format::Text,
        };

        // Same seed, same showdown.
        let first = run(&config).unwrap();
        assert_eq!(first, run(&config).unwrap());
        assert_eq!(first.lines().count(), 4);
    }
}
