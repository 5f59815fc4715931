// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use log::error;

mod config;
mod report;

use config::{Config, Deal, Format};

#[derive(Debug, Parser)]
#[clap(about = "Evaluates a two players Texas Hold'em showdown")]
struct Cli {
    /// The five board cards, for example "2H 5C 7S 8C 4D".
    #[clap(long, short, required_unless_present = "random")]
    board: Option<String>,
    /// The first player two cards, for example "AH AD".
    #[clap(long, required_unless_present = "random")]
    hand1: Option<String>,
    /// The second player two cards, for example "KC QS".
    #[clap(long, required_unless_present = "random")]
    hand2: Option<String>,
    /// Deals the board and the players cards from a shuffled deck.
    #[clap(long, short, conflicts_with_all = ["board", "hand1", "hand2"])]
    random: bool,
    /// The seed used to shuffle the deck for a random deal.
    #[clap(long, requires = "random")]
    seed: Option<u64>,
    /// Prints the showdown as JSON.
    #[clap(long, short)]
    json: bool,
    /// Enables debug logging.
    #[clap(long, short)]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let deal = if cli.random {
            Deal::Random { seed: cli.seed }
        } else {
            Deal::Cards {
                board: cli.board.unwrap_or_default(),
                hand1: cli.hand1.unwrap_or_default(),
                hand2: cli.hand2.unwrap_or_default(),
            }
        };

        let format = if cli.json { Format::Json } else { Format::Text };
        Config { deal, format }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match report::run(&Config::from(cli)) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    }
}
