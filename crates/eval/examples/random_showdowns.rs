// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example random_showdowns
// ```
use std::time::Instant;

use showdown_eval::*;

fn main() {
    const SHOWDOWNS: usize = 1_000_000;

    let mut rng = rand::rng();
    let mut counts = [0usize; 11];
    let (mut wins1, mut wins2, mut ties) = (0usize, 0usize, 0usize);

    let now = Instant::now();
    for _ in 0..SHOWDOWNS {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let (Some(board), Some(hand1), Some(hand2)) = (
            deck.deal_n::<BOARD_SIZE>(),
            deck.deal_n::<HOLE_SIZE>(),
            deck.deal_n::<HOLE_SIZE>(),
        ) else {
            unreachable!("a full deck has enough cards for a showdown");
        };

        let showdown = evaluate(&board, &hand1, &hand2);
        counts[showdown.category().strength() as usize] += 1;

        match showdown.verdict() {
            Verdict::Player1 => wins1 += 1,
            Verdict::Player2 => wins2 += 1,
            Verdict::Tie => ties += 1,
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    println!("Showdowns:       {SHOWDOWNS}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Showdowns/sec:   {:.0}\n", SHOWDOWNS as f64 / elapsed);

    println!("Player 1 wins:   {wins1}");
    println!("Player 2 wins:   {wins2}");
    println!("Ties:            {ties}\n");

    for category in HandCategory::categories() {
        println!("{:<17}{}", format!("{category}:"), counts[category.strength() as usize]);
    }
}
