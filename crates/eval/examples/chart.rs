// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the winning percentage of the 169 starting hands against random
// opponents:
//
// ```bash
// $ cargo r --release --example chart -- --num-players 2
// ```
use clap::{Parser, value_parser};
use log::info;
use std::time::Instant;

use ace_eval::*;

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of opposing players.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=9))]
    num_players: u8,
    /// The number of simulated deals for each hand.
    #[clap(long, short, default_value_t = 100_000)]
    sims: usize,
    /// The seed for the simulations.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let num_players = cli.num_players as usize;

    let mut config = Config::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    info!(
        "Simulating {} deals per hand against {num_players} opponents",
        cli.sims
    );

    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (c1, c2) = if r1 <= r2 {
                // Offsuit or pair
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            if c1.rank() == c2.rank() {
                labels.push(format!("{}{} ", c1.rank(), c2.rank()));
            } else if c1.suit() == c2.suit() {
                labels.push(format!("{}{}s", c1.rank(), c2.rank()));
            } else {
                labels.push(format!("{}{}o", c1.rank(), c2.rank()));
            }

            let hand = Hand::new(c1, c2)?;
            let deck = build_deck().remove(&hand.cards())?;
            let result = sim_matchup_with(&config, &[hand], &deck, &[], num_players, cli.sims)?;
            probs.push(result.wins[0] * 100.0);
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }

        println!();

        print!("|");
        for prob in &probs {
            print!(" {:2.0}% |", prob.round());
        }
        println!();

        separator();
    }

    info!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
    Ok(())
}
