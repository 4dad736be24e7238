// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
// Elapsed:         0.912s
// Hands/sec:       146693596
//
// High Card:       23294460
// One Pair:        58627800
// Two Pair:        31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  41584
// ```
use clap::Parser;
use log::info;
use std::time::Instant;

use ace_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of parallel tasks, defaults to the available cores.
    #[clap(long, short)]
    tasks: Option<usize>,
    /// Count 5 cards hands instead of 7 cards hands.
    #[clap(long)]
    five: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let mut config = Config::default();
    if let Some(tasks) = cli.tasks {
        config = config.with_tasks(tasks);
    }

    info!("Counting hands with {} tasks", config.num_tasks);

    let now = Instant::now();
    let deck = build_deck();
    let freq = if cli.five {
        check_accuracy_5_with(&config, &deck)?
    } else {
        check_accuracy_with(&config, &deck)?
    };

    let elapsed = now.elapsed().as_secs_f64();
    let total = freq.total();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for (rank, count) in freq.iter() {
        println!("{:<17}{count}", format!("{rank}:"));
    }

    Ok(())
}
