// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Computes the equity of two or more hands:
//
// ```bash
// $ cargo r --release --example matchup -- AsAh KsKh --board Kc7s7h
// ```
//
// With random opponents the equity is simulated:
//
// ```bash
// $ cargo r --release --example matchup -- AsAh --opponents 2 --sims 1000000
// ```
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use std::time::Instant;

use ace_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The players hands, two cards each (e.g. AsAh).
    #[clap(required = true)]
    hands: Vec<String>,
    /// The board cards (e.g. Kc7s7h).
    #[clap(long, short, default_value = "")]
    board: String,
    /// The number of random opponents.
    #[clap(long, short, default_value_t = 0)]
    opponents: usize,
    /// The number of simulated deals, if 0 and there are no opponents the
    /// equity is computed on all the boards.
    #[clap(long, short, default_value_t = 0)]
    sims: usize,
    /// The seed for the simulation.
    #[clap(long)]
    seed: Option<u64>,
    /// The number of parallel tasks.
    #[clap(long, short)]
    tasks: Option<usize>,
}

fn parse_card(card: &str) -> Result<Card> {
    let mut chars = card.chars();
    let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
        bail!("Invalid card {card}");
    };

    let rank = match r.to_ascii_uppercase() {
        'T' => Rank::Ten,
        'J' => Rank::Jack,
        'Q' => Rank::Queen,
        'K' => Rank::King,
        'A' => Rank::Ace,
        d @ '2'..='9' => Rank::from_index(d as u8 - b'2'),
        _ => bail!("Invalid rank {r}"),
    };

    let suit = match s.to_ascii_lowercase() {
        'h' => Suit::Hearts,
        'c' => Suit::Clubs,
        'd' => Suit::Diamonds,
        's' => Suit::Spades,
        _ => bail!("Invalid suit {s}"),
    };

    Ok(Card::new(rank, suit))
}

fn parse_cards(s: &str) -> Result<Vec<Card>> {
    let chars = s.chars().collect::<Vec<_>>();
    chars
        .chunks(2)
        .map(|c| parse_card(&c.iter().collect::<String>()))
        .collect()
}

fn parse_hand(s: &str) -> Result<Hand> {
    let cards = parse_cards(s)?;
    let [c1, c2] = cards[..] else {
        bail!("Hand {s} must have two cards");
    };

    Hand::new(c1, c2).with_context(|| format!("Invalid hand {s}"))
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let hands = cli
        .hands
        .iter()
        .map(|h| parse_hand(h))
        .collect::<Result<Vec<_>>>()?;
    let board = parse_cards(&cli.board)?;

    let mut known = hands.iter().flat_map(|h| h.cards()).collect::<Vec<_>>();
    known.extend_from_slice(&board);
    let deck = build_deck()
        .remove(&known)
        .context("Hands and board cards must be distinct")?;

    let mut config = Config::default();
    if let Some(tasks) = cli.tasks {
        config = config.with_tasks(tasks);
    }

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let now = Instant::now();
    let result = if cli.opponents > 0 || cli.sims > 0 {
        let sims = if cli.sims == 0 { 1_000_000 } else { cli.sims };
        info!("Simulating {sims} deals with {} opponents", cli.opponents);
        sim_matchup_with(&config, &hands, &deck, &board, cli.opponents, sims)?
    } else {
        info!("Enumerating all boards");
        matchup_with(&config, &hands, &deck, &board)?
    };

    info!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());

    if !board.is_empty() {
        let board = board.iter().map(ToString::to_string).collect::<Vec<_>>();
        println!("Board: {}", board.join(" "));
    }

    for (idx, hand) in hands.iter().enumerate() {
        println!(
            "{hand}  win {:6.2}%  tie {:6.2}%",
            result.wins[idx] * 100.0,
            result.ties[idx] * 100.0
        );
    }

    Ok(())
}
