// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity estimates by random sampling.
use log::debug;
use rand::Rng;
use std::time::Instant;

use ace_cards::{Card, Deck, Error, Hand, Result};

use super::{BOARD_SIZE, MatchupResult, Tally, board_buffer, check_inputs};
use crate::Config;

/// Estimates the win and tie fractions of the hands by simulating `num_sims`
/// random deals.
///
/// Each deal draws `random_opponents` 2-cards hands and the missing board
/// cards from `deck`, the opponents play against the hands but only the
/// hands results are returned. See [sim_matchup_with] for the errors.
pub fn sim_matchup(
    hands: &[Hand],
    deck: &Deck,
    board: &[Card],
    random_opponents: usize,
    num_sims: usize,
) -> Result<MatchupResult> {
    sim_matchup_with(
        &Config::default(),
        hands,
        deck,
        board,
        random_opponents,
        num_sims,
    )
}

/// Same as [sim_matchup] with an explicit configuration, runs with the same
/// seed return the same result for any number of tasks.
///
/// Fails with [Error::InvalidParameter] if `num_sims` is 0, and with
/// [Error::InsufficientDeck] if the deck cannot deal the opponents hands and
/// the missing board cards. Hands and board are checked as in
/// [matchup_with](super::matchup_with).
pub fn sim_matchup_with(
    config: &Config,
    hands: &[Hand],
    deck: &Deck,
    board: &[Card],
    random_opponents: usize,
    num_sims: usize,
) -> Result<MatchupResult> {
    config.validate()?;
    check_inputs(hands, deck, board)?;

    if num_sims == 0 {
        return Err(Error::InvalidParameter(
            "num_sims must be greater than 0".to_string(),
        ));
    }

    let opponents_cards = random_opponents.saturating_mul(2);
    let draw = opponents_cards.saturating_add(BOARD_SIZE - board.len());
    if draw > deck.count() {
        return Err(Error::InsufficientDeck {
            needed: draw,
            available: deck.count(),
        });
    }

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    debug!(
        "Simulating {} hands with {} opponents for {} deals using {} tasks, seed {}",
        hands.len(),
        random_opponents,
        num_sims,
        config.num_tasks,
        seed
    );

    let now = Instant::now();
    let (known, known_len) = board_buffer(board);

    let tallies = deck.par_sample(
        config.num_tasks,
        num_sims,
        draw,
        seed,
        |_| Tally::new(hands.len()),
        |tally, cards| {
            let (opponents, rest) = cards.split_at(opponents_cards);

            let mut full = known;
            full[known_len..].copy_from_slice(rest);

            let holes = hands
                .iter()
                .map(Hand::cards)
                .chain(opponents.chunks_exact(2).map(|c| [c[0], c[1]]));
            tally.showdown(holes, &full);
        },
    )?;

    let tally = Tally::merge(hands.len(), tallies);
    debug!(
        "Simulated {} deals in {:.3}s",
        tally.total(),
        now.elapsed().as_secs_f64()
    );

    Ok(tally.into_result())
}
