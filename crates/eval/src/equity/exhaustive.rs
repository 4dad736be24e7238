// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exact equity by enumerating all boards.
use log::debug;
use std::time::Instant;

use ace_cards::{Card, Deck, Error, Hand, Result, nck};

use super::{BOARD_SIZE, MatchupResult, Tally, board_buffer, check_inputs};
use crate::Config;

/// Computes the exact win and tie fractions of the hands by enumerating all the
/// boards that complete `board` with cards from `deck`.
///
/// The deck must not contain any of the hands or board cards, see
/// [matchup_with] for the errors.
pub fn matchup(hands: &[Hand], deck: &Deck, board: &[Card]) -> Result<MatchupResult> {
    matchup_with(&Config::default(), hands, deck, board)
}

/// Same as [matchup] with an explicit configuration.
///
/// Fails with [Error::InsufficientDeck] if the deck has fewer cards than the
/// missing board cards, [Error::DuplicateCard] if a card is repeated in the
/// hands and board or is still in the deck, and [Error::InvalidParameter] if
/// there are no hands, more than 5 board cards or no tasks.
pub fn matchup_with(
    config: &Config,
    hands: &[Hand],
    deck: &Deck,
    board: &[Card],
) -> Result<MatchupResult> {
    config.validate()?;
    check_inputs(hands, deck, board)?;

    let k = BOARD_SIZE - board.len();
    if deck.count() < k {
        return Err(Error::InsufficientDeck {
            needed: k,
            available: deck.count(),
        });
    }

    debug!(
        "Matchup {} hands with {} boards using {} tasks",
        hands.len(),
        nck(deck.count(), k),
        config.num_tasks
    );

    let now = Instant::now();
    let (known, known_len) = board_buffer(board);

    let tallies = deck.par_for_each(
        config.num_tasks,
        k,
        |_| Tally::new(hands.len()),
        |tally, cards| {
            let mut full = known;
            full[known_len..].copy_from_slice(cards);
            tally.showdown(hands.iter().map(Hand::cards), &full);
        },
    )?;

    let tally = Tally::merge(hands.len(), tallies);
    debug!(
        "Matchup evaluated {} boards in {:.3}s",
        tally.total(),
        now.elapsed().as_secs_f64()
    );

    Ok(tally.into_result())
}
