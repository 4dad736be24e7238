// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands equity calculation.
//!
//! The [matchup] function enumerates all the boards that complete a partial
//! board and returns the exact win and tie fractions for each hand, the
//! [sim_matchup] function draws random boards and random opponents hands and
//! returns an estimate that converges to the exact value as the number of
//! simulations grows.
//!
//! Both engines split the work between parallel tasks, each task counts wins
//! and ties in its own tally and the tallies are added when all tasks
//! complete.
use serde::{Deserialize, Serialize};

use ace_cards::{Card, Deck, Error, Hand, Rank, Result, Suit};

use crate::eval::{HandValue, eval_unchecked};

mod exhaustive;
pub use exhaustive::{matchup, matchup_with};

mod monte_carlo;
pub use monte_carlo::{sim_matchup, sim_matchup_with};

/// Number of cards on a complete board.
pub(crate) const BOARD_SIZE: usize = 5;

/// The result of a matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupResult {
    /// The fraction of boards each hand wins alone, in hands order.
    pub wins: Vec<f64>,
    /// The fraction of boards each hand ties for the best hand, in hands order.
    pub ties: Vec<f64>,
}

impl MatchupResult {
    /// The number of hands.
    pub fn len(&self) -> usize {
        self.wins.len()
    }

    /// Checks if there are no hands.
    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }
}

/// Win and tie counters for the tracked hands.
#[derive(Debug)]
pub(crate) struct Tally {
    wins: Vec<u64>,
    ties: Vec<u64>,
    total: u64,
    values: Vec<HandValue>,
}

impl Tally {
    pub(crate) fn new(num_hands: usize) -> Self {
        Self {
            wins: vec![0; num_hands],
            ties: vec![0; num_hands],
            total: 0,
            values: Vec::new(),
        }
    }

    /// Evaluates the hands against a complete board and updates the counters
    /// for the tracked hands, the other hands only compete for the pot.
    pub(crate) fn showdown<I>(&mut self, holes: I, board: &[Card; BOARD_SIZE])
    where
        I: IntoIterator<Item = [Card; 2]>,
    {
        let mut cards = [board[0]; 7];
        cards[2..].copy_from_slice(board);

        self.values.clear();
        for hole in holes {
            cards[..2].copy_from_slice(&hole);
            self.values.push(eval_unchecked(&cards));
        }

        self.total += 1;

        let Some(&best) = self.values.iter().max() else {
            return;
        };

        let num_best = self.values.iter().filter(|&&v| v == best).count();
        let tracked = self.values.iter().zip(self.wins.iter_mut().zip(&mut self.ties));
        for (&v, (wins, ties)) in tracked {
            if v == best {
                if num_best == 1 {
                    *wins += 1;
                } else {
                    *ties += 1;
                }
            }
        }
    }

    /// Adds the counters of the tasks tallies.
    pub(crate) fn merge(num_hands: usize, tallies: Vec<Tally>) -> Tally {
        tallies.into_iter().fold(Tally::new(num_hands), |mut acc, t| {
            acc.total += t.total;
            acc.wins.iter_mut().zip(t.wins).for_each(|(a, w)| *a += w);
            acc.ties.iter_mut().zip(t.ties).for_each(|(a, w)| *a += w);
            acc
        })
    }

    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    /// Converts the counters to fractions of the total.
    pub(crate) fn into_result(self) -> MatchupResult {
        let total = self.total.max(1) as f64;
        MatchupResult {
            wins: self.wins.into_iter().map(|w| w as f64 / total).collect(),
            ties: self.ties.into_iter().map(|t| t as f64 / total).collect(),
        }
    }
}

/// A placeholder card for fixed size buffers.
pub(crate) const NO_CARD: Card = Card::new(Rank::Deuce, Suit::Hearts);

/// Copies the known board to a complete board buffer and returns the number
/// of known cards.
pub(crate) fn board_buffer(board: &[Card]) -> ([Card; BOARD_SIZE], usize) {
    let mut buf = [NO_CARD; BOARD_SIZE];
    buf[..board.len()].copy_from_slice(board);
    (buf, board.len())
}

/// Checks the engines inputs, hands and board must be disjoint and none of
/// their cards can be in the deck.
pub(crate) fn check_inputs(hands: &[Hand], deck: &Deck, board: &[Card]) -> Result<()> {
    if hands.is_empty() {
        return Err(Error::InvalidParameter("no hands to match".to_string()));
    }

    if board.len() > BOARD_SIZE {
        return Err(Error::InvalidParameter(format!(
            "board has {} cards, at most {BOARD_SIZE} allowed",
            board.len()
        )));
    }

    let mut known = 0u64;
    let cards = hands.iter().flat_map(|h| h.cards()).chain(board.iter().copied());
    for c in cards {
        let bit = 1u64 << c.id();
        if known & bit != 0 || deck.contains(c) {
            return Err(Error::DuplicateCard(c));
        }
        known |= bit;
    }

    Ok(())
}
