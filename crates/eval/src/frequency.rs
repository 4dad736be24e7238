// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories frequency counter.
//!
//! Enumerates every hand that can be dealt from a deck and counts the hands in
//! each category, for a full deck the counts are known in closed form so this
//! is a check of the evaluator.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{ops::Index, time::Instant};

use ace_cards::{Deck, Error, Result, nck};

use crate::{
    Config,
    eval::{HandRank, eval_unchecked},
};

/// Number of hands in each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequencies([u64; HandRank::SLOTS]);

impl Frequencies {
    /// The number of hands with the given category.
    pub fn get(&self, rank: HandRank) -> u64 {
        self.0[rank as usize]
    }

    /// The total number of hands.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Iterates the counts from the weakest to the strongest category.
    pub fn iter(&self) -> impl Iterator<Item = (HandRank, u64)> + '_ {
        HandRank::ranks().map(|r| (r, self.get(r)))
    }

    fn add(&mut self, rank: HandRank) {
        self.0[rank as usize] += 1;
    }

    fn merge(mut self, other: &Frequencies) -> Self {
        self.0.iter_mut().zip(other.0).for_each(|(a, b)| *a += b);
        self
    }
}

impl Index<HandRank> for Frequencies {
    type Output = u64;

    fn index(&self, rank: HandRank) -> &u64 {
        &self.0[rank as usize]
    }
}

/// Counts the categories of all the 7 cards hands in the deck.
///
/// For a full deck this evaluates 133,784,560 hands.
pub fn check_accuracy(deck: &Deck) -> Result<Frequencies> {
    check_accuracy_with(&Config::default(), deck)
}

/// Same as [check_accuracy] with an explicit configuration.
///
/// Fails with [Error::InsufficientDeck] if the deck has fewer than 7 cards.
pub fn check_accuracy_with(config: &Config, deck: &Deck) -> Result<Frequencies> {
    count_hands(config, deck, 7)
}

/// Counts the categories of all the 5 cards hands in the deck.
pub fn check_accuracy_5(deck: &Deck) -> Result<Frequencies> {
    check_accuracy_5_with(&Config::default(), deck)
}

/// Same as [check_accuracy_5] with an explicit configuration.
///
/// Fails with [Error::InsufficientDeck] if the deck has fewer than 5 cards.
pub fn check_accuracy_5_with(config: &Config, deck: &Deck) -> Result<Frequencies> {
    count_hands(config, deck, 5)
}

fn count_hands(config: &Config, deck: &Deck, k: usize) -> Result<Frequencies> {
    config.validate()?;

    if deck.count() < k {
        return Err(Error::InsufficientDeck {
            needed: k,
            available: deck.count(),
        });
    }

    debug!(
        "Counting {} hands of {k} cards using {} tasks",
        nck(deck.count(), k),
        config.num_tasks
    );

    let now = Instant::now();
    let counts = deck.par_for_each(
        config.num_tasks,
        k,
        |_| Frequencies::default(),
        |freq, cards| freq.add(eval_unchecked(cards).rank()),
    )?;

    let freq = counts.iter().fold(Frequencies::default(), Frequencies::merge);
    debug!(
        "Counted {} hands in {:.3}s",
        freq.total(),
        now.elapsed().as_secs_f64()
    );

    Ok(freq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ace_cards::{Card, Rank, Suit};

    fn check_counts(freq: &Frequencies, expected: &[(HandRank, u64)]) {
        for &(rank, count) in expected {
            assert_eq!(freq[rank], count, "{rank}");
        }

        let total = expected.iter().map(|(_, c)| c).sum::<u64>();
        assert_eq!(freq.total(), total);
    }

    #[test]
    fn five_cards_frequencies() {
        use HandRank::*;

        let freq = check_accuracy_5(&Deck::default()).unwrap();
        check_counts(
            &freq,
            &[
                (StraightFlush, 40),
                (FourOfAKind, 624),
                (FullHouse, 3_744),
                (Flush, 5_108),
                (Straight, 10_200),
                (ThreeOfAKind, 54_912),
                (TwoPair, 123_552),
                (OnePair, 1_098_240),
                (HighCard, 1_302_540),
            ],
        );

        let ranks = freq.iter().map(|(r, _)| r).collect::<Vec<_>>();
        assert_eq!(ranks, HandRank::ranks().collect::<Vec<_>>());

        // The split between tasks doesn't change the counts.
        let config = Config::default().with_tasks(3);
        assert_eq!(check_accuracy_5_with(&config, &Deck::default()).unwrap(), freq);

        let config = config.with_tasks(0);
        assert!(matches!(
            check_accuracy_5_with(&config, &Deck::default()),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn single_suit_deck() {
        let cards = Rank::ranks().map(|r| Card::new(r, Suit::Spades)).collect();
        let deck = Deck::from_cards(cards).unwrap();

        let config = Config::default().with_tasks(3);
        let freq = check_accuracy_with(&config, &deck).unwrap();
        assert_eq!(freq.total(), 1_716);
        assert_eq!(
            freq[HandRank::Flush] + freq[HandRank::StraightFlush],
            1_716
        );
        assert!(freq[HandRank::StraightFlush] > 0);
    }

    #[test]
    fn frequency_errors() {
        let deck = Deck::from_cards(Deck::default().cards()[..6].to_vec()).unwrap();
        assert_eq!(
            check_accuracy(&deck),
            Err(Error::InsufficientDeck {
                needed: 7,
                available: 6
            })
        );

        let config = Config::default().with_tasks(0);
        assert!(matches!(
            check_accuracy_with(&config, &Deck::default()),
            Err(Error::InvalidParameter(_))
        ));
    }

    // This takes a while to run in debug mode as it evaluates 133M hands.
    #[test]
    #[ignore]
    fn seven_cards_frequencies() {
        use HandRank::*;

        let freq = check_accuracy(&Deck::default()).unwrap();
        check_counts(
            &freq,
            &[
                (StraightFlush, 41_584),
                (FourOfAKind, 224_848),
                (FullHouse, 3_473_184),
                (Flush, 4_047_644),
                (Straight, 6_180_020),
                (ThreeOfAKind, 6_461_620),
                (TwoPair, 31_433_400),
                (OnePair, 58_627_800),
                (HighCard, 23_294_460),
            ],
        );
        assert_eq!(freq.total(), 133_784_560);
    }
}
