// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values and ranks.
use serde::{Deserialize, Serialize};
use std::fmt;

use ace_cards::{Card, Rank, Result};

use super::{check_hand, tables};

/// The category of a poker hand.
///
/// The discriminant is the category number, slot 8 is reserved so that a
/// straight flush is 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair = 1,
    /// Two pairs.
    TwoPair = 2,
    /// Three of a kind.
    ThreeOfAKind = 3,
    /// Straight.
    Straight = 4,
    /// Flush.
    Flush = 5,
    /// Full house.
    FullHouse = 6,
    /// Four of a kind.
    FourOfAKind = 7,
    /// Straight flush.
    StraightFlush = 9,
}

impl HandRank {
    /// Number of category slots, including the reserved one.
    pub const SLOTS: usize = 10;

    /// Returns all ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    fn from_category(category: u32) -> HandRank {
        use HandRank::*;
        match category {
            0 => HighCard,
            1 => OnePair,
            2 => TwoPair,
            3 => ThreeOfAKind,
            4 => Straight,
            5 => Flush,
            6 => FullHouse,
            7 => FourOfAKind,
            _ => StraightFlush,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a poker hand, a greater value is a stronger hand.
///
/// The value has the category in the top 4 bits and the hand strength
/// ordinal in the low bits, the ordinal goes from 1 (7-5-4-3-2 offsuit) to
/// 7462 (royal flush) across all categories so that two values can be
/// compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue(u32);

impl HandValue {
    /// Bits used by the category.
    pub(crate) const CATEGORY_SHIFT: u32 = 28;

    /// Number of distinct 5 cards hands values.
    pub const NUM_VALUES: usize = 7462;

    pub(crate) fn new(value: u32) -> Self {
        Self(value)
    }

    /// Evaluates a 5, 6, or 7 cards hand.
    ///
    /// Fails if the hand has the wrong number of cards or a repeated card.
    pub fn eval(cards: &[Card]) -> Result<Self> {
        check_hand(cards, 5..=7)?;
        Ok(super::eval_unchecked(cards))
    }

    /// Evaluates a 5, 6, or 7 cards hand and returns the five cards that make
    /// the best hand.
    pub fn eval_with_best_hand(cards: &[Card]) -> Result<(Self, [Card; 5])> {
        check_hand(cards, 5..=7)?;
        Ok(super::eval_best_hand_unchecked(cards))
    }

    /// The hand category.
    #[inline]
    pub fn rank(&self) -> HandRank {
        HandRank::from_category(self.0 >> Self::CATEGORY_SHIFT)
    }

    /// The raw value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The strength ordinal in `1..=7462`.
    #[inline]
    pub fn ordinal(&self) -> u32 {
        self.0 & ((1 << Self::CATEGORY_SHIFT) - 1)
    }

    /// The ranks that decide this hand value, most significant first.
    ///
    /// For example a full house returns the three of a kind rank followed by
    /// the pair rank, a pair returns the pair rank followed by the kickers, a
    /// straight returns its top rank (a five for the wheel).
    pub fn kickers(&self) -> &'static [Rank] {
        tables().kickers(self.ordinal())
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())?;
        for (idx, rank) in self.kickers().iter().enumerate() {
            let sep = if idx == 0 { " " } else { "," };
            write!(f, "{sep}{rank}")?;
        }

        Ok(())
    }
}
