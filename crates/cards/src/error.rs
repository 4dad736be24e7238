// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Errors reported by the cards, evaluator and equity types.
use crate::Card;

/// Result type for cards operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised at the boundary of a failing operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A card is not valid or not in the deck it is removed from.
    #[error("invalid card {0}")]
    InvalidCard(String),
    /// A card appears more than once in sets that must be disjoint.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// The evaluator was given a hand that is not 5, 6 or 7 cards.
    #[error("invalid hand size {0}, expected 5 to 7 cards")]
    InvalidHandSize(usize),
    /// Not enough cards left in the deck for a draw or enumeration.
    #[error("insufficient deck: {needed} cards needed, {available} available")]
    InsufficientDeck {
        /// Number of cards requested.
        needed: usize,
        /// Number of cards in the deck.
        available: usize,
    },
    /// An engine parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
