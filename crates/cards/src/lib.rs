// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ace Poker cards types.
//!
//! This crate define types to create cards, each card is an integer in `0..52`:
//!
//! ```
//! # use ace_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(ah.id(), 12);
//! assert_eq!(kd.id(), 37);
//! ```
//!
//! and a [Deck] type for removing, sampling, and iterating cards in the deck.
//! Decks are never changed in place, removing cards returns a new deck:
//!
//! ```
//! # use ace_cards::{build_deck, Card, Rank, Suit};
//! let deck = build_deck();
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let smaller = deck.remove(&[ah]).unwrap();
//! assert_eq!(smaller.count(), 51);
//! assert!(!smaller.contains(ah));
//! ```
//!
//! For example to iterate through all 7 cards hands:
//!
//! ```no_run
//! # use ace_cards::Deck;
//! // Iterate through all 7 cards hands (133M hands).
//! let mut counter = 0;
//! Deck::default().for_each(7, |hand| {
//!     counter += 1;
//! })?;
//! assert_eq!(counter, 133_784_560);
//! # Ok::<(), ace_cards::Error>(())
//! ```
//!
//! Parallel iteration splits the hands between a given number of tasks, each
//! task folds the hands into its own state and the states are returned when
//! all tasks complete, the following example uses 4 tasks to count all 5 cards
//! hands:
//!
//! ```
//! # use ace_cards::Deck;
//! let counts = Deck::default().par_for_each(4, 5, |_task_id| 0u64, |count, hand| {
//!     assert_eq!(hand.len(), 5);
//!     *count += 1;
//! })?;
//! assert_eq!(counts.iter().sum::<u64>(), 2_598_960);
//! # Ok::<(), ace_cards::Error>(())
//! ```
//!
//! for parallel sampling the following uses 4 tasks and a seed to draw 10
//! random 7-cards hands, the same seed draws the same hands for any number of
//! tasks:
//!
//! ```
//! # use ace_cards::Deck;
//! let counts = Deck::default().par_sample(4, 10, 7, 42, |_task_id| 0u64, |count, hand| {
//!     assert_eq!(hand.len(), 7);
//!     *count += 1;
//! })?;
//! assert_eq!(counts.iter().sum::<u64>(), 10);
//! # Ok::<(), ace_cards::Error>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Hand, Rank, Suit, build_deck, nck};

mod error;
pub use error::{Error, Result};
