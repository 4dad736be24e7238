// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ace Poker hand evaluator and equity calculator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands based on the
//! [Cactus Kev's][kevlink] lookup tables, and two equity engines that use it:
//! [matchup] enumerates all the boards for an exact result and [sim_matchup]
//! samples random boards and opponents for an estimate.
//!
//! To evaluate a hand use [HandValue] or [evaluate_best]:
//!
//! ```
//! # use ace_eval::*;
//! // 2H, 3H, .., JH
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = evaluate_best(&cards[3..10]).unwrap();
//! assert!(v2 > v1);
//! assert_eq!(v2.rank(), HandRank::StraightFlush);
//! ```
//!
//! To compute the equity of two hands on a flop remove the known cards from
//! the deck and call [matchup]:
//!
//! ```
//! # use ace_eval::*;
//! let aces = Hand::new(
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! )?;
//! let kings = Hand::new(
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::King, Suit::Hearts),
//! )?;
//! let board = [
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Seven, Suit::Spades),
//!     Card::new(Rank::Seven, Suit::Hearts),
//! ];
//!
//! let mut known = [aces.cards(), kings.cards()].concat();
//! known.extend_from_slice(&board);
//! let deck = build_deck().remove(&known)?;
//!
//! let result = matchup(&[aces, kings], &deck, &board)?;
//! assert!(result.wins[1] > 0.85);
//! # Ok::<(), ace_eval::Error>(())
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod config;
pub use config::Config;

pub mod equity;
pub use equity::{MatchupResult, matchup, matchup_with, sim_matchup, sim_matchup_with};

pub mod eval;
pub use eval::{HandRank, HandValue, category_of, evaluate, evaluate_best};

pub mod frequency;
pub use frequency::{
    Frequencies, check_accuracy, check_accuracy_5, check_accuracy_5_with, check_accuracy_with,
};

// Reexport cards types.
pub use ace_cards::{Card, Deck, Error, Hand, Rank, Result, Suit, build_deck};
