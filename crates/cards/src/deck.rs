// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

mod parallel;
use parallel::MAX_K;
pub use parallel::nck;

/// Primes used to encode a card rank.
const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Number of ranks in a suit.
const NUM_RANKS: u8 = 13;

/// Creates the bit patterns for all cards indexed by card id.
const fn make_bits() -> [u32; 52] {
    let mut t = [0u32; 52];
    let mut id = 0;

    while id < 52 {
        let rank = (id % NUM_RANKS as usize) as u32;
        let suit_bit: u32 = match id / NUM_RANKS as usize {
            0 => 0x2, // hearts
            1 => 0x8, // clubs
            2 => 0x4, // diamonds
            _ => 0x1, // spades
        };

        t[id] = PRIMES[rank as usize] | (rank << 8) | (suit_bit << 12) | (1 << (rank + 16));
        id += 1;
    }

    t
}

const CARD_BITS: [u32; 52] = make_bits();

/// A Poker card.
///
/// A card is an integer in `0..52` with `id = suit * 13 + rank`, ranks go from
/// deuce (0) to ace (12) and suits are ordered hearts, clubs, diamonds, spades.
///
/// For evaluation each card id maps to the encoding in the [Cactus Kev's][kevlink]
/// Poker hand evaluator with the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * NUM_RANKS + rank as u8)
    }

    /// Create a card from its integer id.
    pub fn from_index(id: u8) -> Result<Card> {
        if id < Deck::SIZE as u8 {
            Ok(Self(id))
        } else {
            Err(Error::InvalidCard(format!("id {id} out of range 0..52")))
        }
    }

    /// This card unique id in `0..52`.
    #[inline]
    pub fn id(&self) -> u8 {
        self.0
    }

    /// The Cactus Kev's bit pattern for this card.
    #[inline]
    pub fn bits(&self) -> u32 {
        CARD_BITS[self.0 as usize]
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 / NUM_RANKS {
            0 => Suit::Hearts,
            1 => Suit::Clubs,
            2 => Suit::Diamonds,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_index(self.0 % NUM_RANKS)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the rank for an index in `0..13`, values past the ace saturate.
    pub fn from_index(idx: u8) -> Rank {
        use Rank::*;
        match idx {
            0 => Deuce,
            1 => Trey,
            2 => Four,
            3 => Five,
            4 => Six,
            5 => Seven,
            6 => Eight,
            7 => Nine,
            8 => Ten,
            9 => Jack,
            10 => Queen,
            11 => King,
            _ => Ace,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Clubs suit.
    Clubs = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Spades suit.
    Spades = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits in deck order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades].into_iter()
    }
}

/// A player two hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([Card; 2]);

impl Hand {
    /// Creates a hand, fails if the two cards are the same.
    pub fn new(c1: Card, c2: Card) -> Result<Self> {
        if c1 == c2 {
            Err(Error::DuplicateCard(c1))
        } else {
            Ok(Self([c1, c2]))
        }
    }

    /// The hand cards.
    #[inline]
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

/// A cards Deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck from a list of cards, fails if a card is repeated.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        let mut seen = 0u64;
        for c in &cards {
            let bit = 1u64 << c.id();
            if seen & bit != 0 {
                return Err(Error::DuplicateCard(*c));
            }
            seen |= bit;
        }

        Ok(Self { cards })
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(Error::InsufficientDeck {
            needed: 1,
            available: 0,
        })
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The deck cards in order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns a copy of this deck without the given cards.
    ///
    /// Fails if any of the cards is not in the deck.
    pub fn remove(&self, cards: &[Card]) -> Result<Deck> {
        let mut removed = 0u64;
        for c in cards {
            if !self.contains(*c) || removed & (1u64 << c.id()) != 0 {
                return Err(Error::InvalidCard(c.to_string()));
            }
            removed |= 1u64 << c.id();
        }

        let cards = self
            .cards
            .iter()
            .filter(|c| removed & (1u64 << c.id()) == 0)
            .copied()
            .collect();

        Ok(Self { cards })
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// With k = 0 the closure is called once with an empty slice, if k is
    /// greater than the number of cards in the deck it is never called.
    ///
    /// Fails with [Error::InvalidParameter] if k > 7.
    pub fn for_each<F>(&self, k: usize, mut f: F) -> Result<()>
    where
        F: FnMut(&[Card]),
    {
        if k > MAX_K {
            return Err(Error::InvalidParameter(format!(
                "k={k} must be 0 <= k <= {MAX_K}"
            )));
        }

        let n = self.cards.len();
        let mut h = [Card(0); MAX_K];

        parallel::for_each_ksubset(n, k, 0, nck(n, k), |p| {
            for (idx, &pos) in p.iter().enumerate() {
                h[idx] = self.cards[pos];
            }

            f(&h[0..k]);
        });

        Ok(())
    }
}

/// Builds a 52 cards deck in card id order.
pub fn build_deck() -> Deck {
    Deck::default()
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
