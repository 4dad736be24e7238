// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator lookup tables.
//!
//! The tables are built once on first use by walking the 7462 distinct 5 cards
//! hands from the weakest to the strongest and assigning each one the next
//! ordinal, so the cost is proportional to the number of rank patterns and not
//! to the number of hands.
//!
//! Hands are looked up as in the [Cactus Kev's][kevlink] evaluator: flushes by
//! the 13 bits rank mask, five distinct ranks by the same mask, and hands with
//! a repeated rank by the product of the cards rank primes.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
use ahash::AHashMap;
use log::debug;
use std::sync::LazyLock;

use ace_cards::{Card, Rank, Suit};

use super::{HandRank, HandValue};

/// Number of 13 bits rank masks.
const NUM_MASKS: usize = 1 << 13;

/// Straights rank masks from the wheel to the ace high straight.
const STRAIGHTS: [u16; 10] = [
    0x100f, 0x001f, 0x003e, 0x007c, 0x00f8, 0x01f0, 0x03e0, 0x07c0, 0x0f80, 0x1f00,
];

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

/// Returns the process wide tables.
#[inline]
pub(crate) fn tables() -> &'static Tables {
    &TABLES
}

/// Lookup tables for 5 cards hands.
pub(crate) struct Tables {
    flushes: Box<[u32]>,
    unique5: Box<[u32]>,
    products: AHashMap<u32, u32>,
    kickers: Vec<Box<[Rank]>>,
}

impl Tables {
    /// Evaluates 5 cards given their bit patterns.
    #[inline]
    pub(crate) fn eval5(&self, c: [u32; 5]) -> u32 {
        let q = ((c[0] | c[1] | c[2] | c[3] | c[4]) >> 16) as usize;

        if c[0] & c[1] & c[2] & c[3] & c[4] & 0xf000 != 0 {
            return self.flushes[q];
        }

        let v = self.unique5[q];
        if v != 0 {
            return v;
        }

        let product = c.iter().map(|b| b & 0xff).product::<u32>();
        self.products.get(&product).copied().unwrap_or_default()
    }

    /// The ranks that decide the hand with the given ordinal.
    pub(crate) fn kickers(&self, ordinal: u32) -> &[Rank] {
        self.kickers
            .get(ordinal as usize)
            .map(|k| &k[..])
            .unwrap_or_default()
    }

    fn build() -> Tables {
        let mut b = Builder::default();

        let non_straights = rank_masks(5)
            .filter(|m| !STRAIGHTS.contains(m))
            .collect::<Vec<_>>();

        for &m in &non_straights {
            let v = b.next_value(HandRank::HighCard, &mask_ranks(m));
            b.unique5[m as usize] = v;
        }

        for p in 0..13 {
            for m in rank_masks(3).filter(|&m| m & (1u16 << p) == 0) {
                let mut ranks = vec![p];
                ranks.extend(mask_ranks(m));

                let v = b.next_value(HandRank::OnePair, &ranks);
                b.products.insert(prime(p).pow(2) * mask_product(m), v);
            }
        }

        for hi in 0..13 {
            for lo in 0..hi {
                for k in (0..13).filter(|&k| k != hi && k != lo) {
                    let v = b.next_value(HandRank::TwoPair, &[hi, lo, k]);
                    let product = prime(hi).pow(2) * prime(lo).pow(2) * prime(k);
                    b.products.insert(product, v);
                }
            }
        }

        for t in 0..13 {
            for m in rank_masks(2).filter(|&m| m & (1u16 << t) == 0) {
                let mut ranks = vec![t];
                ranks.extend(mask_ranks(m));

                let v = b.next_value(HandRank::ThreeOfAKind, &ranks);
                b.products.insert(prime(t).pow(3) * mask_product(m), v);
            }
        }

        for (idx, &m) in STRAIGHTS.iter().enumerate() {
            let v = b.next_value(HandRank::Straight, &[straight_high(idx)]);
            b.unique5[m as usize] = v;
        }

        for &m in &non_straights {
            let v = b.next_value(HandRank::Flush, &mask_ranks(m));
            b.flushes[m as usize] = v;
        }

        for t in 0..13 {
            for p in (0..13).filter(|&p| p != t) {
                let v = b.next_value(HandRank::FullHouse, &[t, p]);
                b.products.insert(prime(t).pow(3) * prime(p).pow(2), v);
            }
        }

        for q in 0..13 {
            for k in (0..13).filter(|&k| k != q) {
                let v = b.next_value(HandRank::FourOfAKind, &[q, k]);
                b.products.insert(prime(q).pow(4) * prime(k), v);
            }
        }

        for (idx, &m) in STRAIGHTS.iter().enumerate() {
            let v = b.next_value(HandRank::StraightFlush, &[straight_high(idx)]);
            b.flushes[m as usize] = v;
        }

        debug!("Built evaluator tables with {} hand values", b.next);
        debug_assert_eq!(b.next as usize, HandValue::NUM_VALUES);

        Tables {
            flushes: b.flushes,
            unique5: b.unique5,
            products: b.products,
            kickers: b.kickers,
        }
    }
}

/// Accumulates tables entries in increasing strength order.
struct Builder {
    next: u32,
    flushes: Box<[u32]>,
    unique5: Box<[u32]>,
    products: AHashMap<u32, u32>,
    kickers: Vec<Box<[Rank]>>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            next: 0,
            flushes: vec![0; NUM_MASKS].into_boxed_slice(),
            unique5: vec![0; NUM_MASKS].into_boxed_slice(),
            products: AHashMap::with_capacity(4888),
            // Ordinal 0 is not a hand.
            kickers: vec![Box::default()],
        }
    }
}

impl Builder {
    /// Returns the value for the next stronger hand.
    fn next_value(&mut self, rank: HandRank, ranks: &[u8]) -> u32 {
        self.next += 1;
        let ranks = ranks.iter().map(|&r| Rank::from_index(r)).collect();
        self.kickers.push(ranks);
        ((rank as u32) << HandValue::CATEGORY_SHIFT) | self.next
    }
}

/// Iterates all 13 bits masks with `count` ranks in increasing order.
fn rank_masks(count: u32) -> impl Iterator<Item = u16> {
    (0..NUM_MASKS as u16).filter(move |m| m.count_ones() == count)
}

/// The ranks in a mask from the highest.
fn mask_ranks(mask: u16) -> Vec<u8> {
    (0..13).rev().filter(|&r| mask & (1u16 << r) != 0).collect()
}

/// The product of the primes of the ranks in a mask.
fn mask_product(mask: u16) -> u32 {
    mask_ranks(mask).into_iter().map(prime).product()
}

/// The prime for a rank.
fn prime(rank: u8) -> u32 {
    Card::new(Rank::from_index(rank), Suit::Hearts).bits() & 0xff
}

/// The top rank of a straight, five for the wheel.
fn straight_high(idx: usize) -> u8 {
    if idx == 0 { 3 } else { idx as u8 + 3 }
}
