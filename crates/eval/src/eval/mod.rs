// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator follows the [Cactus Kev's][kevlink] poker evaluator to
//! evaluate 5 cards poker hands with lookup tables built on first use, 6 and 7
//! cards hands are evaluated by taking the best of their 5 cards subsets.
//!
//! It provides an [evaluate_best] function that computes a hand value without
//! extracting the best hand out of a 7 cards hand, useful for computing odds
//! and other stats, and a slightly slower [HandValue::eval_with_best_hand] that
//! computes the hand value and returns the five best cards, useful for UIs to
//! shows a winning hand.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
use std::ops::RangeInclusive;

use ace_cards::{Card, Error, Result};

mod tables;
use tables::tables;

mod value;
pub use value::{HandRank, HandValue};

/// Creates the positions of all 5 cards subsets of n cards.
const fn five_card_subsets<const M: usize>(n: u32) -> [[usize; 5]; M] {
    let mut out = [[0usize; 5]; M];
    let mut idx = 0;
    let mut mask = 0u32;

    while mask < (1 << n) {
        if mask.count_ones() == 5 {
            let mut pos = 0;
            let mut bit = 0;
            while bit < n {
                if mask & (1 << bit) != 0 {
                    out[idx][pos] = bit as usize;
                    pos += 1;
                }
                bit += 1;
            }

            idx += 1;
        }

        mask += 1;
    }

    out
}

const SUBSETS_5: [[usize; 5]; 1] = five_card_subsets::<1>(5);
const SUBSETS_6: [[usize; 5]; 6] = five_card_subsets::<6>(6);
const SUBSETS_7: [[usize; 5]; 21] = five_card_subsets::<21>(7);

/// The 5 cards subsets for a hand of n cards.
#[inline]
fn subsets(n: usize) -> &'static [[usize; 5]] {
    match n {
        5 => &SUBSETS_5,
        6 => &SUBSETS_6,
        _ => &SUBSETS_7,
    }
}

/// Checks a hand size is in range and that it has no repeated cards.
pub(crate) fn check_hand(cards: &[Card], sizes: RangeInclusive<usize>) -> Result<()> {
    if !sizes.contains(&cards.len()) {
        return Err(Error::InvalidHandSize(cards.len()));
    }

    let mut seen = 0u64;
    for c in cards {
        let bit = 1u64 << c.id();
        if seen & bit != 0 {
            return Err(Error::DuplicateCard(*c));
        }
        seen |= bit;
    }

    Ok(())
}

/// Evaluates a 5 cards hand.
///
/// Fails if the hand doesn't have exactly 5 cards or has a repeated card.
pub fn evaluate(cards: &[Card]) -> Result<HandValue> {
    check_hand(cards, 5..=5)?;
    Ok(eval_unchecked(cards))
}

/// Evaluates a 5, 6, or 7 cards hand returning the value of the best 5 cards.
///
/// The value doesn't depend on the order of the cards.
pub fn evaluate_best(cards: &[Card]) -> Result<HandValue> {
    HandValue::eval(cards)
}

/// Returns the category of a hand value.
#[inline]
pub fn category_of(value: HandValue) -> HandRank {
    value.rank()
}

/// Evaluates 5 to 7 distinct cards.
#[inline]
pub(crate) fn eval_unchecked(cards: &[Card]) -> HandValue {
    let t = tables();

    let mut bits = [0u32; 7];
    for (b, c) in bits.iter_mut().zip(cards) {
        *b = c.bits();
    }

    let best = subsets(cards.len())
        .iter()
        .map(|s| t.eval5([bits[s[0]], bits[s[1]], bits[s[2]], bits[s[3]], bits[s[4]]]))
        .max()
        .unwrap_or_default();

    HandValue::new(best)
}

/// Evaluates 5 to 7 distinct cards returning the best 5 cards.
pub(crate) fn eval_best_hand_unchecked(cards: &[Card]) -> (HandValue, [Card; 5]) {
    let t = tables();

    let mut best = 0;
    let mut hand = [cards[0]; 5];
    for s in subsets(cards.len()) {
        let sub = s.map(|pos| cards[pos]);
        let v = t.eval5(sub.map(|c| c.bits()));
        if v > best {
            best = v;
            hand = sub;
        }
    }

    (HandValue::new(best), hand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ace_cards::{Deck, Rank, Suit};
    use rand::prelude::*;

    fn cards(s: &str) -> Vec<Card> {
        s.as_bytes()
            .chunks(2)
            .map(|c| {
                let rank = match c[0] {
                    b'2'..=b'9' => Rank::from_index(c[0] - b'2'),
                    b'T' => Rank::Ten,
                    b'J' => Rank::Jack,
                    b'Q' => Rank::Queen,
                    b'K' => Rank::King,
                    b'A' => Rank::Ace,
                    _ => panic!("invalid rank {}", c[0] as char),
                };

                let suit = match c[1] {
                    b'h' => Suit::Hearts,
                    b'c' => Suit::Clubs,
                    b'd' => Suit::Diamonds,
                    b's' => Suit::Spades,
                    _ => panic!("invalid suit {}", c[1] as char),
                };

                Card::new(rank, suit)
            })
            .collect()
    }

    fn eval(s: &str) -> HandValue {
        evaluate_best(&cards(s)).unwrap()
    }

    /// Reference classification with rank counts, returns the category and
    /// the tie break ranks.
    fn reference(hand: &[Card]) -> (HandRank, Vec<u8>) {
        let mut counts = [0u8; 13];
        for c in hand {
            counts[c.rank() as usize] += 1;
        }

        let is_flush = hand.iter().all(|c| c.suit() == hand[0].suit());

        // Ranks sorted by count and then by rank.
        let mut groups = (0..13u8)
            .filter(|&r| counts[r as usize] > 0)
            .map(|r| (counts[r as usize], r))
            .collect::<Vec<_>>();
        groups.sort_unstable_by(|a, b| b.cmp(a));
        let ranks = groups.iter().map(|&(_, r)| r).collect::<Vec<_>>();

        let straight_high = if groups.len() == 5 {
            if ranks[0] - ranks[4] == 4 {
                Some(ranks[0])
            } else if ranks == [12, 3, 2, 1, 0] {
                Some(3)
            } else {
                None
            }
        } else {
            None
        };

        let shape = groups.iter().map(|&(n, _)| n).collect::<Vec<_>>();
        match (straight_high, is_flush, shape.as_slice()) {
            (Some(h), true, _) => (HandRank::StraightFlush, vec![h]),
            (_, _, [4, 1]) => (HandRank::FourOfAKind, ranks),
            (_, _, [3, 2]) => (HandRank::FullHouse, ranks),
            (_, true, _) => (HandRank::Flush, ranks),
            (Some(h), false, _) => (HandRank::Straight, vec![h]),
            (_, _, [3, 1, 1]) => (HandRank::ThreeOfAKind, ranks),
            (_, _, [2, 2, 1]) => (HandRank::TwoPair, ranks),
            (_, _, [2, 1, 1, 1]) => (HandRank::OnePair, ranks),
            _ => (HandRank::HighCard, ranks),
        }
    }

    #[test]
    fn hand_categories() {
        assert_eq!(eval("AhKhQhJhTh").rank(), HandRank::StraightFlush);
        assert_eq!(eval("5d4d3d2dAd").rank(), HandRank::StraightFlush);
        assert_eq!(eval("9c9h9d9s2c").rank(), HandRank::FourOfAKind);
        assert_eq!(eval("9c9h9d2s2c").rank(), HandRank::FullHouse);
        assert_eq!(eval("Ah9h7h4h2h").rank(), HandRank::Flush);
        assert_eq!(eval("6c5h4d3s2c").rank(), HandRank::Straight);
        assert_eq!(eval("5c4h3d2sAc").rank(), HandRank::Straight);
        assert_eq!(eval("7c7h7d3s2c").rank(), HandRank::ThreeOfAKind);
        assert_eq!(eval("7c7h3d3s2c").rank(), HandRank::TwoPair);
        assert_eq!(eval("7c7h4d3s2c").rank(), HandRank::OnePair);
        assert_eq!(eval("Kc7h4d3s2c").rank(), HandRank::HighCard);

        // Not a straight around the ace.
        assert_eq!(eval("4c3h2dAsKc").rank(), HandRank::HighCard);
    }

    #[test]
    fn hand_ordering() {
        // Across categories.
        assert!(eval("6c5c4c3c2c") > eval("AhAcAdAsKc"));
        assert!(eval("2h2c2d2s3c") > eval("AhAcAdKsKc"));
        assert!(eval("2h2c2d3s3c") > eval("AhKhQhJh9h"));
        assert!(eval("7h5h4h3h2h") > eval("AhKcQdJsTc"));
        assert!(eval("5c4h3d2sAc") > eval("AhAcAdKsQc"));
        assert!(eval("2h2c2d4s3c") > eval("AhAcKdKsQc"));
        assert!(eval("3h3c2d2s4c") > eval("AhAcKdQsJc"));
        assert!(eval("2h2c5d4s3c") > eval("AhKcQdJs9c"));

        // Wheel is the lowest straight.
        assert!(eval("6c5h4d3s2c") > eval("5c4h3d2sAc"));
        assert!(eval("6c5c4c3c2c") > eval("5c4c3c2cAc"));

        // Kickers.
        assert!(eval("AhAcKdQsJc") > eval("AhAcKdQs9c"));
        assert!(eval("KhKcQdQs2c") > eval("KhKcJdJsAc"));
        assert!(eval("KhKcQdQs3c") > eval("KhKcQdQs2c"));
        assert!(eval("AhAcAdKsKc") > eval("AhAcAdQsQc"));
        assert!(eval("KhKcKdAsAc") < eval("AhAcAd2s2c"));

        // Exact ties.
        assert_eq!(eval("AhKcQdJs9c"), eval("AsKdQcJh9h"));
        assert_eq!(eval("AhAcKdKsQc"), eval("AdAsKhKcQh"));
    }

    #[test]
    fn hand_kickers() {
        use Rank::*;
        assert_eq!(eval("KhKcKd7s7c").kickers(), &[King, Seven]);
        assert_eq!(eval("7hKcKd4s2c").kickers(), &[King, Seven, Four, Deuce]);
        assert_eq!(eval("7h7cKdKs2c").kickers(), &[King, Seven, Deuce]);
        assert_eq!(eval("5c4h3d2sAc").kickers(), &[Five]);
        assert_eq!(eval("Ah9h7h4h2h").kickers(), &[Ace, Nine, Seven, Four, Deuce]);
        assert_eq!(eval("KhKcKd7s7c").to_string(), "Full House K,7");
    }

    #[test]
    fn hand_seven_cards() {
        // Best five of seven.
        assert_eq!(eval("AhKhQhJhTh2c3d").rank(), HandRank::StraightFlush);
        assert_eq!(eval("AhAcAdKsKcKd2c"), eval("AhAcAdKsKc"));
        assert_eq!(eval("9h8c7d6s5c4d3h").kickers(), &[Rank::Nine]);
        assert_eq!(eval("AhKh2h3h4h5c6c").rank(), HandRank::Flush);
        assert_eq!(
            eval("AhAcKdKsQcQd2h").kickers(),
            &[Rank::Ace, Rank::King, Rank::Queen]
        );

        // Six cards.
        assert_eq!(eval("AhAcKdKs2c2d").rank(), HandRank::TwoPair);
        assert_eq!(eval("7h7c7d7s2c2d").rank(), HandRank::FourOfAKind);
    }

    #[test]
    fn hand_errors() {
        let c = cards("AhKhQhJhTh9h8h7h");
        assert_eq!(evaluate_best(&c[..4]), Err(Error::InvalidHandSize(4)));
        assert_eq!(evaluate_best(&c[..8]), Err(Error::InvalidHandSize(8)));
        assert_eq!(evaluate(&c[..6]), Err(Error::InvalidHandSize(6)));
        assert!(evaluate(&c[..5]).is_ok());

        let dup = cards("AhKhQhJhAh");
        assert_eq!(evaluate_best(&dup), Err(Error::DuplicateCard(dup[0])));
    }

    #[test]
    fn best_hand() {
        let c = cards("2c3dAhKhQhJhTh");
        let (v, best) = HandValue::eval_with_best_hand(&c).unwrap();
        assert_eq!(v.rank(), HandRank::StraightFlush);
        assert_eq!(best.to_vec(), c[2..].to_vec());
        assert_eq!(evaluate(&best).unwrap(), v);
    }

    #[test]
    fn all_five_cards_match_reference() {
        let mut values = ahash::AHashSet::default();
        let mut by_class = ahash::AHashMap::default();

        Deck::default().for_each(5, |hand| {
            let v = eval_unchecked(hand);
            let (rank, kickers) = reference(hand);
            assert_eq!(category_of(v), rank, "{hand:?}");

            // The same class always gets the same value.
            let prev = by_class.insert((rank, kickers), v);
            assert!(prev.is_none_or(|p| p == v), "{hand:?}");
            values.insert(v);
        })
        .unwrap();

        assert_eq!(values.len(), HandValue::NUM_VALUES);
        assert_eq!(by_class.len(), HandValue::NUM_VALUES);

        // The values order matches the reference order.
        let mut classes = by_class.into_iter().collect::<Vec<_>>();
        classes.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        assert!(classes.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn seven_cards_best_of_subsets() {
        let mut rng = SmallRng::seed_from_u64(101);
        let deck = Deck::default();

        for _ in 0..20_000 {
            let hand = deck
                .cards()
                .choose_multiple(&mut rng, 7)
                .copied()
                .collect::<Vec<_>>();

            // Brute force with the reference classifier.
            let mut best_value = None;
            let mut best_class = None;
            for i in 0..7 {
                for j in (i + 1)..7 {
                    let sub = (0..7)
                        .filter(|&p| p != i && p != j)
                        .map(|p| hand[p])
                        .collect::<Vec<_>>();

                    let v = evaluate(&sub).unwrap();
                    best_value = best_value.max(Some(v));
                    best_class = best_class.max(Some(reference(&sub)));
                }
            }

            let v = evaluate_best(&hand).unwrap();
            assert_eq!(Some(v), best_value);
            let kickers = v.kickers().iter().map(|&r| r as u8).collect::<Vec<_>>();
            assert_eq!(Some((v.rank(), kickers)), best_class);
        }
    }

    #[test]
    fn order_invariant() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::new_and_shuffled(&mut rng);

        for _ in 0..1_000 {
            if deck.count() < 7 {
                deck = Deck::new_and_shuffled(&mut rng);
            }

            let mut hand = (0..7).filter_map(|_| deck.deal().ok()).collect::<Vec<_>>();
            let v = evaluate_best(&hand).unwrap();
            for _ in 0..5 {
                hand.shuffle(&mut rng);
                assert_eq!(evaluate_best(&hand).unwrap(), v);
            }
        }
    }
}
