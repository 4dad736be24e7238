// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration and sampling.
use rand::prelude::*;
use std::{panic, thread};

use super::{Card, Deck};
use crate::{Error, Result};

/// Largest subset size for enumeration.
pub(super) const MAX_K: usize = 7;

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; 8]; 52] {
    let mut t = [[0u32; 8]; 52];
    let mut n = 0;

    while n < 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 && k <= n + 1 {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            let n_1 = n.saturating_sub(1);
            let k_1 = k.saturating_sub(1);
            t[n][k] = t[n_1][k_1] + t[n_1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 8]; 52] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Uses a lookup table for n <= 52 and k <= 7, larger values saturate at
/// `usize::MAX`.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    if k == 0 {
        1
    } else if n < k {
        0
    } else if n <= 52 && k <= 7 {
        NCKS[n - 1][k] as usize
    } else {
        let k = k.min(n - k);
        (0..k)
            .try_fold(1u128, |acc, i| {
                acc.checked_mul((n - i) as u128).map(|v| v / (i as u128 + 1))
            })
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(usize::MAX)
    }
}

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
fn nth_ksubset(mut n: usize, k: usize) -> [usize; 7] {
    assert!(k <= 7);

    let mut out = [0; 7];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(nck(c, k + 1));
    }

    out
}

/// Calls the given closure for count k-subsets of n positions starting from
/// the nth ksubset in colex order.
pub(super) fn for_each_ksubset<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if count == 0 || nth >= nck(n, k) {
        return;
    }

    // Algorithm L from TAOCP 4a
    let mut c = vec![0usize; k + 3];

    let ks = nth_ksubset(nth, k);
    c[1..=k].copy_from_slice(&ks[..k]);
    c[k + 1] = n;

    let mut counter = 1;
    loop {
        f(&c[1..=k]);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// Joins a scoped task, resuming its panic on the calling thread.
fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle.join().unwrap_or_else(|e| panic::resume_unwind(e))
}

/// Number of samples drawn from one random generator.
const SAMPLE_BLOCK: usize = 1024;

/// Derives the seed for a block of samples from the run seed.
#[inline]
fn block_seed(seed: u64, block: usize) -> u64 {
    seed ^ (block as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Checks the arguments shared by the parallel functions.
fn check_args(num_tasks: usize, k: usize) -> Result<()> {
    if num_tasks == 0 {
        return Err(Error::InvalidParameter(
            "num_tasks must be greater than 0".to_string(),
        ));
    }

    if k > MAX_K {
        return Err(Error::InvalidParameter(format!(
            "k={k} must be 0 <= k <= {MAX_K}"
        )));
    }

    Ok(())
}

impl Deck {
    /// Parallel for each, folds each k-cards hand into a per task state.
    ///
    /// The `init` closure creates the state for a task given the task
    /// identifier (0..num_tasks), the `f` closure is called with the task state
    /// and a slice of cards of length k. Returns the tasks states in task order,
    /// the hands are split so that each hand is visited by exactly one task.
    ///
    /// Fails with [Error::InvalidParameter] if k > 7 or num_tasks is 0.
    pub fn par_for_each<T, I, F>(
        &self,
        num_tasks: usize,
        k: usize,
        init: I,
        f: F,
    ) -> Result<Vec<T>>
    where
        T: Send,
        I: Fn(usize) -> T + Send + Sync,
        F: Fn(&mut T, &[Card]) + Send + Sync,
    {
        check_args(num_tasks, k)?;

        let n = self.cards.len();
        let num_hands = nck(n, k);
        let hands_per_task = num_hands.div_ceil(num_tasks);

        let states = thread::scope(|s| {
            let handles = (0..num_tasks)
                .map(|task_id| {
                    let start = task_id * hands_per_task;
                    let count = hands_per_task.min(num_hands.saturating_sub(start));
                    let (init, f) = (&init, &f);
                    s.spawn(move || {
                        let mut state = init(task_id);
                        let mut h = [Card(0); MAX_K];
                        for_each_ksubset(n, k, start, count, |p| {
                            for (idx, &pos) in p.iter().enumerate() {
                                h[idx] = self.cards[pos];
                            }

                            f(&mut state, &h[..k]);
                        });

                        state
                    })
                })
                .collect::<Vec<_>>();

            handles.into_iter().map(join).collect()
        });

        Ok(states)
    }

    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `num_samples` samples of size k in total.
    ///
    /// Each sample is an ordered draw of k cards without replacement from the
    /// full deck, samples are independent of each other. The samples are
    /// generated in blocks, each block with its own random generator derived
    /// from `seed`, and whole blocks are assigned to tasks in order. Runs with
    /// the same seed produce the same samples whatever the number of tasks,
    /// concatenating the samples seen by each task in task order gives the
    /// same sequence. Returns the tasks states in task order.
    ///
    /// Fails with [Error::InvalidParameter] if num_tasks is 0 and with
    /// [Error::InsufficientDeck] if k is greater than the number of cards.
    pub fn par_sample<T, I, F>(
        &self,
        num_tasks: usize,
        num_samples: usize,
        k: usize,
        seed: u64,
        init: I,
        f: F,
    ) -> Result<Vec<T>>
    where
        T: Send,
        I: Fn(usize) -> T + Send + Sync,
        F: Fn(&mut T, &[Card]) + Send + Sync,
    {
        check_args(num_tasks, 0)?;

        if k > self.cards.len() {
            return Err(Error::InsufficientDeck {
                needed: k,
                available: self.cards.len(),
            });
        }

        let num_blocks = num_samples.div_ceil(SAMPLE_BLOCK);
        let blocks_per_task = num_blocks.div_ceil(num_tasks);

        let states = thread::scope(|s| {
            let handles = (0..num_tasks)
                .map(|task_id| {
                    let first = (task_id * blocks_per_task).min(num_blocks);
                    let last = (first + blocks_per_task).min(num_blocks);
                    let (init, f) = (&init, &f);
                    s.spawn(move || {
                        let mut state = init(task_id);

                        for block in first..last {
                            let start = block * SAMPLE_BLOCK;
                            let count = SAMPLE_BLOCK.min(num_samples - start);

                            let mut rng = SmallRng::seed_from_u64(block_seed(seed, block));
                            let mut cards = self.cards.clone();
                            for _ in 0..count {
                                let (sample, _) = cards.partial_shuffle(&mut rng, k);
                                f(&mut state, sample);
                            }
                        }

                        state
                    })
                })
                .collect::<Vec<_>>();

            handles.into_iter().map(join).collect()
        });

        Ok(states)
    }
}
