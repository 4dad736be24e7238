// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity engines configuration.
use serde::{Deserialize, Serialize};
use std::{num::NonZeroUsize, thread};

use ace_cards::{Error, Result};

/// Configuration for the equity engines and the frequency counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of parallel tasks.
    pub num_tasks: usize,
    /// Seed for the Monte Carlo engine random generators, when `None` the
    /// seed is drawn from the thread random generator.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let num_tasks = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);

        Self {
            num_tasks,
            seed: None,
        }
    }
}

impl Config {
    /// Sets the seed for reproducible simulations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of parallel tasks.
    pub fn with_tasks(mut self, num_tasks: usize) -> Self {
        self.num_tasks = num_tasks;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.num_tasks == 0 {
            return Err(Error::InvalidParameter(
                "num_tasks must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
