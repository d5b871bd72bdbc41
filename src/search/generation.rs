// ABOUTME: Monotonic search generation counter used to discard superseded results
// ABOUTME: Every search takes a new generation; only the newest one is current
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of one search request, increasing per orchestrator
pub type Generation = u64;

/// Hands out generations and remembers the latest one
#[derive(Debug, Default)]
pub struct SearchGeneration {
    latest: AtomicU64,
}

impl SearchGeneration {
    /// Counter with no search issued yet
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Start a new search and return its generation
    pub fn next(&self) -> Generation {
        self.latest.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Most recently issued generation, 0 before the first search
    #[must_use]
    pub fn latest(&self) -> Generation {
        self.latest.load(Ordering::Acquire)
    }

    /// Whether no search was started after `generation`
    #[must_use]
    pub fn is_latest(&self, generation: Generation) -> bool {
        self.latest() == generation
    }
}
