//! Configuration for an oracle session.

use std::time::Duration;

/// Cosmetic delays the presentation layer waits out.
///
/// The core never sleeps; these are carried so every shell paces the
/// experience the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Time for a tin lid to peel back after it is chosen.
    pub open_delay: Duration,
    /// Time the fish "consults" before a fortune resolves.
    pub consult_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            open_delay: Duration::from_millis(800),
            consult_delay: Duration::from_millis(1200),
        }
    }
}

impl Timings {
    /// Timings with no delays at all.
    pub fn instant() -> Self {
        Self {
            open_delay: Duration::ZERO,
            consult_delay: Duration::ZERO,
        }
    }
}

/// Configuration for an oracle session.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// RNG seed for reproducible draws.
    pub seed: u64,
    /// Presentation pacing.
    pub timings: Timings,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            timings: Timings::default(),
        }
    }
}

impl OracleConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the presentation timings.
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Drop all cosmetic delays.
    pub fn instant(self) -> Self {
        self.with_timings(Timings::instant())
    }
}
