//! Outcome counters.

use std::fmt;

use serde::Serialize;

use crate::outcome::Outcome;

/// Heads and tails tallies of a simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FlipStats {
    /// Number of heads.
    pub heads: u64,
    /// Number of tails.
    pub tails: u64,
}

impl FlipStats {
    /// Counts a single outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Heads => self.heads += 1,
            Outcome::Tails => self.tails += 1,
        }
    }

    /// Returns the number of recorded flips.
    pub fn total(&self) -> u64 {
        self.heads + self.tails
    }
}

/// Renders the three-line report, without trailing newline.
///
/// # Examples
///
/// ```rust
/// use coinflip_core::FlipStats;
///
/// let stats = FlipStats { heads: 2, tails: 1 };
/// assert_eq!(stats.to_string(), "Total Flips: 3\nHeads: 2\nTails: 1");
/// ```
impl fmt::Display for FlipStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Flips: {}", self.total())?;
        writeln!(f, "Heads: {}", self.heads)?;
        write!(f, "Tails: {}", self.tails)
    }
}
