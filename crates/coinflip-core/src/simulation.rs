//! Simulation configuration and execution.

use log::Level::Trace;
use log::log_enabled;

use crate::config::SimulationConfig;
use crate::lcg::Lcg;
use crate::log::{log_flip, log_simulation_created, log_simulation_finished};
use crate::outcome::Outcome;
use crate::stats::FlipStats;

/// Represents a coin-flip simulation, provides methods for its execution.
pub struct Simulation {
    config: SimulationConfig,
    rand: Lcg,
    stats: FlipStats,
}

impl Simulation {
    /// Creates a new simulation with specified config.
    pub fn new(config: SimulationConfig) -> Self {
        log_simulation_created(&config);
        Self {
            rand: Lcg::new(config.seed),
            stats: FlipStats::default(),
            config,
        }
    }

    /// Returns the simulation config.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the number of flips performed so far.
    pub fn flips_done(&self) -> u64 {
        self.stats.total()
    }

    /// Returns `true` if all configured flips were performed.
    pub fn is_done(&self) -> bool {
        self.flips_done() >= self.config.flip_count
    }

    /// Returns the current tallies.
    pub fn stats(&self) -> FlipStats {
        self.stats
    }

    /// Performs a single flip.
    ///
    /// Draws a value in `[0, 2)` from the generator, classifies it and updates the tallies.
    ///
    /// Returns `true` if a flip was performed and `false` if the simulation is already done, in which case nothing
    /// changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coinflip_core::{Simulation, SimulationConfig};
    ///
    /// let mut sim = Simulation::new(SimulationConfig::new(1, 42));
    /// assert!(sim.step());
    /// assert_eq!(sim.stats().tails, 1);
    /// assert!(!sim.step());
    /// assert_eq!(sim.flips_done(), 1);
    /// ```
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        let draw = self.rand.next(2);
        let outcome = Outcome::from_draw(draw);
        self.stats.record(outcome);
        if log_enabled!(Trace) {
            log_flip(self.flips_done(), draw, outcome, self.rand.seed());
        }
        if self.is_done() {
            log_simulation_finished(self.flips_done(), &self.stats);
        }
        true
    }

    /// Performs the specified number of flips.
    ///
    /// This is a convenient wrapper around [`step()`](Self::step()), which invokes this method until the specified number of
    /// steps is made, or `false` is returned (no more flips to perform).
    ///
    /// Returns `true` if there could be more flips and `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coinflip_core::{Simulation, SimulationConfig};
    ///
    /// let mut sim = Simulation::new(SimulationConfig::new(3, 42));
    /// assert!(sim.steps(2));
    /// assert_eq!(sim.flips_done(), 2);
    /// assert!(!sim.steps(2));
    /// assert_eq!(sim.flips_done(), 3);
    /// ```
    pub fn steps(&mut self, step_count: u64) -> bool {
        for _ in 0..step_count {
            if !self.step() {
                return false;
            }
        }
        true
    }

    /// Flips the coin until the configured number of flips is reached.
    pub fn step_until_done(&mut self) {
        while self.step() {}
    }
}
