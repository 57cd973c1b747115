//! Simulation parameters.

use serde::Serialize;

/// Number of flips performed by the default simulation.
pub const FLIP_COUNT: u64 = 25000;
/// Initial generator seed of the default simulation.
pub const SEED: u32 = 42;

/// Parameters of a coin-flip simulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimulationConfig {
    /// Number of trials to perform.
    pub flip_count: u64,
    /// Initial generator seed.
    pub seed: u32,
}

impl SimulationConfig {
    /// Creates a config with the specified number of flips and seed.
    pub fn new(flip_count: u64, seed: u32) -> Self {
        Self { flip_count, seed }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            flip_count: FLIP_COUNT,
            seed: SEED,
        }
    }
}
