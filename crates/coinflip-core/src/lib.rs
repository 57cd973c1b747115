#![warn(missing_docs)]
#![doc = include_str!("../readme.md")]

pub mod config;
pub mod lcg;
pub mod log;
pub mod outcome;
pub mod simulation;
pub mod stats;

pub use config::SimulationConfig;
pub use lcg::Lcg;
pub use outcome::Outcome;
pub use simulation::Simulation;
pub use stats::FlipStats;
