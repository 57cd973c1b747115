#![doc = include_str!("../readme.md")]

use std::time::Instant;

use log::debug;

use coinflip_core::{Simulation, SimulationConfig};

fn main() {
    env_logger::init();

    let mut sim = Simulation::new(SimulationConfig::default());

    let t = Instant::now();
    sim.step_until_done();
    debug!("Performed {} flips in {:.2?}", sim.flips_done(), t.elapsed());

    println!("{}", sim.stats());
}
