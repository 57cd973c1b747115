//! Logging facilities.
//!
//! Messages are written through the `log` facade with `simulation` target, prefixed by the number of flips
//! performed so far and a colored level tag.

use atty::Stream;
use colored::{Color, ColoredString, Colorize};
use log::{debug, info, trace};
use serde_json::json;

use crate::config::SimulationConfig;
use crate::outcome::Outcome;
use crate::stats::FlipStats;

/// Applies the color to the string if stderr (log) goes to console.
pub fn get_colored(s: &str, color: Color) -> ColoredString {
    if atty::is(Stream::Stderr) {
        s.color(color)
    } else {
        s.normal()
    }
}

/// Builds the message prefix, padding the level tag to five columns.
fn header(time: u64, tag: &str, color: Color) -> String {
    let padding = if tag.len() < 5 { "  " } else { " " };
    format!("[{} {}{}simulation]", time, get_colored(tag, color), padding)
}

pub(crate) fn log_simulation_created(config: &SimulationConfig) {
    debug!(
        target: "simulation",
        "{} Created simulation: {}",
        header(0, "DEBUG", Color::Blue),
        json!(config)
    );
}

pub(crate) fn log_flip(time: u64, draw: u32, outcome: Outcome, seed: u32) {
    trace!(
        target: "simulation",
        "{} {}",
        header(time, "FLIP", Color::BrightBlack),
        json!({"draw": draw, "outcome": outcome, "seed": seed})
    );
}

pub(crate) fn log_simulation_finished(time: u64, stats: &FlipStats) {
    info!(
        target: "simulation",
        "{} Finished: {}",
        header(time, "INFO", Color::Green),
        json!(stats)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tags_are_aligned() {
        colored::control::set_override(false);
        assert_eq!(header(0, "DEBUG", Color::Blue), "[0 DEBUG simulation]");
        assert_eq!(header(7, "FLIP", Color::BrightBlack), "[7 FLIP  simulation]");
        assert_eq!(header(25000, "INFO", Color::Green), "[25000 INFO  simulation]");
    }
}
