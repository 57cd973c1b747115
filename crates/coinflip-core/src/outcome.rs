//! Trial outcomes.

use serde::Serialize;

/// Result of a single coin flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Draw equal to zero.
    Heads,
    /// Any other draw.
    Tails,
}

impl Outcome {
    /// Classifies a bounded draw.
    pub fn from_draw(draw: u32) -> Self {
        if draw == 0 {
            Outcome::Heads
        } else {
            Outcome::Tails
        }
    }
}
