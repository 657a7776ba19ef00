//! Test helpers for deterministic spins.
//!
//! Gated behind the `mocks` feature (or `cfg(test)`) so downstream test
//! suites can force exact wheel outcomes.

use wheelhouse_types::{Pocket, WheelVariant};

use crate::rng::SpinSource;

/// Spin source that replays a scripted pocket sequence.
///
/// # Panics
/// Panics when drawn from after the script is exhausted; size the script
/// to the trial count under test.
pub struct FixedSpins {
    pockets: std::vec::IntoIter<Pocket>,
}

impl FixedSpins {
    pub fn new(pockets: Vec<Pocket>) -> Self {
        Self {
            pockets: pockets.into_iter(),
        }
    }
}

impl SpinSource for FixedSpins {
    fn next_pocket(&mut self, _variant: WheelVariant) -> Pocket {
        self.pockets.next().expect("spin script exhausted")
    }
}
