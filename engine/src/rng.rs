//! Spin randomness.
//!
//! The engine never reaches for a global RNG. Draws flow through the
//! [`SpinSource`] trait so production code can supply a seeded generator
//! and tests can script exact pockets (see `mocks`).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wheelhouse_types::{Pocket, WheelVariant};

/// Source of spin outcomes for a wheel.
pub trait SpinSource {
    /// Draw the next landed pocket for the given wheel.
    fn next_pocket(&mut self, variant: WheelVariant) -> Pocket;
}

/// Production spin source backed by a seeded ChaCha generator.
///
/// Every pocket has equal probability: 1/37 on single-zero wheels, 1/38 on
/// American wheels. Two sources built with the same seed produce the same
/// draw sequence.
pub struct WheelRng {
    rng: ChaCha8Rng,
}

impl WheelRng {
    /// Deterministic source for a known seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl SpinSource for WheelRng {
    fn next_pocket(&mut self, variant: WheelVariant) -> Pocket {
        let index = self.rng.gen_range(0..variant.pocket_count()) as u8;
        // index < pocket_count <= 38, so the mapping is total.
        match index {
            0 => Pocket::Zero,
            37 => Pocket::DoubleZero,
            n => Pocket::Number(n),
        }
    }
}
