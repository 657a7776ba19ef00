//! The bet catalog and bet validation.

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::wheel::{Pocket, WheelVariant};

/// Roulette bet kinds.
///
/// Multipliers below are gross return (stake plus profit) on a win:
/// Straight pays 35:1 (x36 back), even-money kinds pay 1:1 (x2 back),
/// dozens and columns pay 2:1 (x3 back).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetKind {
    /// Single number, including 0 and "00" (x36).
    Straight,
    /// Red numbers (x2).
    Red,
    /// Black numbers (x2).
    Black,
    /// Even numbers (x2).
    Even,
    /// Odd numbers (x2).
    Odd,
    /// 19-36 (x2).
    High,
    /// 1-18 (x2).
    Low,
    /// 1-12 (x3).
    Dozen1,
    /// 13-24 (x3).
    Dozen2,
    /// 25-36 (x3).
    Dozen3,
    /// 1, 4, 7, ... 34 (x3).
    Column1,
    /// 2, 5, 8, ... 35 (x3).
    Column2,
    /// 3, 6, 9, ... 36 (x3).
    Column3,
}

impl BetKind {
    /// The six 1:1 kinds. Only these qualify for la partage on French wheels.
    pub fn is_even_money(self) -> bool {
        matches!(
            self,
            Self::Red | Self::Black | Self::Even | Self::Odd | Self::High | Self::Low
        )
    }
}

/// Validation failures for a single bet.
#[derive(Debug, Clone, Copy, ThisError, PartialEq)]
pub enum BetError {
    #[error("straight bet requires a target pocket")]
    MissingStraightTarget,
    #[error("straight bet on 00 requires an American wheel (got {variant:?})")]
    DoubleZeroNeedsAmericanWheel { variant: WheelVariant },
    #[error("straight target out of range (got {got}, expected 1..=36)")]
    TargetOutOfRange { got: u8 },
    #[error("stake must be positive and finite (got {got})")]
    InvalidStake { got: f64 },
}

/// A single bet, applied identically on every trial of a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub kind: BetKind,
    /// Target pocket. Required for [`BetKind::Straight`], ignored otherwise.
    pub target: Option<Pocket>,
    /// Amount staked per trial. Must be positive and finite.
    pub stake: f64,
}

impl Bet {
    /// A bet on a fixed region of the layout (anything but Straight).
    pub fn new(kind: BetKind, stake: f64) -> Self {
        Self { kind, target: None, stake }
    }

    /// A straight-up bet on one pocket.
    pub fn straight(target: Pocket, stake: f64) -> Self {
        Self { kind: BetKind::Straight, target: Some(target), stake }
    }

    /// Check the bet against the active wheel. Run before any trial executes.
    pub fn validate(&self, variant: WheelVariant) -> Result<(), BetError> {
        if !self.stake.is_finite() || self.stake <= 0.0 {
            return Err(BetError::InvalidStake { got: self.stake });
        }
        if self.kind == BetKind::Straight {
            match self.target {
                None => return Err(BetError::MissingStraightTarget),
                Some(Pocket::DoubleZero) if !variant.has_double_zero() => {
                    return Err(BetError::DoubleZeroNeedsAmericanWheel { variant });
                }
                // Guard the Number invariant; the variant field is public.
                Some(Pocket::Number(n)) if n == 0 || n > 36 => {
                    return Err(BetError::TargetOutOfRange { got: n });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
