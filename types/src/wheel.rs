//! Wheel variants and pocket classification.
//!
//! Wheel index convention:
//! index 0 is the single zero, indices 1..=36 are the numbered pockets,
//! index 37 is the American double zero ("00"). The index only exists at
//! the wheel boundary (`pockets`/`from_index`); everywhere else a pocket
//! is a tagged [`Pocket`] value so nothing can do arithmetic on 37.

use serde::{Deserialize, Serialize};

/// Red numbers on a roulette wheel.
pub const RED_NUMBERS: [u8; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

/// Roulette wheel variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum WheelVariant {
    /// European single-zero wheel (2.7% house edge).
    #[default]
    European = 0,
    /// French single-zero wheel with la partage on even-money bets
    /// (1.35% house edge on those bets).
    French = 1,
    /// American double-zero wheel (5.26% house edge).
    American = 2,
}

impl WheelVariant {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::European),
            1 => Some(Self::French),
            2 => Some(Self::American),
            _ => None,
        }
    }

    /// Number of pockets on the wheel: 37 single-zero, 38 double-zero.
    pub fn pocket_count(self) -> u32 {
        match self {
            Self::European | Self::French => 37,
            Self::American => 38,
        }
    }

    /// Whether the wheel carries the "00" pocket.
    pub fn has_double_zero(self) -> bool {
        matches!(self, Self::American)
    }

    /// All pockets on the wheel, in index order.
    pub fn pockets(self) -> impl Iterator<Item = Pocket> {
        (0..self.pocket_count() as u8).filter_map(Pocket::from_index)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::European => "european",
            Self::French => "french",
            Self::American => "american",
        }
    }
}

/// One landing position on the wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pocket {
    /// The single zero.
    Zero,
    /// The American "00". Only present on [`WheelVariant::American`] wheels.
    DoubleZero,
    /// A numbered pocket, 1..=36.
    Number(u8),
}

impl Pocket {
    /// Map a wheel index (0..=37) to a pocket. `None` outside that range.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Zero),
            37 => Some(Self::DoubleZero),
            n @ 1..=36 => Some(Self::Number(n)),
            _ => None,
        }
    }

    /// The wheel index of this pocket (0, 37 for "00", n otherwise).
    pub fn index(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::DoubleZero => 37,
            Self::Number(n) => n,
        }
    }

    pub fn is_zero(self) -> bool {
        matches!(self, Self::Zero | Self::DoubleZero)
    }

    /// Whether the pocket is red. Zero pockets are neither red nor black.
    pub fn is_red(self) -> bool {
        match self {
            Self::Number(n) => RED_NUMBERS.contains(&n),
            _ => false,
        }
    }

    /// Whether the pocket is black (numbered and not red).
    pub fn is_black(self) -> bool {
        matches!(self, Self::Number(n) if !RED_NUMBERS.contains(&n))
    }

    /// Whether the pocket is even. Zero pockets count as neither parity.
    pub fn is_even(self) -> bool {
        matches!(self, Self::Number(n) if n % 2 == 0)
    }

    /// Whether the pocket is in the high half (19..=36).
    pub fn is_high(self) -> bool {
        matches!(self, Self::Number(n) if n >= 19)
    }
}

impl std::fmt::Display for Pocket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zero => write!(f, "0"),
            Self::DoubleZero => write!(f, "00"),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}
