//! Common types for the wheelhouse roulette simulator.
//!
//! This crate holds the data model shared by the engine and front ends:
//! wheel variants, pockets, the bet catalog, and the simulation result
//! record. It contains no game logic and no randomness; payout resolution
//! and the trial loop live in `wheelhouse-engine`.

pub mod bet;
pub mod result;
pub mod wheel;

pub use bet::{Bet, BetError, BetKind};
pub use result::SimulationResult;
pub use wheel::{Pocket, WheelVariant, RED_NUMBERS};
