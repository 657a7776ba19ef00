//! Wheelhouse simulation engine.
//!
//! This crate evaluates a fixed betting strategy over repeated spins of a
//! roulette wheel: draw a pocket, settle every active bet, update the
//! bankroll, and aggregate the run into an equity curve plus summary
//! statistics.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside the engine.
//! - Do not use non-deterministic randomness; every draw comes from the
//!   caller-provided [`SpinSource`], so a seeded source reproduces a run
//!   bit for bit.
//! - One run is one synchronous call; no state survives it.
//!
//! The primary entrypoint is [`run_simulation`].

pub mod payout;
pub mod rng;
pub mod simulation;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;


pub use payout::resolve;
pub use rng::{SpinSource, WheelRng};
pub use simulation::{run_simulation, SimulationError};
