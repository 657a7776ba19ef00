//! The trial loop: repeated spins of a fixed strategy over one bankroll.

use thiserror::Error as ThisError;
use tracing::debug;
use wheelhouse_types::{Bet, BetError, SimulationResult, WheelVariant};

use crate::payout;
use crate::rng::SpinSource;

/// Input validation failures. Surfaced before any trial runs; an invalid
/// run never returns partial results.
#[derive(Debug, Clone, Copy, ThisError, PartialEq)]
pub enum SimulationError {
    #[error("at least one bet is required")]
    NoBets,
    #[error("iterations must be at least 1")]
    ZeroIterations,
    #[error("initial balance must be non-negative and finite (got {got})")]
    InvalidBalance { got: f64 },
    #[error("bet {index}: {source}")]
    InvalidBet { index: usize, source: BetError },
}

fn validate(
    variant: WheelVariant,
    bets: &[Bet],
    iterations: u32,
    initial_balance: f64,
) -> Result<(), SimulationError> {
    if bets.is_empty() {
        return Err(SimulationError::NoBets);
    }
    if iterations == 0 {
        return Err(SimulationError::ZeroIterations);
    }
    if !initial_balance.is_finite() || initial_balance < 0.0 {
        return Err(SimulationError::InvalidBalance { got: initial_balance });
    }
    for (index, bet) in bets.iter().enumerate() {
        bet.validate(variant)
            .map_err(|source| SimulationError::InvalidBet { index, source })?;
    }
    Ok(())
}

/// Run a fixed betting strategy for up to `iterations` trials.
///
/// Each trial debits the full stake of every bet, draws one pocket from
/// `spins`, credits the summed gross returns, and records the bankroll on
/// the equity curve. The run stops early once the bankroll can no longer
/// cover the next round's total stake.
///
/// The caller owns the spin source; passing a seeded [`crate::WheelRng`]
/// makes the whole run reproducible.
pub fn run_simulation<S: SpinSource>(
    variant: WheelVariant,
    bets: &[Bet],
    iterations: u32,
    initial_balance: f64,
    spins: &mut S,
) -> Result<SimulationResult, SimulationError> {
    validate(variant, bets, iterations, initial_balance)?;

    let total_stake: f64 = bets.iter().map(|bet| bet.stake).sum();
    debug!(
        variant = variant.as_str(),
        bets = bets.len(),
        total_stake,
        iterations,
        initial_balance,
        "simulation started"
    );

    let mut balance = initial_balance;
    let mut equity_curve = Vec::with_capacity(iterations as usize + 1);
    equity_curve.push(balance);

    let mut wins = 0u32;
    let mut max_balance = initial_balance;
    let mut max_drawdown = 0.0f64;

    for trial in 0..iterations {
        if balance < total_stake {
            debug!(trial, balance, total_stake, "bankroll exhausted");
            break;
        }

        balance -= total_stake;
        let pocket = spins.next_pocket(variant);
        let total_return: f64 = bets
            .iter()
            .map(|bet| payout::resolve(bet, pocket, variant))
            .sum();

        // A trial is a win when anything at all came back, even if the
        // return is below the round's total stake.
        if total_return > 0.0 {
            wins += 1;
            balance += total_return;
        }

        equity_curve.push(balance);

        if balance > max_balance {
            max_balance = balance;
        }
        let drawdown = max_balance - balance;
        if drawdown > max_drawdown {
            max_drawdown = drawdown;
        }
    }

    // The denominator is the requested trial count, not the completed one:
    // an exhausted run reports a rate diluted by the trials it never played.
    let win_rate = f64::from(wins) / f64::from(iterations);

    debug!(
        completed = equity_curve.len() - 1,
        final_balance = balance,
        win_rate,
        max_drawdown,
        "simulation finished"
    );

    Ok(SimulationResult {
        final_balance: balance,
        total_profit: balance - initial_balance,
        win_rate,
        max_drawdown,
        equity_curve,
    })
}
