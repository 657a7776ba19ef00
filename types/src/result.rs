//! Aggregate output of one simulation run.

use serde::{Deserialize, Serialize};

/// Summary of a completed run.
///
/// Constructed fresh per run by the engine; nothing here outlives the call
/// that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Bankroll after each trial. `equity_curve[0]` is the starting bankroll,
    /// `equity_curve[i]` the bankroll after trial `i`, so the length is
    /// `completed_trials + 1`. A run that stops early because the bankroll
    /// can no longer cover the next round keeps its last recorded value.
    pub equity_curve: Vec<f64>,
    /// Bankroll at the end of the run.
    pub final_balance: f64,
    /// `final_balance - initial_balance`.
    pub total_profit: f64,
    /// Fraction of *requested* trials whose total gross return was positive.
    /// Trials never run after bankroll exhaustion count against the rate,
    /// so an exhausted run reads as if the remaining trials were losses.
    /// Recompute from `equity_curve.len()` for a completed-trials rate.
    pub win_rate: f64,
    /// Largest `running_max_bankroll - bankroll` gap observed over the run.
    pub max_drawdown: f64,
}

impl SimulationResult {
    /// Number of trials that actually executed.
    pub fn completed_trials(&self) -> usize {
        self.equity_curve.len().saturating_sub(1)
    }
}
