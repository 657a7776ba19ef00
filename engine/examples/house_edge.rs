//! Monte Carlo house-edge estimates for every bet kind on every wheel.
//!
//! Prints CSV: `wheel,bet,trials,avg_wagered,avg_net,house_edge,stderr`.
//! Expected edges: 2.70% European, 1.35% French even-money, 5.26% American.

use wheelhouse_engine::{resolve, SpinSource, WheelRng};
use wheelhouse_types::{Bet, BetKind, Pocket, WheelVariant};

const TRIALS: usize = 200_000; // full run for stable estimates
const STAKE: f64 = 100.0;

#[derive(Default, Clone)]
struct Stats {
    trials: u64,
    total_net: f64,
    total_net_sq: f64,
    total_wagered: f64,
}

impl Stats {
    fn add(&mut self, net: f64, wagered: f64) {
        self.trials += 1;
        self.total_net += net;
        self.total_net_sq += net * net;
        self.total_wagered += wagered;
    }

    fn mean_net(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_net / self.trials as f64
        }
    }

    fn mean_wagered(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_wagered / self.trials as f64
        }
    }

    fn house_edge(&self) -> f64 {
        let mw = self.mean_wagered();
        if mw == 0.0 {
            0.0
        } else {
            -self.mean_net() / mw
        }
    }

    fn stderr(&self) -> f64 {
        if self.trials <= 1 {
            return 0.0;
        }
        let mean = self.mean_net();
        let var = (self.total_net_sq / self.trials as f64) - mean * mean;
        let var = if var < 0.0 { 0.0 } else { var };
        (var / self.trials as f64).sqrt()
    }
}

fn bet_for(kind: BetKind) -> Bet {
    match kind {
        BetKind::Straight => Bet::straight(Pocket::Number(17), STAKE),
        _ => Bet::new(kind, STAKE),
    }
}

fn main() {
    let kinds = [
        BetKind::Straight,
        BetKind::Red,
        BetKind::Black,
        BetKind::Even,
        BetKind::Odd,
        BetKind::High,
        BetKind::Low,
        BetKind::Dozen1,
        BetKind::Dozen2,
        BetKind::Dozen3,
        BetKind::Column1,
        BetKind::Column2,
        BetKind::Column3,
    ];
    let variants = [
        WheelVariant::European,
        WheelVariant::French,
        WheelVariant::American,
    ];

    println!("wheel,bet,trials,avg_wagered,avg_net,house_edge,stderr");
    for variant in variants {
        for kind in kinds {
            let bet = bet_for(kind);
            let mut rng = WheelRng::seeded(kind as u64 + 1);
            let mut stats = Stats::default();
            for _ in 0..TRIALS {
                let pocket = rng.next_pocket(variant);
                let gross = resolve(&bet, pocket, variant);
                stats.add(gross - bet.stake, bet.stake);
            }
            println!(
                "{},{:?},{},{:.4},{:.4},{:.6},{:.6}",
                variant.as_str(),
                kind,
                stats.trials,
                stats.mean_wagered(),
                stats.mean_net(),
                stats.house_edge(),
                stats.stderr()
            );
        }
    }
}
