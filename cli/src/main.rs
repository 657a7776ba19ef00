//! One-shot simulator front end: parse a bet list, run the engine, report.

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing::info;
use wheelhouse_engine::{run_simulation, WheelRng};
use wheelhouse_types::{Bet, BetKind, Pocket, SimulationResult, WheelVariant};

/// CLI flags.
#[derive(Parser, Debug)]
#[command(name = "wheelhouse", about = "Roulette strategy simulator")]
struct Args {
    /// Wheel variant: european, french, or american
    #[arg(long, default_value = "european")]
    wheel: String,

    /// Bet spec `KIND[:TARGET]:STAKE`, repeatable.
    /// Examples: `red:10`, `dozen2:25`, `straight:17:5`, `straight:00:5`
    #[arg(long = "bet", required = true)]
    bets: Vec<String>,

    /// Number of trials to run
    #[arg(long, default_value_t = 1_000)]
    iterations: u32,

    /// Starting bankroll
    #[arg(long, default_value_t = 1_000.0)]
    balance: f64,

    /// Seed for a reproducible run (omit for OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the full result record as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// Log engine internals
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_wheel(s: &str) -> Result<WheelVariant> {
    match s.to_ascii_lowercase().as_str() {
        "european" => Ok(WheelVariant::European),
        "french" => Ok(WheelVariant::French),
        "american" => Ok(WheelVariant::American),
        other => bail!("unknown wheel variant: {other} (expected european, french, or american)"),
    }
}

fn parse_target(s: &str) -> Result<Pocket> {
    if s == "00" {
        return Ok(Pocket::DoubleZero);
    }
    let n: u8 = s
        .parse()
        .with_context(|| format!("bad straight target: {s}"))?;
    Pocket::from_index(n)
        .filter(|p| *p != Pocket::DoubleZero)
        .ok_or_else(|| anyhow!("straight target out of range: {s} (expected 0-36 or 00)"))
}

/// Parse one `KIND[:TARGET]:STAKE` spec into a bet.
fn parse_bet(spec: &str) -> Result<Bet> {
    let parts: Vec<&str> = spec.split(':').collect();
    let (kind_str, target, stake_str) = match parts.as_slice() {
        [kind, stake] => (*kind, None, *stake),
        [kind, target, stake] => (*kind, Some(*target), *stake),
        _ => bail!("bad bet spec: {spec} (expected KIND[:TARGET]:STAKE)"),
    };

    let kind = match kind_str.to_ascii_lowercase().as_str() {
        "straight" => BetKind::Straight,
        "red" => BetKind::Red,
        "black" => BetKind::Black,
        "even" => BetKind::Even,
        "odd" => BetKind::Odd,
        "high" => BetKind::High,
        "low" => BetKind::Low,
        "dozen1" => BetKind::Dozen1,
        "dozen2" => BetKind::Dozen2,
        "dozen3" => BetKind::Dozen3,
        "column1" => BetKind::Column1,
        "column2" => BetKind::Column2,
        "column3" => BetKind::Column3,
        other => bail!("unknown bet kind: {other}"),
    };

    let stake: f64 = stake_str
        .parse()
        .with_context(|| format!("bad stake in bet spec: {spec}"))?;

    let target = match target {
        Some(t) if kind == BetKind::Straight => Some(parse_target(t)?),
        Some(_) => bail!("only straight bets take a target: {spec}"),
        None => None,
    };

    Ok(Bet { kind, target, stake })
}

/// Downsample the equity curve into a one-line block-character sparkline.
fn sparkline(curve: &[f64], width: usize) -> String {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if curve.len() < 2 {
        return String::new();
    }
    let lo = curve.iter().cloned().fold(f64::MAX, f64::min);
    let hi = curve.iter().cloned().fold(f64::MIN, f64::max);
    let span = if hi > lo { hi - lo } else { 1.0 };
    let cols = width.min(curve.len());
    (0..cols)
        .map(|col| {
            let idx = col * (curve.len() - 1) / (cols - 1).max(1);
            let level = ((curve[idx] - lo) / span * 7.0).round() as usize;
            BLOCKS[level.min(7)]
        })
        .collect()
}

fn print_summary(variant: WheelVariant, result: &SimulationResult) {
    println!("wheel:            {}", variant.as_str());
    println!("trials completed: {}", result.completed_trials());
    println!("final balance:    {:.2}", result.final_balance);
    println!("total profit:     {:+.2}", result.total_profit);
    println!("win rate:         {:.2}%", result.win_rate * 100.0);
    println!("max drawdown:     {:.2}", result.max_drawdown);
    let line = sparkline(&result.equity_curve, 60);
    if !line.is_empty() {
        println!("equity:           {line}");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let variant = parse_wheel(&args.wheel)?;
    let bets = args
        .bets
        .iter()
        .map(|spec| parse_bet(spec))
        .collect::<Result<Vec<_>>>()?;

    let mut spins = match args.seed {
        Some(seed) => {
            info!(seed, "using seeded spin source");
            WheelRng::seeded(seed)
        }
        None => WheelRng::from_entropy(),
    };

    let result = run_simulation(variant, &bets, args.iterations, args.balance, &mut spins)
        .context("simulation rejected")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(variant, &result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_bet() {
        let bet = parse_bet("red:10").unwrap();
        assert_eq!(bet.kind, BetKind::Red);
        assert_eq!(bet.target, None);
        assert_eq!(bet.stake, 10.0);
    }

    #[test]
    fn parses_straight_bet_with_target() {
        let bet = parse_bet("straight:17:5").unwrap();
        assert_eq!(bet.kind, BetKind::Straight);
        assert_eq!(bet.target, Some(Pocket::Number(17)));
        assert_eq!(bet.stake, 5.0);
    }

    #[test]
    fn parses_double_zero_target() {
        let bet = parse_bet("straight:00:5").unwrap();
        assert_eq!(bet.target, Some(Pocket::DoubleZero));
    }

    #[test]
    fn parses_zero_target() {
        let bet = parse_bet("straight:0:5").unwrap();
        assert_eq!(bet.target, Some(Pocket::Zero));
    }

    #[test]
    fn rejects_target_on_region_bet() {
        assert!(parse_bet("red:17:10").is_err());
    }

    #[test]
    fn rejects_unknown_kind_and_bad_shapes() {
        assert!(parse_bet("split:10").is_err());
        assert!(parse_bet("red").is_err());
        assert!(parse_bet("straight:17:5:1").is_err());
        assert!(parse_bet("straight:37:5").is_err());
    }

    #[test]
    fn parses_wheel_variants() {
        assert_eq!(parse_wheel("european").unwrap(), WheelVariant::European);
        assert_eq!(parse_wheel("FRENCH").unwrap(), WheelVariant::French);
        assert_eq!(parse_wheel("american").unwrap(), WheelVariant::American);
        assert!(parse_wheel("monte-carlo").is_err());
    }

    #[test]
    fn parses_full_arg_set() {
        let args = Args::parse_from([
            "wheelhouse",
            "--wheel",
            "american",
            "--bet",
            "red:10",
            "--bet",
            "straight:00:5",
            "--iterations",
            "500",
            "--balance",
            "250",
            "--seed",
            "42",
        ]);
        assert_eq!(args.wheel, "american");
        assert_eq!(args.bets.len(), 2);
        assert_eq!(args.iterations, 500);
        assert_eq!(args.balance, 250.0);
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn sparkline_spans_levels() {
        let line = sparkline(&[0.0, 50.0, 100.0], 3);
        assert_eq!(line.chars().count(), 3);
        assert!(line.starts_with('▁'));
        assert!(line.ends_with('█'));
    }
}
