//! Payout resolution for a settled spin.
//!
//! Bet kinds and gross returns (stake included):
//! Straight (single pocket, x36), Red/Black/Even/Odd/High/Low (x2),
//! Dozen1/2/3 (1-12, 13-24, 25-36, x3), Column1/2/3 (x3).
//!
//! Zero pockets lose every region bet, with one exception: on French
//! wheels an even-money bet gets half the stake back (la partage). A
//! straight bet on the landed zero itself still pays x36 on any wheel.

use wheelhouse_types::{Bet, BetKind, Pocket, WheelVariant};

/// Check if a bet wins for a given non-zero pocket.
fn bet_wins(kind: BetKind, target: Option<Pocket>, pocket: Pocket) -> bool {
    let number = match pocket {
        Pocket::Number(n) => n,
        // Zero pockets are settled before dispatching here.
        Pocket::Zero | Pocket::DoubleZero => return false,
    };

    match kind {
        BetKind::Straight => target == Some(pocket),
        BetKind::Red => pocket.is_red(),
        BetKind::Black => pocket.is_black(),
        BetKind::Even => pocket.is_even(),
        BetKind::Odd => !pocket.is_even(),
        BetKind::High => pocket.is_high(),
        BetKind::Low => !pocket.is_high(),
        BetKind::Dozen1 => number <= 12,
        BetKind::Dozen2 => (13..=24).contains(&number),
        BetKind::Dozen3 => number >= 25,
        // Column 1: 1, 4, 7, ... 34
        // Column 2: 2, 5, 8, ... 35
        // Column 3: 3, 6, 9, ... 36
        BetKind::Column1 => number % 3 == 1,
        BetKind::Column2 => number % 3 == 2,
        BetKind::Column3 => number % 3 == 0,
    }
}

/// Gross return multiplier for a winning bet (includes the returned stake).
fn payout_multiplier(kind: BetKind) -> f64 {
    match kind {
        BetKind::Straight => 36.0,
        BetKind::Red
        | BetKind::Black
        | BetKind::Even
        | BetKind::Odd
        | BetKind::High
        | BetKind::Low => 2.0,
        BetKind::Dozen1
        | BetKind::Dozen2
        | BetKind::Dozen3
        | BetKind::Column1
        | BetKind::Column2
        | BetKind::Column3 => 3.0,
    }
}

/// Resolve one bet against a landed pocket.
///
/// Returns the gross amount credited back to the bankroll: stake plus
/// profit on a win, `stake / 2` for la partage, 0 on a total loss.
pub fn resolve(bet: &Bet, pocket: Pocket, variant: WheelVariant) -> f64 {
    if pocket.is_zero() {
        if variant == WheelVariant::French && bet.kind.is_even_money() {
            return bet.stake / 2.0;
        }
        if bet.kind == BetKind::Straight && bet.target == Some(pocket) {
            return bet.stake * payout_multiplier(BetKind::Straight);
        }
        return 0.0;
    }

    if bet_wins(bet.kind, bet.target, pocket) {
        bet.stake * payout_multiplier(bet.kind)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheelhouse_types::Bet;

    const VARIANTS: [WheelVariant; 3] = [
        WheelVariant::European,
        WheelVariant::French,
        WheelVariant::American,
    ];

    #[test]
    fn test_bet_wins_straight() {
        let seventeen = Some(Pocket::Number(17));
        assert!(bet_wins(BetKind::Straight, seventeen, Pocket::Number(17)));
        assert!(!bet_wins(BetKind::Straight, seventeen, Pocket::Number(18)));
    }

    #[test]
    fn test_bet_wins_colors() {
        assert!(bet_wins(BetKind::Red, None, Pocket::Number(1)));
        assert!(bet_wins(BetKind::Red, None, Pocket::Number(3)));
        assert!(!bet_wins(BetKind::Red, None, Pocket::Number(2)));

        assert!(bet_wins(BetKind::Black, None, Pocket::Number(2)));
        assert!(bet_wins(BetKind::Black, None, Pocket::Number(4)));
        assert!(!bet_wins(BetKind::Black, None, Pocket::Number(1)));
    }

    #[test]
    fn test_bet_wins_even_odd() {
        assert!(bet_wins(BetKind::Even, None, Pocket::Number(2)));
        assert!(bet_wins(BetKind::Even, None, Pocket::Number(36)));
        assert!(!bet_wins(BetKind::Even, None, Pocket::Number(1)));

        assert!(bet_wins(BetKind::Odd, None, Pocket::Number(1)));
        assert!(bet_wins(BetKind::Odd, None, Pocket::Number(35)));
        assert!(!bet_wins(BetKind::Odd, None, Pocket::Number(2)));
    }

    #[test]
    fn test_bet_wins_low_high() {
        assert!(bet_wins(BetKind::Low, None, Pocket::Number(1)));
        assert!(bet_wins(BetKind::Low, None, Pocket::Number(18)));
        assert!(!bet_wins(BetKind::Low, None, Pocket::Number(19)));

        assert!(bet_wins(BetKind::High, None, Pocket::Number(19)));
        assert!(bet_wins(BetKind::High, None, Pocket::Number(36)));
        assert!(!bet_wins(BetKind::High, None, Pocket::Number(18)));
    }

    #[test]
    fn test_bet_wins_dozens() {
        assert!(bet_wins(BetKind::Dozen1, None, Pocket::Number(1)));
        assert!(bet_wins(BetKind::Dozen1, None, Pocket::Number(12)));
        assert!(!bet_wins(BetKind::Dozen1, None, Pocket::Number(13)));

        assert!(bet_wins(BetKind::Dozen2, None, Pocket::Number(13)));
        assert!(bet_wins(BetKind::Dozen2, None, Pocket::Number(24)));
        assert!(!bet_wins(BetKind::Dozen2, None, Pocket::Number(12)));

        assert!(bet_wins(BetKind::Dozen3, None, Pocket::Number(25)));
        assert!(bet_wins(BetKind::Dozen3, None, Pocket::Number(36)));
        assert!(!bet_wins(BetKind::Dozen3, None, Pocket::Number(24)));
    }

    #[test]
    fn test_bet_wins_columns() {
        assert!(bet_wins(BetKind::Column1, None, Pocket::Number(1)));
        assert!(bet_wins(BetKind::Column1, None, Pocket::Number(34)));
        assert!(!bet_wins(BetKind::Column1, None, Pocket::Number(2)));

        assert!(bet_wins(BetKind::Column2, None, Pocket::Number(2)));
        assert!(bet_wins(BetKind::Column2, None, Pocket::Number(35)));
        assert!(!bet_wins(BetKind::Column2, None, Pocket::Number(3)));

        assert!(bet_wins(BetKind::Column3, None, Pocket::Number(3)));
        assert!(bet_wins(BetKind::Column3, None, Pocket::Number(36)));
        assert!(!bet_wins(BetKind::Column3, None, Pocket::Number(1)));
    }

    #[test]
    fn test_straight_payout() {
        let bet = Bet::straight(Pocket::Number(17), 10.0);
        for variant in VARIANTS {
            assert_eq!(resolve(&bet, Pocket::Number(17), variant), 360.0);
            assert_eq!(resolve(&bet, Pocket::Number(18), variant), 0.0);
        }
    }

    #[test]
    fn test_straight_on_zero_pockets() {
        let on_zero = Bet::straight(Pocket::Zero, 10.0);
        for variant in VARIANTS {
            assert_eq!(resolve(&on_zero, Pocket::Zero, variant), 360.0);
        }

        let on_double_zero = Bet::straight(Pocket::DoubleZero, 10.0);
        assert_eq!(
            resolve(&on_double_zero, Pocket::DoubleZero, WheelVariant::American),
            360.0
        );
        // The two zero pockets never match each other.
        assert_eq!(
            resolve(&on_double_zero, Pocket::Zero, WheelVariant::American),
            0.0
        );
        assert_eq!(
            resolve(&on_zero, Pocket::DoubleZero, WheelVariant::American),
            0.0
        );
    }

    #[test]
    fn test_la_partage_even_money_only_on_french() {
        for kind in [
            BetKind::Red,
            BetKind::Black,
            BetKind::Even,
            BetKind::Odd,
            BetKind::High,
            BetKind::Low,
        ] {
            let bet = Bet::new(kind, 10.0);
            assert_eq!(resolve(&bet, Pocket::Zero, WheelVariant::French), 5.0);
            assert_eq!(resolve(&bet, Pocket::Zero, WheelVariant::European), 0.0);
            assert_eq!(resolve(&bet, Pocket::Zero, WheelVariant::American), 0.0);
            assert_eq!(resolve(&bet, Pocket::DoubleZero, WheelVariant::American), 0.0);
        }
    }

    #[test]
    fn test_no_la_partage_for_dozens_and_columns() {
        for kind in [
            BetKind::Dozen1,
            BetKind::Dozen2,
            BetKind::Dozen3,
            BetKind::Column1,
            BetKind::Column2,
            BetKind::Column3,
        ] {
            let bet = Bet::new(kind, 10.0);
            for variant in VARIANTS {
                assert_eq!(resolve(&bet, Pocket::Zero, variant), 0.0);
            }
        }
    }

    #[test]
    fn test_even_money_payout() {
        let bet = Bet::new(BetKind::Red, 10.0);
        assert_eq!(resolve(&bet, Pocket::Number(1), WheelVariant::European), 20.0);
        assert_eq!(resolve(&bet, Pocket::Number(2), WheelVariant::European), 0.0);
    }

    #[test]
    fn test_dozen_column_payout() {
        let dozen = Bet::new(BetKind::Dozen2, 10.0);
        assert_eq!(resolve(&dozen, Pocket::Number(20), WheelVariant::European), 30.0);

        let column = Bet::new(BetKind::Column2, 10.0);
        assert_eq!(resolve(&column, Pocket::Number(20), WheelVariant::European), 30.0);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let bet = Bet::new(BetKind::Red, 12.5);
        let first = resolve(&bet, Pocket::Number(19), WheelVariant::French);
        let second = resolve(&bet, Pocket::Number(19), WheelVariant::French);
        assert_eq!(first, second);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Every numbered pocket lands in exactly one dozen and exactly
            /// one column.
            #[test]
            fn prop_dozen_column_exhaustive(n in 1u8..=36) {
                let pocket = Pocket::Number(n);
                let dozens = [BetKind::Dozen1, BetKind::Dozen2, BetKind::Dozen3]
                    .iter()
                    .filter(|kind| bet_wins(**kind, None, pocket))
                    .count();
                let columns = [BetKind::Column1, BetKind::Column2, BetKind::Column3]
                    .iter()
                    .filter(|kind| bet_wins(**kind, None, pocket))
                    .count();
                prop_assert_eq!(dozens, 1);
                prop_assert_eq!(columns, 1);
            }

            /// A winning even-money resolution always pays exactly twice the
            /// stake, on any wheel, for any positive stake.
            #[test]
            fn prop_even_money_gross_return(n in 1u8..=36, stake in 0.01f64..10_000.0) {
                let pocket = Pocket::Number(n);
                let bet = Bet::new(if pocket.is_red() { BetKind::Red } else { BetKind::Black }, stake);
                for variant in [WheelVariant::European, WheelVariant::French, WheelVariant::American] {
                    prop_assert_eq!(resolve(&bet, pocket, variant), stake * 2.0);
                }
            }
        }
    }
}
