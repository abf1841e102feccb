use crate::geometry::errors::GeometryError;
use crate::geometry::types::{DeviationColor, DisplaySnapshot};
use crate::stats::BudgetStat;
use tracing::{debug, warn};

/// Map budget statistics to ring fractions and labels.
///
/// # Errors
///
/// Returns [`GeometryError::DivideByZero`] when `budget_amount` is zero.
/// Use [`transform_or_placeholder`] where a snapshot is always required.
pub fn transform(stat: &BudgetStat) -> Result<DisplaySnapshot, GeometryError> {
    if stat.budget_amount == 0.0 {
        return Err(GeometryError::DivideByZero);
    }

    let spent_fraction = (stat.budget_amount - stat.total_balance) / stat.budget_amount;
    let deviation_fraction = stat.balance_deviation.abs() / stat.budget_amount;
    let ahead = stat.balance_deviation > 0.0;

    let (deviation_arc_start, deviation_color) = if ahead {
        (spent_fraction, DeviationColor::Positive)
    } else {
        (spent_fraction - deviation_fraction, DeviationColor::Negative)
    };

    let snapshot = DisplaySnapshot {
        spent_fraction: f64::from(spent_fraction),
        deviation_fraction: f64::from(deviation_fraction),
        deviation_arc_start: f64::from(deviation_arc_start),
        deviation_color,
        total_balance_label: format_whole(stat.total_balance),
        deviation_label: format_signed_whole(stat.balance_deviation),
        days_left_label: format_days(stat.budget_days_to_expiration),
    };

    debug!(
        event = "core.geometry.transform_completed",
        spent_fraction = snapshot.spent_fraction,
        deviation_fraction = snapshot.deviation_fraction,
        deviation_arc_start = snapshot.deviation_arc_start,
        deviation_color = ?snapshot.deviation_color
    );

    Ok(snapshot)
}

/// Like [`transform`], but a zero budget yields [`DisplaySnapshot::placeholder`].
pub fn transform_or_placeholder(stat: &BudgetStat) -> DisplaySnapshot {
    match transform(stat) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(
                event = "core.geometry.placeholder_substituted",
                error = %e
            );
            DisplaySnapshot::placeholder()
        }
    }
}

/// Whole-number label, no grouping separators.
pub fn format_whole(value: f32) -> String {
    format!("{:.0}", value)
}

/// Whole-number label with an explicit `+` for positive values.
pub fn format_signed_whole(value: f32) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{}", sign, format_whole(value))
}

/// One-decimal label for days remaining.
pub fn format_days(value: f32) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn stat(budget_amount: f32, total_balance: f32, balance_deviation: f32) -> BudgetStat {
        BudgetStat {
            budget_amount,
            total_balance,
            balance_deviation,
            ..BudgetStat::default()
        }
    }

    #[test]
    fn test_ahead_of_budget() {
        let snapshot = transform(&stat(1000.0, 800.0, 20.0)).unwrap();
        assert!((snapshot.spent_fraction - 0.2).abs() < EPS);
        assert!((snapshot.deviation_fraction - 0.02).abs() < EPS);
        assert!((snapshot.deviation_arc_start - 0.2).abs() < EPS);
        assert_eq!(snapshot.deviation_color, DeviationColor::Positive);
        assert_eq!(snapshot.deviation_arc_start, snapshot.spent_fraction);
    }

    #[test]
    fn test_behind_budget() {
        let snapshot = transform(&stat(1000.0, 800.0, -20.0)).unwrap();
        assert!((snapshot.spent_fraction - 0.2).abs() < EPS);
        assert!((snapshot.deviation_fraction - 0.02).abs() < EPS);
        assert!((snapshot.deviation_arc_start - 0.18).abs() < EPS);
        assert_eq!(snapshot.deviation_color, DeviationColor::Negative);
    }

    #[test]
    fn test_zero_deviation_counts_as_negative() {
        let snapshot = transform(&stat(500.0, 100.0, 0.0)).unwrap();
        assert_eq!(snapshot.deviation_color, DeviationColor::Negative);
        assert_eq!(snapshot.deviation_fraction, 0.0);
        assert_eq!(snapshot.deviation_arc_start, snapshot.spent_fraction);
        assert_eq!(snapshot.deviation_label, "0");
    }

    #[test]
    fn test_fractions_match_formula_across_inputs() {
        let cases = [
            (1855.75, 669.54, 40.74652698863633),
            (250.0, 300.0, -75.5),
            (-100.0, 20.0, 5.0),
            (1.0, -3.0, -0.25),
            (42.0, 42.0, 1e-9),
        ];

        for (budget, total, deviation) in cases {
            let s = stat(budget, total, deviation);
            let snapshot = transform(&s).unwrap();

            let spent = f64::from((budget - total) / budget);
            let magnitude = f64::from(deviation.abs() / budget);
            assert!((snapshot.spent_fraction - spent).abs() < EPS, "{:?}", s);
            assert!((snapshot.deviation_fraction - magnitude).abs() < EPS, "{:?}", s);

            if deviation > 0.0 {
                assert_eq!(snapshot.deviation_color, DeviationColor::Positive);
                assert_eq!(snapshot.deviation_arc_start, snapshot.spent_fraction);
            } else {
                assert_eq!(snapshot.deviation_color, DeviationColor::Negative);
                assert!(
                    (snapshot.deviation_arc_start - (spent - magnitude)).abs() < EPS,
                    "{:?}",
                    s
                );
            }
        }
    }

    #[test]
    fn test_deviation_magnitude_non_negative_for_positive_budget() {
        for deviation in [-500.0, -1.0, 0.0, 1.0, 500.0] {
            let snapshot = transform(&stat(1000.0, 0.0, deviation)).unwrap();
            assert!(snapshot.deviation_fraction >= 0.0);
        }
    }

    #[test]
    fn test_overspent_is_not_clamped() {
        let snapshot = transform(&stat(100.0, -50.0, -10.0)).unwrap();
        assert!((snapshot.spent_fraction - 1.5).abs() < EPS);
        assert!((snapshot.deviation_arc_start - 1.4).abs() < EPS);
    }

    #[test]
    fn test_zero_budget_is_divide_by_zero() {
        assert_eq!(
            transform(&stat(0.0, 800.0, 20.0)),
            Err(GeometryError::DivideByZero)
        );
        assert_eq!(
            transform(&stat(-0.0, 0.0, 0.0)),
            Err(GeometryError::DivideByZero)
        );
    }

    #[test]
    fn test_zero_budget_routes_to_placeholder() {
        let snapshot = transform_or_placeholder(&BudgetStat::default());
        assert_eq!(snapshot, DisplaySnapshot::placeholder());

        let snapshot = transform_or_placeholder(&stat(0.0, 800.0, 20.0));
        assert!(snapshot.spent_fraction.is_finite());
        assert!(snapshot.deviation_fraction.is_finite());
        assert!(snapshot.deviation_arc_start.is_finite());
    }

    #[test]
    fn test_labels() {
        let s = BudgetStat {
            budget_days_to_expiration: 3.7271803861270834,
            ..stat(1855.75, 669.54, 40.74652698863633)
        };
        let snapshot = transform(&s).unwrap();
        assert_eq!(snapshot.total_balance_label, "670");
        assert_eq!(snapshot.deviation_label, "+41");
        assert_eq!(snapshot.days_left_label, "3.7");
    }

    #[test]
    fn test_label_formatting() {
        assert_eq!(format_whole(800.0), "800");
        assert_eq!(format_whole(-12.7), "-13");
        assert_eq!(format_signed_whole(20.0), "+20");
        assert_eq!(format_signed_whole(-20.0), "-20");
        assert_eq!(format_signed_whole(0.0), "0");
        assert_eq!(format_days(10.3), "10.3");
        assert_eq!(format_days(-1.26), "-1.3");
        assert_eq!(format_days(4.0), "4.0");
    }

    #[test]
    fn test_days_label_rounds_single_precision_value() {
        // 0.15f32 is slightly above 0.15, 0.15f64 slightly below.
        let s = BudgetStat {
            budget_amount: 1000.0,
            budget_days_to_expiration: 0.15,
            ..BudgetStat::default()
        };
        assert_eq!(transform(&s).unwrap().days_left_label, "0.2");
        assert_eq!(format_days(0.15), "0.2");
    }

    #[test]
    fn test_label_shapes() {
        for deviation in [-1234.56, -0.7, 0.0, 0.7, 99.4, 1234.56] {
            let snapshot = transform(&stat(1000.0, 812.49, deviation)).unwrap();
            assert!(!snapshot.total_balance_label.contains('.'));
            assert!(!snapshot.deviation_label.contains('.'));
            assert_eq!(snapshot.deviation_label.starts_with('+'), deviation > 0.0);

            let (_, decimals) = snapshot.days_left_label.split_once('.').unwrap();
            assert_eq!(decimals.len(), 1);
        }
    }
}
