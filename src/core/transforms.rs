//! Pure series transforms backing the chart views.
//!
//! Each function takes a stored series and derives the display series for a
//! single visualization. All of them are stateless and single-pass.

use crate::core::snapshot::AllocationSlice;

/// 3-point centered moving average. At the boundaries the window shrinks to
/// the two available points; a singleton series maps to itself. Output length
/// always equals input length.
pub fn moving_average(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            if i > 0 && i + 1 < n {
                (values[i - 1] + v + values[i + 1]) / 3.0
            } else if i == 0 && n > 1 {
                (v + values[1]) / 2.0
            } else if i + 1 == n && n > 1 {
                (values[n - 2] + v) / 2.0
            } else {
                v
            }
        })
        .collect()
}

/// Compounds a sequence of yearly percentage returns into cumulative growth
/// over the starting value, in percent. The first point is the baseline and
/// renders as 0; its return still compounds into every later point.
pub fn cumulative_growth(returns: &[f64]) -> Vec<f64> {
    let mut factor = 1.0;
    returns
        .iter()
        .enumerate()
        .map(|(i, r)| {
            factor *= 1.0 + r / 100.0;
            if i == 0 { 0.0 } else { (factor - 1.0) * 100.0 }
        })
        .collect()
}

/// Recomputes `percentage` for each slice as its share of the summed
/// amounts. A zero (or empty) total yields all-zero percentages rather than
/// dividing by zero.
pub fn normalize_allocation(slices: &[AllocationSlice]) -> Vec<AllocationSlice> {
    let total: f64 = slices.iter().map(|s| s.amount).sum();
    slices
        .iter()
        .map(|s| AllocationSlice {
            kind: s.kind.clone(),
            amount: s.amount,
            percentage: if total > 0.0 {
                s.amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Projects a balance forward with monthly compounding and a fixed monthly
/// contribution. Returns `months + 1` points, starting with the current
/// balance. `annual_rate` is in percent.
pub fn project_balance(
    current: f64,
    monthly_contribution: f64,
    annual_rate: f64,
    months: u32,
) -> Vec<f64> {
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let mut balance = current;
    let mut points = Vec::with_capacity(months as usize + 1);
    for _ in 0..=months {
        points.push(balance);
        balance = balance * (1.0 + monthly_rate) + monthly_contribution;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(kind: &str, amount: f64) -> AllocationSlice {
        AllocationSlice {
            kind: kind.to_string(),
            amount,
            percentage: 0.0,
        }
    }

    #[test]
    fn test_moving_average_length_matches_input() {
        for n in 0..6 {
            let values: Vec<f64> = (0..n).map(|i| i as f64).collect();
            assert_eq!(moving_average(&values).len(), n);
        }
    }

    #[test]
    fn test_moving_average_interior_and_edges() {
        let values = [3.0, 6.0, 9.0, 12.0];
        let avg = moving_average(&values);

        // Edges shrink to 2-point averages.
        assert_eq!(avg[0], 4.5);
        assert_eq!(avg[3], 10.5);
        // Interior points use the full 3-point window.
        assert_eq!(avg[1], 6.0);
        assert_eq!(avg[2], 9.0);
    }

    #[test]
    fn test_moving_average_singleton() {
        assert_eq!(moving_average(&[42.0]), vec![42.0]);
    }

    #[test]
    fn test_cumulative_growth_baseline_is_zero() {
        let growth = cumulative_growth(&[7.2, -2.1, 12.5]);
        assert_eq!(growth[0], 0.0);
    }

    #[test]
    fn test_cumulative_growth_compounds_all_prior_returns() {
        let growth = cumulative_growth(&[10.0, 10.0]);
        // Second point compounds both returns: 1.1 * 1.1 = 1.21.
        assert!((growth[1] - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_growth_sign_consistency() {
        let gains = cumulative_growth(&[5.0, 5.0, 5.0]);
        assert!(gains.windows(2).all(|w| w[1] >= w[0]));

        let losses = cumulative_growth(&[-5.0, -5.0, -5.0]);
        assert!(losses.windows(2).skip(1).all(|w| w[1] <= w[0]));
        assert!(losses[2] < 0.0);
    }

    #[test]
    fn test_normalize_allocation_sums_to_hundred() {
        let slices = vec![slice("Stocks", 75000.0), slice("Bonds", 25000.0)];
        let normalized = normalize_allocation(&slices);

        let total_pct: f64 = normalized.iter().map(|s| s.percentage).sum();
        assert!((total_pct - 100.0).abs() < 1e-9);
        assert!((normalized[0].percentage - 75.0).abs() < 1e-9);
        assert!((normalized[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_allocation_zero_total() {
        let slices = vec![slice("Stocks", 0.0), slice("Bonds", 0.0)];
        let normalized = normalize_allocation(&slices);
        assert!(normalized.iter().all(|s| s.percentage == 0.0));
    }

    #[test]
    fn test_project_balance_point_count_and_monotonicity() {
        let points = project_balance(10000.0, 500.0, 1.5, 60);
        assert_eq!(points.len(), 61);
        assert_eq!(points[0], 10000.0);
        assert!(points.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_project_balance_zero_rate_is_linear() {
        let points = project_balance(1000.0, 100.0, 0.0, 3);
        assert_eq!(points, vec![1000.0, 1100.0, 1200.0, 1300.0]);
    }
}
