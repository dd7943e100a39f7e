//! After-tax profit calculation.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | EBT: revenue minus expenses |
//! | 2    | Profit: EBT × (1 − tax rate / 100) |
//! | 3    | Profit ratio: profit / revenue (0 when revenue is 0) |
//!
//! All amounts are in the smallest currency unit. Inputs are never
//! rejected: negative amounts and tax rates outside 0–100% are computed
//! as given.
//!
//! # Example
//!
//! ```
//! use profit_core::calculate_profit;
//!
//! let result = calculate_profit(10_000_000, 5_000_000, 19.5);
//!
//! assert_eq!(result.ebt, 5_000_000);
//! assert!((result.profit - 4_025_000.0).abs() < 0.01);
//! assert!((result.profit_ratio - 0.4025).abs() < 0.001);
//! ```

use tracing::{debug, warn};

use crate::CalculationResult;

/// Computes earnings before tax, after-tax profit and profit ratio.
///
/// # Arguments
///
/// * `revenue` - Revenue in cents
/// * `expenses` - Expenses in cents
/// * `tax_rate_percent` - Tax rate as a percentage (19.5 = 19.5%)
pub fn calculate_profit(
    revenue: i64,
    expenses: i64,
    tax_rate_percent: f64,
) -> CalculationResult {
    if !(0.0..=100.0).contains(&tax_rate_percent) {
        warn!(
            tax_rate_percent,
            "Tax rate outside 0-100%; computing as given"
        );
    }

    let ebt = earnings_before_tax(revenue, expenses);
    let profit = profit_after_tax(ebt, tax_rate_percent);
    let profit_ratio = profit_ratio(profit, revenue);

    debug!(
        revenue,
        expenses,
        tax_rate_percent,
        ebt = %ebt,
        profit,
        profit_ratio,
        "Profit calculated"
    );

    CalculationResult {
        ebt,
        profit,
        profit_ratio,
    }
}

/// Revenue minus expenses, widened so that no pair of inputs can overflow.
fn earnings_before_tax(
    revenue: i64,
    expenses: i64,
) -> i128 {
    i128::from(revenue) - i128::from(expenses)
}

fn profit_after_tax(
    ebt: i128,
    tax_rate_percent: f64,
) -> f64 {
    ebt as f64 * (1.0 - tax_rate_percent / 100.0)
}

/// Profit as a fraction of revenue. Zero revenue yields a ratio of zero.
fn profit_ratio(
    profit: f64,
    revenue: i64,
) -> f64 {
    if revenue == 0 {
        warn!(profit, "Revenue is zero; profit ratio reported as 0");
        return 0.0;
    }
    profit / revenue as f64
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    const PROFIT_TOLERANCE: f64 = 0.01;
    const RATIO_TOLERANCE: f64 = 0.001;

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn assert_result(
        result: CalculationResult,
        ebt: i128,
        profit: f64,
        profit_ratio: f64,
    ) {
        assert_eq!(result.ebt, ebt);
        assert!(
            (result.profit - profit).abs() <= PROFIT_TOLERANCE,
            "profit = {:.2}, want {:.2}",
            result.profit,
            profit
        );
        assert!(
            (result.profit_ratio - profit_ratio).abs() <= RATIO_TOLERANCE,
            "profit_ratio = {:.6}, want {:.6}",
            result.profit_ratio,
            profit_ratio
        );
    }

    // =========================================================================
    // calculate_profit tests
    // =========================================================================

    #[test]
    fn calculate_profit_basic() {
        let _guard = init_test_tracing();

        let result = calculate_profit(10_000_000, 5_000_000, 19.5);

        assert_result(result, 5_000_000, 4_025_000.0, 0.4025);
    }

    #[test]
    fn calculate_profit_zero_tax_rate() {
        let result = calculate_profit(1_000_000, 600_000, 0.0);

        assert_result(result, 400_000, 400_000.0, 0.4);
    }

    #[test]
    fn calculate_profit_high_tax_rate() {
        let result = calculate_profit(2_000_000, 1_000_000, 50.0);

        assert_result(result, 1_000_000, 500_000.0, 0.25);
    }

    #[test]
    fn calculate_profit_loss_is_reduced_by_tax() {
        let result = calculate_profit(500_000, 800_000, 20.0);

        assert_result(result, -300_000, -240_000.0, -0.48);
    }

    #[test]
    fn calculate_profit_zero_revenue_gives_zero_ratio() {
        let _guard = init_test_tracing();

        let result = calculate_profit(0, 100_000, 20.0);

        assert_result(result, -100_000, -80_000.0, 0.0);
        assert_eq!(result.profit_ratio, 0.0);
    }

    #[test]
    fn calculate_profit_zero_expenses() {
        let result = calculate_profit(1_000_000, 0, 25.0);

        assert_result(result, 1_000_000, 750_000.0, 0.75);
    }

    #[test]
    fn calculate_profit_decimal_tax_rate() {
        let result = calculate_profit(5_000_000, 3_000_000, 19.25);

        assert_result(result, 2_000_000, 1_615_000.0, 0.323);
    }

    #[test]
    fn calculate_profit_negative_inputs() {
        let result = calculate_profit(-1000, -500, 20.0);

        // -400 / -1000
        assert_result(result, -500, -400.0, 0.4);
    }

    #[test]
    fn calculate_profit_full_tax_leaves_nothing() {
        let result = calculate_profit(1_000_000, 500_000, 100.0);

        assert_result(result, 500_000, 0.0, 0.0);
    }

    #[test]
    fn calculate_profit_tax_above_hundred_flips_sign() {
        let _guard = init_test_tracing();

        let result = calculate_profit(1_000_000, 500_000, 150.0);

        assert_result(result, 500_000, -250_000.0, -0.25);
    }

    #[test]
    fn calculate_profit_negative_tax_rate_adds_to_profit() {
        let result = calculate_profit(1_000_000, 500_000, -10.0);

        assert_result(result, 500_000, 550_000.0, 0.55);
    }

    #[test]
    fn calculate_profit_handles_extreme_integers() {
        let result = calculate_profit(i64::MAX, i64::MIN, 0.0);

        assert_eq!(result.ebt, i128::from(i64::MAX) - i128::from(i64::MIN));
        assert!(result.profit.is_finite());
        assert!(result.profit_ratio.is_finite());
    }

    #[test]
    fn calculate_profit_max_i32_revenue() {
        let result = calculate_profit(i64::from(i32::MAX), 0, 0.0);

        assert_eq!(result.ebt, i128::from(i32::MAX));
    }

    // =========================================================================
    // step helper tests
    // =========================================================================

    #[test]
    fn earnings_before_tax_subtracts_exactly() {
        assert_eq!(earnings_before_tax(7, 10), -3);
        assert_eq!(earnings_before_tax(i64::MIN, 1), i128::from(i64::MIN) - 1);
    }

    #[test]
    fn profit_ratio_never_divides_by_zero() {
        let ratio = profit_ratio(-80_000.0, 0);

        assert_eq!(ratio, 0.0);
        assert!(!ratio.is_nan());
    }
}
