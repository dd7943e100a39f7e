//! Display formatting for calculation results.
//!
//! Amounts handed to [`format_currency`] are already in major units; the
//! division by 100 happens at the call site, never in here.

use std::fmt;

use rust_decimal::Decimal;

use crate::{CalculationResult, calculations::common::round_half_up};

/// Renders a major-unit amount with two decimals and comma-grouped digits.
///
/// Rounding is half away from zero at two decimal places and operates on
/// the exact binary value of `value`: `99.999` becomes `"100.00"`, while
/// `1.005` (stored as 1.00499...) becomes `"1.00"`. An amount that rounds
/// to zero is never printed with a minus sign.
///
/// # Examples
///
/// ```
/// use profit_core::format_currency;
///
/// assert_eq!(format_currency(50000.00), "50,000.00");
/// assert_eq!(format_currency(-1234567.89), "-1,234,567.89");
/// assert_eq!(format_currency(99.999), "100.00");
/// ```
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = match Decimal::from_f64_retain(value.abs()) {
        Some(decimal) => format!("{:.2}", round_half_up(decimal)),
        // Outside the range of Decimal; the float is integral at this size.
        None => format!("{:.2}", value.abs()),
    };

    let (int_part, frac_part) = magnitude
        .split_once('.')
        .unwrap_or((magnitude.as_str(), "00"));

    let rounds_to_zero = !magnitude.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if value < 0.0 && !rounds_to_zero { "-" } else { "" };

    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

/// Inserts a comma between every group of three digits, counted from the right.
///
/// ```
/// use profit_core::format::group_thousands;
///
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// assert_eq!(group_thousands("100"), "100");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders the three-line summary shown to the user.
///
/// ```text
/// EBT: 5000000 cents (50,000.00 euros)
/// Profit: 4025000 cents (40,250.00 euros)
/// Profit Ratio: 40.25%
/// ```
pub fn format_summary(result: &CalculationResult) -> String {
    result.to_string()
}

impl fmt::Display for CalculationResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "EBT: {} cents ({} euros)",
            self.ebt,
            format_currency(self.ebt as f64 / 100.0)
        )?;
        writeln!(
            f,
            "Profit: {:.0} cents ({} euros)",
            self.profit,
            format_currency(self.profit / 100.0)
        )?;
        write!(f, "Profit Ratio: {:.2}%", self.profit_ratio * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // format_currency tests
    // =========================================================================

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(50000.00), "50,000.00");
    }

    #[test]
    fn format_currency_groups_millions() {
        assert_eq!(format_currency(1500000.50), "1,500,000.50");
    }

    #[test]
    fn format_currency_small_amount_has_no_separator() {
        assert_eq!(format_currency(123.45), "123.45");
    }

    #[test]
    fn format_currency_zero() {
        assert_eq!(format_currency(0.00), "0.00");
    }

    #[test]
    fn format_currency_negative_amount() {
        assert_eq!(format_currency(-2500.75), "-2,500.75");
    }

    #[test]
    fn format_currency_large_negative_amount() {
        assert_eq!(format_currency(-1234567.89), "-1,234,567.89");
    }

    #[test]
    fn format_currency_pads_whole_amounts() {
        assert_eq!(format_currency(1000.00), "1,000.00");
        assert_eq!(format_currency(5.00), "5.00");
    }

    #[test]
    fn format_currency_rounding_carries_into_integer_part() {
        assert_eq!(format_currency(99.999), "100.00");
        assert_eq!(format_currency(9999.999), "10,000.00");
    }

    #[test]
    fn format_currency_rounds_exact_midpoint_away_from_zero() {
        assert_eq!(format_currency(0.125), "0.13");
        assert_eq!(format_currency(-0.125), "-0.13");
        assert_eq!(format_currency(2.5), "2.50");
    }

    #[test]
    fn format_currency_rounds_stored_value_not_printed_digits() {
        // Each literal is stored just below its printed midpoint.
        assert_eq!(format_currency(1.005), "1.00");
        assert_eq!(format_currency(-1.005), "-1.00");
        assert_eq!(format_currency(2.675), "2.67");
    }

    #[test]
    fn format_currency_keeps_sign_below_one() {
        assert_eq!(format_currency(-0.5), "-0.50");
        assert_eq!(format_currency(-999.99), "-999.99");
    }

    #[test]
    fn format_currency_drops_sign_when_rounded_to_zero() {
        assert_eq!(format_currency(-0.001), "0.00");
        assert_eq!(format_currency(-0.0), "0.00");
    }

    #[test]
    fn format_currency_beyond_decimal_range_still_groups() {
        let formatted = format_currency(1e30);

        assert!(formatted.starts_with("1,000,000,000,000,000,0"));
        assert!(formatted.ends_with(".00"));
        assert!(format_currency(-1e30).starts_with("-1,"));
    }

    #[test]
    fn format_currency_non_finite_is_passed_through() {
        assert_eq!(format_currency(f64::NAN), "NaN");
        assert_eq!(format_currency(f64::INFINITY), "inf");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-inf");
    }

    // =========================================================================
    // group_thousands tests
    // =========================================================================

    #[test]
    fn group_thousands_boundaries() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("100000"), "100,000");
        assert_eq!(group_thousands("1000000"), "1,000,000");
    }

    // =========================================================================
    // format_summary tests
    // =========================================================================

    #[test]
    fn format_summary_matches_template() {
        let result = CalculationResult {
            ebt: 5_000_000,
            profit: 4_025_000.0,
            profit_ratio: 0.4025,
        };

        let expected = "EBT: 5000000 cents (50,000.00 euros)\n\
                        Profit: 4025000 cents (40,250.00 euros)\n\
                        Profit Ratio: 40.25%";

        assert_eq!(format_summary(&result), expected);
    }

    #[test]
    fn format_summary_negative_values() {
        let result = CalculationResult {
            ebt: -300_000,
            profit: -240_000.0,
            profit_ratio: -0.48,
        };

        let expected = "EBT: -300000 cents (-3,000.00 euros)\n\
                        Profit: -240000 cents (-2,400.00 euros)\n\
                        Profit Ratio: -48.00%";

        assert_eq!(format_summary(&result), expected);
    }

    #[test]
    fn format_summary_rounds_fractional_profit_cents() {
        let result = CalculationResult {
            ebt: 1001,
            profit: 800.8,
            profit_ratio: 0.08008,
        };

        let expected = "EBT: 1001 cents (10.01 euros)\n\
                        Profit: 801 cents (8.01 euros)\n\
                        Profit Ratio: 8.01%";

        assert_eq!(format_summary(&result), expected);
    }

    #[test]
    fn format_summary_profit_line_agrees_on_half_cent() {
        let result = crate::calculate_profit(201, 0, 50.0);

        let expected = "EBT: 201 cents (2.01 euros)\n\
                        Profit: 100 cents (1.00 euros)\n\
                        Profit Ratio: 50.00%";

        assert_eq!(format_summary(&result), expected);
    }
}
