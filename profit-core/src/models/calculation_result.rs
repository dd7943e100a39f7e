use serde::{Deserialize, Serialize};

/// Outcome of a single profit calculation.
///
/// Monetary fields are in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Earnings before tax: revenue minus expenses, exact.
    pub ebt: i128,

    /// Profit after tax. Fractional when the tax multiplication does not
    /// land on a whole cent.
    pub profit: f64,

    /// After-tax profit divided by revenue, as a fraction (0.4025 = 40.25%).
    /// Zero when revenue is zero.
    pub profit_ratio: f64,
}
