use std::fmt;

use profit_core::{calculate_profit, format_summary};
use tracing::{debug, warn};

use crate::utils::{ParseInputError, parse_cents, parse_tax_rate};

/// Shown instead of a result when any field fails to parse.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers for all fields.";

pub const REVENUE_PLACEHOLDER: &str = "Enter Revenue in cents (e.g. 10000000) here...";
pub const EXPENSES_PLACEHOLDER: &str = "Enter Expenses in cents (e.g. 5000000) here...";
pub const TAX_RATE_PLACEHOLDER: &str = "Enter Tax rate (%) (e.g. 19.5) here...";

/// Which form field a parse error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitField {
    Revenue,
    Expenses,
    TaxRate,
}

impl ProfitField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Expenses => "Expenses",
            Self::TaxRate => "Tax rate",
        }
    }
}

/// Values parsed out of a [`ProfitFormModel`], ready for the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitInputs {
    pub revenue_cents: i64,
    pub expenses_cents: i64,
    pub tax_rate_percent: f64,
}

/// Raw text of the profit form plus the text currently shown as the result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfitFormModel {
    pub revenue: String,
    pub expenses: String,
    pub tax_rate: String,
    pub result: String,
}

impl ProfitFormModel {
    pub fn new(
        revenue: impl Into<String>,
        expenses: impl Into<String>,
        tax_rate: impl Into<String>,
    ) -> Self {
        Self {
            revenue: revenue.into(),
            expenses: expenses.into(),
            tax_rate: tax_rate.into(),
            result: String::new(),
        }
    }

    /// Parses all three fields, reporting every field that failed.
    pub fn parse(&self) -> Result<ProfitInputs, Vec<(ProfitField, ParseInputError)>> {
        let mut errors = Vec::new();

        let revenue = parse_cents(&self.revenue)
            .map_err(|e| errors.push((ProfitField::Revenue, e)))
            .ok();
        let expenses = parse_cents(&self.expenses)
            .map_err(|e| errors.push((ProfitField::Expenses, e)))
            .ok();
        let tax_rate = parse_tax_rate(&self.tax_rate)
            .map_err(|e| errors.push((ProfitField::TaxRate, e)))
            .ok();

        match (revenue, expenses, tax_rate) {
            (Some(revenue_cents), Some(expenses_cents), Some(tax_rate_percent)) => {
                Ok(ProfitInputs {
                    revenue_cents,
                    expenses_cents,
                    tax_rate_percent,
                })
            }
            _ => Err(errors),
        }
    }

    /// Runs the calculation and stores the text to display.
    ///
    /// If any field is invalid, the result is [`INVALID_INPUT_MESSAGE`] and
    /// nothing is calculated.
    pub fn calculate(&mut self) -> &str {
        self.result = match self.parse() {
            Ok(inputs) => {
                let result = calculate_profit(
                    inputs.revenue_cents,
                    inputs.expenses_cents,
                    inputs.tax_rate_percent,
                );
                debug!(?inputs, ?result, "Calculation complete");
                format_summary(&result)
            }
            Err(errors) => {
                for (field, error) in &errors {
                    warn!(field = field.label(), %error, "validation error");
                }
                INVALID_INPUT_MESSAGE.to_string()
            }
        };
        &self.result
    }

    /// Clears every input and the displayed result.
    pub fn reset(&mut self) {
        self.revenue.clear();
        self.expenses.clear();
        self.tax_rate.clear();
        self.result.clear();
    }
}

impl fmt::Display for ProfitFormModel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Revenue:  {}", self.revenue)?;
        writeln!(f, "Expenses: {}", self.expenses)?;
        write!(f, "Tax rate: {}", self.tax_rate)
    }
}
