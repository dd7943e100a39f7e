//! Line-oriented stand-in for the window, used when no display is wanted.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::models::{
    EXPENSES_PLACEHOLDER, ProfitFormModel, REVENUE_PLACEHOLDER, TAX_RATE_PLACEHOLDER,
};

/// Prompts for the three form fields, prints the result, resets, and repeats
/// until `input` is exhausted.
pub fn run_prompt(
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut form = ProfitFormModel::default();

    loop {
        let Some(revenue) = prompt(&mut input, &mut output, REVENUE_PLACEHOLDER)? else {
            break;
        };
        let Some(expenses) = prompt(&mut input, &mut output, EXPENSES_PLACEHOLDER)? else {
            break;
        };
        let Some(tax_rate) = prompt(&mut input, &mut output, TAX_RATE_PLACEHOLDER)? else {
            break;
        };

        form.revenue = revenue;
        form.expenses = expenses;
        form.tax_rate = tax_rate;

        writeln!(output, "{}\n", form.calculate())?;
        form.reset();
    }

    debug!("Input closed; leaving prompt");
    Ok(())
}

/// Runs a single calculation from command line values and returns the
/// text to print. A missing value counts as an empty field.
pub fn calculate_once(
    revenue: Option<&str>,
    expenses: Option<&str>,
    tax_rate: Option<&str>,
) -> String {
    let mut form = ProfitFormModel::new(
        revenue.unwrap_or_default(),
        expenses.unwrap_or_default(),
        tax_rate.unwrap_or_default(),
    );
    form.calculate().to_string()
}

/// Writes `label` and reads one line. `None` at end of input.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label} ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
