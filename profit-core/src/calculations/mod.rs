//! Profit calculations.
//!
//! This module turns revenue, expenses and a tax rate into earnings before
//! tax, after-tax profit and the profit ratio.

pub mod common;
pub mod profit;

pub use profit::calculate_profit;
