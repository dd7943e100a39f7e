pub mod calculations;
pub mod format;
pub mod models;

pub use calculations::calculate_profit;
pub use format::{format_currency, format_summary};
pub use models::*;
