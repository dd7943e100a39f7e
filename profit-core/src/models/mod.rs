mod calculation_result;

pub use calculation_result::CalculationResult;
