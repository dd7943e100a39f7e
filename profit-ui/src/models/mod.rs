mod profit_form;

pub use profit_form::{
    EXPENSES_PLACEHOLDER, INVALID_INPUT_MESSAGE, ProfitField, ProfitFormModel, ProfitInputs,
    REVENUE_PLACEHOLDER, TAX_RATE_PLACEHOLDER,
};
