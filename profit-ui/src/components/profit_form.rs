use gpui::{
    App, AppContext, ClickEvent, Context, Div, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window, div,
};
use gpui_component::{
    h_flex,
    input::{Input, InputState},
    v_flex,
};
use tracing::debug;

use crate::{
    components::make_button,
    models::{EXPENSES_PLACEHOLDER, ProfitFormModel, REVENUE_PLACEHOLDER, TAX_RATE_PLACEHOLDER},
};

/// Revenue, expenses and tax rate inputs with Calculate / Reset buttons
/// and the result text underneath.
pub struct ProfitCalculatorForm {
    revenue: Entity<InputState>,
    expenses: Entity<InputState>,
    tax_rate: Entity<InputState>,
    result: SharedString,
}

impl ProfitCalculatorForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            revenue: make_input_state(REVENUE_PLACEHOLDER, window, cx),
            expenses: make_input_state(EXPENSES_PLACEHOLDER, window, cx),
            tax_rate: make_input_state(TAX_RATE_PLACEHOLDER, window, cx),
            result: SharedString::default(),
        }
    }

    /// Collects the current field text into a [`ProfitFormModel`].
    pub fn to_model(
        &self,
        cx: &App,
    ) -> ProfitFormModel {
        ProfitFormModel::new(
            self.revenue.read(cx).value().as_str(),
            self.expenses.read(cx).value().as_str(),
            self.tax_rate.read(cx).value().as_str(),
        )
    }

    fn calculate(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        let mut model = self.to_model(cx);
        debug!(%model, "Calculate pressed");
        self.result = model.calculate().to_string().into();
        cx.notify();
    }

    fn reset(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        for input in [&self.revenue, &self.expenses, &self.tax_rate] {
            input.update(cx, |state, cx| state.set_value("", window, cx));
        }
        self.result = SharedString::default();
        cx.notify();
    }
}

impl Render for ProfitCalculatorForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let calculate = cx.listener(|this, _: &ClickEvent, _window, cx| this.calculate(cx));
        let reset = cx.listener(|this, _: &ClickEvent, window, cx| this.reset(window, cx));

        v_flex()
            .gap_2()
            .size_full()
            .p_5()
            .child(div().text_xl().child("Profit Calculator"))
            .child(make_input_row(&self.revenue))
            .child(make_input_row(&self.expenses))
            .child(make_input_row(&self.tax_rate))
            .child(
                h_flex()
                    .gap_4()
                    .child(make_button("calculate", "Calculate", calculate))
                    .child(make_button("reset", "Reset", reset)),
            )
            .child(div().child(self.result.clone()))
    }
}

fn make_input_state(
    placeholder: &'static str,
    window: &mut Window,
    cx: &mut Context<ProfitCalculatorForm>,
) -> Entity<InputState> {
    cx.new(|closure_cx| InputState::new(window, closure_cx).placeholder(placeholder))
}

fn make_input_row(state: &Entity<InputState>) -> Div {
    h_flex()
        .items_center()
        .rounded_md()
        .border_1()
        .child(Input::new(state).flex_grow())
}
