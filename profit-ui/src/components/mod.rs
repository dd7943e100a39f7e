pub mod profit_form;

use gpui::{App, ClickEvent, Pixels, SharedString, Size, Styled, Window, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};

pub use profit_form::ProfitCalculatorForm;

use crate::config::WindowConfig;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        WindowConfig::default().into()
    }
}

impl From<WindowConfig> for WindowPreferences {
    fn from(config: WindowConfig) -> Self {
        Self {
            size: Size {
                width: px(config.width),
                height: px(config.height),
            },
        }
    }
}

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .w(px(140.))
        .label(label.into())
        .on_click(on_click)
}
