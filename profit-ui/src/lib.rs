#[cfg(feature = "gui")]
pub mod components;
pub mod config;
#[cfg(feature = "gui")]
pub mod gui;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod utils;

#[cfg(feature = "gui")]
use gpui::{App, actions};
#[cfg(feature = "gui")]
pub use gui::run_window;
#[cfg(feature = "gui")]
use tracing::info;

#[cfg(feature = "gui")]
actions!(profit_calculator, [Quit]);

#[cfg(feature = "gui")]
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
