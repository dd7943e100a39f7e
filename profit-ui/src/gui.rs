use gpui::{
    AnyView, App, AppContext, Application, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::{
    Quit,
    components::{ProfitCalculatorForm, WindowPreferences},
    quit,
};

const WINDOW_TITLE: &str = "Profit Calculator";

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: WINDOW_TITLE.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);

    // Single-window app: closing it ends the process on every platform.
    app_cx
        .on_window_closed(|cx| {
            info!("Window closed");
            quit(&Quit, cx);
        })
        .detach();
}

/// Opens the calculator window and runs the event loop until quit.
pub fn run_window(preferences: WindowPreferences) {
    Application::new().run(move |cx: &mut App| {
        setup_app(cx);

        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                preferences.size,
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(WINDOW_TITLE.into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let form = cx.new(|cx| ProfitCalculatorForm::new(window, cx));
            cx.new(|cx| Root::new(AnyView::from(form), window, cx))
        });

        match opened {
            Ok(_) => info!(title = WINDOW_TITLE, "Window opened"),
            Err(error) => {
                error!(?error, "failed to open window");
                cx.quit();
            }
        }
    });
}
