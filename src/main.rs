//! Fruitpicker - main entry point for the gpui fruit selector window.

use anyhow::Result;
use fruitpicker::app::FruitSelector;
use fruitpicker::render::TITLE;
use fruitpicker::settings::Settings;
use fruitpicker::logging;
use gpui::*;

fn main() -> Result<()> {
    // The settings pick the final filter, but a broken file must still be reported
    let settings = logging::with_bootstrap_logging(Settings::load);
    logging::init(&settings);
    tracing::info!("Starting fruit selector");

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(960.0), px(720.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(TITLE.into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, move |_window, cx| {
            cx.new(|cx| FruitSelector::new(settings, cx))
        });
        match opened {
            Ok(_) => cx.activate(true),
            Err(e) => {
                tracing::error!(error = %e, "Failed to open window");
                cx.quit();
            }
        }
    });

    Ok(())
}
