#![warn(clippy::all)]

use lifepad::gui::{App, Config};

fn main() -> eframe::Result<()> {
    use eframe::egui::ViewportBuilder;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(Config::window_size())
            .with_resizable(false),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
