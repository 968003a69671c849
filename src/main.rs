//! LunchSpin - a spinning lunch restaurant picker
//! Built with iced for a sleek, dark mode UI

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod i18n;
mod spin;
mod ui;

use app::App;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting LunchSpin");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size(iced::Size::new(1280.0, 800.0))
        .antialiasing(true)
        .run()
}
