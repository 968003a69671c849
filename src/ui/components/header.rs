//! Page header: title and subtitle

use iced::widget::{Space, column, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

pub fn view(locale: Locale) -> Element<'static, Message> {
    let title = text(locale.get(Key::AppTitle))
        .size(42)
        .color(theme::ACCENT_ORANGE)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let subtitle = text(locale.get(Key::AppSubtitle))
        .size(18)
        .color(theme::TEXT_SECONDARY);

    column![title, Space::new().height(8), subtitle]
        .align_x(Alignment::Center)
        .into()
}
