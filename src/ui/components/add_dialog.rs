//! Add-restaurant dialog

use iced::widget::{Space, button, column, text, text_input};
use iced::{Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::{theme, widgets};

pub fn view<'a>(input: &'a str, opacity: f32, locale: Locale) -> Element<'a, Message> {
    if opacity < 0.01 {
        return Space::new().height(0).into();
    }

    let title = text(locale.get(Key::AddDialogTitle))
        .size(18)
        .color(theme::TEXT_PRIMARY)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let label = text(locale.get(Key::AddDialogNameLabel))
        .size(14)
        .color(theme::TEXT_SECONDARY);

    // Enter submits, same as the confirm button; duplicates and empty
    // input are rejected upstream and simply leave the dialog open
    let name_input = text_input(locale.get(Key::AddDialogPlaceholder), input)
        .id(iced::widget::Id::new("add_restaurant_input"))
        .on_input(Message::AddInputChanged)
        .on_submit(Message::AddSubmit)
        .padding(12)
        .size(15)
        .style(theme::dialog_input);

    let confirm = button(
        text(locale.get(Key::AddDialogConfirm))
            .size(15)
            .center()
            .color(theme::TEXT_PRIMARY),
    )
    .width(Fill)
    .padding(12)
    .style(theme::primary_button)
    .on_press(Message::AddSubmit);

    let content = column![
        title,
        Space::new().height(16),
        label,
        Space::new().height(6),
        name_input,
        Space::new().height(16),
        confirm,
    ]
    .width(380)
    .padding(24);

    widgets::modal(content.into(), opacity, Message::CloseAddDialog)
}
