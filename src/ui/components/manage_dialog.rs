//! Manage-restaurants dialog: list with per-entry delete

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::{theme, widgets};

pub fn view<'a>(names: &'a [String], opacity: f32, locale: Locale) -> Element<'a, Message> {
    if opacity < 0.01 {
        return Space::new().height(0).into();
    }

    let title = text(locale.get(Key::ManageDialogTitle))
        .size(18)
        .color(theme::TEXT_PRIMARY)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let list: Element<'a, Message> = if names.is_empty() {
        text(locale.get(Key::ManageEmpty))
            .size(14)
            .color(theme::TEXT_MUTED)
            .into()
    } else {
        let rows = names.iter().map(|name| {
            let delete = button(text("✕").size(14))
                .padding([4, 10])
                .style(theme::danger_button)
                .on_press(Message::RemoveRestaurant(name.clone()));

            container(
                row![
                    text(name.as_str()).size(14).color(theme::TEXT_PRIMARY),
                    Space::new().width(Fill),
                    delete,
                ]
                .align_y(Alignment::Center),
            )
            .width(Fill)
            .padding([8, 12])
            .style(theme::manage_row)
            .into()
        });

        scrollable(column(rows).spacing(8).width(Fill))
            .height(320)
            .into()
    };

    let close = button(
        text(locale.get(Key::Cancel))
            .size(14)
            .center()
            .color(theme::TEXT_SECONDARY),
    )
    .width(Fill)
    .padding(10)
    .style(theme::ghost_button)
    .on_press(Message::CloseManageDialog);

    let content = column![
        title,
        Space::new().height(16),
        list,
        Space::new().height(16),
        close,
    ]
    .width(420)
    .padding(24);

    widgets::modal(content.into(), opacity, Message::CloseManageDialog)
}
