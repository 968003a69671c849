//! Modal scaffold: dimmed backdrop, centered dialog box, event blocking
//!
//! Clicking the backdrop emits `on_dismiss`. The whole overlay is opaque
//! so no event leaks through to the page underneath.

use iced::mouse::Interaction;
use iced::widget::{container, mouse_area, opaque};
use iced::{Color, Element, Fill};

use crate::ui::theme;

/// Wrap dialog content in a dimmed, dismissable backdrop.
///
/// `opacity` drives the fade-in of both the backdrop tint and the dialog
/// surface; pass the owning fade animation's progress.
pub fn modal<'a, Message: Clone + 'a>(
    content: Element<'a, Message>,
    opacity: f32,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let dialog_box = container(content)
        .style(move |theme| iced::widget::container::Style {
            background: theme::dialog_surface(theme).background.map(|bg| match bg {
                iced::Background::Color(c) => {
                    iced::Background::Color(theme::with_alpha(c, opacity))
                }
                other => other,
            }),
            border: iced::Border {
                color: theme::with_alpha(theme::DIVIDER, opacity),
                ..theme::dialog_surface(theme).border
            },
            ..Default::default()
        });

    let backdrop = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                0.0,
                0.0,
                0.0,
                0.6 * opacity,
            ))),
            ..Default::default()
        });

    // mouse_area resets the cursor and catches backdrop clicks
    let event_blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(on_dismiss);

    opaque(event_blocker).into()
}
