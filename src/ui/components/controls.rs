//! Spin controls: start/spinning button, result banner, reset

use iced::widget::{Space, button, column, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::spin::SpinPhase;
use crate::ui::theme;

/// Build the control block under the strip for the current phase.
///
/// The start button is the primary guard against spinning an empty
/// roster: it is disabled whenever no names exist. The engine's own
/// start guard backs it up.
pub fn view<'a>(
    phase: SpinPhase,
    selection: Option<&'a str>,
    roster_is_empty: bool,
    result_pop: f32,
    locale: Locale,
) -> Element<'a, Message> {
    match phase {
        SpinPhase::Idle => button(text(locale.get(Key::SpinStart)).size(20))
            .padding([14, 32])
            .style(theme::primary_button)
            .on_press_maybe((!roster_is_empty).then_some(Message::SpinStart))
            .into(),

        SpinPhase::Spinning => button(text(locale.get(Key::Spinning)).size(20))
            .padding([14, 32])
            .style(theme::primary_button)
            .into(),

        SpinPhase::Result => {
            let headline = text(locale.get(Key::ResultTitle))
                .size(26)
                .color(theme::with_alpha(theme::ACCENT_YELLOW, result_pop.max(0.2)))
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                });

            // Degraded completion (no cards at settle time) has no name
            let winner = text(selection.unwrap_or("—").to_string())
                .size(34)
                .color(theme::ACCENT_ORANGE)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                });

            let again = button(text(locale.get(Key::SpinAgain)).size(18))
                .padding([12, 28])
                .style(theme::reset_button)
                .on_press(Message::SpinReset);

            column![headline, Space::new().height(6), winner, Space::new().height(16), again]
                .align_x(Alignment::Center)
                .into()
        }
    }
}
