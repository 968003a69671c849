//! The scrolling restaurant track with its fixed center marker
//!
//! The strip renders the tripled track inside a horizontal scrollable
//! whose offset is written by the spin engine (via `operation::scroll_to`
//! tasks); nothing here reads the scroll position back. The geometry the
//! engine reasons about is derived from the same card metrics used for
//! layout, so the on-screen card under the marker is the one the engine
//! reports.

use iced::widget::{Space, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::spin::track::{CARD_GAP, CARD_WIDTH, TRACK_PADDING};
use crate::spin::{SpinPhase, TrackSlot};
use crate::ui::theme;

/// Scrollable id targeted by the engine's offset writes
pub const SCROLL_ID: &str = "track_scroll";

/// Horizontal page margin around the strip
pub const STRIP_MARGIN: f32 = 32.0;
/// Inset of the strip panel around the scrollable and marker stack
pub const PANEL_PADDING: f32 = 8.0;

/// Card height
const CARD_HEIGHT: f32 = 128.0;
/// Vertical breathing room above/below the cards
const STRIP_VPAD: f32 = 32.0;

/// Track viewport width for a given window width.
///
/// Every horizontal inset between the window edge and the scrollable
/// must be accounted for here, or the engine's marker drifts off the
/// drawn marker line.
pub fn viewport_width(window_width: f32) -> f32 {
    (window_width - 2.0 * (STRIP_MARGIN + PANEL_PADDING)).max(0.0)
}

fn card<'a>(slot: &'a TrackSlot, winning: bool, glow: f32) -> Element<'a, Message> {
    let label = text(slot.name.as_str())
        .size(if winning { 17 } else { 15 })
        .center()
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        });

    container(label)
        .width(CARD_WIDTH)
        .height(CARD_HEIGHT)
        .center_x(CARD_WIDTH)
        .center_y(CARD_HEIGHT)
        .padding(12)
        .style(move |theme| {
            if winning {
                theme::card_winning(glow)
            } else {
                theme::card(theme)
            }
        })
        .into()
}

/// Build the strip.
///
/// `selection` highlights every card carrying the winning name (the
/// original does the same across the tripled copies); `glow` is the
/// result banner's fade progress.
pub fn view<'a>(
    track: &'a [TrackSlot],
    phase: SpinPhase,
    selection: Option<&'a str>,
    glow: f32,
) -> Element<'a, Message> {
    let cards = row(track.iter().map(|slot| {
        let winning = phase == SpinPhase::Result && selection == Some(slot.name.as_str());
        card(slot, winning, glow)
    }))
    .spacing(CARD_GAP)
    .padding(iced::Padding::new(STRIP_VPAD).left(TRACK_PADDING).right(TRACK_PADDING))
    .align_y(Alignment::Center);

    let strip = scrollable(cards)
        .id(iced::widget::Id::new(SCROLL_ID))
        .direction(iced::widget::scrollable::Direction::Horizontal(
            iced::widget::scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0),
        ))
        .width(Fill);

    // Fixed selection marker over the strip's horizontal center
    let marker = container(
        column![
            container(Space::new().width(3).height(Fill)).style(theme::marker),
        ]
        .height(Fill),
    )
    .width(Fill)
    .height(Fill)
    .center_x(Fill);

    container(stack![strip, marker].width(Fill).height(CARD_HEIGHT + 2.0 * STRIP_VPAD))
        .width(Fill)
        .padding(PANEL_PADDING)
        .style(theme::strip_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_subtracts_every_horizontal_inset() {
        // Page margin and panel padding both sit between the window edge
        // and the scrollable; the drawn marker is centered inside them
        let insets = 2.0 * (STRIP_MARGIN + PANEL_PADDING);
        assert_eq!(viewport_width(1280.0), 1280.0 - insets);
        assert_eq!(viewport_width(insets), 0.0);
    }

    #[test]
    fn viewport_never_goes_negative() {
        assert_eq!(viewport_width(0.0), 0.0);
        assert_eq!(viewport_width(10.0), 0.0);
    }
}
