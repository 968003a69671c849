//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::{Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, DialogState, PickerState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let locale = Locale::new(Language::Korean);

        let app = Self {
            core: CoreState::new(locale),
            picker: PickerState::new(),
            ui: UiState::new(),
        };

        (app, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Window title, includes the winner once one is picked
    pub fn title(&self) -> String {
        match self.picker.engine.selection() {
            Some(name) => format!("LunchSpin - {name}"),
            None => "LunchSpin".to_string(),
        }
    }

    /// Subscriptions: frame clock on demand, window resize
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // 1. Frames only while something actually moves: the spin loop,
        //    a dialog/result fade, or the live particle decoration
        let frame_sub = if subscription_logic::needs_frame_subscription(
            self.picker.engine.is_spinning(),
            self.ui.has_active_animations(),
            !self.ui.particles.is_empty(),
        ) {
            iced::window::frames().map(|_| Message::FrameTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Window resize updates the track viewport and particle field
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([frame_sub, resize_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// The frame clock runs only while frames will change something;
    /// tearing it down otherwise is also what makes stale frame
    /// delivery after a spin ends impossible at the source.
    pub fn needs_frame_subscription(
        spinning: bool,
        ui_animations: bool,
        decoration_live: bool,
    ) -> bool {
        spinning || ui_animations || decoration_live
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn frames_run_while_spinning() {
        assert!(needs_frame_subscription(true, false, false));
    }

    #[test]
    fn frames_run_for_fades_and_decoration_independently() {
        assert!(needs_frame_subscription(false, true, false));
        assert!(needs_frame_subscription(false, false, true));
    }

    #[test]
    fn frames_stop_when_everything_is_settled() {
        assert!(!needs_frame_subscription(false, false, false));
    }

    #[test]
    fn sources_are_independent() {
        // Any single active source keeps the clock alive, regardless of
        // the others
        for spinning in [false, true] {
            for fades in [false, true] {
                for decoration in [false, true] {
                    let expected = spinning || fades || decoration;
                    assert_eq!(
                        needs_frame_subscription(spinning, fades, decoration),
                        expected
                    );
                }
            }
        }
    }
}
