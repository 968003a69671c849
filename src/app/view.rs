// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, button, column, container, row, stack, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::i18n::Key;
use crate::ui::components::{
    add_dialog, controls, header, manage_dialog, particles, track_strip,
};
use crate::ui::theme;

impl App {
    /// Build the application view
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;

        let header = header::view(locale);

        let strip = track_strip::view(
            &self.picker.track,
            self.picker.engine.phase(),
            self.picker.engine.selection(),
            self.ui.result_animation.progress(),
        );

        let controls = controls::view(
            self.picker.engine.phase(),
            self.picker.engine.selection(),
            self.picker.roster.is_empty(),
            self.ui.result_animation.progress(),
            locale,
        );

        let add_btn = button(text(locale.get(Key::AddRestaurant)).size(14))
            .padding([10, 18])
            .style(theme::outline_button)
            .on_press(Message::OpenAddDialog);
        let manage_btn = button(text(locale.get(Key::ManageRestaurants)).size(14))
            .padding([10, 18])
            .style(theme::outline_button)
            .on_press(Message::OpenManageDialog);
        let roster_buttons = row![add_btn, Space::new().width(16), manage_btn];

        let content = column![
            Space::new().height(48),
            header,
            Space::new().height(48),
            strip,
            Space::new().height(32),
            controls,
            Space::new().height(32),
            roster_buttons,
        ]
        .align_x(Alignment::Center)
        .width(Fill);

        let main_layout = container(content)
            .width(Fill)
            .height(Fill)
            .padding(iced::Padding::new(0.0).left(track_strip::STRIP_MARGIN).right(track_strip::STRIP_MARGIN))
            .style(theme::page);

        // Particle overlay while the decoration is live
        let particle_overlay: Element<'_, Message> = if self.ui.particles.is_empty() {
            Space::new().width(0).height(0).into()
        } else {
            let age = self
                .ui
                .decoration_spawned_at
                .map(|t| t.elapsed().as_secs_f32())
                .unwrap_or(0.0);
            particles::view(&self.ui.particles, age)
        };

        // Dialog overlays stay mounted while their close fade runs
        let add_progress = self.ui.dialogs.add_animation.progress();
        let add_overlay: Element<'_, Message> = if self.ui.dialogs.add_open || add_progress > 0.01 {
            add_dialog::view(&self.ui.dialogs.add_input, add_progress, locale)
        } else {
            Space::new().width(0).height(0).into()
        };

        let manage_progress = self.ui.dialogs.manage_animation.progress();
        let manage_overlay: Element<'_, Message> =
            if self.ui.dialogs.manage_open || manage_progress > 0.01 {
                manage_dialog::view(self.picker.roster.names(), manage_progress, locale)
            } else {
                Space::new().width(0).height(0).into()
            };

        stack![main_layout, particle_overlay, add_overlay, manage_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
