// src/app/update/roster.rs
//! Roster and dialog message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::spin::AddOutcome;

impl App {
    /// Handle roster-related messages
    pub fn handle_roster(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenAddDialog => {
                self.ui.dialogs.add_open = true;
                self.ui.dialogs.add_input.clear();
                self.ui.dialogs.add_animation.open();
                Some(iced::widget::operation::focus(iced::widget::Id::new(
                    "add_restaurant_input",
                )))
            }

            Message::CloseAddDialog => {
                self.ui.dialogs.add_open = false;
                self.ui.dialogs.add_animation.close();
                Some(Task::none())
            }

            Message::AddInputChanged(value) => {
                self.ui.dialogs.add_input = value.clone();
                Some(Task::none())
            }

            Message::AddSubmit => {
                match self.picker.roster.add(&self.ui.dialogs.add_input) {
                    AddOutcome::Added => {
                        tracing::info!(
                            name = self.ui.dialogs.add_input.trim(),
                            total = self.picker.roster.len(),
                            "restaurant added"
                        );
                        self.picker.rebuild_track();
                        self.ui.dialogs.add_input.clear();
                        self.ui.dialogs.add_open = false;
                        self.ui.dialogs.add_animation.close();
                    }
                    // Soft validation failure: nothing changes, the
                    // dialog stays open for another attempt
                    outcome @ (AddOutcome::Empty | AddOutcome::Duplicate) => {
                        tracing::debug!(?outcome, "restaurant add rejected");
                    }
                }
                Some(Task::none())
            }

            Message::OpenManageDialog => {
                self.ui.dialogs.manage_open = true;
                self.ui.dialogs.manage_animation.open();
                Some(Task::none())
            }

            Message::CloseManageDialog => {
                self.ui.dialogs.manage_open = false;
                self.ui.dialogs.manage_animation.close();
                Some(Task::none())
            }

            Message::RemoveRestaurant(name) => {
                if self.picker.roster.remove(name) {
                    tracing::info!(%name, total = self.picker.roster.len(), "restaurant removed");
                    self.picker.rebuild_track();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
