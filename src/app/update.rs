//! Message update handlers - thin dispatcher delegating to submodules

mod roster;
mod spin;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_spin(&message) {
            return task;
        }
        if let Some(task) = self.handle_roster(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        Task::none()
    }
}
