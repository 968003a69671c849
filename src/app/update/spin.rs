// src/app/update/spin.rs
//! Spin message handlers
//!
//! The engine owns the scroll offset; this layer turns its frame
//! outcomes into scrollable offset writes and decoration side effects.

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::spin::{FrameOutcome, TrackPlan};
use crate::ui::components::{particles, track_strip};

impl App {
    /// Handle spin-related messages
    pub fn handle_spin(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SpinStart => {
                let now = Instant::now();
                if self.picker.engine.start(self.picker.roster.len(), now) {
                    tracing::info!(
                        session = self.picker.engine.session(),
                        candidates = self.picker.roster.len(),
                        "spin started"
                    );
                    // A new spin supersedes any lingering decoration
                    self.ui.clear_decoration();
                    self.ui.result_animation.reset();
                }
                Some(Task::none())
            }

            Message::FrameTick => {
                let now = Instant::now();
                self.ui.tick_animations(now);

                let plan = TrackPlan::new(self.picker.roster.len(), self.track_viewport());
                match self.picker.engine.tick(now, &self.picker.track, &plan) {
                    FrameOutcome::Advanced { offset } => Some(iced::widget::operation::scroll_to(
                        iced::widget::Id::new(track_strip::SCROLL_ID),
                        iced::widget::scrollable::AbsoluteOffset { x: offset, y: 0.0 },
                    )),

                    FrameOutcome::Settled { selection } => {
                        let session = self.picker.engine.session();
                        let decoration_task = if let Some(name) = selection {
                            tracing::info!(session, %name, "spin settled");
                            self.ui.particles = particles::spawn(self.core.window_size);
                            self.ui.decoration_spawned_at = Some(now);
                            self.ui.result_animation.open();
                            // Auto-expire the decoration; the session id
                            // keeps a late wakeup from touching a newer spin
                            Task::perform(
                                async move {
                                    tokio::time::sleep(particles::DECORATION_LIFETIME).await;
                                    session
                                },
                                Message::DecorationExpired,
                            )
                        } else {
                            // Degraded completion, already logged by the engine
                            Task::none()
                        };
                        Some(decoration_task)
                    }

                    // Frame arrived outside a spin: only animations to drive
                    FrameOutcome::Ignored => Some(Task::none()),
                }
            }

            Message::SpinReset => {
                if self.picker.engine.reset() {
                    tracing::info!(session = self.picker.engine.session(), "spin reset");
                    self.ui.clear_decoration();
                    self.ui.result_animation.reset();
                }
                Some(Task::none())
            }

            Message::DecorationExpired(session) => {
                if *session == self.picker.engine.session() {
                    self.ui.clear_decoration();
                } else {
                    tracing::debug!(
                        stale = session,
                        current = self.picker.engine.session(),
                        "discarding decoration expiry from a superseded session"
                    );
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Width of the track viewport for the current window
    pub(in crate::app) fn track_viewport(&self) -> f32 {
        track_strip::viewport_width(self.core.window_size.width)
    }
}
