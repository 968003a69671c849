// src/app/state.rs
//! Application state definitions

use std::time::Instant;

use crate::i18n::Locale;
use crate::spin::{Roster, SpinEngine, TrackSlot, build_track};
use crate::ui::animation::FadeAnimation;
use crate::ui::components::Particle;

/// Main application state
pub struct App {
    /// Core infrastructure (locale, window geometry)
    pub core: CoreState,
    /// Picker data (roster, derived track, spin engine)
    pub picker: PickerState,
    /// UI state (dialogs, animations, decoration)
    pub ui: UiState,
}

/// Core infrastructure
pub struct CoreState {
    pub locale: Locale,
    /// Last reported window size; seeds the particle field and the
    /// track viewport until the first resize event arrives
    pub window_size: iced::Size,
}

impl CoreState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            window_size: iced::Size::new(1280.0, 800.0),
        }
    }
}

/// Picker data: the roster and everything derived from it
pub struct PickerState {
    pub roster: Roster,
    /// Tripled render sequence, recomputed on every roster change
    pub track: Vec<TrackSlot>,
    pub engine: SpinEngine,
}

impl PickerState {
    pub fn new() -> Self {
        let roster = Roster::with_defaults();
        let track = build_track(roster.names());
        Self {
            roster,
            track,
            engine: SpinEngine::new(),
        }
    }

    /// Rebuild the track after a roster mutation
    pub fn rebuild_track(&mut self) {
        self.track = build_track(self.roster.names());
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI view state
pub struct UiState {
    pub dialogs: DialogState,

    /// Live celebration dots; empty outside the decoration window
    pub particles: Vec<Particle>,
    /// When the current decoration was spawned
    pub decoration_spawned_at: Option<Instant>,

    /// Fade-in of the result banner and winning-card glow
    pub result_animation: FadeAnimation,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            dialogs: DialogState {
                add_open: false,
                add_input: String::new(),
                add_animation: FadeAnimation::new(),
                manage_open: false,
                manage_animation: FadeAnimation::new(),
            },
            particles: Vec::new(),
            decoration_spawned_at: None,
            result_animation: FadeAnimation::new(),
        }
    }

    /// Check whether any fade animation still needs frames
    pub fn has_active_animations(&self) -> bool {
        self.dialogs.add_animation.is_animating()
            || self.dialogs.manage_animation.is_animating()
            || self.result_animation.is_animating()
    }

    /// Advance all fade animations; called once per frame tick
    pub fn tick_animations(&mut self, now: Instant) {
        self.dialogs.add_animation.tick(now);
        self.dialogs.manage_animation.tick(now);
        self.result_animation.tick(now);
    }

    /// Drop the decoration payload immediately
    pub fn clear_decoration(&mut self) {
        self.particles.clear();
        self.decoration_spawned_at = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DialogState {
    pub add_open: bool,
    pub add_input: String,
    pub add_animation: FadeAnimation,

    pub manage_open: bool,
    pub manage_animation: FadeAnimation,
}
