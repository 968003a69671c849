//! Fade transitions using iced_anim
//!
//! One small wrapper over `iced_anim::Animated` drives every fade in the
//! app: dialog open/close and the result banner pop. Animations advance
//! only while the frame subscription is live; `tick` must be called on
//! each animation frame.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Fade duration (a touch longer than a hover, matches the original's
/// 300 ms card transition)
const FADE_DURATION: Duration = Duration::from_millis(300);

fn fade_easing() -> Easing {
    Easing::EASE.with_duration(FADE_DURATION)
}

/// A 0-to-1 fade with explicit open/close targets
#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Animate toward fully visible
    pub fn open(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Animate toward hidden
    pub fn close(&mut self) {
        self.animation.update(0.0.into());
    }

    /// Snap to hidden without animating
    pub fn reset(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing());
    }

    /// Current progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Advance to `now`; call once per animation frame
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let fade = FadeAnimation::new();
        assert_eq!(fade.progress(), 0.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn open_starts_animating_toward_visible() {
        let mut fade = FadeAnimation::new();
        fade.open();
        assert!(fade.is_animating() || fade.progress() > 0.0);
    }

    #[test]
    fn reset_snaps_back_to_hidden() {
        let mut fade = FadeAnimation::new();
        fade.open();
        fade.reset();
        assert_eq!(fade.progress(), 0.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn progress_stays_in_range() {
        let mut fade = FadeAnimation::new();
        fade.open();
        fade.tick(Instant::now());
        assert!((0.0..=1.0).contains(&fade.progress()));
    }
}
