//! Celebration particles shown with a result
//!
//! Twenty yellow dots scattered over the window, pinging for a bounded
//! lifetime. Purely decorative: the payload is spawned by the update
//! layer when the engine settles, owned by the view state, and cleared
//! after [`DECORATION_LIFETIME`] (or earlier on reset / new spin).

use std::time::Duration;

use iced::widget::canvas;
use iced::{Element, Fill, Point, Rectangle, Renderer, Size, Theme, mouse};
use rand::Rng;

use crate::ui::theme;

/// How long the decoration stays on screen
pub const DECORATION_LIFETIME: Duration = Duration::from_millis(3000);
/// Number of dots per celebration
pub const PARTICLE_COUNT: usize = 20;

/// Ping cycle length in seconds
const PING_PERIOD: f32 = 1.0;
const BASE_RADIUS: f32 = 4.0;

/// One celebration dot
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    /// Per-particle start delay, staggers the pings
    pub delay: f32,
}

/// Scatter a fresh batch of particles over the window
pub fn spawn(window: Size) -> Vec<Particle> {
    let mut rng = rand::rng();
    (0..PARTICLE_COUNT)
        .map(|id| Particle {
            id,
            x: rng.random_range(0.0..window.width.max(1.0)),
            y: rng.random_range(0.0..window.height.max(1.0)),
            delay: rng.random_range(0.0..0.5),
        })
        .collect()
}

struct ParticleField<'a> {
    particles: &'a [Particle],
    /// Seconds since the decoration was spawned
    age: f32,
}

impl<'a, Message> canvas::Program<Message> for ParticleField<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let lifetime = DECORATION_LIFETIME.as_secs_f32();
        let fade = (1.0 - self.age / lifetime).clamp(0.0, 1.0);

        for particle in self.particles {
            let local = self.age - particle.delay;
            if local < 0.0 {
                continue;
            }
            // Expanding-and-fading ring, restarted every period
            let phase = (local / PING_PERIOD).fract();
            let radius = BASE_RADIUS + 6.0 * phase;
            let alpha = fade * (1.0 - phase);
            frame.fill(
                &canvas::Path::circle(Point::new(particle.x, particle.y), radius),
                theme::with_alpha(theme::ACCENT_YELLOW, alpha),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Full-window particle overlay
pub fn view<'a, Message: 'a>(particles: &'a [Particle], age: f32) -> Element<'a, Message> {
    canvas(ParticleField { particles, age })
        .width(Fill)
        .height(Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_produces_the_documented_count_inside_the_window() {
        let window = Size::new(1280.0, 800.0);
        let particles = spawn(window);
        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert!((0.0..window.width).contains(&p.x));
            assert!((0.0..window.height).contains(&p.y));
            assert!((0.0..0.5).contains(&p.delay));
        }
    }

    #[test]
    fn spawn_ids_are_sequential() {
        let ids: Vec<usize> = spawn(Size::new(100.0, 100.0)).iter().map(|p| p.id).collect();
        assert_eq!(ids, (0..PARTICLE_COUNT).collect::<Vec<_>>());
    }
}
