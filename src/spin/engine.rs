//! Spin engine - the deceleration state machine
//!
//! One spin is a single forward sweep over the track: the scroll offset
//! only ever grows (wrapping on overflow) while the per-frame speed
//! decays on a quartic curve, so the strip settles visually instead of
//! halting. Progress is driven by elapsed wall-clock time, not frame
//! count, which keeps the stopping point stable under variable frame
//! rates.
//!
//! The engine never touches rendering primitives. It consumes a
//! [`TrackPlan`] for geometry and publishes `{ phase, selection }`; the
//! view layer does the rest.

use std::time::{Duration, Instant};

use super::track::{TrackPlan, TrackSlot, wrap};

/// Total length of one spin
pub const SPIN_DURATION: Duration = Duration::from_millis(9000);
/// Initial advance per frame, in logical pixels
pub const BASE_SPEED: f32 = 80.0;
/// Exponent of the `(1 - progress)^n` decay curve
pub const SPEED_DECAY_EXPONENT: i32 = 4;

/// Phase of the spin state machine
///
/// Legal transitions: `Idle → Spinning` via [`SpinEngine::start`],
/// `Spinning → Result` when the clock expires, `Result → Idle` via
/// [`SpinEngine::reset`]. Nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
    Result,
}

/// What a single frame tick did
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// The offset advanced (and possibly wrapped); keep scheduling frames
    Advanced { offset: f32 },
    /// The clock expired; the engine is now in `Result` with this
    /// selection (`None` only in the degraded no-cards case)
    Settled { selection: Option<String> },
    /// The tick arrived outside `Spinning` (stale frame) and was discarded
    Ignored,
}

/// The animation-driven selection engine
#[derive(Debug)]
pub struct SpinEngine {
    phase: SpinPhase,
    /// Monotonically increasing spin session id; deferred callbacks carry
    /// it so work from a superseded session stays inert
    session: u64,
    offset: f32,
    speed: f32,
    started_at: Option<Instant>,
    selection: Option<String>,
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinEngine {
    pub fn new() -> Self {
        Self {
            phase: SpinPhase::Idle,
            session: 0,
            offset: 0.0,
            speed: 0.0,
            started_at: None,
            selection: None,
        }
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// Current scroll offset; the strip keeps its position between spins
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The published selection, present only in `Result` (and absent even
    /// then after a degraded completion)
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Begin a spin.
    ///
    /// No-op unless the engine is `Idle` and at least one name exists;
    /// double starts and starts on an empty roster are silently refused.
    /// Returns whether a new session actually began.
    pub fn start(&mut self, roster_len: usize, now: Instant) -> bool {
        if self.phase != SpinPhase::Idle || roster_len == 0 {
            return false;
        }
        self.session += 1;
        self.phase = SpinPhase::Spinning;
        self.selection = None;
        self.speed = BASE_SPEED;
        self.started_at = Some(now);
        true
    }

    /// Advance one frame.
    ///
    /// Ticks outside `Spinning` are discarded without mutating anything,
    /// which makes late frame callbacks after a reset or teardown inert.
    pub fn tick(&mut self, now: Instant, track: &[TrackSlot], plan: &TrackPlan) -> FrameOutcome {
        if self.phase != SpinPhase::Spinning {
            return FrameOutcome::Ignored;
        }
        let Some(started_at) = self.started_at else {
            return FrameOutcome::Ignored;
        };

        let elapsed = now.saturating_duration_since(started_at);
        let progress = elapsed.as_secs_f32() / SPIN_DURATION.as_secs_f32();

        if progress < 1.0 {
            self.speed = BASE_SPEED * (1.0 - progress).powi(SPEED_DECAY_EXPONENT);
            let max_scroll = plan.max_scroll();
            // Wrapping is undefined when the track fits the viewport;
            // hold position for this frame instead of engaging it.
            if max_scroll > 0.0 {
                self.offset = wrap(self.offset + self.speed, max_scroll);
            }
            FrameOutcome::Advanced { offset: self.offset }
        } else {
            // Exactly one geometry query, at the declared end of the
            // animation window. Never retried.
            let selection = plan
                .centered_slot(self.offset)
                .and_then(|i| track.get(i))
                .map(|slot| slot.name.clone());
            if selection.is_none() {
                tracing::warn!(
                    session = self.session,
                    "spin finished with no rendered cards; publishing empty result"
                );
            }
            self.selection = selection.clone();
            self.phase = SpinPhase::Result;
            self.started_at = None;
            self.speed = 0.0;
            FrameOutcome::Settled { selection }
        }
    }

    /// Return to `Idle`, clearing the published selection.
    ///
    /// Valid only from `Result`; a no-op otherwise. Bumps the session id
    /// so any still-pending callback of the finished spin is discarded.
    pub fn reset(&mut self) -> bool {
        if self.phase != SpinPhase::Result {
            return false;
        }
        self.session += 1;
        self.phase = SpinPhase::Idle;
        self.selection = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin::track::{CARD_GAP, CARD_WIDTH, build_track};

    fn abc_track() -> Vec<TrackSlot> {
        build_track(&["A".to_string(), "B".to_string(), "C".to_string()])
    }

    /// Viewport chosen so card "B" (slot 1) sits exactly on the marker at
    /// offset zero: marker 320 == 16 + 1*(192+16) + 96.
    fn abc_plan() -> TrackPlan {
        TrackPlan::new(3, 640.0)
    }

    #[test]
    fn start_with_empty_roster_is_a_no_op() {
        let mut engine = SpinEngine::new();
        assert!(!engine.start(0, Instant::now()));
        assert_eq!(engine.phase(), SpinPhase::Idle);
        assert_eq!(engine.session(), 0);
    }

    #[test]
    fn start_while_spinning_does_not_create_a_new_session() {
        let mut engine = SpinEngine::new();
        let t0 = Instant::now();
        assert!(engine.start(3, t0));
        let session = engine.session();
        assert!(!engine.start(3, t0 + Duration::from_secs(1)));
        assert_eq!(engine.session(), session);

        // The original session still publishes its selection
        let outcome = engine.tick(t0 + SPIN_DURATION, &abc_track(), &abc_plan());
        assert_eq!(
            outcome,
            FrameOutcome::Settled {
                selection: Some("B".to_string())
            }
        );
        assert_eq!(engine.session(), session);
    }

    #[test]
    fn spin_settles_on_the_centered_card() {
        let mut engine = SpinEngine::new();
        let t0 = Instant::now();
        engine.start(3, t0);

        assert_eq!(
            engine.tick(t0 + SPIN_DURATION, &abc_track(), &abc_plan()),
            FrameOutcome::Settled {
                selection: Some("B".to_string())
            }
        );
        assert_eq!(engine.phase(), SpinPhase::Result);
        assert_eq!(engine.selection(), Some("B"));
    }

    #[test]
    fn speed_follows_the_quartic_decay_curve() {
        let mut engine = SpinEngine::new();
        let t0 = Instant::now();
        engine.start(3, t0);

        // Halfway through, speed is 80 * 0.5^4 = 5 px/frame
        let outcome = engine.tick(t0 + SPIN_DURATION / 2, &abc_track(), &abc_plan());
        assert_eq!(outcome, FrameOutcome::Advanced { offset: 5.0 });
    }

    #[test]
    fn offset_only_moves_forward_and_wraps() {
        let mut engine = SpinEngine::new();
        let t0 = Instant::now();
        engine.start(3, t0);

        let track = abc_track();
        let plan = abc_plan();
        let max_scroll = plan.max_scroll();

        let mut previous = engine.offset();
        for ms in (100..9000).step_by(100) {
            match engine.tick(t0 + Duration::from_millis(ms), &track, &plan) {
                FrameOutcome::Advanced { offset } => {
                    assert!((0.0..max_scroll).contains(&offset));
                    // Forward-only, modulo the wrap (late-spin increments
                    // can vanish in f32 addition, hence >=)
                    assert!(offset >= previous || offset < previous - max_scroll / 2.0);
                    previous = offset;
                }
                other => panic!("unexpected outcome before the deadline: {other:?}"),
            }
        }
    }

    #[test]
    fn narrow_track_holds_position_instead_of_wrapping() {
        let mut engine = SpinEngine::new();
        let t0 = Instant::now();
        engine.start(1, t0);

        // One name, huge viewport: the track fits entirely on screen
        let plan = TrackPlan::new(1, 4000.0);
        let track = build_track(&["A".to_string()]);
        assert_eq!(
            engine.tick(t0 + Duration::from_millis(100), &track, &plan),
            FrameOutcome::Advanced { offset: 0.0 }
        );
    }

    #[test]
    fn missing_geometry_degrades_to_an_empty_result() {
        let mut engine = SpinEngine::new();
        let t0 = Instant::now();
        engine.start(3, t0);

        // Roster emptied mid-spin: no cards left at completion
        let outcome = engine.tick(t0 + SPIN_DURATION, &[], &TrackPlan::new(0, 640.0));
        assert_eq!(outcome, FrameOutcome::Settled { selection: None });
        assert_eq!(engine.phase(), SpinPhase::Result);
        assert_eq!(engine.selection(), None);
    }

    #[test]
    fn reset_only_applies_from_result() {
        let mut engine = SpinEngine::new();
        assert!(!engine.reset());

        let t0 = Instant::now();
        engine.start(3, t0);
        assert!(!engine.reset());
        assert_eq!(engine.phase(), SpinPhase::Spinning);

        engine.tick(t0 + SPIN_DURATION, &abc_track(), &abc_plan());
        assert!(engine.reset());
        assert_eq!(engine.phase(), SpinPhase::Idle);
        assert_eq!(engine.selection(), None);
    }

    #[test]
    fn stale_ticks_after_reset_are_discarded() {
        let mut engine = SpinEngine::new();
        let t0 = Instant::now();
        engine.start(3, t0);
        engine.tick(t0 + SPIN_DURATION, &abc_track(), &abc_plan());
        engine.reset();

        let offset = engine.offset();
        let outcome = engine.tick(t0 + SPIN_DURATION * 2, &abc_track(), &abc_plan());
        assert_eq!(outcome, FrameOutcome::Ignored);
        assert_eq!(engine.offset(), offset);
        assert_eq!(engine.phase(), SpinPhase::Idle);
    }

    #[test]
    fn selection_lands_one_pitch_later_after_scrolling_one_pitch() {
        let mut engine = SpinEngine::new();
        let t0 = Instant::now();
        engine.start(3, t0);

        // Walk the offset forward by exactly one card pitch before the
        // deadline, then settle: card "C" is now under the marker.
        let pitch = CARD_WIDTH + CARD_GAP;
        let track = abc_track();
        let plan = abc_plan();
        let mut elapsed = Duration::from_millis(100);
        while engine.offset() < pitch {
            match engine.tick(t0 + elapsed, &track, &plan) {
                FrameOutcome::Advanced { .. } => elapsed += Duration::from_millis(16),
                other => panic!("spin ended early: {other:?}"),
            }
            assert!(elapsed < SPIN_DURATION, "never reached one card pitch");
        }
        let drift = engine.offset() - pitch;
        assert!(drift >= 0.0 && drift < CARD_WIDTH / 2.0);

        assert_eq!(
            engine.tick(t0 + SPIN_DURATION, &track, &plan),
            FrameOutcome::Settled {
                selection: Some("C".to_string())
            }
        );
    }
}
