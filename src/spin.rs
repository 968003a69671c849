//! Spin/selection core
//!
//! Everything with temporal or geometric behavior lives here, headless:
//! the roster of candidate restaurants, the tripled track geometry, and
//! the deceleration engine that settles on the card nearest the marker.
//! The `app` layer only feeds it wall-clock instants and viewport sizes,
//! so the whole module is testable without a rendering surface.

pub mod engine;
pub mod roster;
pub mod track;

pub use engine::{FrameOutcome, SpinEngine, SpinPhase};
pub use roster::{AddOutcome, Roster};
pub use track::{TrackPlan, TrackSlot, build_track, wrap};
