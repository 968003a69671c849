//! Track layout - tripled card strip geometry and spatial queries
//!
//! The roster is rendered three times in a row so the strip can wrap
//! seamlessly while scrolling forward. All geometry is derived from the
//! fixed card metrics below, which lets the engine answer "which card
//! sits under the center marker" without reading the widget tree.

/// Rendered card width in logical pixels
pub const CARD_WIDTH: f32 = 192.0;
/// Horizontal gap between neighboring cards
pub const CARD_GAP: f32 = 16.0;
/// Leading/trailing padding inside the strip
pub const TRACK_PADDING: f32 = 16.0;
/// How many times the roster is repeated on the track
pub const TRACK_REPEAT: usize = 3;

/// One rendered card on the track; its position in the track vec is its
/// render index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSlot {
    pub name: String,
}

/// Build the tripled track for a roster snapshot.
///
/// Deterministic; the result has `TRACK_REPEAT × names.len()` slots and
/// every slot's name comes from the roster. Callers must not build a
/// track for an empty roster (the spin is disabled in that case), but an
/// empty input simply yields an empty track.
pub fn build_track(names: &[String]) -> Vec<TrackSlot> {
    (0..TRACK_REPEAT)
        .flat_map(|_| names.iter())
        .map(|name| TrackSlot { name: name.clone() })
        .collect()
}

/// Wrap a scroll offset into `[0, max_scroll)`.
///
/// Identity on already-wrapped values. `max_scroll` must be positive;
/// whether the track is actually wider than the viewport is guarded
/// upstream before the spin engages.
pub fn wrap(offset: f32, max_scroll: f32) -> f32 {
    debug_assert!(max_scroll > 0.0);
    if offset < max_scroll {
        offset
    } else {
        offset.rem_euclid(max_scroll)
    }
}

/// Index of the card whose center is nearest `marker_x`.
///
/// Ties break toward the first card in render order (strict `<`), so the
/// result is stable and deterministic. `None` only when no cards exist.
pub fn closest_to_marker(centers: &[f32], marker_x: f32) -> Option<usize> {
    let mut winner = None;
    let mut min_distance = f32::INFINITY;
    for (index, center) in centers.iter().enumerate() {
        let distance = (marker_x - center).abs();
        if distance < min_distance {
            min_distance = distance;
            winner = Some(index);
        }
    }
    winner
}

/// Concrete strip geometry for a roster of `n` names and a viewport width.
///
/// Rebuilt (cheaply) whenever the roster or the window changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPlan {
    slots: usize,
    viewport: f32,
}

impl TrackPlan {
    pub fn new(roster_len: usize, viewport: f32) -> Self {
        Self {
            slots: roster_len * TRACK_REPEAT,
            viewport,
        }
    }

    /// Total rendered width of the track
    pub fn total_width(&self) -> f32 {
        if self.slots == 0 {
            return 0.0;
        }
        2.0 * TRACK_PADDING
            + self.slots as f32 * CARD_WIDTH
            + (self.slots - 1) as f32 * CARD_GAP
    }

    /// Scrollable range; not positive when the track fits the viewport
    pub fn max_scroll(&self) -> f32 {
        self.total_width() - self.viewport
    }

    /// X position of the fixed center marker, in viewport coordinates
    pub fn marker_x(&self) -> f32 {
        self.viewport / 2.0
    }

    /// Center-X of every card at the given scroll offset, in viewport
    /// coordinates and render order
    pub fn card_centers(&self, offset: f32) -> Vec<f32> {
        (0..self.slots)
            .map(|i| {
                TRACK_PADDING + i as f32 * (CARD_WIDTH + CARD_GAP) + CARD_WIDTH / 2.0 - offset
            })
            .collect()
    }

    /// Render index of the card under the marker at the given offset
    pub fn centered_slot(&self, offset: f32) -> Option<usize> {
        closest_to_marker(&self.card_centers(offset), self.marker_x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn track_is_tripled_and_names_come_from_the_roster() {
        let roster = names(&["A", "B", "C"]);
        let track = build_track(&roster);
        assert_eq!(track.len(), TRACK_REPEAT * roster.len());
        for (i, slot) in track.iter().enumerate() {
            // Render order repeats the roster in sequence
            assert_eq!(slot.name, roster[i % roster.len()]);
        }
        // Same roster, same track
        assert_eq!(track, build_track(&roster));
    }

    #[test]
    fn empty_roster_yields_empty_track() {
        assert!(build_track(&[]).is_empty());
    }

    #[test]
    fn wrap_stays_in_range_and_is_idempotent() {
        let max = 1000.0;
        for offset in [0.0, 1.0, 500.0, 999.9, 1000.0, 1080.0, 2500.0, 3000.0] {
            let wrapped = wrap(offset, max);
            assert!((0.0..max).contains(&wrapped), "wrap({offset}) = {wrapped}");
            assert_eq!(wrap(wrapped, max), wrapped);
        }
    }

    #[test]
    fn wrap_is_identity_below_max() {
        assert_eq!(wrap(0.0, 500.0), 0.0);
        assert_eq!(wrap(499.9, 500.0), 499.9);
    }

    #[test]
    fn closest_to_marker_is_deterministic() {
        let centers = [112.0, 320.0, 528.0];
        for _ in 0..3 {
            assert_eq!(closest_to_marker(&centers, 300.0), Some(1));
        }
        assert_eq!(closest_to_marker(&centers, 0.0), Some(0));
        assert_eq!(closest_to_marker(&centers, 10_000.0), Some(2));
    }

    #[test]
    fn closest_to_marker_ties_break_toward_first_in_render_order() {
        // Marker exactly between two cards
        assert_eq!(closest_to_marker(&[100.0, 300.0], 200.0), Some(0));
    }

    #[test]
    fn closest_to_marker_handles_no_cards() {
        assert_eq!(closest_to_marker(&[], 200.0), None);
    }

    #[test]
    fn plan_geometry_matches_card_metrics() {
        let plan = TrackPlan::new(3, 640.0);
        // 9 cards: 2*16 padding + 9*192 + 8*16 gaps
        assert_eq!(plan.total_width(), 1888.0);
        assert_eq!(plan.max_scroll(), 1248.0);
        assert_eq!(plan.marker_x(), 320.0);

        let centers = plan.card_centers(0.0);
        assert_eq!(centers.len(), 9);
        assert_eq!(centers[0], 112.0);
        assert_eq!(centers[1], 320.0);
        // Scrolling moves every card left by the offset
        assert_eq!(plan.card_centers(100.0)[0], 12.0);
    }

    #[test]
    fn centered_slot_tracks_the_offset() {
        let plan = TrackPlan::new(3, 640.0);
        // Card 1 sits exactly on the marker at offset 0
        assert_eq!(plan.centered_slot(0.0), Some(1));
        // One card pitch later, card 2 is centered
        assert_eq!(plan.centered_slot(CARD_WIDTH + CARD_GAP), Some(2));
    }

    #[test]
    fn centered_slot_is_none_for_an_empty_plan() {
        let plan = TrackPlan::new(0, 640.0);
        assert_eq!(plan.centered_slot(0.0), None);
    }
}
