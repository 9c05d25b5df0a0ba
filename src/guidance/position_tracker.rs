//! Latest-known hand and target positions with occlusion-memory smoothing.

use crate::guidance::point::Position;
use crate::guidance::tracked::{Estimate, TrackedEntity};

/// Which tracked entity a reading refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Hand,
    Target,
}

/// One frame's worth of detector output.
///
/// Either position may be absent when the detector did not find the entity
/// in this frame. `frame_time` is the capture time in seconds, supplied by
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionSample {
    pub hand: Option<Position>,
    pub target: Option<Position>,
    pub frame_time: f64,
}

/// Tracks the hand and the target independently under an identical
/// occlusion policy: an entity that drops out of detection keeps its last
/// known position for `occlusion_window` seconds, then reverts to unknown.
#[derive(Debug, Clone)]
pub struct PositionTracker {
    hand: TrackedEntity,
    target: TrackedEntity,
    occlusion_window: f64,
}

impl PositionTracker {
    pub fn new(occlusion_window: f64) -> Self {
        Self {
            hand: TrackedEntity::default(),
            target: TrackedEntity::default(),
            occlusion_window,
        }
    }

    /// Record one reading for `label`. A present reading is authoritative;
    /// an absent one starts (or continues) the occlusion countdown.
    pub fn update(&mut self, label: EntityLabel, observed: Option<Position>, now: f64) {
        let window = self.occlusion_window;
        self.entity_mut(label).update(observed, now, window);
    }

    /// Best estimate for `label` as of `now`.
    pub fn current(&self, label: EntityLabel, now: f64) -> Estimate {
        self.entity(label).current(now, self.occlusion_window)
    }

    fn entity(&self, label: EntityLabel) -> &TrackedEntity {
        match label {
            EntityLabel::Hand => &self.hand,
            EntityLabel::Target => &self.target,
        }
    }

    fn entity_mut(&mut self, label: EntityLabel) -> &mut TrackedEntity {
        match label {
            EntityLabel::Hand => &mut self.hand,
            EntityLabel::Target => &mut self.target,
        }
    }
}
