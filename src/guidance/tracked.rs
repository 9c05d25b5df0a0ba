use crate::guidance::point::{Point, Position};

/// Current best estimate for a tracked entity, with provenance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Estimate {
    /// Observed in the most recent update.
    Live(Point),
    /// Not currently observed, but the last detection is still within the
    /// occlusion window.
    Remembered(Point),
    /// Never observed, or the occlusion window has elapsed.
    #[default]
    Unknown,
}

impl Estimate {
    /// The usable position, if any.
    pub fn point(&self) -> Option<Point> {
        match self {
            Estimate::Live(p) | Estimate::Remembered(p) => Some(*p),
            Estimate::Unknown => None,
        }
    }

}

/// Last known position of one tracked entity (the hand or the target).
///
/// A fresh detection is authoritative and always overwrites the stored
/// position, even if it implies a large jump; the only smoothing applied
/// is temporal persistence across detection gaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackedEntity {
    last_known: Option<Point>,
    last_seen_at: Option<f64>,
    seen_this_update: bool,
}

impl TrackedEntity {
    /// Record one observation cycle.
    ///
    /// `observed` present overwrites the stored position with the
    /// observation's own timestamp. `observed` absent expires the stored
    /// position once `now - last_seen_at` exceeds `window` seconds.
    pub fn update(&mut self, observed: Option<Position>, now: f64, window: f64) {
        match observed {
            Some(pos) => {
                self.last_known = Some(pos.point);
                self.last_seen_at = Some(pos.timestamp);
                self.seen_this_update = true;
            }
            None => {
                self.seen_this_update = false;
                if let Some(seen_at) = self.last_seen_at {
                    if now - seen_at > window {
                        self.last_known = None;
                        self.last_seen_at = None;
                    }
                }
            }
        }
    }

    /// Best estimate as of `now`. The window boundary is inclusive: at
    /// exactly `window` seconds since the last detection the position is
    /// still remembered. The window binds regardless of how the position
    /// was obtained, so a query far in the future reports unknown even if
    /// the entity was live at the last update.
    pub fn current(&self, now: f64, window: f64) -> Estimate {
        match (self.last_known, self.last_seen_at) {
            (Some(point), Some(seen_at)) => {
                if now - seen_at > window {
                    Estimate::Unknown
                } else if self.seen_this_update {
                    Estimate::Live(point)
                } else {
                    Estimate::Remembered(point)
                }
            }
            _ => Estimate::Unknown,
        }
    }
}
