//! Builder for assembling detection samples from raw detector output.

use crate::guidance::{DetectionSample, Point, Position};

/// Builder for creating a [`DetectionSample`] from the shapes detectors
/// actually report: a normalized bounding box for the target item and a
/// set of keypoint landmarks for the hand.
#[derive(Debug, Clone, Default)]
pub struct SampleBuilder {
    frame_time: f64,
    hand: Option<Point>,
    target: Option<Point>,
}

impl SampleBuilder {
    /// Start a sample for a frame captured at `frame_time` seconds.
    pub fn new(frame_time: f64) -> Self {
        Self {
            frame_time,
            ..Self::default()
        }
    }

    /// Set the hand position directly from a normalized center point.
    pub fn hand_center(mut self, x: f32, y: f32) -> Self {
        self.hand = Some(Point::new(x, y));
        self
    }

    /// Derive the hand position as the mean of normalized keypoint
    /// landmarks. An empty set leaves the hand undetected.
    pub fn hand_landmarks(mut self, landmarks: &[(f32, f32)]) -> Self {
        self.hand = Point::from_landmark_mean(landmarks);
        self
    }

    /// Set the target position directly from a normalized center point.
    pub fn target_center(mut self, x: f32, y: f32) -> Self {
        self.target = Some(Point::new(x, y));
        self
    }

    /// Derive the target position from a normalized bounding box
    /// `[x_min, y_min, x_max, y_max]`. A degenerate box leaves the target
    /// undetected.
    pub fn target_bbox(mut self, x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        self.target = Point::from_bbox_center(x_min, y_min, x_max, y_max);
        self
    }

    /// Build the final [`DetectionSample`]. Both positions are stamped
    /// with the frame time.
    pub fn build(self) -> DetectionSample {
        DetectionSample {
            hand: self.hand.map(|p| Position::new(p, self.frame_time)),
            target: self.target.map(|p| Position::new(p, self.frame_time)),
            frame_time: self.frame_time,
        }
    }
}
