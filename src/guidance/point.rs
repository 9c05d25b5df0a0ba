use nalgebra::Vector2;

/// A 2D point in normalized frame coordinates.
///
/// Both axes run over `[0, 1]`: x grows to the right, y grows downward,
/// matching the image plane the detector reports in. No depth component;
/// the engine reasons in 2D only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Center of a normalized bounding box `[x_min, y_min, x_max, y_max]`.
    ///
    /// Returns `None` for degenerate boxes (`x_max <= x_min` or
    /// `y_max <= y_min`), which detectors report when they hallucinate a
    /// hit without a usable location.
    pub fn from_bbox_center(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Option<Self> {
        if x_max <= x_min || y_max <= y_min {
            return None;
        }
        Some(Self::new((x_min + x_max) / 2.0, (y_min + y_max) / 2.0))
    }

    /// Mean of a set of normalized keypoints, e.g. hand landmarks.
    ///
    /// Returns `None` for an empty set.
    pub fn from_landmark_mean(landmarks: &[(f32, f32)]) -> Option<Self> {
        if landmarks.is_empty() {
            return None;
        }
        let n = landmarks.len() as f32;
        let (sx, sy) = landmarks
            .iter()
            .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
        Some(Self::new(sx / n, sy / n))
    }

    /// Displacement vector from `self` to `other`.
    #[inline]
    pub fn displacement(&self, other: &Point) -> Vector2<f32> {
        Vector2::new(other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance to `other`, in normalized units.
    #[inline]
    pub fn distance(&self, other: &Point) -> f32 {
        self.displacement(other).norm()
    }
}

/// A detected point plus the time it was observed, in seconds.
///
/// Timestamps are always caller-supplied; the engine never reads a clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub point: Point,
    pub timestamp: f64,
}

impl Position {
    #[inline]
    pub fn new(point: Point, timestamp: f64) -> Self {
        Self { point, timestamp }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_center() {
        let p = Point::from_bbox_center(0.2, 0.4, 0.6, 0.8).unwrap();
        assert!((p.x - 0.4).abs() < 1e-6);
        assert!((p.y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_bbox() {
        assert!(Point::from_bbox_center(0.5, 0.2, 0.5, 0.8).is_none());
        assert!(Point::from_bbox_center(0.2, 0.8, 0.6, 0.3).is_none());
        assert!(Point::from_bbox_center(0.0, 0.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_landmark_mean() {
        let p = Point::from_landmark_mean(&[(0.0, 0.0), (0.2, 0.4), (0.4, 0.8)]).unwrap();
        assert!((p.x - 0.2).abs() < 1e-6);
        assert!((p.y - 0.4).abs() < 1e-6);

        assert!(Point::from_landmark_mean(&[]).is_none());
    }

    #[test]
    fn test_displacement_and_distance() {
        let a = Point::new(0.2, 0.5);
        let b = Point::new(0.8, 0.5);
        let v = a.displacement(&b);
        assert!((v.x - 0.6).abs() < 1e-6);
        assert_eq!(v.y, 0.0);
        assert!((a.distance(&b) - 0.6).abs() < 1e-6);
    }
}
