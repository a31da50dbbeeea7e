//! Curve data types carried by synthesis requests.
//!
//! Curves are plain 2D polylines. The geometry kernel that intersects them
//! lives in the audio backend; this module only describes the data.

use serde::{Deserialize, Serialize};

/// A point in the curve plane.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point2 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2 {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point2> for [f64; 2] {
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

/// An open polyline through an ordered list of vertices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    /// Vertices in curve order.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline from its vertices.
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates a single straight segment from `a` to `b`.
    pub fn line(a: Point2, b: Point2) -> Self {
        Self { points: vec![a, b] }
    }

    /// Approximates a full circle with `segments` chords.
    ///
    /// The first (and last) vertex sits at `start_angle` radians, and the
    /// circle is traversed counter-clockwise.
    pub fn circle(center: Point2, radius: f64, segments: usize, start_angle: f64) -> Self {
        let segments = segments.max(3);
        let points = (0..=segments)
            .map(|k| {
                let angle = start_angle + std::f64::consts::TAU * k as f64 / segments as f64;
                Point2::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        Self { points }
    }

    /// Returns the first vertex, if any.
    pub fn start_point(&self) -> Option<Point2> {
        self.points.first().copied()
    }

    /// Number of straight segments.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the horizontal extent `(min_x, max_x)`, or `None` when empty.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.x, p.x)),
            Some((lo, hi)) => Some((lo.min(p.x), hi.max(p.x))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_serializes_as_array() {
        let json = serde_json::to_string(&Point2::new(0.5, -1.0)).unwrap();
        assert_eq!(json, "[0.5,-1.0]");

        let parsed: Point2 = serde_json::from_str("[2, 3]").unwrap();
        assert_eq!(parsed, Point2::new(2.0, 3.0));
    }

    #[test]
    fn test_circle_closes_on_start_point() {
        let circle = Polyline::circle(Point2::new(0.5, 0.0), 0.5, 64, std::f64::consts::PI);
        let start = circle.start_point().unwrap();
        let end = *circle.points.last().unwrap();

        assert!(start.distance(Point2::new(0.0, 0.0)) < 1e-12);
        assert!(start.distance(end) < 1e-12);
        assert_eq!(circle.segment_count(), 64);
    }

    #[test]
    fn test_x_range() {
        let line = Polyline::new(vec![
            Point2::new(1.0, 0.0),
            Point2::new(-2.0, 1.0),
            Point2::new(3.0, 0.5),
        ]);
        assert_eq!(line.x_range(), Some((-2.0, 3.0)));
        assert_eq!(Polyline::default().x_range(), None);
    }
}
