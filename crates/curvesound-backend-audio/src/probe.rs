//! Sampling a curve's height at a given X.
//!
//! A probe is a short vertical segment anchored at the curve's start point.
//! Sampling at offset `dx` intersects the curve with that segment at
//! `start.x + dx` and returns the first hit's height above `start.y`.

use curvesound_spec::Point2;

use crate::geometry::{Curve, IntersectionTolerance, LineSegment};

/// Which input curve a probe reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveRole {
    /// One-cycle wave shape.
    Waveform,
    /// Whole-duration amplitude envelope.
    Envelope,
}

impl CurveRole {
    /// Returns the role as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveRole::Waveform => "waveform",
            CurveRole::Envelope => "envelope",
        }
    }
}

impl std::fmt::Display for CurveRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads a curve's height at X offsets from its start point.
#[derive(Debug, Clone, Copy)]
pub struct CurveProbe<'a, C: Curve + ?Sized> {
    curve: &'a C,
    origin: Point2,
    below: f64,
    above: f64,
    tolerance: IntersectionTolerance,
}

impl<'a, C: Curve + ?Sized> CurveProbe<'a, C> {
    /// Creates a probe reaching `below` units under and `above` units over
    /// the curve's start height.
    ///
    /// Returns `None` if the curve has no start point.
    pub fn new(curve: &'a C, below: f64, above: f64) -> Option<Self> {
        let origin = curve.start_point()?;
        Some(Self {
            curve,
            origin,
            below,
            above,
            tolerance: IntersectionTolerance::default(),
        })
    }

    /// Probe for a bipolar wave shape: one unit either side of the start.
    pub fn waveform(curve: &'a C) -> Option<Self> {
        Self::new(curve, 1.0, 1.0)
    }

    /// Probe for an envelope: from the start height up one unit.
    pub fn envelope(curve: &'a C) -> Option<Self> {
        Self::new(curve, 0.0, 1.0)
    }

    /// Overrides the intersection tolerance.
    pub fn with_tolerance(mut self, tolerance: IntersectionTolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The curve's start point.
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Absolute X of the probe at offset `dx`.
    pub fn x_at(&self, dx: f64) -> f64 {
        self.origin.x + dx
    }

    /// Height of the curve above its start at `start.x + dx`.
    ///
    /// When the probe crosses the curve more than once, the hit with the
    /// lowest curve parameter wins. Returns `None` if nothing is hit.
    pub fn sample(&self, dx: f64) -> Option<f64> {
        let probe = LineSegment::vertical(
            self.x_at(dx),
            self.origin.y - self.below,
            self.origin.y + self.above,
        );
        self.curve
            .intersect_segment(&probe, &self.tolerance)
            .first()
            .map(|hit| hit.point.y - self.origin.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvesound_spec::Polyline;

    #[test]
    fn test_envelope_probe_reads_ramp() {
        let ramp = Polyline::line(Point2::new(2.0, 3.0), Point2::new(3.0, 4.0));
        let probe = CurveProbe::envelope(&ramp).unwrap();

        assert!((probe.sample(0.0).unwrap()).abs() < 1e-12);
        assert!((probe.sample(0.5).unwrap() - 0.5).abs() < 1e-12);
        assert!((probe.sample(0.999).unwrap() - 0.999).abs() < 1e-12);
        assert_eq!(probe.x_at(0.5), 2.5);
    }

    #[test]
    fn test_envelope_probe_ignores_negative_heights() {
        let dip = Polyline::line(Point2::new(0.0, 0.0), Point2::new(1.0, -1.0));
        let probe = CurveProbe::envelope(&dip).unwrap();
        assert_eq!(probe.sample(0.5), None);
    }

    #[test]
    fn test_waveform_probe_is_bipolar() {
        let saw = Polyline::line(Point2::new(0.0, 1.0), Point2::new(1.0, -1.0));
        let probe = CurveProbe::waveform(&saw).unwrap();
        assert!((probe.sample(0.25).unwrap() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_curve_has_no_probe() {
        let empty = Polyline::default();
        assert!(CurveProbe::waveform(&empty).is_none());
    }

    #[test]
    fn test_first_hit_wins() {
        let circle = Polyline::circle(Point2::new(0.5, 0.0), 0.5, 256, std::f64::consts::PI);
        let probe = CurveProbe::waveform(&circle).unwrap();
        let value = probe.sample(0.5).unwrap();
        assert!((value + 0.5).abs() < 1e-3, "{}", value);
    }
}
