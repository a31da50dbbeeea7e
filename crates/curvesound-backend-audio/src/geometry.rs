//! Curve/segment intersection.
//!
//! The sampler only needs one capability from a geometry kernel: intersect a
//! curve with a short probe segment and report the hits in curve order. The
//! [`Curve`] trait captures that, and [`Polyline`] implements it.

use curvesound_spec::{Point2, Polyline};

/// Segments whose directions differ by less than this sine are parallel.
const PARALLEL_SINE: f64 = 1e-12;

/// Tolerances used when intersecting a curve with a probe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionTolerance {
    /// Maximum gap between the curve and the probe that still counts as a hit.
    pub curve: f64,
    /// Maximum distance at which a parallel curve segment counts as overlapping.
    pub overlap: f64,
}

impl IntersectionTolerance {
    /// Creates a tolerance pair.
    pub const fn new(curve: f64, overlap: f64) -> Self {
        Self { curve, overlap }
    }
}

impl Default for IntersectionTolerance {
    fn default() -> Self {
        Self::new(0.01, 0.01)
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start point.
    pub start: Point2,
    /// End point.
    pub end: Point2,
}

impl LineSegment {
    /// Creates a segment.
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a vertical segment at `x` from `y_low` up to `y_high`.
    pub const fn vertical(x: f64, y_low: f64, y_high: f64) -> Self {
        Self::new(Point2::new(x, y_low), Point2::new(x, y_high))
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Point at fraction `t` along the segment.
    pub fn point_at(&self, t: f64) -> Point2 {
        Point2::new(
            self.start.x + (self.end.x - self.start.x) * t,
            self.start.y + (self.end.y - self.start.y) * t,
        )
    }

    /// Distance from `p` to the closest point of the segment.
    pub fn distance_to(&self, p: Point2) -> f64 {
        let (dx, dy) = (self.end.x - self.start.x, self.end.y - self.start.y);
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return self.start.distance(p);
        }
        let t = (((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len_sq).clamp(0.0, 1.0);
        self.point_at(t).distance(p)
    }
}

/// How a curve met the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionKind {
    /// The curve crosses or touches the probe at a single point.
    Point,
    /// A piece of the curve runs along the probe.
    Overlap,
}

/// One intersection event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveIntersection {
    /// Point on the curve.
    pub point: Point2,
    /// Curve parameter of the point. For polylines, segment index plus
    /// fraction along that segment.
    pub parameter: f64,
    /// Crossing or overlap.
    pub kind: IntersectionKind,
}

/// A curve that can be probed by line segments.
pub trait Curve {
    /// First point of the curve, or `None` for an empty curve.
    fn start_point(&self) -> Option<Point2>;

    /// Intersects the curve with `probe`.
    ///
    /// Events are sorted by curve parameter. Consecutive events closer than
    /// `tolerance.curve` are reported once.
    fn intersect_segment(
        &self,
        probe: &LineSegment,
        tolerance: &IntersectionTolerance,
    ) -> Vec<CurveIntersection>;
}

impl Curve for Polyline {
    fn start_point(&self) -> Option<Point2> {
        Polyline::start_point(self)
    }

    fn intersect_segment(
        &self,
        probe: &LineSegment,
        tolerance: &IntersectionTolerance,
    ) -> Vec<CurveIntersection> {
        let mut hits: Vec<CurveIntersection> = Vec::new();

        for (index, pair) in self.points.windows(2).enumerate() {
            let segment = LineSegment::new(pair[0], pair[1]);
            let Some((t, kind)) = intersect_segments(&segment, probe, tolerance) else {
                continue;
            };
            let point = segment.point_at(t);

            if let Some(last) = hits.last() {
                if last.point.distance(point) <= tolerance.curve {
                    continue;
                }
            }

            hits.push(CurveIntersection {
                point,
                parameter: index as f64 + t,
                kind,
            });
        }

        hits
    }
}

fn cross(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

/// Intersects one curve segment with the probe.
///
/// Returns the fraction along `segment` of the earliest hit.
fn intersect_segments(
    segment: &LineSegment,
    probe: &LineSegment,
    tolerance: &IntersectionTolerance,
) -> Option<(f64, IntersectionKind)> {
    let (dx, dy) = (segment.end.x - segment.start.x, segment.end.y - segment.start.y);
    let (ex, ey) = (probe.end.x - probe.start.x, probe.end.y - probe.start.y);
    let len_d = dx.hypot(dy);
    let len_e = ex.hypot(ey);

    // Repeated vertex; its neighbours report the hit.
    if len_d == 0.0 {
        return None;
    }

    if len_e == 0.0 {
        return closest_within(segment, probe.start, tolerance.curve)
            .map(|t| (t, IntersectionKind::Point));
    }

    let (wx, wy) = (probe.start.x - segment.start.x, probe.start.y - segment.start.y);
    let denom = cross(dx, dy, ex, ey);

    if denom.abs() <= PARALLEL_SINE * len_d * len_e {
        return overlap(segment, probe, tolerance.overlap).map(|t| (t, IntersectionKind::Overlap));
    }

    let t = cross(wx, wy, ex, ey) / denom;
    let u = cross(wx, wy, dx, dy) / denom;
    let t_slack = tolerance.curve / len_d;
    let u_slack = tolerance.curve / len_e;

    if t < -t_slack || t > 1.0 + t_slack || u < -u_slack || u > 1.0 + u_slack {
        return None;
    }

    let t = t.clamp(0.0, 1.0);
    if probe.distance_to(segment.point_at(t)) <= tolerance.curve {
        Some((t, IntersectionKind::Point))
    } else {
        None
    }
}

/// Fraction along `segment` of its closest point to `p`, if within `tol`.
fn closest_within(segment: &LineSegment, p: Point2, tol: f64) -> Option<f64> {
    let (dx, dy) = (segment.end.x - segment.start.x, segment.end.y - segment.start.y);
    let len_sq = dx * dx + dy * dy;
    let t = (((p.x - segment.start.x) * dx + (p.y - segment.start.y) * dy) / len_sq).clamp(0.0, 1.0);
    (segment.point_at(t).distance(p) <= tol).then_some(t)
}

/// Parallel case: fraction along `segment` of the first point it shares with
/// the probe, if the two lie within `tol` of each other.
fn overlap(segment: &LineSegment, probe: &LineSegment, tol: f64) -> Option<f64> {
    let (ex, ey) = (probe.end.x - probe.start.x, probe.end.y - probe.start.y);
    let len_sq = ex * ex + ey * ey;
    let len = len_sq.sqrt();

    let offset = cross(
        segment.start.x - probe.start.x,
        segment.start.y - probe.start.y,
        ex,
        ey,
    )
    .abs()
        / len;
    if offset > tol {
        return None;
    }

    let project = |p: Point2| ((p.x - probe.start.x) * ex + (p.y - probe.start.y) * ey) / len_sq;
    let s0 = project(segment.start);
    let s1 = project(segment.end);

    let slack = tol / len;
    let lo = s0.min(s1).max(-slack);
    let hi = s0.max(s1).min(1.0 + slack);
    if lo > hi {
        return None;
    }

    let ta = (lo - s0) / (s1 - s0);
    let tb = (hi - s0) / (s1 - s0);
    Some(ta.min(tb).clamp(0.0, 1.0))
}
