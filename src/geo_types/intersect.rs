//! Intersection queries between paths.
//!
//! Results are ordered by where they fall along the *first* path: curve index
//! first, then the parameter along that curve. Circles are a single curve whose
//! parameter starts at the leftmost point and runs through the top (y-down), the
//! same way [`crate::geo_types::shapes::circle_ring`] walks its vertices.
//! Constructions that index into the results depend on that ordering.
use geo_types::{Coord, LineString, Point};
use log::{trace, warn};
use std::collections::HashSet;
use std::f64::consts::{PI, TAU};

use crate::document::{Path, Shape};
use crate::errors::GeometryError;

/// Parameter slack at segment ends. Touching an endpoint counts as a hit.
const CURVE_TIME_EPSILON: f64 = 1e-8;
/// Hits closer than this are the same hit, eg: a line through a polyline vertex.
const GEOMETRIC_EPSILON: f64 = 1e-7;

#[derive(Debug, Clone, Copy)]
enum Curve {
    Circle { center: Coord<f64>, radius: f64 },
    Segment { start: Coord<f64>, end: Coord<f64> },
}

#[derive(Debug, Clone, Copy)]
struct Location {
    curve: usize,
    time: f64,
    point: Coord<f64>,
}

fn ring_segments(ring: &LineString<f64>, out: &mut Vec<Curve>) {
    for line in ring.lines() {
        out.push(Curve::Segment {
            start: line.start,
            end: line.end,
        });
    }
}

fn curves(path: &Path) -> Vec<Curve> {
    let mut out = vec![];
    match &path.shape {
        Shape::Circle { center, radius } => out.push(Curve::Circle {
            center: center.0,
            radius: radius.abs(),
        }),
        Shape::Polyline(line) => ring_segments(line, &mut out),
        Shape::Area(area) => {
            for poly in area.iter() {
                ring_segments(poly.exterior(), &mut out);
                for interior in poly.interiors() {
                    ring_segments(interior, &mut out);
                }
            }
        }
    }
    out
}

fn cross(a: Coord<f64>, b: Coord<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

fn dot(a: Coord<f64>, b: Coord<f64>) -> f64 {
    a.x * b.x + a.y * b.y
}

fn in_range(t: f64) -> bool {
    t >= -CURVE_TIME_EPSILON && t <= 1.0 + CURVE_TIME_EPSILON
}

/// Circle parameter in [0, 1): 0 at the leftmost point, 0.25 at the top.
fn circle_time(center: Coord<f64>, point: Coord<f64>) -> f64 {
    let theta = (point.y - center.y).atan2(point.x - center.x);
    let u = (theta - PI).rem_euclid(TAU) / TAU;
    if u >= 1.0 {
        0.0
    } else {
        u
    }
}

fn segment_segment(
    a0: Coord<f64>,
    a1: Coord<f64>,
    b0: Coord<f64>,
    b1: Coord<f64>,
) -> Option<(f64, Coord<f64>)> {
    let r = a1 - a0;
    let s = b1 - b0;
    let denom = cross(r, s);
    let scale = (dot(r, r) * dot(s, s)).sqrt();
    if denom.abs() <= 1e-12 * scale || scale == 0.0 {
        // Parallel or degenerate. Overlapping collinear runs are not reported.
        return None;
    }
    let qp = b0 - a0;
    let t = cross(qp, s) / denom;
    let u = cross(qp, r) / denom;
    if in_range(t) && in_range(u) {
        let t = t.clamp(0.0, 1.0);
        Some((t, a0 + r * t))
    } else {
        None
    }
}

/// Segment parameters where the segment meets the circle, ascending.
fn segment_circle(start: Coord<f64>, end: Coord<f64>, center: Coord<f64>, radius: f64) -> Vec<f64> {
    let d = end - start;
    let f = start - center;
    let a = dot(d, d);
    if a == 0.0 {
        return vec![];
    }
    let b = 2.0 * dot(f, d);
    let c = dot(f, f) - radius * radius;
    let disc = b * b - 4.0 * a * c;
    // Half chord length, squared, in drawing units.
    let half_chord_sq = disc / (4.0 * a);
    let roots = if half_chord_sq < -(GEOMETRIC_EPSILON * radius.max(1.0)).powi(2) {
        vec![]
    } else if half_chord_sq.max(0.0).sqrt() < GEOMETRIC_EPSILON {
        vec![-b / (2.0 * a)]
    } else {
        let sq = disc.max(0.0).sqrt();
        vec![(-b - sq) / (2.0 * a), (-b + sq) / (2.0 * a)]
    };
    roots
        .into_iter()
        .filter(|t| in_range(*t))
        .map(|t| t.clamp(0.0, 1.0))
        .collect()
}

fn circle_circle(c1: Coord<f64>, r1: f64, c2: Coord<f64>, r2: f64) -> Vec<Coord<f64>> {
    let delta = c2 - c1;
    let d = dot(delta, delta).sqrt();
    if d < GEOMETRIC_EPSILON {
        // Concentric, either nested or coincident. Nothing to report.
        return vec![];
    }
    if d > r1 + r2 + GEOMETRIC_EPSILON || d < (r1 - r2).abs() - GEOMETRIC_EPSILON {
        return vec![];
    }
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let mid = c1 + delta * (a / d);
    if h < GEOMETRIC_EPSILON {
        return vec![mid];
    }
    let perp = Coord {
        x: -delta.y / d,
        y: delta.x / d,
    };
    vec![mid + perp * h, mid - perp * h]
}

fn curve_hits(index: usize, a: &Curve, b: &Curve, out: &mut Vec<Location>) {
    match (a, b) {
        (Curve::Segment { start: a0, end: a1 }, Curve::Segment { start: b0, end: b1 }) => {
            if let Some((time, point)) = segment_segment(*a0, *a1, *b0, *b1) {
                out.push(Location { curve: index, time, point });
            }
        }
        (Curve::Segment { start, end }, Curve::Circle { center, radius }) => {
            for time in segment_circle(*start, *end, *center, *radius) {
                let point = *start + (*end - *start) * time;
                out.push(Location { curve: index, time, point });
            }
        }
        (Curve::Circle { center, radius }, Curve::Segment { start, end }) => {
            for t in segment_circle(*start, *end, *center, *radius) {
                let point = *start + (*end - *start) * t;
                out.push(Location {
                    curve: index,
                    time: circle_time(*center, point),
                    point,
                });
            }
        }
        (Curve::Circle { center: c1, radius: r1 }, Curve::Circle { center: c2, radius: r2 }) => {
            for point in circle_circle(*c1, *r1, *c2, *r2) {
                out.push(Location {
                    curve: index,
                    time: circle_time(*c1, point),
                    point,
                });
            }
        }
    }
}

/// Ordered crossing points of two paths, with an explicit count so callers can
/// assert what they expect instead of indexing blindly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Intersections {
    points: Vec<Point<f64>>,
}

impl Intersections {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point<f64>> {
        self.points
    }

    pub fn get(&self, index: usize) -> Result<Point<f64>, GeometryError> {
        self.points
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    pub fn first(&self) -> Result<Point<f64>, GeometryError> {
        self.get(0)
    }

    /// Fail with a descriptive error unless exactly `count` hits were found.
    pub fn expect_count(&self, count: usize) -> Result<&Self, GeometryError> {
        if self.points.len() == count {
            Ok(self)
        } else {
            warn!(
                "intersection query expected {} hit(s), found {}",
                count,
                self.points.len()
            );
            Err(GeometryError::IntersectionCount {
                expected: count,
                found: self.points.len(),
            })
        }
    }
}

/// Where `a` and `b` cross, ordered along `a`.
pub fn get_intersections(a: &Path, b: &Path) -> Intersections {
    let curves_a = curves(a);
    let curves_b = curves(b);
    let mut locations: Vec<Location> = vec![];
    for (i, ca) in curves_a.iter().enumerate() {
        for cb in &curves_b {
            curve_hits(i, ca, cb, &mut locations);
        }
    }
    locations.sort_by(|l, r| {
        l.curve
            .cmp(&r.curve)
            .then(l.time.partial_cmp(&r.time).unwrap_or(std::cmp::Ordering::Equal))
    });
    let mut points: Vec<Point<f64>> = vec![];
    for location in locations {
        let duplicate = points.iter().any(|p| {
            (p.x() - location.point.x).hypot(p.y() - location.point.y) < GEOMETRIC_EPSILON
        });
        if !duplicate {
            points.push(Point(location.point));
        }
    }
    trace!("intersection query found {} point(s)", points.len());
    Intersections { points }
}

/// Every ordered pair `(i, j)` with `i != j`, concatenated in loop order.
/// Each crossing therefore shows up twice; dedupe with
/// [`filter_intersection_positions`].
pub fn intersect_all(paths: &[Path]) -> Vec<Point<f64>> {
    let mut out = vec![];
    for (i, a) in paths.iter().enumerate() {
        for (j, b) in paths.iter().enumerate() {
            if i != j {
                out.extend(get_intersections(a, b).into_points());
            }
        }
    }
    out
}

/// Drop points that land on an already seen point once both coordinates are
/// rounded to `tolerance`. Keeps first-seen order.
pub fn filter_intersection_positions(points: &[Point<f64>], tolerance: f64) -> Vec<Point<f64>> {
    let mut seen: HashSet<(i64, i64)> = HashSet::new();
    points
        .iter()
        .filter(|p| {
            let key = (
                (p.x() / tolerance).round() as i64,
                (p.y() / tolerance).round() as i64,
            );
            seen.insert(key)
        })
        .copied()
        .collect()
}

pub const DEFAULT_TOLERANCE: f64 = 1e-4;

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_types::PointOps;
    use geo_types::LineString;

    fn line(a: (f64, f64), b: (f64, f64)) -> Path {
        Path::polyline(LineString::from(vec![a, b]))
    }

    #[test]
    fn test_line_line() {
        let hits = get_intersections(&line((-10.0, 0.0), (10.0, 0.0)), &line((0.0, -10.0), (0.0, 10.0)));
        assert_eq!(hits.len(), 1);
        assert!(hits.first().unwrap().distance(&Point::new(0.0, 0.0)) < 1e-12);
    }

    #[test]
    fn test_line_endpoint_counts() {
        let hits = get_intersections(&line((0.0, 0.0), (10.0, 0.0)), &line((10.0, -5.0), (10.0, 5.0)));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_segments_are_finite() {
        let hits = get_intersections(&line((0.0, 0.0), (10.0, 0.0)), &line((20.0, -5.0), (20.0, 5.0)));
        assert!(hits.is_empty());
        assert_eq!(
            hits.first(),
            Err(GeometryError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_line_circle_ordered_along_line() {
        let circle = Path::circle(Point::new(0.0, 0.0), 5.0);
        let hits = get_intersections(&line((10.0, 0.0), (-10.0, 0.0)), &circle);
        assert_eq!(hits.len(), 2);
        assert!(hits.get(0).unwrap().distance(&Point::new(5.0, 0.0)) < 1e-9);
        assert!(hits.get(1).unwrap().distance(&Point::new(-5.0, 0.0)) < 1e-9);
    }

    #[test]
    fn test_circle_line_ordered_from_left_through_top() {
        let circle = Path::circle(Point::new(0.0, 0.0), 5.0);
        let vertical = line((0.0, -10.0), (0.0, 10.0));
        let hits = get_intersections(&circle, &vertical);
        assert_eq!(hits.len(), 2);
        // Top (y = -5) comes before bottom walking from the leftmost point.
        assert!(hits.get(0).unwrap().distance(&Point::new(0.0, -5.0)) < 1e-9);
        assert!(hits.get(1).unwrap().distance(&Point::new(0.0, 5.0)) < 1e-9);
    }

    #[test]
    fn test_tangent_line_single_hit() {
        let circle = Path::circle(Point::new(0.0, 0.0), 5.0);
        let hits = get_intersections(&line((-10.0, 5.0), (10.0, 5.0)), &circle);
        assert_eq!(hits.len(), 1);
        assert!(hits.expect_count(1).is_ok());
        assert_eq!(
            hits.expect_count(2),
            Err(GeometryError::IntersectionCount { expected: 2, found: 1 })
        );
    }

    #[test]
    fn test_circle_circle() {
        let a = Path::circle(Point::new(0.0, 0.0), 5.0);
        let b = Path::circle(Point::new(5.0, 0.0), 5.0);
        let hits = get_intersections(&a, &b);
        assert_eq!(hits.len(), 2);
        for p in hits.points() {
            assert!((p.distance(&Point::new(0.0, 0.0)) - 5.0).abs() < 1e-9);
            assert!((p.distance(&Point::new(5.0, 0.0)) - 5.0).abs() < 1e-9);
        }
        // Upper crossing first.
        assert!(hits.get(0).unwrap().y() < 0.0);
        let far = Path::circle(Point::new(50.0, 0.0), 5.0);
        assert!(get_intersections(&a, &far).is_empty());
    }

    #[test]
    fn test_polyline_vertex_hit_merged() {
        let bent = Path::polyline(LineString::from(vec![(-5.0, 5.0), (0.0, 0.0), (5.0, 5.0)]));
        let hits = get_intersections(&bent, &line((-10.0, 0.0), (10.0, 0.0)));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_filter_positions() {
        let points = vec![
            Point::new(1.0, 1.0),
            Point::new(1.00000001, 0.99999999),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        let filtered = filter_intersection_positions(&points, DEFAULT_TOLERANCE);
        assert_eq!(filtered, vec![Point::new(1.0, 1.0), Point::new(2.0, 1.0)]);
    }

    #[test]
    fn test_intersect_all_counts_each_pair_twice() {
        let lines = vec![
            line((-10.0, 0.0), (10.0, 0.0)),
            line((0.0, -10.0), (0.0, 10.0)),
            line((-10.0, 5.0), (10.0, 5.0)),
        ];
        let all = intersect_all(&lines);
        assert_eq!(all.len(), 4);
        assert_eq!(filter_intersection_positions(&all, DEFAULT_TOLERANCE).len(), 2);
    }
}
