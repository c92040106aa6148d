//! Kinda weird that arc features are missing from geo_types, but ok, here are some.
use geo_types::{coord, Coord, LineString, MultiPolygon, Point, Polygon, Rect};
use std::f64::consts::PI;

use crate::geo_types::{lerp, PointOps};

/// How many sides a circle gets before nobody can tell the difference. Always
/// a multiple of four, so there is a vertex on each axis and the ring mirrors
/// cleanly both ways.
pub fn circle_sides(radius: f64) -> usize {
    let sides = radius.abs().round() * 4.0;
    if sides.is_finite() {
        (sides as usize).clamp(32, 1000)
    } else {
        1000
    }
}

/// Closed ring around an axis aligned ellipse, sampled like [`circle_ring`].
/// The last coordinate is a copy of the first.
pub fn ellipse_ring(center: Point<f64>, radius_x: f64, radius_y: f64) -> LineString<f64> {
    let sides = circle_sides(radius_x.abs().max(radius_y.abs()));
    let mut coords: Vec<Coord<f64>> = (0..sides)
        .map(|i| {
            let angle = PI + (i as f64 / sides as f64) * (2.0 * PI);
            coord! {x: center.x() + angle.cos() * radius_x, y: center.y() + angle.sin() * radius_y}
        })
        .collect();
    coords.push(coords[0]);
    LineString::new(coords)
}

/// Closed ring approximating a circle. Starts at the leftmost point and heads
/// through the top (y-down), so vertex order matches the circle parameter used by
/// the intersection queries.
pub fn circle_ring(center: Point<f64>, radius: f64) -> LineString<f64> {
    let radius = radius.abs();
    ellipse_ring(center, radius, radius)
}

pub fn circle_polygon(center: Point<f64>, radius: f64) -> Polygon<f64> {
    Polygon::new(circle_ring(center, radius), vec![])
}

pub fn rect_polygon(rect: &Rect<f64>) -> Polygon<f64> {
    rect.to_polygon()
}

/// A stadium: the segment p1-p2 thickened by `radius` with round caps.
/// Degenerates to a circle when both ends coincide.
pub fn capsule(p1: Point<f64>, p2: Point<f64>, radius: f64) -> Polygon<f64> {
    let axis = p2 - p1;
    if axis.length() < f64::EPSILON {
        return circle_polygon(p1, radius);
    }
    let heading = axis.y().atan2(axis.x());
    let half = circle_sides(radius) / 2;
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(2 * half + 3);
    for (end, offset) in [(p2, -PI / 2.0), (p1, PI / 2.0)] {
        for i in 0..=half {
            let angle = heading + offset + PI * (i as f64 / half as f64);
            coords.push(coord! {x: end.x() + radius * angle.cos(), y: end.y() + radius * angle.sin()});
        }
    }
    coords.push(coords[0]);
    Polygon::new(LineString::new(coords), vec![])
}

/// Polyline through `points`, appending the first point again when `close` is set.
pub fn polyline(points: &[Point<f64>], close: bool) -> LineString<f64> {
    let mut coords: Vec<Coord<f64>> = points.iter().map(|p| p.0).collect();
    if close {
        if let Some(first) = coords.first().copied() {
            coords.push(first);
        }
    }
    LineString::new(coords)
}

/// Split `from -> to` into `steps` equal pieces, both ends included.
pub fn subdivide(from: Point<f64>, to: Point<f64>, steps: usize) -> Vec<Point<f64>> {
    if steps == 0 {
        return vec![from];
    }
    (0..=steps)
        .map(|i| lerp(from, to, i as f64 / steps as f64))
        .collect()
}

pub fn as_multi(polygon: Polygon<f64>) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon])
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::Area;

    #[test]
    fn test_circle_ring_starts_left() {
        let ring = circle_ring(Point::new(10.0, 10.0), 5.0);
        let first = ring.0[0];
        assert!((first.x - 5.0).abs() < 1e-9);
        assert!((first.y - 10.0).abs() < 1e-9);
        // Next vertex is above (smaller y) in screen space.
        assert!(ring.0[1].y < 10.0);
        assert!(ring.is_closed());
    }

    #[test]
    fn test_circle_sides_clamped() {
        assert_eq!(circle_sides(0.0), 32);
        assert_eq!(circle_sides(100.0), 400);
        assert_eq!(circle_sides(1e9), 1000);
        assert_eq!(circle_sides(f64::NAN), 1000);
    }

    #[test]
    fn test_circle_sides_quartered() {
        for radius in [8.3, 33.3, 60.0, 136.07, 136.25, 247.9] {
            assert_eq!(circle_sides(radius) % 4, 0, "radius {}", radius);
        }
    }

    #[test]
    fn test_circle_ring_mirrors() {
        let center = Point::new(3.0, -2.0);
        let ring = circle_ring(center, 136.07);
        assert_eq!(ring.0.first(), ring.0.last());
        let (mut min_x, mut max_x) = (f64::MAX, f64::MIN);
        for c in &ring.0 {
            min_x = min_x.min(c.x);
            max_x = max_x.max(c.x);
        }
        assert!(((min_x + max_x) / 2.0 - center.x()).abs() < 1e-9);
        assert!((max_x - min_x - 2.0 * 136.07).abs() < 1e-9);
    }

    #[test]
    fn test_ellipse_ring_closed() {
        let ring = ellipse_ring(Point::new(0.0, 0.0), 40.0, 10.0);
        assert!(ring.is_closed());
        assert_eq!(ring.0.len(), circle_sides(40.0) + 1);
        assert!((ring.0[0].x + 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_capsule_area() {
        let poly = capsule(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 2.0);
        let expected = 10.0 * 4.0 + PI * 4.0;
        assert!((poly.unsigned_area() - expected).abs() / expected < 0.01);
    }
}
