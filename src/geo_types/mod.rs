use geo_types::{CoordFloat, Point};
use num_traits::Float;
use std::f64::consts::TAU;

use crate::geo_types::shapes::subdivide;

/// Basic construction shapes (circles, capsules, regular polygons) as geo_types geometry.
pub mod shapes;

/// Boolean ops for closed paths
pub mod boolean;

/// Intersection queries between paths, ordered the way a pen would meet them
/// walking along the first path.
pub mod intersect;

/// Affine helpers, mostly for clone-and-rotate rosettes.
pub mod matrix;

/// Catmull-Rom sampling for molding profiles and flutes.
pub mod spline;

/// Append-only record of constructed points, addressable by index or by name.
pub mod ledger;

/// Trait to convert geometry into SVG path data
pub mod svg;

/// Point arithmetic that geo_types leaves out. Add, subtract and scalar multiply
/// already come with [`geo_types::Point`]; this adds the vector-ish bits.
pub trait PointOps<T: CoordFloat> {
    /// Return the scalar distance between two [`geo_types::Point`]s.
    fn distance(&self, other: &Point<T>) -> T;

    /// Treat a [`geo_types::Point`] as a Vector and return its scalar length.
    fn length(&self) -> T;

    /// Unit vector in the same direction. The zero vector stays zero.
    fn normalize(&self) -> Point<T>;

    /// Rotate by `radians` around `pivot`. Positive angles turn clockwise on a
    /// y-down screen, which is the usual mathematical rotation in those coordinates.
    fn rotate_around(&self, radians: T, pivot: &Point<T>) -> Point<T>;
}

impl<T: CoordFloat> PointOps<T> for Point<T> {
    fn distance(&self, other: &Point<T>) -> T {
        let p = *self - *other;
        p.length()
    }

    fn length(&self) -> T {
        Float::hypot(self.x(), self.y())
    }

    fn normalize(&self) -> Point<T> {
        let length = self.length();
        if length.is_zero() {
            *self
        } else {
            Point::new(self.x() / length, self.y() / length)
        }
    }

    fn rotate_around(&self, radians: T, pivot: &Point<T>) -> Point<T> {
        let (sin, cos) = radians.sin_cos();
        let d = *self - *pivot;
        Point::new(
            pivot.x() + d.x() * cos - d.y() * sin,
            pivot.y() + d.x() * sin + d.y() * cos,
        )
    }
}

/// `p1 + (p2 - p1) * t`. `t` is deliberately not clamped, values outside [0, 1]
/// extend the segment.
pub fn lerp(p1: Point<f64>, p2: Point<f64>, t: f64) -> Point<f64> {
    p1 + (p2 - p1) * t
}

/// Point on a circle, angle in radians from the +x axis.
pub fn point_on_circle(center: Point<f64>, radius: f64, radians: f64) -> Point<f64> {
    Point::new(
        center.x() + radius * radians.cos(),
        center.y() + radius * radians.sin(),
    )
}

/// `count` points evenly spaced around a circle, the first at `start_angle`.
pub fn ring_points(
    center: Point<f64>,
    radius: f64,
    count: usize,
    start_angle: f64,
) -> Vec<Point<f64>> {
    (0..count)
        .map(|i| point_on_circle(center, radius, start_angle + (TAU / count as f64) * i as f64))
        .collect()
}

/// The flower of life layout. Ring `i` is a hexagon of radius
/// `inner_radius * (i + 1)` whose edges are each split into `i + 1` steps.
/// With `include_start` both edge endpoints are emitted for every edge (so
/// corners repeat), otherwise the first point of each edge is skipped.
pub fn flower_points(
    center: Point<f64>,
    inner_radius: f64,
    rings: usize,
    start_angle: f64,
    include_start: bool,
) -> Vec<Point<f64>> {
    let mut out = vec![];
    for i in 0..rings {
        let hexagon = ring_points(center, inner_radius * (i + 1) as f64, 6, start_angle);
        for k in 0..hexagon.len() {
            let p0 = hexagon[k];
            let p1 = hexagon[(k + 1) % hexagon.len()];
            let first = if include_start { 0 } else { 1 };
            out.extend(subdivide(p0, p1, i + 1).into_iter().skip(first));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_length() {
        let p = Point::new(10.0f64, 0.0f64);
        assert!((p.length() - 10.0).abs() < 0.0001)
    }

    #[test]
    fn test_distance() {
        let d = Point::new(10.0, 0.0).distance(&Point::new(0.0, 10.0));
        assert!((d - (10.0f64.powi(2) + 10.0f64.powi(2)).sqrt()).abs() < 0.0001)
    }

    #[test]
    fn test_normalize() {
        let n = Point::new(3.0, 4.0).normalize();
        assert!((n.x() - 0.6).abs() < 1e-12);
        assert!((n.y() - 0.8).abs() < 1e-12);
        assert_eq!(Point::new(0.0, 0.0).normalize(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_rotate_around() {
        let p = Point::new(2.0, 1.0).rotate_around(PI / 2.0, &Point::new(1.0, 1.0));
        assert!(p.distance(&Point::new(1.0, 2.0)) < 1e-12);
    }

    #[test]
    fn test_lerp_boundaries() {
        let a = Point::new(3.5, -2.0);
        let b = Point::new(-7.25, 11.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        let mid = lerp(a, b, 0.5);
        assert!((mid.x() - (a.x() + b.x()) / 2.0).abs() < 1e-12);
        assert!((mid.y() - (a.y() + b.y()) / 2.0).abs() < 1e-12);
        assert_eq!(
            lerp(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 0.25),
            Point::new(2.5, 0.0)
        );
    }

    #[test]
    fn test_lerp_extrapolates() {
        let p = lerp(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.5);
        assert_eq!(p, Point::new(15.0, 0.0));
    }

    #[test]
    fn test_point_on_circle_distance() {
        let center = Point::new(12.0, -4.0);
        for i in 0..360 {
            let theta = (i as f64).to_radians() * 3.7;
            let p = point_on_circle(center, 42.0, theta);
            assert!((p.distance(&center) - 42.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_flower_points_counts() {
        let center = Point::new(0.0, 0.0);
        assert_eq!(flower_points(center, 10.0, 2, -PI / 6.0, true).len(), 30);
        assert_eq!(flower_points(center, 10.0, 2, -PI / 6.0, false).len(), 18);
        let points = flower_points(center, 10.0, 2, -PI / 6.0, false);
        // Second ring, second vertex
        let vertex = point_on_circle(center, 20.0, -PI / 6.0 + PI / 3.0);
        assert!(points[7].distance(&vertex) < 1e-9);
    }
}
