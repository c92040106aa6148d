use geo::{BoundingRect, Coord};
use geo_types::{coord, LineString, MultiPolygon, Point, Polygon, Rect};
use nalgebra::Affine2;
use serde::{Deserialize, Serialize};

use crate::document::color::Color;
use crate::geo_types::matrix::{
    rotate_around_matrix, scale_matrix, translate_matrix, uniform_scale, TransformGeometry,
};
use crate::geo_types::shapes::{circle_polygon, rect_polygon};

/// The geometry carried by a [`Path`]. Circles stay analytic so that
/// intersection queries against them are exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { center: Point<f64>, radius: f64 },
    /// Open polyline, or an implicitly closed one when the first point is repeated.
    Polyline(LineString<f64>),
    /// Filled region, possibly with several parts and holes. Boolean results land here.
    Area(MultiPolygon<f64>),
}

/// A stroked and/or filled shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub shape: Shape,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub fill: Option<Color>,
    pub dash: Option<Vec<f64>>,
}

impl Path {
    pub fn new(shape: Shape) -> Path {
        Path {
            shape,
            stroke: None,
            stroke_width: 1.0,
            fill: None,
            dash: None,
        }
    }

    pub fn circle(center: Point<f64>, radius: f64) -> Path {
        Path::new(Shape::Circle { center, radius })
    }

    pub fn polyline(line: LineString<f64>) -> Path {
        Path::new(Shape::Polyline(line))
    }

    pub fn area(area: MultiPolygon<f64>) -> Path {
        Path::new(Shape::Area(area))
    }

    pub fn rect(rect: &Rect<f64>) -> Path {
        Path::area(MultiPolygon::new(vec![rect_polygon(rect)]))
    }

    pub fn stroke(mut self, color: &Color, width: f64) -> Self {
        self.stroke = Some(color.clone());
        self.stroke_width = width;
        self
    }

    pub fn fill(mut self, color: &Color) -> Self {
        self.fill = Some(color.clone());
        self
    }

    pub fn dash(mut self, dash: Vec<f64>) -> Self {
        self.dash = Some(dash);
        self
    }

    /// Copy the stroke/fill/dash of another path.
    pub fn styled_like(mut self, other: &Path) -> Self {
        self.stroke = other.stroke.clone();
        self.stroke_width = other.stroke_width;
        self.fill = other.fill.clone();
        self.dash = other.dash.clone();
        self
    }

    /// Circles and areas are closed; polylines only if they end where they start.
    pub fn is_closed(&self) -> bool {
        match &self.shape {
            Shape::Circle { .. } | Shape::Area(_) => true,
            Shape::Polyline(line) => line.0.len() > 2 && line.is_closed(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.shape {
            Shape::Circle { .. } => false,
            Shape::Polyline(line) => line.0.is_empty(),
            Shape::Area(area) => area.0.is_empty(),
        }
    }

    /// Closed outline as polygons, or None for open lines.
    pub fn to_polygons(&self) -> Option<MultiPolygon<f64>> {
        match &self.shape {
            Shape::Circle { center, radius } => {
                Some(MultiPolygon::new(vec![circle_polygon(*center, *radius)]))
            }
            Shape::Area(area) => Some(area.clone()),
            Shape::Polyline(line) if self.is_closed() => {
                Some(MultiPolygon::new(vec![Polygon::new(line.clone(), vec![])]))
            }
            Shape::Polyline(_) => None,
        }
    }

    /// Every vertex, in drawing order. Circles report their center.
    pub fn points(&self) -> Vec<Point<f64>> {
        match &self.shape {
            Shape::Circle { center, .. } => vec![*center],
            Shape::Polyline(line) => line.points().collect(),
            Shape::Area(area) => area
                .iter()
                .flat_map(|poly| {
                    std::iter::once(poly.exterior())
                        .chain(poly.interiors().iter())
                        .flat_map(|ring| ring.points())
                })
                .collect(),
        }
    }

    pub fn bounds(&self) -> Option<Rect<f64>> {
        match &self.shape {
            Shape::Circle { center, radius } => Some(Rect::new(
                coord! {x: center.x() - radius, y: center.y() - radius},
                coord! {x: center.x() + radius, y: center.y() + radius},
            )),
            Shape::Polyline(line) => line.bounding_rect(),
            Shape::Area(area) => area.bounding_rect(),
        }
    }

    /// Center of the bounding box.
    pub fn position(&self) -> Option<Point<f64>> {
        self.bounds().map(|b| Point(b.center()))
    }

    /// Move the path so its bounding box is centered on `position`.
    pub fn positioned(&self, position: Point<f64>) -> Path {
        match self.position() {
            Some(current) => {
                let delta: Coord<f64> = position.0 - current.0;
                self.transformed(&translate_matrix(delta.x, delta.y))
            }
            None => self.clone(),
        }
    }

    pub fn transformed(&self, affine: &Affine2<f64>) -> Path {
        let shape = match &self.shape {
            Shape::Circle { center, radius } => Shape::Circle {
                center: center.transformed(affine),
                radius: radius * uniform_scale(affine),
            },
            Shape::Polyline(line) => Shape::Polyline(line.transformed(affine)),
            Shape::Area(area) => Shape::Area(area.transformed(affine)),
        };
        Path {
            shape,
            ..self.clone()
        }
    }

    pub fn rotated(&self, radians: f64, pivot: Point<f64>) -> Path {
        self.transformed(&rotate_around_matrix(radians, pivot))
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Path {
        self.transformed(&translate_matrix(dx, dy))
    }

    /// Mirror image across the vertical line at `axis_x`.
    pub fn mirrored_x(&self, axis_x: f64) -> Path {
        self.transformed(
            &(translate_matrix(axis_x, 0.0) * scale_matrix(-1.0, 1.0) * translate_matrix(-axis_x, 0.0)),
        )
    }

    /// Arc length of the outline.
    pub fn length(&self) -> f64 {
        let ring_length = |ring: &LineString<f64>| -> f64 {
            ring.lines()
                .map(|l| (l.end.x - l.start.x).hypot(l.end.y - l.start.y))
                .sum()
        };
        match &self.shape {
            Shape::Circle { radius, .. } => std::f64::consts::TAU * radius.abs(),
            Shape::Polyline(line) => ring_length(line),
            Shape::Area(area) => area
                .iter()
                .map(|poly| {
                    ring_length(poly.exterior())
                        + poly.interiors().iter().map(ring_length).sum::<f64>()
                })
                .sum(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_types::PointOps;
    use std::f64::consts::PI;

    #[test]
    fn test_closed_polyline() {
        let open = Path::polyline(LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));
        assert!(!open.is_closed());
        assert!(open.to_polygons().is_none());
        let closed = Path::polyline(LineString::from(vec![
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 0.0),
        ]));
        assert!(closed.is_closed());
        assert!(closed.to_polygons().is_some());
    }

    #[test]
    fn test_rotated_circle() {
        let c = Path::circle(Point::new(10.0, 0.0), 2.0).rotated(PI, Point::new(0.0, 0.0));
        match c.shape {
            Shape::Circle { center, radius } => {
                assert!(center.distance(&Point::new(-10.0, 0.0)) < 1e-9);
                assert!((radius - 2.0).abs() < 1e-9);
            }
            _ => panic!("rotation changed the shape type"),
        }
    }

    #[test]
    fn test_positioned() {
        let p = Path::circle(Point::new(10.0, 10.0), 2.0).positioned(Point::new(0.0, 5.0));
        assert!(p.position().unwrap().distance(&Point::new(0.0, 5.0)) < 1e-9);
    }

    #[test]
    fn test_mirrored_x() {
        let line = Path::polyline(LineString::from(vec![(12.0, 1.0), (15.0, 4.0)]));
        let mirrored = line.mirrored_x(10.0).points();
        assert!(mirrored[0].distance(&Point::new(8.0, 1.0)) < 1e-12);
        assert!(mirrored[1].distance(&Point::new(5.0, 4.0)) < 1e-12);
        let rect = Path::rect(&Rect::new((0.0, 0.0), (2.0, 1.0))).mirrored_x(0.0);
        let bounds = rect.bounds().unwrap();
        assert_eq!((bounds.min().x, bounds.max().x), (-2.0, 0.0));
    }

    #[test]
    fn test_length() {
        let line = Path::polyline(LineString::from(vec![(0.0, 0.0), (3.0, 4.0)]));
        assert!((line.length() - 5.0).abs() < 1e-12);
        assert!((Path::circle(Point::new(0.0, 0.0), 1.0).length() - 2.0 * PI).abs() < 1e-12);
    }
}
