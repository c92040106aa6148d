//! Primitive drawing helpers. Each builds one [`Path`] with a consistent style,
//! optionally appends a copy to a group, and hands the path back. None of them
//! validate input: a zero radius just makes a point-sized circle.
use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::document::color::{white, Color};
use crate::document::{Group, Path};
use crate::geo_types::shapes::{ellipse_ring, polyline};

/// Width and height of a canvas or a drawing box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Size {
        Size { width, height }
    }
}

fn append(path: &Path, group: Option<&mut Group>) {
    if let Some(group) = group {
        group.add(path.clone());
    }
}

/// Stroked (and optionally filled) circle.
pub fn create_circle(
    center: Point<f64>,
    radius: f64,
    stroke: &Color,
    stroke_width: f64,
    fill: Option<&Color>,
    group: Option<&mut Group>,
) -> Path {
    let mut path = Path::circle(center, radius).stroke(stroke, stroke_width);
    if let Some(fill) = fill {
        path = path.fill(fill);
    }
    append(&path, group);
    path
}

/// Polyline through `points` in order. Repeating the first point at the end
/// closes it. The collector receives a copy for later intersection queries.
pub fn create_line(
    points: &[Point<f64>],
    stroke: &Color,
    stroke_width: f64,
    group: Option<&mut Group>,
    collector: Option<&mut Vec<Path>>,
) -> Path {
    let path = Path::polyline(polyline(points, false)).stroke(stroke, stroke_width);
    append(&path, group);
    if let Some(collector) = collector {
        collector.push(path.clone());
    }
    path
}

/// Small filled circle, white unless told otherwise.
pub fn dot(
    point: Point<f64>,
    radius: f64,
    group: Option<&mut Group>,
    color: Option<&Color>,
) -> Path {
    let fill = color.cloned().unwrap_or_else(white);
    let path = Path::circle(point, radius).fill(&fill);
    append(&path, group);
    path
}

/// Filled axis-aligned rectangle, eg: the dark background.
pub fn create_rect(
    top_left: Point<f64>,
    bottom_right: Point<f64>,
    fill: &Color,
    group: Option<&mut Group>,
) -> Path {
    let path = Path::rect(&geo_types::Rect::new(top_left.0, bottom_right.0)).fill(fill);
    append(&path, group);
    path
}

/// Closed ellipse, sampled densely enough to look smooth.
pub fn create_ellipse(
    center: Point<f64>,
    radius_x: f64,
    radius_y: f64,
    stroke: &Color,
    stroke_width: f64,
    group: Option<&mut Group>,
) -> Path {
    let ring = ellipse_ring(center, radius_x, radius_y);
    let path = Path::polyline(ring).stroke(stroke, stroke_width);
    append(&path, group);
    path
}

/// `divisions - 1` interior vertical and horizontal lines across a square of side
/// `size.width` centered on `center`, each inset by half a stroke from the edge,
/// plus an optional border. Always `2 * (divisions - 1) + border` paths.
pub fn create_grid(
    center: Point<f64>,
    size: Size,
    stroke: &Color,
    stroke_width: f64,
    divisions: usize,
    group: &mut Group,
    border: bool,
) {
    let side = size.width;
    let left = center.x() - side / 2.0;
    let top = center.y() - side / 2.0;
    let inset = stroke_width / 2.0;

    for i in 1..divisions.max(1) {
        let x = left + side * i as f64 / divisions as f64;
        create_line(
            &[Point::new(x, top + inset), Point::new(x, top + side - inset)],
            stroke,
            stroke_width,
            Some(&mut *group),
            None,
        );
    }
    for i in 1..divisions.max(1) {
        let y = top + side * i as f64 / divisions as f64;
        create_line(
            &[Point::new(left + inset, y), Point::new(left + side - inset, y)],
            stroke,
            stroke_width,
            Some(&mut *group),
            None,
        );
    }
    if border {
        let (l, t, r, b) = (left + inset, top + inset, left + side - inset, top + side - inset);
        create_line(
            &[
                Point::new(l, t),
                Point::new(r, t),
                Point::new(r, b),
                Point::new(l, b),
                Point::new(l, t),
            ],
            stroke,
            stroke_width,
            Some(&mut *group),
            None,
        );
    }
}

/// One circle per point, for eyeballing a construction.
pub fn debug_points(points: &[Point<f64>], radius: f64, color: &Color, group: &mut Group) {
    for point in points {
        create_circle(*point, radius, color, 1.0, None, Some(&mut *group));
    }
}

/// Even dashes whose length divides the path exactly, close to `dash` long.
pub fn set_dash_length(path: &mut Path, dash: f64) {
    let length = path.length();
    if dash <= 0.0 || length <= 0.0 {
        return;
    }
    let dashes = (length / (dash * 2.0)).ceil();
    let adjusted = length / (dashes * 2.0);
    path.dash = Some(vec![adjusted, adjusted]);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::document::color::rgba;
    use crate::document::Shape;

    #[test]
    fn test_grid_count() {
        let mut group = Group::new("grid");
        create_grid(
            Point::new(0.0, 0.0),
            Size::new(500.0, 500.0),
            &rgba(1.0, 1.0, 1.0, 0.1),
            1.0,
            25,
            &mut group,
            true,
        );
        assert_eq!(group.len(), 49);

        let mut group = Group::new("grid");
        create_grid(
            Point::new(0.0, 0.0),
            Size::new(500.0, 500.0),
            &white(),
            1.0,
            5,
            &mut group,
            false,
        );
        assert_eq!(group.len(), 8);
    }

    #[test]
    fn test_grid_inset() {
        let mut group = Group::new("grid");
        create_grid(Point::new(250.0, 250.0), Size::new(500.0, 500.0), &white(), 2.0, 2, &mut group, false);
        // One vertical then one horizontal line through the center.
        match &group.paths()[0].shape {
            Shape::Polyline(line) => {
                assert_eq!(line.0[0].y, 1.0);
                assert_eq!(line.0[1].y, 499.0);
                assert_eq!(line.0[0].x, 250.0);
            }
            _ => panic!("grid lines should be polylines"),
        }
    }

    #[test]
    fn test_line_collector() {
        let mut group = Group::new("form");
        let mut collector = vec![];
        create_line(
            &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            &white(),
            1.0,
            Some(&mut group),
            Some(&mut collector),
        );
        create_line(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)], &white(), 1.0, None, Some(&mut collector));
        assert_eq!(group.len(), 1);
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn test_ellipse_is_closed() {
        let ellipse = create_ellipse(Point::new(10.0, 10.0), 30.0, 12.0, &white(), 1.0, None);
        assert!(ellipse.is_closed());
        let bounds = ellipse.bounds().unwrap();
        assert!((bounds.center().x - 10.0).abs() < 1e-9);
        assert!((bounds.center().y - 10.0).abs() < 1e-9);
        assert!((bounds.height() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_dot_defaults_white() {
        let d = dot(Point::new(0.0, 0.0), 2.0, None, None);
        assert_eq!(d.fill, Some(white()));
        assert!(d.stroke.is_none());
    }

    #[test]
    fn test_dash_divides_length() {
        let mut line = create_line(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)], &white(), 1.0, None, None);
        set_dash_length(&mut line, 3.0);
        let dash = line.dash.unwrap();
        let dashes = 100.0 / (dash[0] * 2.0);
        assert!((dashes - dashes.round()).abs() < 1e-9);
        assert!(dash[0] <= 3.0);
    }
}
