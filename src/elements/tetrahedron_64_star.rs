//! The star variant of the 64 tetrahedron grid: both triangles of the
//! hexagram at full size, with the lattice laid out from their edges and from
//! two rounds of hexagon midpoints.
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::document::draw::{create_circle, create_line};
use crate::document::Group;
use crate::elements::flower_of_life::START_ANGLE;
use crate::errors::GeometryError;
use crate::geo_types::{flower_points, lerp, ring_points};
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Tetrahedron64StarSettings {
    /// Center circle, drawn to the blueprint.
    pub creation: bool,
    /// Flower of life circles, drawn to the blueprint.
    pub circles: bool,
    /// The downward triangle.
    pub masculinity: bool,
    /// The upward triangle.
    pub femininity: bool,
    /// Hexagon through the edge midpoints.
    pub architecture: bool,
    /// Lattice layers, innermost first: inner triangles, midpoint triangles,
    /// hexagon triangles, horizontals, verticals, corner caps.
    pub dimensions: [bool; 6],
    /// Long lines joining opposite points.
    pub union: bool,
}

impl Default for Tetrahedron64StarSettings {
    fn default() -> Self {
        Self {
            creation: true,
            circles: true,
            masculinity: true,
            femininity: true,
            architecture: true,
            dimensions: [true; 6],
            union: true,
        }
    }
}

/// Midpoint of every edge of the closed polygon through `points`.
fn midpoints(points: &[Point<f64>]) -> Vec<Point<f64>> {
    (0..points.len())
        .map(|i| lerp(points[i], points[(i + 1) % points.len()], 0.5))
        .collect()
}

fn closed(points: &[Point<f64>]) -> Vec<Point<f64>> {
    let mut out = points.to_vec();
    if let Some(first) = points.first() {
        out.push(*first);
    }
    out
}

pub fn tetrahedron_64_star(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &Tetrahedron64StarSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let inner_radius = radius / 2.0;

    ctx.cosmos(blueprint, center, radius);
    if settings.creation {
        create_circle(center, inner_radius, stroke, width, None, Some(&mut *blueprint));
    }
    if settings.circles {
        for p in flower_points(center, inner_radius, 1, START_ANGLE, true) {
            create_circle(p, inner_radius, stroke, width, None, Some(&mut *blueprint));
        }
    }

    let h = ring_points(center, radius, 6, PI / 6.0);
    let hm = midpoints(&h);
    let him = midpoints(&hm);
    let m = [h[4], h[0], h[2]];
    let f = [h[5], h[1], h[3]];
    let (quarter, three_quarters) = (0.25, 0.75);

    let mut lines: Vec<Vec<Point<f64>>> = vec![];
    if settings.masculinity {
        lines.push(closed(&m));
    }
    if settings.femininity {
        lines.push(closed(&f));
    }
    if settings.architecture {
        lines.push(closed(&hm));
    }

    let [inner, middle, hexagon, horizontal, vertical, caps] = settings.dimensions;
    let inner_feminine = closed(&[him[4], him[0], him[2]]);
    if inner {
        lines.push(closed(&[him[5], him[1], him[3]]));
        lines.push(inner_feminine.clone());
    }
    if middle {
        if !inner {
            lines.push(inner_feminine);
        }
        lines.push(closed(&midpoints(&f)));
        lines.push(closed(&midpoints(&m)));
    }
    if hexagon {
        lines.push(closed(&[hm[4], hm[0], hm[2]]));
        lines.push(closed(&[hm[3], hm[1], hm[5]]));
    }

    let fl = |a: usize, b: usize, t: f64| lerp(f[a], f[b], t);
    let ml = |a: usize, b: usize, t: f64| lerp(m[a], m[b], t);
    if horizontal {
        lines.extend([
            vec![fl(0, 1, quarter), fl(1, 2, three_quarters)],
            vec![ml(1, 0, quarter), ml(2, 0, quarter)],
            vec![fl(2, 0, three_quarters), fl(1, 2, quarter)],
            vec![ml(1, 0, three_quarters), ml(1, 2, three_quarters)],
            vec![fl(2, 0, quarter), fl(0, 1, three_quarters)],
            vec![ml(2, 0, three_quarters), ml(1, 2, quarter)],
        ]);
    }
    if vertical {
        lines.extend([
            vec![ml(0, 1, quarter), fl(0, 1, three_quarters)],
            vec![ml(2, 0, three_quarters), fl(1, 2, quarter)],
            vec![fl(2, 0, three_quarters), ml(2, 0, quarter)],
            vec![fl(0, 1, quarter), ml(1, 2, three_quarters)],
            vec![fl(2, 0, quarter), ml(0, 1, three_quarters)],
            vec![fl(1, 2, three_quarters), ml(1, 2, quarter)],
        ]);
    }
    if caps {
        for i in 0..6 {
            let k = (i + 4) % 6;
            let start = lerp(him[(k + 5) % 6], him[k], 4.0 / 6.0);
            let end = lerp(him[k], him[(k + 1) % 6], 2.0 / 6.0);
            lines.push(vec![start, him[k], end]);
            lines.push(vec![start, end]);
        }
    }

    if settings.union {
        lines.extend([
            vec![m[0], f[1]],
            vec![hm[4], hm[1]],
            vec![f[0], m[2]],
            vec![hm[5], hm[2]],
            vec![m[1], f[2]],
            vec![hm[0], hm[3]],
        ]);
    }

    for line in lines {
        create_line(&line, stroke, width, Some(&mut *form), None);
    }
    Ok(())
}

impl GeometryGenerator for Tetrahedron64StarSettings {
    fn name(&self) -> &str {
        "64 Tetrahedron Star"
    }

    fn configure(&self, settings: &mut SketchSettings) {
        settings.blueprint.cosmos = true;
    }

    fn draw(
        &self,
        blueprint: &mut Group,
        form: &mut Group,
        center: Point<f64>,
        radius: f64,
        ctx: &mut DrawContext<'_>,
    ) -> Result<(), GeometryError> {
        tetrahedron_64_star(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::test_context;
    use crate::geo_types::PointOps;

    fn draw(settings: &Tetrahedron64StarSettings) -> (Group, Group) {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        tetrahedron_64_star(&mut blueprint, &mut form, Point::new(0.0, 0.0), 100.0, settings, &ctx)
            .unwrap();
        (blueprint, form)
    }

    fn only(dimension: usize) -> Tetrahedron64StarSettings {
        let mut dimensions = [false; 6];
        dimensions[dimension] = true;
        Tetrahedron64StarSettings {
            masculinity: false,
            femininity: false,
            architecture: false,
            union: false,
            dimensions,
            ..Default::default()
        }
    }

    #[test]
    fn test_counts() {
        let (blueprint, form) = draw(&Default::default());
        assert_eq!(blueprint.len(), 1 + 12);
        assert_eq!(form.len(), 3 + 2 + 2 + 2 + 6 + 6 + 12 + 6);
        for path in form.paths() {
            for p in path.points() {
                assert!(p.distance(&Point::new(0.0, 0.0)) <= 100.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_middle_layer_alone_keeps_the_inner_triangle() {
        let (_, form) = draw(&only(1));
        assert_eq!(form.len(), 3);
    }

    #[test]
    fn test_horizontals_are_level() {
        let (_, form) = draw(&only(3));
        assert_eq!(form.len(), 6);
        let first = form.paths()[0].points();
        assert!((first[0].y() - first[1].y()).abs() < 1e-9);
    }

    #[test]
    fn test_caps_sit_on_the_inner_hexagon() {
        let (_, form) = draw(&only(5));
        assert_eq!(form.len(), 12);
        // Inner midpoint hexagon: two rounds of halving from the outer corners.
        let apothem = 100.0 * (PI / 6.0).cos();
        let inner = apothem * (PI / 6.0).cos();
        let tip = form.paths()[0].points()[1];
        assert!((tip.distance(&Point::new(0.0, 0.0)) - inner).abs() < 1e-9);
    }
}
