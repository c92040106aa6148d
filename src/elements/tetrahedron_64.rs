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
pub struct Tetrahedron64Settings {
    /// Flower of life circles behind the grid.
    pub circles: bool,
    /// Outer and inner triangles plus the hexagon edges.
    pub architecture: bool,
    /// The triangular lattice filling the hexagon.
    pub multidimensional: bool,
    /// Spokes from the center to the lower and upper corners.
    pub union: bool,
}

impl Default for Tetrahedron64Settings {
    fn default() -> Self {
        Self {
            circles: false,
            architecture: true,
            multidimensional: true,
            union: true,
        }
    }
}

/// The 64 tetrahedron grid: an upward triangle of the full radius with its
/// corners cut back to a hexagon, an inner triangle of half the radius, and a
/// lattice of smaller triangles between them.
pub fn tetrahedron_64(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &Tetrahedron64Settings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let inner_radius = radius / 2.0;

    ctx.cosmos(blueprint, center, radius);
    if settings.circles {
        create_circle(center, inner_radius, stroke, width, None, Some(&mut *blueprint));
        for p in flower_points(center, inner_radius, 1, START_ANGLE, true) {
            create_circle(p, inner_radius, stroke, width, None, Some(&mut *blueprint));
        }
    }

    let outer = ring_points(center, radius, 3, PI / 6.0);
    let inner = ring_points(center, inner_radius, 3, PI / 6.0);
    let h = ring_points(center, radius, 6, PI / 6.0);

    let o = |a: usize, b: usize, t: f64| lerp(outer[a], outer[b], t);
    let i = |a: usize, b: usize, t: f64| lerp(inner[a], inner[b], t);
    // Midpoint of a hexagon edge.
    let m = |a: usize, b: usize| lerp(h[a], h[b], 0.5);
    let sixth = 1.0 / 6.0;

    let mut lines: Vec<Vec<Point<f64>>> = vec![];

    if settings.architecture {
        lines.push(vec![outer[0], outer[1], outer[2], outer[0]]);
        lines.push(vec![inner[0], inner[1], inner[2], inner[0]]);
        lines.push(vec![o(0, 1, 5.0 * sixth), m(1, 2), m(0, 1), o(0, 1, sixth)]);
        lines.push(vec![o(1, 2, sixth), m(2, 3), m(3, 4), o(1, 2, 5.0 * sixth)]);
        lines.push(vec![o(2, 0, sixth), m(4, 5), m(5, 0), o(2, 0, 5.0 * sixth)]);
    }

    if settings.multidimensional {
        // Hexagon edge midpoints back to the outer triangle.
        lines.extend([
            vec![m(5, 0), o(2, 0, 4.0 * sixth)],
            vec![m(2, 3), o(1, 2, 2.0 * sixth)],
            vec![m(4, 5), o(2, 0, 2.0 * sixth)],
            vec![m(3, 4), o(1, 2, 4.0 * sixth)],
            vec![m(0, 1), o(0, 1, 2.0 * sixth)],
            vec![m(1, 2), o(0, 1, 4.0 * sixth)],
        ]);

        // Hexagon edge midpoints to the inner triangle tips.
        lines.extend([
            vec![m(4, 5), inner[2]],
            vec![m(3, 4), inner[2]],
            vec![m(5, 0), inner[0]],
            vec![m(2, 3), inner[1]],
            vec![m(0, 1), inner[0]],
            vec![m(1, 2), inner[1]],
        ]);

        let half = |a: Point<f64>, b: Point<f64>| lerp(a, b, 0.5);
        lines.extend([
            vec![half(m(4, 5), inner[2]), half(m(3, 4), inner[2])],
            vec![half(m(5, 0), inner[0]), half(m(0, 1), inner[0])],
            vec![half(m(2, 3), inner[1]), half(m(1, 2), inner[1])],
            vec![half(m(5, 0), inner[0]), i(2, 0, 5.0 * sixth)],
            vec![half(m(2, 3), inner[1]), i(1, 2, sixth)],
            vec![o(1, 2, 5.0 * sixth - sixth / 2.0), i(1, 2, 5.0 * sixth)],
            vec![o(2, 0, sixth + sixth / 2.0), i(2, 0, sixth)],
            vec![o(0, 1, sixth + sixth / 2.0), i(0, 1, sixth)],
            vec![o(0, 1, 5.0 * sixth - sixth / 2.0), i(0, 1, 5.0 * sixth)],
        ]);

        // Inverted triangles, middle then sides.
        lines.extend([
            vec![i(2, 0, 0.5), i(0, 1, 0.5), i(1, 2, 0.5), i(2, 0, 0.5)],
            vec![i(2, 0, 4.0 * sixth), o(2, 0, 0.5), i(2, 0, 2.0 * sixth)],
            vec![i(1, 2, 2.0 * sixth), o(1, 2, 0.5), i(1, 2, 4.0 * sixth)],
        ]);

        let corner = |a: usize, b: usize, c: usize, t: f64| lerp(m(a, b), m(b, c), t);
        lines.extend([
            vec![i(0, 1, 2.0 * sixth), o(0, 1, 0.5), i(0, 1, 4.0 * sixth)],
            vec![o(2, 0, 3.5 * sixth), corner(4, 5, 0, 0.5), o(2, 0, 2.5 * sixth)],
            vec![o(1, 2, 2.5 * sixth), corner(2, 3, 4, 0.5), o(1, 2, 3.5 * sixth)],
            vec![o(0, 1, 2.5 * sixth), corner(0, 1, 2, 0.5), o(0, 1, 3.5 * sixth)],
            vec![corner(4, 5, 0, 4.0 * sixth), h[5], corner(4, 5, 0, 2.0 * sixth)],
            vec![corner(2, 3, 4, 2.0 * sixth), h[3], corner(2, 3, 4, 4.0 * sixth)],
            vec![corner(0, 1, 2, 2.0 * sixth), h[1], corner(0, 1, 2, 4.0 * sixth)],
        ]);
    }

    if settings.union {
        for k in [5, 1, 3] {
            lines.push(vec![center, h[k]]);
        }
    }

    for line in lines {
        create_line(&line, stroke, width, Some(&mut *form), None);
    }
    Ok(())
}

impl GeometryGenerator for Tetrahedron64Settings {
    fn name(&self) -> &str {
        "64 Tetrahedron"
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
        tetrahedron_64(blueprint, form, center, radius, self, ctx)
    }
}
