//! The identity mark: an icosahedron seen down a three-fold axis, drawn as two
//! nested hexagrams, ringed by twelve stars with a moon above and below.
//!
//! The hexagram is laid out on six spokes, each carrying three points at
//! `0`, `radius / 2.5` and `2 * radius / 2.5` from the center. Front edges
//! and back edges get their own strokes so the back can be dimmed.
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use crate::document::color::{gray, Color};
use crate::document::draw::{create_circle, create_line, dot};
use crate::document::{Group, Path};
use crate::errors::GeometryError;
use crate::geo_types::boolean::BooleanOp;
use crate::geo_types::point_on_circle;
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

/// Stroke of one part of the mark. Width is in units of the sketch stroke width.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MarkStroke {
    pub width: f64,
    /// Gray level, 1 for white.
    pub level: f64,
}

impl MarkStroke {
    pub fn new(width: f64, level: f64) -> Self {
        Self { width, level }
    }

    fn color(&self) -> Color {
        gray(self.level)
    }
}

impl Default for MarkStroke {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IdentitySettings {
    /// The outer circle.
    pub creation: MarkStroke,
    pub stars: MarkStroke,
    /// The small inner circle.
    pub realm: MarkStroke,
    /// Gray level of both moons.
    pub moon: f64,
    pub front: MarkStroke,
    pub back: MarkStroke,
    /// Construction circles, drawn to the blueprint.
    pub debug_width: f64,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            creation: MarkStroke::new(2.0, 1.0),
            stars: MarkStroke::new(1.0, 1.0),
            realm: MarkStroke::new(1.0, 0.5),
            moon: 1.0,
            front: MarkStroke::new(1.5, 1.0),
            back: MarkStroke::new(1.5, 0.5),
            debug_width: 1.0,
        }
    }
}

/// Three points on the spoke at `angle`, from the center outwards.
fn spoke(center: Point<f64>, radius: f64, angle: f64) -> [Point<f64>; 3] {
    [0.0, 1.0, 2.0].map(|j| point_on_circle(center, j * radius / 2.5, angle))
}

/// Which half of the icosahedron to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Front,
    Back,
    Both,
}

struct Mark<'a, 'c> {
    blueprint: &'a mut Group,
    form: &'a mut Group,
    settings: &'a IdentitySettings,
    ctx: &'a DrawContext<'c>,
    center: Point<f64>,
}

impl Mark<'_, '_> {
    fn line(&mut self, stroke: &MarkStroke, points: &[Point<f64>]) {
        let width = stroke.width * self.ctx.width();
        create_line(points, &stroke.color(), width, Some(&mut *self.form), None);
    }

    fn guide(&mut self, point: Point<f64>, radius: f64) {
        let width = self.settings.debug_width * self.ctx.width();
        let color = &self.ctx.settings.debug_stroke_color;
        create_circle(point, radius, color, width, None, Some(&mut *self.blueprint));
    }

    /// The icosahedron: two triangles and three spokes per side, plus the hexagon outline in front.
    fn structure(&mut self, radius: f64, inner_radius: f64, side: Side) {
        let p: Vec<[Point<f64>; 3]> = (0..6)
            .map(|i| spoke(self.center, radius, -PI / 6.0 + TAU * i as f64 / 6.0))
            .collect();
        for point in p.iter().flatten() {
            self.guide(*point, inner_radius);
        }

        let settings = self.settings;
        let mut edges = |stroke: &MarkStroke, outer: [usize; 3], inner: [usize; 3]| {
            self.line(stroke, &[p[outer[0]][2], p[outer[1]][2], p[outer[2]][2], p[outer[0]][2]]);
            self.line(stroke, &[p[inner[0]][1], p[inner[1]][1], p[inner[2]][1], p[inner[0]][1]]);
            for i in inner {
                self.line(stroke, &[p[i][1], p[i][2]]);
            }
        };
        if side != Side::Front {
            edges(&settings.back, [0, 2, 4], [1, 3, 5]);
        }
        if side != Side::Back {
            edges(&settings.front, [5, 1, 3], [0, 2, 4]);
            let mut outline: Vec<Point<f64>> = p.iter().map(|s| s[2]).collect();
            outline.push(p[0][2]);
            self.line(&settings.front, &outline);
        }
    }

    fn creation(&mut self, radius: f64) {
        let stroke = &self.settings.creation;
        let width = stroke.width * self.ctx.width();
        create_circle(self.center, radius, &stroke.color(), width, None, Some(&mut *self.form));
    }

    fn realm(&mut self, inner_radius: f64) {
        let stroke = &self.settings.realm;
        let width = stroke.width * self.ctx.width();
        create_circle(self.center, inner_radius / 2.0, &stroke.color(), width, None, Some(&mut *self.form));
    }

    /// Crescent above the hexagram and its half turn below.
    fn moon(&mut self, radius: f64, inner_radius: f64) -> Result<(), GeometryError> {
        let color = gray(self.settings.moon);
        let moon_radius = inner_radius / 2.0;
        let top = spoke(self.center, radius, -PI / 2.0)[2];
        let disc = Point::new(top.x(), top.y() - moon_radius * 1.75);
        let shadow = Point::new(disc.x(), disc.y() - moon_radius / 2.0);

        let crescent = Path::circle(disc, moon_radius)
            .fill(&color)
            .subtract(&Path::circle(shadow, moon_radius * 1.25))?;
        let opposite = crescent.rotated(PI, self.center);
        self.form.add(crescent);
        self.form.add(opposite);
        Ok(())
    }

    /// Twelve stars on the rim and six inside, every other inner one dimmed.
    fn stars(&mut self, radius: f64, inner_radius: f64) {
        let star_radius = inner_radius / 6.0;
        let bright = self.settings.stars.color();
        let dim = self.settings.back.color();
        for i in 0..12 {
            let points = spoke(self.center, radius, -PI / 2.0 + TAU * i as f64 / 12.0);
            for (j, point) in points.iter().enumerate() {
                let inner = j == 1 && i % 2 == 0;
                if j == 2 || inner {
                    let fill = if inner && i % 4 == 0 { &dim } else { &bright };
                    dot(*point, star_radius, Some(&mut *self.form), Some(fill));
                }
                self.guide(*point, inner_radius);
            }
        }
    }
}

pub fn identity(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &IdentitySettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let inner_radius = radius / 3.0 - radius / 3.0 / 2.5;
    let mut mark = Mark {
        blueprint,
        form,
        settings,
        ctx,
        center,
    };
    // The doubled structure frames the mark: its back half behind, its front on top.
    mark.structure(radius * 2.0, inner_radius * 2.0, Side::Back);
    mark.creation(radius);
    mark.structure(radius, inner_radius, Side::Both);
    mark.realm(inner_radius);
    mark.moon(radius, inner_radius)?;
    mark.stars(radius, inner_radius);
    mark.structure(radius * 2.0, inner_radius * 2.0, Side::Front);
    Ok(())
}

impl GeometryGenerator for IdentitySettings {
    fn name(&self) -> &str {
        "Identity"
    }

    fn configure(&self, settings: &mut SketchSettings) {
        // A quarter of the canvas width.
        settings.scale = 0.5;
    }

    fn draw(
        &self,
        blueprint: &mut Group,
        form: &mut Group,
        center: Point<f64>,
        radius: f64,
        ctx: &mut DrawContext<'_>,
    ) -> Result<(), GeometryError> {
        identity(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::test_context;
    use crate::geo_types::PointOps;

    fn draw(settings: &IdentitySettings) -> (Group, Group) {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        identity(&mut blueprint, &mut form, Point::new(250.0, 250.0), 125.0, settings, &ctx).unwrap();
        (blueprint, form)
    }

    #[test]
    fn test_part_counts() {
        let (blueprint, form) = draw(&IdentitySettings::default());
        // Back half 5, creation 1, full structure 11, realm 1, moons 2, stars 18, front half 6.
        assert_eq!(form.len(), 5 + 1 + 11 + 1 + 2 + 18 + 6);
        // 18 construction circles per structure, 36 for the stars.
        assert_eq!(blueprint.len(), 3 * 18 + 36);
    }

    #[test]
    fn test_moons_mirror_each_other() {
        let center = Point::new(250.0, 250.0);
        let (_, form) = draw(&IdentitySettings::default());
        let paths = form.paths();
        let (above, below) = (paths[18].bounds().unwrap(), paths[19].bounds().unwrap());
        let (a, b) = (Point::from(above.center()), Point::from(below.center()));
        assert!(a.y() < center.y() && b.y() > center.y());
        assert!((a + b - center * 2.0).distance(&Point::new(0.0, 0.0)) < 1e-6);
        // The shadow leaves a thin crescent, not the whole disc.
        let moon_radius = 125.0 / 5.0 / 2.0;
        assert!(above.height() < moon_radius);
        assert!(above.width() > moon_radius * 1.8 && above.width() < moon_radius * 2.0);
    }

    #[test]
    fn test_strokes_follow_settings() {
        let settings = IdentitySettings {
            back: MarkStroke::new(3.0, 0.25),
            ..Default::default()
        };
        let (_, form) = draw(&settings);
        let first = form.paths()[0];
        assert_eq!(first.stroke, Some(gray(0.25)));
        assert_eq!(first.stroke_width, 3.0);
        // The outline of the front side closes on itself.
        let last = form.paths()[form.len() - 1];
        assert!(last.is_closed());
        assert_eq!(last.points().len(), 7);
    }

    #[test]
    fn test_spoke() {
        let s = spoke(Point::new(0.0, 0.0), 125.0, 0.0);
        assert_eq!(s[0], Point::new(0.0, 0.0));
        assert!((s[2].x() - 100.0).abs() < 1e-9);
    }
}
