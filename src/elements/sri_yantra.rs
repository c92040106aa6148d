//! The Sri Yantra, built the classical way: a strict sequence of compass and
//! straightedge steps inside a circle, each step reading points found by the
//! earlier ones. Points go into a [`PointLedger`] in discovery order and every
//! later step refers back by that index, so reordering a step changes the
//! figure. Guides are always drawn (transparent when switched off) so the
//! blueprint keeps the same shape whatever is toggled.
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, SQRT_2};

use crate::document::color::{transparent, Color};
use crate::document::draw::{create_circle, create_line};
use crate::document::{Group, Path};
use crate::errors::GeometryError;
use crate::geo_types::intersect::get_intersections;
use crate::geo_types::ledger::PointLedger;
use crate::geo_types::{point_on_circle, ring_points, PointOps};
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

pub const GUIDE_COUNT: usize = 28;
pub const STEP_COUNT: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SriYantraSettings {
    /// Construction guides, in the order they are drawn.
    pub guides: [bool; GUIDE_COUNT],
    /// The nine triangles, outermost first, then the bindu.
    pub steps: [bool; STEP_COUNT],
}

impl Default for SriYantraSettings {
    fn default() -> Self {
        Self {
            guides: [true; GUIDE_COUNT],
            steps: [true; STEP_COUNT],
        }
    }
}

/// Where the nth hit of `a` against `b` lands.
fn hit(a: &Path, b: &Path, nth: usize) -> Result<Point<f64>, GeometryError> {
    get_intersections(a, b).get(nth)
}

/// Throwaway segment from `from` through `through`, carried on for `beyond`.
fn ray(from: Point<f64>, through: Point<f64>, beyond: f64) -> Path {
    let direction = (through - from).normalize();
    Path::polyline(vec![from.0, (through + direction * beyond).0].into())
}

/// Throwaway near-horizontal segment spanning `half_width * dir_x` either
/// side of `center.x`.
fn chord(center: Point<f64>, dir_x: f64, half_width: f64, y0: f64, y1: f64) -> Path {
    Path::polyline(
        vec![
            Point::new(center.x() - dir_x * half_width, y0).0,
            Point::new(center.x() + dir_x * half_width, y1).0,
        ]
        .into(),
    )
}

struct Construction<'a, 'c> {
    points: PointLedger,
    guides: &'a [bool; GUIDE_COUNT],
    ctx: &'a DrawContext<'c>,
    blueprint: &'a mut Group,
}

impl Construction<'_, '_> {
    fn color(&self, guide: usize) -> Color {
        self.ctx.guide_color(self.guides[guide])
    }

    fn p(&self, index: usize) -> Result<Point<f64>, GeometryError> {
        self.points.get(index)
    }

    fn push(&mut self, point: Point<f64>) {
        self.points.push(point);
    }

    fn circle(&mut self, center: Point<f64>, radius: f64, guide: usize) -> Path {
        let color = self.color(guide);
        let width = self.ctx.width();
        create_circle(center, radius, &color, width, None, Some(&mut *self.blueprint))
    }

    /// Guide line between two ledger points.
    fn line(&mut self, a: usize, b: usize, guide: usize) -> Result<Path, GeometryError> {
        let ends = [self.p(a)?, self.p(b)?];
        let color = self.color(guide);
        let width = self.ctx.width();
        Ok(create_line(&ends, &color, width, Some(&mut *self.blueprint), None))
    }

    /// Both hits of a chord against `circle`, pushed in order.
    fn push_both(&mut self, chord: &Path, circle: &Path) -> Result<(), GeometryError> {
        let hits = get_intersections(chord, circle);
        hits.expect_count(2)?;
        self.push(hits.get(0)?);
        self.push(hits.get(1)?);
        Ok(())
    }
}

pub fn sri_yantra(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &SriYantraSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke().clone(), ctx.width());
    let inner = radius / 2.0;

    ctx.cosmos(blueprint, center, radius);

    let mut c = Construction {
        points: PointLedger::new(),
        guides: &settings.guides,
        ctx,
        blueprint,
    };

    // Center circle and the four around it.
    let cc = c.circle(center, inner, 0);
    let around: Vec<Path> = ring_points(center, inner, 4, 0.0)
        .into_iter()
        .map(|p| c.circle(p, inner, 0))
        .collect();

    // Axes.
    let axis_color = c.color(1);
    for ends in [
        [Point::new(center.x(), center.y() - radius), Point::new(center.x(), center.y() + radius)],
        [Point::new(center.x() - radius, center.y()), Point::new(center.x() + radius, center.y())],
    ] {
        create_line(&ends, &axis_color, width, Some(&mut *c.blueprint), None);
    }

    // 0..4 quarter points of the center circle, 4..8 the square around it.
    c.points.extend(ring_points(center, inner, 4, 0.0));
    for (index, name) in ["right", "bottom", "left", "top"].into_iter().enumerate() {
        c.points.name(name, index)?;
    }
    c.points.extend(ring_points(center, inner * SQRT_2, 4, PI / 4.0));
    c.line(6, 5, 2)?;
    c.line(7, 4, 2)?;

    // 8..12 at 30, 150, 210 and 330 degrees.
    for degrees in [30.0_f64, 150.0, 210.0, 330.0] {
        c.push(point_on_circle(center, inner, degrees.to_radians()));
    }
    let line4 = c.line(9, 0, 3)?;
    let line5 = c.line(8, 2, 3)?;

    let p12 = hit(&line4, &line5, 0)?;
    c.points.push_named("lower crossing", p12); // 12
    let side_radius = p12.distance(&center);
    let (p0, p2) = (c.points.named("right")?, c.points.named("left")?);
    let inner_right = c.circle(p0, side_radius, 4);
    let inner_left = c.circle(p2, side_radius, 4);
    c.points.extend(ring_points(p0, side_radius, 4, 0.0)); // 13..17
    c.points.extend(ring_points(p2, side_radius, 4, 0.0)); // 17..21

    let line6 = c.line(18, 14, 5)?;

    c.push(hit(&inner_right, &cc, 1)?); // 21
    c.push(hit(&inner_left, &cc, 1)?); // 22
    c.push(hit(&cc, &around[2], 0)?); // 23
    c.push(hit(&cc, &around[0], 0)?); // 24

    let (p1, p17, p15) = (c.points.named("bottom")?, c.p(17)?, c.p(15)?);
    c.push(hit(&cc, &ray(p1, p17, p17.distance(&p1)), 0)?); // 25
    c.push(hit(&cc, &ray(p1, p15, p15.distance(&p1)), 0)?); // 26

    let line7 = c.line(1, 25, 6)?;
    let line8 = c.line(1, 26, 6)?;
    let line9 = c.line(25, 26, 7)?;
    let line10 = c.line(10, 3, 8)?;
    let line11 = c.line(3, 11, 8)?;
    let line12 = c.line(23, 8, 9)?;
    let line13 = c.line(24, 9, 9)?;

    c.push(hit(&line12, &line10, 0)?); // 27
    c.push(hit(&line13, &line11, 0)?); // 28

    let (p27, p28) = (c.p(27)?, c.p(28)?);
    let dir = (p27 - p28).normalize();
    c.push_both(&chord(center, dir.x(), inner, p27.y(), p27.y()), &cc)?; // 29, 30

    let line14 = c.line(30, 29, 10)?;
    let line15 = c.line(3, 1, 10)?;

    c.push(hit(&line15, &line14, 0)?); // 31
    c.push(hit(&line8, &line6, 0)?); // 32
    c.push(hit(&line7, &line6, 0)?); // 33

    let (p31, p32, p33) = (c.p(31)?, c.p(32)?, c.p(33)?);
    c.push(hit(&ray(p31, p32, p32.distance(&p31)), &cc, 0)?); // 34
    let line16 = c.line(31, 34, 11)?;
    c.push(hit(&ray(p31, p33, p33.distance(&p31)), &cc, 0)?); // 35
    let line17 = c.line(31, 35, 11)?;

    let line18 = c.line(0, 1, 12)?;
    let line19 = c.line(2, 1, 12)?;

    c.push(hit(&cc, &around[2], 1)?); // 36
    c.push(hit(&cc, &around[0], 1)?); // 37

    let line20 = c.line(36, 0, 13)?;
    let line21 = c.line(37, 2, 13)?;

    c.push(hit(&line21, &line18, 0)?); // 38
    c.push(hit(&line20, &line19, 0)?); // 39

    let (p38, p39) = (c.p(38)?, c.p(39)?);
    let dir = (p38 - p1).normalize();
    c.push_both(&chord(center, dir.x(), inner, p38.y(), p39.y()), &cc)?; // 40, 41
    let line22 = c.line(40, 41, 14)?;

    let line23 = c.line(22, 3, 15)?;
    let line24 = c.line(21, 3, 15)?;

    c.push(hit(&line9, &line24, 0)?); // 42
    c.push(hit(&line9, &line23, 0)?); // 43
    c.push(hit(&line15, &line22, 0)?); // 44

    let (p42, p43, p44) = (c.p(42)?, c.p(43)?, c.p(44)?);
    c.push(hit(&ray(p44, p42, inner), &cc, 0)?); // 45
    let line25 = c.line(44, 45, 16)?;
    c.push(hit(&ray(p44, p43, inner), &cc, 0)?); // 46
    let line26 = c.line(44, 46, 16)?;

    c.push(hit(&line15, &line9, 0)?); // 47
    let line27 = c.line(47, 37, 17)?;
    let line28 = c.line(47, 36, 17)?;

    c.push(hit(&line8, &line27, 0)?); // 48
    c.push(hit(&line7, &line28, 0)?); // 49

    let (p48, p49) = (c.p(48)?, c.p(49)?);
    let dir = (p49 - p48).normalize();
    c.push_both(&chord(center, dir.x(), inner, p49.y(), p48.y()), &cc)?; // 50, 51
    let line29 = c.line(50, 51, 18)?;

    let corners = [c.p(24)?, c.p(23)?, c.p(37)?, c.p(36)?];
    let corner_circles: Vec<Path> = corners.iter().map(|p| c.circle(*p, inner, 0)).collect();

    c.push(hit(&corner_circles[0], &line25, 0)?); // 52
    c.push(hit(&corner_circles[1], &line26, 0)?); // 53

    let (p52, p53) = (c.p(52)?, c.p(53)?);
    let dir = (p52 - p53).normalize();
    c.push_both(&chord(center, dir.x(), inner, p52.y(), p53.y()), &cc)?; // 54, 55
    let line30 = c.line(54, 55, 19)?;

    c.push(hit(&line30, &line15, 0)?); // 56
    c.push(hit(&line16, &line9, 0)?); // 57
    c.push(hit(&line17, &line9, 0)?); // 58

    let (p56, p57, p58) = (c.p(56)?, c.p(57)?, c.p(58)?);
    c.push(hit(&ray(p56, p57, inner), &cc, 0)?); // 59
    let line31 = c.line(56, 59, 20)?;
    c.push(hit(&ray(p56, p58, inner), &cc, 0)?); // 60
    let line33 = c.line(56, 60, 20)?;

    let line34 = c.line(10, 11, 21)?;
    c.push(hit(&line15, &line34, 0)?); // 61

    let p61 = c.p(61)?;
    c.push(hit(&ray(p61, p52, p52.distance(&p61) * 2.0), &cc, 0)?); // 62
    let line35 = c.line(61, 62, 22)?;
    c.push(hit(&ray(p61, p53, p53.distance(&p61) * 2.0), &cc, 0)?); // 63
    let line36 = c.line(61, 63, 22)?;

    c.push(hit(&line33, &line36, 0)?); // 64
    c.push(hit(&line31, &line35, 0)?); // 65

    // Wide chord, spanned by the direction from 61 towards 53.
    let p64 = c.p(64)?;
    let dir = (p53 - p61).normalize();
    c.push_both(&chord(center, dir.x(), radius * 1.5, p64.y(), p64.y()), &cc)?; // 66, 67
    let line37 = c.line(66, 67, 23)?;

    c.push(hit(&line37, &line16, 0)?); // 68
    c.push(hit(&line15, &line29, 0)?); // 69

    let (p68, p69) = (c.p(68)?, c.p(69)?);
    c.push(hit(&ray(p69, p68, inner), &cc, 0)?); // 70
    c.line(69, 70, 24)?;
    c.push(hit(&line37, &line17, 0)?); // 71
    let p71 = c.p(71)?;
    c.push(hit(&ray(p69, p71, inner), &cc, 0)?); // 72
    c.line(69, 72, 24)?;

    c.push(hit(&line27, &corner_circles[2], 0)?); // 73
    c.push(hit(&line28, &corner_circles[3], 0)?); // 74

    let (p73, p74) = (c.p(73)?, c.p(74)?);
    let dir = (p73 - p74).normalize();
    c.push_both(&chord(center, dir.x(), inner, p73.y(), p74.y()), &cc)?; // 75, 76
    let line40 = c.line(75, 76, 25)?;

    c.push(hit(&line40, &line35, 0)?); // 77
    c.push(hit(&line40, &line36, 0)?); // 78

    c.line(77, 12, 26)?;
    c.line(78, 12, 26)?;
    let line43 = c.line(9, 23, 27)?;
    let line44 = c.line(8, 24, 27)?;

    for (a, b) in [
        (&line26, &line34), // 79
        (&line25, &line34), // 80
        (&line29, &line16), // 81
        (&line29, &line17), // 82
        (&line22, &line27), // 83
        (&line22, &line28), // 84
        (&line14, &line44), // 85
        (&line14, &line43), // 86
    ] {
        c.push(hit(a, b, 0)?);
    }

    let triangles: [[usize; 3]; 9] = [
        [25, 26, 1],
        [22, 21, 3],
        [44, 80, 79],
        [31, 81, 82],
        [61, 52, 53],
        [69, 68, 71],
        [47, 83, 84],
        [12, 77, 78],
        [56, 85, 86],
    ];
    for (step, corners) in triangles.iter().enumerate() {
        let mut outline = c.points.select(corners)?;
        outline.push(outline[0]);
        let color = if settings.steps[step] { stroke.clone() } else { transparent() };
        create_line(&outline, &color, width, Some(&mut *form), None);
    }

    let bindu = if settings.steps[9] { stroke } else { transparent() };
    create_circle(center, inner * 0.01, &bindu, width, Some(&bindu), Some(&mut *form));
    Ok(())
}

impl GeometryGenerator for SriYantraSettings {
    fn name(&self) -> &str {
        "Sri Yantra"
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
        sri_yantra(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::document::color::alpha;
    use crate::elements::test_context;

    fn draw(settings: &SriYantraSettings) -> (Group, Group) {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        sri_yantra(&mut blueprint, &mut form, Point::new(250.0, 250.0), 212.5, settings, &ctx).unwrap();
        (blueprint, form)
    }

    #[test]
    fn test_nine_triangles_and_bindu() {
        let (_, form) = draw(&SriYantraSettings::default());
        assert_eq!(form.len(), 10);
        let center = Point::new(250.0, 250.0);
        for path in form.paths().iter().take(9) {
            assert!(path.is_closed());
            for p in path.points() {
                assert!(p.distance(&center) <= 106.25 + 1e-6);
            }
        }
    }

    #[test]
    fn test_eighth_triangle_hangs_from_the_lower_crossing() {
        let (_, form) = draw(&SriYantraSettings::default());
        let apex = form.paths()[7].points()[0];
        assert!((apex.x() - 250.0).abs() < 1e-6);
        assert!(apex.y() > 250.0);
    }

    #[test]
    fn test_switched_off_steps_stay_in_place() {
        let mut settings = SriYantraSettings::default();
        let (all_blueprint, all_form) = draw(&settings);
        settings.steps[3] = false;
        settings.guides = [false; GUIDE_COUNT];
        let (blueprint, form) = draw(&settings);
        assert_eq!(form.len(), all_form.len());
        assert_eq!(blueprint.len(), all_blueprint.len());
        let hidden = form.paths()[3].stroke.clone().unwrap();
        assert_eq!(alpha(&hidden), 0.0);
        assert_eq!(form.paths()[3].points(), all_form.paths()[3].points());
    }
}
