//! Plan view of a fluted Greek column shaft. Each flute is a Catmull-Rom
//! scoop cut into the rim, separated from its neighbours by a short straight
//! gap. The capsule style carves the same flutes by subtracting round-ended
//! slots from the shaft disc instead.
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::document::color::rgba;
use crate::document::draw::{create_circle, create_line};
use crate::document::{Group, Path};
use crate::errors::GeometryError;
use crate::geo_types::boolean::{unite_all, BooleanOp};
use crate::geo_types::shapes::{as_multi, capsule};
use crate::geo_types::spline::{catmull_rom, CurveType};
use crate::geo_types::{point_on_circle, PointOps};
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

/// Samples per flute curve.
const FLUTE_DIVISIONS: usize = 20;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluteStyle {
    Spline,
    Capsule,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColumnSettings {
    pub flutes: usize,
    /// Depth of a flute as a fraction of the radius.
    pub flute_depth: f64,
    /// Straight rim between flutes, fraction of the radius.
    pub flute_gap: f64,
    /// Where along the flute the inner control points sit, 0..0.5.
    pub inset: f64,
    /// Depth of the inner control points relative to `flute_depth`.
    pub inset_curve_factor: f64,
    pub style: FluteStyle,
    /// Show the spline control points.
    pub debug: bool,
}

impl Default for ColumnSettings {
    fn default() -> Self {
        Self {
            flutes: 12,
            flute_depth: 0.1,
            flute_gap: 0.02,
            inset: 0.3,
            inset_curve_factor: 0.75,
            style: FluteStyle::Spline,
            debug: false,
        }
    }
}

/// `p` pulled towards `center` by `depth`.
fn sunk(p: Point<f64>, center: Point<f64>, depth: f64) -> Point<f64> {
    p - (p - center).normalize() * depth
}

/// Rim angles of each flute's two ends.
fn flute_angles(settings: &ColumnSettings) -> Vec<(f64, f64)> {
    let step = TAU / settings.flutes as f64;
    // A rim length of `flute_gap * radius` is an angle of `flute_gap`, split
    // over both sides of the flute.
    let offset = settings.flute_gap / 2.0;
    (0..settings.flutes)
        .map(|i| (i as f64 * step + offset, (i + 1) as f64 * step - offset))
        .collect()
}

fn spline_flutes(
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &ColumnSettings,
    ctx: &DrawContext<'_>,
) {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let debug_line = rgba(1.0, 1.0, 0.0, 0.5);
    let debug_point = &ctx.settings.debug_stroke_color;
    let depth = radius * settings.flute_depth;
    let inset_depth = depth * settings.inset_curve_factor;
    let angles = flute_angles(settings);

    for (i, (a1, a2)) in angles.iter().enumerate() {
        let p1 = point_on_circle(center, radius, *a1);
        let p2 = point_on_circle(center, radius, *a2);
        let inner: Vec<(Point<f64>, Point<f64>)> = [settings.inset, 1.0 - settings.inset]
            .iter()
            .map(|t| {
                let rim = point_on_circle(center, radius, a1 + (a2 - a1) * t);
                (rim, sunk(rim, center, inset_depth))
            })
            .collect();
        let control = vec![p1, inner[0].1, inner[1].1, p2];

        if settings.debug {
            for end in [p1, p2] {
                let bottom = sunk(end, center, depth);
                create_line(&[end, bottom], &debug_line, 1.0, Some(&mut *form), None);
                create_circle(end, 2.0, debug_point, 1.0, None, Some(&mut *form));
                create_circle(bottom, 2.0, debug_point, 1.0, None, Some(&mut *form));
            }
            for (rim, control) in &inner {
                create_circle(*control, 2.0, debug_point, 1.0, None, Some(&mut *form));
                create_line(&[*rim, *control], &debug_line, width, Some(&mut *form), None);
            }
        }

        let curve = catmull_rom(&control, FLUTE_DIVISIONS, CurveType::CatmullRom(0.5));
        create_line(&curve, stroke, width, Some(&mut *form), None);

        let next = angles[(i + 1) % angles.len()].0;
        create_line(&[p2, point_on_circle(center, radius, next)], stroke, width, Some(&mut *form), None);
    }
}

fn capsule_flutes(
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &ColumnSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let slot_radius = radius * settings.flute_depth;
    let slots: Vec<Path> = flute_angles(settings)
        .iter()
        .map(|(a1, a2)| {
            let (near, far) = (
                a1 + (a2 - a1) * settings.inset,
                a1 + (a2 - a1) * (1.0 - settings.inset),
            );
            Path::area(as_multi(capsule(
                point_on_circle(center, radius, near),
                point_on_circle(center, radius, far),
                slot_radius,
            )))
        })
        .collect();
    let shaft = create_circle(center, radius, stroke, width, None, None);
    let carved = match unite_all(&slots)? {
        Some(slots) => shaft.subtract(&slots)?,
        None => shaft,
    };
    form.add(carved);
    Ok(())
}

pub fn column(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &ColumnSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    ctx.cosmos(blueprint, center, radius);
    if settings.flutes == 0 {
        return Ok(());
    }
    match settings.style {
        FluteStyle::Spline => spline_flutes(form, center, radius, settings, ctx),
        FluteStyle::Capsule => capsule_flutes(form, center, radius, settings, ctx)?,
    }
    Ok(())
}

impl GeometryGenerator for ColumnSettings {
    fn name(&self) -> &str {
        "Column"
    }

    fn configure(&self, settings: &mut SketchSettings) {
        settings.darkness = true;
        settings.blueprint.visible = true;
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
        column(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::test_context;
    use geo::Area;

    fn draw(settings: &ColumnSettings) -> Group {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        column(&mut blueprint, &mut form, Point::new(0.0, 0.0), 100.0, settings, &ctx).unwrap();
        form
    }

    #[test]
    fn test_flute_and_gap_per_division() {
        let form = draw(&ColumnSettings::default());
        assert_eq!(form.len(), 24);
        let flute = form.paths()[0];
        assert_eq!(flute.points().len(), FLUTE_DIVISIONS + 1);
    }

    #[test]
    fn test_flutes_stay_inside_the_rim() {
        let center = Point::new(0.0, 0.0);
        let form = draw(&ColumnSettings::default());
        for path in form.paths() {
            for p in path.points() {
                let d = p.distance(&center);
                assert!(d <= 100.0 + 1e-9);
                assert!(d >= 100.0 - 10.0 - 1e-9);
            }
        }
    }

    #[test]
    fn test_gaps_close_the_rim() {
        let form = draw(&ColumnSettings::default());
        let paths = form.paths();
        // The gap after flute i ends where flute i + 1 starts.
        for i in 0..12 {
            let gap_end = *paths[2 * i + 1].points().last().unwrap();
            let next_start = paths[(2 * i + 2) % 24].points()[0];
            assert!(gap_end.distance(&next_start) < 1e-9);
        }
    }

    #[test]
    fn test_capsule_flutes_carve_the_disc() {
        let settings = ColumnSettings {
            style: FluteStyle::Capsule,
            ..Default::default()
        };
        let form = draw(&settings);
        assert_eq!(form.len(), 1);
        let carved = form.paths()[0].to_polygons().unwrap().unsigned_area();
        let disc = std::f64::consts::PI * 100.0 * 100.0;
        assert!(carved < disc);
        assert!(carved > disc * 0.8);
    }

    #[test]
    fn test_debug_markers() {
        let settings = ColumnSettings {
            debug: true,
            ..Default::default()
        };
        // Two rim markers with their depth lines, two control points with theirs.
        assert_eq!(draw(&settings).len(), 24 + 12 * (2 * 3 + 2 * 2));
    }

    #[test]
    fn test_no_flutes() {
        let settings = ColumnSettings {
            flutes: 0,
            ..Default::default()
        };
        assert!(draw(&settings).is_empty());
    }
}
