//! The vector equilibrium with its square faces bowed out: three lens shaped
//! petals through opposite corners of the hexagon stand in for the curved
//! edges of the sphere.
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::document::draw::{create_circle, create_line};
use crate::document::{Group, Path};
use crate::elements::flower_of_life::START_ANGLE;
use crate::errors::GeometryError;
use crate::geo_types::boolean::BooleanOp;
use crate::geo_types::{lerp, ring_points};
use crate::sketch::{DrawContext, GeometryGenerator};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VectorEquilibriumSphericalSettings {
    pub outline: bool,
    /// Layout circles, drawn to the blueprint.
    pub circles: bool,
    pub structure: bool,
    pub petals: bool,
    /// Cross bracing and the middle line.
    pub bracing: bool,
    /// The three long diagonals.
    pub diagonals: bool,
}

impl Default for VectorEquilibriumSphericalSettings {
    fn default() -> Self {
        Self {
            outline: false,
            circles: false,
            structure: true,
            petals: true,
            bracing: true,
            diagonals: true,
        }
    }
}

/// Upright lens from two overlapping circles, tall enough to touch the top and
/// bottom corners of a hexagon of `outline_radius`.
pub fn petal(center: Point<f64>, outline_radius: f64) -> Result<Path, GeometryError> {
    let r = (3.0 / 2.0 + 1.0 / 84.0) * outline_radius;
    let offset = r * 0.75;
    Path::circle(Point::new(center.x() - offset, center.y()), r)
        .intersect(&Path::circle(Point::new(center.x() + offset, center.y()), r))
}

pub fn vector_equilibrium_spherical(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &VectorEquilibriumSphericalSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let inner_radius = radius / 3.0;

    ctx.cosmos(blueprint, center, radius);
    if settings.outline {
        create_circle(center, radius, stroke, width, None, Some(&mut *form));
    }
    if settings.circles {
        create_circle(center, inner_radius, stroke, width, None, Some(&mut *blueprint));
        for p in ring_points(center, radius - inner_radius, 6, START_ANGLE) {
            create_circle(p, inner_radius, stroke, width, None, Some(&mut *blueprint));
        }
    }

    let h = ring_points(center, radius, 6, PI / 6.0);
    if settings.structure {
        let mut outline = h.clone();
        outline.push(h[0]);
        create_line(&outline, stroke, width, Some(&mut *form), None);
    }

    if settings.petals {
        let petal = petal(center, radius)?.stroke(stroke, width);
        for i in 1..3 {
            form.add(petal.rotated(PI / 3.0 * i as f64, center));
        }
        form.add(petal);
    }

    let mut lines: Vec<[Point<f64>; 2]> = vec![];
    if settings.bracing {
        let right_mid = lerp(h[5], h[0], 0.5);
        let left_mid = lerp(h[2], h[3], 0.5);
        lines.extend([
            [lerp(h[3], h[5], 1.0 / 3.0), lerp(h[0], h[2], 1.0 / 3.0)],
            [lerp(h[5], h[3], 1.0 / 3.0), lerp(h[2], h[0], 1.0 / 3.0)],
            [lerp(left_mid, right_mid, 1.0 / 6.0), lerp(right_mid, left_mid, 1.0 / 6.0)],
        ]);
    }
    if settings.diagonals {
        lines.extend([[h[5], h[2]], [h[3], h[0]], [h[4], h[1]]]);
    }
    for line in lines {
        create_line(&line, stroke, width, Some(&mut *form), None);
    }
    Ok(())
}

impl GeometryGenerator for VectorEquilibriumSphericalSettings {
    fn name(&self) -> &str {
        "Vector Equilibrium Spherical"
    }

    fn draw(
        &self,
        blueprint: &mut Group,
        form: &mut Group,
        center: Point<f64>,
        radius: f64,
        ctx: &mut DrawContext<'_>,
    ) -> Result<(), GeometryError> {
        vector_equilibrium_spherical(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::test_context;
    use crate::sketch::SketchSettings;
    use crate::geo_types::PointOps;

    fn draw(settings: &VectorEquilibriumSphericalSettings) -> (Group, Group) {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        vector_equilibrium_spherical(
            &mut blueprint,
            &mut form,
            Point::new(0.0, 0.0),
            90.0,
            settings,
            &ctx,
        )
        .unwrap();
        (blueprint, form)
    }

    #[test]
    fn test_petal_reaches_the_corners() {
        let bounds = petal(Point::new(0.0, 0.0), 90.0).unwrap().bounds().unwrap();
        assert!((bounds.height() - 180.0).abs() < 180.0 * 0.01);
        assert!((bounds.width() - 90.0 * 2.0 * 0.378).abs() < 1.0);
        assert!(bounds.center().x.abs() < 1e-6);
    }

    #[test]
    fn test_layers() {
        let (blueprint, form) = draw(&Default::default());
        assert!(blueprint.is_empty());
        assert_eq!(form.len(), 1 + 3 + 3 + 3);

        let (blueprint, form) = draw(&VectorEquilibriumSphericalSettings {
            outline: true,
            circles: true,
            petals: false,
            ..Default::default()
        });
        assert_eq!(blueprint.len(), 7);
        assert_eq!(form.len(), 1 + 1 + 3 + 3);
    }

    #[test]
    fn test_petals_turn_about_the_center() {
        let (_, form) = draw(&VectorEquilibriumSphericalSettings {
            structure: false,
            bracing: false,
            diagonals: false,
            ..Default::default()
        });
        let paths = form.paths();
        assert_eq!(paths.len(), 3);
        for petal in paths {
            let c = Point::from(petal.bounds().unwrap().center());
            assert!(c.distance(&Point::new(0.0, 0.0)) < 1e-6);
        }
    }
}
