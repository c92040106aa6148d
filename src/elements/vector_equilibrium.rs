use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::document::draw::{create_circle, create_line};
use crate::document::Group;
use crate::elements::flower_of_life::START_ANGLE;
use crate::errors::GeometryError;
use crate::geo_types::{lerp, ring_points};
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VectorEquilibriumSettings {
    /// Center circle of the layout.
    pub creation: bool,
    /// Six layout circles around it.
    pub circles: bool,
    /// Outer hexagon.
    pub structure: bool,
    /// Horizontal edges.
    pub architecture0: bool,
    /// Vertical edges, middle line and side diagonals.
    pub architecture1: bool,
    /// Cross bracing.
    pub architecture2: bool,
    /// The three long diagonals.
    pub union: bool,
}

impl Default for VectorEquilibriumSettings {
    fn default() -> Self {
        Self {
            creation: true,
            circles: true,
            structure: true,
            architecture0: true,
            architecture1: true,
            architecture2: true,
            union: true,
        }
    }
}

/// Cuboctahedron seen edge on, inside a pointy-side hexagon of the full radius.
pub fn vector_equilibrium(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &VectorEquilibriumSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let inner_radius = radius / 3.0;

    ctx.cosmos(blueprint, center, radius);
    if settings.creation {
        create_circle(center, inner_radius, stroke, width, None, Some(&mut *blueprint));
    }
    if settings.circles {
        for p in ring_points(center, radius - inner_radius, 6, START_ANGLE) {
            create_circle(p, inner_radius, stroke, width, None, Some(&mut *blueprint));
        }
    }

    let h = ring_points(center, radius, 6, PI / 6.0);
    let mut lines: Vec<Vec<Point<f64>>> = vec![];

    if settings.structure {
        let mut outline = h.clone();
        outline.push(h[0]);
        lines.push(outline);
    }

    let bottom_left = lerp(h[2], h[0], 1.0 / 3.0);
    let bottom_right = lerp(h[0], h[2], 1.0 / 3.0);
    let top_right = lerp(h[5], h[3], 1.0 / 3.0);
    let top_left = lerp(h[3], h[5], 1.0 / 3.0);

    if settings.architecture0 {
        lines.extend([
            vec![h[0], bottom_right],
            vec![h[2], bottom_left],
            vec![h[5], top_right],
            vec![h[3], top_left],
            vec![top_left, h[4], top_right],
            vec![bottom_left, h[1], bottom_right],
        ]);
    }

    let right_mid = lerp(h[5], h[0], 0.5);
    let left_mid = lerp(h[2], h[3], 0.5);
    let middle_left = lerp(left_mid, right_mid, 1.0 / 6.0);
    let middle_right = lerp(right_mid, left_mid, 1.0 / 6.0);

    if settings.architecture1 {
        lines.extend([
            vec![top_right, bottom_right],
            vec![top_left, bottom_left],
            vec![middle_left, middle_right],
            vec![h[5], middle_right, h[0]],
            vec![h[2], middle_left, h[3]],
        ]);
    }

    if settings.architecture2 {
        lines.extend([
            vec![top_left, bottom_right],
            vec![top_right, bottom_left],
            vec![bottom_left, middle_right],
            vec![bottom_right, middle_left],
            vec![top_left, middle_right],
            vec![top_right, middle_left],
        ]);
    }

    if settings.union {
        lines.extend([vec![h[5], h[2]], vec![h[3], h[0]], vec![h[1], h[4]]]);
    }

    for line in lines {
        create_line(&line, stroke, width, Some(&mut *form), None);
    }
    Ok(())
}

impl GeometryGenerator for VectorEquilibriumSettings {
    fn name(&self) -> &str {
        "Vector Equilibrium"
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
        vector_equilibrium(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::test_context;
    use crate::geo_types::PointOps;

    #[test]
    fn test_layers() {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        let center = Point::new(0.0, 0.0);
        vector_equilibrium(&mut blueprint, &mut form, center, 90.0, &Default::default(), &ctx)
            .unwrap();
        assert_eq!(blueprint.len(), 7);
        assert_eq!(form.len(), 1 + 6 + 5 + 6 + 3);
        // Every vertex of the outline sits on the cosmos.
        for p in form.paths()[0].points() {
            assert!((p.distance(&center) - 90.0).abs() < 1e-9);
        }
    }
}
