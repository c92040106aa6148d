use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::document::draw::{create_circle, create_line};
use crate::document::Group;
use crate::elements::flower_of_life::START_ANGLE;
use crate::errors::GeometryError;
use crate::geo_types::{lerp, ring_points};
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MerkabaSettings {
    /// The egg of life circles the star is laid out on.
    pub architecture: bool,
    /// Lines of the downward tetrahedron seen from above.
    pub masculinity: bool,
    /// The upward triangle.
    pub femininity: bool,
    /// Inner triangle and the spokes to the center.
    pub union: bool,
}

impl Default for MerkabaSettings {
    fn default() -> Self {
        Self {
            architecture: true,
            masculinity: true,
            femininity: true,
            union: true,
        }
    }
}

/// Star tetrahedron drawn over the egg of life layout.
pub fn merkaba(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &MerkabaSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let inner_radius = radius / 3.0;

    ctx.cosmos(blueprint, center, radius);

    let points = ring_points(center, radius - inner_radius, 6, START_ANGLE);
    if settings.architecture {
        create_circle(center, inner_radius, stroke, width, None, Some(&mut *blueprint));
        for p in &points {
            create_circle(*p, inner_radius, stroke, width, None, Some(&mut *blueprint));
        }
    }

    if settings.femininity {
        create_line(
            &[points[0], points[2], points[4], points[0]],
            stroke,
            width,
            Some(&mut *form),
            None,
        );
    }

    if settings.masculinity {
        // Each outer vertex fans to the thirds of the opposite edge.
        for (apex, from, to, thirds) in [
            (5, 4, 0, [2.0 / 3.0, 1.0 / 3.0]),
            (1, 0, 2, [1.0 / 3.0, 2.0 / 3.0]),
            (3, 2, 4, [1.0 / 3.0, 2.0 / 3.0]),
        ] {
            for t in thirds {
                create_line(
                    &[points[apex], lerp(points[from], points[to], t)],
                    stroke,
                    width,
                    Some(&mut *form),
                    None,
                );
            }
        }
    }

    if settings.union {
        let a = lerp(points[4], points[0], 0.5);
        let b = lerp(points[0], points[2], 0.5);
        let c = lerp(points[2], points[4], 0.5);
        create_line(&[a, b, c, a], stroke, width, Some(&mut *form), None);
        for i in [5, 1, 3] {
            create_line(&[points[i], center], stroke, width, Some(&mut *form), None);
        }
    }
    Ok(())
}

impl GeometryGenerator for MerkabaSettings {
    fn name(&self) -> &str {
        "Merkaba"
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
        merkaba(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::test_context;

    #[test]
    fn test_line_counts() {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        merkaba(&mut blueprint, &mut form, Point::new(0.0, 0.0), 90.0, &MerkabaSettings::default(), &ctx)
            .unwrap();
        assert_eq!(blueprint.len(), 7);
        // triangle + 6 fan lines + inner triangle + 3 spokes
        assert_eq!(form.len(), 11);
        assert!(form.paths()[0].is_closed());
    }
}
