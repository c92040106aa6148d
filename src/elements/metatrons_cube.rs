use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::document::draw::{create_circle, create_line};
use crate::document::Group;
use crate::elements::flower_of_life::START_ANGLE;
use crate::errors::GeometryError;
use crate::geo_types::ring_points;
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MetatronsCubeSettings {
    pub creation: bool,
    /// The twelve fruit of life circles around the center.
    pub architecture: bool,
    /// Hexagon through each ring.
    pub structure: bool,
    pub masculinity: bool,
    pub femininity: bool,
    /// Every outer circle joined to the three inner circles it cannot see
    /// past the center.
    pub interconnectedness: bool,
}

impl Default for MetatronsCubeSettings {
    fn default() -> Self {
        Self {
            creation: true,
            architecture: true,
            structure: true,
            masculinity: true,
            femininity: true,
            interconnectedness: true,
        }
    }
}

/// Fruit of life with every circle center joined up.
pub fn metatrons_cube(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &MetatronsCubeSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let inner_radius = radius / 5.0;

    ctx.cosmos(blueprint, center, radius);
    if settings.creation {
        create_circle(center, inner_radius, stroke, width, None, Some(&mut *form));
    }

    let rings: Vec<Vec<Point<f64>>> = (0..2)
        .map(|i| ring_points(center, inner_radius * 2.0 * (i + 1) as f64, 6, START_ANGLE))
        .collect();

    for ring in &rings {
        if settings.architecture {
            for p in ring {
                create_circle(*p, inner_radius, stroke, width, None, Some(&mut *form));
            }
        }
        if settings.structure {
            let mut outline = ring.clone();
            outline.push(ring[0]);
            create_line(&outline, stroke, width, Some(&mut *form), None);
        }
        if settings.masculinity {
            create_line(&[ring[1], ring[3], ring[5], ring[1]], stroke, width, Some(&mut *form), None);
        }
        if settings.femininity {
            create_line(&[ring[0], ring[2], ring[4], ring[0]], stroke, width, Some(&mut *form), None);
        }
    }

    if settings.interconnectedness {
        let (inner, outer) = (&rings[0], &rings[1]);
        for (j, p) in outer.iter().enumerate() {
            for k in 2..5 {
                create_line(&[*p, inner[(j + k) % 6]], stroke, width, Some(&mut *form), None);
            }
        }
    }
    Ok(())
}

impl GeometryGenerator for MetatronsCubeSettings {
    fn name(&self) -> &str {
        "Metatrons Cube"
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
        metatrons_cube(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::test_context;

    #[test]
    fn test_counts() {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        metatrons_cube(&mut blueprint, &mut form, Point::new(0.0, 0.0), 100.0, &Default::default(), &ctx)
            .unwrap();
        // center + 2 * (6 circles + hexagon + 2 triangles) + 18 connectors
        assert_eq!(form.len(), 1 + 2 * 9 + 18);
    }
}
