use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::document::draw::create_circle;
use crate::document::Group;
use crate::elements::flower_of_life::START_ANGLE;
use crate::errors::GeometryError;
use crate::geo_types::ring_points;
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FruitOfLifeSettings {
    /// Center circle.
    pub creation: bool,
    /// The two rings of six circles.
    pub architecture: bool,
}

impl Default for FruitOfLifeSettings {
    fn default() -> Self {
        Self {
            creation: true,
            architecture: true,
        }
    }
}

/// Thirteen circles of radius `radius / 5`: one in the middle, then rings of
/// six at two and four inner radii.
pub fn fruit_of_life(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &FruitOfLifeSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let inner_radius = radius / 5.0;

    ctx.cosmos(blueprint, center, radius);

    if settings.creation {
        create_circle(center, inner_radius, stroke, width, None, Some(&mut *form));
    }

    if settings.architecture {
        for i in 0..2 {
            let ring = inner_radius * 2.0 * (i + 1) as f64;
            for p in ring_points(center, ring, 6, START_ANGLE) {
                create_circle(p, inner_radius, stroke, width, None, Some(&mut *form));
            }
        }
    }
    Ok(())
}

impl GeometryGenerator for FruitOfLifeSettings {
    fn name(&self) -> &str {
        "Fruit Of Life"
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
        fruit_of_life(blueprint, form, center, radius, self, ctx)
    }
}
