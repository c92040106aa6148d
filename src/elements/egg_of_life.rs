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
pub struct EggOfLifeSettings {
    /// Center circle.
    pub seed: bool,
    /// Six circles touching the cosmos from inside.
    pub petals: bool,
}

impl Default for EggOfLifeSettings {
    fn default() -> Self {
        Self {
            seed: true,
            petals: true,
        }
    }
}

/// Seven circles of a third of the radius, the outer six tangent to the cosmos.
pub fn egg_of_life(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &EggOfLifeSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let inner_radius = radius / 3.0;

    ctx.cosmos(blueprint, center, radius);

    if settings.seed {
        create_circle(center, inner_radius, stroke, width, None, Some(&mut *form));
    }
    if settings.petals {
        for p in ring_points(center, radius - inner_radius, 6, START_ANGLE) {
            create_circle(p, inner_radius, stroke, width, None, Some(&mut *form));
        }
    }
    Ok(())
}

impl GeometryGenerator for EggOfLifeSettings {
    fn name(&self) -> &str {
        "Egg Of Life"
    }

    fn configure(&self, settings: &mut SketchSettings) {
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
        egg_of_life(blueprint, form, center, radius, self, ctx)
    }
}
