use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::document::draw::create_circle;
use crate::document::Group;
use crate::elements::flower_of_life::center_petals;
use crate::errors::GeometryError;
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GermOfLifeSettings {
    /// Circle around the whole figure.
    pub universe: bool,
    /// The six petal rosette.
    pub creation: bool,
}

impl Default for GermOfLifeSettings {
    fn default() -> Self {
        Self {
            universe: true,
            creation: true,
        }
    }
}

/// Six petals spanning the full radius, the rosette the flower of life grows from.
pub fn germ_of_life(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &GermOfLifeSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());

    ctx.cosmos(blueprint, center, radius);

    if settings.universe {
        create_circle(center, radius, stroke, width, None, Some(&mut *form));
    }
    if settings.creation {
        for petal in center_petals(center, radius, stroke, width)? {
            form.add(petal);
        }
    }
    Ok(())
}

impl GeometryGenerator for GermOfLifeSettings {
    fn name(&self) -> &str {
        "Germ Of Life"
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
        germ_of_life(blueprint, form, center, radius, self, ctx)
    }
}
