use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::document::draw::create_circle;
use crate::document::Group;
use crate::errors::GeometryError;
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VesicaPiscisSettings {
    /// Outer circle.
    pub divinity: bool,
    /// Upper circle.
    pub conscious: bool,
    /// Lower circle.
    pub unconscious: bool,
    /// Small circle in the lens.
    pub awakening: bool,
}

impl Default for VesicaPiscisSettings {
    fn default() -> Self {
        Self {
            divinity: true,
            conscious: true,
            unconscious: true,
            awakening: true,
        }
    }
}

/// Two circles of two thirds of the radius, each passing through the other's
/// center, framed by the cosmos.
pub fn vesica_piscis(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &VesicaPiscisSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let inner_radius = radius * (2.0 / 3.0);

    ctx.cosmos(blueprint, center, radius);

    if settings.divinity {
        create_circle(center, radius, stroke, width, None, Some(&mut *form));
    }
    if settings.awakening {
        create_circle(center, radius / 3.0, stroke, width, None, Some(&mut *form));
    }
    if settings.conscious {
        let upper = Point::new(center.x(), center.y() - inner_radius / 2.0);
        create_circle(upper, inner_radius, stroke, width, None, Some(&mut *form));
    }
    if settings.unconscious {
        let lower = Point::new(center.x(), center.y() + inner_radius / 2.0);
        create_circle(lower, inner_radius, stroke, width, None, Some(&mut *form));
    }
    Ok(())
}

impl GeometryGenerator for VesicaPiscisSettings {
    fn name(&self) -> &str {
        "Vesica Piscis"
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
        vesica_piscis(blueprint, form, center, radius, self, ctx)
    }
}
