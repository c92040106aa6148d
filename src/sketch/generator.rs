use geo_types::Point;
use rand::rngs::SmallRng;

use crate::document::color::{transparent, white, with_alpha, Color};
use crate::document::draw::{create_circle, create_grid, Size};
use crate::document::Group;
use crate::errors::GeometryError;
use crate::sketch::settings::{GridSettings, SketchSettings};

/// Everything a generator may read while drawing besides its own settings.
pub struct DrawContext<'a> {
    /// Canvas size in drawing units.
    pub size: Size,
    pub settings: &'a SketchSettings,
    /// Seeded from `settings.seed` for every draw.
    pub rng: SmallRng,
}

impl DrawContext<'_> {
    pub fn stroke(&self) -> &Color {
        &self.settings.stroke_color
    }

    pub fn width(&self) -> f64 {
        self.settings.stroke_width
    }

    /// Debug color when the guide is on, transparent otherwise.
    pub fn guide_color(&self, enabled: bool) -> Color {
        if enabled {
            self.settings.debug_stroke_color.clone()
        } else {
            transparent()
        }
    }

    /// The outer circle of the figure, when the blueprint asks for it.
    pub fn cosmos(&self, blueprint: &mut Group, center: Point<f64>, radius: f64) {
        if self.settings.blueprint.cosmos {
            create_circle(center, radius, self.stroke(), self.width(), None, Some(&mut *blueprint));
        }
    }

    /// Fine grid plus a 5 division grid over the whole canvas.
    pub fn grids(&self, group: &mut Group, center: Point<f64>, grid: &GridSettings) {
        if !grid.visible {
            return;
        }
        let color = with_alpha(&white(), grid.opacity);
        create_grid(center, self.size, &color, self.width(), grid.divisions, group, true);
        create_grid(center, self.size, &color, self.width(), 5, group, true);
    }
}

/// One illustration. Implementations are plain data (their settings) plus a
/// draw function that appends paths to the two layers.
pub trait GeometryGenerator {
    /// Human readable title, also used for file names.
    fn name(&self) -> &str;

    /// Extra factor on `canvas_width / 2 * scale`.
    fn radius_factor(&self) -> f64 {
        1.0
    }

    /// Offset of the figure center from the canvas center.
    fn center_offset(&self, _radius: f64) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Adjust the shared defaults when a sketch is created.
    fn configure(&self, _settings: &mut SketchSettings) {}

    /// Append the illustration to `blueprint` and `form`. Must be a pure function
    /// of its inputs: the same inputs always append the same paths.
    fn draw(
        &self,
        blueprint: &mut Group,
        form: &mut Group,
        center: Point<f64>,
        radius: f64,
        ctx: &mut DrawContext<'_>,
    ) -> Result<(), GeometryError>;
}
