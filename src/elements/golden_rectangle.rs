//! A golden rectangle inscribed in the cosmos, cut into squares that wind
//! inwards with the golden spiral drawn through them.
use geo_types::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::document::draw::create_line;
use crate::document::{Group, Path};
use crate::errors::GeometryError;
use crate::geo_types::point_on_circle;
use crate::geo_types::shapes::circle_sides;
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GoldenRectangleSettings {
    /// Squares cut off the rectangle, one spiral quarter each.
    pub divisions: usize,
    pub rectangle: bool,
    pub subdivisions: bool,
    pub spiral: bool,
}

impl Default for GoldenRectangleSettings {
    fn default() -> Self {
        Self {
            divisions: 9,
            rectangle: true,
            subdivisions: true,
            spiral: true,
        }
    }
}

/// The landscape golden rectangle whose diagonal is the circle's diameter.
pub fn inscribed(center: Point<f64>, radius: f64) -> Rect<f64> {
    let width = (2.0 * radius) / (1.0 + 1.0 / GOLDEN_RATIO.powi(2)).sqrt();
    let height = width / GOLDEN_RATIO;
    Rect::new(
        (center.x() - width / 2.0, center.y() - height / 2.0),
        (center.x() + width / 2.0, center.y() + height / 2.0),
    )
}

/// One cut: the square taken off, the pivot of its quarter arc and the angle
/// the arc starts at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cut {
    pub square: Rect<f64>,
    pub pivot: Point<f64>,
    pub start_angle: f64,
}

impl Cut {
    pub fn side(&self) -> f64 {
        self.square.width()
    }

    /// Quarter circle from the cut's outer corner to where the next cut begins.
    pub fn arc(&self) -> Vec<Point<f64>> {
        let steps = (circle_sides(self.side()) / 4).max(1);
        (0..=steps)
            .map(|i| {
                let angle = self.start_angle + FRAC_PI_2 * i as f64 / steps as f64;
                point_on_circle(self.pivot, self.side(), angle)
            })
            .collect()
    }
}

/// Peel squares off `rect` going left, top, right, bottom, and around again.
/// Screen space is y-down so every arc turns the same way.
pub fn cuts(rect: Rect<f64>, divisions: usize) -> Vec<Cut> {
    let (mut min, mut max) = (rect.min(), rect.max());
    let mut cuts = Vec::with_capacity(divisions);
    for i in 0..divisions {
        let side = (max.x - min.x).min(max.y - min.y);
        let (square, pivot) = match i % 4 {
            0 => {
                let square = Rect::new((min.x, min.y), (min.x + side, max.y));
                min.x += side;
                (square, Point::new(min.x, max.y))
            }
            1 => {
                let square = Rect::new((min.x, min.y), (max.x, min.y + side));
                min.y += side;
                (square, Point::new(square.min().x, min.y))
            }
            2 => {
                let square = Rect::new((max.x - side, min.y), (max.x, max.y));
                max.x -= side;
                (square, Point::new(max.x, square.min().y))
            }
            _ => {
                let square = Rect::new((min.x, max.y - side), (max.x, max.y));
                max.y -= side;
                (square, Point::new(square.max().x, max.y))
            }
        };
        cuts.push(Cut {
            square,
            pivot,
            start_angle: PI + FRAC_PI_2 * (i % 4) as f64,
        });
    }
    cuts
}

pub fn golden_rectangle(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &GoldenRectangleSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    ctx.cosmos(blueprint, center, radius);

    let golden = inscribed(center, radius);
    if settings.rectangle {
        form.add(Path::rect(&golden).stroke(stroke, width));
    }
    let cuts = cuts(golden, settings.divisions);
    if settings.subdivisions {
        for cut in &cuts {
            form.add(Path::rect(&cut.square).stroke(stroke, width));
        }
    }
    if settings.spiral {
        for cut in &cuts {
            create_line(&cut.arc(), stroke, width, Some(&mut *form), None);
        }
    }
    Ok(())
}

impl GeometryGenerator for GoldenRectangleSettings {
    fn name(&self) -> &str {
        "Golden Rectangle"
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
        golden_rectangle(blueprint, form, center, radius, self, ctx)
    }
}
