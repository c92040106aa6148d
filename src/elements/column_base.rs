//! Half profile of a classical column base: a square plinth, convex tori and
//! thin fillets stacked from the bottom up, each closed back to the column
//! axis. Faint horizontal slices hint at the revolved solid.
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::document::color::{alpha, with_alpha};
use crate::document::draw::{create_circle, create_line, set_dash_length};
use crate::document::Group;
use crate::errors::GeometryError;
use crate::sketch::{DrawContext, GeometryGenerator, GridSettings, SketchSettings};

/// Points on a torus profile, both ends included.
const TORUS_SEGMENTS: usize = 12;
/// Horizontal slices drawn across a torus.
const TORUS_SLICES: usize = 4;

/// The square base. Sizes are fractions of the column radius.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Plinth {
    pub visible: bool,
    pub height: f64,
    pub width: f64,
    pub start_x: f64,
}

impl Default for Plinth {
    fn default() -> Self {
        Self {
            visible: true,
            height: 0.3,
            width: 1.4,
            start_x: 0.0,
        }
    }
}

/// A convex half-round molding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Torus {
    pub visible: bool,
    pub height: f64,
    /// How far the molding bulges out.
    pub radius: f64,
    /// Offset of the molding from the column rim, positive outwards.
    pub start_x: f64,
}

impl Torus {
    fn hidden(height: f64, radius: f64) -> Self {
        Self {
            visible: false,
            height,
            radius,
            start_x: 0.0,
        }
    }
}

impl Default for Torus {
    fn default() -> Self {
        Self {
            visible: true,
            height: 0.2,
            radius: 0.15,
            start_x: 0.05,
        }
    }
}

/// Thin flat band between moldings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Fillet {
    pub visible: bool,
    pub height: f64,
    pub start_x: f64,
}

impl Default for Fillet {
    fn default() -> Self {
        Self {
            visible: true,
            height: 0.05,
            start_x: 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColumnBaseSettings {
    pub plinth: Plinth,
    pub lower_torus: Torus,
    pub fillet: Fillet,
    pub middle_torus: Torus,
    pub upper_torus: Torus,
    pub shaft_torus: Torus,
    /// Mark every torus profile point.
    pub debug: bool,
    pub grid: GridSettings,
}

impl Default for ColumnBaseSettings {
    fn default() -> Self {
        Self {
            plinth: Plinth::default(),
            lower_torus: Torus::default(),
            fillet: Fillet::default(),
            middle_torus: Torus::hidden(0.15, 0.12),
            upper_torus: Torus::hidden(0.12, 0.09),
            shaft_torus: Torus::hidden(0.08, 0.06),
            debug: false,
            grid: GridSettings::default(),
        }
    }
}

/// Profile of a torus whose top sits at `top`, bulging out from `rim`.
/// Runs from the top point round to the bottom point.
pub fn torus_profile(rim: f64, top: f64, height: f64, bulge: f64) -> Vec<Point<f64>> {
    let mut profile = vec![Point::new(rim, top)];
    for i in 1..TORUS_SEGMENTS - 1 {
        let angle = PI * i as f64 / (TORUS_SEGMENTS - 1) as f64;
        profile.push(Point::new(
            rim + bulge * angle.sin(),
            top - height * 0.5 + height * 0.5 * angle.cos(),
        ));
    }
    profile.push(Point::new(rim, top - height));
    profile
}

/// Draws the layers bottom up and returns where the next one would start.
struct Stack<'a, 'c> {
    form: &'a mut Group,
    ctx: &'a DrawContext<'c>,
    center: Point<f64>,
    radius: f64,
    y: f64,
    debug: bool,
}

impl Stack<'_, '_> {
    fn line(&mut self, from: (f64, f64), to: (f64, f64)) {
        let (stroke, width) = (self.ctx.stroke(), self.ctx.width());
        create_line(&[from.into(), to.into()], stroke, width, Some(&mut *self.form), None);
    }

    fn plinth(&mut self, plinth: &Plinth) {
        if !plinth.visible {
            return;
        }
        let (cx, y) = (self.center.x(), self.y);
        let right = cx + self.radius * (plinth.width + plinth.start_x);
        let top = y - self.radius * plinth.height;
        self.line((cx, y), (right, y));
        self.line((right, y), (right, top));
        self.line((right, top), (cx, top));
        self.y = top;
    }

    fn torus(&mut self, torus: &Torus) {
        if !torus.visible {
            return;
        }
        let (stroke, width) = (self.ctx.stroke(), self.ctx.width());
        let cx = self.center.x();
        let height = self.radius * torus.height;
        let rim = cx + self.radius * (1.0 + torus.start_x);
        let profile = torus_profile(rim, self.y, height, self.radius * torus.radius);
        create_line(&profile, stroke, width, Some(&mut *self.form), None);
        self.line((rim, self.y), (cx, self.y));
        self.line((rim, self.y - height), (cx, self.y - height));
        if self.debug {
            let marker = &self.ctx.settings.debug_stroke_color;
            for p in &profile {
                create_circle(*p, 2.0, marker, 1.0, None, Some(&mut *self.form));
            }
        }
        self.y -= height;
    }

    fn fillet(&mut self, fillet: &Fillet) {
        if !fillet.visible {
            return;
        }
        let (cx, y) = (self.center.x(), self.y);
        let height = self.radius * fillet.height;
        let right = cx + self.radius * (1.0 + fillet.start_x);
        self.line((cx, y), (right, y));
        if height > 0.01 {
            self.line((right, y), (right, y - height));
        }
        self.line((right, y - height), (cx, y - height));
        self.y -= height;
    }
}

/// Faint slices across the plinth and every visible torus, then the dashed axis.
fn revolution_lines(
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    bottom: f64,
    settings: &ColumnBaseSettings,
    ctx: &DrawContext<'_>,
) {
    let stroke = ctx.stroke();
    let slice = with_alpha(stroke, alpha(stroke) * 0.3);
    let cx = center.x();
    let mut y = bottom;

    if settings.plinth.visible {
        let height = radius * settings.plinth.height;
        let plinth = radius * settings.plinth.width;
        create_line(&[(cx, y).into(), (cx + plinth, y).into()], &slice, 0.5, Some(&mut *form), None);
        create_line(
            &[(cx, y - height).into(), (cx + radius, y - height).into()],
            &slice,
            0.5,
            Some(&mut *form),
            None,
        );
        y -= height;
    }

    let tori = [&settings.lower_torus, &settings.middle_torus, &settings.upper_torus, &settings.shaft_torus];
    for (i, torus) in tori.into_iter().enumerate() {
        // Fillet sits between the lower torus and the rest.
        if i == 1 && settings.fillet.visible {
            y -= radius * settings.fillet.height;
        }
        if !torus.visible {
            continue;
        }
        let height = radius * torus.height;
        for s in 0..=TORUS_SLICES {
            let t = s as f64 / TORUS_SLICES as f64;
            let reach = radius + radius * torus.radius * (t * PI).sin();
            let sy = y - height * t;
            create_line(&[(cx, sy).into(), (cx + reach, sy).into()], &slice, 0.3, Some(&mut *form), None);
        }
        y -= height;
    }

    let axis_color = with_alpha(stroke, alpha(stroke) * 0.5);
    let mut axis = create_line(&[(cx, bottom).into(), (cx, y).into()], &axis_color, 1.0, None, None);
    set_dash_length(&mut axis, 2.0);
    form.add(axis);
}

pub fn column_base(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &ColumnBaseSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    ctx.grids(blueprint, center, &settings.grid);
    ctx.cosmos(blueprint, center, radius);

    let bottom = center.y() + radius * 0.8;
    let mut stack = Stack {
        form: &mut *form,
        ctx,
        center,
        radius,
        y: bottom,
        debug: settings.debug,
    };
    stack.plinth(&settings.plinth);
    stack.torus(&settings.lower_torus);
    stack.fillet(&settings.fillet);
    stack.torus(&settings.middle_torus);
    stack.torus(&settings.upper_torus);
    stack.torus(&settings.shaft_torus);

    let layers = [
        settings.plinth.visible,
        settings.lower_torus.visible,
        settings.fillet.visible,
        settings.middle_torus.visible,
        settings.upper_torus.visible,
        settings.shaft_torus.visible,
    ];
    if layers.iter().any(|v| *v) {
        revolution_lines(form, center, radius, bottom, settings, ctx);
    }
    Ok(())
}

impl GeometryGenerator for ColumnBaseSettings {
    fn name(&self) -> &str {
        "Column Base"
    }

    fn radius_factor(&self) -> f64 {
        0.4
    }

    fn center_offset(&self, radius: f64) -> (f64, f64) {
        (0.0, -radius * 0.2)
    }

    fn configure(&self, settings: &mut SketchSettings) {
        settings.darkness = true;
        settings.blueprint.visible = true;
    }

    fn draw(
        &self,
        blueprint: &mut Group,
        form: &mut Group,
        center: Point<f64>,
        radius: f64,
        ctx: &mut DrawContext<'_>,
    ) -> Result<(), GeometryError> {
        column_base(blueprint, form, center, radius, self, ctx)
    }
}
