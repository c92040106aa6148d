//! Hypatia's cosmos: a star field projected off a sphere, the tilted motion
//! ellipses of the heavens and seven planetary orbits opening out from the
//! center, with one planet on each.
use geo_types::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, TAU};

use crate::document::color::with_alpha;
use crate::document::draw::{create_circle, create_ellipse, dot, set_dash_length};
use crate::document::Group;
use crate::errors::GeometryError;
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

/// Minor over major axis of the motion ellipses.
const AXIS_RATIO: f64 = 0.577_350_269_189_625_8;

const ORBITS: usize = 7;

/// Sizes are fractions of the figure radius.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HypatiaSettings {
    pub outline: bool,
    /// The filled disc in the middle.
    pub core: bool,
    pub core_radius: f64,
    pub stars: usize,
    pub star_radius: f64,
    /// Dashed motion ellipses, one level and three tilted.
    pub motion: bool,
    pub motion_opacity: f64,
    pub orbits: bool,
    pub orbit_opacity: f64,
    pub planets: bool,
    pub planet_radius: f64,
    /// Turns the planets make from the innermost orbit to the outermost.
    pub spiral: f64,
    pub dash: f64,
}

impl Default for HypatiaSettings {
    fn default() -> Self {
        Self {
            outline: true,
            core: true,
            core_radius: 0.05,
            stars: 200,
            star_radius: 0.005,
            motion: true,
            motion_opacity: 0.25,
            orbits: true,
            orbit_opacity: 0.5,
            planets: true,
            planet_radius: 0.02,
            spiral: 1.75,
            dash: 0.02,
        }
    }
}

/// Flatten a point of the unit sphere onto the disc, pulling the near half in
/// towards the center. Never leaves the disc.
pub fn project_spherical(theta: f64, phi: f64, radius: f64, center: Point<f64>) -> Point<f64> {
    let (x, y, z) = (phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos());
    let scaled = radius * (1.0 - z * 0.5);
    let (mut px, mut py) = (x * scaled, y * scaled);
    let distance = px.hypot(py);
    if distance > radius {
        px *= radius / distance;
        py *= radius / distance;
    }
    Point::new(center.x() + px, center.y() + py)
}

/// Radius and vertical squash of orbit `i`.
pub fn orbit(radius: f64, i: usize) -> (f64, f64) {
    let p = i as f64 / (ORBITS - 1) as f64;
    let r = radius / 5.0 + (radius - radius / 5.0) * p;
    let squash = AXIS_RATIO + (AXIS_RATIO * (1.0 + AXIS_RATIO) - AXIS_RATIO) * p;
    (r, squash)
}

pub fn hypatia(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &HypatiaSettings,
    ctx: &mut DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke().clone(), ctx.width());
    let dash = radius * settings.dash;
    ctx.cosmos(blueprint, center, radius);

    if settings.outline {
        create_circle(center, radius, &stroke, width, None, Some(&mut *form));
    }

    for _ in 0..settings.stars {
        let theta = ctx.rng.gen::<f64>() * TAU;
        let phi = (2.0 * ctx.rng.gen::<f64>() - 1.0).acos();
        let position = project_spherical(theta, phi, radius, center);
        let brightness = if ctx.rng.gen::<f64>() > 0.9 {
            1.0
        } else {
            ctx.rng.gen_range(0.15..0.75)
        };
        let color = with_alpha(&stroke, brightness);
        dot(position, radius * settings.star_radius, Some(&mut *form), Some(&color));
    }

    if settings.motion {
        let color = with_alpha(&stroke, settings.motion_opacity);
        let level = create_ellipse(center, radius, radius * AXIS_RATIO, &color, width, None);
        let upright = create_ellipse(center, radius * AXIS_RATIO, radius, &color, width, None);
        for mut ellipse in [
            level,
            upright.clone(),
            upright.rotated(FRAC_PI_4, center),
            upright.rotated(-FRAC_PI_4, center),
        ] {
            set_dash_length(&mut ellipse, dash);
            form.add(ellipse);
        }
    }

    if settings.core {
        dot(center, radius * settings.core_radius, Some(&mut *form), Some(&stroke));
    }

    if settings.orbits {
        let color = with_alpha(&stroke, settings.orbit_opacity);
        for i in 0..ORBITS {
            let (r, squash) = orbit(radius, i);
            let mut ellipse = create_ellipse(center, r, r * squash, &color, width, None);
            set_dash_length(&mut ellipse, dash);
            form.add(ellipse);

            if settings.planets {
                let theta = TAU * settings.spiral * i as f64 / (ORBITS - 1) as f64;
                let planet = Point::new(
                    center.x() + theta.cos() * r,
                    center.y() + theta.sin() * r * squash,
                );
                dot(planet, radius * settings.planet_radius, Some(&mut *form), Some(&stroke));
            }
        }
    }
    Ok(())
}

impl GeometryGenerator for HypatiaSettings {
    fn name(&self) -> &str {
        "Hypatia"
    }

    fn configure(&self, settings: &mut SketchSettings) {
        settings.blueprint.visible = true;
        settings.blueprint.cosmos = false;
    }

    fn draw(
        &self,
        blueprint: &mut Group,
        form: &mut Group,
        center: Point<f64>,
        radius: f64,
        ctx: &mut DrawContext<'_>,
    ) -> Result<(), GeometryError> {
        hypatia(blueprint, form, center, radius, self, ctx)
    }
}
