//! Stochastic pictures of quantum waves. Both generators draw their particles
//! from `DrawContext::rng`, so a given seed always gives the same picture.
//!
//! - [`quantum_interference`]: point emitters on a ring, each sending out
//!   concentric wave fronts as clouds of faint particles that interfere where
//!   they overlap.
//! - [`wave_graph`]: the probability density `|psi|^2 = sin^2` of a particle in
//!   a box over one half period, with particles scattered along it.
use geo_types::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use crate::document::color::{white, with_alpha};
use crate::document::draw::{create_circle, create_line, dot};
use crate::document::Group;
use crate::errors::GeometryError;
use crate::geo_types::point_on_circle;
use crate::sketch::{DrawContext, GeometryGenerator, GridSettings, SketchSettings};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct QuantumInterferenceSettings {
    /// Emitters evenly spaced on the figure's circle.
    pub emitters: usize,
    /// Wave fronts per emitter.
    pub waves: usize,
    /// Radius of the outermost front, in figure radii.
    pub reach: f64,
    /// Sample directions per unit of front radius.
    pub density: f64,
    /// Particles scattered around each sample direction.
    pub particles: usize,
    /// Radial spread of a front.
    pub thickness: f64,
    /// Extra random offset on both axes.
    pub jitter: f64,
    pub particle_radius: f64,
    pub particle_opacity: f64,
}

impl Default for QuantumInterferenceSettings {
    fn default() -> Self {
        Self {
            emitters: 4,
            waves: 10,
            reach: 2.0,
            density: 2.0,
            particles: 10,
            thickness: 10.0,
            jitter: 10.0,
            particle_radius: 0.5,
            particle_opacity: 0.25,
        }
    }
}

/// Radius of wave front `i` out of `waves`, from a tenth of `reach` up to `reach`.
fn front_radius(i: usize, waves: usize, reach: f64) -> f64 {
    if waves < 2 {
        return reach;
    }
    let t = i as f64 / (waves - 1) as f64;
    reach * 0.1 + (reach - reach * 0.1) * t
}

/// One emitter: the front circles go to the blueprint, the particle cloud to the form.
pub fn quantum_wave(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    reach: f64,
    settings: &QuantumInterferenceSettings,
    ctx: &mut DrawContext<'_>,
) {
    let (stroke, width) = (ctx.stroke().clone(), ctx.width());
    let particle = with_alpha(&white(), settings.particle_opacity);
    // Band half width. Negative or non-finite thickness collapses onto the front.
    let half = if settings.thickness.is_finite() {
        settings.thickness.abs() / 2.0
    } else {
        0.0
    };

    for i in 0..settings.waves {
        let radius = front_radius(i, settings.waves, reach);
        create_circle(center, radius, &stroke, width, None, Some(&mut *blueprint));

        let directions = (radius * settings.density).round() as usize;
        for j in 0..directions {
            let angle = TAU * j as f64 / directions as f64;
            for _ in 0..settings.particles {
                let r = ctx.rng.gen_range(radius - half..=radius + half);
                let jitter = Point::new(
                    (ctx.rng.gen::<f64>() - 0.5) * settings.jitter,
                    (ctx.rng.gen::<f64>() - 0.5) * settings.jitter,
                );
                dot(
                    point_on_circle(center, r, angle) + jitter,
                    settings.particle_radius,
                    Some(&mut *form),
                    Some(&particle),
                );
            }
        }
    }
}

pub fn quantum_interference(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &QuantumInterferenceSettings,
    ctx: &mut DrawContext<'_>,
) -> Result<(), GeometryError> {
    ctx.cosmos(blueprint, center, radius);
    for i in 0..settings.emitters {
        let emitter = point_on_circle(center, radius, TAU * i as f64 / settings.emitters as f64);
        quantum_wave(blueprint, form, emitter, radius * settings.reach, settings, ctx);
    }
    Ok(())
}

impl GeometryGenerator for QuantumInterferenceSettings {
    fn name(&self) -> &str {
        "Quantum Interference"
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
        quantum_interference(blueprint, form, center, radius, self, ctx)
    }
}

/// How particles are placed on the density graph.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveSampling {
    /// Phases drawn from the density itself, each particle sitting on the curve.
    OnCurve,
    /// Rejection sampling: particles fill the area under the curve.
    UnderCurve,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WaveGraphSettings {
    pub sampling: WaveSampling,
    /// Attempts; rejection sampling keeps about half of them.
    pub particles: usize,
    pub particle_radius: f64,
    /// Show the density curve itself.
    pub curve: bool,
    pub curve_samples: usize,
    /// Distance of the axes from the canvas edge.
    pub padding: f64,
    pub axis_opacity: f64,
    pub grid: GridSettings,
}

impl Default for WaveGraphSettings {
    fn default() -> Self {
        Self {
            sampling: WaveSampling::OnCurve,
            particles: 1000,
            particle_radius: 1.0,
            curve: true,
            curve_samples: 100,
            padding: 40.0,
            axis_opacity: 0.5,
            grid: GridSettings::default(),
        }
    }
}

/// Probability density over the phase `0..PI`.
pub fn density(phase: f64) -> f64 {
    phase.sin().powi(2)
}

/// A phase biased towards the peak of [`density`], from two uniform samples
/// in [0, 1). `density(phase)` equals `u`, and `mirror` picks the rising or the
/// falling half of the curve.
pub fn born_phase(u: f64, mirror: f64) -> f64 {
    let root = u.sqrt().asin();
    if mirror < 0.5 {
        root
    } else {
        PI - root
    }
}

/// Graph box: the x axis runs along `bottom` from `left` to `right`, a density
/// of one reaches `bottom - height`.
struct Frame {
    left: f64,
    right: f64,
    bottom: f64,
    height: f64,
}

impl Frame {
    fn point(&self, t: f64, value: f64) -> Point<f64> {
        Point::new(self.left + (self.right - self.left) * t, self.bottom - value * self.height)
    }
}

pub fn wave_graph(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &WaveGraphSettings,
    ctx: &mut DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke().clone(), ctx.width());
    ctx.grids(blueprint, center, &settings.grid);
    ctx.cosmos(blueprint, center, radius);

    let size = ctx.size;
    let padding = settings.padding;
    let frame = Frame {
        left: padding,
        right: size.width - padding,
        bottom: size.height - padding,
        height: size.height - padding * 2.0,
    };

    let axis = with_alpha(&white(), settings.axis_opacity);
    create_line(&[frame.point(0.0, 0.0), frame.point(1.0, 0.0)], &axis, width, Some(&mut *blueprint), None);
    create_line(&[frame.point(0.0, 0.0), frame.point(0.0, 1.0)], &axis, width, Some(&mut *blueprint), None);
    // Ticks at 0, 0.5 and 1 on the density axis, every 45 degrees on the phase axis.
    let tick = padding / 4.0;
    for i in 0..3 {
        let p = frame.point(0.0, i as f64 / 2.0);
        create_line(&[p, Point::new(p.x() - tick, p.y())], &axis, width, Some(&mut *blueprint), None);
    }
    for i in 0..5 {
        let p = frame.point(i as f64 / 4.0, 0.0);
        create_line(&[p, Point::new(p.x(), p.y() + tick)], &axis, width, Some(&mut *blueprint), None);
    }

    if settings.curve && settings.curve_samples > 1 {
        let last = (settings.curve_samples - 1) as f64;
        let curve: Vec<Point<f64>> = (0..settings.curve_samples)
            .map(|i| {
                let t = i as f64 / last;
                frame.point(t, density(t * PI))
            })
            .collect();
        create_line(&curve, &stroke, width, Some(&mut *blueprint), None);
    }

    let particle = white();
    for _ in 0..settings.particles {
        let p = match settings.sampling {
            WaveSampling::OnCurve => {
                let phase = born_phase(ctx.rng.gen(), ctx.rng.gen());
                frame.point(phase / PI, density(phase))
            }
            WaveSampling::UnderCurve => {
                let t: f64 = ctx.rng.gen();
                let probability = density(t * PI);
                if ctx.rng.gen::<f64>() > probability {
                    continue;
                }
                frame.point(t, probability * ctx.rng.gen::<f64>())
            }
        };
        dot(p, settings.particle_radius, Some(&mut *form), Some(&particle));
    }
    Ok(())
}

impl GeometryGenerator for WaveGraphSettings {
    fn name(&self) -> &str {
        "Wavefunction Probability Density"
    }

    fn configure(&self, settings: &mut SketchSettings) {
        settings.darkness = true;
        settings.blueprint.visible = true;
        settings.blueprint.opacity = 1.0;
    }

    fn draw(
        &self,
        blueprint: &mut Group,
        form: &mut Group,
        center: Point<f64>,
        radius: f64,
        ctx: &mut DrawContext<'_>,
    ) -> Result<(), GeometryError> {
        wave_graph(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::test_context;
    use crate::geo_types::PointOps;

    fn light() -> QuantumInterferenceSettings {
        QuantumInterferenceSettings {
            waves: 3,
            particles: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_front_radius() {
        assert_eq!(front_radius(0, 1, 50.0), 50.0);
        assert!((front_radius(0, 10, 100.0) - 10.0).abs() < 1e-12);
        assert!((front_radius(9, 10, 100.0) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_particles_hug_their_fronts() {
        let sketch = SketchSettings::default();
        let mut ctx = test_context(&sketch);
        let settings = QuantumInterferenceSettings {
            waves: 1,
            ..light()
        };
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        let center = Point::new(250.0, 250.0);
        quantum_wave(&mut blueprint, &mut form, center, 40.0, &settings, &mut ctx);
        assert_eq!(blueprint.len(), 1);
        assert_eq!(form.len(), 80 * 2);
        // Front thickness plus the diagonal of the jitter box.
        let slack = 5.0 + 5.0 * std::f64::consts::SQRT_2 + 1e-9;
        for path in form.paths() {
            let d = path.points()[0].distance(&center);
            assert!((d - 40.0).abs() <= slack);
        }
    }

    #[test]
    fn test_bad_thickness_degrades() {
        let sketch = SketchSettings::default();
        let center = Point::new(250.0, 250.0);
        for (thickness, spread) in [(-2.0, 1.0), (f64::NAN, 0.0)] {
            let mut ctx = test_context(&sketch);
            let settings = QuantumInterferenceSettings {
                waves: 1,
                particles: 1,
                thickness,
                jitter: 0.0,
                ..Default::default()
            };
            let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
            quantum_wave(&mut blueprint, &mut form, center, 40.0, &settings, &mut ctx);
            assert_eq!(form.len(), 80);
            for path in form.paths() {
                let d = path.points()[0].distance(&center);
                assert!((d - 40.0).abs() <= spread + 1e-9);
            }
        }
    }

    #[test]
    fn test_same_seed_same_cloud() {
        let sketch = SketchSettings::default();
        let draw = || {
            let mut ctx = test_context(&sketch);
            let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
            quantum_interference(&mut blueprint, &mut form, Point::new(250.0, 250.0), 50.0, &light(), &mut ctx)
                .unwrap();
            form
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn test_born_phase() {
        assert_eq!(born_phase(0.0, 0.0), 0.0);
        assert!((born_phase(1.0, 0.0) - PI / 2.0).abs() < 1e-12);
        assert!((born_phase(0.0, 0.9) - PI).abs() < 1e-12);
        assert!((density(born_phase(0.3, 0.7)) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_born_sampling_favours_the_peak() {
        let sketch = SketchSettings::default();
        let mut ctx = test_context(&sketch);
        let n = 4000;
        let middle = (0..n)
            .map(|_| born_phase(ctx.rng.gen(), ctx.rng.gen()))
            .filter(|phase| (PI / 4.0..3.0 * PI / 4.0).contains(phase))
            .count();
        // Uniform in sin^2, so half the samples land in the middle half of the range.
        let share = middle as f64 / n as f64;
        assert!(share > 0.45 && share < 0.55);
    }

    #[test]
    fn test_graph_particles_stay_in_the_frame() {
        let sketch = SketchSettings::default();
        for sampling in [WaveSampling::OnCurve, WaveSampling::UnderCurve] {
            let mut ctx = test_context(&sketch);
            let settings = WaveGraphSettings {
                sampling,
                particles: 200,
                grid: GridSettings {
                    visible: false,
                    ..Default::default()
                },
                ..Default::default()
            };
            let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
            wave_graph(&mut blueprint, &mut form, Point::new(250.0, 250.0), 200.0, &settings, &mut ctx)
                .unwrap();
            // Two axes, eight ticks, the curve.
            assert_eq!(blueprint.len(), 2 + 3 + 5 + 1);
            match sampling {
                WaveSampling::OnCurve => assert_eq!(form.len(), 200),
                WaveSampling::UnderCurve => assert!(form.len() < 200),
            }
            for path in form.paths() {
                let p = path.points()[0];
                assert!(p.x() >= 40.0 && p.x() <= 460.0);
                assert!(p.y() >= 40.0 - 1e-9 && p.y() <= 460.0);
            }
        }
    }
}
