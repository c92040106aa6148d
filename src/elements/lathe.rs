//! A molding profile turned on a lathe: the profile and its mirror image either
//! side of the axis, with dashed ellipses where the revolved surface would be
//! seen edge on.
use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::document::color::{alpha, with_alpha};
use crate::document::draw::{create_ellipse, create_line, set_dash_length, Size};
use crate::document::Group;
use crate::errors::GeometryError;
use crate::sketch::{DrawContext, GeometryGenerator, GridSettings, SketchSettings};

use super::profile::{scotia_path, torus_path, ScotiaPath, TorusPath};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatheProfile {
    Torus,
    Scotia,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LatheSettings {
    pub profile: LatheProfile,
    pub torus: TorusPath,
    pub scotia: ScotiaPath,
    /// Revolution ellipses spread along the profile.
    pub rings: usize,
    /// Height of an ellipse over its width, how far the view looks down.
    pub perspective: f64,
    pub dash: f64,
    pub grid: GridSettings,
}

impl Default for LatheSettings {
    fn default() -> Self {
        Self {
            profile: LatheProfile::Scotia,
            torus: TorusPath::default(),
            scotia: ScotiaPath::default(),
            rings: 8,
            perspective: 0.2,
            dash: 4.0,
            grid: GridSettings::default(),
        }
    }
}

impl LatheSettings {
    /// Profile with x measured out from the axis and y down from the top,
    /// inside a `radius` by `2 * radius` box.
    pub fn profile(&self, radius: f64) -> Vec<Point<f64>> {
        match self.profile {
            LatheProfile::Torus => torus_path(radius, &self.torus),
            LatheProfile::Scotia => scotia_path(Size::new(radius, radius * 2.0), &self.scotia),
        }
    }
}

/// Indices of `count` profile points spread evenly from first to last.
fn ring_indices(len: usize, count: usize) -> Vec<usize> {
    match (len, count) {
        (0, _) | (_, 0) => vec![],
        (_, 1) => vec![0],
        _ => (0..count)
            .map(|i| (i * (len - 1) + (count - 1) / 2) / (count - 1))
            .collect(),
    }
}

pub fn lathe(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &LatheSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    ctx.cosmos(blueprint, center, radius);
    ctx.grids(blueprint, center, &settings.grid);

    let top = center.y() - radius;
    let profile = settings.profile(radius);
    let right: Vec<Point<f64>> = profile
        .iter()
        .map(|p| Point::new(center.x() + p.x(), top + p.y()))
        .collect();
    let right = create_line(&right, stroke, width, Some(&mut *form), None);
    form.add(right.mirrored_x(center.x()));

    let ring_color = with_alpha(stroke, alpha(stroke) * 0.5);
    for i in ring_indices(profile.len(), settings.rings) {
        let p = profile[i];
        // Points on the axis turn into nothing.
        if p.x().abs() < 1e-6 {
            continue;
        }
        let mut ring = create_ellipse(
            Point::new(center.x(), top + p.y()),
            p.x(),
            p.x() * settings.perspective,
            &ring_color,
            width,
            None,
        );
        set_dash_length(&mut ring, settings.dash);
        form.add(ring);
    }

    let mut axis = create_line(
        &[Point::new(center.x(), top), Point::new(center.x(), top + radius * 2.0)],
        &ring_color,
        width,
        None,
        None,
    );
    set_dash_length(&mut axis, settings.dash);
    blueprint.add(axis);
    Ok(())
}

impl GeometryGenerator for LatheSettings {
    fn name(&self) -> &str {
        "Lathe"
    }

    fn configure(&self, settings: &mut SketchSettings) {
        settings.scale = 1.0;
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
        lathe(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_types::PointOps;
    use crate::elements::test_context;

    fn draw(settings: &LatheSettings) -> (Group, Group) {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        lathe(&mut blueprint, &mut form, Point::new(250.0, 250.0), 200.0, settings, &ctx).unwrap();
        (blueprint, form)
    }

    #[test]
    fn test_ring_indices() {
        assert_eq!(ring_indices(31, 0), Vec::<usize>::new());
        assert_eq!(ring_indices(31, 1), vec![0]);
        assert_eq!(ring_indices(31, 4), vec![0, 10, 20, 30]);
        assert_eq!(ring_indices(0, 4), Vec::<usize>::new());
    }

    #[test]
    fn test_profile_is_mirrored() {
        let (_, form) = draw(&LatheSettings::default());
        let paths = form.paths();
        let (right, left) = (paths[0].points(), paths[1].points());
        assert_eq!(right.len(), left.len());
        for (r, l) in right.iter().zip(&left) {
            assert!((r.x() - 250.0 + l.x() - 250.0).abs() < 1e-9);
            assert_eq!(r.y(), l.y());
        }
    }

    #[test]
    fn test_scotia_rings_skip_the_axis() {
        let (blueprint, form) = draw(&LatheSettings::default());
        // The scotia starts and ends on the axis, so two rings drop out.
        assert_eq!(form.len(), 2 + 8 - 2);
        for ring in &form.paths()[2..] {
            assert!(ring.dash.is_some());
        }
        // Two grids and the dashed axis.
        assert_eq!(blueprint.len(), 49 + 9 + 1);
    }

    #[test]
    fn test_torus_profile_spans_the_box() {
        let settings = LatheSettings {
            profile: LatheProfile::Torus,
            ..Default::default()
        };
        let (_, form) = draw(&settings);
        let right = form.paths()[0].points();
        let widest = right.iter().map(|p| p.x()).fold(f64::MIN, f64::max);
        assert!((widest - 450.0).abs() < 1e-9);
        assert!(right[0].distance(&Point::new(250.0, 50.0)) < 1e-9);
    }
}
