//! Molding profiles for column parts: torus, scotia and acanthus leaves.
//! Every profile is a point list in a box whose origin is the top left
//! corner, so the same curve can be drawn on its own or revolved on a lathe.
use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::document::draw::{create_line, dot, Size};
use crate::document::Group;
use crate::errors::GeometryError;
use crate::geo_types::spline::{catmull_rom, CurveType};
use crate::geo_types::{lerp, PointOps};
use crate::sketch::{DrawContext, GeometryGenerator, GridSettings, SketchSettings};

/// `divisions` evenly spaced parameters over [0, 1], both ends included.
fn steps(divisions: usize) -> Vec<f64> {
    match divisions {
        0 => vec![],
        1 => vec![0.0],
        n => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}

/// Point on an axis-aligned ellipse, angle in degrees.
fn on_ellipse(center: Point<f64>, rx: f64, ry: f64, degrees: f64) -> Point<f64> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(center.x() + rx * cos, center.y() + ry * sin)
}

/// Convex half-round, as a half ellipse from the top of the box to `2 * radius` down.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TorusPath {
    pub divisions: usize,
    /// Horizontal stretch of the bulge.
    pub scale_x: f64,
}

impl Default for TorusPath {
    fn default() -> Self {
        Self {
            divisions: 25,
            scale_x: 1.0,
        }
    }
}

pub fn torus_path(radius: f64, settings: &TorusPath) -> Vec<Point<f64>> {
    let center = Point::new(0.0, radius);
    steps(settings.divisions)
        .into_iter()
        .map(|t| on_ellipse(center, radius * settings.scale_x, radius, -90.0 + 180.0 * t))
        .collect()
}

/// Concave molding: a deep bottom step, a quarter ellipse hollow, a shallow top step.
/// Lengths and heights are fractions of the box.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScotiaPath {
    pub divisions: usize,
    pub bottom_length: f64,
    pub top_length: f64,
    pub bottom_height: f64,
    pub top_height: f64,
}

impl Default for ScotiaPath {
    fn default() -> Self {
        Self {
            divisions: 25,
            bottom_length: 0.8,
            top_length: 0.1,
            bottom_height: 0.1,
            top_height: 0.1,
        }
    }
}

pub fn scotia_path(size: Size, settings: &ScotiaPath) -> Vec<Point<f64>> {
    let (w, h) = (size.width, size.height);
    let bottom_end = Point::new(w * settings.bottom_length, h);
    let bottom_step = Point::new(w * settings.bottom_length, h - h * settings.bottom_height);
    let top_step = Point::new(w * settings.top_length, h * settings.top_height);
    let top_end = Point::new(w * settings.top_length, 0.0);

    let hollow = Point::new(bottom_step.x(), top_step.y());
    let (rx, ry) = (bottom_step.x() - top_step.x(), bottom_step.y() - top_step.y());

    let mut points = vec![Point::new(0.0, h), bottom_end, bottom_step];
    points.extend(
        steps(settings.divisions)
            .into_iter()
            .map(|t| on_ellipse(hollow, rx, ry, 90.0 + 90.0 * t)),
    );
    points.extend([top_step, top_end, Point::new(0.0, 0.0)]);
    points
}

/// Side view of an acanthus leaf: a stem through four control points that
/// curls into a spiral around the fifth. Control points are fractions of the box.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AcanthusPath {
    pub spiral_turns: f64,
    pub spiral_divisions: usize,
    /// Samples on the final spline.
    pub smoothness: usize,
    pub control: [(f64, f64); 5],
}

impl Default for AcanthusPath {
    fn default() -> Self {
        Self {
            spiral_turns: 1.0,
            spiral_divisions: 20,
            smoothness: 100,
            control: [(0.2, 1.0), (0.15, 0.8), (0.17, 0.53), (0.32, 0.31), (0.58, 0.4)],
        }
    }
}

pub fn acanthus_path(size: Size, settings: &AcanthusPath) -> Vec<Point<f64>> {
    let control: Vec<Point<f64>> = settings
        .control
        .iter()
        .map(|(x, y)| Point::new(x * size.width, y * size.height))
        .collect();
    let (start, eye) = (control[3], control[4]);
    let start_radius = start.distance(&eye);
    let start_angle = (start.y() - eye.y()).atan2(start.x() - eye.x());

    let mut points = control[..4].to_vec();
    // The spiral's first point is `start` itself.
    points.extend(steps(settings.spiral_divisions).into_iter().skip(1).map(|t| {
        let angle = start_angle + t * settings.spiral_turns * std::f64::consts::TAU;
        let radius = start_radius * (1.0 - t * 0.8);
        Point::new(eye.x() + radius * angle.cos(), eye.y() + radius * angle.sin())
    }));
    catmull_rom(&points, settings.smoothness, CurveType::Centripetal)
}

/// Front view of an acanthus leaf: a closed outline with an arched top.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AcanthusFrontPath {
    /// Fraction of the box width.
    pub width: f64,
    /// Fraction of the box height.
    pub height: f64,
    /// Where the arch springs from, along the side.
    pub arc_start: f64,
    pub divisions: usize,
}

impl Default for AcanthusFrontPath {
    fn default() -> Self {
        Self {
            width: 0.5,
            height: 0.6,
            arc_start: 0.5,
            divisions: 25,
        }
    }
}

pub fn acanthus_front_path(size: Size, settings: &AcanthusFrontPath) -> Vec<Point<f64>> {
    let width = settings.width * size.width;
    let (left, right) = (size.width / 2.0 - width / 2.0, size.width / 2.0 + width / 2.0);
    let top = size.height - settings.height * size.height;
    let base_left = Point::new(left, size.height);
    let base_right = Point::new(right, size.height);

    let spring = lerp(base_left, Point::new(left, top), settings.arc_start);
    let crown = lerp(Point::new(left, top), Point::new(right, top), 0.5);
    let arch = Point::new(crown.x(), spring.y());
    let (rx, ry) = (crown.x() - spring.x(), crown.y() - spring.y());

    let mut points = vec![base_left];
    points.extend(
        steps(settings.divisions)
            .into_iter()
            .map(|t| on_ellipse(arch, rx, ry, 180.0 - 180.0 * t)),
    );
    points.extend([base_right, base_left]);
    points
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Torus,
    Scotia,
    Acanthus,
    AcanthusFront,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PathProfileSettings {
    pub profile: Profile,
    pub torus: TorusPath,
    pub scotia: ScotiaPath,
    pub acanthus: AcanthusPath,
    pub acanthus_front: AcanthusFrontPath,
    pub grid: GridSettings,
}

impl Default for PathProfileSettings {
    fn default() -> Self {
        Self {
            profile: Profile::Scotia,
            torus: TorusPath::default(),
            scotia: ScotiaPath::default(),
            acanthus: AcanthusPath::default(),
            acanthus_front: AcanthusFrontPath::default(),
            grid: GridSettings::default(),
        }
    }
}

impl PathProfileSettings {
    /// Points of the selected profile in a box of `size`.
    pub fn points(&self, size: Size, radius: f64) -> Vec<Point<f64>> {
        match self.profile {
            Profile::Torus => torus_path(radius, &self.torus),
            Profile::Scotia => scotia_path(size, &self.scotia),
            Profile::Acanthus => acanthus_path(size, &self.acanthus),
            Profile::AcanthusFront => acanthus_front_path(size, &self.acanthus_front),
        }
    }
}

/// The selected profile as separate segments, each end marked with a dot.
pub fn path_profile(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &PathProfileSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    ctx.cosmos(blueprint, center, radius);
    ctx.grids(blueprint, center, &settings.grid);

    let (stroke, width) = (ctx.stroke(), ctx.width());
    let points = settings.points(ctx.size, radius);
    for pair in points.windows(2) {
        create_line(pair, stroke, width, Some(&mut *form), None);
        dot(pair[1], 2.5, Some(&mut *form), None);
    }
    Ok(())
}

impl GeometryGenerator for PathProfileSettings {
    fn name(&self) -> &str {
        "Path Profile"
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
        path_profile(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::test_context;

    const BOX: Size = Size {
        width: 500.0,
        height: 500.0,
    };

    fn close(a: Point<f64>, b: Point<f64>) -> bool {
        a.distance(&b) < 1e-9
    }

    #[test]
    fn test_steps() {
        assert!(steps(0).is_empty());
        assert_eq!(steps(1), vec![0.0]);
        assert_eq!(steps(3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_torus_is_a_half_ellipse() {
        let settings = TorusPath {
            divisions: 5,
            scale_x: 0.5,
        };
        let points = torus_path(100.0, &settings);
        assert_eq!(points.len(), 5);
        assert!(close(points[0], Point::new(0.0, 0.0)));
        assert!(close(points[2], Point::new(50.0, 100.0)));
        assert!(close(points[4], Point::new(0.0, 200.0)));
    }

    #[test]
    fn test_scotia_steps_and_hollow() {
        let settings = ScotiaPath::default();
        let points = scotia_path(BOX, &settings);
        assert_eq!(points.len(), settings.divisions + 6);
        assert_eq!(points[0], Point::new(0.0, 500.0));
        assert_eq!(*points.last().unwrap(), Point::new(0.0, 0.0));
        // The hollow runs from the bottom step to the top step.
        assert!(close(points[3], points[2]));
        assert!(close(points[2 + settings.divisions], points[3 + settings.divisions]));
    }

    #[test]
    fn test_acanthus_starts_on_its_stem() {
        let settings = AcanthusPath::default();
        let points = acanthus_path(BOX, &settings);
        assert_eq!(points.len(), settings.smoothness + 1);
        assert!(close(points[0], Point::new(100.0, 500.0)));
        // Ends curled in towards the eye of the spiral.
        let eye = Point::new(290.0, 200.0);
        let start = Point::new(160.0, 155.0);
        let end = *points.last().unwrap();
        assert!(end.distance(&eye) < start.distance(&eye) * 0.25);
    }

    #[test]
    fn test_acanthus_front_is_closed() {
        let settings = AcanthusFrontPath::default();
        let points = acanthus_front_path(BOX, &settings);
        assert_eq!(points.len(), settings.divisions + 3);
        assert_eq!(points[0], *points.last().unwrap());
        // The crown of the arch sits on the top edge, centered.
        let crown = points[1 + settings.divisions / 2];
        assert!(close(crown, Point::new(250.0, 200.0)));
    }

    #[test]
    fn test_segments_and_dots() {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let settings = PathProfileSettings {
            profile: Profile::Torus,
            grid: GridSettings {
                visible: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        path_profile(&mut blueprint, &mut form, Point::new(250.0, 250.0), 100.0, &settings, &ctx).unwrap();
        assert!(blueprint.is_empty());
        assert_eq!(form.len(), 2 * 24);
    }
}
