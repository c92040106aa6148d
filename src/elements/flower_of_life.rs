use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::document::color::Color;
use crate::document::draw::{create_circle, create_line, dot};
use crate::document::{Group, Path};
use crate::errors::GeometryError;
use crate::geo_types::boolean::BooleanOp;
use crate::geo_types::matrix::translate_matrix;
use crate::geo_types::{lerp, ring_points};
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

/// Screen angle of the first ring vertex: upper right.
pub const START_ANGLE: f64 = -PI / 6.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FlowerOfLifeSettings {
    /// Hexagon outline and cube spokes per ring.
    pub lines: bool,
    /// Dots on the hexagon vertices.
    pub structure: bool,
    pub dimensions: usize,
    /// Replace ring circles with petal rosettes.
    pub petals: bool,
    pub circles: bool,
}

impl Default for FlowerOfLifeSettings {
    fn default() -> Self {
        Self {
            lines: true,
            structure: true,
            dimensions: 3,
            petals: true,
            circles: true,
        }
    }
}

/// Lens left over where two equal circles, `inner_radius` apart sideways by
/// `sqrt(3)`, overlap: a vertical petal `inner_radius` tall centered on `center`.
pub fn petal(center: Point<f64>, inner_radius: f64, stroke: &Color, width: f64) -> Result<Path, GeometryError> {
    let hexagon = ring_points(center, inner_radius, 6, START_ANGLE);
    let c0 = Path::circle(
        Point::new(hexagon[0].x(), lerp(hexagon[0], hexagon[1], 0.5).y()),
        inner_radius,
    )
    .stroke(stroke, width);
    let c1 = Path::circle(
        Point::new(hexagon[3].x(), lerp(hexagon[3], hexagon[4], 0.5).y()),
        inner_radius,
    )
    .stroke(stroke, width);
    c0.intersect(&c1)
}

/// Six petals reaching from `center` to the ring, one every 60 degrees, the
/// first pointing straight up.
pub fn center_petals(
    center: Point<f64>,
    inner_radius: f64,
    stroke: &Color,
    width: f64,
) -> Result<Vec<Path>, GeometryError> {
    let hexagon = ring_points(center, inner_radius, 6, START_ANGLE);
    let petal = petal(center, inner_radius, stroke, width)?;
    let lifted = match petal.position() {
        Some(position) => petal.translated(0.0, hexagon[4].y() - position.y()),
        None => petal,
    };
    Ok((0..6)
        .map(|i| lifted.rotated(PI / 3.0 * i as f64, center))
        .collect())
}

/// Twelve petals around `center`: the six center petals interleaved with six
/// lying along the hexagon edges.
pub fn petal_rosette(
    center: Point<f64>,
    inner_radius: f64,
    stroke: &Color,
    width: f64,
) -> Result<Group, GeometryError> {
    let total = 6;
    let hexagon = ring_points(center, inner_radius, total, START_ANGLE);
    let petal = petal(center, inner_radius, stroke, width)?;
    let inner = center_petals(center, inner_radius, stroke, width)?;

    let mut group = Group::new("petals");
    for (i, center_petal) in inner.into_iter().enumerate() {
        group.add(center_petal);
        let middle = lerp(hexagon[i], hexagon[(i + 1) % total], 0.5);
        group.add(petal.positioned(middle).rotated(PI / 3.0 * i as f64, middle));
    }
    Ok(group)
}

/// Flower of life: a center circle plus `dimensions - 1` hexagonal rings of
/// circles, ring `i` carrying `i + 2` circles per edge (corners shared).
pub fn flower_of_life(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &FlowerOfLifeSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let dot_radius = radius * 0.01;
    let dimensions = settings.dimensions.max(1);
    let inner_radius = radius / dimensions as f64;

    ctx.cosmos(blueprint, center, radius);

    if settings.circles {
        create_circle(center, inner_radius, stroke, width, None, Some(&mut *form));
    }

    let rosette = if settings.circles && settings.petals {
        Some(petal_rosette(center, inner_radius, stroke, width)?)
    } else {
        None
    };

    for i in 0..dimensions - 1 {
        let points = ring_points(center, inner_radius * (i + 1) as f64, 6, START_ANGLE);

        for k in 0..points.len() {
            let p0 = points[k];
            let p1 = points[(k + 1) % points.len()];
            let per_edge = i + 2;
            for l in 0..per_edge {
                let p = lerp(p0, p1, l as f64 / (per_edge - 1) as f64);
                if !settings.circles {
                    continue;
                }
                match &rosette {
                    Some(rosette) => {
                        let offset = p - center;
                        form.add_group(rosette.transformed(&translate_matrix(offset.x(), offset.y())));
                    }
                    None => {
                        create_circle(p, inner_radius, stroke, width, None, Some(&mut *form));
                    }
                }
            }
        }

        if settings.lines {
            let mut outline = points.clone();
            outline.push(points[0]);
            create_line(&outline, stroke, width, Some(&mut *blueprint), None);
            // Front edges of the cube, then the back ones.
            for (a, b) in [
                (points[0], center),
                (center, points[2]),
                (center, points[4]),
                (points[5], center),
                (points[1], center),
                (points[3], center),
            ] {
                create_line(&[a, b], stroke, width, Some(&mut *blueprint), None);
            }
        }

        if settings.structure {
            for p in &points {
                dot(*p, dot_radius, Some(&mut *blueprint), None);
            }
        }
    }
    Ok(())
}

impl GeometryGenerator for FlowerOfLifeSettings {
    fn name(&self) -> &str {
        "Flower Of Life"
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
        flower_of_life(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::document::Shape;
    use crate::elements::test_context;
    use crate::geo_types::PointOps;

    fn draw(settings: &FlowerOfLifeSettings) -> (Group, Group) {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let mut blueprint = Group::new("blueprint");
        let mut form = Group::new("form");
        flower_of_life(&mut blueprint, &mut form, Point::new(0.0, 0.0), 100.0, settings, &ctx).unwrap();
        (blueprint, form)
    }

    #[test]
    fn test_circle_count() {
        let settings = FlowerOfLifeSettings {
            petals: false,
            ..Default::default()
        };
        let (_, form) = draw(&settings);
        let paths = form.paths();
        // 1 center + 6 * 2 + 6 * 3
        assert_eq!(paths.len(), 31);
        match &paths[0].shape {
            Shape::Circle { center, radius } => {
                assert_eq!(*center, Point::new(0.0, 0.0));
                assert!((radius - 100.0 / 3.0).abs() < 1e-9);
            }
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn test_six_fold_symmetry() {
        let settings = FlowerOfLifeSettings {
            petals: false,
            ..Default::default()
        };
        let (_, form) = draw(&settings);
        let centers: Vec<Point<f64>> = form.paths().iter().filter_map(|p| p.position()).collect();
        for c in &centers {
            let turned = c.rotate_around(PI / 3.0, &Point::new(0.0, 0.0));
            assert!(centers.iter().any(|o| o.distance(&turned) < 1e-6));
        }
    }

    #[test]
    fn test_six_fold_symmetry_with_petals() {
        let (_, form) = draw(&FlowerOfLifeSettings::default());
        let positions: Vec<Point<f64>> = form.paths().iter().filter_map(|p| p.position()).collect();
        assert_eq!(positions.len(), 1 + 30 * 12);
        let origin = Point::new(0.0, 0.0);
        for p in &positions {
            let turned = p.rotate_around(PI / 3.0, &origin);
            assert!(
                positions.iter().any(|o| o.distance(&turned) < 1e-5),
                "no petal at {:?}",
                turned
            );
        }
    }

    #[test]
    fn test_petals() {
        let (_, form) = draw(&FlowerOfLifeSettings::default());
        // Center circle, then one 12 petal rosette per ring circle.
        assert_eq!(form.len(), 31);
        assert_eq!(form.path_count(), 1 + 30 * 12);
        let petal = petal(Point::new(0.0, 0.0), 30.0, &crate::document::color::white(), 1.0).unwrap();
        let bounds = petal.bounds().unwrap();
        assert!((bounds.height() - 30.0).abs() < 0.5);
    }

    #[test]
    fn test_blueprint() {
        let (blueprint, _) = draw(&FlowerOfLifeSettings::default());
        // Per ring: outline, 6 spokes, 6 dots.
        assert_eq!(blueprint.len(), 2 * 13);
    }

    #[test]
    fn test_idempotent() {
        let settings = FlowerOfLifeSettings::default();
        assert_eq!(draw(&settings), draw(&settings));
    }
}
