//! The five platonic solids, drawn as isometric projections on the flower of
//! life lattice. Every vertex is either a lattice point or, for the
//! dodecahedron, a crossing of construction lines laid across the lattice.
//! Faces facing the viewer get a flat shaded fill, hidden edges a dimmer stroke.
use geo_types::{Point, Polygon};
use serde::{Deserialize, Serialize};

use crate::document::color::{white, with_alpha, Color};
use crate::document::draw::{create_circle, create_line};
use crate::document::{Group, Path};
use crate::errors::GeometryError;
use crate::geo_types::intersect::{filter_intersection_positions, intersect_all, DEFAULT_TOLERANCE};
use crate::geo_types::shapes::{as_multi, polyline};
use crate::geo_types::flower_points;
use crate::sketch::{DrawContext, GeometryGenerator, GridSettings, SketchSettings};

use super::flower_of_life::START_ANGLE;
use super::shading::{face_intensity, shade, Light};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solid {
    Tetrahedron,
    Hexahedron,
    Octahedron,
    Icosahedron,
    Dodecahedron,
}

impl Solid {
    pub const ALL: [Solid; 5] = [
        Solid::Tetrahedron,
        Solid::Hexahedron,
        Solid::Octahedron,
        Solid::Icosahedron,
        Solid::Dodecahedron,
    ];

    /// Lattice rings plus one: the lattice spacing is `radius / dimensions`.
    fn dimensions(&self) -> usize {
        match self {
            Solid::Dodecahedron => 5,
            _ => 3,
        }
    }
}

/// Where a vertex comes from.
#[derive(Debug, Clone, Copy)]
enum V {
    /// Lattice point. 0 is the center, then each ring's points edge by edge,
    /// corners counted at the end of their edge.
    L(usize),
    /// Crossing of the construction lines, in discovery order.
    X(usize),
}

use V::{L, X};

struct Face {
    outline: &'static [V],
    normal: [f64; 3],
}

struct SolidDrawing {
    /// Construction lines between lattice points whose crossings feed `X`.
    construction: &'static [&'static [usize]],
    faces: &'static [Face],
    hidden: &'static [&'static [V]],
    edges: &'static [&'static [V]],
}

const HEXAGON: &[V] = &[L(16), L(18), L(8), L(10), L(12), L(14), L(16)];

const TETRAHEDRON: SolidDrawing = SolidDrawing {
    construction: &[],
    faces: &[
        Face {
            outline: &[L(16), L(0), L(12), L(16)],
            normal: [-0.816_496_610_641_479_5, 0.471_404_522_657_394_4, 0.333_333_343_267_440_8],
        },
        Face {
            outline: &[L(16), L(8), L(0), L(16)],
            normal: [0.816_496_610_641_479_5, 0.471_404_522_657_394_4, 0.333_333_343_267_440_8],
        },
        Face {
            outline: &[L(8), L(12), L(0), L(8)],
            normal: [0.0, -0.942_809_045_314_788_8, 0.333_333_343_267_440_8],
        },
    ],
    hidden: &[],
    edges: &[&[L(12), L(16), L(8), L(12)], &[L(12), L(0), L(8)], &[L(0), L(16)]],
};

const HEXAHEDRON: SolidDrawing = SolidDrawing {
    construction: &[],
    faces: &[
        Face {
            outline: &[L(0), L(18), L(8), L(10), L(0)],
            normal: [1.0, 0.0, 0.0],
        },
        Face {
            outline: &[L(14), L(0), L(10), L(12), L(14)],
            normal: [0.0, 0.0, 1.0],
        },
        Face {
            outline: &[L(0), L(14), L(16), L(18), L(0)],
            normal: [0.0, 1.0, 0.0],
        },
    ],
    hidden: &[&[L(12), L(0)], &[L(8), L(0)], &[L(0), L(16)]],
    edges: &[HEXAGON, &[L(14), L(0), L(18)], &[L(0), L(10)]],
};

const OCTAHEDRON: SolidDrawing = SolidDrawing {
    construction: &[],
    faces: &[
        Face {
            outline: &[L(8), L(12), L(16), L(8)],
            normal: [0.0, 0.577_350_258_827_209_5, 0.816_496_610_641_479_5],
        },
        Face {
            outline: &[L(8), L(10), L(12), L(8)],
            normal: [0.0, -0.577_350_258_827_209_5, 0.816_496_610_641_479_5],
        },
        Face {
            outline: &[L(16), L(12), L(14), L(16)],
            normal: [-0.816_496_610_641_479_5, 0.577_350_258_827_209_5, 0.0],
        },
        Face {
            outline: &[L(16), L(18), L(8), L(16)],
            normal: [0.816_496_610_641_479_5, 0.577_350_258_827_209_5, 0.0],
        },
    ],
    hidden: &[&[L(14), L(18)], &[L(14), L(10), L(18)]],
    edges: &[HEXAGON, &[L(12), L(16), L(8), L(12)]],
};

const ICOSAHEDRON: SolidDrawing = SolidDrawing {
    construction: &[],
    faces: &[],
    hidden: &[],
    edges: &[
        HEXAGON,
        &[L(12), L(16), L(8), L(12)],
        &[L(4), L(6), L(2), L(4)],
        &[L(4), L(14)],
        &[L(6), L(18)],
        &[L(2), L(10)],
    ],
};

const DODECAHEDRON: SolidDrawing = SolidDrawing {
    construction: &[
        &[56, 40, 48, 56],
        &[44, 52, 60, 44],
        &[56, 8],
        &[56, 12],
        &[60, 14],
        &[52, 18],
        &[60, 10],
        &[52, 10],
        &[40, 16],
        &[48, 16],
        &[40, 12],
        &[48, 8],
        &[44, 18],
        &[44, 14],
    ],
    faces: &[
        Face {
            outline: &[L(0), X(48), X(16), X(17), X(52), L(0)],
            normal: [-0.525_731_146_335_601_8, -0.425_325_393_676_757_8, -0.736_685_216_426_849_4],
        },
        Face {
            outline: &[X(52), X(17), X(28), X(26), X(13), X(52)],
            normal: [-0.850_650_787_353_515_6, -0.455_296_516_418_457, 0.262_865_573_167_800_9],
        },
        Face {
            outline: &[X(48), X(11), X(25), X(27), X(16), X(48)],
            normal: [0.525_731_146_335_601_8, -0.425_325_393_676_757_8, -0.736_685_216_426_849_4],
        },
        Face {
            outline: &[X(40), L(0), X(52), X(13), X(10), X(40)],
            normal: [-0.525_731_086_730_957, 0.425_325_423_479_080_2, 0.736_685_216_426_849_4],
        },
        Face {
            outline: &[X(40), X(7), X(11), X(48), L(0), X(40)],
            normal: [0.850_650_846_958_160_4, 0.455_296_456_813_812_26, -0.262_865_543_365_478_5],
        },
        Face {
            outline: &[X(40), X(10), X(21), X(18), X(7), X(40)],
            normal: [0.0, 0.999_550_759_792_327_9, 0.029_971_024_021_506_31],
        },
    ],
    hidden: &[],
    edges: &[
        &[X(21), X(18)],
        &[X(7), X(11)],
        &[X(25), X(27)],
        &[X(16), X(17)],
        &[X(28), X(26)],
        &[X(13), X(10)],
        &[X(18), X(7)],
        &[X(11), X(25)],
        &[X(27), X(16)],
        &[X(17), X(28)],
        &[X(26), X(13)],
        &[X(10), X(21)],
        &[X(13), X(52), X(17)],
        &[X(11), X(48), X(16)],
        &[X(10), X(40), X(7)],
        &[X(52), L(0), X(48)],
        &[L(0), X(40)],
    ],
};

impl Solid {
    fn drawing(&self) -> &'static SolidDrawing {
        match self {
            Solid::Tetrahedron => &TETRAHEDRON,
            Solid::Hexahedron => &HEXAHEDRON,
            Solid::Octahedron => &OCTAHEDRON,
            Solid::Icosahedron => &ICOSAHEDRON,
            Solid::Dodecahedron => &DODECAHEDRON,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlatonicSettings {
    pub solid: Solid,
    /// Lattice circles and construction lines.
    pub guides: bool,
    pub guide_opacity: f64,
    /// Stroke opacity of the edges behind the solid.
    pub depth_opacity: f64,
    pub shading: bool,
    pub face_color: Color,
    pub light: Light,
    pub grid: GridSettings,
}

impl Default for PlatonicSettings {
    fn default() -> Self {
        Self {
            solid: Solid::Dodecahedron,
            guides: true,
            guide_opacity: 0.25,
            depth_opacity: 0.5,
            shading: true,
            face_color: white(),
            light: Light::default(),
            grid: GridSettings::default(),
        }
    }
}

/// Center followed by the lattice, without repeated corners.
pub fn lattice(center: Point<f64>, radius: f64, dimensions: usize) -> Vec<Point<f64>> {
    let dimensions = dimensions.max(1);
    let mut points = vec![center];
    points.extend(flower_points(
        center,
        radius / dimensions as f64,
        dimensions - 1,
        START_ANGLE,
        false,
    ));
    points
}

fn select(indices: &[usize], points: &[Point<f64>]) -> Result<Vec<Point<f64>>, GeometryError> {
    indices
        .iter()
        .map(|i| {
            points.get(*i).copied().ok_or(GeometryError::IndexOutOfRange {
                index: *i,
                len: points.len(),
            })
        })
        .collect()
}

fn resolve(outline: &[V], lattice: &[Point<f64>], crossings: &[Point<f64>]) -> Result<Vec<Point<f64>>, GeometryError> {
    outline
        .iter()
        .map(|v| {
            let (i, points) = match v {
                L(i) => (*i, lattice),
                X(i) => (*i, crossings),
            };
            points
                .get(i)
                .copied()
                .ok_or(GeometryError::IndexOutOfRange { index: i, len: points.len() })
        })
        .collect()
}

pub fn platonic(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &PlatonicSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let guide = with_alpha(&white(), settings.guide_opacity);
    let depth = with_alpha(stroke, settings.depth_opacity);
    let dimensions = settings.solid.dimensions();
    let drawing = settings.solid.drawing();

    ctx.grids(blueprint, center, &settings.grid);
    ctx.cosmos(blueprint, center, radius);

    let lattice = lattice(center, radius, dimensions);
    if settings.guides {
        for p in lattice.iter().skip(1) {
            create_circle(*p, radius / dimensions as f64, &guide, width, None, Some(&mut *blueprint));
        }
    }

    let mut lines: Vec<Path> = vec![];
    for indices in drawing.construction {
        let points = select(indices, &lattice)?;
        let line = create_line(&points, &guide, width, None, Some(&mut lines));
        if settings.guides {
            blueprint.add(line);
        }
    }
    let crossings = filter_intersection_positions(&intersect_all(&lines), DEFAULT_TOLERANCE);

    if settings.shading {
        for face in drawing.faces {
            let outline = resolve(face.outline, &lattice, &crossings)?;
            let intensity = face_intensity(face.normal, &settings.light);
            form.add(
                Path::area(as_multi(Polygon::new(polyline(&outline, false), vec![])))
                    .fill(&shade(&settings.face_color, intensity)),
            );
        }
    }

    for outline in drawing.hidden {
        create_line(&resolve(outline, &lattice, &crossings)?, &depth, width, Some(&mut *form), None);
    }
    for outline in drawing.edges {
        create_line(&resolve(outline, &lattice, &crossings)?, stroke, width, Some(&mut *form), None);
    }
    Ok(())
}

impl GeometryGenerator for PlatonicSettings {
    fn name(&self) -> &str {
        match self.solid {
            Solid::Tetrahedron => "Tetrahedron",
            Solid::Hexahedron => "Hexahedron",
            Solid::Octahedron => "Octahedron",
            Solid::Icosahedron => "Icosahedron",
            Solid::Dodecahedron => "Dodecahedron",
        }
    }

    fn configure(&self, settings: &mut SketchSettings) {
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
        platonic(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::test_context;
    use crate::geo_types::PointOps;
    use geo::Area;

    fn draw(solid: Solid) -> (Group, Group) {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let settings = PlatonicSettings {
            solid,
            ..Default::default()
        };
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        platonic(&mut blueprint, &mut form, Point::new(250.0, 250.0), 212.5, &settings, &ctx).unwrap();
        (blueprint, form)
    }

    #[test]
    fn test_lattice_size() {
        let center = Point::new(0.0, 0.0);
        assert_eq!(lattice(center, 90.0, 3).len(), 1 + 6 + 12);
        assert_eq!(lattice(center, 90.0, 5).len(), 1 + 6 + 12 + 18 + 24);
    }

    #[test]
    fn test_every_solid_draws() {
        for solid in Solid::ALL {
            let drawing = solid.drawing();
            let (_, form) = draw(solid);
            assert_eq!(
                form.len(),
                drawing.faces.len() + drawing.hidden.len() + drawing.edges.len(),
                "{:?}",
                solid
            );
        }
    }

    #[test]
    fn test_dodecahedron_faces_are_pentagons_of_two_sizes() {
        let (_, form) = draw(Solid::Dodecahedron);
        let areas: Vec<f64> = form
            .paths()
            .iter()
            .take(6)
            .filter_map(|p| p.to_polygons())
            .map(|area| area.unsigned_area())
            .collect();
        assert_eq!(areas.len(), 6);
        // Faces touching the center are larger than the rim faces.
        for (i, j) in [(0, 3), (0, 4), (1, 2), (1, 5)] {
            assert!((areas[i] - areas[j]).abs() < 1e-3, "{} vs {}", areas[i], areas[j]);
        }
        assert!(areas[0] > areas[1]);
    }

    #[test]
    fn test_shading_follows_the_light() {
        let (_, form) = draw(Solid::Hexahedron);
        let fills: Vec<f64> = form
            .paths()
            .iter()
            .take(3)
            .map(|p| f64::from(p.fill.clone().unwrap().r))
            .collect();
        // Light comes mostly from above: the top face is the brightest.
        assert!(fills[2] > fills[0] && fills[0] > fills[1]);
    }

    #[test]
    fn test_vertices_inside_the_figure() {
        let center = Point::new(250.0, 250.0);
        for solid in Solid::ALL {
            let (_, form) = draw(solid);
            for path in form.paths() {
                for p in path.points() {
                    assert!(p.distance(&center) <= 212.5 + 1e-6);
                }
            }
        }
    }
}
