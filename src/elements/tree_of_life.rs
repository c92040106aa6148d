//! Tree of life laid over the first two rings of the flower of life. The ten
//! sephirot sit on flower points; each gets a small circle, and the paths
//! between them are drawn as parallel rails that stop at the circles' rims.
//!
//! Rail ends are found by construction: every line from a sephira towards a
//! neighbour crosses its circle once, a tiny circle dropped on that crossing
//! cuts the rim twice more, and those two cuts are the rail ends. The rails
//! crossing each other in the middle of the tree are then clipped against each
//! other. All of it is recorded in one [`PointLedger`] whose indices the rail
//! table below refers to.
use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::document::color::{transparent, with_alpha};
use crate::document::draw::{create_circle, create_line, debug_points};
use crate::document::{Group, Path};
use crate::errors::GeometryError;
use crate::geo_types::intersect::get_intersections;
use crate::geo_types::ledger::PointLedger;
use crate::geo_types::flower_points;
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

use super::flower_of_life::START_ANGLE;

/// Flower point index of each sephira, from Kether down to Malkuth's
/// neighbours. Index 5 is the figure center.
const SEPHIROT: [Option<usize>; 10] = [
    Some(26),
    Some(28),
    Some(0),
    Some(7),
    Some(25),
    None,
    Some(6),
    Some(2),
    Some(3),
    Some(17),
];

/// For each sephira, in construction order, the neighbours its rails head to.
const RAIL_DIRECTIONS: [(usize, &[usize]); 10] = [
    (0, &[1, 9, 4]),
    (1, &[0, 4, 2, 5]),
    (4, &[0, 1, 3, 5]),
    (2, &[1, 3, 5, 7]),
    (3, &[4, 2, 5, 6]),
    (5, &[0, 2, 3, 7, 6, 8, 1, 4]),
    (7, &[2, 5, 6, 8, 9]),
    (6, &[3, 5, 7, 8, 9]),
    (8, &[7, 5, 6, 9]),
    (9, &[7, 8, 6]),
];

/// Rails that get clipped against each other where the paths cross.
const CROSSINGS: [(&[(usize, usize)], &[(usize, usize)]); 4] = [
    (&[(2, 39), (3, 38)], &[(9, 17), (8, 16), (24, 32), (25, 33)]),
    (&[(13, 50), (12, 51)], &[(24, 32), (25, 33)]),
    (&[(20, 53), (21, 52)], &[(24, 32), (25, 33)]),
    (&[(48, 77), (49, 76)], &[(58, 68), (59, 69)]),
];

/// Visible rails grouped by the sephira they leave from, one group per
/// `architecture` switch after the first.
const RAILS: [&[(usize, usize)]; 9] = [
    &[(0, 7), (1, 6), (2, 89), (3, 93), (4, 15), (5, 14), (88, 90), (92, 94), (91, 39), (95, 38)],
    &[(8, 16), (9, 17), (12, 98), (13, 96), (99, 51), (97, 50), (10, 23), (11, 22)],
    &[(20, 100), (21, 102), (101, 53), (103, 52), (18, 31), (19, 30)],
    &[(24, 32), (25, 33), (27, 40), (26, 41), (28, 55), (29, 54)],
    &[(34, 43), (35, 42), (36, 65), (37, 64)],
    &[(57, 44), (56, 45), (58, 68), (59, 69), (61, 74), (60, 75), (63, 82), (62, 83)],
    &[(66, 47), (67, 46), (70, 79), (71, 78), (72, 87), (73, 86)],
    &[(77, 105), (104, 48), (76, 107), (106, 49)],
    &[(85, 80), (84, 81)],
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TreeOfLifeSettings {
    /// Flower circles, sephira outlines, the tree's skeleton, rail end points.
    pub guides: [bool; 4],
    /// Sephira circles, then the rails of each sephira.
    pub architecture: [bool; 10],
}

impl Default for TreeOfLifeSettings {
    fn default() -> Self {
        Self {
            guides: [true; 4],
            architecture: [true; 10],
        }
    }
}

/// The ten sephira centers.
pub fn sephirot(center: Point<f64>, radius: f64) -> Result<Vec<Point<f64>>, GeometryError> {
    let flower = flower_points(center, radius / 3.0, 2, START_ANGLE, true);
    SEPHIROT
        .iter()
        .map(|index| match index {
            Some(i) => flower.get(*i).copied().ok_or(GeometryError::IndexOutOfRange {
                index: *i,
                len: flower.len(),
            }),
            None => Ok(center),
        })
        .collect()
}

fn segment(a: Point<f64>, b: Point<f64>) -> Path {
    Path::polyline(vec![a.0, b.0].into())
}

/// Rail ends on `circles[from]`, two per neighbour, pushed in construction order.
fn rail_ends(
    points: &mut PointLedger,
    sephirot: &[Point<f64>],
    circles: &[Path],
    from: usize,
    towards: &[usize],
    rail_radius: f64,
) {
    let circle = &circles[from];
    let crossings: Vec<Point<f64>> = towards
        .iter()
        .flat_map(|to| get_intersections(circle, &segment(sephirot[from], sephirot[*to])).into_points())
        .collect();
    for crossing in crossings {
        points.extend(get_intersections(circle, &Path::circle(crossing, rail_radius)).into_points());
    }
}

pub fn tree_of_life(
    blueprint: &mut Group,
    form: &mut Group,
    center: Point<f64>,
    radius: f64,
    settings: &TreeOfLifeSettings,
    ctx: &DrawContext<'_>,
) -> Result<(), GeometryError> {
    let (stroke, width) = (ctx.stroke(), ctx.width());
    let guide = with_alpha(stroke, 0.25);
    let inner_radius = radius / 3.0;
    let circle_radius = inner_radius / 3.0 * 0.75;
    let rail_radius = circle_radius / 4.0;

    ctx.cosmos(blueprint, center, radius);

    if settings.guides[0] {
        for p in flower_points(center, inner_radius, 2, START_ANGLE, true) {
            create_circle(p, inner_radius, &guide, width, None, Some(&mut *blueprint));
        }
    }

    let sephirot = sephirot(center, radius)?;
    let outline = if settings.guides[1] { guide.clone() } else { transparent() };
    let circles: Vec<Path> = sephirot
        .iter()
        .map(|p| create_circle(*p, circle_radius, &outline, width, None, Some(&mut *form)))
        .collect();

    if settings.guides[2] {
        let s = &sephirot;
        for skeleton in [
            vec![s[0], s[1], s[2], s[7], s[9], s[6], s[3], s[4], s[0]],
            vec![s[1], s[5], s[4], s[1]],
            vec![s[2], s[5], s[3], s[2]],
            vec![s[7], s[8], s[6], s[5], s[7], s[6]],
            vec![s[0], s[9]],
        ] {
            create_line(&skeleton, &guide, width, Some(&mut *blueprint), None);
        }
    }

    let mut points = PointLedger::new();
    for (from, towards) in RAIL_DIRECTIONS {
        rail_ends(&mut points, &sephirot, &circles, from, towards, rail_radius);
    }
    for (first, second) in CROSSINGS {
        for a in first {
            let a = segment(points.get(a.0)?, points.get(a.1)?);
            for b in second {
                let b = segment(points.get(b.0)?, points.get(b.1)?);
                points.extend(get_intersections(&a, &b).into_points());
            }
        }
    }

    if settings.guides[3] {
        debug_points(points.points(), rail_radius, &guide, blueprint);
    }

    if settings.architecture[0] {
        for p in &sephirot {
            create_circle(*p, circle_radius, stroke, width, None, Some(&mut *form));
        }
    }

    for (rails, enabled) in RAILS.iter().zip(&settings.architecture[1..]) {
        if !enabled {
            continue;
        }
        for (a, b) in rails.iter() {
            create_line(&[points.get(*a)?, points.get(*b)?], stroke, width, Some(&mut *form), None);
        }
    }
    Ok(())
}

impl GeometryGenerator for TreeOfLifeSettings {
    fn name(&self) -> &str {
        "Tree Of Life"
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
        tree_of_life(blueprint, form, center, radius, self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::test_context;
    use crate::geo_types::PointOps;

    fn draw(settings: &TreeOfLifeSettings) -> (Group, Group) {
        let sketch = SketchSettings::default();
        let ctx = test_context(&sketch);
        let (mut blueprint, mut form) = (Group::new("blueprint"), Group::new("form"));
        tree_of_life(&mut blueprint, &mut form, Point::new(250.0, 250.0), 212.5, settings, &ctx).unwrap();
        (blueprint, form)
    }

    #[test]
    fn test_sephirot_are_mirrored() {
        let center = Point::new(0.0, 0.0);
        let s = sephirot(center, 90.0).unwrap();
        assert_eq!(s[5], center);
        // Kether above Malkuth on the middle pillar.
        assert!(s[0].x().abs() < 1e-9 && s[9].x().abs() < 1e-9);
        assert!(s[0].y() < s[9].y());
        // Pillars pair up across the vertical axis.
        for (l, r) in [(1, 4), (2, 3), (7, 6)] {
            assert!((s[l].x() + s[r].x()).abs() < 1e-9);
            assert!((s[l].y() - s[r].y()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_layers() {
        let (blueprint, form) = draw(&TreeOfLifeSettings::default());
        // Cosmos is off in the plain settings: 30 flower circles, 5 skeleton lines, 108 rail ends.
        assert_eq!(blueprint.len(), 30 + 5 + 108);
        let rails: usize = RAILS.iter().map(|r| r.len()).sum();
        assert_eq!(form.len(), 10 + 10 + rails);
    }

    #[test]
    fn test_rails_stay_near_the_tree() {
        let center = Point::new(250.0, 250.0);
        let (_, form) = draw(&TreeOfLifeSettings::default());
        for path in form.paths() {
            for p in path.points() {
                assert!(p.distance(&center) < 212.5);
            }
        }
    }

    #[test]
    fn test_switches() {
        let settings = TreeOfLifeSettings {
            guides: [false; 4],
            architecture: [false; 10],
        };
        let (blueprint, form) = draw(&settings);
        assert_eq!(blueprint.len(), 0);
        // Sephira outlines always stay, transparent.
        assert_eq!(form.len(), 10);
    }
}
