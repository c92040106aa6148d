use geo_types::{Coord, Point};

/// Flavour of Catmull-Rom. Centripetal is the usual default; plain Catmull-Rom
/// takes a tension, 0.5 giving the textbook curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveType {
    Centripetal,
    Chordal,
    CatmullRom(f64),
}

/// Cubic in hermite form, one axis at a time.
#[derive(Debug, Clone, Copy, Default)]
struct CubicPoly {
    c0: f64,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl CubicPoly {
    fn hermite(x0: f64, x1: f64, t0: f64, t1: f64) -> CubicPoly {
        CubicPoly {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn uniform(x0: f64, x1: f64, x2: f64, x3: f64, tension: f64) -> CubicPoly {
        CubicPoly::hermite(x1, x2, tension * (x2 - x0), tension * (x3 - x1))
    }

    #[allow(clippy::too_many_arguments)]
    fn nonuniform(x0: f64, x1: f64, x2: f64, x3: f64, dt0: f64, dt1: f64, dt2: f64) -> CubicPoly {
        let t1 = ((x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1) * dt1;
        let t2 = ((x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2) * dt1;
        CubicPoly::hermite(x1, x2, t1, t2)
    }

    fn calc(&self, t: f64) -> f64 {
        self.c0 + self.c1 * t + self.c2 * t * t + self.c3 * t * t * t
    }
}

fn dist_sq(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - b.x).powi(2) + (a.y - b.y).powi(2)
}

/// Point at `t` in [0, 1] along an open Catmull-Rom curve through `points`.
/// The end segments use a mirrored phantom control point.
fn point_at(points: &[Coord<f64>], t: f64, curve: CurveType) -> Coord<f64> {
    let l = points.len();
    let p = (l - 1) as f64 * t;
    let mut index = p.floor() as usize;
    let mut weight = p - index as f64;
    if index >= l - 1 {
        index = l - 2;
        weight = 1.0;
    }

    let p0 = if index > 0 {
        points[index - 1]
    } else {
        points[0] + (points[0] - points[1])
    };
    let p1 = points[index];
    let p2 = points[index + 1];
    let p3 = if index + 2 < l {
        points[index + 2]
    } else {
        points[l - 1] + (points[l - 1] - points[l - 2])
    };

    let (px, py) = match curve {
        CurveType::CatmullRom(tension) => (
            CubicPoly::uniform(p0.x, p1.x, p2.x, p3.x, tension),
            CubicPoly::uniform(p0.y, p1.y, p2.y, p3.y, tension),
        ),
        CurveType::Centripetal | CurveType::Chordal => {
            let pow = if curve == CurveType::Chordal { 0.5 } else { 0.25 };
            let mut dt0 = dist_sq(p0, p1).powf(pow);
            let mut dt1 = dist_sq(p1, p2).powf(pow);
            let mut dt2 = dist_sq(p2, p3).powf(pow);
            // Coincident control points would divide by zero.
            if dt1 < 1e-4 {
                dt1 = 1.0;
            }
            if dt0 < 1e-4 {
                dt0 = dt1;
            }
            if dt2 < 1e-4 {
                dt2 = dt1;
            }
            (
                CubicPoly::nonuniform(p0.x, p1.x, p2.x, p3.x, dt0, dt1, dt2),
                CubicPoly::nonuniform(p0.y, p1.y, p2.y, p3.y, dt0, dt1, dt2),
            )
        }
    };
    Coord {
        x: px.calc(weight),
        y: py.calc(weight),
    }
}

/// Sample `divisions + 1` evenly spaced (in parameter, not arc length) points
/// along the curve, both ends included. Fewer than two control points just
/// come back as they are.
pub fn catmull_rom(points: &[Point<f64>], divisions: usize, curve: CurveType) -> Vec<Point<f64>> {
    if points.len() < 2 || divisions == 0 {
        return points.to_vec();
    }
    let coords: Vec<Coord<f64>> = points.iter().map(|p| p.0).collect();
    (0..=divisions)
        .map(|d| Point(point_at(&coords, d as f64 / divisions as f64, curve)))
        .collect()
}
