use geo::map_coords::MapCoords;
use geo::{coord, Coord};
use geo_types::{LineString, MultiPolygon, Point};
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};

/// Helper to create a scaling matrix
pub fn scale_matrix(sx: f64, sy: f64) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0))
}

/// Helper to create a translation matrix
pub fn translate_matrix(tx: f64, ty: f64) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0))
}

/// Standard coordinate and orientation system, radians.
pub fn rotate_matrix(radians: f64) -> Affine2<f64> {
    let (sin, cos) = radians.sin_cos();
    Affine2::from_matrix_unchecked(Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0))
}

/// Rotation about an arbitrary pivot. Composition is right-to-left: move the pivot
/// to the origin, rotate, move it back.
pub fn rotate_around_matrix(radians: f64, pivot: Point<f64>) -> Affine2<f64> {
    translate_matrix(pivot.x(), pivot.y())
        * rotate_matrix(radians)
        * translate_matrix(-pivot.x(), -pivot.y())
}

/// Uniform scale factor of an affine, ie: how much it stretches a circle's radius.
pub fn uniform_scale(affine: &Affine2<f64>) -> f64 {
    let m = affine.matrix();
    (m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]).abs().sqrt()
}

pub fn xform_coord(xy: &Coord<f64>, affine: &Affine2<f64>) -> Coord<f64> {
    let out = affine * NPoint2::new(xy.x, xy.y);
    coord!(x: out.x, y: out.y)
}

pub trait TransformGeometry {
    fn transformed(&self, affine: &Affine2<f64>) -> Self;
}

impl TransformGeometry for Point<f64> {
    fn transformed(&self, affine: &Affine2<f64>) -> Self {
        Point(xform_coord(&self.0, affine))
    }
}

impl TransformGeometry for LineString<f64> {
    fn transformed(&self, affine: &Affine2<f64>) -> Self {
        self.map_coords(|xy| xform_coord(&xy, affine))
    }
}

impl TransformGeometry for MultiPolygon<f64> {
    fn transformed(&self, affine: &Affine2<f64>) -> Self {
        self.map_coords(|xy| xform_coord(&xy, affine))
    }
}
