use geo::BooleanOps;
use geo_types::MultiPolygon;

use crate::document::{Path, Shape};
use crate::errors::GeometryError;

/// Boolean operations trait. Gives boolean caps to closed paths. Basically
/// just a wrapper on the geo boolean ops; circles are polygonized first.
/// The result keeps the style of `self`.
pub trait BooleanOp
where
    Self: Sized,
{
    /// The combination of both other and self
    fn unite(&self, other: &Self) -> Result<Self, GeometryError>;

    /// Returns only the portion of self that overlaps other. Disjoint operands
    /// give an empty area rather than an error.
    fn intersect(&self, other: &Self) -> Result<Self, GeometryError>;

    /// Subtract other from self
    fn subtract(&self, other: &Self) -> Result<Self, GeometryError>;
}

fn operands(a: &Path, b: &Path) -> Result<(MultiPolygon<f64>, MultiPolygon<f64>), GeometryError> {
    match (a.to_polygons(), b.to_polygons()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(GeometryError::OpenPath),
    }
}

fn result_like(template: &Path, area: MultiPolygon<f64>) -> Path {
    Path {
        shape: Shape::Area(area),
        ..template.clone()
    }
}

impl BooleanOp for Path {
    fn unite(&self, other: &Self) -> Result<Self, GeometryError> {
        let (a, b) = operands(self, other)?;
        Ok(result_like(self, a.union(&b)))
    }

    fn intersect(&self, other: &Self) -> Result<Self, GeometryError> {
        let (a, b) = operands(self, other)?;
        Ok(result_like(self, a.intersection(&b)))
    }

    fn subtract(&self, other: &Self) -> Result<Self, GeometryError> {
        let (a, b) = operands(self, other)?;
        Ok(result_like(self, a.difference(&b)))
    }
}

/// Unite a whole run of closed paths. Returns None for an empty slice.
pub fn unite_all(paths: &[Path]) -> Result<Option<Path>, GeometryError> {
    let mut iter = paths.iter();
    let mut acc = match iter.next() {
        Some(first) => first.unite(first)?,
        None => return Ok(None),
    };
    for path in iter {
        acc = acc.unite(path)?;
    }
    Ok(Some(acc))
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::Area;
    use geo_types::{LineString, Point};

    fn area(path: &Path) -> f64 {
        path.to_polygons().map(|p| p.unsigned_area()).unwrap_or(0.0)
    }

    #[test]
    fn test_intersect_not_larger_than_operands() {
        let a = Path::circle(Point::new(0.0, 0.0), 50.0);
        let b = Path::circle(Point::new(40.0, 0.0), 50.0);
        let lens = a.intersect(&b).unwrap();
        assert!(lens.is_closed());
        assert!(area(&lens) > 0.0);
        assert!(area(&lens) <= area(&a).min(area(&b)) + 1e-6);
    }

    #[test]
    fn test_subtract_area() {
        let a = Path::circle(Point::new(0.0, 0.0), 50.0);
        let b = Path::circle(Point::new(40.0, 0.0), 30.0);
        let both = area(&a.intersect(&b).unwrap());
        let diff = area(&a.subtract(&b).unwrap());
        assert!((diff - (area(&a) - both)).abs() < 1e-3 * area(&a));
    }

    #[test]
    fn test_disjoint_intersect_is_empty() {
        let a = Path::circle(Point::new(0.0, 0.0), 5.0);
        let b = Path::circle(Point::new(100.0, 0.0), 5.0);
        let out = a.intersect(&b).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_open_path_rejected() {
        let a = Path::circle(Point::new(0.0, 0.0), 5.0);
        let line = Path::polyline(LineString::from(vec![(0.0, 0.0), (10.0, 0.0)]));
        assert_eq!(a.unite(&line), Err(GeometryError::OpenPath));
    }

    #[test]
    fn test_unite_all() {
        let paths = vec![
            Path::circle(Point::new(0.0, 0.0), 5.0),
            Path::circle(Point::new(4.0, 0.0), 5.0),
            Path::circle(Point::new(8.0, 0.0), 5.0),
        ];
        let united = unite_all(&paths).unwrap().unwrap();
        assert!(area(&united) > area(&paths[0]));
        assert!(unite_all(&[]).unwrap().is_none());
    }
}
