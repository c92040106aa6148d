use geo_types::Point;
use std::collections::HashMap;

use crate::errors::GeometryError;

/// Append-only record of constructed points.
///
/// Step-by-step constructions (Sri Yantra, tree of life, the platonic solids)
/// refer back to earlier points by position. The ledger keeps that positional
/// addressing but turns a bad index into a [`GeometryError`], and lets a
/// construction attach a descriptive name to the points it cares about.
#[derive(Debug, Clone, Default)]
pub struct PointLedger {
    points: Vec<Point<f64>>,
    names: HashMap<String, usize>,
}

impl PointLedger {
    pub fn new() -> PointLedger {
        PointLedger::default()
    }

    /// Append and return the new index.
    pub fn push(&mut self, point: Point<f64>) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Append under a name. Reusing a name repoints it at the newest point.
    pub fn push_named(&mut self, name: &str, point: Point<f64>) -> usize {
        let index = self.push(point);
        self.names.insert(name.to_string(), index);
        index
    }

    /// Give an existing index a name.
    pub fn name(&mut self, name: &str, index: usize) -> Result<(), GeometryError> {
        self.get(index)?;
        self.names.insert(name.to_string(), index);
        Ok(())
    }

    pub fn extend<I: IntoIterator<Item = Point<f64>>>(&mut self, points: I) {
        self.points.extend(points);
    }

    pub fn get(&self, index: usize) -> Result<Point<f64>, GeometryError> {
        self.points
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// Several points at once, in the order asked for.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<Point<f64>>, GeometryError> {
        indices.iter().map(|i| self.get(*i)).collect()
    }

    pub fn named(&self, name: &str) -> Result<Point<f64>, GeometryError> {
        self.names
            .get(name)
            .and_then(|index| self.points.get(*index))
            .copied()
            .ok_or_else(|| GeometryError::UnknownPoint(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }
}
