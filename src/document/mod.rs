//! The vector document a sketch draws into: [`Path`]s inside nested [`Group`]s.
//! A sketch rebuilds its whole tree on every draw, so nothing here tracks changes.
use geo_types::{coord, Rect};
use nalgebra::Affine2;
use serde::{Deserialize, Serialize};

pub mod color;
pub mod draw;
pub mod path;

pub use path::{Path, Shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Path(Path),
    Group(Group),
}

/// Ordered container of paths and nested groups, with its own opacity and
/// visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub opacity: f64,
    pub visible: bool,
    pub children: Vec<Item>,
}

impl Default for Group {
    fn default() -> Self {
        Group::new("group")
    }
}

impl Group {
    pub fn new(name: &str) -> Group {
        Group {
            name: name.to_string(),
            opacity: 1.0,
            visible: true,
            children: vec![],
        }
    }

    pub fn opacity(&mut self, opacity: f64) -> &mut Self {
        self.opacity = opacity;
        self
    }

    pub fn visible(&mut self, visible: bool) -> &mut Self {
        self.visible = visible;
        self
    }

    pub fn add(&mut self, path: Path) -> &mut Self {
        self.children.push(Item::Path(path));
        self
    }

    pub fn add_group(&mut self, group: Group) -> &mut Self {
        self.children.push(Item::Group(group));
        self
    }

    /// Drop every child.
    pub fn clear(&mut self) -> &mut Self {
        self.children.clear();
        self
    }

    /// Direct children only.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// All paths, depth first, in drawing order.
    pub fn paths(&self) -> Vec<&Path> {
        let mut out = vec![];
        for child in &self.children {
            match child {
                Item::Path(path) => out.push(path),
                Item::Group(group) => out.extend(group.paths()),
            }
        }
        out
    }

    pub fn path_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Item::Path(_) => 1,
                Item::Group(group) => group.path_count(),
            })
            .sum()
    }

    /// Find a direct child group by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.children.iter().find_map(|child| match child {
            Item::Group(group) if group.name == name => Some(group),
            _ => None,
        })
    }

    /// Same tree with every path run through `affine`.
    pub fn transformed(&self, affine: &Affine2<f64>) -> Group {
        Group {
            children: self
                .children
                .iter()
                .map(|child| match child {
                    Item::Path(path) => Item::Path(path.transformed(affine)),
                    Item::Group(group) => Item::Group(group.transformed(affine)),
                })
                .collect(),
            ..self.clone()
        }
    }

    /// Bounds of every path in the tree, or None when there is nothing to measure.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.paths()
            .iter()
            .filter_map(|p| p.bounds())
            .reduce(|a, b| {
                Rect::new(
                    coord! {x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y)},
                    coord! {x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y)},
                )
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::Point;

    #[test]
    fn test_nested_paths() {
        let mut inner = Group::new("inner");
        inner.add(Path::circle(Point::new(0.0, 0.0), 1.0));
        inner.add(Path::circle(Point::new(5.0, 0.0), 1.0));
        let mut root = Group::new("root");
        root.add(Path::circle(Point::new(-5.0, 0.0), 1.0))
            .add_group(inner);
        assert_eq!(root.len(), 2);
        assert_eq!(root.path_count(), 3);
        assert_eq!(root.paths().len(), 3);
        assert!(root.group("inner").is_some());
        let b = root.bounds().unwrap();
        assert_eq!(b.min().x, -6.0);
        assert_eq!(b.max().x, 6.0);
        root.clear();
        assert!(root.is_empty());
        assert!(root.bounds().is_none());
    }
}
