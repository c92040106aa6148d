use geo_types::{coord, LineString, MultiPolygon, Rect};
use nalgebra::{Affine2, Matrix3};
use svg::node::element::path::Data;
use svg::node::element::{Circle as SvgCircle, Group as SvgGroup, Path as SvgPath};
use svg::node::Node;
use svg::Document;

use crate::document::color::{alpha, svg_rgb};
use crate::document::{Group, Item, Path, Shape};

/// An arrangement is a plan for placing the document inside the svg viewbox
pub enum Arrangement {
    Transform(Rect<f64>, Affine2<f64>),
}

impl Arrangement {
    /// Draw as-is inside `window`.
    pub fn unit(window: &Rect<f64>) -> Arrangement {
        Arrangement::Transform(
            *window,
            Affine2::from_matrix_unchecked(Matrix3::new(
                1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0,
            )),
        )
    }

    /// Window from the origin with the given size.
    pub fn canvas(width: f64, height: f64) -> Arrangement {
        Arrangement::unit(&Rect::new(coord! {x: 0.0, y: 0.0}, coord! {x: width, y: height}))
    }

    pub fn viewbox(&self) -> Rect<f64> {
        match self {
            Arrangement::Transform(viewbox, _) => *viewbox,
        }
    }

    pub fn affine(&self) -> Affine2<f64> {
        match self {
            Arrangement::Transform(_, affine) => *affine,
        }
    }

    pub fn create_svg_document(&self) -> Document {
        let viewbox = self.viewbox();
        Document::new()
            .set(
                "viewBox",
                (viewbox.min().x, viewbox.min().y, viewbox.width(), viewbox.height()),
            )
            .set("width", viewbox.width())
            .set("height", viewbox.height())
    }
}

pub trait ToSvg {
    /// Convert into an svg node, moved into place by the arrangement.
    fn to_svg(&self, arrangement: &Arrangement) -> Box<dyn Node>;
}

/// Path data for a polyline. Closed rings get a `Z`.
pub fn linestring_data(data: Data, line: &LineString<f64>) -> Data {
    let mut data = data;
    let closed = line.0.len() > 2 && line.is_closed();
    let count = if closed { line.0.len() - 1 } else { line.0.len() };
    for (i, c) in line.0.iter().take(count).enumerate() {
        data = if i == 0 {
            data.move_to((c.x, c.y))
        } else {
            data.line_to((c.x, c.y))
        };
    }
    if closed {
        data = data.close();
    }
    data
}

pub fn multipolygon_data(area: &MultiPolygon<f64>) -> Data {
    let mut data = Data::new();
    for poly in area.iter() {
        data = linestring_data(data, poly.exterior());
        for interior in poly.interiors() {
            data = linestring_data(data, interior);
        }
    }
    data
}

fn styled<T: Node>(mut node: T, path: &Path) -> T {
    match &path.fill {
        Some(fill) => {
            node.assign("fill", svg_rgb(fill));
            if alpha(fill) < 1.0 {
                node.assign("fill-opacity", alpha(fill));
            }
        }
        None => node.assign("fill", "none"),
    }
    if let Some(stroke) = &path.stroke {
        node.assign("stroke", svg_rgb(stroke));
        node.assign("stroke-width", path.stroke_width);
        if alpha(stroke) < 1.0 {
            node.assign("stroke-opacity", alpha(stroke));
        }
    }
    if let Some(dash) = &path.dash {
        let pattern: Vec<String> = dash.iter().map(|d| d.to_string()).collect();
        node.assign("stroke-dasharray", pattern.join(","));
    }
    node
}

impl ToSvg for Path {
    fn to_svg(&self, arrangement: &Arrangement) -> Box<dyn Node> {
        let placed = self.transformed(&arrangement.affine());
        match &placed.shape {
            Shape::Circle { center, radius } => Box::new(styled(
                SvgCircle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", radius.abs()),
                &placed,
            )),
            Shape::Polyline(line) => Box::new(styled(
                SvgPath::new().set("d", linestring_data(Data::new(), line)),
                &placed,
            )),
            Shape::Area(area) => Box::new(styled(
                SvgPath::new()
                    .set("d", multipolygon_data(area))
                    .set("fill-rule", "evenodd"),
                &placed,
            )),
        }
    }
}

impl ToSvg for Group {
    /// Hidden groups still produce an (empty) node so ids line up.
    fn to_svg(&self, arrangement: &Arrangement) -> Box<dyn Node> {
        let mut group = SvgGroup::new().set("id", self.name.clone());
        if self.opacity < 1.0 {
            group = group.set("opacity", self.opacity);
        }
        if !self.visible {
            return Box::new(group.set("display", "none"));
        }
        for child in &self.children {
            group = match child {
                Item::Path(path) if path.is_empty() => group,
                Item::Path(path) => group.add(path.to_svg(arrangement)),
                Item::Group(inner) => group.add(inner.to_svg(arrangement)),
            };
        }
        Box::new(group)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::document::color::{rgba, white};
    use geo_types::Point;

    #[test]
    fn test_circle_node() {
        let path = Path::circle(Point::new(10.0, 20.0), 5.0).stroke(&rgba(1.0, 0.0, 0.0, 0.5), 2.0);
        let node = path.to_svg(&Arrangement::canvas(100.0, 100.0));
        let text = node.to_string();
        assert!(text.starts_with("<circle"));
        assert!(text.contains("cx=\"10\""));
        assert!(text.contains("r=\"5\""));
        assert!(text.contains("stroke=\"rgb(255,0,0)\""));
        assert!(text.contains("stroke-opacity=\"0.5\""));
        assert!(text.contains("fill=\"none\""));
    }

    #[test]
    fn test_closed_polyline_data() {
        let line = LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]);
        let path = Path::polyline(line).stroke(&white(), 1.0);
        let text = path.to_svg(&Arrangement::canvas(100.0, 100.0)).to_string();
        assert!(text.contains("d=\"M0,0 L10,0 L10,10 z\""));
    }

    #[test]
    fn test_hidden_group_has_no_children() {
        let mut group = Group::new("blueprint");
        group.add(Path::circle(Point::new(0.0, 0.0), 1.0));
        group.visible = false;
        let text = group.to_svg(&Arrangement::canvas(10.0, 10.0)).to_string();
        assert!(text.contains("display=\"none\""));
        assert!(!text.contains("<circle"));
    }

    #[test]
    fn test_document_viewbox() {
        let doc = Arrangement::canvas(500.0, 400.0).create_svg_document();
        assert!(doc.to_string().contains("viewBox=\"0 0 500 400\""));
    }
}
